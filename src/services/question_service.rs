/// 题目服务
///
/// 面向传输层的操作入口：组合分页、搜索、校验和选题，对注入的存储层执行读写
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{QuizError, Result};
use crate::models::{Category, Question, QuestionDraft};
use crate::services::pagination::{paginate, PageRequest};
use crate::services::quiz_selector::{self, QuizOutcome, QuizRequest, RandomSource};
use crate::services::search;
use crate::services::validation::{parse_question_id, validate_category_filter, validate_new_question};
use crate::store::{CategoryStore, QuestionStore};

/// 题目列表（分页）
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    /// 当前页第一道题所属分类
    pub current_category: Option<Category>,
}

/// 某分类下的题目（分页）
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Category,
}

/// 搜索结果
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// 创建结果，附带第一页题目
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// 删除结果，附带第一页题目
#[derive(Debug, Clone, Serialize)]
pub struct Deleted {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// 题目服务
pub struct QuestionService<'a, S: ?Sized> {
    store: &'a S,
    config: &'a Config,
}

impl<'a, S> QuestionService<'a, S>
where
    S: QuestionStore + CategoryStore + ?Sized,
{
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// 解析查询参数中的页码
    pub fn page_request(&self, raw_page: Option<&str>) -> PageRequest {
        PageRequest::from_query(raw_page, self.config.page_size())
    }

    /// 所有分类，没有任何分类时返回 NotFound
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = CategoryStore::list_all(self.store)?;
        if categories.is_empty() {
            return Err(QuizError::not_found("no categories available"));
        }
        Ok(categories)
    }

    pub fn get_category(&self, category_id: i64) -> Result<Category> {
        CategoryStore::get(self.store, category_id)?
            .ok_or_else(|| QuizError::not_found(format!("category {category_id} does not exist")))
    }

    /// 分页获取全部题目
    pub fn list_questions(&self, page: PageRequest) -> Result<QuestionListing> {
        let all = QuestionStore::list_all(self.store)?;
        let page = paginate(&all, page)?;
        let categories = CategoryStore::list_all(self.store)?;

        let current_category = page
            .items
            .first()
            .and_then(|q| categories.iter().find(|c| c.id == q.category))
            .cloned();

        debug!(
            "第 {} 页返回 {} 个题目, 共 {} 个",
            page.page_number,
            page.items.len(),
            page.total_count
        );

        Ok(QuestionListing {
            questions: page.items,
            total_questions: page.total_count,
            categories,
            current_category,
        })
    }

    /// 分页获取某分类下的题目，分类不存在返回 Unprocessable
    pub fn questions_by_category(&self, category_id: i64, page: PageRequest) -> Result<CategoryQuestions> {
        validate_category_filter(self.store, category_id)?;
        let current_category = self.get_category(category_id)?;

        let questions = self.store.list_by_category(category_id)?;
        let page = paginate(&questions, page)?;

        Ok(CategoryQuestions {
            questions: page.items,
            total_questions: page.total_count,
            current_category,
        })
    }

    /// 搜索题干，不分页
    pub fn search_questions(&self, term: &str) -> Result<SearchResults> {
        let questions = search::search(self.store, term)?;
        Ok(SearchResults {
            total_questions: questions.len(),
            questions,
        })
    }

    /// 创建题目，请求体缺失返回 BadRequest
    pub fn create_question(&self, draft: Option<QuestionDraft>) -> Result<Created> {
        let draft = draft.ok_or_else(|| QuizError::bad_request("question payload is missing"))?;
        let new_question = validate_new_question(draft, self.store, self.config.difficulty_range())?;

        let created = self.store.create(new_question)?;
        info!("✓ 创建题目 {}", created);

        let listing = self.list_questions(PageRequest::first(self.config.page_size()))?;
        Ok(Created {
            created: created.id,
            questions: listing.questions,
            total_questions: listing.total_questions,
        })
    }

    /// 删除题目：id 非整数返回 BadRequest，题目不存在返回 Unprocessable
    pub fn delete_question(&self, raw_id: &str) -> Result<Deleted> {
        let id = parse_question_id(raw_id)?;

        if !self.store.delete(id)? {
            return Err(QuizError::unprocessable(format!("question {id} does not exist")));
        }
        info!("✓ 删除题目 #{}", id);

        let listing = self.list_questions(PageRequest::first(self.config.page_size()))?;
        Ok(Deleted {
            deleted: id,
            questions: listing.questions,
            total_questions: listing.total_questions,
        })
    }

    /// 答题：返回下一道未出过的题目
    pub fn play_quiz<R: RandomSource + ?Sized>(
        &self,
        request: Option<&QuizRequest>,
        rng: &mut R,
    ) -> Result<QuizOutcome> {
        quiz_selector::next_question(self.store, request, rng)
    }
}
