use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::{Category, NewQuestion, Question, SeedData};
use crate::store::{CategoryStore, QuestionStore, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    next_id: i64,
}

/// 内存存储
///
/// 用 `BTreeMap` 保存数据，天然按 `id` 升序输出。
/// 只保证单次调用的原子性，不提供跨调用的快照隔离。
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用分类和带 id 的题目构建存储
    ///
    /// 每道题都必须引用已存在的分类、题干和答案非空、难度在 `difficulty_range` 内
    pub fn with_data(
        categories: Vec<Category>,
        questions: Vec<Question>,
        difficulty_range: RangeInclusive<u8>,
    ) -> StoreResult<Self> {
        let mut tables = Tables::default();

        for category in categories {
            let id = category.id;
            if tables.categories.insert(id, category).is_some() {
                return Err(StoreError::DuplicateCategory(id));
            }
        }

        for question in questions {
            let id = question.id;
            if !tables.categories.contains_key(&question.category) {
                warn!("题目 #{} 引用了不存在的分类 {}", id, question.category);
                return Err(StoreError::UnknownCategory {
                    question: id,
                    category: question.category,
                });
            }
            if question.question.trim().is_empty() || question.answer.trim().is_empty() {
                warn!("题目 #{} 的题干或答案为空", id);
                return Err(StoreError::InvalidQuestion(id, "question and answer must not be blank"));
            }
            if !difficulty_range.contains(&question.difficulty) {
                warn!("题目 #{} 难度 {} 超出范围 {:?}", id, question.difficulty, difficulty_range);
                return Err(StoreError::InvalidQuestion(id, "difficulty out of range"));
            }
            if tables.questions.insert(id, question).is_some() {
                return Err(StoreError::DuplicateQuestion(id));
            }
        }

        tables.next_id = tables.questions.keys().next_back().copied().unwrap_or(0) + 1;

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// 从种子数据构建存储，未指定 id 的题目按顺序分配
    pub fn from_seed(seed: SeedData, difficulty_range: RangeInclusive<u8>) -> StoreResult<Self> {
        let mut next_id = seed
            .questions
            .iter()
            .filter_map(|q| q.id)
            .max()
            .unwrap_or(0);

        let questions = seed
            .questions
            .into_iter()
            .map(|q| {
                let id = q.id.unwrap_or_else(|| {
                    next_id += 1;
                    next_id
                });
                Question {
                    id,
                    question: q.question,
                    answer: q.answer,
                    category: q.category,
                    difficulty: q.difficulty,
                }
            })
            .collect();

        Self::with_data(seed.categories, questions, difficulty_range)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Poisoned("read"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Poisoned("write"))
    }
}

impl QuestionStore for InMemoryStore {
    fn list_all(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    fn get(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    fn create(&self, new_question: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;
        let id = tables.next_id.max(1);
        tables.next_id = id + 1;

        let question = Question {
            id,
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        tables.questions.insert(id, question.clone());
        debug!("新增题目 #{}", id);

        Ok(question)
    }

    fn delete(&self, id: i64) -> StoreResult<bool> {
        let removed = self.write()?.questions.remove(&id).is_some();
        debug!("删除题目 #{}: {}", id, removed);
        Ok(removed)
    }
}

impl CategoryStore for InMemoryStore {
    fn list_all(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn get(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }
}
