//! 存储层接口
//!
//! 核心逻辑只通过这两个 trait 访问题目和分类数据，不持有任何全局连接。
//! 所有列表方法都按 `id` 升序返回。

pub mod memory;

pub use memory::InMemoryStore;

use regex::Regex;

use crate::error::StoreError;
use crate::models::{Category, NewQuestion, Question};
use crate::services::search::filter_questions;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// 题目存储
pub trait QuestionStore {
    fn list_all(&self) -> StoreResult<Vec<Question>>;

    fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// 题干匹配 `matcher` 的题目，默认在 `list_all` 结果上过滤
    fn search(&self, matcher: &Regex) -> StoreResult<Vec<Question>> {
        Ok(filter_questions(self.list_all()?, matcher))
    }

    fn get(&self, id: i64) -> StoreResult<Option<Question>>;

    fn create(&self, new_question: NewQuestion) -> StoreResult<Question>;

    /// 删除成功返回 true，题目不存在返回 false
    fn delete(&self, id: i64) -> StoreResult<bool>;
}

/// 分类存储（只读）
pub trait CategoryStore {
    fn list_all(&self) -> StoreResult<Vec<Category>>;

    fn get(&self, id: i64) -> StoreResult<Option<Category>>;

    fn exists(&self, id: i64) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}
