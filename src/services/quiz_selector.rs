//! 答题选题器
//!
//! 每次调用都重新计算候选池：按分类过滤 → 去掉已出过的题 → 均匀随机选一道。
//! 候选池为空时返回 `Exhausted`，这是正常结束而不是错误。

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QuizError, Result};
use crate::models::Question;
use crate::services::validation::validate_category_filter;
use crate::store::{CategoryStore, QuestionStore};

/// 随机源
///
/// 所有 `rand::Rng` 都可直接使用；测试中可替换为确定性的实现
pub trait RandomSource {
    /// 返回 `[0, len)` 内的下标，`len` 保证大于 0
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// 答题请求中的分类，`id` 为 0 表示全部分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// 答题请求（由调用方持有的会话状态）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    /// 已出过的题目 id；字段缺失视为请求不完整
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn new(previous_questions: Vec<i64>, category_id: Option<i64>) -> Self {
        Self {
            previous_questions: Some(previous_questions),
            quiz_category: category_id.map(|id| QuizCategory { id, name: None }),
        }
    }

    /// 有效的分类过滤条件，0 视为不过滤
    pub fn category_filter(&self) -> Option<i64> {
        self.quiz_category
            .as_ref()
            .map(|c| c.id)
            .filter(|id| *id != 0)
    }
}

/// 选题结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Question(Question),
    /// 没有可出的题目了
    Exhausted,
}

impl QuizOutcome {
    pub fn question(&self) -> Option<&Question> {
        match self {
            QuizOutcome::Question(q) => Some(q),
            QuizOutcome::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizOutcome::Exhausted)
    }
}

/// 选出下一道未出过的题目
pub fn next_question<S, R>(
    store: &S,
    request: Option<&QuizRequest>,
    rng: &mut R,
) -> Result<QuizOutcome>
where
    S: QuestionStore + CategoryStore + ?Sized,
    R: RandomSource + ?Sized,
{
    let request = request.ok_or_else(|| QuizError::bad_request("quiz request body is missing"))?;
    let previous = request
        .previous_questions
        .as_ref()
        .ok_or_else(|| QuizError::bad_request("previous_questions is required"))?;

    let category = request.category_filter();
    if let Some(category_id) = category {
        validate_category_filter(store, category_id)?;
    }

    let pool = match category {
        Some(category_id) => store.list_by_category(category_id)?,
        None => QuestionStore::list_all(store)?,
    };

    let previous: HashSet<i64> = previous.iter().copied().collect();
    let mut eligible: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    debug!(
        "候选题目 {} 个 (分类: {:?}, 已出 {} 题)",
        eligible.len(),
        category,
        previous.len()
    );

    if eligible.is_empty() {
        return Ok(QuizOutcome::Exhausted);
    }

    let index = rng.pick_index(eligible.len()).min(eligible.len() - 1);
    Ok(QuizOutcome::Question(eligible.swap_remove(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::store::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    /// 按顺序返回预设下标的随机源
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn pick_index(&mut self, len: usize) -> usize {
            let next = if self.0.is_empty() { 0 } else { self.0.remove(0) };
            next % len
        }
    }

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 2,
        }
    }

    /// 分类 3 恰好有 6、12、15 三道题
    fn store() -> InMemoryStore {
        InMemoryStore::with_data(
            vec![
                Category::new(1, "Science"),
                Category::new(2, "Art"),
                Category::new(3, "Geography"),
            ],
            vec![
                question(1, 1),
                question(2, 2),
                question(6, 3),
                question(9, 1),
                question(12, 3),
                question(15, 3),
            ],
            1..=5,
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_previous_six_and_twelve_in_category_three() {
        let store = store();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let request = QuizRequest::new(vec![6, 12], Some(3));
            let outcome = next_question(&store, Some(&request), &mut rng).unwrap();
            assert_eq!(outcome.question().map(|q| q.id), Some(15));
        }

        let mut rng = StdRng::seed_from_u64(7);
        let request = QuizRequest::new(vec![6, 12, 15], Some(3));
        let outcome = next_question(&store, Some(&request), &mut rng).unwrap();
        assert!(outcome.is_exhausted());
    }

    #[test]
    fn test_serves_every_question_once_then_exhausted() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = Vec::new();

        loop {
            let request = QuizRequest::new(previous.clone(), None);
            match next_question(&store, Some(&request), &mut rng).unwrap() {
                QuizOutcome::Question(q) => {
                    assert!(!previous.contains(&q.id));
                    previous.push(q.id);
                }
                QuizOutcome::Exhausted => break,
            }
        }

        previous.sort();
        assert_eq!(previous, vec![1, 2, 6, 9, 12, 15]);
    }

    #[test]
    fn test_category_constraint_holds() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let request = QuizRequest::new(vec![], Some(1));
            let q = next_question(&store, Some(&request), &mut rng).unwrap();
            assert_eq!(q.question().map(|q| q.category), Some(1));
        }
    }

    #[test]
    fn test_every_eligible_question_is_reachable() {
        let store = store();
        let request = QuizRequest::new(vec![1], None);
        let mut seen = HashSet::new();
        for index in 0..5 {
            let mut rng = Scripted(vec![index]);
            let q = next_question(&store, Some(&request), &mut rng).unwrap();
            seen.insert(q.question().map(|q| q.id).unwrap());
        }
        assert_eq!(seen, HashSet::from([2, 6, 9, 12, 15]));
    }

    #[test]
    fn test_unknown_category_is_unprocessable() {
        let mut rng = StdRng::seed_from_u64(0);
        let request = QuizRequest::new(vec![], Some(1000));
        assert!(matches!(
            next_question(&store(), Some(&request), &mut rng),
            Err(QuizError::Unprocessable(_))
        ));
    }

    #[test]
    fn test_category_zero_means_all_categories() {
        let mut rng = StdRng::seed_from_u64(0);
        let request = QuizRequest::new(vec![1, 2, 6, 9, 12], Some(0));
        let q = next_question(&store(), Some(&request), &mut rng).unwrap();
        assert_eq!(q.question().map(|q| q.id), Some(15));
    }

    #[test]
    fn test_missing_history_is_bad_request() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            next_question(&store(), None, &mut rng),
            Err(QuizError::BadRequest(_))
        ));

        let request: QuizRequest = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            next_question(&store(), Some(&request), &mut rng),
            Err(QuizError::BadRequest(_))
        ));
    }

    #[test]
    fn test_request_deserializes_client_payload() {
        let request: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [6, 12],
            "quiz_category": {"id": 3, "type": "Geography"}
        }))
        .unwrap();
        assert_eq!(request.previous_questions, Some(vec![6, 12]));
        assert_eq!(request.category_filter(), Some(3));
    }
}
