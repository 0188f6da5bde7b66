//! 答题流程 - 流程层
//!
//! 核心职责：驱动一次答题会话
//!
//! 流程顺序：
//! 1. 会话 → 选题请求 → 选题器
//! 2. 拿到题目 → 记录 id，继续
//! 3. 题目用尽 → 会话进入 Exhausted，之后不再访问存储层

use tracing::{debug, info};

use crate::error::Result;
use crate::models::Question;
use crate::services::{QuestionService, QuizOutcome, RandomSource};
use crate::store::{CategoryStore, QuestionStore};
use crate::workflow::quiz_ctx::QuizSession;

/// 一次答题的汇总
#[derive(Debug, Clone, Default)]
pub struct QuizSummary {
    /// 按出题顺序
    pub served: Vec<Question>,
    /// 是否因为题目用尽而结束
    pub exhausted: bool,
}

/// 答题流程
pub struct QuizFlow<'s, 'a, S: ?Sized> {
    service: &'s QuestionService<'a, S>,
}

impl<'s, 'a, S> QuizFlow<'s, 'a, S>
where
    S: QuestionStore + CategoryStore + ?Sized,
{
    pub fn new(service: &'s QuestionService<'a, S>) -> Self {
        Self { service }
    }

    /// 出下一道题
    pub fn advance<R: RandomSource + ?Sized>(
        &self,
        session: &mut QuizSession,
        rng: &mut R,
    ) -> Result<QuizOutcome> {
        if session.is_exhausted() {
            return Ok(QuizOutcome::Exhausted);
        }

        let request = session.request();
        let outcome = self.service.play_quiz(Some(&request), rng)?;

        match &outcome {
            QuizOutcome::Question(question) => {
                debug!("{} 出题 #{}", session, question.id);
                session.record(question.id);
            }
            QuizOutcome::Exhausted => {
                info!("{} 题目已用尽", session);
                session.finish();
            }
        }

        Ok(outcome)
    }

    /// 连续出题直到用尽，`max_rounds` 为 0 时不限题数
    pub fn play<R: RandomSource + ?Sized>(
        &self,
        session: &mut QuizSession,
        max_rounds: usize,
        rng: &mut R,
    ) -> Result<QuizSummary> {
        let mut summary = QuizSummary::default();

        while max_rounds == 0 || summary.served.len() < max_rounds {
            match self.advance(session, rng)? {
                QuizOutcome::Question(question) => summary.served.push(question),
                QuizOutcome::Exhausted => {
                    summary.exhausted = true;
                    break;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::QuizError;
    use crate::models::Category;
    use crate::store::InMemoryStore;
    use crate::workflow::SessionState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn store() -> InMemoryStore {
        let questions = [(6, 3), (12, 3), (15, 3), (1, 1), (2, 2)]
            .into_iter()
            .map(|(id, category)| Question {
                id,
                question: format!("q{id}"),
                answer: format!("a{id}"),
                category,
                difficulty: 3,
            })
            .collect();
        InMemoryStore::with_data(
            vec![
                Category::new(1, "Science"),
                Category::new(2, "Art"),
                Category::new(3, "Geography"),
            ],
            questions,
            1..=5,
        )
        .unwrap()
    }

    #[test]
    fn test_play_until_exhausted() {
        let store = store();
        let config = Config::default();
        let service = QuestionService::new(&store, &config);
        let flow = QuizFlow::new(&service);
        let mut rng = StdRng::seed_from_u64(11);

        let mut session = QuizSession::new(None);
        let summary = flow.play(&mut session, 0, &mut rng).unwrap();

        assert!(summary.exhausted);
        assert_eq!(summary.served.len(), 5);
        let distinct: HashSet<i64> = summary.served.iter().map(|q| q.id).collect();
        assert_eq!(distinct.len(), 5);
        assert_eq!(session.state(), SessionState::Exhausted);
    }

    #[test]
    fn test_category_session_exhausts_on_fourth_call() {
        let store = store();
        let config = Config::default();
        let service = QuestionService::new(&store, &config);
        let flow = QuizFlow::new(&service);
        let mut rng = StdRng::seed_from_u64(5);

        let mut session = QuizSession::new(Some(3));
        for _ in 0..3 {
            let outcome = flow.advance(&mut session, &mut rng).unwrap();
            assert_eq!(outcome.question().map(|q| q.category), Some(3));
        }
        assert!(flow.advance(&mut session, &mut rng).unwrap().is_exhausted());
        assert_eq!(session.asked().len(), 3);
    }

    #[test]
    fn test_round_cap() {
        let store = store();
        let config = Config::default();
        let service = QuestionService::new(&store, &config);
        let flow = QuizFlow::new(&service);
        let mut rng = StdRng::seed_from_u64(9);

        let mut session = QuizSession::new(None);
        let summary = flow.play(&mut session, 2, &mut rng).unwrap();
        assert_eq!(summary.served.len(), 2);
        assert!(!summary.exhausted);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_exhausted_session_does_not_touch_store() {
        let store = store();
        let config = Config::default();
        let service = QuestionService::new(&store, &config);
        let flow = QuizFlow::new(&service);
        let mut rng = StdRng::seed_from_u64(0);

        // 不存在的分类在 Active 状态下会被拒绝
        let mut session = QuizSession::new(Some(1000));
        assert!(matches!(
            flow.advance(&mut session, &mut rng),
            Err(QuizError::Unprocessable(_))
        ));

        session.finish();
        assert!(flow.advance(&mut session, &mut rng).unwrap().is_exhausted());
    }
}
