//! 答题会话上下文
//!
//! 封装"这一轮答题已经出过哪些题、限定哪个分类"这一信息，由调用方持有

use std::fmt::Display;

use crate::services::QuizRequest;

/// 会话状态，`Exhausted` 为终态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Exhausted,
}

/// 答题会话
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// 已出过的题目 id（按出题顺序）
    previous_questions: Vec<i64>,

    /// 分类过滤，None 表示全部分类
    category: Option<i64>,

    state: SessionState,
}

impl QuizSession {
    /// 创建新的答题会话
    pub fn new(category: Option<i64>) -> Self {
        Self {
            previous_questions: Vec::new(),
            category,
            state: SessionState::Active,
        }
    }

    /// 构造本次选题请求
    pub fn request(&self) -> QuizRequest {
        QuizRequest::new(self.previous_questions.clone(), self.category)
    }

    pub fn record(&mut self, question_id: i64) {
        self.previous_questions.push(question_id);
    }

    pub fn finish(&mut self) {
        self.state = SessionState::Exhausted;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == SessionState::Exhausted
    }

    pub fn asked(&self) -> &[i64] {
        &self.previous_questions
    }
}

impl Display for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.category {
            Some(category) => write!(
                f,
                "[答题 分类#{} 已出{}题]",
                category,
                self.previous_questions.len()
            ),
            None => write!(f, "[答题 全部分类 已出{}题]", self.previous_questions.len()),
        }
    }
}
