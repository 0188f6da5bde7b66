pub mod quiz_ctx;
pub mod quiz_flow;

pub use quiz_ctx::{QuizSession, SessionState};
pub use quiz_flow::{QuizFlow, QuizSummary};
