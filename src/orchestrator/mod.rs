//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 持有存储层和配置，串起加载、列表和答题流程，只做调度和统计。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (加载种子数据, 持有 InMemoryStore)
//!     ↓
//! workflow::QuizFlow (驱动一次答题会话)
//!     ↓
//! services (能力层：pagination / search / quiz_selector / validation)
//!     ↓
//! store (存储层接口：QuestionStore / CategoryStore)
//! ```

pub mod app;

pub use app::App;
