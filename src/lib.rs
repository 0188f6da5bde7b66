//! # Trivia Quiz
//!
//! 题库答题服务的核心：分页、搜索、创建/删除校验以及逐题答题的选题逻辑
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 存储层（Store）
//! - `store/` - `QuestionStore` / `CategoryStore` 接口，由调用方注入
//! - `InMemoryStore` - 内存实现，按 id 升序输出
//!
//! ### ② 业务能力层（Services）
//! - `pagination` - 固定页大小、从 1 开始的分页
//! - `search` - 题干不区分大小写的子串搜索
//! - `quiz_selector` - 从未出过的题目中均匀随机选一道
//! - `validation` - 创建、删除、分类过滤的校验
//! - `QuestionService` - 面向传输层的操作入口
//!
//! ### ③ 流程层（Workflow）
//! - `QuizSession` - 调用方持有的答题会话（Active → Exhausted）
//! - `QuizFlow` - 驱动会话逐题推进
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 加载种子数据并运行一次完整流程
//!
//! ## 模块结构

pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod store;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{QuizError, Result, StoreError};
pub use models::{Category, NewQuestion, Question, QuestionDraft};
pub use orchestrator::App;
pub use services::{
    paginate, Page, PageRequest, QuestionService, QuizOutcome, QuizRequest, RandomSource,
};
pub use store::{CategoryStore, InMemoryStore, QuestionStore};
pub use workflow::{QuizFlow, QuizSession, QuizSummary};
