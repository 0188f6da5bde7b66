//! 应用主结构 - 编排层
//!
//! 加载种子数据、构建存储层，然后走一遍列表 → 答题的完整流程

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::QuizError;
use crate::models::load_seed_file;
use crate::services::QuestionService;
use crate::store::InMemoryStore;
use crate::utils::logging::{init_log_file, log_startup, print_final_stats};
use crate::utils::truncate_text;
use crate::workflow::{QuizFlow, QuizSession, QuizSummary};

/// 应用主结构
pub struct App {
    config: Config,
    store: InMemoryStore,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(config.page_size().get(), &config.seed_file);

        // 加载种子数据
        let seed = load_seed_file(Path::new(&config.seed_file)).await?;
        let store = InMemoryStore::from_seed(seed, config.difficulty_range())
            .with_context(|| format!("无法构建题库: {}", config.seed_file))?;

        Ok(Self::with_store(config, store))
    }

    /// 使用已构建好的存储层创建应用
    pub fn with_store(config: Config, store: InMemoryStore) -> Self {
        Self { config, store }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<QuizSummary> {
        let service = QuestionService::new(&self.store, &self.config);

        let categories = match service.list_categories() {
            Ok(categories) => categories,
            Err(QuizError::NotFound(_)) => {
                warn!("⚠️ 题库中没有任何分类，程序结束");
                return Ok(QuizSummary::default());
            }
            Err(e) => return Err(e.into()),
        };
        info!("✓ 共 {} 个分类", categories.len());

        let listing = service.list_questions(service.page_request(None))?;
        info!(
            "✓ 第 1 页: {} 个题目 / 共 {} 个",
            listing.questions.len(),
            listing.total_questions
        );
        if self.config.verbose_logging {
            for question in &listing.questions {
                info!("  {}", question);
            }
        }

        // 答题
        let flow = QuizFlow::new(&service);
        let mut session = QuizSession::new(None);
        let mut rng = rand::thread_rng();
        let summary = flow.play(&mut session, self.config.quiz_rounds, &mut rng)?;

        for (round, question) in summary.served.iter().enumerate() {
            info!(
                "📝 第 {} 题: {} → {}",
                round + 1,
                truncate_text(&question.question, 60),
                question.answer
            );
        }

        print_final_stats(
            summary.served.len(),
            listing.total_questions,
            summary.exhausted,
            &self.config.output_log_file,
        );

        Ok(summary)
    }
}
