use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MIN_DIFFICULTY: u8 = 1;
const DEFAULT_MAX_DIFFICULTY: u8 = 5;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 每页题目数量
    pub page_size: usize,
    /// 难度下限（含）
    pub min_difficulty: u8,
    /// 难度上限（含）
    pub max_difficulty: u8,
    /// 种子数据 TOML 文件
    pub seed_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 单次答题最多出题数，0 表示直到题目用尽
    pub quiz_rounds: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_difficulty: DEFAULT_MIN_DIFFICULTY,
            max_difficulty: DEFAULT_MAX_DIFFICULTY,
            seed_file: "data/trivia_seed.toml".to_string(),
            output_log_file: "output.txt".to_string(),
            verbose_logging: false,
            quiz_rounds: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            page_size: std::env::var("QUESTIONS_PER_PAGE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_size),
            min_difficulty: std::env::var("MIN_DIFFICULTY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_difficulty),
            max_difficulty: std::env::var("MAX_DIFFICULTY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_difficulty),
            seed_file: std::env::var("SEED_FILE").unwrap_or(default.seed_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            quiz_rounds: std::env::var("QUIZ_ROUNDS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.quiz_rounds),
        }
    }

    /// 每页数量，配置为 0 时回退到默认值
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size)
            .or_else(|| NonZeroUsize::new(DEFAULT_PAGE_SIZE))
            .unwrap_or(NonZeroUsize::MIN)
    }

    /// 合法难度区间，上下限颠倒时回退到默认值
    pub fn difficulty_range(&self) -> RangeInclusive<u8> {
        if self.min_difficulty <= self.max_difficulty {
            self.min_difficulty..=self.max_difficulty
        } else {
            DEFAULT_MIN_DIFFICULTY..=DEFAULT_MAX_DIFFICULTY
        }
    }
}
