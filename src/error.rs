use thiserror::Error;

/// 核心业务错误
///
/// 每个变体的触发条件互不重叠，传输层按 [`QuizError::status_code`] 映射为响应码
#[derive(Error, Debug)]
pub enum QuizError {
    /// 输入格式错误或结构不完整（空搜索词、缺少必填字段、缺少答题历史）
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 引用的资源不存在（超出范围的页码、不存在的分类详情）
    #[error("resource not found: {0}")]
    NotFound(String),
    /// 输入格式正确但违反业务规则（删除不存在的题目、分类不存在、难度越界）
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    /// 存储层错误，原样向上传递
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 存储层错误
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store lock poisoned: {0}")]
    Poisoned(&'static str),
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(i64),
    #[error("duplicate category id: {0}")]
    DuplicateCategory(i64),
    #[error("question {question} references unknown category {category}")]
    UnknownCategory { question: i64, category: i64 },
    #[error("invalid question {0}: {1}")]
    InvalidQuestion(i64, &'static str),
}

// ========== 便捷构造函数 ==========

impl QuizError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        QuizError::BadRequest(reason.into())
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        QuizError::NotFound(reason.into())
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        QuizError::Unprocessable(reason.into())
    }

    /// 传输层使用的状态码
    pub fn status_code(&self) -> u16 {
        match self {
            QuizError::BadRequest(_) => 400,
            QuizError::NotFound(_) => 404,
            QuizError::Unprocessable(_) => 422,
            QuizError::Store(_) => 500,
        }
    }

    /// 传输层使用的标准错误消息
    pub fn message(&self) -> &'static str {
        match self {
            QuizError::BadRequest(_) => "bad request",
            QuizError::NotFound(_) => "resource not found",
            QuizError::Unprocessable(_) => "unprocessable",
            QuizError::Store(_) => "internal server error",
        }
    }
}

// ========== Result 类型别名 ==========

/// 核心操作结果类型
pub type Result<T> = std::result::Result<T, QuizError>;
