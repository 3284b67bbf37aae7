//! 错误类型
//!
//! 校验错误在任何修改之前同步返回；评测故障只影响单个测试用例；
//! 存储错误对触发它的操作是致命的，不重试。

/// 题目或持久化记录的校验错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("At least one test case is required")]
    NoTestCases,

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Duplicate problem id: {0}")]
    DuplicateId(i64),

    #[error("Result out of order: expected index {expected}, found {found}")]
    ResultOrder { expected: usize, found: usize },

    #[error("Submission {0} passed flag does not match its results")]
    PassedMismatch(i64),

    #[error("Invalid timestamp: {0}")]
    BadTimestamp(String),
}

/// 单个测试用例评测时的故障
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationFault {
    #[error("Integer out of range: {0}")]
    IntegerOutOfRange(String),

    #[error("Integer overflow computing {0}")]
    Overflow(&'static str),
}

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt value under key '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("State lock poisoned")]
    Lock,

    #[error("Problem not found: {0}")]
    ProblemNotFound(i64),
}

pub type StoreResult<T> = Result<T, StoreError>;
