//! Domain Errors
//!
//! 领域层错误类型，全部为确定性错误（同样的输入总是得到同样的错误），
//! 不重试、不做部分恢复，直接返回给调用方。
//!
//! - `RecordError`: 由原始字段映射构造实体失败
//! - `CollectionError`: 球队集合的位置/标识查找失败

use crate::domain::collection::LookupKey;

/// 实体构造错误
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A required field is absent from the raw record
    #[error("{entity} record is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// The match date is not a valid ISO-8601 timestamp
    #[error("invalid ISO-8601 date '{value}': {source}")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// 球队集合错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// Position is outside `[0, len)`
    #[error("position {position} out of range for collection of length {len}")]
    IndexOutOfRange { position: usize, len: usize },

    /// Neither a position nor a team identifier matched
    #[error("no team at position or with identifier {key}")]
    NotFound { key: LookupKey },
}
