//! 球队/比赛数据模型与定长有序球队集合
//!
//! 分层结构：
//! - `shared`: 通用数据结构（定长环形缓冲区）
//! - `domain`: 纯内存领域逻辑（Team、Match、TeamCollection），无 I/O
//! - `ingestion`: CSV 读取，把原始记录交给领域层
//! - `interfaces`: 命令行入口

pub mod shared;
pub mod domain;
pub mod ingestion;
pub mod interfaces;

// Re-export the core API
pub use domain::{
    CollectionError, LookupKey, Match, RawRecord, RecordError, SharedTeamCollection, Team,
    TeamCollection, TEAM_CAPACITY,
};
