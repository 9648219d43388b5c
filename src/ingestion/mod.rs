//! Ingestion Layer - CSV Data Sources
//!
//! 读取带表头的 CSV 文件，每行转为 `RawRecord`（表头 → 文本值），
//! 再交给领域层构造 `Team` / `Match`。文件路径全部由调用方提供。
//!
//! 任何一行构造失败都会立即返回错误（附带行号），不跳过坏行。

pub mod csv_source;

pub use csv_source::{
    load_matches, load_matches_from_reader, load_team_collection, load_teams,
    load_teams_from_reader, read_raw_records, IngestionConfig, IngestionError,
};
