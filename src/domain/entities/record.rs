//! Raw records
//!
//! 摄取层交给领域层的原始记录：字段名 → 文本值。
//! 每个实体有一个显式的记录结构体，列出必填/可选字段，
//! 在构造边界上一次性取值，缺失的必填字段立即失败。

use crate::domain::errors::RecordError;
use std::collections::HashMap;

/// 原始记录（CSV 一行，表头为键）
pub type RawRecord = HashMap<String, String>;

/// 取必填字段，缺失时返回 `MissingField`
pub(crate) fn required(
    raw: &RawRecord,
    entity: &'static str,
    field: &'static str,
) -> Result<String, RecordError> {
    raw.get(field)
        .cloned()
        .ok_or(RecordError::MissingField { entity, field })
}

/// 取可选字段，缺失时为 `None`（空字符串按原值保留）
pub(crate) fn optional(raw: &RawRecord, field: &str) -> Option<String> {
    raw.get(field).cloned()
}

/// Field set of a team record. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub city: String,
    pub team: String,
    pub team_id: String,
    pub team_type: String,
    pub geo: String,
    pub grouping: String,
}

impl TeamRecord {
    pub const ENTITY: &'static str = "team";

    /// Extracts the team fields, failing on the first missing one
    pub fn from_raw(raw: &RawRecord) -> Result<Self, RecordError> {
        Ok(Self {
            city: required(raw, Self::ENTITY, "city")?,
            team: required(raw, Self::ENTITY, "team")?,
            team_id: required(raw, Self::ENTITY, "team_id")?,
            team_type: required(raw, Self::ENTITY, "type")?,
            geo: required(raw, Self::ENTITY, "geo")?,
            grouping: required(raw, Self::ENTITY, "grouping")?,
        })
    }
}

/// Field set of a match record.
///
/// Everything is optional except `date`; an absent date is kept as an empty
/// string so that it fails the date parse like any other malformed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchRecord {
    pub match_id: Option<String>,
    pub label: Option<String>,
    pub group: Option<String>,
    pub date: String,
    pub home: Option<String>,
    pub away: Option<String>,
    pub winner: Option<String>,
    pub home_score: Option<String>,
    pub away_score: Option<String>,
}

impl MatchRecord {
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            match_id: optional(raw, "match_id"),
            label: optional(raw, "label"),
            group: optional(raw, "group"),
            date: optional(raw, "date").unwrap_or_default(),
            home: optional(raw, "home"),
            away: optional(raw, "away"),
            winner: optional(raw, "winner"),
            home_score: optional(raw, "home_score"),
            away_score: optional(raw, "away_score"),
        }
    }
}
