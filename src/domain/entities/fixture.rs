//! Match - Tournament Fixture Entity
//!
//! 比赛实体：除日期外所有字段都可缺失。日期必须是合法的 ISO-8601 字符串，
//! 否则构造失败。比赛本身没有排序关系，按日期排序由调用方完成（`sort_by_date`）。
//!
//! 主客队与胜者目前保存原始标识，不解析为 `Team`。

use crate::domain::entities::record::{MatchRecord, RawRecord};
use crate::domain::errors::RecordError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// 可接受的本地时间格式（`%.f` 的小数秒可省略）
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 date or date-time.
///
/// Accepts a plain date (midnight), a local date-time with `T` or space as the
/// separator, and RFC 3339 timestamps with an offset, which are normalized to
/// UTC.
pub fn parse_iso_datetime(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::default()))
}

/// 比赛
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    match_id: Option<String>,
    label: Option<String>,
    group: Option<String>,
    date: NaiveDateTime,
    home_team: Option<String>,
    away_team: Option<String>,
    winner: Option<String>,
    home_score: Option<String>,
    away_score: Option<String>,
}

impl Match {
    /// Builds a match from its record
    ///
    /// # Errors
    /// `RecordError::DateParse` if `date` is not a valid ISO-8601 value.
    pub fn from_record(record: MatchRecord) -> Result<Self, RecordError> {
        let date = parse_iso_datetime(&record.date).map_err(|source| RecordError::DateParse {
            value: record.date.clone(),
            source,
        })?;

        Ok(Self {
            match_id: record.match_id,
            label: record.label,
            group: record.group,
            date,
            home_team: record.home,
            away_team: record.away,
            winner: record.winner,
            home_score: record.home_score,
            away_score: record.away_score,
        })
    }

    /// Builds a match from a raw field mapping
    pub fn from_raw(raw: &RawRecord) -> Result<Self, RecordError> {
        Self::from_record(MatchRecord::from_raw(raw))
    }

    pub fn match_id(&self) -> Option<&str> {
        self.match_id.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// 主队标识（未解析）
    pub fn home_team(&self) -> Option<&str> {
        self.home_team.as_deref()
    }

    /// 客队标识（未解析）
    pub fn away_team(&self) -> Option<&str> {
        self.away_team.as_deref()
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn home_score(&self) -> Option<&str> {
        self.home_score.as_deref()
    }

    pub fn away_score(&self) -> Option<&str> {
        self.away_score.as_deref()
    }

    /// Final score as `(home, away)` when both sides parse as integers
    pub fn score(&self) -> Option<(u32, u32)> {
        let home = self.home_score.as_deref()?.trim().parse().ok()?;
        let away = self.away_score.as_deref()?.trim().parse().ok()?;
        Some((home, away))
    }
}

impl TryFrom<&RawRecord> for Match {
    type Error = RecordError;

    fn try_from(raw: &RawRecord) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match: {}", self.label.as_deref().unwrap_or_default())
    }
}

/// 按日期稳定排序（同一时间的比赛保持原有顺序）
pub fn sort_by_date(matches: &mut [Match]) {
    matches.sort_by_key(|m| m.date);
}
