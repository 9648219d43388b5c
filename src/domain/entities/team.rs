//! Team - Tournament Team Entity
//!
//! Immutable value object built once from a raw record. Teams are ordered by
//! `(group, team_name)`; equality uses the same key, so two teams with the same
//! name in the same group compare equal regardless of their other fields.
//!
//! ## Example
//! ```rust
//! use tournament_teams::domain::entities::{Team, TeamRecord};
//!
//! let team = Team::from(TeamRecord {
//!     city: "Doha".to_string(),
//!     team: "Qatar".to_string(),
//!     team_id: "1".to_string(),
//!     team_type: "national".to_string(),
//!     geo: "Asia".to_string(),
//!     grouping: "A".to_string(),
//! });
//! assert_eq!(team.to_string(), "Team Qatar - Group A");
//! ```

use crate::domain::entities::record::{RawRecord, TeamRecord};
use crate::domain::errors::RecordError;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// 球队
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    city: String,
    team_name: String,
    team_id: String,
    /// 绝大多数情况下为 "national"
    #[serde(rename = "type")]
    team_type: String,
    geo: String,
    group: String,
}

impl Team {
    /// Builds a team from a raw field mapping
    ///
    /// # Errors
    /// `RecordError::MissingField` if any of `city, team, team_id, type, geo,
    /// grouping` is absent.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, RecordError> {
        TeamRecord::from_raw(raw).map(Self::from)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn team_type(&self) -> &str {
        &self.team_type
    }

    pub fn geo(&self) -> &str {
        &self.geo
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// 排序键 `(group, team_name)`
    #[inline]
    pub fn sort_key(&self) -> (&str, &str) {
        (self.group.as_str(), self.team_name.as_str())
    }
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Self {
            city: record.city,
            team_name: record.team,
            team_id: record.team_id,
            team_type: record.team_type,
            geo: record.geo,
            group: record.grouping,
        }
    }
}

impl TryFrom<&RawRecord> for Team {
    type Error = RecordError;

    fn try_from(raw: &RawRecord) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Team {}

impl PartialOrd for Team {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Team {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {} - Group {}", self.team_name, self.group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, group: &str, id: &str) -> Team {
        Team::from(TeamRecord {
            city: format!("{} City", name),
            team: name.to_string(),
            team_id: id.to_string(),
            team_type: "national".to_string(),
            geo: "Europe".to_string(),
            grouping: group.to_string(),
        })
    }

    #[test]
    fn test_from_raw() {
        let raw: RawRecord = [
            ("city", "Lisbon"),
            ("team", "Portugal"),
            ("team_id", "7"),
            ("type", "national"),
            ("geo", "Europe"),
            ("grouping", "H"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let team = Team::try_from(&raw).unwrap();
        assert_eq!(team.city(), "Lisbon");
        assert_eq!(team.team_name(), "Portugal");
        assert_eq!(team.team_id(), "7");
        assert_eq!(team.team_type(), "national");
        assert_eq!(team.geo(), "Europe");
        assert_eq!(team.group(), "H");
    }

    #[test]
    fn test_from_raw_missing_field() {
        let raw: RawRecord = [("team", "Portugal")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert!(matches!(
            Team::from_raw(&raw),
            Err(RecordError::MissingField { field: "city", .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(team("Brazil", "G", "3").to_string(), "Team Brazil - Group G");
    }

    #[test]
    fn test_order_group_first() {
        // 组别优先于队名
        assert!(team("Argentina", "C", "1") > team("Zambia", "B", "2"));
        assert!(team("Argentina", "C", "1") < team("Brazil", "C", "3"));
    }

    #[test]
    fn test_equality_is_structural_on_key() {
        let a = team("Spain", "E", "10");
        let b = team("Spain", "E", "99");
        let c = team("Spain", "F", "10");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialize_uses_type_field() {
        let json = serde_json::to_value(team("Japan", "E", "21")).unwrap();
        assert_eq!(json["type"], "national");
        assert_eq!(json["team_name"], "Japan");
        assert_eq!(json["group"], "E");
    }
}
