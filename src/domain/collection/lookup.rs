//! Lookup keys for the hybrid accessor
//!
//! `TeamCollection::get` 接受位置或球队标识：先按位置查，位置越界或键不是整数时
//! 再按标识线性扫描。整数键回退时使用其十进制文本与 `team_id` 比较。

use std::borrow::Cow;
use std::fmt;

/// 查找键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// Buffer position, negative values count from the end
    Position(i64),
    /// Team identifier
    Id(String),
}

impl LookupKey {
    /// Parses user input: integer text becomes a position, anything else an id
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<i64>() {
            Ok(position) => LookupKey::Position(position),
            Err(_) => LookupKey::Id(text.to_string()),
        }
    }

    /// 标识文本形式（整数键转为十进制文本）
    pub fn id_text(&self) -> Cow<'_, str> {
        match self {
            LookupKey::Position(position) => Cow::Owned(position.to_string()),
            LookupKey::Id(id) => Cow::Borrowed(id),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Position(position) => write!(f, "{}", position),
            LookupKey::Id(id) => write!(f, "'{}'", id),
        }
    }
}

impl From<i64> for LookupKey {
    fn from(position: i64) -> Self {
        LookupKey::Position(position)
    }
}

impl From<i32> for LookupKey {
    fn from(position: i32) -> Self {
        LookupKey::Position(i64::from(position))
    }
}

impl From<usize> for LookupKey {
    fn from(position: usize) -> Self {
        LookupKey::Position(i64::try_from(position).unwrap_or(i64::MAX))
    }
}

impl From<&str> for LookupKey {
    fn from(id: &str) -> Self {
        LookupKey::Id(id.to_string())
    }
}

impl From<String> for LookupKey {
    fn from(id: String) -> Self {
        LookupKey::Id(id)
    }
}

/// 查找方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Positional access into the current buffer order
    Position,
    /// Linear scan over team identifiers
    Identifier,
}

/// Order in which `TeamCollection::get` tries the lookup modes.
///
/// The identifier scan only runs after a positional miss.
pub const LOOKUP_POLICY: [LookupMode; 2] = [LookupMode::Position, LookupMode::Identifier];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(LookupKey::parse("3"), LookupKey::Position(3));
        assert_eq!(LookupKey::parse("-1"), LookupKey::Position(-1));
        assert_eq!(LookupKey::parse("BRA"), LookupKey::Id("BRA".to_string()));
    }

    #[test]
    fn test_id_text() {
        assert_eq!(LookupKey::Position(40).id_text(), "40");
        assert_eq!(LookupKey::from("BRA").id_text(), "BRA");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(LookupKey::from(2_i32), LookupKey::Position(2));
        assert_eq!(LookupKey::from(2_usize), LookupKey::Position(2));
        assert_eq!(LookupKey::from(String::from("x")), LookupKey::Id("x".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(LookupKey::Position(-2).to_string(), "-2");
        assert_eq!(LookupKey::from("ARG").to_string(), "'ARG'");
    }
}
