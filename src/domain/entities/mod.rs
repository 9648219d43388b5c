/// Domain Entities
///
/// Immutable value objects built from raw records:
/// - `Team`: totally ordered by `(group, team_name)`
/// - `Match`: no intrinsic order, date parsed from ISO-8601

pub mod record;
pub mod team;
pub mod fixture;

// Re-export key types
pub use record::{MatchRecord, RawRecord, TeamRecord};
pub use team::Team;
pub use fixture::{parse_iso_datetime, sort_by_date, Match};
