/// Domain Layer - Team Collection Module
///
/// The bounded ordered collection at the heart of the crate:
/// - `TeamCollection`: capacity-32 ring buffer of teams, sorted on
///   construction and on explicit `sort`, with hybrid position/id lookup
/// - `LookupKey` / `LOOKUP_POLICY`: the dispatch rules behind `get`
/// - `SharedTeamCollection`: read-write locked handle for multi-threaded callers

pub mod lookup;
pub mod team_collection;
pub mod shared;

// Re-export key types
pub use lookup::{LookupKey, LookupMode, LOOKUP_POLICY};
pub use team_collection::{TeamCollection, TEAM_CAPACITY};
pub use shared::SharedTeamCollection;
