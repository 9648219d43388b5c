/// Domain Layer - Core Business Logic
///
/// Pure in-memory logic with no I/O and no logging. Everything here is
/// single-threaded and synchronous; `SharedTeamCollection` adds locking on top
/// for callers that need it.
///
/// ## Modules
/// - `entities`: Team and Match value objects, raw record field sets
/// - `collection`: the bounded ordered `TeamCollection`
/// - `errors`: record construction and collection lookup errors

pub mod entities;
pub mod collection;
pub mod errors;

// Re-export key types
pub use entities::{Match, RawRecord, Team};
pub use collection::{LookupKey, SharedTeamCollection, TeamCollection, TEAM_CAPACITY};
pub use errors::{CollectionError, RecordError};
