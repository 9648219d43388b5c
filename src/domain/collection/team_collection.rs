//! TeamCollection - 定长有序球队集合
//!
//! 核心语义：
//! 1. **容量固定为 32** - 追加第 33 支球队时淘汰队首（最旧）元素
//! 2. **时点有序** - 构造后与显式 `sort` 后按 `(group, team_name)` 有序；
//!    `append` / `insert_at` / `set_at` / `delete_at` 不会自动重排
//! 3. **混合查找** - `get` 先按位置查，失败后按球队标识查
//!
//! ## Example
//! ```rust
//! use tournament_teams::domain::collection::TeamCollection;
//! use tournament_teams::domain::entities::{Team, TeamRecord};
//!
//! fn team(name: &str, group: &str, id: &str) -> Team {
//!     Team::from(TeamRecord {
//!         city: String::new(),
//!         team: name.to_string(),
//!         team_id: id.to_string(),
//!         team_type: "national".to_string(),
//!         geo: String::new(),
//!         grouping: group.to_string(),
//!     })
//! }
//!
//! let teams = TeamCollection::new(vec![team("Y", "B", "10"), team("X", "A", "11")]);
//! let names: Vec<_> = teams.iter().map(|t| t.team_name()).collect();
//! assert_eq!(names, vec!["X", "Y"]);
//!
//! assert_eq!(teams.get(1_i64).unwrap().team_name(), "Y");
//! assert_eq!(teams.get(10_i64).unwrap().team_name(), "Y"); // 位置越界，回退为标识
//! ```

use crate::domain::collection::lookup::{LookupKey, LookupMode, LOOKUP_POLICY};
use crate::domain::entities::Team;
use crate::domain::errors::CollectionError;
use crate::shared::collections::ringbuffer::{Iter, RingBuffer};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// 集合容量
pub const TEAM_CAPACITY: usize = 32;

/// 定长有序球队集合
#[derive(Clone)]
pub struct TeamCollection {
    teams: RingBuffer<Team>,
}

impl TeamCollection {
    /// Builds a collection from any number of teams.
    ///
    /// The input is sorted by `(group, team_name)`, pushed through the
    /// capacity-32 ring buffer (so only the last 32 of the sorted input
    /// survive), and the buffer is sorted again.
    pub fn new<I>(teams: I) -> Self
    where
        I: IntoIterator<Item = Team>,
    {
        let mut sorted: Vec<Team> = teams.into_iter().collect();
        sorted.sort();

        let mut buffer = RingBuffer::with_capacity(TEAM_CAPACITY);
        for team in sorted {
            buffer.push_evicting(team);
        }

        let mut collection = Self { teams: buffer };
        collection.sort(false);
        collection
    }

    /// 空集合
    pub fn empty() -> Self {
        Self {
            teams: RingBuffer::with_capacity(TEAM_CAPACITY),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.teams.is_full()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.teams.capacity()
    }

    /// 结构相等的成员检查，O(n)
    pub fn contains(&self, team: &Team) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    /// 按当前缓冲区顺序遍历（上次 `sort` 之后若有修改则不保证有序）
    pub fn iter(&self) -> Iter<'_, Team> {
        self.teams.iter()
    }

    /// Dual-mode accessor: position first, identifier second.
    ///
    /// # Lookup
    /// 1. An integer key inside `[-len, len)` returns the team at that position
    ///    (negative positions count from the end).
    /// 2. Otherwise the key's text form is compared against each `team_id`;
    ///    the first match wins.
    ///
    /// # Errors
    /// `CollectionError::NotFound` when neither mode finds a team.
    pub fn get(&self, key: impl Into<LookupKey>) -> Result<&Team, CollectionError> {
        let key = key.into();

        for mode in LOOKUP_POLICY {
            let found = match (mode, &key) {
                (LookupMode::Position, LookupKey::Position(position)) => self.position(*position),
                (LookupMode::Position, LookupKey::Id(_)) => None,
                (LookupMode::Identifier, _) => self.find_by_id(&key.id_text()),
            };

            if let Some(team) = found {
                return Ok(team);
            }
        }

        Err(CollectionError::NotFound { key })
    }

    /// Positional access, negative positions count from the end
    pub fn position(&self, position: i64) -> Option<&Team> {
        let len = i64::try_from(self.len()).ok()?;
        let resolved = if position < 0 { len + position } else { position };

        if (0..len).contains(&resolved) {
            self.teams.get(usize::try_from(resolved).ok()?)
        } else {
            None
        }
    }

    /// 按球队标识线性查找，返回第一个匹配
    pub fn find_by_id(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.team_id() == team_id)
    }

    /// Replaces the team at `position`, returning the previous one
    ///
    /// # Errors
    /// `CollectionError::IndexOutOfRange` when `position` is outside `[0, len)`.
    pub fn set_at(&mut self, position: usize, team: Team) -> Result<Team, CollectionError> {
        let len = self.len();
        self.teams
            .replace(position, team)
            .map_err(|_| CollectionError::IndexOutOfRange { position, len })
    }

    /// Removes the team at `position`, shifting later teams forward
    ///
    /// # Errors
    /// `CollectionError::IndexOutOfRange` when `position` is outside `[0, len)`.
    pub fn delete_at(&mut self, position: usize) -> Result<Team, CollectionError> {
        let len = self.len();
        self.teams
            .remove(position)
            .ok_or(CollectionError::IndexOutOfRange { position, len })
    }

    /// Appends at the logical end, evicting the front team when full.
    ///
    /// Does not re-sort. Returns the evicted team, if any.
    pub fn append(&mut self, team: Team) -> Option<Team> {
        self.teams.push_evicting(team)
    }

    /// Inserts at `position`.
    ///
    /// `position == len` behaves as [`append`](Self::append). For
    /// `position < len` the team currently at `position` is **overwritten**
    /// rather than shifted; the length does not change and nothing is evicted.
    ///
    /// Returns the displaced team: the evicted one on the append path, the
    /// overwritten one otherwise.
    ///
    /// # Errors
    /// `CollectionError::IndexOutOfRange` when `position > len`.
    pub fn insert_at(&mut self, position: usize, team: Team) -> Result<Option<Team>, CollectionError> {
        if position == self.len() {
            return Ok(self.append(team));
        }
        self.set_at(position, team).map(Some)
    }

    /// Re-sorts the live buffer by `(group, team_name)`.
    ///
    /// With `reverse` the result is the exact reverse of the ascending order.
    /// Membership and length are unchanged.
    pub fn sort(&mut self, reverse: bool) {
        self.teams.sort_by(Team::cmp);
        if reverse {
            self.teams.reverse();
        }
    }

    /// All teams in `group`, in current buffer order
    pub fn filter_by_group(&self, group: &str) -> SmallVec<[Team; 4]> {
        self.teams
            .iter()
            .filter(|t| t.group() == group)
            .cloned()
            .collect()
    }
}

impl Default for TeamCollection {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Team> for TeamCollection {
    fn from_iter<I: IntoIterator<Item = Team>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Team> for TeamCollection {
    fn extend<I: IntoIterator<Item = Team>>(&mut self, iter: I) {
        for team in iter {
            self.append(team);
        }
    }
}

impl<'a> IntoIterator for &'a TeamCollection {
    type Item = &'a Team;
    type IntoIter = Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for TeamCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TeamCollection").field(&self.teams).finish()
    }
}

impl fmt::Display for TeamCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, team) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", team)?;
        }
        write!(f, "]")
    }
}

impl Serialize for TeamCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
