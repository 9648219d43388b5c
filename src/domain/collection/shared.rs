/// 共享球队集合
///
/// `TeamCollection` 本身只支持单线程独占访问。需要跨线程共享时，
/// 在外层包一把读写锁：
/// - 读操作（遍历、查找）可以并发
/// - 写操作（追加、排序、替换）互斥
///
/// 使用parking_lot::RwLock，无锁中毒

use crate::domain::collection::team_collection::TeamCollection;
use crate::domain::entities::Team;
use parking_lot::RwLock;
use std::sync::Arc;

/// 可跨线程共享的球队集合句柄（克隆句柄共享同一集合）
#[derive(Clone, Default)]
pub struct SharedTeamCollection {
    inner: Arc<RwLock<TeamCollection>>,
}

impl SharedTeamCollection {
    pub fn new(collection: TeamCollection) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collection)),
        }
    }

    /// 持有读锁执行闭包
    pub fn read<R>(&self, f: impl FnOnce(&TeamCollection) -> R) -> R {
        f(&self.inner.read())
    }

    /// 持有写锁执行闭包
    pub fn write<R>(&self, f: impl FnOnce(&mut TeamCollection) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// 追加（满时淘汰队首），返回被淘汰的球队
    pub fn append(&self, team: Team) -> Option<Team> {
        self.inner.write().append(team)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// 当前内容的独立副本
    pub fn snapshot(&self) -> TeamCollection {
        self.inner.read().clone()
    }
}

impl From<TeamCollection> for SharedTeamCollection {
    fn from(collection: TeamCollection) -> Self {
        Self::new(collection)
    }
}
