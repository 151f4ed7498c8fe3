//! In-memory entity store.
//!
//! Holds the cached copy of each backend collection. Mutations run only
//! after the corresponding backend call succeeded, and each one produces a
//! fresh collection, so readers keep cheap immutable snapshots. A failed
//! backend call leaves the store untouched; nothing is rolled back.

use std::sync::{Arc, RwLock};

use crate::api::types::{
    Block, Discipline, Educator, Prerequisite, Room, TimetableEntry,
};

/// Anything stored in an [`EntityList`] is addressed by its backend id.
pub trait Identified {
    fn entity_id(&self) -> i64;
}

macro_rules! identified {
    ($($ty:ty),+) => {
        $(impl Identified for $ty {
            fn entity_id(&self) -> i64 {
                self.id
            }
        })+
    };
}

identified!(Discipline, TimetableEntry, Educator, Room, Block, Prerequisite);

/// One synchronized collection with immutable-snapshot reads.
pub struct EntityList<T> {
    items: RwLock<Arc<Vec<T>>>,
}

impl<T: Identified + Clone> EntityList<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Current snapshot. Later mutations do not affect it.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        self.items.read().unwrap().clone()
    }

    /// Replaces the whole collection (used after list fetches).
    pub fn replace_all(&self, items: Vec<T>) {
        *self.items.write().unwrap() = Arc::new(items);
    }

    /// Inserts or replaces by id, keeping list order for existing items.
    pub fn upsert(&self, item: T) {
        let mut guard = self.items.write().unwrap();
        let mut next: Vec<T> = guard.as_ref().clone();
        match next.iter_mut().find(|e| e.entity_id() == item.entity_id()) {
            Some(existing) => *existing = item,
            None => next.push(item),
        }
        *guard = Arc::new(next);
    }

    /// Removes by id. Returns whether anything was removed.
    pub fn remove(&self, id: i64) -> bool {
        let mut guard = self.items.write().unwrap();
        let before = guard.len();
        let next: Vec<T> = guard
            .as_ref()
            .iter()
            .filter(|e| e.entity_id() != id)
            .cloned()
            .collect();
        let removed = next.len() != before;
        if removed {
            *guard = Arc::new(next);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Identified + Clone> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The cached copy of every backend collection this service mirrors.
#[derive(Default)]
pub struct EntityStore {
    pub disciplines: EntityList<Discipline>,
    pub timetables: EntityList<TimetableEntry>,
    pub educators: EntityList<Educator>,
    pub rooms: EntityList<Room>,
    pub blocks: EntityList<Block>,
    pub prerequisites: EntityList<Prerequisite>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{DisciplineKind, Workload};

    fn discipline(id: i64, name: &str) -> Discipline {
        Discipline {
            id,
            name: name.to_string(),
            code: format!("D{id}"),
            semester: 1,
            workload: Workload::Forty,
            kind: DisciplineKind::Optional,
        }
    }

    #[test]
    fn test_snapshot_is_immutable_under_mutation() {
        let list = EntityList::new();
        list.replace_all(vec![discipline(1, "Redes")]);

        let before = list.snapshot();
        list.upsert(discipline(2, "Banco de Dados"));

        assert_eq!(before.len(), 1);
        assert_eq!(list.snapshot().len(), 2);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let list = EntityList::new();
        list.replace_all(vec![discipline(1, "Redes"), discipline(2, "Banco de Dados")]);

        list.upsert(discipline(1, "Redes II"));

        let snapshot = list.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "Redes II");
        assert_eq!(snapshot[1].id, 2);
    }

    #[test]
    fn test_remove_by_id() {
        let list = EntityList::new();
        list.replace_all(vec![discipline(1, "Redes"), discipline(2, "Banco de Dados")]);

        assert!(list.remove(1));
        assert!(!list.remove(1));
        assert_eq!(list.snapshot().len(), 1);
        assert_eq!(list.snapshot()[0].id, 2);
    }
}
