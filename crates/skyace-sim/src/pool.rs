//! Object pools for per-tick entities.
//!
//! `Pool` is an index-based slot arena with a free list: slots are created on
//! demand and never dropped, so after warm-up a run allocates nothing.
//! `ActiveSet` pairs a pool with the ordered list of slots currently in play.

use skyace_core::types::SlotId;

/// Slot arena that grows to peak demand and never shrinks.
///
/// Releasing a slot does not reset its data. Callers overwrite every field
/// right after `acquire`.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
    free: Vec<SlotId>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T: Default> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse a free slot, or construct a new one.
    pub fn acquire(&mut self) -> SlotId {
        if let Some(id) = self.free.pop() {
            return id;
        }
        let id = SlotId(self.slots.len() as u32);
        self.slots.push(T::default());
        id
    }
}

impl<T> Pool<T> {
    /// Return a slot to the free list.
    pub fn release(&mut self, id: SlotId) {
        debug_assert!(id.index() < self.slots.len(), "{id:?} is not in this pool");
        debug_assert!(!self.free.contains(&id), "{id:?} released twice");
        self.free.push(id);
    }

    pub fn get(&self, id: SlotId) -> &T {
        &self.slots[id.index()]
    }

    pub fn get_mut(&mut self, id: SlotId) -> &mut T {
        &mut self.slots[id.index()]
    }

    /// Total instances ever constructed.
    pub fn created(&self) -> usize {
        self.slots.len()
    }

    /// Instances waiting on the free list.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Instances handed out and not yet released.
    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

/// A pool plus the slots currently active, in active-index order.
///
/// Removal is `swap_remove`: O(1), and the last active slot takes the
/// removed slot's index. Iterate in reverse when removing during a pass.
#[derive(Debug, Clone)]
pub struct ActiveSet<T> {
    pool: Pool<T>,
    active: Vec<SlotId>,
}

impl<T> Default for ActiveSet<T> {
    fn default() -> Self {
        Self {
            pool: Pool::default(),
            active: Vec::new(),
        }
    }
}

impl<T: Default> ActiveSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a slot and append it to the active list.
    /// The returned data is stale and must be fully initialized by the caller.
    pub fn spawn(&mut self) -> (SlotId, &mut T) {
        let id = self.pool.acquire();
        self.active.push(id);
        (id, self.pool.get_mut(id))
    }
}

impl<T> ActiveSet<T> {
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Slot at an active index.
    pub fn id_at(&self, index: usize) -> SlotId {
        self.active[index]
    }

    pub fn get_at(&self, index: usize) -> &T {
        self.pool.get(self.active[index])
    }

    pub fn get_at_mut(&mut self, index: usize) -> &mut T {
        self.pool.get_mut(self.active[index])
    }

    /// Look up an active slot by id.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.active.contains(&id).then(|| self.pool.get(id))
    }

    /// Deactivate the slot at `index` and return it to the pool.
    pub fn despawn_at(&mut self, index: usize) -> SlotId {
        let id = self.active.swap_remove(index);
        self.pool.release(id);
        id
    }

    /// Return every active slot to the pool.
    pub fn clear(&mut self) {
        for id in self.active.drain(..) {
            self.pool.release(id);
        }
    }

    /// Active slots in active-index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> + '_ {
        self.active.iter().map(move |&id| (id, self.pool.get(id)))
    }

    pub fn pool(&self) -> &Pool<T> {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Dummy {
        value: u32,
    }

    #[test]
    fn test_acquire_grows_then_reuses() {
        let mut pool: Pool<Dummy> = Pool::new();
        let a = pool.acquire();
        let b = pool.acquire();
        assert_ne!(a, b);
        assert_eq!(pool.created(), 2);

        pool.release(a);
        let c = pool.acquire();
        assert_eq!(c, a, "free slot should be reused before growing");
        assert_eq!(pool.created(), 2);
    }

    #[test]
    fn test_release_keeps_data() {
        let mut pool: Pool<Dummy> = Pool::new();
        let a = pool.acquire();
        pool.get_mut(a).value = 7;
        pool.release(a);
        let again = pool.acquire();
        assert_eq!(pool.get(again).value, 7, "release must not reset slot data");
    }

    #[test]
    fn test_counts_balance_under_churn() {
        let mut set: ActiveSet<Dummy> = ActiveSet::new();
        for round in 0..50 {
            for _ in 0..(round % 7) {
                set.spawn();
            }
            while set.len() > round % 3 {
                set.despawn_at(0);
            }
            let pool = set.pool();
            assert_eq!(pool.active_count(), set.len());
            assert_eq!(pool.created(), set.len() + pool.free_count());
        }
        assert!(set.pool().created() <= 8, "pool should stop growing at peak demand");
    }

    #[test]
    fn test_swap_remove_order() {
        let mut set: ActiveSet<Dummy> = ActiveSet::new();
        let ids: Vec<SlotId> = (0..4).map(|_| set.spawn().0).collect();
        set.despawn_at(1);
        let remaining: Vec<SlotId> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(remaining, vec![ids[0], ids[3], ids[2]]);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut set: ActiveSet<Dummy> = ActiveSet::new();
        for _ in 0..5 {
            set.spawn();
        }
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.pool().free_count(), 5);
        assert_eq!(set.pool().active_count(), 0);
    }

    #[test]
    fn test_get_only_sees_active() {
        let mut set: ActiveSet<Dummy> = ActiveSet::new();
        let (id, d) = set.spawn();
        d.value = 3;
        assert_eq!(set.get(id).map(|d| d.value), Some(3));
        set.despawn_at(0);
        assert!(set.get(id).is_none());
    }
}
