//! Generational slot arena for vertex and edge records.
//!
//! Records are addressed by [`ArenaKey`], an `(index, generation)` pair.
//! Removing a record bumps its slot's generation, so every key handed out
//! for it stops resolving even after the slot is reused.
//!
//! Freed slots go on a free list and are reused LIFO, giving O(1) insert
//! and remove.

/// Stable handle to a record stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct ArenaKey {
    index: u32,
    generation: u32,
}

impl ArenaKey {
    /// Returns the slot index.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Free { generation: u32 },
}

/// Slot storage with free-list reuse and generation checks.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores a value and returns its key.
    pub(crate) fn insert(&mut self, value: T) -> ArenaKey {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            let generation = match slot {
                Slot::Free { generation } => *generation,
                // Free list only ever holds free slots.
                Slot::Occupied { .. } => unreachable!("occupied slot on free list"),
            };
            *slot = Slot::Occupied { generation, value };
            return ArenaKey { index, generation };
        }

        // Reason: u32 indices bound the arena to 4G records, far past the
        // small-to-medium graphs this store targets.
        #[allow(clippy::cast_possible_truncation)]
        let index = self.slots.len() as u32;
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        ArenaKey {
            index,
            generation: 0,
        }
    }

    /// Removes and returns the value for `key`, if the key is still live.
    pub(crate) fn remove(&mut self, key: ArenaKey) -> Option<T> {
        let slot = self.slots.get_mut(key.index())?;
        let generation = match slot {
            Slot::Occupied { generation, .. } if *generation == key.generation => *generation,
            _ => return None,
        };
        let freed = Slot::Free {
            generation: generation.wrapping_add(1),
        };
        match std::mem::replace(slot, freed) {
            Slot::Occupied { value, .. } => {
                self.free.push(key.index);
                self.len -= 1;
                Some(value)
            }
            Slot::Free { .. } => None,
        }
    }

    #[must_use]
    pub(crate) fn get(&self, key: ArenaKey) -> Option<&T> {
        match self.slots.get(key.index())? {
            Slot::Occupied { generation, value } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub(crate) fn get_mut(&mut self, key: ArenaKey) -> Option<&mut T> {
        match self.slots.get_mut(key.index())? {
            Slot::Occupied { generation, value } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Iterates live records in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (ArenaKey, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Occupied { generation, value } => {
                // Reason: slot count never exceeds u32::MAX, see insert().
                #[allow(clippy::cast_possible_truncation)]
                let index = i as u32;
                Some((
                    ArenaKey {
                        index,
                        generation: *generation,
                    },
                    value,
                ))
            }
            Slot::Free { .. } => None,
        })
    }

    /// Iterates live values in slot order.
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_insert_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_arena_remove_invalidates_key() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        assert!(arena.get(a).is_none());
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn test_arena_reuses_slot_with_new_generation() {
        let mut arena = Arena::new();
        let old = arena.insert(1);
        arena.remove(old);

        let new = arena.insert(2);
        assert_eq!(old.index(), new.index());
        assert_ne!(old, new);
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&2));
    }

    #[test]
    fn test_arena_iter_skips_free_slots() {
        let mut arena = Arena::new();
        let a = arena.insert(10);
        let _b = arena.insert(20);
        let _c = arena.insert(30);
        arena.remove(a);

        let values: Vec<i32> = arena.values().copied().collect();
        assert_eq!(values, vec![20, 30]);
    }

    #[test]
    fn test_arena_get_mut_and_clear() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        if let Some(v) = arena.get_mut(a) {
            *v = 5;
        }
        assert_eq!(arena.get(a), Some(&5));

        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.get(a), None);
    }
}
