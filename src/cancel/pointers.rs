//! Strong type for sets of pointer ids

use std::fmt;

/// Largest pointer id an input device can report
pub const MAX_POINTER_ID: u32 = 31;

/// A set of pointer ids in `0..=MAX_POINTER_ID`, stored as a bitmask
///
/// # Examples
///
/// ```
/// use traced_ordinal::PointerIdSet;
///
/// let ids: PointerIdSet = [0, 3, 5].into_iter().collect();
/// assert!(ids.contains(3));
/// assert!(!ids.contains(4));
/// assert_eq!(ids.len(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerIdSet(u32);

impl PointerIdSet {
    /// An empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns a copy of the set with `id` added
    ///
    /// Ids above [`MAX_POINTER_ID`] are ignored.
    pub fn with(mut self, id: u32) -> Self {
        self.insert(id);
        self
    }

    /// Adds `id`, returning `false` if it is out of range
    pub fn insert(&mut self, id: u32) -> bool {
        if id > MAX_POINTER_ID {
            return false;
        }
        self.0 |= 1 << id;
        true
    }

    /// Removes `id`
    pub fn remove(&mut self, id: u32) {
        if id <= MAX_POINTER_ID {
            self.0 &= !(1 << id);
        }
    }

    /// Whether `id` is in the set
    pub fn contains(&self, id: u32) -> bool {
        id <= MAX_POINTER_ID && self.0 & (1 << id) != 0
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of ids in the set
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..=MAX_POINTER_ID).filter(move |id| self.contains(*id))
    }
}

impl FromIterator<u32> for PointerIdSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl fmt::Debug for PointerIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_out_of_range() {
        let mut ids = PointerIdSet::new();
        assert!(ids.insert(MAX_POINTER_ID));
        assert!(!ids.insert(MAX_POINTER_ID + 1));
        assert_eq!(ids.len(), 1);
        assert!(!ids.contains(MAX_POINTER_ID + 1));
    }

    #[test]
    fn test_remove() {
        let mut ids = PointerIdSet::new().with(1).with(2);
        ids.remove(1);
        ids.remove(40);
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_debug_lists_ids() {
        let ids = PointerIdSet::new().with(4).with(0);
        assert_eq!(format!("{ids:?}"), "{0, 4}");
    }
}
