//! Indexed binary min-heap used as the A* frontier.
//!
//! Entries are cell indices. Besides the usual heap array the structure keeps
//! `pos[idx]`, the slot of `idx` in the array, so membership tests are O(1)
//! and an entry can be moved in place when its key improves. A cell is
//! therefore present at most once and the heap never holds stale entries.

use std::cmp::Ordering;

const NOT_QUEUED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry {
    idx: usize,
    f: f64,
    h: f64,
    seq: u64,
}

impl Entry {
    /// `f` ascending, then `h` ascending, then insertion order.
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.seq.cmp(&other.seq))
    }

    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.cmp_key(other) == Ordering::Less
    }
}

/// Min-heap of cell indices keyed by `(f, h)`.
///
/// Ties on both keys are broken by insertion order (the first push of an
/// index wins), which makes the pop order fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct IndexedHeap {
    entries: Vec<Entry>,
    pos: Vec<usize>,
    next_seq: u64,
}

impl IndexedHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap able to hold indices `0..capacity` without
    /// growing its position map.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            pos: vec![NOT_QUEUED; capacity],
            next_seq: 0,
        }
    }

    /// Grow the position map so indices `0..capacity` are accepted.
    pub fn reserve_indices(&mut self, capacity: usize) {
        if self.pos.len() < capacity {
            self.pos.resize(capacity, NOT_QUEUED);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `idx` is currently queued.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.pos.get(idx).is_some_and(|&p| p != NOT_QUEUED)
    }

    /// Remove every entry and restart the insertion sequence.
    pub fn clear(&mut self) {
        for e in &self.entries {
            self.pos[e.idx] = NOT_QUEUED;
        }
        self.entries.clear();
        self.next_seq = 0;
    }

    /// Queue `idx` with keys `(f, h)`. If `idx` is already queued its keys
    /// are replaced instead, keeping its original insertion order.
    pub fn push(&mut self, idx: usize, f: f64, h: f64) {
        if self.update(idx, f, h) {
            return;
        }
        self.reserve_indices(idx + 1);
        let slot = self.entries.len();
        self.entries.push(Entry {
            idx,
            f,
            h,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.pos[idx] = slot;
        self.sift_up(slot);
    }

    /// The index with the smallest key, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.entries.first().map(|e| e.idx)
    }

    /// Remove and return the index with the smallest key.
    pub fn pop(&mut self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);
        self.pos[top.idx] = NOT_QUEUED;
        if let Some(first) = self.entries.first() {
            self.pos[first.idx] = 0;
            self.sift_down(0);
        }
        Some(top.idx)
    }

    /// Lower the keys of a queued index and restore heap order.
    ///
    /// Returns `false` (and does nothing) if `idx` is not queued. A key that
    /// grows instead is moved down, so the heap stays valid either way.
    pub fn decrease_key(&mut self, idx: usize, f: f64, h: f64) -> bool {
        self.update(idx, f, h)
    }

    fn update(&mut self, idx: usize, f: f64, h: f64) -> bool {
        let Some(&slot) = self.pos.get(idx) else {
            return false;
        };
        if slot == NOT_QUEUED {
            return false;
        }
        let e = &mut self.entries[slot];
        e.f = f;
        e.h = h;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.pos[self.entries[a].idx] = a;
        self.pos[self.entries[b].idx] = b;
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.entries[slot].precedes(&self.entries[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.entries[right].precedes(&self.entries[left]) {
                right
            } else {
                left
            };
            if !self.entries[child].precedes(&self.entries[slot]) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn drain(heap: &mut IndexedHeap) -> Vec<usize> {
        std::iter::from_fn(|| heap.pop()).collect()
    }

    #[test]
    fn pops_by_f_then_h_then_insertion() {
        let mut heap = IndexedHeap::new();
        heap.push(0, 5.0, 1.0);
        heap.push(1, 3.0, 2.0);
        heap.push(2, 3.0, 1.0);
        heap.push(3, 3.0, 1.0);
        heap.push(4, 1.0, 9.0);
        assert_eq!(heap.peek(), Some(4));
        assert_eq!(drain(&mut heap), vec![4, 2, 3, 1, 0]);
        assert!(heap.is_empty());
    }

    #[test]
    fn membership_follows_push_and_pop() {
        let mut heap = IndexedHeap::with_capacity(4);
        assert!(!heap.contains(2));
        assert!(!heap.contains(100));
        heap.push(2, 1.0, 0.0);
        assert!(heap.contains(2));
        assert_eq!(heap.pop(), Some(2));
        assert!(!heap.contains(2));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn decrease_key_moves_entry_forward() {
        let mut heap = IndexedHeap::new();
        heap.push(0, 1.0, 0.0);
        heap.push(1, 2.0, 0.0);
        heap.push(2, 3.0, 0.0);
        assert!(heap.decrease_key(2, 0.5, 0.0));
        assert_eq!(heap.len(), 3);
        assert_eq!(drain(&mut heap), vec![2, 0, 1]);
    }

    #[test]
    fn decrease_key_on_absent_index_is_noop() {
        let mut heap = IndexedHeap::new();
        heap.push(0, 1.0, 0.0);
        assert!(!heap.decrease_key(7, 0.0, 0.0));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn push_of_queued_index_never_duplicates() {
        let mut heap = IndexedHeap::new();
        heap.push(3, 4.0, 0.0);
        heap.push(3, 2.0, 0.0);
        assert_eq!(heap.len(), 1);
        assert_eq!(drain(&mut heap), vec![3]);
    }

    #[test]
    fn clear_resets_membership() {
        let mut heap = IndexedHeap::new();
        for i in 0..5 {
            heap.push(i, i as f64, 0.0);
        }
        heap.clear();
        assert!(heap.is_empty());
        assert!((0..5).all(|i| !heap.contains(i)));
        heap.push(1, 0.0, 0.0);
        assert_eq!(heap.pop(), Some(1));
    }

    #[test]
    fn random_operations_match_sorted_reference() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut heap = IndexedHeap::new();
        // (idx, f, seq) of every queued entry; h is always 0 here.
        let mut reference: Vec<(usize, f64, u64)> = Vec::new();
        let mut seq = 0;
        for _ in 0..2000 {
            match rng.random_range(0..3) {
                0 => {
                    let idx = rng.random_range(0..64usize);
                    let f = f64::from(rng.random_range(0..50i32));
                    if let Some(e) = reference.iter_mut().find(|e| e.0 == idx) {
                        e.1 = f;
                    } else {
                        reference.push((idx, f, seq));
                        seq += 1;
                    }
                    heap.push(idx, f, 0.0);
                }
                1 => {
                    reference.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.2.cmp(&b.2)));
                    let expected = (!reference.is_empty()).then(|| reference.remove(0).0);
                    assert_eq!(heap.pop(), expected);
                }
                _ => {
                    if let Some(e) = reference.first_mut() {
                        e.1 -= 1.0;
                        assert!(heap.decrease_key(e.0, e.1, 0.0));
                    }
                }
            }
            assert_eq!(heap.len(), reference.len());
        }
    }
}
