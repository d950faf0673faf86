//! Min-priority frontier shared by every best-first search
//!
//! Entries are ordered by `(priority, sequence)`. The sequence number is
//! assigned at push time and strictly increases, so ties on priority resolve in
//! discovery order and the payload is never compared.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One frontier entry; the payload does not take part in ordering
#[derive(Debug)]
pub struct FrontierEntry<T> {
    pub priority: u64,
    pub sequence: u64,
    pub item: T,
}

impl<T> FrontierEntry<T> {
    fn key(&self) -> (u64, u64) {
        (self.priority, self.sequence)
    }
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Lowest `(priority, sequence)` pops first
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<FrontierEntry<T>>>,
    next_sequence: u64,
}

impl<T> Frontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Insert an item; returns the sequence number it was given
    pub fn push(&mut self, priority: u64, item: T) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            sequence,
            item,
        }));
        sequence
    }

    /// Remove the entry with the lowest key
    pub fn pop(&mut self) -> Option<FrontierEntry<T>> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push(5, "five");
        frontier.push(1, "one");
        frontier.push(3, "three");

        assert_eq!(frontier.pop().unwrap().item, "one");
        assert_eq!(frontier.pop().unwrap().item, "three");
        assert_eq!(frontier.pop().unwrap().item, "five");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn ties_break_by_discovery_order() {
        let mut frontier = Frontier::new();
        // Payloads that would sort the other way if they were compared
        frontier.push(2, vec!["zzz"]);
        frontier.push(2, vec!["aaa"]);
        frontier.push(2, vec!["mmm"]);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|e| e.item[0])
            .collect();
        assert_eq!(order, vec!["zzz", "aaa", "mmm"]);
    }

    #[test]
    fn sequence_strictly_increases() {
        let mut frontier = Frontier::new();
        let a = frontier.push(9, ());
        let b = frontier.push(0, ());
        let c = frontier.push(9, ());
        assert!(a < b && b < c);
        assert_eq!(frontier.len(), 3);
    }

    #[test]
    fn payload_needs_no_ordering() {
        struct Opaque;
        let mut frontier = Frontier::new();
        frontier.push(1, Opaque);
        assert!(!frontier.is_empty());
        assert!(frontier.pop().is_some());
        assert!(frontier.is_empty());
    }
}
