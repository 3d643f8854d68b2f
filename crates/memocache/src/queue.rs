//! Recency queue: keys ordered least- to most-recently used
//!
//! Arena-backed doubly-linked list. Slots live in a `Vec` and are addressed
//! by index, so links can never dangle; handles carry a generation stamp so
//! one that outlives its node is detected instead of resolving to a recycled
//! slot.

use crate::error::{Error, Result};

/// Opaque reference to a key's current position in the queue.
///
/// Valid from the `push_back` that produced it until that node is removed or
/// popped; `move_to_back` preserves it. Stale handles fail with
/// [`Error::InvalidHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    slot: usize,
    stamp: u64,
}

struct Node<K> {
    key: K,
    stamp: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Queue of keys from least-recently-used (front) to most-recently-used (back).
///
/// Uniqueness of keys is not checked here; the cache is responsible for
/// inserting each resident key exactly once.
pub struct RecencyQueue<K> {
    nodes: Vec<Option<Node<K>>>,
    free_list: Vec<usize>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
    next_stamp: u64,
}

impl<K> RecencyQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            front: None,
            back: None,
            len: 0,
            next_stamp: 0,
        }
    }

    /// Append `key` at the most-recently-used end. O(1).
    pub fn push_back(&mut self, key: K) -> Handle {
        let stamp = self.next_stamp;
        self.next_stamp = self.next_stamp.wrapping_add(1);

        let slot = self.alloc_slot();
        self.nodes[slot] = Some(Node {
            key,
            stamp,
            prev: self.back,
            next: None,
        });

        if let Some(back_slot) = self.back {
            if let Some(back) = &mut self.nodes[back_slot] {
                back.next = Some(slot);
            }
        }

        self.back = Some(slot);
        if self.front.is_none() {
            self.front = Some(slot);
        }
        self.len += 1;

        Handle { slot, stamp }
    }

    /// Remove and return the least-recently-used key, or `None` if empty. O(1).
    pub fn pop_front(&mut self) -> Option<K> {
        let slot = self.front?;
        self.unlink(slot);
        self.free_list.push(slot);
        self.len -= 1;
        self.nodes[slot].take().map(|node| node.key)
    }

    /// Unlink the referenced node wherever it sits and return its key. O(1).
    pub fn remove(&mut self, handle: Handle) -> Result<K> {
        self.check(handle)?;
        self.unlink(handle.slot);
        self.free_list.push(handle.slot);
        self.len -= 1;

        let node = self.nodes[handle.slot].take().ok_or(Error::InvalidHandle)?;
        Ok(node.key)
    }

    /// Splice the referenced node to the most-recently-used end. O(1); the
    /// node (and its handle) stays valid, nothing is re-allocated.
    pub fn move_to_back(&mut self, handle: Handle) -> Result<()> {
        self.check(handle)?;

        if self.back == Some(handle.slot) {
            return Ok(()); // Already most recent
        }

        self.unlink(handle.slot);

        if let Some(node) = &mut self.nodes[handle.slot] {
            node.prev = self.back;
            node.next = None;
        }
        if let Some(back_slot) = self.back {
            if let Some(back) = &mut self.nodes[back_slot] {
                back.next = Some(handle.slot);
            }
        }

        self.back = Some(handle.slot);
        if self.front.is_none() {
            self.front = Some(handle.slot);
        }

        Ok(())
    }

    /// Borrow the least-recently-used key without removing it.
    pub fn front(&self) -> Option<&K> {
        self.front
            .and_then(|slot| self.nodes[slot].as_ref())
            .map(|node| &node.key)
    }

    /// Number of keys in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the queue holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop all nodes. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.front = None;
        self.back = None;
        self.len = 0;
    }

    fn check(&self, handle: Handle) -> Result<()> {
        match self.nodes.get(handle.slot) {
            Some(Some(node)) if node.stamp == handle.stamp => Ok(()),
            _ => Err(Error::InvalidHandle),
        }
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[slot] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_slot) => {
                if let Some(prev_node) = &mut self.nodes[prev_slot] {
                    prev_node.next = next;
                }
            }
            None => {
                self.front = next;
            }
        }

        match next {
            Some(next_slot) => {
                if let Some(next_node) = &mut self.nodes[next_slot] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.back = prev;
            }
        }
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(slot) = self.free_list.pop() {
            slot
        } else {
            let slot = self.nodes.len();
            self.nodes.push(None);
            slot
        }
    }

    /// Walk front-to-back and collect keys; test support for order checks.
    #[cfg(test)]
    fn drain_order(&self) -> Vec<&K> {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.front;
        while let Some(slot) = cursor {
            let node = self.nodes[slot].as_ref().expect("linked slot is occupied");
            order.push(&node.key);
            cursor = node.next;
        }
        order
    }
}

impl<K> Default for RecencyQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = RecencyQueue::new();

        queue.push_back(1);
        queue.push_back(2);
        queue.push_back(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue.pop_front(), Some(2));
        assert_eq!(queue.pop_front(), Some(3));
        assert_eq!(queue.pop_front(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pop_empty_is_none_not_error() {
        let mut queue: RecencyQueue<i32> = RecencyQueue::new();
        assert_eq!(queue.pop_front(), None);
    }

    #[test]
    fn test_move_to_back_reorders() {
        let mut queue = RecencyQueue::new();

        let h1 = queue.push_back(1);
        queue.push_back(2);
        queue.push_back(3);

        queue.move_to_back(h1).unwrap();

        assert_eq!(queue.drain_order(), vec![&2, &3, &1]);
        assert_eq!(queue.pop_front(), Some(2));
    }

    #[test]
    fn test_move_to_back_of_back_is_noop() {
        let mut queue = RecencyQueue::new();

        queue.push_back(1);
        let h2 = queue.push_back(2);

        queue.move_to_back(h2).unwrap();
        assert_eq!(queue.drain_order(), vec![&1, &2]);
    }

    #[test]
    fn test_handle_survives_splice() {
        let mut queue = RecencyQueue::new();

        let h1 = queue.push_back(1);
        queue.push_back(2);

        queue.move_to_back(h1).unwrap();
        queue.move_to_back(h1).unwrap(); // Still valid after the first splice

        assert_eq!(queue.remove(h1).unwrap(), 1);
    }

    #[test]
    fn test_remove_interior() {
        let mut queue = RecencyQueue::new();

        queue.push_back(1);
        let h2 = queue.push_back(2);
        queue.push_back(3);

        assert_eq!(queue.remove(h2).unwrap(), 2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain_order(), vec![&1, &3]);
    }

    #[test]
    fn test_remove_front_and_back() {
        let mut queue = RecencyQueue::new();

        let h1 = queue.push_back(1);
        queue.push_back(2);
        let h3 = queue.push_back(3);

        assert_eq!(queue.remove(h1).unwrap(), 1);
        assert_eq!(queue.remove(h3).unwrap(), 3);
        assert_eq!(queue.drain_order(), vec![&2]);
    }

    #[test]
    fn test_single_node_remove_empties_queue() {
        let mut queue = RecencyQueue::new();

        let h = queue.push_back(1);
        queue.remove(h).unwrap();

        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
        assert_eq!(queue.pop_front(), None);

        // Queue must remain usable after emptying
        queue.push_back(2);
        assert_eq!(queue.pop_front(), Some(2));
    }

    #[test]
    fn test_single_node_move_to_back() {
        let mut queue = RecencyQueue::new();

        let h = queue.push_back(1);
        queue.move_to_back(h).unwrap();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.pop_front(), Some(1));
    }

    #[test]
    fn test_stale_handle_after_pop() {
        let mut queue = RecencyQueue::new();

        let h1 = queue.push_back(1);
        queue.pop_front();

        assert!(matches!(queue.move_to_back(h1), Err(Error::InvalidHandle)));
        assert!(matches!(queue.remove(h1), Err(Error::InvalidHandle)));
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut queue = RecencyQueue::new();

        let h1 = queue.push_back(1);
        queue.pop_front();

        // New node recycles the slot; the old handle must not alias it
        queue.push_back(2);
        assert!(matches!(queue.remove(h1), Err(Error::InvalidHandle)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_double_remove_rejected() {
        let mut queue = RecencyQueue::new();

        queue.push_back(1);
        let h2 = queue.push_back(2);

        assert_eq!(queue.remove(h2).unwrap(), 2);
        assert!(matches!(queue.remove(h2), Err(Error::InvalidHandle)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut queue = RecencyQueue::new();

        let h = queue.push_back(1);
        queue.clear();

        assert!(queue.is_empty());
        assert!(matches!(queue.remove(h), Err(Error::InvalidHandle)));
    }

    #[test]
    fn test_slot_reuse_keeps_arena_compact() {
        let mut queue = RecencyQueue::new();

        for i in 0..100 {
            let h = queue.push_back(i);
            queue.remove(h).unwrap();
        }

        // Every push reused the single freed slot
        assert_eq!(queue.nodes.len(), 1);
    }
}
