// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Balanced Spot Index
//!
//! An AVL tree keyed by [`SpotId`], giving O(log n) insert, remove, and
//! exact lookup over the live spot set. Nodes live in an arena (`Vec`
//! indexed by [`NodeRef`]) with a free list for recycled slots, so
//! rotations are pure rewires of arena indices rather than pointer
//! patching.
//!
//! Invariant: for every node, the heights of the left and right subtrees
//! differ by at most one, and an in-order walk yields strictly ascending
//! spot identifiers.

use park_alloc_model::{
    err::{DuplicateIdError, UnknownIdError},
    id::SpotId,
    spot::Spot,
};
use std::cmp::Ordering;

/// Index of a node in the arena.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeRef(u32);

impl NodeRef {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Node {
    spot: Spot,
    left: Option<NodeRef>,
    right: Option<NodeRef>,
    height: i32,
}

impl Node {
    #[inline]
    fn leaf(spot: Spot) -> Self {
        Node {
            spot,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// Height-balanced search tree over the spot set, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct SpotIndex {
    nodes: Vec<Node>,
    free: Vec<NodeRef>,
    root: Option<NodeRef>,
    len: usize,
}

impl SpotIndex {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree; an empty tree has height zero.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    /// Inserts a spot keyed by its identifier.
    ///
    /// If the identifier already exists the tree is left unchanged and the
    /// new value is rejected with [`DuplicateIdError`].
    pub fn insert(&mut self, spot: Spot) -> Result<(), DuplicateIdError> {
        let root = self.root;
        let new_root = self.insert_at(root, spot)?;
        self.root = Some(new_root);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the spot with the given identifier.
    pub fn remove(&mut self, id: SpotId) -> Result<Spot, UnknownIdError> {
        let root = self.root;
        let (new_root, removed) = self.remove_at(root, id)?;
        self.root = new_root;
        self.len -= 1;
        Ok(removed)
    }

    /// O(log n) exact lookup.
    pub fn get(&self, id: SpotId) -> Option<&Spot> {
        self.find_ref(id).map(|r| &self.node(r).spot)
    }

    pub fn get_mut(&mut self, id: SpotId) -> Option<&mut Spot> {
        self.find_ref(id)
            .map(|r| &mut self.nodes[r.index()].spot)
    }

    #[inline]
    pub fn contains(&self, id: SpotId) -> bool {
        self.find_ref(id).is_some()
    }

    /// In-order iteration, yielding spots in strictly ascending id order.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter {
            index: self,
            stack: Vec::with_capacity(self.height() as usize),
            next: self.root,
        }
    }

    /// Verifies the AVL invariant and the cached heights on every node.
    ///
    /// Intended for tests and debug assertions; walks the whole tree.
    pub fn is_balanced(&self) -> bool {
        self.checked_height(self.root).is_some()
    }

    fn checked_height(&self, node: Option<NodeRef>) -> Option<i32> {
        let Some(r) = node else {
            return Some(0);
        };
        let n = self.node(r);
        let left = self.checked_height(n.left)?;
        let right = self.checked_height(n.right)?;
        if (left - right).abs() > 1 {
            return None;
        }
        let height = 1 + left.max(right);
        (height == n.height).then_some(height)
    }

    #[inline]
    fn node(&self, r: NodeRef) -> &Node {
        &self.nodes[r.index()]
    }

    #[inline]
    fn node_mut(&mut self, r: NodeRef) -> &mut Node {
        &mut self.nodes[r.index()]
    }

    fn alloc(&mut self, spot: Spot) -> NodeRef {
        match self.free.pop() {
            Some(r) => {
                *self.node_mut(r) = Node::leaf(spot);
                r
            }
            None => {
                let r = NodeRef(self.nodes.len() as u32);
                self.nodes.push(Node::leaf(spot));
                r
            }
        }
    }

    // The slot stays in the arena but is unreachable until `alloc` reuses it.
    #[inline]
    fn release(&mut self, r: NodeRef) {
        self.free.push(r);
    }

    #[inline]
    fn height_of(&self, node: Option<NodeRef>) -> i32 {
        node.map_or(0, |r| self.node(r).height)
    }

    #[inline]
    fn balance_factor(&self, r: NodeRef) -> i32 {
        let n = self.node(r);
        self.height_of(n.left) - self.height_of(n.right)
    }

    fn update_height(&mut self, r: NodeRef) {
        let n = self.node(r);
        let height = 1 + self.height_of(n.left).max(self.height_of(n.right));
        self.node_mut(r).height = height;
    }

    // The left subtree of `x`'s right child becomes `x`'s right subtree.
    fn rotate_left(&mut self, x: NodeRef) -> NodeRef {
        let y = self.node(x).right.expect("rotate_left needs a right child");
        let t2 = self.node(y).left;
        self.node_mut(y).left = Some(x);
        self.node_mut(x).right = t2;
        self.update_height(x);
        self.update_height(y);
        y
    }

    fn rotate_right(&mut self, y: NodeRef) -> NodeRef {
        let x = self.node(y).left.expect("rotate_right needs a left child");
        let t2 = self.node(x).right;
        self.node_mut(x).right = Some(y);
        self.node_mut(y).left = t2;
        self.update_height(y);
        self.update_height(x);
        x
    }

    fn find_ref(&self, id: SpotId) -> Option<NodeRef> {
        let mut current = self.root;
        while let Some(r) = current {
            let n = self.node(r);
            match id.cmp(&n.spot.id()) {
                Ordering::Equal => return Some(r),
                Ordering::Less => current = n.left,
                Ordering::Greater => current = n.right,
            }
        }
        None
    }

    fn insert_at(
        &mut self,
        node: Option<NodeRef>,
        spot: Spot,
    ) -> Result<NodeRef, DuplicateIdError> {
        let Some(r) = node else {
            return Ok(self.alloc(spot));
        };
        let key = spot.id();
        match key.cmp(&self.node(r).spot.id()) {
            Ordering::Less => {
                let left = self.node(r).left;
                let child = self.insert_at(left, spot)?;
                self.node_mut(r).left = Some(child);
            }
            Ordering::Greater => {
                let right = self.node(r).right;
                let child = self.insert_at(right, spot)?;
                self.node_mut(r).right = Some(child);
            }
            Ordering::Equal => return Err(DuplicateIdError::new(key)),
        }
        self.update_height(r);
        Ok(self.rebalance_after_insert(r, key))
    }

    // Four standard cases, picked by comparing the freshly inserted key
    // against the pivot keys on the heavy side.
    fn rebalance_after_insert(&mut self, r: NodeRef, inserted: SpotId) -> NodeRef {
        let balance = self.balance_factor(r);
        if balance > 1 {
            let left = self.node(r).left.expect("left-heavy node has left child");
            if inserted < self.node(left).spot.id() {
                // left-left
                return self.rotate_right(r);
            }
            // left-right
            let rotated = self.rotate_left(left);
            self.node_mut(r).left = Some(rotated);
            return self.rotate_right(r);
        }
        if balance < -1 {
            let right = self
                .node(r)
                .right
                .expect("right-heavy node has right child");
            if inserted > self.node(right).spot.id() {
                // right-right
                return self.rotate_left(r);
            }
            // right-left
            let rotated = self.rotate_right(right);
            self.node_mut(r).right = Some(rotated);
            return self.rotate_left(r);
        }
        r
    }

    fn remove_at(
        &mut self,
        node: Option<NodeRef>,
        id: SpotId,
    ) -> Result<(Option<NodeRef>, Spot), UnknownIdError> {
        let Some(r) = node else {
            return Err(UnknownIdError::new(id));
        };
        let removed;
        match id.cmp(&self.node(r).spot.id()) {
            Ordering::Less => {
                let left = self.node(r).left;
                let (child, spot) = self.remove_at(left, id)?;
                self.node_mut(r).left = child;
                removed = spot;
            }
            Ordering::Greater => {
                let right = self.node(r).right;
                let (child, spot) = self.remove_at(right, id)?;
                self.node_mut(r).right = child;
                removed = spot;
            }
            Ordering::Equal => {
                let (left, right) = {
                    let n = self.node(r);
                    (n.left, n.right)
                };
                match (left, right) {
                    (None, None) => {
                        let spot = self.node(r).spot;
                        self.release(r);
                        return Ok((None, spot));
                    }
                    (Some(child), None) | (None, Some(child)) => {
                        let spot = self.node(r).spot;
                        self.release(r);
                        return Ok((Some(child), spot));
                    }
                    (Some(_), Some(right)) => {
                        // Two children: substitute the in-order successor's
                        // value, then delete the successor from the right
                        // subtree.
                        let successor = self.min_spot(right);
                        removed =
                            std::mem::replace(&mut self.node_mut(r).spot, successor);
                        let (child, _) = self
                            .remove_at(Some(right), successor.id())
                            .expect("successor exists in right subtree");
                        self.node_mut(r).right = child;
                    }
                }
            }
        }
        self.update_height(r);
        Ok((Some(self.rebalance_after_remove(r)), removed))
    }

    // After a deletion the inserted-key heuristic does not apply; the case
    // is picked from the balance factor of the heavy child.
    fn rebalance_after_remove(&mut self, r: NodeRef) -> NodeRef {
        let balance = self.balance_factor(r);
        if balance > 1 {
            let left = self.node(r).left.expect("left-heavy node has left child");
            if self.balance_factor(left) >= 0 {
                return self.rotate_right(r);
            }
            let rotated = self.rotate_left(left);
            self.node_mut(r).left = Some(rotated);
            return self.rotate_right(r);
        }
        if balance < -1 {
            let right = self
                .node(r)
                .right
                .expect("right-heavy node has right child");
            if self.balance_factor(right) <= 0 {
                return self.rotate_left(r);
            }
            let rotated = self.rotate_right(right);
            self.node_mut(r).right = Some(rotated);
            return self.rotate_left(r);
        }
        r
    }

    fn min_spot(&self, mut r: NodeRef) -> Spot {
        while let Some(left) = self.node(r).left {
            r = left;
        }
        self.node(r).spot
    }
}

impl<'a> IntoIterator for &'a SpotIndex {
    type Item = &'a Spot;
    type IntoIter = InOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order (ascending id) iterator over a [`SpotIndex`].
#[derive(Debug)]
pub struct InOrderIter<'a> {
    index: &'a SpotIndex,
    stack: Vec<NodeRef>,
    next: Option<NodeRef>,
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Spot;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(r) = self.next {
            self.stack.push(r);
            self.next = self.index.node(r).left;
        }
        let r = self.stack.pop()?;
        let n = self.index.node(r);
        self.next = n.right;
        Some(&n.spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::{distance::Distance, money::Money};
    use park_alloc_model::spot::SlotSize;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;

    fn spot(id: u32) -> Spot {
        Spot::new(
            SpotId::new(id),
            SlotSize::Regular,
            Distance::new(id as f64),
            Money::new(5.0),
            Money::new(3.0),
        )
        .expect("valid spot")
    }

    fn ids_in_order(index: &SpotIndex) -> Vec<u32> {
        index.iter().map(|s| s.id().value()).collect()
    }

    #[test]
    fn test_empty_index() {
        let index = SpotIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.height(), 0);
        assert!(index.is_balanced());
        assert_eq!(index.get(SpotId::new(1)), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut index = SpotIndex::new();
        for id in [5u32, 2, 8, 1, 3] {
            index.insert(spot(id)).expect("unique id");
        }
        assert_eq!(index.len(), 5);
        for id in [5u32, 2, 8, 1, 3] {
            let found = index.get(SpotId::new(id)).expect("inserted spot");
            assert_eq!(found.id(), SpotId::new(id));
        }
        assert_eq!(index.get(SpotId::new(42)), None);
    }

    #[test]
    fn test_duplicate_insert_is_rejected_and_tree_unchanged() {
        let mut index = SpotIndex::new();
        for id in 0..10u32 {
            index.insert(spot(id)).expect("unique id");
        }
        let before = ids_in_order(&index);

        let mut duplicate = spot(4);
        duplicate.set_available(false);
        let err = index.insert(duplicate).expect_err("duplicate id");
        assert_eq!(err.id(), SpotId::new(4));

        assert_eq!(index.len(), 10);
        assert_eq!(ids_in_order(&index), before);
        // The original value survives, not the rejected one.
        assert!(index.get(SpotId::new(4)).expect("spot 4").is_available());
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut index = SpotIndex::new();
        for id in 0..1_000u32 {
            index.insert(spot(id)).expect("unique id");
            assert!(index.is_balanced());
        }
        // A balanced tree over 1000 keys is much shallower than the
        // degenerate 1000-deep chain a plain BST would build here.
        assert!(index.height() <= 11);
        assert_eq!(ids_in_order(&index), (0..1_000).collect::<Vec<_>>());
    }

    #[test]
    fn test_descending_inserts_stay_balanced() {
        let mut index = SpotIndex::new();
        for id in (0..500u32).rev() {
            index.insert(spot(id)).expect("unique id");
        }
        assert!(index.is_balanced());
        assert_eq!(ids_in_order(&index), (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_leaf() {
        let mut index = SpotIndex::new();
        for id in [2u32, 1, 3] {
            index.insert(spot(id)).expect("unique id");
        }
        let removed = index.remove(SpotId::new(1)).expect("present");
        assert_eq!(removed.id(), SpotId::new(1));
        assert_eq!(ids_in_order(&index), vec![2, 3]);
        assert!(index.is_balanced());
    }

    #[test]
    fn test_remove_single_child_node() {
        let mut index = SpotIndex::new();
        for id in [2u32, 1, 4, 3] {
            index.insert(spot(id)).expect("unique id");
        }
        let removed = index.remove(SpotId::new(4)).expect("present");
        assert_eq!(removed.id(), SpotId::new(4));
        assert_eq!(ids_in_order(&index), vec![1, 2, 3]);
        assert!(index.is_balanced());
    }

    #[test]
    fn test_remove_two_children_uses_inorder_successor() {
        let mut index = SpotIndex::new();
        for id in [5u32, 2, 8, 1, 3, 7, 9] {
            index.insert(spot(id)).expect("unique id");
        }
        let removed = index.remove(SpotId::new(5)).expect("present");
        assert_eq!(removed.id(), SpotId::new(5));
        assert_eq!(ids_in_order(&index), vec![1, 2, 3, 7, 8, 9]);
        assert!(index.is_balanced());
    }

    #[test]
    fn test_remove_min_until_empty() {
        let mut index = SpotIndex::new();
        for id in 0..64u32 {
            index.insert(spot(id)).expect("unique id");
        }
        while let Some(min_id) = index.iter().next().map(|s| s.id()) {
            index.remove(min_id).expect("present");
            assert!(index.is_balanced());
        }
        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut index = SpotIndex::new();
        index.insert(spot(1)).expect("unique id");
        let err = index.remove(SpotId::new(2)).expect_err("missing");
        assert_eq!(err.id(), SpotId::new(2));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_arena_slots_are_recycled() {
        let mut index = SpotIndex::new();
        for id in 0..8u32 {
            index.insert(spot(id)).expect("unique id");
        }
        for id in 0..4u32 {
            index.remove(SpotId::new(id)).expect("present");
        }
        let arena_len = index.nodes.len();
        for id in 100..104u32 {
            index.insert(spot(id)).expect("unique id");
        }
        // Reinsertions reuse freed slots instead of growing the arena.
        assert_eq!(index.nodes.len(), arena_len);
        assert_eq!(ids_in_order(&index), vec![4, 5, 6, 7, 100, 101, 102, 103]);
        assert!(index.is_balanced());
    }

    #[test]
    fn test_get_mut_updates_stored_spot() {
        let mut index = SpotIndex::new();
        index.insert(spot(1)).expect("unique id");
        index
            .get_mut(SpotId::new(1))
            .expect("present")
            .set_available(false);
        assert!(!index.get(SpotId::new(1)).expect("present").is_available());
    }

    #[test]
    fn test_randomized_inserts_and_removes_keep_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        let mut ids: Vec<u32> = (0..512).collect();
        ids.shuffle(&mut rng);

        let mut index = SpotIndex::new();
        for &id in &ids {
            index.insert(spot(id)).expect("unique id");
        }
        assert!(index.is_balanced());
        assert_eq!(ids_in_order(&index), (0..512).collect::<Vec<_>>());

        let mut live: Vec<u32> = (0..512).collect();
        while live.len() > 100 {
            let victim = live.swap_remove(rng.random_range(0..live.len()));
            index.remove(SpotId::new(victim)).expect("present");
            assert!(index.is_balanced());
        }

        live.sort_unstable();
        assert_eq!(ids_in_order(&index), live);
        for &id in &live {
            assert!(index.contains(SpotId::new(id)));
        }
    }
}
