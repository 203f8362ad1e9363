/*
   Doubly Linked List: a list of nodes stored in an arena and linked
   by slot key, bracketed by two permanent sentinel nodes.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::linkedlist::iter::{CursorMut, IntoIter, Iter, IterDirection, IterMut};
use crate::linkedlist::node::{InternalNode, HEAD, TAIL};
use crate::list::{self, Disposer, Equality, IndexOutOfRange, List, NativeEq};
use core::fmt;
use core::iter::FromIterator;
use slab::Slab;
use std::rc::Rc;

/// A doubly linked list whose nodes live in an arena owned by the
/// list.
///
/// The nodes link to each other by arena slot rather than by pointer.
/// Two sentinel nodes that never hold an element bracket the list: the
/// head sentinel's `next` is the first element and the tail sentinel's
/// `prev` is the last one, so every insertion and removal is the same
/// four link update regardless of where in the list it happens.
///
/// Positional access walks from whichever end of the list is closer
/// to the index. The list can be iterated in either direction and
/// elements can be removed while iterating with a
/// [`CursorMut`](crate::linkedlist::iter::CursorMut).
///
/// # Getting Started
///
/// ```
/// use listkit::lists::{DoublyLinkedList, List};
///
/// let mut list = DoublyLinkedList::<char>::new();
/// list.add('a');
/// list.add('b');
/// list.add('c');
///
/// assert!(list.remove_item(&'b'));
/// assert_eq!(list.to_string(), "[a, c]");
/// assert_eq!(list.size(), 2);
///
/// let back: String = list.iter_back().collect();
/// assert_eq!(back, "ca");
/// ```
pub struct DoublyLinkedList<T> {
    pub(super) nodes: Slab<InternalNode<T>>,
    len: usize,
    eq: Rc<dyn Equality<T>>,
    disposer: Option<Rc<dyn Disposer<T>>>,
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Creates an empty list that compares elements with `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let list = DoublyLinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList::with_equality(NativeEq)
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list that uses `eq` to compare elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    ///
    /// let mut list = DoublyLinkedList::with_equality(|a: &f64, b: &f64| (a - b).abs() < 0.01);
    /// list.add(1.0);
    /// list.add(2.0);
    /// assert_eq!(list.index_of(&2.001), Some(1));
    /// ```
    pub fn with_equality<E>(eq: E) -> DoublyLinkedList<T>
    where
        E: Equality<T> + 'static,
    {
        DoublyLinkedList {
            nodes: Self::sentinels(),
            len: 0,
            eq: Rc::new(eq),
            disposer: None,
        }
    }

    /// Configures the disposer that receives every element the list
    /// discards (on `clear()`, `remove_item()` or when the list is
    /// dropped).
    pub fn with_disposer<D>(mut self, disposer: D) -> DoublyLinkedList<T>
    where
        D: Disposer<T> + 'static,
    {
        self.set_disposer(disposer);
        self
    }

    pub fn set_disposer<D>(&mut self, disposer: D)
    where
        D: Disposer<T> + 'static,
    {
        self.disposer = Some(Rc::new(disposer));
    }

    /// Removes the disposer so that discarded elements are simply
    /// dropped. Returns `true` if a disposer was configured.
    pub fn remove_disposer(&mut self) -> bool {
        self.disposer.take().is_some()
    }

    pub fn set_equality<E>(&mut self, eq: E)
    where
        E: Equality<T> + 'static,
    {
        self.eq = Rc::new(eq);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element or `None` if the list
    /// is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        self.val(self.nodes[HEAD].next)
    }

    /// Returns a reference to the last element or `None` if the list
    /// is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn back(&self) -> Option<&T> {
        self.val(self.nodes[TAIL].prev)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let key = self.nodes[HEAD].next;
        self.val_mut(key)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let key = self.nodes[TAIL].prev;
        self.val_mut(key)
    }

    /// Adds an element to the front of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.to_string(), "[2, 1]");
    /// ```
    pub fn push_front(&mut self, elem: T) {
        let first = self.nodes[HEAD].next;
        self.link_before(first, elem);
    }

    /// Removes and returns the first element or `None` if the list is
    /// empty. The element is handed back and not disposed.
    ///
    /// This operation should complete in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.nodes[HEAD].next;
        self.unlink(first)
    }

    /// Removes and returns the last element or `None` if the list is
    /// empty. The element is handed back and not disposed.
    ///
    /// This operation should complete in *O*(*1*) time.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.nodes[TAIL].prev;
        self.unlink(last)
    }

    /// Returns `true` if the list holds exactly the elements of
    /// `items`, in order, as decided by the list's equality
    /// predicate.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let list: DoublyLinkedList<u8> = (1..4).collect();
    /// assert!(list.matches(&[1, 2, 3]));
    /// assert!(!list.matches(&[1, 2]));
    /// assert!(!list.matches(&[1, 2, 4]));
    /// ```
    pub fn matches(&self, items: &[T]) -> bool {
        self.len == items.len()
            && self
                .iter()
                .zip(items.iter())
                .all(|(a, b)| self.eq.equals(a, b))
    }

    /// Returns an iterator over the list from front to back.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let list: DoublyLinkedList<u8> = (1..4).collect();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, IterDirection::HeadToTail)
    }

    /// Returns an iterator over the list from back to front.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let list: DoublyLinkedList<u8> = (1..4).collect();
    ///
    /// let mut iter = list.iter_back();
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter_back(&self) -> Iter<'_, T> {
        Iter::new(self, IterDirection::TailToHead)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self, IterDirection::HeadToTail)
    }

    pub fn iter_back_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self, IterDirection::TailToHead)
    }

    /// Returns a cursor on the first element that walks the list
    /// front to back and can remove elements as it goes.
    ///
    /// After [`remove()`](CursorMut::remove) the cursor sits on the
    /// node before the removed one, so that the following
    /// [`move_next()`](CursorMut::move_next) lands on the element that
    /// came after it.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let mut list: DoublyLinkedList<u8> = (1..=6).collect();
    ///
    /// let mut cursor = list.cursor_mut();
    /// while let Some(e) = cursor.current() {
    ///     if *e % 3 == 0 {
    ///         cursor.remove();
    ///     }
    ///     cursor.move_next();
    /// }
    /// assert_eq!(list.to_string(), "[1, 2, 4, 5]");
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, IterDirection::HeadToTail)
    }

    /// Returns a cursor on the last element that walks the list back
    /// to front. After a removal the cursor sits on the node after the
    /// removed one.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, IterDirection::TailToHead)
    }

    /// Prints the list to stdout followed by a newline.
    pub fn println(&self)
    where
        T: fmt::Display,
    {
        println!("{}", self);
    }

    /// Prints the list to stdout, rendering each element with `f`.
    pub fn println_with<F>(&self, f: F)
    where
        F: FnMut(&T) -> String,
    {
        println!("{}", self.to_string_with(f));
    }

    ////////////////////
    //Crate Helpers
    ////////////////////

    /// Returns the key of the node next to `key` in the specified
    /// direction. Stepping off either end stays on the sentinel.
    pub(super) fn step(&self, key: usize, dir: IterDirection) -> usize {
        match dir {
            IterDirection::HeadToTail => self.nodes[key].next,
            IterDirection::TailToHead => self.nodes[key].prev,
        }
    }

    pub(super) fn val(&self, key: usize) -> Option<&T> {
        self.nodes.get(key).and_then(|n| n.val.as_ref())
    }

    pub(super) fn val_mut(&mut self, key: usize) -> Option<&mut T> {
        self.nodes.get_mut(key).and_then(|n| n.val.as_mut())
    }

    /// Unlinks the node at `key`, releases its slot and returns its
    /// value. Returns `None` for a sentinel.
    pub(super) fn unlink(&mut self, key: usize) -> Option<T> {
        if self.nodes.get(key).map_or(true, InternalNode::is_sentinel) {
            return None;
        }
        let node = self.nodes.remove(key);
        self.nodes[node.prev].next = node.next;
        self.nodes[node.next].prev = node.prev;
        self.len -= 1;
        node.val
    }

    ////////////////////
    //Private Helpers
    ////////////////////

    fn sentinels() -> Slab<InternalNode<T>> {
        let mut nodes = Slab::with_capacity(2);
        let head = nodes.insert(InternalNode::sentinel());
        let tail = nodes.insert(InternalNode::sentinel());
        debug_assert_eq!((head, tail), (HEAD, TAIL));
        nodes
    }

    /// Links a new node holding `elem` immediately before the node at
    /// `next` and returns its key.
    fn link_before(&mut self, next: usize, elem: T) -> usize {
        let prev = self.nodes[next].prev;
        let key = self.nodes.insert(InternalNode::new(elem, prev, next));
        self.nodes[prev].next = key;
        self.nodes[next].prev = key;
        self.len += 1;
        key
    }

    /// Returns the key of the node at `index`, walking from the head
    /// when the index is in the first half of the list and from the
    /// tail otherwise. `index` must be less than `len`.
    fn node_at(&self, index: usize) -> usize {
        if index < self.len / 2 {
            let mut cur = self.nodes[HEAD].next;
            for _ in 0..index {
                cur = self.nodes[cur].next;
            }
            cur
        } else {
            let mut cur = self.nodes[TAIL].prev;
            for _ in index + 1..self.len {
                cur = self.nodes[cur].prev;
            }
            cur
        }
    }

    fn find(&self, item: &T) -> Option<usize> {
        let mut cur = self.nodes[HEAD].next;
        while cur != TAIL {
            let node = &self.nodes[cur];
            if let Some(val) = &node.val {
                if self.eq.equals(val, item) {
                    return Some(cur);
                }
            }
            cur = node.next;
        }
        None
    }

    fn dispose(&self, elem: T) {
        match &self.disposer {
            Some(d) => d.dispose(elem),
            None => drop(elem),
        }
    }

    /// Unlinks every node front to back, handing each element to the
    /// disposer. The list stays consistent after each step.
    fn dispose_all(&mut self) {
        while let Some(elem) = self.pop_front() {
            self.dispose(elem);
        }
    }
}

impl<T> List<T> for DoublyLinkedList<T> {
    /// Adds an element to the back of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    fn add(&mut self, elem: T) {
        self.link_before(TAIL, elem);
    }

    /// Inserts an element so that it ends up at `index`. Inserting at
    /// the front or the back links against the sentinel directly;
    /// anywhere else walks from the closer end.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// list.insert(0, 2).unwrap();
    /// list.insert(0, 0).unwrap();
    /// list.insert(1, 1).unwrap();
    /// list.insert(3, 3).unwrap();
    /// assert_eq!(list.to_string(), "[0, 1, 2, 3]");
    ///
    /// assert!(list.insert(5, 5).is_err());
    /// ```
    fn insert(&mut self, index: usize, elem: T) -> Result<(), IndexOutOfRange> {
        let next = if index == 0 {
            self.nodes[HEAD].next
        } else if index == self.len {
            TAIL
        } else if index < self.len {
            self.node_at(index)
        } else {
            return Err(IndexOutOfRange::new(index, self.len));
        };
        self.link_before(next, elem);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        if index >= self.len {
            return Err(IndexOutOfRange::new(index, self.len));
        }
        let key = if index == 0 {
            self.nodes[HEAD].next
        } else if index == self.len - 1 {
            self.nodes[TAIL].prev
        } else {
            self.node_at(index)
        };
        let len = self.len;
        self.unlink(key)
            .ok_or_else(|| IndexOutOfRange::new(index, len))
    }

    fn remove_item(&mut self, item: &T) -> bool {
        match self.find(item).and_then(|key| self.unlink(key)) {
            Some(elem) => {
                self.dispose(elem);
                true
            }
            None => false,
        }
    }

    fn remove_item_with<F>(&mut self, item: &T, dispose: F) -> bool
    where
        F: FnOnce(T),
    {
        match self.find(item).and_then(|key| self.unlink(key)) {
            Some(elem) => {
                dispose(elem);
                true
            }
            None => false,
        }
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        if index >= self.len {
            return Err(IndexOutOfRange::new(index, self.len));
        }
        self.val(self.node_at(index))
            .ok_or_else(|| IndexOutOfRange::new(index, self.len))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let len = self.len;
        if index >= len {
            return Err(IndexOutOfRange::new(index, len));
        }
        let key = self.node_at(index);
        self.val_mut(key)
            .ok_or_else(|| IndexOutOfRange::new(index, len))
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|e| self.eq.equals(e, item))
    }

    fn size(&self) -> usize {
        self.len
    }

    /// Disposes every element front to back and releases the arena,
    /// leaving only the two sentinels.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{DoublyLinkedList, List};
    /// let mut list: DoublyLinkedList<u8> = (0..3).collect();
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.to_string(), "[]");
    /// ```
    fn clear(&mut self) {
        self.dispose_all();
        self.nodes = Self::sentinels();
    }

    fn to_string_with<F>(&self, f: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        list::render_with(self.iter(), f)
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    /// Builds a new chain of nodes holding copies of the elements. The
    /// copy shares the equality predicate and the disposer with
    /// `self`.
    fn clone(&self) -> Self {
        let mut list = DoublyLinkedList {
            nodes: Self::sentinels(),
            len: 0,
            eq: Rc::clone(&self.eq),
            disposer: self.disposer.clone(),
        };
        for elem in self.iter() {
            list.add(elem.clone());
        }
        list
    }

    /// Disposes the current elements of `self` and then copies
    /// `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.dispose_all();
        self.nodes = Self::sentinels();
        self.eq = Rc::clone(&source.eq);
        self.disposer = source.disposer.clone();
        for elem in source.iter() {
            self.add(elem.clone());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list::render(f, self.iter(), |w, e| fmt::Display::fmt(e, w))
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T: PartialEq> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    /// Hands every element to the caller. Elements left behind when the
    /// iterator is dropped are dropped, not disposed.
    fn into_iter(mut self) -> Self::IntoIter {
        self.disposer = None;
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
