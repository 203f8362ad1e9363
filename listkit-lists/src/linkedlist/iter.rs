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
use crate::linkedlist::list::DoublyLinkedList;
use crate::linkedlist::node::{HEAD, TAIL};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IterDirection {
    HeadToTail,
    TailToHead,
}

impl IterDirection {
    fn reverse(self) -> IterDirection {
        match self {
            IterDirection::HeadToTail => IterDirection::TailToHead,
            IterDirection::TailToHead => IterDirection::HeadToTail,
        }
    }

    /// The sentinel the walk starts from.
    fn origin(self) -> usize {
        match self {
            IterDirection::HeadToTail => HEAD,
            IterDirection::TailToHead => TAIL,
        }
    }
}

/// A bidirectional iterator over the elements of the
/// [`DoublyLinkedList`].
///
/// This struct is created by the
/// [`.iter()`](DoublyLinkedList#method.iter) and
/// [`.iter_back()`](DoublyLinkedList#method.iter_back) methods of the
/// [`DoublyLinkedList`].
///
/// # Examples
/// ```
/// use listkit::lists::{DoublyLinkedList, List};
/// use listkit::lists::linkedlist::Iter;
///
/// let mut list = DoublyLinkedList::<u8>::new();
/// list.add(1);
/// list.add(2);
/// list.add(3);
/// list.add(4);
/// list.add(5);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// iter = iter.reverse();
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: usize,
    dir: IterDirection,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            cursor: self.cursor,
            dir: self.dir,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>, dir: IterDirection) -> Iter<'a, T> {
        Iter {
            list,
            cursor: list.step(dir.origin(), dir),
            dir,
        }
    }

    /// Reverses the direction of the iterator. The next element
    /// returned is the one before the element that was returned last,
    /// as seen from the new direction.
    pub fn reverse(mut self) -> Self {
        let back = self.dir.reverse();
        let last = self.list.step(self.cursor, back);
        self.cursor = self.list.step(last, back);
        self.dir = back;
        self
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.list;
        let val = list.val(self.cursor)?;
        self.cursor = list.step(self.cursor, self.dir);
        Some(val)
    }
}

/// An iterator over the elements of the [`DoublyLinkedList`] with
/// mutable references that allows each value to be modified.
///
/// The iterator collects a mutable reference to every element of the
/// arena, keyed by slot, up front and then follows the links of the
/// list through them.
///
/// This struct is created by the
/// [`.iter_mut()`](DoublyLinkedList#method.iter_mut) and
/// [`.iter_back_mut()`](DoublyLinkedList#method.iter_back_mut)
/// methods of the [`DoublyLinkedList`].
///
/// # Examples
/// ```
/// use listkit::lists::{DoublyLinkedList, List};
///
/// let mut list: DoublyLinkedList<u8> = (1..4).collect();
/// for e in list.iter_mut() {
///     *e *= 10;
/// }
/// assert_eq!(list.to_string(), "[10, 20, 30]");
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    // slot key -> (element, key of the following node)
    slots: HashMap<usize, (&'a mut T, usize)>,
    cursor: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>, dir: IterDirection) -> IterMut<'a, T> {
        let cursor = list.step(dir.origin(), dir);
        let mut slots = HashMap::with_capacity(list.len());
        for (key, node) in list.nodes.iter_mut() {
            let following = match dir {
                IterDirection::HeadToTail => node.next,
                IterDirection::TailToHead => node.prev,
            };
            if let Some(val) = node.val.as_mut() {
                slots.insert(key, (val, following));
            }
        }
        IterMut { slots, cursor }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (val, following) = self.slots.remove(&self.cursor)?;
        self.cursor = following;
        Some(val)
    }
}

/// An owning iterator over the elements of the [`DoublyLinkedList`]
/// from front to back. The elements are handed to the caller and
/// never disposed by the list.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: DoublyLinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// A cursor over a [`DoublyLinkedList`] that can remove the element it
/// points to while walking the list in one direction.
///
/// Besides the elements of the list the cursor can sit on either
/// sentinel, where [`current()`](CursorMut::current) returns
/// `None`. Removing an element moves the cursor back to the node
/// behind it, which may be a sentinel, so that the next call to
/// [`move_next()`](CursorMut::move_next) lands on the element that
/// followed the removed one.
///
/// This struct is created by the
/// [`.cursor_mut()`](DoublyLinkedList#method.cursor_mut) and
/// [`.cursor_back_mut()`](DoublyLinkedList#method.cursor_back_mut)
/// methods of the [`DoublyLinkedList`].
///
/// # Examples
/// ```
/// use listkit::lists::{DoublyLinkedList, List};
///
/// let mut list: DoublyLinkedList<u8> = (1..=5).collect();
/// let mut cursor = list.cursor_back_mut();
/// assert_eq!(cursor.current(), Some(&mut 5));
/// cursor.move_next();
/// assert_eq!(cursor.remove(), Some(4));
/// assert_eq!(cursor.current(), Some(&mut 5));
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&mut 3));
/// assert_eq!(list.to_string(), "[1, 2, 3, 5]");
/// ```
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    list: &'a mut DoublyLinkedList<T>,
    key: usize,
    dir: IterDirection,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>, dir: IterDirection) -> CursorMut<'a, T> {
        CursorMut {
            key: list.step(dir.origin(), dir),
            list,
            dir,
        }
    }

    /// Returns a mutable reference to the element under the cursor or
    /// `None` if the cursor is on a sentinel.
    pub fn current(&mut self) -> Option<&mut T> {
        self.list.val_mut(self.key)
    }

    /// Moves the cursor one node in its direction. Once the cursor
    /// reaches the end of the list it stays there.
    pub fn move_next(&mut self) {
        self.key = self.list.step(self.key, self.dir);
    }

    /// Removes the element under the cursor and returns it, or returns
    /// `None` if the cursor is on a sentinel. The element is handed
    /// back and not disposed.
    pub fn remove(&mut self) -> Option<T> {
        let behind = self.list.step(self.key, self.dir.reverse());
        let elem = self.list.unlink(self.key)?;
        self.key = behind;
        Some(elem)
    }
}
