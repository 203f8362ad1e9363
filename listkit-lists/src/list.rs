/*
   Lists: an array list and a doubly linked list that share a single
   list contract. Both lists accept a custom equality predicate for
   value lookups and a disposal hook for elements they discard.

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

//! The contract shared by every list in this crate along with the
//! hooks that a list can be configured with.

use core::fmt;

/// Decides whether two elements are equal for the purposes of
/// [`index_of`](List::index_of), [`contains`](List::contains) and
/// [`remove_item`](List::remove_item).
///
/// Any closure of the form `Fn(&T, &T) -> bool` is an `Equality<T>`.
/// Lists built with `new()` use [`NativeEq`] which defers to
/// `PartialEq`.
///
/// # Examples
/// ```
/// use listkit::lists::{ArrayList, List};
///
/// let mut list = ArrayList::with_equality(|a: &String, b: &String| {
///     a.eq_ignore_ascii_case(b)
/// });
/// list.add("Alpha".to_string());
/// list.add("Beta".to_string());
/// assert_eq!(list.index_of(&"BETA".to_string()), Some(1));
/// ```
pub trait Equality<T> {
    fn equals(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// The default [`Equality`] which compares elements with `==`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NativeEq;

impl<T: PartialEq> Equality<T> for NativeEq {
    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

/// A hook that takes ownership of an element the list is discarding.
///
/// Lists invoke their disposer on every element they throw away on
/// their own accord: on `clear()`, when dropped, when replaced by
/// `clone_from()` and on [`remove_item`](List::remove_item). Elements
/// that are handed back to the caller (for example by
/// [`remove_at`](List::remove_at)) are never disposed.
///
/// Any closure of the form `Fn(T)` is a `Disposer<T>`.
pub trait Disposer<T> {
    fn dispose(&self, item: T);
}

impl<T, F> Disposer<T> for F
where
    F: Fn(T),
{
    fn dispose(&self, item: T) {
        self(item)
    }
}

/// The error returned when an index falls outside the valid range of
/// the operation it was passed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    index: usize,
    len: usize,
}

impl IndexOutOfRange {
    pub(crate) fn new(index: usize, len: usize) -> IndexOutOfRange {
        IndexOutOfRange { index, len }
    }

    /// The index that was rejected.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the list at the time the index was rejected.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of range for length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Ordered, index addressable sequence of elements. Implemented by
/// [`ArrayList`](crate::arraylist::list::ArrayList) and
/// [`DoublyLinkedList`](crate::linkedlist::list::DoublyLinkedList).
///
/// Value based operations (`index_of`, `contains`, `remove_item`) use
/// the [`Equality`] the list was configured with.
pub trait List<T> {
    /// Appends an element to the end of the list.
    fn add(&mut self, elem: T);

    /// Inserts an element before the element at `index`. An `index`
    /// equal to the length of the list appends. Returns an error and
    /// leaves the list untouched if `index > size()`.
    fn insert(&mut self, index: usize, elem: T) -> Result<(), IndexOutOfRange>;

    /// Removes and returns the element at `index`. The element is
    /// handed back to the caller and is not disposed.
    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange>;

    /// Removes the first element equal to `item` and passes it to the
    /// list's disposer (or drops it if there is none). Returns `false`
    /// if no element matched.
    fn remove_item(&mut self, item: &T) -> bool;

    /// Same as [`remove_item`](List::remove_item) except that the
    /// removed element is passed to `dispose` instead of the list's
    /// own disposer.
    fn remove_item_with<F>(&mut self, item: &T, dispose: F) -> bool
    where
        F: FnOnce(T);

    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange>;

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange>;

    /// Returns the position of the first element equal to `item` or
    /// `None` if there isn't one.
    fn index_of(&self, item: &T) -> Option<usize>;

    fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every element, disposing each one in order, and
    /// returns the list to its initial empty state.
    fn clear(&mut self);

    /// Renders the list as `[e0, e1, ..., en]` using `f` to render
    /// each element.
    fn to_string_with<F>(&self, f: F) -> String
    where
        F: FnMut(&T) -> String;
}

/// Writes `[e0, e1, ...]` into `out`.
pub(crate) fn render<'a, T, I, W, F>(out: &mut W, iter: I, mut f: F) -> fmt::Result
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    W: fmt::Write + ?Sized,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    out.write_char('[')?;
    for (i, e) in iter.enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        f(&mut *out, e)?;
    }
    out.write_char(']')
}

/// Renders `[e0, e1, ...]` into a new string using `f` for each
/// element.
pub(crate) fn render_with<'a, T, I, F>(iter: I, mut f: F) -> String
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    F: FnMut(&T) -> String,
{
    let mut out = String::from("[");
    for (i, e) in iter.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&f(e));
    }
    out.push(']');
    out
}
