/*
   Array List: a growable, contiguous list that doubles its capacity
   when full and shifts elements to insert or remove from the middle.

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

use crate::arraylist::iter::{CursorMut, IntoIter, Iter, IterMut};
use crate::list::{self, Disposer, Equality, IndexOutOfRange, List, NativeEq};
use core::fmt;
use core::iter::FromIterator;
use core::mem;
use std::rc::Rc;

/// The capacity of a list created with [`ArrayList::new()`] and the
/// capacity a list returns to on [`clear()`](List::clear).
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable list backed by one contiguous buffer.
///
/// Elements occupy positions `[0, len)` of a buffer whose capacity is
/// always at least `len`. When an insertion would exceed the capacity
/// the buffer is reallocated with double the capacity and the
/// elements are moved over before the old buffer is released.
///
/// Value lookups use the [`Equality`] the list was built with
/// ([`NativeEq`] by default) and elements that the list discards on
/// its own are handed to the configured [`Disposer`], if any.
///
/// # Getting Started
///
/// ```
/// use listkit::lists::{ArrayList, List};
///
/// let mut list = ArrayList::<u8>::new();
/// list.add(1);
/// list.add(2);
/// list.insert(0, 0).unwrap();
/// assert_eq!(list.to_string(), "[0, 1, 2]");
///
/// assert_eq!(list.remove_at(1), Ok(1));
/// assert_eq!(list.to_string(), "[0, 2]");
/// assert_eq!(list.index_of(&2), Some(1));
/// assert!(!list.contains(&5));
/// ```
pub struct ArrayList<T> {
    pub(super) data: Vec<T>,
    capacity: usize,
    eq: Rc<dyn Equality<T>>,
    disposer: Option<Rc<dyn Disposer<T>>>,
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Creates an empty list with a capacity of
    /// [`DEFAULT_CAPACITY`] that compares elements with `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::lists::ArrayList;
    /// let list = ArrayList::<u8>::new();
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with the specified capacity that
    /// compares elements with `==`. The list doubles its capacity
    /// every time the capacity is exceeded. A list with a capacity of
    /// 0 grows to a capacity of 1 on the first insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::lists::{ArrayList, List};
    /// let mut list = ArrayList::<u8>::with_capacity(2);
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.capacity(), 2);
    ///
    /// // This will result in an allocation and the capacity will be doubled
    /// list.add(3);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> ArrayList<T> {
        ArrayList::with_capacity_and_equality(capacity, NativeEq)
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity that uses
    /// `eq` to compare elements. Element types that do not implement
    /// `PartialEq` can only be stored in lists created this way.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::lists::{ArrayList, List};
    ///
    /// struct Account {
    ///     id: u32,
    ///     balance: i64,
    /// }
    ///
    /// let mut list = ArrayList::with_equality(|a: &Account, b: &Account| a.id == b.id);
    /// list.add(Account { id: 7, balance: 100 });
    /// assert!(list.contains(&Account { id: 7, balance: 0 }));
    /// ```
    pub fn with_equality<E>(eq: E) -> ArrayList<T>
    where
        E: Equality<T> + 'static,
    {
        ArrayList::with_capacity_and_equality(DEFAULT_CAPACITY, eq)
    }

    pub fn with_capacity_and_equality<E>(capacity: usize, eq: E) -> ArrayList<T>
    where
        E: Equality<T> + 'static,
    {
        ArrayList {
            data: Vec::with_capacity(capacity),
            capacity,
            eq: Rc::new(eq),
            disposer: None,
        }
    }

    /// Configures the disposer that receives every element the list
    /// discards (on `clear()`, `remove_item()` or when the list is
    /// dropped).
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::lists::{ArrayList, List};
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let released = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&released);
    /// let mut list = ArrayList::<u8>::new().with_disposer(move |x: u8| sink.borrow_mut().push(x));
    /// list.add(1);
    /// list.add(2);
    /// list.clear();
    /// assert_eq!(*released.borrow(), vec![1, 2]);
    /// ```
    pub fn with_disposer<D>(mut self, disposer: D) -> ArrayList<T>
    where
        D: Disposer<T> + 'static,
    {
        self.set_disposer(disposer);
        self
    }

    /// Replaces the disposer of this list.
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

    /// Replaces the equality predicate of this list.
    pub fn set_equality<E>(&mut self, eq: E)
    where
        E: Equality<T> + 'static,
    {
        self.eq = Rc::new(eq);
    }

    /// Returns the number of elements the list can hold before it
    /// has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Grows the capacity, by doubling it as many times as needed,
    /// until an element can be stored at `index`. Has no effect if the
    /// capacity already exceeds `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::lists::ArrayList;
    /// let mut list = ArrayList::<u8>::with_capacity(3);
    /// list.ensure_capacity(10);
    /// assert_eq!(list.capacity(), 12);
    ///
    /// list.ensure_capacity(5);
    /// assert_eq!(list.capacity(), 12);
    /// ```
    pub fn ensure_capacity(&mut self, index: usize) {
        if index < self.capacity {
            return;
        }
        let mut new_capacity = self.capacity.max(1);
        while new_capacity <= index {
            new_capacity = match new_capacity.checked_mul(2) {
                Some(capacity) => capacity,
                None => panic!("capacity overflow"),
            };
        }
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }

    /// Returns the elements of the list as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn front(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.data.first_mut()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.data.last_mut()
    }

    /// Returns an iterator over the list from front to back. Each call
    /// returns a new iterator that starts at the front.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{ArrayList, List};
    /// let mut list = ArrayList::<u8>::new();
    /// list.add(1);
    /// list.add(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns a cursor positioned at the front of the list that can
    /// remove elements while walking the list.
    ///
    /// After [`remove()`](CursorMut::remove) the cursor sits on the
    /// element before the removed one, so that the following
    /// [`move_next()`](CursorMut::move_next) lands on the element that
    /// came after it.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{ArrayList, List};
    /// let mut list: ArrayList<u8> = (1..=6).collect();
    ///
    /// let mut cursor = list.cursor_mut();
    /// while let Some(e) = cursor.current() {
    ///     if *e % 2 == 0 {
    ///         cursor.remove();
    ///     }
    ///     cursor.move_next();
    /// }
    /// assert_eq!(list.to_string(), "[1, 3, 5]");
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
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

    fn grow_if_full(&mut self) {
        if self.data.len() == self.capacity {
            self.ensure_capacity(self.capacity);
        }
    }

    fn dispose(&self, elem: T) {
        match &self.disposer {
            Some(d) => d.dispose(elem),
            None => drop(elem),
        }
    }

    /// Hands every element, front to back, to the disposer and leaves
    /// the buffer empty.
    fn dispose_all(&mut self) {
        let data = mem::take(&mut self.data);
        match &self.disposer {
            Some(d) => {
                for elem in data {
                    d.dispose(elem);
                }
            }
            None => drop(data),
        }
    }
}

impl<T> List<T> for ArrayList<T> {
    /// Appends an element, doubling the capacity first if the list is
    /// full.
    ///
    /// This operation should complete in amortized *O*(*1*) time.
    fn add(&mut self, elem: T) {
        self.grow_if_full();
        self.data.push(elem);
    }

    /// Inserts an element at `index`, shifting all elements after it
    /// to the right.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{ArrayList, List};
    /// let mut list = ArrayList::<u8>::new();
    /// list.add(1);
    /// list.insert(1, 3).unwrap();
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2, 3]");
    ///
    /// assert!(list.insert(9, 9).is_err());
    /// ```
    fn insert(&mut self, index: usize, elem: T) -> Result<(), IndexOutOfRange> {
        if index > self.data.len() {
            return Err(IndexOutOfRange::new(index, self.data.len()));
        }
        self.grow_if_full();
        self.data.insert(index, elem);
        Ok(())
    }

    /// Removes the element at `index`, shifting all elements after it
    /// to the left.
    ///
    /// This operation should complete in *O*(*n*) time.
    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        if index >= self.data.len() {
            return Err(IndexOutOfRange::new(index, self.data.len()));
        }
        Ok(self.data.remove(index))
    }

    fn remove_item(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            None => false,
            Some(index) => {
                let elem = self.data.remove(index);
                self.dispose(elem);
                true
            }
        }
    }

    fn remove_item_with<F>(&mut self, item: &T, dispose: F) -> bool
    where
        F: FnOnce(T),
    {
        match self.index_of(item) {
            None => false,
            Some(index) => {
                dispose(self.data.remove(index));
                true
            }
        }
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or_else(|| IndexOutOfRange::new(index, len))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| IndexOutOfRange::new(index, len))
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|e| self.eq.equals(e, item))
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    /// Disposes every element front to back and resets the capacity to
    /// [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    /// ```
    /// use listkit::lists::{ArrayList, List};
    /// let mut list = ArrayList::<u8>::with_capacity(1);
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.capacity(), 2);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    fn clear(&mut self) {
        self.dispose_all();
        self.data = Vec::with_capacity(DEFAULT_CAPACITY);
        self.capacity = DEFAULT_CAPACITY;
    }

    fn to_string_with<F>(&self, f: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        list::render_with(self.data.iter(), f)
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    /// Copies the elements into a new buffer of exactly the same
    /// capacity. The copy shares the equality predicate and the
    /// disposer with `self`.
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().cloned());
        ArrayList {
            data,
            capacity: self.capacity,
            eq: Rc::clone(&self.eq),
            disposer: self.disposer.clone(),
        }
    }

    /// Disposes the current elements of `self` and then copies
    /// `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.dispose_all();
        self.eq = Rc::clone(&source.eq);
        self.disposer = source.disposer.clone();
        self.capacity = source.capacity;
        self.data = Vec::with_capacity(source.capacity);
        self.data.extend(source.data.iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .field("disposer", &self.disposer.is_some())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list::render(f, self.data.iter(), |w, e| fmt::Display::fmt(e, w))
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: PartialEq> Default for ArrayList<T> {
    fn default() -> Self {
        ArrayList::new()
    }
}

impl<T: PartialEq> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    /// Hands every element to the caller. None of them are disposed.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(mem::take(&mut self.data))
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use std::cell::RefCell;

    macro_rules! assert_elems {
        ($list:ident, [$($val:expr),*]) => {
            let expected: Vec<_> = vec![$($val),*];
            assert_eq!($list.as_slice(), &expected[..]);
            assert_eq!($list.size(), expected.len());
            assert!($list.size() <= $list.capacity());
        };
    }

    /// Disposer that records every element it receives.
    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(T)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |x: T| sink.borrow_mut().push(x))
    }

    #[test]
    fn test_new() {
        let list = ArrayList::<u8>::new();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_add_grows_by_doubling() {
        let mut list = ArrayList::<u32>::with_capacity(2);
        list.add(1);
        list.add(2);
        assert_eq!(list.capacity(), 2);
        list.add(3);
        assert_eq!(list.capacity(), 4);
        list.add(4);
        list.add(5);
        assert_eq!(list.capacity(), 8);
        assert_elems!(list, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_capacity_zero() {
        let mut list = ArrayList::<u8>::with_capacity(0);
        list.add(1);
        assert_eq!(list.capacity(), 1);
        list.add(2);
        assert_eq!(list.capacity(), 2);
        list.insert(0, 0).unwrap();
        assert_eq!(list.capacity(), 4);
        assert_elems!(list, [0, 1, 2]);
    }

    #[test]
    fn test_ensure_capacity() {
        let mut list = ArrayList::<u8>::with_capacity(3);
        list.ensure_capacity(2);
        assert_eq!(list.capacity(), 3);
        list.ensure_capacity(3);
        assert_eq!(list.capacity(), 6);
        list.ensure_capacity(24);
        assert_eq!(list.capacity(), 48);

        let mut list = ArrayList::<u8>::with_capacity(0);
        list.ensure_capacity(0);
        assert_eq!(list.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_ensure_capacity_overflow() {
        let mut list = ArrayList::<u8>::with_capacity(1);
        list.ensure_capacity(usize::MAX);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut list = ArrayList::<u8>::new();
        assert_eq!(list.len(), 0);
        assert!(ArrayList::is_empty(&list));
        list.add(1);
        assert_eq!(list.len(), 1);
        assert!(!ArrayList::is_empty(&list));
    }

    #[test]
    fn test_scenario() {
        let mut list = ArrayList::<i32>::new();
        list.add(1);
        list.add(2);
        list.insert(0, 0).unwrap();
        assert_elems!(list, [0, 1, 2]);

        assert_eq!(list.remove_at(1), Ok(1));
        assert_elems!(list, [0, 2]);
        assert_eq!(list.index_of(&2), Some(1));
        assert_eq!(list.contains(&5), false);
    }

    #[test]
    fn test_insert() {
        let mut list = ArrayList::<u8>::new();
        list.insert(0, 3).unwrap();
        list.insert(0, 1).unwrap();
        list.insert(1, 2).unwrap();
        list.insert(3, 4).unwrap();
        assert_elems!(list, [1, 2, 3, 4]);
        assert_eq!(list.get(1), Ok(&2));
        assert_eq!(list.get(2), Ok(&3));
    }

    #[test]
    fn test_out_of_range() {
        let mut list = ArrayList::<u8>::new();
        assert_eq!(list.get(0), Err(IndexOutOfRange::new(0, 0)));
        assert_eq!(list.remove_at(0), Err(IndexOutOfRange::new(0, 0)));
        assert_eq!(list.insert(1, 1), Err(IndexOutOfRange::new(1, 0)));

        list.add(1);
        list.add(2);
        assert_eq!(list.get(2), Err(IndexOutOfRange::new(2, 2)));
        assert_eq!(list.get_mut(5).unwrap_err().index(), 5);
        assert_eq!(list.remove_at(2), Err(IndexOutOfRange::new(2, 2)));
        assert_eq!(list.insert(3, 3), Err(IndexOutOfRange::new(3, 2)));
        assert_elems!(list, [1, 2]);
    }

    #[test]
    fn test_get_mut() {
        let mut list: ArrayList<u8> = (0..3).collect();
        *list.get_mut(1).unwrap() = 10;
        *list.front_mut().unwrap() += 5;
        *list.back_mut().unwrap() += 5;
        assert_elems!(list, [5, 10, 7]);
    }

    #[test]
    fn test_remove_item() {
        let mut list: ArrayList<&str> = vec!["a", "b", "c", "b"].into_iter().collect();
        assert!(list.remove_item(&"b"));
        assert_elems!(list, ["a", "c", "b"]);
        assert!(!list.remove_item(&"z"));
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_remove_item_disposes() {
        let (seen, disposer) = recorder();
        let mut list = ArrayList::<u8>::new().with_disposer(disposer);
        list.extend(vec![1, 2, 3]);

        assert!(list.remove_item(&2));
        assert_eq!(*seen.borrow(), vec![2]);

        // a per call disposer takes precedence over the list's disposer
        let mut taken = None;
        assert!(list.remove_item_with(&3, |x| taken = Some(x)));
        assert_eq!(taken, Some(3));
        assert_eq!(*seen.borrow(), vec![2]);

        // remove_at hands the element back without disposing it
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_custom_equality() {
        let mut list = ArrayList::with_equality(|a: &i32, b: &i32| a.abs() == b.abs());
        list.extend(vec![3, -4, 5]);
        assert_eq!(list.index_of(&4), Some(1));
        assert!(list.contains(&-5));
        assert!(list.remove_item(&-3));
        assert_elems!(list, [-4, 5]);

        list.set_equality(NativeEq);
        assert_eq!(list.index_of(&4), None);
    }

    #[test]
    fn test_to_string() {
        let mut list = ArrayList::<u8>::new();
        assert_eq!(list.to_string(), "[]");
        list.add(1);
        assert_eq!(list.to_string(), "[1]");
        list.add(2);
        list.add(3);
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(list.to_string_with(|e| format!("<{}>", e)), "[<1>, <2>, <3>]");
    }

    #[test]
    fn test_clear() {
        let (seen, disposer) = recorder();
        let mut list = ArrayList::<u8>::with_capacity(2).with_disposer(disposer);
        list.extend(vec![4, 5, 6]);
        assert_eq!(list.capacity(), 4);

        list.clear();
        assert_eq!(*seen.borrow(), vec![4, 5, 6]);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);

        list.clear();
        assert_eq!(seen.borrow().len(), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn test_drop_disposes() {
        let (seen, disposer) = recorder();
        {
            let mut list = ArrayList::<u8>::new().with_disposer(disposer);
            list.extend(vec![7, 8]);
        }
        assert_eq!(*seen.borrow(), vec![7, 8]);

        let (seen, disposer) = recorder::<u8>();
        {
            let _list = ArrayList::<u8>::new().with_disposer(disposer);
        }
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_remove_disposer() {
        let (seen, disposer) = recorder();
        let mut list = ArrayList::<u8>::new().with_disposer(disposer);
        list.add(1);
        assert!(list.remove_disposer());
        assert!(!list.remove_disposer());
        list.clear();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_into_iter_does_not_dispose() {
        let (seen, disposer) = recorder();
        let mut list = ArrayList::<u8>::new().with_disposer(disposer);
        list.extend(vec![1, 2, 3]);
        let collected: Vec<u8> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_clone_independence() {
        let mut a = ArrayList::<u8>::with_capacity(4);
        a.extend(vec![1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(b.capacity(), 4);
        assert_eq!(a, b);

        b.add(4);
        b.remove_at(0).unwrap();
        assert_elems!(a, [1, 2, 3]);
        assert_elems!(b, [2, 3, 4]);

        a.clear();
        assert_elems!(b, [2, 3, 4]);
    }

    #[test]
    fn test_clone_shares_hooks() {
        let (seen, disposer) = recorder();
        let mut a = ArrayList::with_equality(|x: &u8, y: &u8| x / 10 == y / 10)
            .with_disposer(disposer);
        a.extend(vec![11, 25]);
        let mut b = a.clone();
        assert_eq!(b.index_of(&29), Some(1));
        b.clear();
        assert_eq!(*seen.borrow(), vec![11, 25]);
        assert_elems!(a, [11, 25]);
    }

    #[test]
    fn test_clone_from_disposes_old() {
        let (seen, disposer) = recorder();
        let mut dst = ArrayList::<u8>::new().with_disposer(disposer);
        dst.extend(vec![1, 2]);
        let mut src = ArrayList::<u8>::with_capacity(3);
        src.extend(vec![9]);

        dst.clone_from(&src);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_elems!(dst, [9]);
        assert_eq!(dst.capacity(), 3);

        // the source had no disposer and neither does the copy now
        dst.clear();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_iter() {
        let mut list: ArrayList<u8> = (0..10).collect();
        let mut count = 0;
        for val in list.iter() {
            assert_eq!(*val, count);
            count += 1;
        }
        assert_eq!(count, 10);

        for val in &mut list {
            *val += 1;
        }
        let collected: Vec<u8> = list.iter().copied().collect();
        assert_eq!(collected, (1..11).collect::<Vec<u8>>());

        // iteration restarts from the front every time
        assert_eq!(list.iter().next(), Some(&1));
        assert_eq!(list.iter().len(), 10);
    }

    #[test]
    fn test_iter_clone_without_clone_elements() {
        struct Opaque(u8);

        let mut list = ArrayList::with_equality(|a: &Opaque, b: &Opaque| a.0 == b.0);
        list.add(Opaque(1));
        list.add(Opaque(2));
        let mut iter = list.iter();
        assert_eq!(iter.next().map(|e| e.0), Some(1));
        let rest = iter.clone();
        assert_eq!(iter.map(|e| e.0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(rest.map(|e| e.0).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_cursor_remove() {
        let mut list: ArrayList<u8> = (0..6).collect();
        let mut cursor = list.cursor_mut();
        while let Some(e) = cursor.current() {
            if *e % 2 == 0 {
                assert!(cursor.remove().is_some());
            }
            cursor.move_next();
        }
        assert_elems!(list, [1, 3, 5]);

        let mut cursor = list.cursor_mut();
        while cursor.current().is_some() {
            cursor.remove();
            cursor.move_next();
        }
        assert!(list.is_empty());
        assert_eq!(list.cursor_mut().remove(), None);
    }

    #[test]
    fn test_cursor_index() {
        let mut list: ArrayList<u8> = (0..3).collect();
        let mut cursor = list.cursor_mut();
        assert_eq!(cursor.index(), Some(0));
        cursor.move_next();
        assert_eq!(cursor.remove(), Some(1));
        assert_eq!(cursor.index(), Some(0));
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&mut 2));
        cursor.move_next();
        assert_eq!(cursor.index(), None);
        assert_eq!(cursor.current(), None);
        cursor.move_next();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_random_ops() {
        let mut rng = rand::thread_rng();
        let mut list = ArrayList::<u16>::with_capacity(1);
        let mut model: Vec<u16> = Vec::new();

        for _ in 0..2000 {
            let len = model.len();
            match rng.gen_range(0..5) {
                0 => {
                    let v = rng.gen::<u16>();
                    list.add(v);
                    model.push(v);
                }
                1 => {
                    let i = rng.gen_range(0..len + 2);
                    let v = rng.gen::<u16>();
                    if i <= len {
                        assert_eq!(list.insert(i, v), Ok(()));
                        model.insert(i, v);
                    } else {
                        assert!(list.insert(i, v).is_err());
                    }
                }
                2 => {
                    let i = rng.gen_range(0..len + 1);
                    if i < len {
                        assert_eq!(list.remove_at(i), Ok(model.remove(i)));
                    } else {
                        assert!(list.remove_at(i).is_err());
                    }
                }
                3 if len > 0 => {
                    let v = model[rng.gen_range(0..len)];
                    assert_eq!(list.index_of(&v), model.iter().position(|e| *e == v));
                    assert!(list.remove_item(&v));
                    let pos = model.iter().position(|e| *e == v).unwrap();
                    model.remove(pos);
                }
                _ => {
                    if len > 0 {
                        let i = rng.gen_range(0..len);
                        assert_eq!(list.get(i), Ok(&model[i]));
                    }
                }
            }
            assert_eq!(list.as_slice(), &model[..]);
            assert!(list.size() <= list.capacity());
        }
    }
}
