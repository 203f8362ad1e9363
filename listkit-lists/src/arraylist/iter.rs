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
use crate::arraylist::list::ArrayList;
use core::slice;
use std::vec;

/// An iterator over the elements of the [`ArrayList`] from front to
/// back.
///
/// This struct is created by the [`.iter()`](ArrayList#method.iter)
/// method of the [`ArrayList`].
///
/// # Examples
/// ```
/// use listkit::lists::{ArrayList, List};
/// use listkit::lists::arraylist::Iter;
///
/// let mut list = ArrayList::<u8>::new();
/// list.add(1);
/// list.add(2);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

/// An iterator over the elements of the [`ArrayList`] with mutable
/// references that allows each value to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](ArrayList#method.iter_mut) method of the
/// [`ArrayList`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

/// An owning iterator over the elements of the [`ArrayList`]. The
/// elements are handed to the caller and never disposed by the list.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a ArrayList<T>) -> Iter<'a, T> {
        Iter {
            inner: list.data.iter(),
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut ArrayList<T>) -> IterMut<'a, T> {
        IterMut {
            inner: list.data.iter_mut(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(data: Vec<T>) -> IntoIter<T> {
        IntoIter {
            inner: data.into_iter(),
        }
    }
}

macro_rules! delegate_iterator {
    ($name: ident, $item: ty, $($lt: lifetime)?) => {
        impl<$($lt,)? T> Iterator for $name<$($lt,)? T> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? T> ExactSizeIterator for $name<$($lt,)? T> {}
    };
}

delegate_iterator!(Iter, &'a T, 'a);
delegate_iterator!(IterMut, &'a mut T, 'a);
delegate_iterator!(IntoIter, T,);

/// A cursor over an [`ArrayList`] that can remove the element it
/// points to while walking the list front to back.
///
/// The cursor starts at the front. Besides the elements of the list it
/// has two further positions where [`current()`](CursorMut::current)
/// returns `None`: the end of the list and the position before the
/// front, which is where the cursor lands after removing the first
/// element.
///
/// This struct is created by the
/// [`.cursor_mut()`](ArrayList#method.cursor_mut) method of the
/// [`ArrayList`].
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    list: &'a mut ArrayList<T>,
    // None is the position before the front
    index: Option<usize>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ArrayList<T>) -> CursorMut<'a, T> {
        CursorMut {
            list,
            index: Some(0),
        }
    }

    /// Returns a mutable reference to the element under the cursor or
    /// `None` if the cursor is not on an element.
    pub fn current(&mut self) -> Option<&mut T> {
        match self.index {
            Some(i) => self.list.data.get_mut(i),
            None => None,
        }
    }

    /// Returns the index of the element under the cursor or `None` if
    /// the cursor is not on an element.
    pub fn index(&self) -> Option<usize> {
        self.index.filter(|i| *i < self.list.data.len())
    }

    /// Moves the cursor to the next element. Once the cursor reaches
    /// the end of the list it stays there.
    pub fn move_next(&mut self) {
        let len = self.list.data.len();
        self.index = Some(match self.index {
            None => 0,
            Some(i) => (i + 1).min(len),
        });
    }

    /// Removes the element under the cursor and returns it, or returns
    /// `None` if the cursor is not on an element. The cursor moves
    /// back to the previous element (or to the position before the
    /// front) so that the next call to
    /// [`move_next()`](CursorMut::move_next) lands on the element that
    /// followed the removed one.
    pub fn remove(&mut self) -> Option<T> {
        match self.index {
            Some(i) if i < self.list.data.len() => {
                let elem = self.list.data.remove(i);
                self.index = i.checked_sub(1);
                Some(elem)
            }
            _ => None,
        }
    }
}
