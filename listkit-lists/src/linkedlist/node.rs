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

/// Slot of the head sentinel. Its `next` is the first element.
pub(super) const HEAD: usize = 0;
/// Slot of the tail sentinel. Its `prev` is the last element.
pub(super) const TAIL: usize = 1;

/// A node stored in the arena of the list. Sentinels have no value.
///
/// The head sentinel's `prev` points to itself and the tail
/// sentinel's `next` points to itself so that stepping off either end
/// of the list stays on the sentinel.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct InternalNode<T> {
    pub(super) val: Option<T>,
    pub(super) prev: usize,
    pub(super) next: usize,
}

impl<T> InternalNode<T> {
    pub(super) fn new(val: T, prev: usize, next: usize) -> InternalNode<T> {
        InternalNode {
            val: Some(val),
            prev,
            next,
        }
    }

    pub(super) fn sentinel() -> InternalNode<T> {
        InternalNode {
            val: None,
            prev: HEAD,
            next: TAIL,
        }
    }

    pub(super) fn is_sentinel(&self) -> bool {
        self.val.is_none()
    }
}
