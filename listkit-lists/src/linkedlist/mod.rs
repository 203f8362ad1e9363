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

//! A doubly linked list that owns its nodes in an arena. Appends and
//! prepends are *O*(*1*). Positional access walks from whichever end
//! is closer to the index, so it takes at most *n*/2 steps.
//!
//! The list can be iterated front to back or back to front, and a
//! cursor can remove elements while walking in either direction.
pub mod iter;
pub mod list;
mod node;
