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

//! A list backed by a single contiguous buffer. Appends are amortized
//! *O*(*1*), inserts and removes in the middle shift the elements
//! that follow. The capacity doubles whenever the buffer is full and
//! is reset to the default on `clear()`.
pub mod iter;
pub mod list;
