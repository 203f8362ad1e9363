//! Generic list containers that share one positional contract and
//! take pluggable element equality and element disposal.

/// An array list and a doubly linked list, both implementing the
/// [`List`] trait.
pub mod lists {
    pub use listkit_lists::arraylist::list::ArrayList;
    pub use listkit_lists::linkedlist::list::DoublyLinkedList;
    pub use listkit_lists::list::Disposer;
    pub use listkit_lists::list::Equality;
    pub use listkit_lists::list::IndexOutOfRange;
    pub use listkit_lists::list::List;
    pub use listkit_lists::list::NativeEq;

    /// This module contains structs specific to the [`ArrayList`]
    pub mod arraylist {
        pub use listkit_lists::arraylist::iter::CursorMut;
        pub use listkit_lists::arraylist::iter::IntoIter;
        pub use listkit_lists::arraylist::iter::Iter;
        pub use listkit_lists::arraylist::iter::IterMut;
        /// The capacity of an [`ArrayList`](super::ArrayList) created
        /// without an explicit capacity.
        pub use listkit_lists::arraylist::list::DEFAULT_CAPACITY;
    }

    /// This module contains structs specific to the [`DoublyLinkedList`]
    pub mod linkedlist {
        pub use listkit_lists::linkedlist::iter::CursorMut;
        pub use listkit_lists::linkedlist::iter::IntoIter;
        pub use listkit_lists::linkedlist::iter::Iter;
        pub use listkit_lists::linkedlist::iter::IterMut;
    }
}
