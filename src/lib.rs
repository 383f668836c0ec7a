//! A circular doubly-linked intrusive list and a string queue built on it.
//!
//! The [`linked_list`] module provides the raw primitive: a sentinel-based
//! circular list with O(1) insert, remove, splice, cut and move operations.
//! The [`queue`] module builds the queue ADT on top of it: head/tail
//! insertion and removal, in-place structural edits (dedup, middle delete,
//! pairwise swap, reversal, k-group reversal), stable merge sort, monotonic
//! filtering, and a k-way merge of several sorted queues.

#![no_std]

extern crate alloc;

pub mod linked_list;
pub mod queue;
