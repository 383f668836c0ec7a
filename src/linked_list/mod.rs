//! An intrusive circular doubly linked list.
//!
//! The list is sentinel-based: a [`circular::Link`] initialized on its own
//! is an empty list head, and its neighbors are the first and last members
//! (or itself when empty). There are no null terminators anywhere, which
//! keeps every operation branch-light and O(1).
//!
//! ## Core components
//!
//! - [`circular::Link`]: the link type with insert/remove/splice/cut/move
//!   operations.
//! - [`iter::Iter`] and [`iter::IterSafe`]: forward traversal, the latter
//!   tolerating removal of the yielded link.
//!
//! ## Safety
//!
//! This module uses `unsafe` code extensively to manage raw pointers. The
//! user of this module is responsible for upholding several invariants:
//!
//! - Links must be initialized at their final address before use and must
//!   not move while linked.
//! - A link must not be in two lists at the same time.
//! - When iterating with [`iter::Iter`], the list must not be modified.

pub mod circular;
pub mod iter;
