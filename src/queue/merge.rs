//! Merging several sorted queues into one.
//!
//! Each sorted [`Queue`] is wrapped in a [`QueueContext`] whose chain link
//! threads it into an outer circular list, the [`ContextList`]. The merge
//! folds the inner queues pairwise with the same doubling stride the sort
//! uses, draining every queue into the first context's queue.

use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::linked_list::circular::Link;
use crate::linked_list::iter::{Iter, IterSafe};

use super::{Queue, merge_sorted};

/// A record threading one queue into an outer list of queues.
#[derive(Debug)]
pub struct QueueContext {
    chain: Link,
    queue: Queue,
}

impl QueueContext {
    /// The wrapped queue.
    #[inline]
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// The wrapped queue, mutably.
    #[inline]
    pub fn queue_mut(&mut self) -> &mut Queue {
        &mut self.queue
    }

    /// Recovers the context from a pointer to its chain link.
    ///
    /// # Safety
    ///
    /// `chain` must point at the `chain` field of a live `QueueContext`.
    #[inline]
    unsafe fn from_chain(chain: NonNull<Link>) -> NonNull<QueueContext> {
        unsafe {
            NonNull::new_unchecked(
                chain
                    .as_ptr()
                    .byte_sub(mem::offset_of!(QueueContext, chain))
                    .cast(),
            )
        }
    }
}

/// An owned circular list of [`QueueContext`]s.
#[derive(Debug)]
pub struct ContextList {
    head: NonNull<Link>,
}

impl ContextList {
    /// Creates an empty context list.
    pub fn new() -> Self {
        let head = Box::leak(Box::new(Link::new()));
        head.init();
        Self {
            head: NonNull::from(head),
        }
    }

    /// Returns `true` if no contexts are chained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        unsafe { self.head.as_ref() }.is_empty()
    }

    /// Counts the chained contexts. O(n).
    pub fn len(&self) -> usize {
        unsafe { Iter::new(self.head) }.count()
    }

    /// Takes ownership of `queue`, chaining it at the back of the list.
    pub fn push(&mut self, queue: Queue) {
        let ctx = Box::leak(Box::new(QueueContext {
            chain: Link::new(),
            queue,
        }));
        unsafe { Link::insert_before(NonNull::from(&mut ctx.chain), self.head) };
    }

    /// The first context's queue, or `None` when the chain is empty.
    pub fn first_mut(&mut self) -> Option<&mut Queue> {
        unsafe {
            if self.head.as_ref().is_empty() {
                return None;
            }
            let first = self.head.as_ref().next();
            Some(&mut (*QueueContext::from_chain(first).as_ptr()).queue)
        }
    }

    /// Iterates over the chained contexts, front to back.
    pub fn iter(&self) -> Contexts<'_> {
        Contexts {
            inner: unsafe { Iter::new(self.head) },
            _marker: PhantomData,
        }
    }

    /// Merges every context's queue into the first context's queue.
    ///
    /// All queues must already be sorted in the order selected by
    /// `descend`; the merged result keeps that order and every other
    /// context's queue ends empty. Returns the merged size; an empty chain
    /// returns 0, and a single context returns its queue's size unchanged.
    pub fn merge(&mut self, descend: bool) -> usize {
        unsafe {
            let heads: Vec<NonNull<Link>> = Iter::new(self.head)
                .map(|chain| (*QueueContext::from_chain(chain).as_ptr()).queue.head)
                .collect();
            let n = heads.len();
            if n == 0 {
                return 0;
            }

            // Fold pairwise with doubling stride: 0<-1, 2<-3, then 0<-2, ...
            let mut width = 1;
            while width < n {
                let mut i = 0;
                while i + width < n {
                    merge_sorted(heads[i], heads[i + width], descend);
                    i += 2 * width;
                }
                width *= 2;
            }

            Iter::new(heads[0]).count()
        }
    }
}

impl Default for ContextList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ContextList {
    fn drop(&mut self) {
        unsafe {
            for chain in IterSafe::new(self.head) {
                drop(Box::from_raw(QueueContext::from_chain(chain).as_ptr()));
            }
            drop(Box::from_raw(self.head.as_ptr()));
        }
    }
}

unsafe impl Send for ContextList {}
unsafe impl Sync for ContextList {}

/// Iterator over the contexts of a [`ContextList`], front to back.
pub struct Contexts<'a> {
    inner: Iter,
    _marker: PhantomData<&'a ContextList>,
}

impl<'a> Iterator for Contexts<'a> {
    type Item = &'a QueueContext;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|chain| unsafe { &*QueueContext::from_chain(chain).as_ptr() })
    }
}
