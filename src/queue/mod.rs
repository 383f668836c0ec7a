//! A queue of owned strings backed by the circular intrusive list.
//!
//! Every [`Element`] embeds a [`Link`] and owns one heap string; the
//! [`Queue`] owns a boxed sentinel plus every element reachable from it.
//! All structural operations are in-place pointer surgery on the links and
//! keep the circular invariant intact on every return path.
//!
//! # Examples
//!
//! ```
//! use ringlist::queue::Queue;
//!
//! let mut q = Queue::new();
//! q.insert_tail("banana");
//! q.insert_tail("apple");
//! q.insert_tail("cherry");
//!
//! q.sort(false);
//! let sorted: Vec<&str> = q.values().collect();
//! assert_eq!(sorted, ["apple", "banana", "cherry"]);
//!
//! let front = q.remove_head().unwrap();
//! assert_eq!(front.value(), "apple");
//! assert_eq!(q.size(), 2);
//! ```

use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::linked_list::circular::Link;
use crate::linked_list::iter::{Iter, IterSafe};

pub mod merge;

#[cfg(test)]
mod tests;

/// A queue element: one owned string threaded into a queue by its embedded
/// link.
///
/// Elements are created by the insert operations and either released by the
/// queue or handed to the caller by `remove_head`/`remove_tail`, which
/// transfer ownership out of the queue.
#[derive(Debug)]
pub struct Element {
    value: String,
    list: Link,
}

impl Element {
    fn new(s: &str) -> Self {
        Self {
            value: String::from(s),
            list: Link::new(),
        }
    }

    /// The element's string value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the element, returning its string value.
    #[inline]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Recovers the element from a pointer to its embedded link.
    ///
    /// # Safety
    ///
    /// `link` must point at the `list` field of a live `Element`.
    #[inline]
    pub(crate) unsafe fn from_link(link: NonNull<Link>) -> NonNull<Element> {
        unsafe {
            NonNull::new_unchecked(
                link.as_ptr()
                    .byte_sub(mem::offset_of!(Element, list))
                    .cast(),
            )
        }
    }

    /// The embedded link of a live element.
    ///
    /// # Safety
    ///
    /// `elem` must point at a live `Element`.
    #[inline]
    unsafe fn link_of(elem: NonNull<Element>) -> NonNull<Link> {
        unsafe { NonNull::new_unchecked(&raw mut (*elem.as_ptr()).list) }
    }
}

unsafe impl Send for Element {}
unsafe impl Sync for Element {}

/// Frees the element owning `link`. The link must already be detached.
#[inline]
unsafe fn release(link: NonNull<Link>) {
    unsafe { drop(Box::from_raw(Element::from_link(link).as_ptr())) }
}

/// The string value of the element owning `link`.
#[inline]
unsafe fn value_of<'a>(link: NonNull<Link>) -> &'a str {
    unsafe { (*Element::from_link(link).as_ptr()).value() }
}

/// Reverses the member order of the list headed by `head` in place.
///
/// Walks front to back, moving each member to the front; the safe iterator
/// tolerates the relocation of the yielded link.
unsafe fn reverse_links(head: NonNull<Link>) {
    unsafe {
        for link in IterSafe::new(head) {
            Link::move_front(link, head);
        }
    }
}

/// Merges the sorted list headed by `src` into the sorted list headed by
/// `dst`, leaving `src` empty. Stable: on equal values the `dst` member
/// comes first.
///
/// # Safety
///
/// Both heads must be well-formed and sorted in the order selected by
/// `descend`, and must belong to queues of [`Element`]s.
pub(crate) unsafe fn merge_sorted(dst: NonNull<Link>, src: NonNull<Link>, descend: bool) {
    unsafe {
        if (*src.as_ptr()).is_empty() {
            return;
        }
        if (*dst.as_ptr()).is_empty() {
            Link::splice_init(src, dst);
            return;
        }

        let mut merged = Link::new();
        merged.init();
        let merged = NonNull::from(&mut merged);

        while !(*dst.as_ptr()).is_empty() && !(*src.as_ptr()).is_empty() {
            let a = (*dst.as_ptr()).next();
            let b = (*src.as_ptr()).next();
            let take_a = if descend {
                value_of(a) >= value_of(b)
            } else {
                value_of(a) <= value_of(b)
            };
            Link::move_back(if take_a { a } else { b }, merged);
        }

        // At most one side still has members; both splices guard the
        // empty case.
        Link::splice_tail_init(src, merged);
        Link::splice_tail_init(dst, merged);
        Link::splice(merged, dst);
    }
}

/// A queue of strings, identified by its boxed sentinel link.
///
/// Size is a derived property: [`size`](Queue::size) counts the members in
/// O(n) rather than caching a length through the pointer surgery below.
#[derive(Debug)]
pub struct Queue {
    head: NonNull<Link>,
}

impl Queue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let head = Box::leak(Box::new(Link::new()));
        head.init();
        Self {
            head: NonNull::from(head),
        }
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        unsafe { self.head.as_ref() }.is_empty()
    }

    /// Counts the elements in the queue. O(n).
    pub fn size(&self) -> usize {
        unsafe { Iter::new(self.head) }.count()
    }

    /// Iterates over the element values, front to back.
    pub fn values(&self) -> Values<'_> {
        Values {
            inner: unsafe { Iter::new(self.head) },
            _marker: PhantomData,
        }
    }

    /// Inserts a copy of `s` at the front of the queue.
    pub fn insert_head(&mut self, s: &str) {
        let elem = NonNull::from(Box::leak(Box::new(Element::new(s))));
        unsafe { Link::insert_after(Element::link_of(elem), self.head) };
    }

    /// Inserts a copy of `s` at the back of the queue.
    pub fn insert_tail(&mut self, s: &str) {
        let elem = NonNull::from(Box::leak(Box::new(Element::new(s))));
        unsafe { Link::insert_before(Element::link_of(elem), self.head) };
    }

    /// Detaches and returns the front element, or `None` on an empty queue.
    pub fn remove_head(&mut self) -> Option<Box<Element>> {
        unsafe {
            if self.head.as_ref().is_empty() {
                return None;
            }
            let first = self.head.as_ref().next();
            Link::remove_init(first);
            Some(Box::from_raw(Element::from_link(first).as_ptr()))
        }
    }

    /// Detaches and returns the back element, or `None` on an empty queue.
    pub fn remove_tail(&mut self) -> Option<Box<Element>> {
        unsafe {
            if self.head.as_ref().is_empty() {
                return None;
            }
            let last = self.head.as_ref().prev();
            Link::remove_init(last);
            Some(Box::from_raw(Element::from_link(last).as_ptr()))
        }
    }

    /// Releases every element, leaving the queue empty.
    pub fn clear(&mut self) {
        unsafe {
            for link in IterSafe::new(self.head) {
                release(link);
            }
            Link::reinit(self.head);
        }
    }

    /// Removes and releases the element at index ⌈(n−1)/2⌉.
    ///
    /// Two pointers walk inward from both ends so the list is scanned once;
    /// whichever the forward pointer rests on when they meet or become
    /// adjacent is the middle. Returns `false` on an empty queue.
    pub fn delete_mid(&mut self) -> bool {
        unsafe {
            if self.head.as_ref().is_empty() {
                return false;
            }
            let mut left = self.head.as_ref().prev();
            let mut right = self.head.as_ref().next();
            loop {
                if left == right || right.as_ref().prev() == left {
                    Link::remove(right);
                    release(right);
                    return true;
                }
                left = left.as_ref().prev();
                right = right.as_ref().next();
            }
        }
    }

    /// Releases every run of two or more consecutive equal values, first
    /// occurrence included; only values occurring exactly once survive.
    ///
    /// The queue must be sorted, as only adjacent runs are considered.
    /// Returns `false` on an empty queue.
    pub fn delete_duplicates(&mut self) -> bool {
        unsafe {
            let head = self.head;
            if head.as_ref().is_empty() {
                return false;
            }
            let mut cur = head.as_ref().next();
            while cur != head {
                let mut next = cur.as_ref().next();
                let mut dup = false;
                while next != head && value_of(next) == value_of(cur) {
                    let after = next.as_ref().next();
                    Link::remove(next);
                    release(next);
                    next = after;
                    dup = true;
                }
                if dup {
                    Link::remove(cur);
                    release(cur);
                }
                cur = next;
            }
            true
        }
    }

    /// Exchanges adjacent elements pairwise in list order; a trailing
    /// unpaired element stays in place.
    pub fn swap_pairs(&mut self) {
        unsafe {
            let head = self.head;
            let mut cur = head.as_ref().next();
            while cur != head && cur.as_ref().next() != head {
                let second = cur.as_ref().next();
                Link::move_front(cur, second);
                cur = cur.as_ref().next();
            }
        }
    }

    /// Reverses the element order in place. O(n) time, O(1) extra space.
    pub fn reverse(&mut self) {
        unsafe { reverse_links(self.head) };
    }

    /// Reverses every maximal run of `k` consecutive elements, left to
    /// right. A final run shorter than `k` keeps its order; `k == 0` is a
    /// no-op.
    pub fn reverse_k_group(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        unsafe {
            let head = self.head;
            let mut result = Link::new();
            result.init();
            let result = NonNull::from(&mut result);

            loop {
                // Find the k-th member, if a full group remains.
                let mut node = head;
                let mut full = true;
                for _ in 0..k {
                    node = node.as_ref().next();
                    if node == head {
                        full = false;
                        break;
                    }
                }
                if !full {
                    break;
                }

                let mut group = Link::new();
                group.init();
                let group = NonNull::from(&mut group);
                Link::cut_position(group, head, node);
                reverse_links(group);
                Link::splice_tail_init(group, result);
            }

            // The queue now holds only the short trailing run; put the
            // reversed groups back in front of it.
            Link::splice(result, head);
        }
    }

    /// Sorts the queue by byte-wise string comparison, ascending unless
    /// `descend`. Stable, O(n log n) time, O(n) auxiliary pointer storage.
    ///
    /// Every element is detached into an array of node pointers sized to
    /// the element count, adjacent runs are merged pairwise with doubling
    /// width, and the surviving run is spliced back as the new queue.
    pub fn sort(&mut self, descend: bool) {
        let mut nodes: Vec<NonNull<Element>> = Vec::new();
        unsafe {
            while !self.head.as_ref().is_empty() {
                let first = self.head.as_ref().next();
                Link::remove_init(first);
                nodes.push(Element::from_link(first));
            }
        }

        let n = nodes.len();
        if n > 1 {
            let mut aux: Vec<NonNull<Element>> = Vec::with_capacity(n);
            let mut width = 1;
            while width < n {
                aux.clear();
                let mut start = 0;
                while start < n {
                    let mid = usize::min(start + width, n);
                    let end = usize::min(start + 2 * width, n);
                    let (mut i, mut j) = (start, mid);
                    while i < mid && j < end {
                        let left = unsafe { nodes[i].as_ref() }.value();
                        let right = unsafe { nodes[j].as_ref() }.value();
                        // Ties take the left run, keeping the sort stable.
                        let take_left = if descend { left >= right } else { left <= right };
                        if take_left {
                            aux.push(nodes[i]);
                            i += 1;
                        } else {
                            aux.push(nodes[j]);
                            j += 1;
                        }
                    }
                    aux.extend_from_slice(&nodes[i..mid]);
                    aux.extend_from_slice(&nodes[j..end]);
                    start = end;
                }
                mem::swap(&mut nodes, &mut aux);
                width *= 2;
            }
        }

        unsafe {
            for elem in nodes {
                Link::insert_before(Element::link_of(elem), self.head);
            }
        }
    }

    /// Keeps the queue non-decreasing with respect to prior-kept elements:
    /// any element smaller than the last kept one is released, otherwise it
    /// becomes the new kept element. Returns the resulting size.
    pub fn ascend(&mut self) -> usize {
        self.filter_monotonic(false)
    }

    /// Keeps the queue non-increasing with respect to prior-kept elements:
    /// any element greater than the last kept one is released, otherwise it
    /// becomes the new kept element. Returns the resulting size.
    pub fn descend(&mut self) -> usize {
        self.filter_monotonic(true)
    }

    fn filter_monotonic(&mut self, descend: bool) -> usize {
        unsafe {
            let head = self.head;
            let mut kept = head.as_ref().next();
            if kept == head {
                return 0;
            }
            let mut count = 1;
            let mut cand = kept.as_ref().next();
            while cand != head {
                let next = cand.as_ref().next();
                let out_of_order = if descend {
                    value_of(cand) > value_of(kept)
                } else {
                    value_of(cand) < value_of(kept)
                };
                if out_of_order {
                    Link::remove(cand);
                    release(cand);
                } else {
                    kept = cand;
                    count += 1;
                }
                cand = next;
            }
            count
        }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
        unsafe { drop(Box::from_raw(self.head.as_ptr())) };
    }
}

unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}

/// Iterator over a queue's values, front to back.
///
/// Created by [`Queue::values`].
pub struct Values<'a> {
    inner: Iter,
    _marker: PhantomData<&'a Queue>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|link| unsafe { (*Element::from_link(link).as_ptr()).value() })
    }
}
