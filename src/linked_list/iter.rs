use core::ptr::NonNull;

use super::circular::Link;

/// Forward traversal of a circular list, sentinel exclusive.
///
/// Yields raw links; owners recover their payload with their container-of
/// cast. The list must not be modified while the iterator is alive.
pub struct Iter {
    head: NonNull<Link>,
    current: NonNull<Link>,
}

impl Iter {
    /// Creates an iterator over the members of `head`.
    ///
    /// # Safety
    ///
    /// `head` must be a well-formed list head, and the list must stay
    /// unmodified until the iterator is dropped.
    #[inline]
    pub unsafe fn new(head: NonNull<Link>) -> Self {
        Self {
            head,
            current: unsafe { head.as_ref().next() },
        }
    }
}

impl Iterator for Iter {
    type Item = NonNull<Link>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.head {
            return None;
        }
        let ret = self.current;
        self.current = unsafe { self.current.as_ref().next() };
        Some(ret)
    }
}

/// Forward traversal that pre-captures the successor of every yielded link,
/// so the loop body may unlink or free the current one.
pub struct IterSafe {
    head: NonNull<Link>,
    current: NonNull<Link>,
    next: NonNull<Link>,
}

impl IterSafe {
    /// Creates a removal-safe iterator over the members of `head`.
    ///
    /// # Safety
    ///
    /// `head` must be a well-formed list head. The loop body may unlink or
    /// free the yielded link, but no other link.
    #[inline]
    pub unsafe fn new(head: NonNull<Link>) -> Self {
        unsafe {
            let current = head.as_ref().next();
            Self {
                head,
                current,
                next: current.as_ref().next(),
            }
        }
    }
}

impl Iterator for IterSafe {
    type Item = NonNull<Link>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.head {
            return None;
        }
        let ret = self.current;
        self.current = self.next;
        // The sentinel is always valid, so reading its successor is fine
        // even when the traversal just wrapped.
        self.next = unsafe { self.current.as_ref().next() };
        Some(ret)
    }
}
