use core::ptr::NonNull;

/// A link in a circular doubly linked list.
///
/// A `Link` initialized on its own (a "head" or sentinel) points to itself
/// in both directions and represents an empty list. Payload types embed a
/// `Link` and recover themselves from it with an `offset_of!`-based cast.
///
/// The link carries no ownership of the list it threads through; it is a
/// structural relation only. Owners are responsible for keeping every
/// linked node alive and pinned in memory for as long as it is reachable.
#[derive(Debug)]
pub struct Link {
    next: NonNull<Link>,
    prev: NonNull<Link>,
}

impl Link {
    /// Creates an unlinked link.
    ///
    /// Both pointers start dangling; [`init`](Link::init) must run once the
    /// link has its final address, before any other operation touches it.
    #[inline]
    pub const fn new() -> Self {
        Self {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
        }
    }

    /// Points the link at itself in both directions, making it an empty
    /// list head. Idempotent, and usable to reset a detached node.
    #[inline]
    pub fn init(&mut self) {
        let this = NonNull::from(&mut *self);
        self.next = this;
        self.prev = this;
    }

    /// Returns `true` if the list headed by `self` has no other links.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.next == NonNull::from(self)
    }

    /// Returns `true` if the list headed by `self` holds exactly one link.
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.next == self.prev
    }

    /// The link following `self`.
    #[inline]
    pub fn next(&self) -> NonNull<Link> {
        self.next
    }

    /// The link preceding `self`.
    #[inline]
    pub fn prev(&self) -> NonNull<Link> {
        self.prev
    }

    /// Resets `node` to an empty self-loop through its pointer.
    ///
    /// # Safety
    ///
    /// `node` must be valid for writes. Any list it is still threaded into
    /// is left broken; detach first.
    #[inline]
    pub unsafe fn reinit(node: NonNull<Link>) {
        unsafe {
            (*node.as_ptr()).next = node;
            (*node.as_ptr()).prev = node;
        }
    }

    /// Splices `node` immediately after `at`.
    ///
    /// With `at` being a head, this is front insertion.
    ///
    /// # Safety
    ///
    /// `at` must be part of a well-formed circular list and `node` must not
    /// be linked anywhere.
    #[inline]
    pub unsafe fn insert_after(node: NonNull<Link>, at: NonNull<Link>) {
        unsafe {
            let next = (*at.as_ptr()).next;
            (*next.as_ptr()).prev = node;
            (*node.as_ptr()).next = next;
            (*node.as_ptr()).prev = at;
            (*at.as_ptr()).next = node;
        }
    }

    /// Splices `node` immediately before `at`.
    ///
    /// With `at` being a head, this is back insertion.
    ///
    /// # Safety
    ///
    /// `at` must be part of a well-formed circular list and `node` must not
    /// be linked anywhere.
    #[inline]
    pub unsafe fn insert_before(node: NonNull<Link>, at: NonNull<Link>) {
        unsafe {
            let prev = (*at.as_ptr()).prev;
            (*prev.as_ptr()).next = node;
            (*node.as_ptr()).next = at;
            (*node.as_ptr()).prev = prev;
            (*at.as_ptr()).prev = node;
        }
    }

    /// Unlinks `node`, stitching its neighbors together.
    ///
    /// `node`'s own pointers are left dangling; use
    /// [`remove_init`](Link::remove_init) if the node will be inspected or
    /// reused afterwards.
    ///
    /// # Safety
    ///
    /// `node` must be a member of a well-formed circular list, not a head
    /// that still has members.
    #[inline]
    pub unsafe fn remove(node: NonNull<Link>) {
        unsafe {
            let next = (*node.as_ptr()).next;
            let prev = (*node.as_ptr()).prev;
            (*next.as_ptr()).prev = prev;
            (*prev.as_ptr()).next = next;
        }
    }

    /// Unlinks `node` and resets it to an empty self-loop.
    ///
    /// # Safety
    ///
    /// Same contract as [`remove`](Link::remove).
    #[inline]
    pub unsafe fn remove_init(node: NonNull<Link>) {
        unsafe {
            Link::remove(node);
            Link::reinit(node);
        }
    }

    /// Moves `node` out of its current position to the front of `head`.
    ///
    /// # Safety
    ///
    /// `node` must be a member of a well-formed list and `head` must be a
    /// well-formed head.
    #[inline]
    pub unsafe fn move_front(node: NonNull<Link>, head: NonNull<Link>) {
        unsafe {
            Link::remove(node);
            Link::insert_after(node, head);
        }
    }

    /// Moves `node` out of its current position to the back of `head`.
    ///
    /// # Safety
    ///
    /// Same contract as [`move_front`](Link::move_front).
    #[inline]
    pub unsafe fn move_back(node: NonNull<Link>, head: NonNull<Link>) {
        unsafe {
            Link::remove(node);
            Link::insert_before(node, head);
        }
    }

    /// Splices every member of `list` to the front of `head`, preserving
    /// order. No-op when `list` is empty. `list`'s own pointers are left
    /// stale; use [`splice_init`](Link::splice_init) to keep it usable.
    ///
    /// # Safety
    ///
    /// `list` and `head` must be distinct well-formed heads.
    pub unsafe fn splice(list: NonNull<Link>, head: NonNull<Link>) {
        unsafe {
            if (*list.as_ptr()).is_empty() {
                return;
            }
            let first = (*list.as_ptr()).next;
            let last = (*list.as_ptr()).prev;
            let at = (*head.as_ptr()).next;

            (*head.as_ptr()).next = first;
            (*first.as_ptr()).prev = head;
            (*last.as_ptr()).next = at;
            (*at.as_ptr()).prev = last;
        }
    }

    /// Splices every member of `list` to the back of `head`, preserving
    /// order. No-op when `list` is empty.
    ///
    /// # Safety
    ///
    /// Same contract as [`splice`](Link::splice).
    pub unsafe fn splice_tail(list: NonNull<Link>, head: NonNull<Link>) {
        unsafe {
            if (*list.as_ptr()).is_empty() {
                return;
            }
            let first = (*list.as_ptr()).next;
            let last = (*list.as_ptr()).prev;
            let at = (*head.as_ptr()).prev;

            (*head.as_ptr()).prev = last;
            (*last.as_ptr()).next = head;
            (*first.as_ptr()).prev = at;
            (*at.as_ptr()).next = first;
        }
    }

    /// [`splice`](Link::splice), then resets `list` to an empty head.
    ///
    /// # Safety
    ///
    /// Same contract as [`splice`](Link::splice).
    #[inline]
    pub unsafe fn splice_init(list: NonNull<Link>, head: NonNull<Link>) {
        unsafe {
            Link::splice(list, head);
            Link::reinit(list);
        }
    }

    /// [`splice_tail`](Link::splice_tail), then resets `list` to an empty
    /// head.
    ///
    /// # Safety
    ///
    /// Same contract as [`splice`](Link::splice).
    #[inline]
    pub unsafe fn splice_tail_init(list: NonNull<Link>, head: NonNull<Link>) {
        unsafe {
            Link::splice_tail(list, head);
            Link::reinit(list);
        }
    }

    /// Moves the prefix of `from` up to and including `node` into `to`,
    /// leaving `from` with the remainder.
    ///
    /// Whatever `to` held before is discarded wholesale. When `node` is the
    /// `from` head itself there is nothing before the sentinel to cut, and
    /// `to` is reset to empty. No-op when `from` is empty.
    ///
    /// # Safety
    ///
    /// `from` must be a well-formed head with `node` either `from` itself
    /// or a member of it; `to` must be a distinct head valid for writes.
    pub unsafe fn cut_position(to: NonNull<Link>, from: NonNull<Link>, node: NonNull<Link>) {
        unsafe {
            if (*from.as_ptr()).is_empty() {
                return;
            }
            if from == node {
                Link::reinit(to);
                return;
            }
            let first = (*from.as_ptr()).next;

            (*from.as_ptr()).next = (*node.as_ptr()).next;
            (*(*from.as_ptr()).next.as_ptr()).prev = from;

            (*to.as_ptr()).prev = node;
            (*node.as_ptr()).next = to;
            (*to.as_ptr()).next = first;
            (*first.as_ptr()).prev = to;
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl Send for Link {}
unsafe impl Sync for Link {}
