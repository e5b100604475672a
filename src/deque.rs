//! A double-ended queue backed by a doubly-linked list.
//!
//! The deque owns every node through raw pointers: `front` and each `next`
//! link are the owning direction, `rear` and each `prev` link are non-owning
//! back-references that exist only to make removal at the rear O(1). A node is
//! allocated by `add_first`/`add_last` and freed by `remove_first`/`remove_last`
//! (or when the deque is dropped).
//!
//! Iterators walk the live nodes rather than a snapshot. They borrow the deque,
//! so the compiler rejects any attempt to mutate it while an iterator is alive.
//! The deque is `Send`/`Sync` whenever `T` is, but it does no locking of its
//! own: sharing it between threads needs external synchronization.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
    prev: Link<T>,
}

pub struct Deque<T> {
    front: Link<T>,
    rear: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// Rustonomicon: "Raw pointers are neither `Send` nor `Sync` (because they
// have no safety guards)."
//
// The nodes are uniquely owned by the deque, so it is as thread-safe as a
// `Box<T>` would be
unsafe impl<T: Send> Send for Deque<T> {}
unsafe impl<T: Sync> Sync for Deque<T> {}

impl<T> Deque<T> {
    pub fn new() -> Deque<T> {
        Deque { front: None, rear: None, len: 0, marker: PhantomData }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // Alias of `len`
    pub fn size(&self) -> usize {
        self.len
    }

    /// Inserts `value` at the front in O(1).
    pub fn add_first(&mut self, value: T) {
        let node = Box::new(Node { value, next: self.front, prev: None });
        let node = NonNull::from(Box::leak(node));
        match self.front {
            Some(mut old) => unsafe { old.as_mut().prev = Some(node) },
            None => self.rear = Some(node),
        }
        self.front = Some(node);
        self.len += 1;
    }

    /// Inserts `value` at the rear in O(1).
    pub fn add_last(&mut self, value: T) {
        let node = Box::new(Node { value, next: None, prev: self.rear });
        let node = NonNull::from(Box::leak(node));
        match self.rear {
            Some(mut old) => unsafe { old.as_mut().next = Some(node) },
            None => self.front = Some(node),
        }
        self.rear = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the front in O(1).
    ///
    /// Fails with `Error::EmptyCollection` if the deque is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let front = self.front.ok_or(Error::EmptyCollection)?;
        // The deque gives up ownership of the node here
        let node = unsafe { Box::from_raw(front.as_ptr()) };
        self.front = node.next;
        match self.front {
            Some(mut next) => unsafe { next.as_mut().prev = None },
            None => self.rear = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the value at the rear in O(1).
    ///
    /// Fails with `Error::EmptyCollection` if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        let rear = self.rear.ok_or(Error::EmptyCollection)?;
        let node = unsafe { Box::from_raw(rear.as_ptr()) };
        self.rear = node.prev;
        match self.rear {
            Some(mut prev) => unsafe { prev.as_mut().next = None },
            None => self.front = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.front.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn peek_last(&self) -> Option<&T> {
        self.rear.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn clear(&mut self) {
        while self.remove_first().is_ok() {}
    }

    /// Returns a front-to-rear iterator over the live nodes.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { front: self.front, rear: self.rear, len: self.len, marker: PhantomData }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { front: self.front, rear: self.rear, len: self.len, marker: PhantomData }
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        // Iteratively, a recursive drop along `next` would overflow the stack
        // for long deques
        self.clear();
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

pub struct Iter<'a, T> {
    front: Link<T>,
    rear: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 { return None; }
        self.front.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.len -= 1;
            self.front = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 { return None; }
        self.rear.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.len -= 1;
            self.rear = node.prev;
            &node.value
        })
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

pub struct IterMut<'a, T> {
    front: Link<T>,
    rear: Link<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 { return None; }
        self.front.map(|node| unsafe {
            let node = &mut *node.as_ptr();
            self.len -= 1;
            self.front = node.next;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 { return None; }
        self.rear.map(|node| unsafe {
            let node = &mut *node.as_ptr();
            self.len -= 1;
            self.rear = node.prev;
            &mut node.value
        })
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

// Owning iterator, drains the deque from the front
pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
