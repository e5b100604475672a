//! A bag whose removals and samples pick uniformly among the live elements.
//!
//! Elements live contiguously in `storage[..len]`; slots past `len` are
//! `None`. The buffer doubles when an insertion finds it full and halves when a
//! removal leaves it a quarter full, which keeps both operations O(1)
//! amortized without thrashing under alternating enqueue/dequeue.
//!
//! Iteration shuffles a private snapshot, so every iterator is an independent
//! uniformly random permutation of the elements present when it was created.
//! The queue keeps its generator in a `RefCell`, so it is `Send` but not
//! `Sync`; sharing it between threads needs external synchronization.

use std::cell::RefCell;
use std::fmt;
use std::iter;
use std::vec;

use log::trace;

use crate::error::{Error, Result};
use crate::random::UniformRandom;

const INITIAL_CAPACITY: usize = 1;

pub struct RandomizedQueue<T> {
    storage: Box<[Option<T>]>,
    len: usize,
    random: RefCell<UniformRandom>,
}

fn vacant<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> RandomizedQueue<T> {
    pub fn new() -> RandomizedQueue<T> {
        RandomizedQueue::with_random(UniformRandom::new())
    }

    // Constructor for a queue drawing from a given (e.g. seeded) generator
    pub fn with_random(random: UniformRandom) -> RandomizedQueue<T> {
        RandomizedQueue {
            storage: vacant(INITIAL_CAPACITY),
            len: 0,
            random: RefCell::new(random),
        }
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

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Adds `item` in O(1) amortized time.
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }
        self.storage[self.len] = Some(item);
        self.len += 1;
    }

    /// Removes and returns an element chosen uniformly at random.
    ///
    /// The last live element moves into the vacated slot to keep storage
    /// contiguous. Fails with `Error::EmptyCollection` if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let i = self.random.get_mut().uniform(self.len)?;
        let last = self.len - 1;
        self.storage.swap(i, last);
        let item = self.take(last);
        self.len -= 1;

        if self.len > 0 && self.len <= self.capacity() / 4 {
            self.resize(self.capacity() / 2);
        }
        Ok(item)
    }

    /// Returns an element chosen uniformly at random without removing it.
    ///
    /// Each call is an independent draw. Fails with `Error::EmptyCollection`
    /// if the queue is empty.
    pub fn sample(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let i = self.random.borrow_mut().uniform(self.len)?;
        Ok(self.get(i))
    }

    /// Returns an iterator over a shuffled snapshot of the current elements.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut snapshot: Vec<&T> = self.storage[..self.len].iter().flatten().collect();
        self.random.borrow_mut().shuffle(&mut snapshot);
        Iter { items: snapshot.into_iter() }
    }

    fn get(&self, i: usize) -> &T {
        match &self.storage[i] {
            Some(item) => item,
            None => unreachable!("slot {} below len {} is vacant", i, self.len),
        }
    }

    fn take(&mut self, i: usize) -> T {
        match self.storage[i].take() {
            Some(item) => item,
            None => unreachable!("slot {} below len {} is vacant", i, self.len),
        }
    }

    fn resize(&mut self, capacity: usize) {
        assert!(capacity >= self.len && capacity >= INITIAL_CAPACITY);
        trace!("resizing randomized queue from {} to {} slots", self.capacity(), capacity);
        let mut storage = vacant(capacity);
        for (slot, item) in storage.iter_mut().zip(self.storage[..self.len].iter_mut()) {
            *slot = item.take();
        }
        self.storage = storage;
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        RandomizedQueue::new()
    }
}

// Shows the elements in storage order, which carries no meaning
impl<T: fmt::Debug> fmt::Debug for RandomizedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.storage[..self.len].iter().flatten()).finish()
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RandomizedQueue::new();
        queue.extend(iter);
        queue
    }
}

pub struct Iter<'a, T> {
    items: vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

// Owning iterator, yields the elements in a uniformly random order
pub struct IntoIter<T> {
    items: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut items: Vec<T> = self.storage.into_vec().into_iter().flatten().collect();
        self.random.into_inner().shuffle(&mut items);
        IntoIter { items: items.into_iter() }
    }
}

impl<'a, T> IntoIterator for &'a RandomizedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded<T>(seed: u64) -> RandomizedQueue<T> {
        RandomizedQueue::with_random(UniformRandom::seeded(seed))
    }

    // Live slots are exactly `storage[..len]`
    fn check_storage<T>(queue: &RandomizedQueue<T>) {
        assert!(queue.len <= queue.capacity());
        assert!(queue.capacity().is_power_of_two());
        assert!(queue.storage[..queue.len].iter().all(Option::is_some));
        assert!(queue.storage[queue.len..].iter().all(Option::is_none));
    }

    #[test]
    fn randomized_queue() {
        let mut queue = seeded(1);
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 1);

        queue.enqueue("a");
        assert!(!queue.is_empty());
        assert_eq!(queue.size(), 1);
        assert_eq!(queue.sample().unwrap(), &"a");

        assert_eq!(queue.dequeue().unwrap(), "a");
        assert!(queue.is_empty());
        check_storage(&queue);
    }

    #[test]
    fn randomized_queue_empty() {
        let mut queue: RandomizedQueue<u32> = seeded(1);
        assert!(queue.dequeue().unwrap_err().is_empty_collection());
        assert!(queue.sample().unwrap_err().is_empty_collection());
        assert_eq!(queue.iter().next(), None);
        check_storage(&queue);
    }

    #[test]
    fn grow_by_doubling() {
        let mut queue = seeded(2);
        for i in 0..17 {
            queue.enqueue(i);
            check_storage(&queue);
        }
        // 1 -> 2 -> 4 -> 8 -> 16 -> 32
        assert_eq!(queue.capacity(), 32);
    }

    #[test]
    fn shrink_at_one_quarter() {
        let mut queue = seeded(3);
        for i in 0..16 {
            queue.enqueue(i);
        }
        assert_eq!(queue.capacity(), 16);

        // 16 -> 8 once len drops to 4
        for _ in 0..11 {
            queue.dequeue().unwrap();
            check_storage(&queue);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.capacity(), 16);
        queue.dequeue().unwrap();
        assert_eq!(queue.capacity(), 8);

        // Never shrinks when the last element leaves
        while !queue.is_empty() {
            queue.dequeue().unwrap();
            check_storage(&queue);
        }
        assert_eq!(queue.capacity(), 2);
    }

    #[test]
    fn no_thrashing() {
        let mut queue = seeded(4);
        for i in 0..8 {
            queue.enqueue(i);
        }
        let capacity = queue.capacity();
        for i in 0..100 {
            queue.enqueue(i);
            queue.dequeue().unwrap();
            assert!(queue.capacity() == capacity || queue.capacity() == 2 * capacity);
        }
    }

    #[test]
    fn dequeue_conserves_elements() {
        let mut queue = seeded(5);
        for i in 0..100 {
            queue.enqueue(i);
        }
        let mut out: Vec<i32> = (0..100).map(|_| queue.dequeue().unwrap()).collect();
        out.sort();
        assert_eq!(out, (0..100).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }

    #[test]
    fn iter_is_a_permutation() {
        let queue: RandomizedQueue<u32> = (0..50).collect();
        let mut items: Vec<u32> = queue.iter().copied().collect();
        assert_eq!(queue.iter().len(), 50);
        items.sort();
        assert_eq!(items, (0..50).collect::<Vec<_>>());

        // Iteration leaves the queue untouched
        assert_eq!(queue.len(), 50);
        check_storage(&queue);

        let mut owned: Vec<u32> = queue.into_iter().collect();
        owned.sort();
        assert_eq!(owned, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn seeded_queues_agree() {
        let mut a = seeded(9);
        let mut b = seeded(9);
        a.extend(0..20);
        b.extend(0..20);
        for _ in 0..20 {
            assert_eq!(a.dequeue().unwrap(), b.dequeue().unwrap());
        }
    }

    #[test]
    fn debug_lists_elements() {
        let mut queue = seeded(1);
        queue.enqueue(7);
        assert_eq!(format!("{:?}", queue), "{7}");
    }
}
