use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::cmp;
use core::fmt;
use core::iter::{Chain, FusedIterator};
use core::ops::{Index, IndexMut};
use core::slice;

const MIN_GROW_CAPACITY: usize = 4;

/// A growable double-ended queue backed by a circular array.
///
/// Logical index `i` lives in physical slot `(head + i) % capacity`. Pushing and popping at
/// either end is amortized `O(1)`; [`insert`](Self::insert) and [`remove`](Self::remove) move
/// whichever side of the queue is shorter; [`rotate`](Self::rotate) moves at most
/// `min(k, len - k)` elements and is a pure head move when the buffer is full.
///
/// When an insertion finds the buffer full, the storage is reallocated with roughly 1.5x the
/// capacity and the elements are copied back to logical order starting at slot 0.
///
/// Indexing (`ring[i]`), [`set`](Self::set), [`insert`](Self::insert), [`remove`](Self::remove)
/// and [`swap`](Self::swap) panic when the index is out of bounds. Use [`get`](Self::get) for a
/// non-panicking lookup.
#[derive(Clone)]
pub struct RingBuffer<E> {
    slots: Vec<Option<E>>,
    head: usize,
    len: usize,
}

impl<E> RingBuffer<E> {
    /// Creates an empty buffer. No storage is allocated until the first insertion.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty buffer that can hold `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        if index >= self.len {
            return None;
        }
        let p = self.physical(index);
        self.slots[p].as_mut()
    }

    pub fn first(&self) -> Option<&E> {
        self.get(0)
    }

    pub fn first_mut(&mut self) -> Option<&mut E> {
        self.get_mut(0)
    }

    pub fn last(&self) -> Option<&E> {
        self.get(self.len.checked_sub(1)?)
    }

    pub fn last_mut(&mut self) -> Option<&mut E> {
        let last = self.len.checked_sub(1)?;
        self.get_mut(last)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: E) -> E {
        self.assert_in_bounds(index);
        let p = self.physical(index);
        into_occupied(self.slots[p].replace(value))
    }

    pub fn push_back(&mut self, value: E) {
        self.grow_if_full();
        let p = self.physical(self.len);
        self.slots[p] = Some(value);
        self.len += 1;
    }

    pub fn push_front(&mut self, value: E) {
        self.grow_if_full();
        self.head = self.wrap_dec(self.head);
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> Option<E> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let p = self.physical(self.len);
        self.slots[p].take()
    }

    pub fn pop_front(&mut self) -> Option<E> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.wrap_inc(self.head);
        self.len -= 1;
        value
    }

    /// Inserts `value` so that it ends up at logical `index`, shifting the shorter side.
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: E) {
        assert!(
            index <= self.len,
            "RingBuffer::insert: index out of bounds (index={index}, len={})",
            self.len
        );
        self.grow_if_full();

        if index < self.len - index {
            // Open a vacancy before the head and bubble it forward to `index`.
            self.head = self.wrap_dec(self.head);
            for i in 0..index {
                let (a, b) = (self.physical(i), self.physical(i + 1));
                self.slots.swap(a, b);
            }
        } else {
            // The slot after the tail is vacant; bubble it back to `index`.
            for i in (index..self.len).rev() {
                let (a, b) = (self.physical(i), self.physical(i + 1));
                self.slots.swap(a, b);
            }
        }

        let p = self.physical(index);
        self.slots[p] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting the shorter side.
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> E {
        self.assert_in_bounds(index);
        let p = self.physical(index);
        let value = into_occupied(self.slots[p].take());

        if index < self.len - 1 - index {
            for i in (0..index).rev() {
                let (a, b) = (self.physical(i), self.physical(i + 1));
                self.slots.swap(a, b);
            }
            self.head = self.wrap_inc(self.head);
        } else {
            for i in index..self.len - 1 {
                let (a, b) = (self.physical(i), self.physical(i + 1));
                self.slots.swap(a, b);
            }
        }

        self.len -= 1;
        value
    }

    /// Swaps the elements at logical indexes `a` and `b`.
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.assert_in_bounds(a);
        self.assert_in_bounds(b);
        let (pa, pb) = (self.physical(a), self.physical(b));
        self.slots.swap(pa, pb);
    }

    /// Rotates the logical order so that `new[j] == old[(j + k) mod len]`.
    ///
    /// Negative `k` rotates the other way. Moves `min(k, len - k)` elements (with `k` reduced
    /// modulo `len`), or none at all when the buffer is at capacity.
    pub fn rotate(&mut self, k: isize) {
        if self.len < 2 {
            return;
        }
        let k = k.rem_euclid(self.len as isize) as usize;
        if k == 0 {
            return;
        }

        if self.len == self.capacity() {
            self.head = (self.head + k) % self.capacity();
            return;
        }

        if k <= self.len - k {
            for _ in 0..k {
                let value = self.slots[self.head].take();
                self.head = self.wrap_inc(self.head);
                let tail = self.physical(self.len - 1);
                self.slots[tail] = value;
            }
        } else {
            for _ in 0..self.len - k {
                let tail = self.physical(self.len - 1);
                let value = self.slots[tail].take();
                self.head = self.wrap_dec(self.head);
                self.slots[self.head] = value;
            }
        }
    }

    /// Drops every element. Capacity is retained.
    pub fn clear(&mut self) {
        let (a, b) = self.live_ranges();
        self.slots[a].fill_with(|| None);
        self.slots[b].fill_with(|| None);
        self.head = 0;
        self.len = 0;
    }

    /// Drops elements from the back until at most `len` remain.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop_back();
        }
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// Panics on capacity overflow; aborts if the allocation fails, like `Vec::reserve`.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| panic!("RingBuffer::reserve: capacity overflow"));
        if needed <= self.capacity() {
            return;
        }
        let new_capacity = cmp::max(needed, grown_capacity(self.capacity()));
        let mut slots = Vec::with_capacity(new_capacity);
        self.relinearize_into(&mut slots, new_capacity);
    }

    /// Fallible counterpart of [`reserve`](Self::reserve).
    ///
    /// On error the buffer is left untouched.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let needed = self.len.saturating_add(additional);
        if needed <= self.capacity() {
            return Ok(());
        }
        let new_capacity = cmp::max(needed, grown_capacity(self.capacity()));
        let mut slots = Vec::new();
        slots.try_reserve_exact(new_capacity)?;
        self.relinearize_into(&mut slots, new_capacity);
        Ok(())
    }

    /// Returns the index of the first element for which `pred` is false.
    ///
    /// The buffer must be partitioned: every element satisfying `pred` precedes every element
    /// that does not.
    pub fn partition_point(&self, mut pred: impl FnMut(&E) -> bool) -> usize {
        let mut lo = 0usize;
        let mut hi = self.len;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(&self[mid]) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    pub fn binary_search(&self, value: &E) -> Result<usize, usize>
    where
        E: Ord,
    {
        let at = self.partition_point(|e| e < value);
        if at < self.len && self[at] == *value {
            Ok(at)
        } else {
            Err(at)
        }
    }

    pub fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.iter().any(|e| e == value)
    }

    pub fn iter(&self) -> Iter<'_, E> {
        let (a, b) = self.live_ranges();
        Iter {
            inner: self.slots[a].iter().chain(self.slots[b].iter()),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, E> {
        let (a, b) = self.live_ranges();
        let remaining = self.len;
        // `b` always precedes `a` physically (it is the wrapped part), so split at `a.start`.
        let (low, high) = self.slots.split_at_mut(a.start);
        IterMut {
            inner: high[..a.end - a.start].iter_mut().chain(low[b].iter_mut()),
            remaining,
        }
    }

    /// Removes every element, yielding them front to back.
    ///
    /// Elements not consumed by the iterator are dropped when it is.
    pub fn drain(&mut self) -> Drain<'_, E> {
        Drain { ring: self }
    }

    fn physical(&self, index: usize) -> usize {
        let p = self.head + index;
        let cap = self.capacity();
        if p >= cap { p - cap } else { p }
    }

    fn wrap_inc(&self, p: usize) -> usize {
        if p + 1 == self.capacity() { 0 } else { p + 1 }
    }

    fn wrap_dec(&self, p: usize) -> usize {
        if p == 0 { self.capacity() - 1 } else { p - 1 }
    }

    fn assert_in_bounds(&self, index: usize) {
        assert!(
            index < self.len,
            "RingBuffer: index out of bounds (index={index}, len={})",
            self.len
        );
    }

    /// Physical ranges holding live elements, in logical order.
    fn live_ranges(&self) -> (core::ops::Range<usize>, core::ops::Range<usize>) {
        let cap = self.capacity();
        let end = self.head + self.len;
        if end <= cap {
            (self.head..end, 0..0)
        } else {
            (self.head..cap, 0..end - cap)
        }
    }

    fn grow_if_full(&mut self) {
        if self.len < self.capacity() {
            return;
        }
        let new_capacity = grown_capacity(self.capacity());
        rdebug!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "RingBuffer grow"
        );
        let mut slots = Vec::with_capacity(new_capacity);
        self.relinearize_into(&mut slots, new_capacity);
    }

    /// Moves the live elements into `slots` (which must be empty) in logical order and adopts it
    /// as the new storage with `head = 0`.
    fn relinearize_into(&mut self, slots: &mut Vec<Option<E>>, new_capacity: usize) {
        debug_assert!(slots.is_empty());
        debug_assert!(new_capacity >= self.len);
        for i in 0..self.len {
            let p = self.physical(i);
            slots.push(self.slots[p].take());
        }
        slots.resize_with(new_capacity, || None);
        core::mem::swap(&mut self.slots, slots);
        self.head = 0;
    }
}

fn grown_capacity(capacity: usize) -> usize {
    capacity
        .saturating_add(capacity.div_ceil(2))
        .max(MIN_GROW_CAPACITY)
}

fn into_occupied<E>(slot: Option<E>) -> E {
    match slot {
        Some(value) => value,
        None => unreachable!("RingBuffer: vacant slot inside the live range"),
    }
}

fn occupied<E>(slot: &Option<E>) -> &E {
    match slot {
        Some(value) => value,
        None => unreachable!("RingBuffer: vacant slot inside the live range"),
    }
}

fn occupied_mut<E>(slot: &mut Option<E>) -> &mut E {
    match slot {
        Some(value) => value,
        None => unreachable!("RingBuffer: vacant slot inside the live range"),
    }
}

impl<E> Default for RingBuffer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for RingBuffer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for RingBuffer<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for RingBuffer<E> {}

impl<E> Index<usize> for RingBuffer<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        self.assert_in_bounds(index);
        occupied(&self.slots[self.physical(index)])
    }
}

impl<E> IndexMut<usize> for RingBuffer<E> {
    fn index_mut(&mut self, index: usize) -> &mut E {
        self.assert_in_bounds(index);
        let p = self.physical(index);
        occupied_mut(&mut self.slots[p])
    }
}

impl<E> Extend<E> for RingBuffer<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<E> FromIterator<E> for RingBuffer<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<E> From<Vec<E>> for RingBuffer<E> {
    fn from(values: Vec<E>) -> Self {
        let len = values.len();
        Self {
            slots: values.into_iter().map(Some).collect(),
            head: 0,
            len,
        }
    }
}

impl<'a, E> IntoIterator for &'a RingBuffer<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<'a, E> IntoIterator for &'a mut RingBuffer<E> {
    type Item = &'a mut E;
    type IntoIter = IterMut<'a, E>;

    fn into_iter(self) -> IterMut<'a, E> {
        self.iter_mut()
    }
}

impl<E> IntoIterator for RingBuffer<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        IntoIter { ring: self }
    }
}

/// Front-to-back iterator over `&E`.
pub struct Iter<'a, E> {
    inner: Chain<slice::Iter<'a, Option<E>>, slice::Iter<'a, Option<E>>>,
    remaining: usize,
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let value = self.inner.next().map(occupied)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.inner.next_back().map(occupied)?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}
impl<E> FusedIterator for Iter<'_, E> {}

/// Front-to-back iterator over `&mut E`.
pub struct IterMut<'a, E> {
    inner: Chain<slice::IterMut<'a, Option<E>>, slice::IterMut<'a, Option<E>>>,
    remaining: usize,
}

impl<'a, E> Iterator for IterMut<'a, E> {
    type Item = &'a mut E;

    fn next(&mut self) -> Option<&'a mut E> {
        let value = self.inner.next().map(occupied_mut)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> DoubleEndedIterator for IterMut<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.inner.next_back().map(occupied_mut)?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<E> ExactSizeIterator for IterMut<'_, E> {}
impl<E> FusedIterator for IterMut<'_, E> {}

/// Draining iterator returned by [`RingBuffer::drain`].
pub struct Drain<'a, E> {
    ring: &'a mut RingBuffer<E>,
}

impl<E> Iterator for Drain<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.ring.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len, Some(self.ring.len))
    }
}

impl<E> DoubleEndedIterator for Drain<'_, E> {
    fn next_back(&mut self) -> Option<E> {
        self.ring.pop_back()
    }
}

impl<E> ExactSizeIterator for Drain<'_, E> {}
impl<E> FusedIterator for Drain<'_, E> {}

impl<E> Drop for Drain<'_, E> {
    fn drop(&mut self) {
        self.ring.clear();
    }
}

/// Owning iterator returned by `RingBuffer::into_iter`.
pub struct IntoIter<E> {
    ring: RingBuffer<E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.ring.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len, Some(self.ring.len))
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<E> {
        self.ring.pop_back()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}
impl<E> FusedIterator for IntoIter<E> {}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for RingBuffer<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for RingBuffer<E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<E> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}
