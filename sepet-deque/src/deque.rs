use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr;

/// Default capacity for `CircularDeque::new`.
const DEFAULT_CAPACITY: usize = 8;

/// A growable double-ended queue backed by a circular buffer.
///
/// The backing array always has power-of-two length, so logical indices
/// translate to physical slots with a mask instead of a modulo. Elements
/// occupy `size` slots starting at `head`; the live region is either
/// continuous (it fits before the physical end of the array) or wrapped
/// (it runs off the end and continues at slot 0). All index arithmetic is
/// done modulo the capacity, so both layouts flow through the same code.
///
/// Positional reads use a clamping policy: an index past the end answers the
/// last element rather than failing. See [`get`](CircularDeque::get) and
/// [`set`](CircularDeque::set) for the exact rules.
pub struct CircularDeque<T> {
    /// Slot storage. Slots at logical positions `0..len` are initialized,
    /// everything else is not.
    buffer: Box<[MaybeUninit<T>]>,

    /// Physical index of logical element 0. Meaningful only when `len > 0`.
    head: usize,

    /// Number of live elements.
    len: usize,

    /// `buffer.len() - 1`, for masking indices.
    mask: usize,
}

impl<T> CircularDeque<T> {
    /// Creates an empty deque with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque able to hold at least `cap` elements before
    /// growing.
    ///
    /// The capacity is rounded up to the next power of two. A requested
    /// capacity of zero is normalized to one, not rejected.
    pub fn with_capacity(cap: usize) -> Self {
        let capacity = if cap < 1 { 1 } else { cap.next_power_of_two() };
        CircularDeque {
            buffer: alloc_buffer(capacity),
            head: 0,
            len: 0,
            mask: capacity - 1,
        }
    }

    /// Returns the number of elements in the deque.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the deque can hold without growing.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        self.head.wrapping_add(index) & self.mask
    }

    /// Moves the value in physical slot `from` into physical slot `to`.
    ///
    /// SAFETY: `from` must hold an initialized value, `from != to`, and the
    /// caller must treat `from` as uninitialized afterwards.
    unsafe fn move_slot(&mut self, from: usize, to: usize) {
        let p = self.buffer.as_mut_ptr();
        ptr::copy_nonoverlapping(p.add(from), p.add(to), 1);
    }

    /// Appends an element at the back. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        if self.len == self.buffer.len() {
            self.grow();
        }
        let phys = self.physical(self.len);
        self.buffer[phys] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Prepends an element at the front. Amortized O(1).
    pub fn push_front(&mut self, value: T) {
        if self.len == self.buffer.len() {
            self.grow();
        }
        self.head = self.head.wrapping_sub(1) & self.mask;
        self.buffer[self.head] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if the deque is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: len > 0, so the slot at head is initialized.
        let value = unsafe { self.buffer[self.head].assume_init_read() };
        self.head = self.head.wrapping_add(1) & self.mask;
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the last element, or `None` if the deque is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let phys = self.physical(self.len - 1);
        // SAFETY: len > 0, so the last logical slot is initialized.
        let value = unsafe { self.buffer[phys].assume_init_read() };
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the first element.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element.
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a mutable reference to the last element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        self.get_mut(self.len - 1)
    }

    /// Returns a reference to the element at logical position `index`.
    ///
    /// Out-of-range indices are clamped rather than rejected: any `index`
    /// at or past the end answers the last element. Only an empty deque
    /// answers `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        let index = index.min(self.len - 1);
        let phys = self.physical(index);
        // SAFETY: index < len, so the slot is initialized.
        Some(unsafe { self.buffer[phys].assume_init_ref() })
    }

    /// Mutable counterpart of [`get`](CircularDeque::get), with the same
    /// clamping policy.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        let index = index.min(self.len - 1);
        let phys = self.physical(index);
        // SAFETY: index < len, so the slot is initialized.
        Some(unsafe { self.buffer[phys].assume_init_mut() })
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// Unlike [`get`](CircularDeque::get), an out-of-range index does not
    /// clamp: it delegates to [`push_back`](CircularDeque::push_back) and
    /// answers `None`, so `set` acts as insert-or-replace. This asymmetry
    /// is intentional and part of the contract.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.len {
            self.push_back(value);
            return None;
        }
        let phys = self.physical(index);
        // SAFETY: index < len, so the slot is initialized.
        Some(mem::replace(
            unsafe { self.buffer[phys].assume_init_mut() },
            value,
        ))
    }

    /// Inserts an element at logical position `index`, shifting the shorter
    /// side. O(min(index, len - index)).
    ///
    /// `index == 0` degrades to `push_front`; `index >= len` degrades to
    /// `push_back`.
    pub fn insert(&mut self, index: usize, value: T) {
        if index == 0 {
            return self.push_front(value);
        }
        if index >= self.len {
            return self.push_back(value);
        }
        if self.len == self.buffer.len() {
            self.grow();
        }
        let mask = self.mask;
        if index < self.len - index {
            // Fewer elements before the insertion point: back the head up one
            // slot and slide the front run with it.
            let new_head = self.head.wrapping_sub(1) & mask;
            for j in 0..index {
                let from = self.head.wrapping_add(j) & mask;
                let to = new_head.wrapping_add(j) & mask;
                // SAFETY: logical slot j is initialized; from != to because
                // the shift distance is 1 and capacity >= 2 here.
                unsafe { self.move_slot(from, to) };
            }
            self.head = new_head;
        } else {
            // Slide the back run forward one slot, last element first.
            for j in (index..self.len).rev() {
                let from = self.head.wrapping_add(j) & mask;
                let to = self.head.wrapping_add(j + 1) & mask;
                // SAFETY: logical slot j is initialized; its destination was
                // vacated by the previous iteration (or is free space).
                unsafe { self.move_slot(from, to) };
            }
        }
        let phys = self.physical(index);
        self.buffer[phys] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Removes and returns the element at logical position `index`,
    /// shifting the shorter side. O(min(index, len - index)).
    ///
    /// `index == 0` degrades to `pop_front`; `index >= len - 1` degrades to
    /// `pop_back`. Answers `None` only when the deque is empty.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }
        if index >= self.len - 1 {
            return self.pop_back();
        }
        let phys = self.physical(index);
        // SAFETY: 0 < index < len - 1, so the slot is initialized. close_gap
        // treats it as vacated.
        let value = unsafe { self.buffer[phys].assume_init_read() };
        unsafe { self.close_gap(index, 1) };
        Some(value)
    }

    /// Inserts every element of `values` starting at logical position
    /// `index` (clamped to the current length), preserving their order and
    /// the relative order of existing elements.
    ///
    /// The gap for the whole batch is opened once, so the cost is
    /// O(min(index, len - index) + n) rather than n single insertions.
    pub fn insert_many<I>(&mut self, index: usize, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut it = values.into_iter();
        let n = it.len();
        if n == 0 {
            return;
        }
        let index = index.min(self.len);
        // SAFETY: the gap is filled below; the guard closes any slots the
        // iterator fails to deliver, including on panic.
        unsafe { self.ensure_gap(index, n) };
        let mut guard = GapGuard {
            deque: self,
            index,
            remaining: n,
        };
        while guard.remaining > 0 {
            match it.next() {
                Some(value) => {
                    let phys = guard.deque.physical(guard.index);
                    guard.deque.buffer[phys] = MaybeUninit::new(value);
                    guard.index += 1;
                    guard.remaining -= 1;
                }
                None => break,
            }
        }
    }

    /// Removes the logical range `[from, to)`. Bounds are clamped to the
    /// current length; an empty range is a no-op.
    pub fn remove_range(&mut self, from: usize, to: usize) {
        let to = to.min(self.len);
        let from = from.min(to);
        if from == to {
            return;
        }
        for i in from..to {
            let phys = self.physical(i);
            // SAFETY: i < len, so the slot is initialized; close_gap below
            // treats the whole range as vacated.
            unsafe { self.buffer[phys].assume_init_drop() };
        }
        unsafe { self.close_gap(from, to - from) };
    }

    /// Drops elements from the back until `len` is at most `new_len`.
    /// A target at or above the current length is a no-op, so the call is
    /// idempotent.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        for i in new_len..self.len {
            let phys = self.physical(i);
            // SAFETY: i < len, so the slot is initialized.
            unsafe { self.buffer[phys].assume_init_drop() };
        }
        self.len = new_len;
    }

    /// Drops elements from the front until `len` is at most `new_len`.
    pub fn truncate_front(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let n = self.len - new_len;
        for i in 0..n {
            let phys = self.physical(i);
            // SAFETY: i < len, so the slot is initialized.
            unsafe { self.buffer[phys].assume_init_drop() };
        }
        self.head = self.head.wrapping_add(n) & self.mask;
        self.len = new_len;
    }

    /// Keeps only the elements for which `f` answers `true`, preserving
    /// their order. Single compacting pass, O(len).
    ///
    /// If `f` panics, the element under test is dropped with the unwind;
    /// every already-kept element and the untested tail stay in the deque.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        self.len = 0;
        let mut guard = RetainGuard {
            deque: self,
            len,
            read: 0,
            kept: 0,
        };
        while guard.read < len {
            let phys = guard.deque.physical(guard.read);
            // SAFETY: read < len of the original run, so the slot is
            // initialized, and each slot is read exactly once.
            let value = unsafe { guard.deque.buffer[phys].assume_init_read() };
            guard.read += 1;
            if f(&value) {
                let dst = guard.deque.physical(guard.kept);
                guard.deque.buffer[dst] = MaybeUninit::new(value);
                guard.kept += 1;
            }
        }
        // Dropping the guard publishes the kept count as the new length.
    }

    /// Drops every element. Capacity is retained.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            let phys = self.physical(i);
            // SAFETY: i < len, so the slot is initialized.
            unsafe { self.buffer[phys].assume_init_drop() };
        }
        self.len = 0;
        self.head = 0;
    }

    /// Shrinks the backing array to the smallest power of two that holds the
    /// current elements. Shrinking never happens automatically.
    pub fn shrink_to_fit(&mut self) {
        let target = self.len.next_power_of_two().max(1);
        if target < self.buffer.len() {
            self.resize(target);
        }
    }

    /// Returns a borrowing iterator over the elements in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// Returns a mutably borrowing iterator over the elements in logical
    /// order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            buffer: self.buffer.as_mut_ptr(),
            head: self.head,
            mask: self.mask,
            front: 0,
            back: self.len,
            _marker: PhantomData,
        }
    }

    fn grow(&mut self) {
        self.resize(self.buffer.len() * 2);
    }

    /// Reallocates to `min_cap` (rounded up to a power of two, never below
    /// the current length) and re-linearizes: after this, `head == 0` and
    /// the layout is continuous. Every capacity change funnels through here.
    fn resize(&mut self, min_cap: usize) {
        self.resize_with_gap(min_cap, self.len, 0);
    }

    /// Reallocation that leaves `gap` uninitialized logical slots at
    /// `index` while copying. Does not touch `len`; callers account for the
    /// gap themselves.
    fn resize_with_gap(&mut self, min_cap: usize, index: usize, gap: usize) {
        let new_cap = min_cap.max(self.len + gap).next_power_of_two().max(1);
        let mut buf = alloc_buffer(new_cap);
        for i in 0..index {
            let phys = self.physical(i);
            // SAFETY: i < len, so the source slot is initialized; the old
            // buffer is discarded without dropping below.
            buf[i] = MaybeUninit::new(unsafe { self.buffer[phys].assume_init_read() });
        }
        for i in index..self.len {
            let phys = self.physical(i);
            // SAFETY: as above.
            buf[i + gap] = MaybeUninit::new(unsafe { self.buffer[phys].assume_init_read() });
        }
        self.buffer = buf;
        self.head = 0;
        self.mask = new_cap - 1;
    }

    /// Opens `gap` contiguous logical slots at `index`, shifting whichever
    /// side of the deque is shorter (or reallocating when the buffer cannot
    /// hold the enlarged contents). All other elements keep their relative
    /// order. Returns the physical index of the first slot in the gap.
    ///
    /// SAFETY: `index <= len` must hold, and the caller must initialize
    /// every slot in the gap (or close the unfilled remainder with
    /// `close_gap`) before anything else observes the deque. `len` is
    /// already adjusted to include the gap when this returns.
    unsafe fn ensure_gap(&mut self, index: usize, gap: usize) -> usize {
        debug_assert!(index <= self.len);
        if gap == 0 {
            return self.physical(index);
        }
        if self.len + gap > self.buffer.len() {
            // Reallocation case: copy around the gap, landing continuous.
            self.resize_with_gap(self.len + gap, index, gap);
            self.len += gap;
            return index;
        }
        let mask = self.mask;
        if index <= self.len - index {
            // Front run is shorter: pull the head back by the gap width and
            // slide the front run down with it, first element first.
            let new_head = self.head.wrapping_sub(gap) & mask;
            for j in 0..index {
                let from = self.head.wrapping_add(j) & mask;
                let to = new_head.wrapping_add(j) & mask;
                self.move_slot(from, to);
            }
            self.head = new_head;
        } else {
            // Back run is shorter: slide it forward by the gap width, last
            // element first.
            for j in (index..self.len).rev() {
                let from = self.head.wrapping_add(j) & mask;
                let to = self.head.wrapping_add(j + gap) & mask;
                self.move_slot(from, to);
            }
        }
        self.len += gap;
        self.physical(index)
    }

    /// Collapses `n` vacated logical slots at `index`, shifting the shorter
    /// surrounding side inward. The mirror of `ensure_gap`.
    ///
    /// SAFETY: the `n` logical slots starting at `index` must already be
    /// treated as uninitialized (values moved out or dropped), with
    /// `index + n <= len`.
    unsafe fn close_gap(&mut self, index: usize, n: usize) {
        debug_assert!(index + n <= self.len);
        if n == 0 {
            return;
        }
        let mask = self.mask;
        let after = self.len - index - n;
        if index <= after {
            // Front run is shorter: slide it forward into the gap, last
            // element first, then advance the head past the vacated slots.
            for j in (0..index).rev() {
                let from = self.head.wrapping_add(j) & mask;
                let to = self.head.wrapping_add(j + n) & mask;
                self.move_slot(from, to);
            }
            self.head = self.head.wrapping_add(n) & mask;
        } else {
            // Back run is shorter: slide it backward into the gap, first
            // element first.
            for j in (index + n)..self.len {
                let from = self.head.wrapping_add(j) & mask;
                let to = self.head.wrapping_add(j - n) & mask;
                self.move_slot(from, to);
            }
        }
        self.len -= n;
    }
}

fn alloc_buffer<T>(cap: usize) -> Box<[MaybeUninit<T>]> {
    let mut buf = Vec::with_capacity(cap);
    buf.resize_with(cap, MaybeUninit::uninit);
    buf.into_boxed_slice()
}

/// Reassembles a deque mid-`retain`: logical slots `0..kept` hold the
/// compacted survivors and `read..len` the not-yet-tested tail. On drop the
/// tail slides down next to the survivors, so a panicking predicate loses
/// only the element it was inspecting.
struct RetainGuard<'a, T> {
    deque: &'a mut CircularDeque<T>,
    len: usize,
    read: usize,
    kept: usize,
}

impl<T> Drop for RetainGuard<'_, T> {
    fn drop(&mut self) {
        for j in self.read..self.len {
            let from = self.deque.physical(j);
            let to = self.deque.physical(self.kept);
            if from != to {
                // SAFETY: slot j was never read by the pass, so it is
                // initialized; the destination slot is vacated or free.
                unsafe { self.deque.move_slot(from, to) };
            }
            self.kept += 1;
        }
        self.deque.len = self.kept;
    }
}

/// Closes the unfilled tail of a gap if `insert_many`'s iterator stops
/// early or panics.
struct GapGuard<'a, T> {
    deque: &'a mut CircularDeque<T>,
    index: usize,
    remaining: usize,
}

impl<T> Drop for GapGuard<'_, T> {
    fn drop(&mut self) {
        // SAFETY: the slots [index, index + remaining) are exactly the part
        // of the gap never initialized by insert_many.
        unsafe { self.deque.close_gap(self.index, self.remaining) };
    }
}

impl<T> Drop for CircularDeque<T> {
    fn drop(&mut self) {
        for i in 0..self.len {
            let phys = self.physical(i);
            // SAFETY: i < len, so the slot is initialized.
            unsafe { self.buffer[phys].assume_init_drop() };
        }
    }
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularDeque<T> {
    fn clone(&self) -> Self {
        let mut out = CircularDeque::with_capacity(self.len);
        for value in self.iter() {
            out.push_back(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<T> Extend<T> for CircularDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for CircularDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = CircularDeque::with_capacity(iter.size_hint().0);
        out.extend(iter);
        out
    }
}

/// Borrowing iterator over a deque in logical order.
pub struct Iter<'a, T> {
    deque: &'a CircularDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let phys = self.deque.physical(self.front);
        self.front += 1;
        // SAFETY: front < len, so the slot is initialized.
        Some(unsafe { self.deque.buffer[phys].assume_init_ref() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let phys = self.deque.physical(self.back);
        // SAFETY: back < len, so the slot is initialized.
        Some(unsafe { self.deque.buffer[phys].assume_init_ref() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a deque in logical order.
pub struct IterMut<'a, T> {
    buffer: *mut MaybeUninit<T>,
    head: usize,
    mask: usize,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }
        let phys = self.head.wrapping_add(self.front) & self.mask;
        self.front += 1;
        // SAFETY: the index is in the live region and each logical position
        // is visited exactly once, so no two returned references alias.
        Some(unsafe { &mut *(*self.buffer.add(phys)).as_mut_ptr() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let phys = self.head.wrapping_add(self.back) & self.mask;
        // SAFETY: as in next.
        Some(unsafe { &mut *(*self.buffer.add(phys)).as_mut_ptr() })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a deque in logical order.
pub struct IntoIter<T> {
    deque: CircularDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(dq: &CircularDeque<i32>) -> Vec<i32> {
        dq.iter().copied().collect()
    }

    /// Builds a wrapped deque: capacity 8, head near the physical end, so
    /// the live region crosses the array boundary.
    fn wrapped(values: &[i32]) -> CircularDeque<i32> {
        assert!(values.len() <= 8);
        let mut dq = CircularDeque::with_capacity(8);
        for _ in 0..6 {
            dq.push_back(0);
        }
        for _ in 0..6 {
            dq.pop_front();
        }
        // head == 6 now
        for &v in values {
            dq.push_back(v);
        }
        dq
    }

    #[test]
    fn gap_in_place_continuous() {
        let mut dq = CircularDeque::with_capacity(8);
        dq.extend([1, 2, 3, 4]);
        dq.insert_many(2, [10, 11]);
        assert_eq!(contents(&dq), [1, 2, 10, 11, 3, 4]);
    }

    #[test]
    fn gap_in_place_wrapped_front_shift() {
        let mut dq = wrapped(&[1, 2, 3, 4, 5]);
        // index 1: front run shorter, head walks backward across the
        // boundary
        dq.insert_many(1, [10, 11]);
        assert_eq!(contents(&dq), [1, 10, 11, 2, 3, 4, 5]);
    }

    #[test]
    fn gap_in_place_wrapped_back_shift() {
        let mut dq = wrapped(&[1, 2, 3, 4, 5]);
        // index 4: back run shorter, tail walks forward across the boundary
        dq.insert_many(4, [10, 11]);
        assert_eq!(contents(&dq), [1, 2, 3, 4, 10, 11, 5]);
    }

    #[test]
    fn gap_reallocating_continuous() {
        let mut dq = CircularDeque::with_capacity(4);
        dq.extend([1, 2, 3, 4]);
        dq.insert_many(2, [10, 11, 12]);
        assert_eq!(contents(&dq), [1, 2, 10, 11, 12, 3, 4]);
        assert_eq!(dq.capacity(), 8);
    }

    #[test]
    fn gap_reallocating_wrapped() {
        let mut dq = wrapped(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(dq.capacity(), 8);
        dq.insert_many(3, [10, 11]);
        assert_eq!(contents(&dq), [1, 2, 3, 10, 11, 4, 5, 6, 7, 8]);
        assert_eq!(dq.capacity(), 16);
    }

    #[test]
    fn gap_spanning_physical_end() {
        // head = 6, four elements: physical slots 6,7,0,1. Opening a gap at
        // logical 2 with the front side shorter... use index 1 so the head
        // side (1 element) moves backward through slot 5.
        let mut dq = wrapped(&[1, 2, 3, 4]);
        dq.insert_many(1, [10, 11, 12]);
        assert_eq!(contents(&dq), [1, 10, 11, 12, 2, 3, 4]);
    }

    #[test]
    fn insert_many_short_iterator_closes_gap() {
        struct Lying(std::vec::IntoIter<i32>);
        impl Iterator for Lying {
            type Item = i32;
            fn next(&mut self) -> Option<i32> {
                self.0.next()
            }
            fn size_hint(&self) -> (usize, Option<usize>) {
                (5, Some(5))
            }
        }
        impl ExactSizeIterator for Lying {}

        let mut dq = CircularDeque::with_capacity(8);
        dq.extend([1, 2, 3, 4]);
        dq.insert_many(2, Lying(vec![10, 11].into_iter()));
        assert_eq!(contents(&dq), [1, 2, 10, 11, 3, 4]);
    }

    #[test]
    fn close_gap_front_side_wrapped() {
        let mut dq = wrapped(&[1, 2, 3, 4, 5]);
        dq.remove_range(1, 3);
        assert_eq!(contents(&dq), [1, 4, 5]);
    }

    #[test]
    fn remove_at_shifts_shorter_side() {
        let mut dq = wrapped(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(dq.remove_at(1), Some(2));
        assert_eq!(dq.remove_at(4), Some(6));
        assert_eq!(contents(&dq), [1, 3, 4, 5, 7]);
    }

    #[test]
    fn drop_runs_once_per_element() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Counted(Rc<Cell<usize>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        {
            let mut dq = CircularDeque::with_capacity(4);
            for _ in 0..6 {
                dq.push_back(Counted(Rc::clone(&drops)));
            }
            dq.pop_front();
            dq.remove_at(2);
            dq.truncate(3);
        }
        assert_eq!(drops.get(), 6);
    }
}
