use num_traits::Zero;
use std::cmp::min;

/// Capacity policy for [`GrowableBuffer`].
///
/// A resize to `new_len` keeps the current allocation when `new_len` lies in
/// `[capacity/2, capacity]`.  Anything outside that window reallocates to
/// exactly `new_len`.
#[inline]
pub(crate) fn keeps_allocation(new_len: usize, capacity: usize) -> bool {
    (capacity / 2..=capacity).contains(&new_len)
}

/// Flat buffer with a logical length and a separate capacity.
///
/// The backing `Vec` is always fully initialized to `capacity` elements,
/// so entries between the logical length and the capacity hold whatever
/// was last written there.
#[derive(Debug)]
pub(crate) struct GrowableBuffer<T> {
    data: Vec<T>,
    len: usize,
}

impl<T> GrowableBuffer<T>
where
    T: Copy + Zero,
{
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
            len,
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self { data, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Change the logical length.
    ///
    /// Within the hysteresis window only the length changes, with newly
    /// exposed entries zeroed if `zero_init` is set.  Otherwise the storage
    /// is replaced by one of exactly `new_len` entries, copying the first
    /// `min(len, new_len)` entries across if `preserve` is set.
    pub fn resize(&mut self, new_len: usize, preserve: bool, zero_init: bool) {
        if keeps_allocation(new_len, self.capacity()) {
            if zero_init && new_len > self.len {
                self.data[self.len..new_len].fill(T::zero());
            }
            self.len = new_len;
            return;
        }

        // fresh storage is always zeroed, so the grown tail
        // satisfies zero_init for free
        let mut data = vec![T::zero(); new_len];
        if preserve {
            let keep = min(self.len, new_len);
            data[..keep].copy_from_slice(&self.data[..keep]);
        }
        self.data = data;
        self.len = new_len;
    }
}

impl<T> Clone for GrowableBuffer<T>
where
    T: Copy + Zero,
{
    // copies are trimmed so that capacity == len
    fn clone(&self) -> Self {
        Self::from_vec(self.as_slice().to_vec())
    }
}
