use super::buffer::GrowableBuffer;
use super::{FloatT, LinalgError, VectorMath};
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// Dense vector with a hysteresis capacity policy.
///
/// Resizing to a length in `[capacity/2, capacity]` never reallocates.
/// All binary operations require operands of equal length and report
/// a [`LinalgError::InvalidArgument`] otherwise.
///
/// ```
/// use bandldl::algebra::Vector;
///
/// let mut v = Vector::<f64>::from(vec![3., 4.]);
/// assert_eq!(v.norm(), 5.);
///
/// v.resize(4, true, true);
/// assert_eq!(v.as_slice(), &[3., 4., 0., 0.]);
/// ```
pub struct Vector<T = f64> {
    buf: GrowableBuffer<T>,
}

impl<T> Vector<T>
where
    T: FloatT,
{
    /// Creates a vector of length `size`.  If `zero_init` is false
    /// the initial contents are unspecified.
    pub fn new(size: usize, zero_init: bool) -> Self {
        let mut buf = GrowableBuffer::new(0);
        buf.resize(size, false, zero_init);
        Self { buf }
    }

    pub fn zeros(size: usize) -> Self {
        Self::new(size, true)
    }

    /// Changes the length of the vector.
    ///
    /// If the new length is within `[capacity/2, capacity]` only the length
    /// changes and existing contents are kept regardless of `preserve`.
    /// Otherwise the storage is reallocated to exactly `new_size` entries and
    /// the leading `min(len, new_size)` entries are kept only if `preserve`
    /// is set.  Entries beyond the old length are zero if `zero_init` is
    /// set and unspecified if not.
    pub fn resize(&mut self, new_size: usize, preserve: bool, zero_init: bool) {
        self.buf.resize(new_size, preserve, zero_init);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Sets every entry to zero.  The length is unchanged.
    pub fn clear(&mut self) {
        self.as_mut_slice().set(T::zero());
    }

    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn get(&self, idx: usize) -> Result<T, LinalgError> {
        LinalgError::check_index(idx, self.len())?;
        Ok(self.as_slice()[idx])
    }

    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T, LinalgError> {
        LinalgError::check_index(idx, self.len())?;
        Ok(&mut self.as_mut_slice()[idx])
    }

    pub fn set(&mut self, idx: usize, value: T) -> Result<(), LinalgError> {
        *self.get_mut(idx)? = value;
        Ok(())
    }

    /// Elementwise sum `self + v`
    pub fn try_add(&self, v: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(v, "vector addition requires equal lengths")?;
        let mut out = Self::zeros(self.len());
        out.as_mut_slice()
            .waxpby(T::one(), self.as_slice(), T::one(), v.as_slice());
        Ok(out)
    }

    /// Elementwise difference `self - v`
    pub fn try_sub(&self, v: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(v, "vector subtraction requires equal lengths")?;
        let mut out = Self::zeros(self.len());
        out.as_mut_slice()
            .waxpby(T::one(), self.as_slice(), -T::one(), v.as_slice());
        Ok(out)
    }

    /// In place `self += v`
    pub fn try_add_assign(&mut self, v: &Self) -> Result<&mut Self, LinalgError> {
        self.check_same_len(v, "vector addition requires equal lengths")?;
        self.as_mut_slice().axpby(T::one(), v.as_slice(), T::one());
        Ok(self)
    }

    /// In place `self -= v`
    pub fn try_sub_assign(&mut self, v: &Self) -> Result<&mut Self, LinalgError> {
        self.check_same_len(v, "vector subtraction requires equal lengths")?;
        self.as_mut_slice().axpby(-T::one(), v.as_slice(), T::one());
        Ok(self)
    }

    /// In place scaling by `c`
    pub fn scale(&mut self, c: T) -> &mut Self {
        self.as_mut_slice().scale(c);
        self
    }

    /// Copy of `self` scaled by `c`
    pub fn scaled(&self, c: T) -> Self {
        let mut out = self.clone();
        out.scale(c);
        out
    }

    pub fn dot(&self, v: &Self) -> Result<T, LinalgError> {
        self.check_same_len(v, "dot product requires equal lengths")?;
        Ok(self.as_slice().dot(v.as_slice()))
    }

    /// Euclidean norm over all entries
    pub fn norm(&self) -> T {
        self.as_slice().norm()
    }

    /// Euclidean norm over the leading `dims` entries
    pub fn norm_leading(&self, dims: usize) -> Result<T, LinalgError> {
        if dims > self.len() {
            return Err(LinalgError::InvalidArgument(
                "norm dimension exceeds vector length",
            ));
        }
        Ok(self.as_slice()[..dims].norm())
    }

    fn check_same_len(&self, v: &Self, msg: &'static str) -> Result<(), LinalgError> {
        if self.len() == v.len() {
            Ok(())
        } else {
            Err(LinalgError::InvalidArgument(msg))
        }
    }
}

impl<T: FloatT> From<Vec<T>> for Vector<T> {
    fn from(v: Vec<T>) -> Self {
        Self {
            buf: GrowableBuffer::from_vec(v),
        }
    }
}

impl<T: FloatT> From<&[T]> for Vector<T> {
    fn from(v: &[T]) -> Self {
        Self::from(v.to_vec())
    }
}

// a copy is fully independent, with capacity trimmed to its length
impl<T: FloatT> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

// NB: comparison ignores capacity and stale entries beyond the length
impl<T: FloatT> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: FloatT> std::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// panicking index access, for callers that have already
// established the index is in range

impl<T: FloatT> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, idx: usize) -> &T {
        &self.as_slice()[idx]
    }
}

impl<T: FloatT> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.as_mut_slice()[idx]
    }
}

impl<T: FloatT> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, c: T) -> Vector<T> {
        self.scaled(c)
    }
}

impl<T: FloatT> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, c: T) {
        self.scale(c);
    }
}
