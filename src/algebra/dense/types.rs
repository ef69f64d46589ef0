use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Core dense matrix type for owned and borrowed matrices.
///
/// Data is stored in row major format as a single flat buffer, so that
/// row `r` occupies `data[r*ncols .. (r+1)*ncols]`.  The same layout is
/// used for general dense matrices and for the banded symmetric storage
/// consumed by [`solve_ldlt`](DenseStorageMatrix::solve_ldlt).
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// dimensions
    pub(crate) size: (usize, usize),
    /// vector of data in row major format
    pub(crate) data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Owned dense matrix.
pub type Matrix<T = f64> = DenseStorageMatrix<Vec<T>, T>;
/// Dense matrix view over a caller-owned slice.
pub type BorrowedMatrix<'a, T = f64> = DenseStorageMatrix<&'a [T], T>;
/// Mutable dense matrix view over a caller-owned slice.
pub type BorrowedMatrixMut<'a, T = f64> = DenseStorageMatrix<&'a mut [T], T>;

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    // NB: no per-dimension check here.  A column index past
    // the row end lands in the next row.
    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.ncols() + idx.1
    }

    /// flat row major data
    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Bounds checked view of row `r`.
    pub fn row(&self, r: usize) -> Result<&[T], LinalgError> {
        LinalgError::check_index(r, self.nrows())?;
        Ok(self.row_slice(r))
    }

    #[inline]
    pub(crate) fn row_slice(&self, r: usize) -> &[T] {
        let n = self.ncols();
        &self.data()[(r * n)..(r + 1) * n]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    /// mutable flat row major data
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    /// Bounds checked mutable view of row `r`.
    pub fn row_mut(&mut self, r: usize) -> Result<&mut [T], LinalgError> {
        LinalgError::check_index(r, self.nrows())?;
        Ok(self.row_slice_mut(r))
    }

    #[inline]
    pub(crate) fn row_slice_mut(&mut self, r: usize) -> &mut [T] {
        let n = self.ncols();
        &mut self.data_mut()[(r * n)..(r + 1) * n]
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

// ------------------------------------------------
// BorrowedMatrix implementation

fn check_borrowed_dims(len: usize, m: usize, n: usize) -> Result<(), LinalgError> {
    if m == 0 || n == 0 {
        return Err(LinalgError::InvalidArgument(
            "matrix dimensions must be at least 1",
        ));
    }
    if m.checked_mul(n) != Some(len) {
        return Err(LinalgError::InvalidArgument(
            "slice length does not match matrix dimensions",
        ));
    }
    Ok(())
}

impl<'a, T> BorrowedMatrix<'a, T>
where
    T: FloatT,
{
    /// Wraps `data` as an `m x n` row major matrix.
    pub fn from_slice(data: &'a [T], m: usize, n: usize) -> Result<Self, LinalgError> {
        check_borrowed_dims(data.len(), m, n)?;
        Ok(Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData::<T>,
        })
    }
}

impl<'a, T> BorrowedMatrixMut<'a, T>
where
    T: FloatT,
{
    /// Wraps `data` as a mutable `m x n` row major matrix.
    pub fn from_slice_mut(data: &'a mut [T], m: usize, n: usize) -> Result<Self, LinalgError> {
        check_borrowed_dims(data.len(), m, n)?;
        Ok(Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData::<T>,
        })
    }
}
