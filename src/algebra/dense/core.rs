use crate::algebra::{DenseStorageMatrix, FloatT, LinalgError, Matrix, ShapedMatrix, VectorMath};

fn check_dims(m: usize, n: usize) -> Result<(), LinalgError> {
    if m == 0 || n == 0 {
        Err(LinalgError::InvalidArgument(
            "matrix dimensions must be at least 1",
        ))
    } else {
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Creates an `m x n` matrix.  If `zero_init` is false the
    /// initial contents are unspecified.
    pub fn new(m: usize, n: usize, zero_init: bool) -> Result<Self, LinalgError> {
        check_dims(m, n)?;
        let mut mat = Self {
            size: (0, 0),
            data: Vec::new(),
            phantom: std::marker::PhantomData,
        };
        mat.alloc(m, n, zero_init);
        Ok(mat)
    }

    /// Creates a zero matrix.  Unlike [`new`](Self::new), empty
    /// dimensions are accepted here.
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        Self {
            size,
            data: vec![T::zero(); m * n],
            phantom: std::marker::PhantomData,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    /// Creates a matrix from row major data.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Result<Self, LinalgError> {
        let (m, n) = size;
        check_dims(m, n)?;
        if m * n != src.len() {
            return Err(LinalgError::InvalidArgument(
                "slice length does not match matrix dimensions",
            ));
        }
        Ok(Self {
            size,
            data: src.to_vec(),
            phantom: std::marker::PhantomData,
        })
    }

    /// Changes the number of rows.  Prior contents are not preserved.
    pub fn set_rows(&mut self, m: usize, zero_init: bool) -> Result<(), LinalgError> {
        self.resize(m, self.ncols(), zero_init)
    }

    /// Changes the number of columns.  Prior contents are not preserved.
    pub fn set_columns(&mut self, n: usize, zero_init: bool) -> Result<(), LinalgError> {
        self.resize(self.nrows(), n, zero_init)
    }

    /// Changes both dimensions.  Prior contents are not preserved: the
    /// matrix is zero if `zero_init` is set and unspecified otherwise.
    pub fn resize(&mut self, m: usize, n: usize, zero_init: bool) -> Result<(), LinalgError> {
        check_dims(m, n)?;
        self.alloc(m, n, zero_init);
        Ok(())
    }

    // Re-dimension in place.  The existing allocation is reused where
    // possible, so without zero_init the contents are leftovers.
    pub(crate) fn alloc(&mut self, m: usize, n: usize, zero_init: bool) {
        if zero_init {
            self.data.clear();
        }
        self.data.resize(m * n, T::zero());
        self.size = (m, n);
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
    T: FloatT,
{
    /// Sets every entry to zero.
    pub fn clear(&mut self) {
        self.data_mut().set(T::zero());
    }
}

impl<'a, I, J, T> From<I> for Matrix<T>
where
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = &'a T>,
    T: FloatT,
{
    /// Builds a matrix from an iterator of rows, e.g. a nested array literal
    ///
    /// # Panics
    /// Panics if the rows are not all of the same length
    fn from(rows: I) -> Matrix<T> {
        let rows: Vec<Vec<T>> = rows
            .into_iter()
            .map(|r| r.into_iter().copied().collect())
            .collect();

        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == n), "ragged matrix rows");

        Matrix {
            size: (m, n),
            data: rows.concat(),
            phantom: std::marker::PhantomData,
        }
    }
}

impl<S, T> std::fmt::Display for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for v in self.row_slice(i) {
                write!(f, " {:?}", v)?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_resize() {
        let mut a = Matrix::<f64>::new(2, 3, true).unwrap();
        assert_eq!(a.size(), (2, 3));
        assert!(a.data().iter().all(|&x| x == 0.));

        assert_eq!(
            Matrix::<f64>::new(0, 3, true),
            Err(LinalgError::InvalidArgument(
                "matrix dimensions must be at least 1"
            ))
        );

        a.data_mut().set(1.);
        a.set_rows(4, true).unwrap();
        assert_eq!(a.size(), (4, 3));
        assert!(a.data().iter().all(|&x| x == 0.));

        a.set_columns(2, false).unwrap();
        assert_eq!(a.size(), (4, 2));
        assert_eq!(a.data().len(), 8);

        a.resize(5, 5, true).unwrap();
        assert_eq!(a.size(), (5, 5));

        // a failed resize leaves the matrix untouched
        a[(1, 1)] = 2.;
        assert!(a.resize(0, 1, true).is_err());
        assert!(a.set_rows(0, true).is_err());
        assert!(a.set_columns(0, true).is_err());
        assert_eq!(a.size(), (5, 5));
        assert_eq!(a[(1, 1)], 2.);
    }

    #[test]
    fn test_clear_and_identity() {
        let mut a = Matrix::from(&[[1., 2.], [3., 4.]]);
        a.clear();
        assert_eq!(a, Matrix::zeros((2, 2)));

        let eye = Matrix::<f64>::identity(3);
        assert_eq!(eye.row(1).unwrap(), &[0., 1., 0.]);
        assert!(eye.is_square());
    }

    #[test]
    fn test_new_from_slice() {
        let a = Matrix::new_from_slice((2, 2), &[1., 2., 3., 4.]).unwrap();
        assert_eq!(a, Matrix::from(&[[1., 2.], [3., 4.]]));
        assert!(Matrix::new_from_slice((3, 2), &[1., 2., 3., 4.]).is_err());
    }

    #[test]
    fn test_display() {
        let a = Matrix::from(&[[1., 2.], [3., 4.]]);
        let s = format!("{}", a);
        assert!(s.contains("[  1.0 2.0]"));
        assert!(s.contains("[  3.0 4.0]"));
    }
}
