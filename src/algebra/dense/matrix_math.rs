#![allow(non_snake_case)]
use crate::algebra::{DenseStorageMatrix, FloatT, LinalgError, Matrix, ShapedMatrix, VectorMath};

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    /// Writes the transpose of `self` into `out`, which is
    /// re-dimensioned to `ncols x nrows` if its shape differs.
    pub fn transpose(&self, out: &mut Matrix<T>) {
        let (m, n) = self.size();
        if out.size() != (n, m) {
            out.alloc(n, m, false);
        }

        for i in 0..m {
            for (j, &v) in self.row_slice(i).iter().enumerate() {
                out[(j, i)] = v;
            }
        }
    }

    /// Dense product `out = self * B`.  `out` is re-dimensioned
    /// to `self.nrows() x B.ncols()` if its shape differs.
    pub fn multiply<S2>(
        &self,
        B: &DenseStorageMatrix<S2, T>,
        out: &mut Matrix<T>,
    ) -> Result<(), LinalgError>
    where
        S2: AsRef<[T]>,
    {
        if B.nrows() != self.ncols() {
            return Err(LinalgError::InvalidArgument(
                "matrix multiply inner dimensions do not match",
            ));
        }

        let (m, p) = (self.nrows(), B.ncols());
        if out.size() != (m, p) {
            out.alloc(m, p, false);
        }

        // row i of the product is the sum over k of A[i,k] * B[k,:]
        for i in 0..m {
            let arow = self.row_slice(i);
            let crow = out.row_slice_mut(i);
            crow.set(T::zero());
            for (k, &aik) in arow.iter().enumerate() {
                crow.axpby(aik, B.row_slice(k), T::one());
            }
        }
        Ok(())
    }
}
