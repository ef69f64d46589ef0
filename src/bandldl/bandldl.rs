#![allow(non_snake_case)]
use crate::algebra::*;
use core::cmp::{max, min};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for the banded $LDL^T$ solve
/// ([`solve_ldlt_with`](DenseStorageMatrix::solve_ldlt_with))

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BandLdlSettings<T: FloatT> {
    /// Multipliers of magnitude below this value are treated as zero when
    /// deciding which earlier rows can still contribute to later ones.
    /// Zero disables the pruning.
    #[builder(default = "(1e-12).as_T()")]
    pub negligible_tol: T,
}

impl<T> Default for BandLdlSettings<T>
where
    T: FloatT,
{
    fn default() -> BandLdlSettings<T> {
        // the builder defaults always pass validation
        BandLdlSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> BandLdlSettingsBuilder<T>
where
    T: FloatT,
{
    fn validate(&self) -> Result<(), LinalgError> {
        if let Some(tol) = self.negligible_tol {
            if !(tol.is_finite() && tol >= T::zero()) {
                return Err(LinalgError::InvalidArgument(
                    "negligible_tol must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

impl From<LinalgError> for BandLdlSettingsBuilderError {
    fn from(e: LinalgError) -> Self {
        BandLdlSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Diagnostics from a banded $LDL^T$ factorization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandLdlInfo {
    /// number of strictly positive entries in D
    pub positive_inertia: usize,
    /// number of times a row's lower bound was advanced past
    /// a negligible multiplier
    pub pruned: usize,
}

/// Right hand side of a banded solve.
///
/// The data is a row major block of `rhs_nrows()` rows with `rhs_ncols()`
/// values each.  A vector is a single column.  On return from
/// [`solve_ldlt`](DenseStorageMatrix::solve_ldlt) it holds the solution.
pub trait BandRhs<T> {
    fn rhs_nrows(&self) -> usize;
    fn rhs_ncols(&self) -> usize;
    fn rhs_data_mut(&mut self) -> &mut [T];
}

impl<T: FloatT> BandRhs<T> for Vector<T> {
    fn rhs_nrows(&self) -> usize {
        self.len()
    }
    fn rhs_ncols(&self) -> usize {
        1
    }
    fn rhs_data_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: FloatT> BandRhs<T> for [T] {
    fn rhs_nrows(&self) -> usize {
        self.len()
    }
    fn rhs_ncols(&self) -> usize {
        1
    }
    fn rhs_data_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<S, T> BandRhs<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    fn rhs_nrows(&self) -> usize {
        self.nrows()
    }
    fn rhs_ncols(&self) -> usize {
        self.ncols()
    }
    fn rhs_data_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    /// Solves `A x = b` in place for symmetric positive definite `A` held
    /// in banded storage, using default [`BandLdlSettings`].
    ///
    /// Only the diagonal and the upper band of `A` are stored, with the
    /// number of columns equal to the bandwidth: element `A[i, j]` for
    /// `j >= i` lives at `self[(i, j - i)]`, so the diagonal is column zero.
    ///
    /// On return `rhs` holds the solution and `self` holds the factors of
    /// `A = L D L^T`: D on column zero and the off-diagonal entries of `L^T`
    /// in the remaining columns.  The original coefficients are lost.
    ///
    /// Positive definiteness is not checked.  Indefinite or singular input
    /// produces meaningless values rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] without modifying either
    /// argument if `self` has no columns, has fewer rows than columns, or
    /// if `rhs` does not have one row per row of `self`.
    ///
    /// ```
    /// use bandldl::algebra::{Matrix, Vector};
    ///
    /// // [4 1 0]
    /// // [1 4 1]
    /// // [0 1 4]
    /// let mut A = Matrix::<f64>::from(&[[4., 1.], [4., 1.], [4., 0.]]);
    /// let mut b = Vector::<f64>::from(vec![5., 6., 5.]);
    /// A.solve_ldlt(&mut b).unwrap();
    /// assert!((b[0] - 1.).abs() < 1e-12);
    /// assert!((b[1] - 1.).abs() < 1e-12);
    /// assert!((b[2] - 1.).abs() < 1e-12);
    /// ```
    pub fn solve_ldlt<R>(&mut self, rhs: &mut R) -> Result<(), LinalgError>
    where
        R: BandRhs<T> + ?Sized,
    {
        self.solve_ldlt_with(rhs, &BandLdlSettings::default())
            .map(|_| ())
    }

    /// As [`solve_ldlt`](Self::solve_ldlt), with explicit settings.
    /// Returns diagnostics from the factorization.
    pub fn solve_ldlt_with<R>(
        &mut self,
        rhs: &mut R,
        settings: &BandLdlSettings<T>,
    ) -> Result<BandLdlInfo, LinalgError>
    where
        R: BandRhs<T> + ?Sized,
    {
        check_dimensions(self.size(), rhs)?;

        let (n, w) = self.size();
        let mut workspace = BandLdlWorkspace::<T>::new(n, w);

        let info = _factor(self.data_mut(), n, w, &mut workspace, settings.negligible_tol);

        let ncols = rhs.rhs_ncols();
        _solve(self.data(), n, w, &workspace.lwb, rhs.rhs_data_mut(), ncols);

        log::debug!(
            "banded LDL: n = {}, bandwidth = {}, rhs columns = {}, pruned = {}, positive inertia = {}",
            n,
            w,
            ncols,
            info.pruned,
            info.positive_inertia
        );

        Ok(info)
    }
}

fn check_dimensions<T, R>(size: (usize, usize), rhs: &R) -> Result<(), LinalgError>
where
    R: BandRhs<T> + ?Sized,
{
    let (n, w) = size;
    if w == 0 {
        return Err(LinalgError::InvalidArgument(
            "banded solve needs a bandwidth of at least 1",
        ));
    }
    if n < w {
        return Err(LinalgError::InvalidArgument(
            "banded solve needs at least as many rows as the bandwidth",
        ));
    }
    if rhs.rhs_nrows() != n {
        return Err(LinalgError::InvalidArgument(
            "right hand side row count does not match the matrix",
        ));
    }
    Ok(())
}

// Call scoped scratch for one factorization.
//
// lwb[i] is the first row whose factors can still touch row i.  It starts
// at the band edge and is advanced past leading negligible multipliers.
// r caches D[j] * L[j, i] while row i is being factored.
#[derive(Debug)]
struct BandLdlWorkspace<T> {
    lwb: Vec<usize>,
    r: Vec<T>,
}

impl<T> BandLdlWorkspace<T>
where
    T: FloatT,
{
    fn new(n: usize, w: usize) -> Self {
        let lwb = (0..n).map(|i| (i + 1).saturating_sub(w)).collect();
        let r = vec![T::zero(); n];
        Self { lwb, r }
    }
}

// In place banded LDL^T.  A is n x w, row major, with A[i, j] at
// A[i*w + (j - i)].  Row i is finished before row i+1 is started,
// so rows above i can be read while row i is written.
fn _factor<T: FloatT>(
    A: &mut [T],
    n: usize,
    w: usize,
    workspace: &mut BandLdlWorkspace<T>,
    negligible_tol: T,
) -> BandLdlInfo {
    let lwb = &mut workspace.lwb;
    let r = &mut workspace.r;
    let mut info = BandLdlInfo::default();

    for i in 0..n {
        let (done, rest) = A.split_at_mut(i * w);
        let row = &mut rest[..w];

        // diagonal
        let mut d = row[0];
        for j in lwb[i]..i {
            let m = done[j * w + (i - j)];
            r[j] = done[j * w] * m;
            d -= r[j] * m;
        }
        row[0] = d;

        if d > T::zero() {
            info.positive_inertia += 1;
        }

        // multipliers for the rows below i within the band
        let upb = min(i + w, n);
        for j in (i + 1)..upb {
            let mut m = row[j - i];
            for k in max(lwb[i], lwb[j])..i {
                m -= done[k * w + (j - k)] * r[k];
            }
            m /= d;
            row[j - i] = m;

            if T::abs(m) < negligible_tol && lwb[j] == i {
                lwb[j] = i + 1;
                info.pruned += 1;
            }
        }
    }

    info
}

// Solves (I + L) D (I + L^T) X = B for the factors left by _factor,
// with X replacing B.  B is n x ncols, row major.
fn _solve<T: FloatT>(L: &[T], n: usize, w: usize, lwb: &[usize], B: &mut [T], ncols: usize) {
    if ncols == 0 {
        return;
    }
    _lsolve(L, n, w, lwb, B, ncols);

    for (i, Bi) in B.chunks_exact_mut(ncols).enumerate() {
        let d = L[i * w];
        Bi.scalarop(|x| x / d);
    }

    _ltsolve(L, n, w, B, ncols);
}

// Forward substitution with the unit lower factor.  Entries skipped
// by lwb are negligible and are skipped here too.
fn _lsolve<T: FloatT>(L: &[T], n: usize, w: usize, lwb: &[usize], B: &mut [T], ncols: usize) {
    for i in 1..n {
        let (solved, rest) = B.split_at_mut(i * ncols);
        let Bi = &mut rest[..ncols];
        for j in lwb[i]..i {
            let m = L[j * w + (i - j)];
            Bi.axpby(-m, &solved[j * ncols..(j + 1) * ncols], T::one());
        }
    }
}

// Back substitution with the unit upper factor
fn _ltsolve<T: FloatT>(L: &[T], n: usize, w: usize, B: &mut [T], ncols: usize) {
    for i in (0..n).rev() {
        let upb = min(i + w, n);
        let (head, later) = B.split_at_mut((i + 1) * ncols);
        let Bi = &mut head[i * ncols..];
        for j in (i + 1)..upb {
            let m = L[i * w + (j - i)];
            let off = (j - i - 1) * ncols;
            Bi.axpby(-m, &later[off..off + ncols], T::one());
        }
    }
}

//configure tests of internals
#[path = "test.rs"]
#[cfg(test)]
mod test;
