//! Banded $LDL^T$ solver for symmetric positive definite systems.
//!
//! A symmetric matrix with bandwidth `w` (so `A[i, j] = 0` whenever
//! `|i - j| >= w`) is held in an `n x w` [`Matrix`](crate::algebra::Matrix),
//! with row `i` holding `A[i, i], A[i, i+1], ..., A[i, i+w-1]`.  Entries past
//! the end of the matrix in the bottom rows are never read.
//!
//! [`solve_ldlt`](crate::algebra::DenseStorageMatrix::solve_ldlt) factors the
//! matrix in place and solves for one or several right hand sides.  During the
//! factorization, any row whose leading multiplier is negligible (see
//! [`BandLdlSettings`]) is marked so that later rows and both substitutions
//! skip it.  Matrices whose band is partly empty, such as block diagonal
//! systems, are solved in less work than the full band would require.

#![allow(clippy::module_inception)]
mod bandldl;
pub use bandldl::*;
