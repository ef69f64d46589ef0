//! __bandldl__ provides small dense linear algebra containers and an in place
//! $LDL^T$ solver for symmetric positive definite banded systems.
//!
//! The crate has two parts:
//!
//! * [`algebra`]: a growable [`Vector`](algebra::Vector) with a hysteresis
//!   capacity policy, and a row major dense [`Matrix`](algebra::Matrix) with
//!   borrowed variants over caller owned slices.
//!
//! * [`bandldl`]: a banded $LDL^T$ factorization and solve for a single
//!   vector or several right hand sides at once.  The factorization skips
//!   work for entries of the band that turn out to be negligible.
//!
//! All types are generic over [`FloatT`](algebra::FloatT), which defaults
//! to `f64`.
//!
//! ```
//! use bandldl::algebra::{Matrix, Vector};
//!
//! // [2 1]
//! // [1 2]
//! let mut A = Matrix::<f64>::from(&[[2., 1.], [2., 0.]]);
//! let mut b = Vector::<f64>::from(vec![3., 3.]);
//! A.solve_ldlt(&mut b).unwrap();
//! assert!((b[0] - 1.).abs() < 1e-12 && (b[1] - 1.).abs() < 1e-12);
//! ```
//!
//! Diagnostic records are emitted through the [`log`] facade at debug level.
//! Install any logger in the host application to see them.

#![allow(non_snake_case)]

pub mod algebra;
pub mod bandldl;
