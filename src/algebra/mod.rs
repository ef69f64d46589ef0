//! __bandldl__ vector and dense matrix types.
//!
//! Storage types are generic over floating point values of type [`FloatT`],
//! defaulting to `f64`.  The [`Vector`] type is a growable dense buffer with a
//! hysteresis capacity policy.  The [`Matrix`] type is a row major dense
//! matrix that doubles as the banded storage used by the LDL solver in
//! [`bandldl`](crate::bandldl).
//!
//! Fallible operations return [`LinalgError`].

mod buffer;
mod dense;
mod error_types;
mod floats;
mod traits;
mod vecmath;
mod vector;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use traits::*;
pub use vector::*;

#[cfg(test)]
mod tests;
