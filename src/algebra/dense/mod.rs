mod core;
mod matrix_math;
mod types;
pub use self::types::*;
