//! Fixed-length `f64` vectors and column-major matrices with elementary
//! vector geometry and matrix algebra.
//!
//! Every fallible operation returns a [`VecMatError`] instead of printing or
//! substituting a placeholder value. Both types are plain mutable values
//! without internal synchronization; sharing one instance across threads
//! while mutating it requires external locking.

pub mod error;
pub mod matrix;
pub mod vector;

pub use error::VecMatError;
pub use matrix::Matrix;
pub use vecmat_macro::{matrix_new, vector_new};
pub use vector::Vector;
