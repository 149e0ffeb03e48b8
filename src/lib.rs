//! # swm
//!
//! Small fixed-shape matrices and vectors for geometry and graphics math.
//! Shapes are const generics, so non-conformable arithmetic is a compile
//! error rather than a runtime check. No heap allocation, no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use swm::{Matrix, Vector3};
//!
//! // Matrix<T, COLS, ROWS>, stored row-major
//! let rot_z: Matrix<i32, 3, 3> = Matrix::from_row_major([
//!     0, -1, 0,
//!     1,  0, 0,
//!     0,  0, 1,
//! ]);
//! let p = Vector3::from_array([2_i32, 5, 1]);
//!
//! assert_eq!(rot_z * p, Vector3::from_array([-5, 2, 1]));
//! assert_eq!(rot_z.transpose() * (rot_z * p), p);
//! assert_eq!(2 * p, p * 2);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T, COLS, ROWS>` with const-generic shape and
//!   row-major `[[T; COLS]; ROWS]` storage. Construction, `(col, row)`
//!   indexing (panicking, checked and unchecked), identity, transpose,
//!   shape projection with [`Matrix::slice`], element-type conversion with
//!   [`Matrix::cast`], and the operator suite. [`Vector<T, N>`] and
//!   [`Vector2`] / [`Vector3`] / [`Vector4`] are single-column aliases.
//!
//! - [`traits`]: [`Scalar`], the element trait
//!   (`Copy + PartialEq + Debug + Zero + One + Num`), and [`Primitive`], the
//!   sealed set of built-in numeric types a matrix can be scaled by.
//!
//! - [`error`]: [`MatrixError`], returned by the strict constructors.
//!
//! ## Element type promotion
//!
//! `+`, `-` and matrix `*` accept different element types on each side.
//! The result element is whatever `T op U` produces (`<T as Add<U>>::Output`
//! and so on). Scalar multiplication works in both orders and always
//! computes `element * scalar`.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | `Matrix::print`, `std::error::Error` for `MatrixError` |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod matrix;
pub mod traits;

pub use error::MatrixError;
pub use matrix::Matrix;
pub use matrix::aliases::{
    Matrix1, Matrix2, Matrix3, Matrix4,
    Matrix1x2, Matrix1x3, Matrix1x4,
    Matrix2x1, Matrix2x3, Matrix2x4,
    Matrix3x1, Matrix3x2, Matrix3x4,
    Matrix4x1, Matrix4x2, Matrix4x3,
};
pub use matrix::vector::{Vector, Vector2, Vector3, Vector4};
pub use traits::{Primitive, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
