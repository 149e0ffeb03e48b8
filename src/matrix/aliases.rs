//! Pre-defined type aliases for common matrix sizes.
//!
//! Rectangular aliases are named `Matrix{COLS}x{ROWS}`, in the same order as
//! the const parameters.

use crate::Matrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ── Rectangular matrix aliases ─────────────────────────────────────

/// 1 column × 2 rows.
pub type Matrix1x2<T> = Matrix<T, 1, 2>;
/// 1 column × 3 rows.
pub type Matrix1x3<T> = Matrix<T, 1, 3>;
/// 1 column × 4 rows.
pub type Matrix1x4<T> = Matrix<T, 1, 4>;

/// 2 columns × 1 row.
pub type Matrix2x1<T> = Matrix<T, 2, 1>;
/// 2 columns × 3 rows.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 2 columns × 4 rows.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;

/// 3 columns × 1 row.
pub type Matrix3x1<T> = Matrix<T, 3, 1>;
/// 3 columns × 2 rows.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3 columns × 4 rows.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;

/// 4 columns × 1 row.
pub type Matrix4x1<T> = Matrix<T, 4, 1>;
/// 4 columns × 2 rows.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// 4 columns × 3 rows.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
