pub mod aliases;
mod convert;
mod ops;
mod shape;
mod slice;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::traits::Scalar;

/// Fixed-size matrix with `COLS` columns and `ROWS` rows.
///
/// Storage is row-major: `data[row][col]`, so element `(col, row)` sits at
/// flat offset `col + row * COLS`. Stack-allocated, no-std compatible.
///
/// Elements are addressed as `(col, row)` everywhere in this crate.
///
/// # Examples
///
/// ```
/// use swm::Matrix;
///
/// // two columns, three rows
/// let a: Matrix<i32, 2, 3> = Matrix::new([[1, 2], [3, 4], [5, 6]]);
/// assert_eq!(a[(1, 0)], 2);
/// assert_eq!(a[(0, 2)], 5);
/// assert_eq!(a.cols(), 2);
/// assert_eq!(a.rows(), 3);
///
/// let b: Matrix<f64, 3, 3> = Matrix::identity();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(1, 0)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const COLS: usize, const ROWS: usize> {
    pub(crate) data: [[T; COLS]; ROWS],
}

impl<T, const COLS: usize, const ROWS: usize> Matrix<T, COLS, ROWS> {
    /// Number of columns.
    pub const NCOLS: usize = COLS;
    /// Number of rows.
    pub const NROWS: usize = ROWS;
    /// Number of stored elements, `COLS * ROWS`.
    pub const LEN: usize = COLS * ROWS;

    /// Create a matrix from an array of rows.
    ///
    /// The input is `[[row0], [row1], ...]` (`ROWS` arrays of `COLS` elements).
    #[inline]
    pub const fn new(rows: [[T; COLS]; ROWS]) -> Self {
        Self { data: rows }
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Checked element access. `None` if `col >= COLS` or `row >= ROWS`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.data.get(row)?.get(col)
    }

    /// Checked mutable element access.
    #[inline]
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.data.get_mut(row)?.get_mut(col)
    }

    /// Element access without bounds checking.
    ///
    /// # Safety
    ///
    /// `col < COLS` and `row < ROWS` must hold. Anything else is undefined
    /// behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, col: usize, row: usize) -> &T {
        // SAFETY: the caller keeps both indices inside the shape.
        unsafe { self.data.get_unchecked(row).get_unchecked(col) }
    }

    /// Mutable element access without bounds checking.
    ///
    /// # Safety
    ///
    /// Same contract as [`Matrix::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, col: usize, row: usize) -> &mut T {
        // SAFETY: the caller keeps both indices inside the shape.
        unsafe { self.data.get_unchecked_mut(row).get_unchecked_mut(col) }
    }
}

impl<T: Scalar, const COLS: usize, const ROWS: usize> Matrix<T, COLS, ROWS> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); COLS]; ROWS],
        }
    }

    /// Create a matrix with every element set to `value`.
    pub fn fill(value: T) -> Self {
        Self {
            data: [[value; COLS]; ROWS],
        }
    }

    /// Create a matrix from a flat row-major sequence.
    ///
    /// Extra trailing elements are ignored and missing ones are zero, so any
    /// length is accepted.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m: Matrix<i32, 2, 2> = Matrix::from_row_major([1, 2, 3]);
    /// assert_eq!(m, Matrix::new([[1, 2], [3, 0]]));
    ///
    /// let t: Matrix<i32, 2, 1> = Matrix::from_row_major([7, 8, 9]);
    /// assert_eq!(t, Matrix::new([[7, 8]]));
    /// ```
    pub fn from_row_major(elements: impl IntoIterator<Item = T>) -> Self {
        let mut m = Self::zeros();
        for (dst, src) in m.as_mut_slice().iter_mut().zip(elements) {
            *dst = src;
        }
        m
    }

    /// Create a matrix from a flat row-major slice of exactly `COLS * ROWS`
    /// elements.
    ///
    /// ```
    /// use swm::{Matrix, MatrixError};
    /// let m = Matrix::<f64, 2, 2>::try_from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(0, 1)], 3.0);
    ///
    /// let e = Matrix::<f64, 2, 2>::try_from_slice(&[1.0]).unwrap_err();
    /// assert_eq!(e, MatrixError::LengthMismatch { expected: 4, found: 1 });
    /// ```
    pub fn try_from_slice(slice: &[T]) -> Result<Self, MatrixError> {
        if slice.len() != Self::LEN {
            return Err(MatrixError::LengthMismatch {
                expected: Self::LEN,
                found: slice.len(),
            });
        }
        let mut m = Self::zeros();
        m.as_mut_slice().copy_from_slice(slice);
        Ok(m)
    }
}

impl<T: Scalar, const COLS: usize, const ROWS: usize> Default for Matrix<T, COLS, ROWS> {
    fn default() -> Self {
        Self::zeros()
    }
}

// Index by (col, row) tuple
impl<T, const COLS: usize, const ROWS: usize> Index<(usize, usize)> for Matrix<T, COLS, ROWS> {
    type Output = T;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const COLS: usize, const ROWS: usize> IndexMut<(usize, usize)>
    for Matrix<T, COLS, ROWS>
{
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

pub use aliases::*;
