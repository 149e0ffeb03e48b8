use crate::Matrix;
use crate::matrix::vector::Vector;
use crate::traits::Scalar;

// ── Identity ────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    ///
    /// ```
    /// use swm::Matrix;
    /// let id = Matrix::<i32, 3, 3>::identity();
    /// assert_eq!(id.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    /// ```
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Alias for [`Matrix::identity`].
    #[inline]
    pub fn eye() -> Self {
        Self::identity()
    }
}

// ── Slice to a new shape ────────────────────────────────────────────

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Project onto a `NC × NR` matrix.
    ///
    /// Keeps the top-left `min(C, NC) × min(R, NR)` block and zero-fills
    /// every other cell, so both shrinking and growing are allowed.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m: Matrix<i32, 2, 2> = Matrix::from_row_major([1, 2, 3, 4]);
    /// let grown: Matrix<i32, 3, 3> = m.slice();
    /// assert_eq!(grown.as_slice(), &[1, 2, 0, 3, 4, 0, 0, 0, 0]);
    ///
    /// let back: Matrix<i32, 2, 2> = grown.slice();
    /// assert_eq!(back, m);
    /// ```
    pub fn slice<const NC: usize, const NR: usize>(&self) -> Matrix<T, NC, NR> {
        if NC != C {
            return self.slice_by_rows();
        }

        // Same row width: the kept rows are one contiguous prefix in both
        // buffers.
        let mut out = Matrix::<T, NC, NR>::zeros();
        let len = R.min(NR) * C;
        out.as_mut_slice()[..len].copy_from_slice(&self.as_slice()[..len]);
        out
    }

    /// Row-by-row form of [`Matrix::slice`], valid for any target shape.
    pub(crate) fn slice_by_rows<const NC: usize, const NR: usize>(&self) -> Matrix<T, NC, NR> {
        let mut out = Matrix::<T, NC, NR>::zeros();
        let width = C.min(NC);
        for (dst, src) in out.data.iter_mut().zip(self.data.iter()) {
            dst[..width].copy_from_slice(&src[..width]);
        }
        out
    }
}

// ── General block extraction & insertion ────────────────────────────

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Extract a P×Q sub-matrix whose top-left element is `(col, row)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let b: Matrix<i32, 2, 2> = m.block(1, 1);
    /// assert_eq!(b, Matrix::new([[5, 6], [8, 9]]));
    /// ```
    pub fn block<const P: usize, const Q: usize>(&self, col: usize, row: usize) -> Matrix<T, P, Q> {
        assert!(
            col + P <= C && row + Q <= R,
            "block ({col},{row}) size {P}×{Q} out of bounds for {C}×{R} matrix"
        );
        Matrix::from_fn(|c, r| self[(col + c, row + r)])
    }

    /// Write a P×Q sub-matrix into self with its top-left element at
    /// `(col, row)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    pub fn set_block<const P: usize, const Q: usize>(
        &mut self,
        col: usize,
        row: usize,
        src: &Matrix<T, P, Q>,
    ) {
        assert!(
            col + P <= C && row + Q <= R,
            "set_block ({col},{row}) size {P}×{Q} out of bounds for {C}×{R} matrix"
        );
        for (r, src_row) in src.data.iter().enumerate() {
            self.data[row + r][col..col + P].copy_from_slice(src_row);
        }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Extract row `i` as a 1-row matrix.
    pub fn row(&self, i: usize) -> Matrix<T, C, 1> {
        Matrix::new([self.data[i]])
    }

    /// Set row `i`.
    pub fn set_row(&mut self, i: usize, v: &Matrix<T, C, 1>) {
        self.data[i] = v.data[0];
    }

    /// Extract column `j` as a vector.
    ///
    /// ```
    /// use swm::{Matrix, Vector};
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.col(1), Vector::from_array([2, 4]));
    /// ```
    pub fn col(&self, j: usize) -> Vector<T, R> {
        Vector::from_array(self.data.map(|row| row[j]))
    }

    /// Set column `j`.
    pub fn set_col(&mut self, j: usize, v: &Vector<T, R>) {
        for (row, x) in self.data.iter_mut().zip(v.iter()) {
            row[j] = *x;
        }
    }
}
