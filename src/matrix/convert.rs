use num_traits::AsPrimitive;

use crate::Matrix;

// ── Element-type conversion ─────────────────────────────────────────

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Convert every element to `U` with a primitive `as` cast.
    ///
    /// Shape and element order are kept. Narrowing follows `as` semantics:
    /// float to int truncates toward zero and saturates, int to int wraps.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m = Matrix::new([[1.9_f64, -2.5], [300.0, 4.0]]);
    /// let i: Matrix<i32, 2, 2> = m.cast();
    /// assert_eq!(i, Matrix::new([[1, -2], [300, 4]]));
    ///
    /// let b = m.cast::<u8>();
    /// assert_eq!(b, Matrix::new([[1, 0], [255, 4]]));
    /// ```
    pub fn cast<U>(&self) -> Matrix<U, C, R>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| x.as_())
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, C, R> {
        Matrix::new(self.data.map(|row| row.map(&mut f)))
    }
}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Consume the matrix and return its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }
}

impl<T, const C: usize, const R: usize> From<[[T; C]; R]> for Matrix<T, C, R> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self::new(rows)
    }
}

impl<T, const C: usize, const R: usize> From<Matrix<T, C, R>> for [[T; C]; R] {
    #[inline]
    fn from(m: Matrix<T, C, R>) -> Self {
        m.into_rows()
    }
}
