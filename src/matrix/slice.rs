use crate::Matrix;

// ── Slice access ────────────────────────────────────────────────────

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// Element `(col, row)` is at index `col + row * C`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// View row `i` as a slice. Zero-cost — rows are contiguous in memory.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i]
    }

    /// View row `i` as a mutable slice.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i]
    }
}

// ── Iterators ───────────────────────────────────────────────────────

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterate over rows, each as an array `&[T; C]`.
    #[inline]
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T; C]> {
        self.data.iter()
    }

    /// Iterate mutably over rows, each as `&mut [T; C]`.
    #[inline]
    pub fn iter_rows_mut(&mut self) -> impl Iterator<Item = &mut [T; C]> {
        self.data.iter_mut()
    }
}

impl<'a, T, const C: usize, const R: usize> IntoIterator for &'a Matrix<T, C, R> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const C: usize, const R: usize> IntoIterator for &'a mut Matrix<T, C, R> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
