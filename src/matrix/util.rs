use core::fmt::{self, Write as _};

use crate::Matrix;
use crate::traits::Scalar;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Create a matrix by calling `f(col, row)` for each element.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|col, row| {
    ///     if col == row { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::identity());
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|row| core::array::from_fn(|col| f(col, row))),
        }
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }
}

// ── Debug dump ──────────────────────────────────────────────────────

impl<T: fmt::Display, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Write the matrix row by row: `row_prefix`, then each element followed
    /// by a space, then a newline. A blank line follows the last row.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// let mut out = String::new();
    /// m.write_rows(&mut out, "> ").unwrap();
    /// assert_eq!(out, "> 1 2 \n> 3 4 \n\n");
    /// ```
    pub fn write_rows(&self, out: &mut impl fmt::Write, row_prefix: &str) -> fmt::Result {
        for row in self.iter_rows() {
            out.write_str(row_prefix)?;
            for x in row {
                write!(out, "{x} ")?;
            }
            out.write_char('\n')?;
        }
        out.write_char('\n')
    }

    /// Print [`Matrix::write_rows`] output to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self, row_prefix: &str) {
        let mut s = std::string::String::new();
        if self.write_rows(&mut s, row_prefix).is_ok() {
            std::print!("{s}");
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const C: usize, const R: usize> fmt::Display for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Find max width per column for alignment
        let mut widths = [0usize; C];
        for row in self.iter_rows() {
            for (w, x) in widths.iter_mut().zip(row) {
                *w = (*w).max(WriteCounting::count(|wc| write!(wc, "{x}")));
            }
        }

        for (i, row) in self.iter_rows().enumerate() {
            write!(f, "│")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
