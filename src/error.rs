/// Errors from the fallible matrix constructors.
///
/// Shape conformability is checked by the type system, so this only covers
/// runtime input that cannot fill a matrix exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A flat buffer did not hold exactly `COLS * ROWS` elements.
    LengthMismatch { expected: usize, found: usize },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::LengthMismatch { expected, found } => write!(
                f,
                "expected {expected} elements for matrix, found {found}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
