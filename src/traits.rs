use core::fmt::Debug;
use num_traits::{Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types, and `Complex<f32>` / `Complex<f64>`
/// when the `complex` feature is enabled.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

mod sealed {
    pub trait Sealed {}
}

/// Built-in numeric types accepted as the scalar operand of `matrix * s`
/// and `s * matrix`.
///
/// Sealed: the set is exactly the primitive integers and floats, so scaling
/// a matrix by anything else does not type-check.
pub trait Primitive: sealed::Sealed + Scalar {}

macro_rules! impl_primitive {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Primitive for $t {}
        )*
    };
}

impl_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
