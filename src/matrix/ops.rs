use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use crate::traits::Primitive;
use crate::Matrix;

// Result element types of `T op U`.
type Sum<T, U> = <T as Add<U>>::Output;
type Diff<T, U> = <T as Sub<U>>::Output;
type Prod<T, U> = <T as Mul<U>>::Output;

// ── Element-wise addition ───────────────────────────────────────────

impl<T, U, const C: usize, const R: usize> Add<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: Copy + Add<U>,
    U: Copy,
{
    type Output = Matrix<Sum<T, U>, C, R>;

    fn add(self, rhs: Matrix<U, C, R>) -> Self::Output {
        Matrix::from_fn(|col, row| self[(col, row)] + rhs[(col, row)])
    }
}

impl<T, U, const C: usize, const R: usize> AddAssign<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: AddAssign<U>,
    U: Copy,
{
    fn add_assign(&mut self, rhs: Matrix<U, C, R>) {
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs += *rhs;
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T, U, const C: usize, const R: usize> Sub<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: Copy + Sub<U>,
    U: Copy,
{
    type Output = Matrix<Diff<T, U>, C, R>;

    fn sub(self, rhs: Matrix<U, C, R>) -> Self::Output {
        Matrix::from_fn(|col, row| self[(col, row)] - rhs[(col, row)])
    }
}

impl<T, U, const C: usize, const R: usize> SubAssign<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: SubAssign<U>,
    U: Copy,
{
    fn sub_assign(&mut self, rhs: Matrix<U, C, R>) {
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs -= *rhs;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Copy + Neg, const C: usize, const R: usize> Neg for Matrix<T, C, R> {
    type Output = Matrix<T::Output, C, R>;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<T: Copy + Neg, const C: usize, const R: usize> Neg for &Matrix<T, C, R> {
    type Output = Matrix<T::Output, C, R>;

    fn neg(self) -> Self::Output {
        (*self).neg()
    }
}

impl<T, U, const C: usize, const R: usize> AddAssign<&Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: AddAssign<U>,
    U: Copy,
{
    fn add_assign(&mut self, rhs: &Matrix<U, C, R>) {
        self.add_assign(*rhs);
    }
}

impl<T, U, const C: usize, const R: usize> SubAssign<&Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: SubAssign<U>,
    U: Copy,
{
    fn sub_assign(&mut self, rhs: &Matrix<U, C, R>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: (C×R) * (OC×C) → (OC×R) ─────────────────

impl<T, U, const C: usize, const R: usize, const OC: usize> Mul<Matrix<U, OC, C>>
    for Matrix<T, C, R>
where
    T: Copy + Mul<U>,
    U: Copy,
    Prod<T, U>: Zero,
{
    type Output = Matrix<Prod<T, U>, OC, R>;

    fn mul(self, rhs: Matrix<U, OC, C>) -> Self::Output {
        Matrix::from_fn(|j, i| {
            let mut sum = <Prod<T, U> as Zero>::zero();
            for k in 0..C {
                sum = sum + self[(k, i)] * rhs[(j, k)];
            }
            sum
        })
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy for Copy elements, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T, U, const C: usize, const R: usize> $Op<Matrix<U, C, R>> for &Matrix<T, C, R>
        where
            T: Copy + $Op<U>,
            U: Copy,
        {
            type Output = Matrix<<T as $Op<U>>::Output, C, R>;
            fn $method(self, rhs: Matrix<U, C, R>) -> Self::Output {
                (*self).$method(rhs)
            }
        }

        impl<T, U, const C: usize, const R: usize> $Op<&Matrix<U, C, R>> for Matrix<T, C, R>
        where
            T: Copy + $Op<U>,
            U: Copy,
        {
            type Output = Matrix<<T as $Op<U>>::Output, C, R>;
            fn $method(self, rhs: &Matrix<U, C, R>) -> Self::Output {
                self.$method(*rhs)
            }
        }

        impl<T, U, const C: usize, const R: usize> $Op<&Matrix<U, C, R>> for &Matrix<T, C, R>
        where
            T: Copy + $Op<U>,
            U: Copy,
        {
            type Output = Matrix<<T as $Op<U>>::Output, C, R>;
            fn $method(self, rhs: &Matrix<U, C, R>) -> Self::Output {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T, U, const C: usize, const R: usize, const OC: usize> Mul<Matrix<U, OC, C>>
    for &Matrix<T, C, R>
where
    T: Copy + Mul<U>,
    U: Copy,
    Prod<T, U>: Zero,
{
    type Output = Matrix<Prod<T, U>, OC, R>;
    fn mul(self, rhs: Matrix<U, OC, C>) -> Self::Output {
        (*self).mul(rhs)
    }
}

impl<T, U, const C: usize, const R: usize, const OC: usize> Mul<&Matrix<U, OC, C>>
    for Matrix<T, C, R>
where
    T: Copy + Mul<U>,
    U: Copy,
    Prod<T, U>: Zero,
{
    type Output = Matrix<Prod<T, U>, OC, R>;
    fn mul(self, rhs: &Matrix<U, OC, C>) -> Self::Output {
        self.mul(*rhs)
    }
}

impl<T, U, const C: usize, const R: usize, const OC: usize> Mul<&Matrix<U, OC, C>>
    for &Matrix<T, C, R>
where
    T: Copy + Mul<U>,
    U: Copy,
    Prod<T, U>: Zero,
{
    type Output = Matrix<Prod<T, U>, OC, R>;
    fn mul(self, rhs: &Matrix<U, OC, C>) -> Self::Output {
        (*self).mul(*rhs)
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Multiply every element by a built-in numeric scalar.
    ///
    /// Backs both `matrix * s` and `s * matrix`; the element is always the
    /// left operand, so the result type is `<T as Mul<S>>::Output`.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m = Matrix::new([[1_i32, 2], [3, 4]]);
    /// assert_eq!(m.scale(3_i32), Matrix::new([[3, 6], [9, 12]]));
    /// ```
    pub fn scale<S>(&self, s: S) -> Matrix<Prod<T, S>, C, R>
    where
        S: Primitive,
        T: Mul<S>,
    {
        self.map(|x| x * s)
    }
}

// matrix * s and s * matrix, one impl per primitive (orphan rules rule out a
// blanket `impl<S> Mul<Matrix<..>> for S`)
macro_rules! impl_scalar_mul {
    ($($s:ty),*) => {
        $(
            impl<T, const C: usize, const R: usize> Mul<$s> for Matrix<T, C, R>
            where
                T: Copy + Mul<$s>,
            {
                type Output = Matrix<Prod<T, $s>, C, R>;

                fn mul(self, rhs: $s) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl<T, const C: usize, const R: usize> Mul<$s> for &Matrix<T, C, R>
            where
                T: Copy + Mul<$s>,
            {
                type Output = Matrix<Prod<T, $s>, C, R>;

                fn mul(self, rhs: $s) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl<T, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for $s
            where
                T: Copy + Mul<$s>,
            {
                type Output = Matrix<Prod<T, $s>, C, R>;

                fn mul(self, rhs: Matrix<T, C, R>) -> Self::Output {
                    rhs.scale(self)
                }
            }

            impl<T, const C: usize, const R: usize> Mul<&Matrix<T, C, R>> for $s
            where
                T: Copy + Mul<$s>,
            {
                type Output = Matrix<Prod<T, $s>, C, R>;

                fn mul(self, rhs: &Matrix<T, C, R>) -> Self::Output {
                    rhs.scale(self)
                }
            }

            impl<T, const C: usize, const R: usize> MulAssign<$s> for Matrix<T, C, R>
            where
                T: MulAssign<$s>,
            {
                fn mul_assign(&mut self, rhs: $s) {
                    for x in self.iter_mut() {
                        *x *= rhs;
                    }
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ── Element-wise multiplication (Hadamard product) ──────────────────

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Element-wise (Hadamard) product: `out(c, r) = a(c, r) * b(c, r)`.
    pub fn hadamard<U: Copy>(&self, rhs: &Matrix<U, C, R>) -> Matrix<Prod<T, U>, C, R>
    where
        T: Mul<U>,
    {
        Matrix::from_fn(|col, row| self[(col, row)] * rhs[(col, row)])
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Transpose: (C×R) → (R×C), `out(i, j) == self(j, i)`.
    ///
    /// ```
    /// use swm::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// let t = Matrix::transpose(&m);
    /// assert_eq!(t, Matrix::new([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transpose(&self) -> Matrix<T, R, C> {
        Matrix::from_fn(|i, j| self[(j, i)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);

        let c = a + b;
        assert_eq!(c[(0, 0)], 6.0);
        assert_eq!(c[(1, 1)], 12.0);

        let d = b - a;
        assert_eq!(d[(0, 0)], 4.0);
        assert_eq!(d[(1, 1)], 4.0);
    }

    #[test]
    fn add_zero_and_self_sub() {
        let a: Matrix<i32, 3, 2> = Matrix::from_row_major([4, -1, 7, 0, 2, 9]);
        assert_eq!(a + Matrix::<i32, 3, 2>::zeros(), a);
        assert_eq!(a - a, Matrix::zeros());
    }

    #[test]
    fn operands_unchanged() {
        let a = Matrix::new([[1_i32, 2], [3, 4]]);
        let b = Matrix::new([[5_i32, 6], [7, 8]]);
        let _sum = a + b;
        let _prod = a * b;
        let _scaled = a * 2_i32;
        assert_eq!(a, Matrix::new([[1, 2], [3, 4]]));
        assert_eq!(b, Matrix::new([[5, 6], [7, 8]]));
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);

        a += b;
        assert_eq!(a[(0, 0)], 6.0);

        a -= b;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn negation() {
        let a = Matrix::new([[1.0_f64, -2.0], [3.0, -4.0]]);
        let b = -a;
        assert_eq!(b[(0, 0)], -1.0);
        assert_eq!(b[(1, 0)], 2.0);
    }

    #[test]
    fn matrix_multiply() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);

        let c = a * b;
        assert_eq!(c[(0, 0)], 19.0); // 1*5 + 2*7
        assert_eq!(c[(1, 0)], 22.0); // 1*6 + 2*8
        assert_eq!(c[(0, 1)], 43.0); // 3*5 + 4*7
        assert_eq!(c[(1, 1)], 50.0); // 3*6 + 4*8
    }

    #[test]
    fn matrix_multiply_non_square() {
        // 3 cols × 2 rows times 2 cols × 3 rows → 2 cols × 2 rows
        let a = Matrix::new([[1_i32, 2, 3], [4, 5, 6]]);
        let b = Matrix::new([[7_i32, 8], [9, 10], [11, 12]]);

        let c = a * b;
        assert_eq!(c.cols(), 2);
        assert_eq!(c.rows(), 2);
        assert_eq!(c[(0, 0)], 58); // 1*7 + 2*9 + 3*11
        assert_eq!(c[(1, 0)], 64); // 1*8 + 2*10 + 3*12
        assert_eq!(c[(0, 1)], 139); // 4*7 + 5*9 + 6*11
        assert_eq!(c[(1, 1)], 154); // 4*8 + 5*10 + 6*12
    }

    #[test]
    fn matrix_times_vector() {
        let id = Matrix::new([[1_i32, 0], [0, 1]]);
        let v: Matrix<i32, 1, 2> = Matrix::from_row_major([5, 7]);
        assert_eq!(id * v, Matrix::from_row_major([5, 7]));

        let a = Matrix::new([[2_i32, 1], [5, 3]]);
        let w: Matrix<i32, 1, 2> = Matrix::from_row_major([1, 2]);
        assert_eq!(a * w, Matrix::from_row_major([4, 11]));
    }

    #[test]
    fn scalar_multiply() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);

        let b = a * 3.0;
        assert_eq!(b[(0, 0)], 3.0);
        assert_eq!(b[(1, 1)], 12.0);

        let c = 3.0 * a;
        assert_eq!(c, b);
    }

    #[test]
    fn scalar_multiply_integer_vector() {
        let v: Matrix<i32, 1, 2> = Matrix::from_row_major([2, 3]);
        let expected: Matrix<i32, 1, 2> = Matrix::from_row_major([4, 6]);
        assert_eq!(v * 2_i32, expected);
        assert_eq!(2_i32 * v, expected);
    }

    #[test]
    fn scalar_multiply_each_primitive() {
        let m: Matrix<u8, 2, 1> = Matrix::new([[3, 4]]);
        assert_eq!(m * 2_u8, Matrix::new([[6, 8]]));
        assert_eq!(2_u8 * m, Matrix::new([[6, 8]]));

        let m: Matrix<f32, 2, 1> = Matrix::new([[0.5, 1.5]]);
        assert_eq!(m * 2.0_f32, Matrix::new([[1.0, 3.0]]));

        let m: Matrix<usize, 1, 1> = Matrix::new([[9]]);
        assert_eq!(3_usize * m, Matrix::new([[27]]));
    }

    #[test]
    fn mul_assign_scalar() {
        let mut a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        a *= 2.0;
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(1, 1)], 8.0);
    }

    #[test]
    fn transpose() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();

        assert_eq!(t.cols(), 2);
        assert_eq!(t.rows(), 3);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(0, 1)], 2.0);
        assert_eq!(t[(1, 2)], 6.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn transpose_2x2_row_major() {
        let a: Matrix<i32, 2, 2> = Matrix::from_row_major([1, 2, 3, 4]);
        assert_eq!(a.transpose().as_slice(), &[1, 3, 2, 4]);
    }

    #[test]
    fn ref_add_sub() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);

        assert_eq!(&a + b, a + b);
        assert_eq!(a + &b, a + b);
        assert_eq!(&a + &b, a + b);

        assert_eq!(&b - a, b - a);
        assert_eq!(b - &a, b - a);
        assert_eq!(&b - &a, b - a);
    }

    #[test]
    fn ref_matrix_multiply() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);
        let expected = a * b;

        assert_eq!(&a * b, expected);
        assert_eq!(a * &b, expected);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn ref_scalar_multiply() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let expected = a * 3.0;

        assert_eq!(&a * 3.0, expected);
        assert_eq!(3.0 * &a, expected);
    }

    #[test]
    fn ref_neg() {
        let a = Matrix::new([[1.0_f64, -2.0], [3.0, -4.0]]);
        assert_eq!(-&a, -a);
    }

    #[test]
    fn ref_assign_ops() {
        let mut a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);

        a += &b;
        assert_eq!(a[(0, 0)], 6.0);

        a -= &b;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn identity_multiply() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let id: Matrix<f64, 2, 2> = Matrix::identity();
        assert_eq!(a * id, a);
        assert_eq!(id * a, a);
    }

    #[test]
    fn hadamard() {
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);
        let c = a.hadamard(&b);
        assert_eq!(c[(0, 0)], 5.0);
        assert_eq!(c[(1, 0)], 12.0);
        assert_eq!(c[(0, 1)], 21.0);
        assert_eq!(c[(1, 1)], 32.0);
    }

    // Element types whose product is a third type.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Volts(f64);
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Amps(f64);
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Watts(f64);

    impl Mul<Amps> for Volts {
        type Output = Watts;
        fn mul(self, rhs: Amps) -> Watts {
            Watts(self.0 * rhs.0)
        }
    }

    impl Add for Watts {
        type Output = Watts;
        fn add(self, rhs: Watts) -> Watts {
            Watts(self.0 + rhs.0)
        }
    }

    impl Zero for Watts {
        fn zero() -> Watts {
            Watts(0.0)
        }
        fn is_zero(&self) -> bool {
            self.0 == 0.0
        }
    }

    impl Mul<f64> for Volts {
        type Output = Volts;
        fn mul(self, rhs: f64) -> Volts {
            Volts(self.0 * rhs)
        }
    }

    #[test]
    fn promoted_element_types() {
        let v = Matrix::new([[Volts(1.0), Volts(2.0)], [Volts(3.0), Volts(4.0)]]);
        let i: Matrix<Amps, 1, 2> = Matrix::new([[Amps(10.0)], [Amps(0.5)]]);

        let p: Matrix<Watts, 1, 2> = v * i;
        assert_eq!(p, Matrix::new([[Watts(11.0)], [Watts(32.0)]]));

        let e = Matrix::new([[Volts(2.0)], [Volts(4.0)]]).hadamard(&i);
        assert_eq!(e, Matrix::new([[Watts(20.0)], [Watts(2.0)]]));
    }

    #[test]
    fn scale_non_primitive_element() {
        let v = Matrix::new([[Volts(1.5), Volts(-2.0)]]);
        let expected = Matrix::new([[Volts(3.0), Volts(-4.0)]]);
        assert_eq!(v * 2.0, expected);
        assert_eq!(2.0 * v, expected);
    }
}
