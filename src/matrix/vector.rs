use core::ops::{Index, IndexMut};

use crate::traits::Scalar;
use crate::Matrix;

/// A vector: a single-column matrix with `N` rows.
///
/// Vectors support single-index access (`v[i]`), dot products, and cross
/// products (3-element vectors). A `Matrix<T, N, R>` multiplies a
/// `Vector<T, N>` directly.
///
/// # Examples
///
/// ```
/// use swm::{Matrix, Vector};
///
/// let v = Vector::from_array([3_i32, 4]);
/// assert_eq!(v[0], 3);
/// assert_eq!(v.dot(&v), 25);
///
/// let swap = Matrix::new([[0_i32, 1], [1, 0]]);
/// assert_eq!(swap * v, Vector::from_array([4, 3]));
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new(data.map(|x| [x]))
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for the zero-length vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Consume the vector and return its elements.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data.map(|[x]| x)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Dot product of two vectors.
    ///
    /// ```
    /// use swm::Vector;
    /// let a = Vector::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean length, `v · v`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

// ── Vector size aliases ─────────────────────────────────────────────

/// A 2-element vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element vector.
///
/// Adds `cross()` for cross product in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element vector.
pub type Vector4<T> = Vector<T, 4>;

// ── Named components ────────────────────────────────────────────────

macro_rules! impl_component_accessors {
    ($n:literal => $($get:ident $get_mut:ident $i:literal),*) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self.data[$i][0]
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.data[$i][0]
                }
            )*
        }
    };
}

impl_component_accessors!(2 => x x_mut 0, y y_mut 1);
impl_component_accessors!(3 => x x_mut 0, y y_mut 1, z z_mut 2);
impl_component_accessors!(4 => x x_mut 0, y y_mut 1, z z_mut 2, w w_mut 3);

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use swm::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z[2], 1.0); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i][0]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i][0]
    }
}
