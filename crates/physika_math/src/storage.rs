//! Dense storage backends for square matrices
//!
//! [`SquareMatrix`](crate::SquareMatrix) only needs element access from its
//! storage. Determinant, inverse, products and every other operation are
//! computed generically on top of that, so the two backends produce identical
//! results. The nalgebra backend is a storage adapter only; none of
//! nalgebra's own decompositions are called.
//!
//! - [`ArrayStorage`] - built-in `[[T; N]; N]`, row-major
//! - [`NalgebraStorage`] - `nalgebra::SMatrix` adapter (feature `nalgebra-backend`)
//!
//! [`DefaultStorage`] picks one of them at build time.

use std::fmt::Debug;

use crate::scalar::Scalar;

/// Dense N x N element storage
///
/// Indices passed to [`element`](Self::element) and
/// [`element_mut`](Self::element_mut) are already range checked by the caller.
pub trait MatrixStorage<T: Scalar, const N: usize>: Copy + Debug + Send + Sync {
    /// Short backend name for diagnostics
    const BACKEND: &'static str;

    /// Build storage by evaluating `f(row, col)` for every element
    fn from_fn<F: FnMut(usize, usize) -> T>(f: F) -> Self;

    /// Element at `(row, col)`
    fn element(&self, row: usize, col: usize) -> &T;

    /// Mutable element at `(row, col)`
    fn element_mut(&mut self, row: usize, col: usize) -> &mut T;
}

/// Built-in row-major array storage
#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct ArrayStorage<T, const N: usize> {
    data: [[T; N]; N],
}

impl<T: Scalar, const N: usize> MatrixStorage<T, N> for ArrayStorage<T, N> {
    const BACKEND: &'static str = "array";

    #[inline]
    fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            data: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
        }
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> &T {
        &self.data[row][col]
    }

    #[inline]
    fn element_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row][col]
    }
}

#[cfg(feature = "nalgebra-backend")]
pub use nalgebra_backend::NalgebraStorage;

#[cfg(feature = "nalgebra-backend")]
mod nalgebra_backend {
    use super::MatrixStorage;
    use crate::scalar::Scalar;

    /// Storage backed by a statically sized nalgebra matrix
    ///
    /// nalgebra keeps its elements column-major; `(row, col)` addressing hides
    /// that from callers. Algebra on a matrix with this storage still runs the
    /// generic routines of [`SquareMatrix`](crate::SquareMatrix), which also
    /// cover the integer scalars nalgebra's determinant does not accept.
    #[derive(Clone, Copy, Debug)]
    pub struct NalgebraStorage<T, const N: usize> {
        inner: nalgebra::SMatrix<T, N, N>,
    }

    impl<T: Scalar, const N: usize> NalgebraStorage<T, N> {
        /// Borrow the wrapped nalgebra matrix
        pub fn as_nalgebra(&self) -> &nalgebra::SMatrix<T, N, N> {
            &self.inner
        }
    }

    impl<T: Scalar, const N: usize> MatrixStorage<T, N> for NalgebraStorage<T, N> {
        const BACKEND: &'static str = "nalgebra";

        #[inline]
        fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
            Self {
                inner: nalgebra::SMatrix::from_fn(|row, col| f(row, col)),
            }
        }

        #[inline]
        fn element(&self, row: usize, col: usize) -> &T {
            &self.inner[(row, col)]
        }

        #[inline]
        fn element_mut(&mut self, row: usize, col: usize) -> &mut T {
            &mut self.inner[(row, col)]
        }
    }
}

/// Storage used by [`SquareMatrix`](crate::SquareMatrix) when none is named
#[cfg(not(feature = "nalgebra-backend"))]
pub type DefaultStorage<T, const N: usize> = ArrayStorage<T, N>;

/// Storage used by [`SquareMatrix`](crate::SquareMatrix) when none is named
#[cfg(feature = "nalgebra-backend")]
pub type DefaultStorage<T, const N: usize> = NalgebraStorage<T, N>;

#[cfg(test)]
mod tests {
    use super::*;

    fn row_major<S: MatrixStorage<i32, 3>>() -> S {
        S::from_fn(|row, col| (row * 3 + col) as i32)
    }

    #[test]
    fn test_array_storage_layout() {
        let s: ArrayStorage<i32, 3> = row_major();
        assert_eq!(*s.element(0, 0), 0);
        assert_eq!(*s.element(0, 2), 2);
        assert_eq!(*s.element(2, 0), 6);
        assert_eq!(*s.element(1, 2), 5);
    }

    #[test]
    fn test_array_storage_element_mut() {
        let mut s: ArrayStorage<i32, 3> = row_major();
        *s.element_mut(2, 1) = -1;
        assert_eq!(*s.element(2, 1), -1);
        assert_eq!(*s.element(1, 2), 5);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(<ArrayStorage<f32, 2> as MatrixStorage<f32, 2>>::BACKEND, "array");
        #[cfg(not(feature = "nalgebra-backend"))]
        assert_eq!(<DefaultStorage<f32, 2> as MatrixStorage<f32, 2>>::BACKEND, "array");
        #[cfg(feature = "nalgebra-backend")]
        assert_eq!(<DefaultStorage<f32, 2> as MatrixStorage<f32, 2>>::BACKEND, "nalgebra");
    }

    #[cfg(feature = "nalgebra-backend")]
    #[test]
    fn test_nalgebra_storage_matches_array_layout() {
        let a: ArrayStorage<i32, 3> = row_major();
        let n: NalgebraStorage<i32, 3> = row_major();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(a.element(row, col), n.element(row, col));
            }
        }
        assert_eq!(n.as_nalgebra()[(1, 2)], 5);
    }
}
