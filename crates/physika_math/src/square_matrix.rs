//! Fixed-size square matrices
//!
//! One const-generic type covers the 2x2, 3x3 and 4x4 cases used across the
//! simulation code. Elements are addressed `(row, col)`, zero based, and the
//! grid is row-major conceptually regardless of the storage backend.
//!
//! Determinant, minors and cofactors share a single recursive expansion
//! along the first remaining row, so no size is hand unrolled.
//!
//! # Failure policy
//! Out-of-range indices, division by a near-zero scalar and inversion of a
//! singular matrix are contract violations. The named methods ([`at`],
//! [`checked_div`], [`inverse`]) report them as [`MatrixError`]; the operator
//! forms panic with the same message.
//!
//! [`at`]: SquareMatrix::at
//! [`checked_div`]: SquareMatrix::checked_div
//! [`inverse`]: SquareMatrix::inverse

use std::fmt;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MatrixError;
use crate::scalar::{Real, Scalar};
use crate::storage::{DefaultStorage, MatrixStorage};
use crate::vector::Vector;

/// N x N matrix of scalars over storage `S`
#[derive(Clone, Copy, Debug)]
pub struct SquareMatrix<T, const N: usize, S = DefaultStorage<T, N>> {
    storage: S,
    _scalar: PhantomData<T>,
}

/// 2x2 matrix
pub type Matrix2x2<T> = SquareMatrix<T, 2>;
/// 3x3 matrix
pub type Matrix3x3<T> = SquareMatrix<T, 3>;
/// 4x4 matrix
pub type Matrix4x4<T> = SquareMatrix<T, 4>;

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> SquareMatrix<T, N, S> {
    /// Matrix dimension
    pub const DIM: usize = N;

    #[inline]
    fn from_storage(storage: S) -> Self {
        Self {
            storage,
            _scalar: PhantomData,
        }
    }

    /// Build a matrix by evaluating `f(row, col)` for every element
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(f: F) -> Self {
        Self::from_storage(S::from_fn(f))
    }

    /// Create a matrix from all N² elements in row-major order
    ///
    /// # Example
    /// ```
    /// use physika_math::Matrix2x2;
    /// let m = Matrix2x2::new([[1, 2], [3, 4]]);
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    #[inline]
    pub fn new(rows: [[T; N]; N]) -> Self {
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Create a matrix whose row `i` is `rows[i]`
    #[inline]
    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Matrix with every element zero
    #[inline]
    pub fn zeros() -> Self {
        Self::from_fn(|_, _| T::zero())
    }

    /// Identity matrix: one on the diagonal, zero elsewhere
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
    }

    /// Name of the storage backend this matrix was compiled with
    #[inline]
    pub fn backend() -> &'static str {
        S::BACKEND
    }

    /// Copy the elements into a matrix over another storage backend
    pub fn with_storage<S2: MatrixStorage<T, N>>(&self) -> SquareMatrix<T, N, S2> {
        SquareMatrix::from_fn(|row, col| self.elem(row, col))
    }

    #[inline]
    fn check_index(row: usize, col: usize) -> Result<(), MatrixError> {
        if row < N && col < N {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange { row, col, dim: N })
        }
    }

    /// Unchecked read, callers stay inside `0..N`
    #[inline]
    fn elem(&self, row: usize, col: usize) -> T {
        *self.storage.element(row, col)
    }

    /// Element `(row, col)`
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        Self::check_index(row, col)?;
        Ok(self.storage.element(row, col))
    }

    /// Mutable element `(row, col)`
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        Self::check_index(row, col)?;
        Ok(self.storage.element_mut(row, col))
    }

    /// Row `row` as a vector
    pub fn row(&self, row: usize) -> Result<Vector<T, N>, MatrixError> {
        Self::check_index(row, 0)?;
        Ok(Vector::new(std::array::from_fn(|col| self.elem(row, col))))
    }

    /// Column `col` as a vector
    pub fn column(&self, col: usize) -> Result<Vector<T, N>, MatrixError> {
        Self::check_index(0, col)?;
        Ok(Vector::new(std::array::from_fn(|row| self.elem(row, col))))
    }

    /// Rows as vectors
    pub fn rows(&self) -> [Vector<T, N>; N] {
        std::array::from_fn(|row| Vector::new(std::array::from_fn(|col| self.elem(row, col))))
    }

    /// Elements as a row-major nested array
    pub fn to_array(&self) -> [[T; N]; N] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.elem(row, col)))
    }

    /// Transposed copy; `self` is left untouched
    pub fn transpose(&self) -> Self {
        Self::from_fn(|row, col| self.elem(col, row))
    }

    /// Sum of the diagonal
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.elem(i, i))
    }

    /// Frobenius inner product: Σᵢⱼ self(i,j)·other(i,j)
    pub fn double_contraction(&self, other: &Self) -> T {
        let mut result = T::zero();
        for row in 0..N {
            for col in 0..N {
                result += self.elem(row, col) * other.elem(row, col);
            }
        }
        result
    }

    /// Determinant by cofactor expansion along the first row
    ///
    /// Defined for every matrix; singular matrices give zero. Integer
    /// determinants wrap modulo 2^w, so an unsigned matrix with a negative
    /// determinant yields its two's-complement image.
    pub fn determinant(&self) -> T {
        let all: [usize; N] = std::array::from_fn(|i| i);
        self.expansion(&all, &all)
    }

    /// Determinant of the submatrix without row `row` and column `col`
    pub fn minor_determinant(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        Self::check_index(row, col)?;
        Ok(self.minor_expansion(row, col))
    }

    /// Signed minor: (-1)^(row+col) · minor_determinant(row, col)
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        Self::check_index(row, col)?;
        Ok(self.cofactor_unchecked(row, col))
    }

    fn cofactor_unchecked(&self, row: usize, col: usize) -> T {
        let minor = self.minor_expansion(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            T::zero().wrapping_sub(minor)
        }
    }

    fn minor_expansion(&self, row: usize, col: usize) -> T {
        let rows = indices_without::<N>(row);
        let cols = indices_without::<N>(col);
        self.expansion(&rows[..N - 1], &cols[..N - 1])
    }

    /// Laplace expansion of the determinant of the sub-grid `rows` x `cols`
    ///
    /// Σⱼ (-1)^j · M(top, colⱼ) · minor(top, colⱼ), accumulated with the
    /// scalar's wrapping arithmetic.
    fn expansion(&self, rows: &[usize], cols: &[usize]) -> T {
        match cols.len() {
            0 => T::one(),
            1 => self.elem(rows[0], cols[0]),
            len => {
                let (top, rest) = (rows[0], &rows[1..]);
                let mut det = T::zero();
                let mut sub_cols = [0usize; N];

                for (j, &col) in cols.iter().enumerate() {
                    let mut k = 0;
                    for (m, &other) in cols.iter().enumerate() {
                        if m != j {
                            sub_cols[k] = other;
                            k += 1;
                        }
                    }

                    let term = self
                        .elem(top, col)
                        .wrapping_mul(self.expansion(rest, &sub_cols[..len - 1]));
                    det = if j % 2 == 0 {
                        det.wrapping_add(term)
                    } else {
                        det.wrapping_sub(term)
                    };
                }

                det
            }
        }
    }

    /// Divide every element by `scale`
    ///
    /// Rejects scales whose magnitude is below epsilon (zero for integers)
    /// instead of producing infinities.
    pub fn checked_div(&self, scale: T) -> Result<Self, MatrixError> {
        if scale.is_degenerate_divisor() {
            return Err(MatrixError::DivideByZero);
        }
        Ok(Self::from_fn(|row, col| self.elem(row, col) / scale))
    }

    /// In-place form of [`checked_div`](Self::checked_div); `self` is unchanged on error
    pub fn checked_div_assign(&mut self, scale: T) -> Result<(), MatrixError> {
        *self = self.checked_div(scale)?;
        Ok(())
    }
}

/// `0..N` with `skip` removed; the last slot is unused
fn indices_without<const N: usize>(skip: usize) -> [usize; N] {
    let mut out = [0usize; N];
    let mut k = 0;
    for i in (0..N).filter(|&i| i != skip) {
        out[k] = i;
        k += 1;
    }
    out
}

impl<T: Real, const N: usize, S: MatrixStorage<T, N>> SquareMatrix<T, N, S> {
    /// Inverse by the adjugate method: inverse(i,j) = cofactor(j,i) / det
    ///
    /// Only an exactly zero determinant is rejected. Ill-conditioned matrices
    /// with tiny determinants invert to very large elements.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(MatrixError::NotInvertible);
        }
        let cofactors: [[T; N]; N] = std::array::from_fn(|row| {
            std::array::from_fn(|col| self.cofactor_unchecked(row, col))
        });
        Ok(Self::from_fn(|row, col| cofactors[col][row] / det))
    }

    /// Whether every element is within `epsilon` of the other matrix's
    pub fn approx_eq<S2: MatrixStorage<T, N>>(
        &self,
        other: &SquareMatrix<T, N, S2>,
        epsilon: T,
    ) -> bool {
        (0..N).all(|row| {
            (0..N).all(|col| {
                (self.elem(row, col) - other.elem(row, col)).magnitude() <= epsilon
            })
        })
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Default for SquareMatrix<T, N, S> {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Exact elementwise equality, no tolerance
impl<T, const N: usize, S, S2> PartialEq<SquareMatrix<T, N, S2>> for SquareMatrix<T, N, S>
where
    T: Scalar,
    S: MatrixStorage<T, N>,
    S2: MatrixStorage<T, N>,
{
    fn eq(&self, other: &SquareMatrix<T, N, S2>) -> bool {
        (0..N).all(|row| (0..N).all(|col| self.elem(row, col) == other.elem(row, col)))
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Index<(usize, usize)>
    for SquareMatrix<T, N, S>
{
    type Output = T;

    /// Panics on an out-of-range index
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> IndexMut<(usize, usize)>
    for SquareMatrix<T, N, S>
{
    /// Panics on an out-of-range index
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col).unwrap_or_else(|err| panic!("{}", err))
    }
}

// Operator overloads

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Add for SquareMatrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_fn(|row, col| self.elem(row, col) + other.elem(row, col))
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> AddAssign for SquareMatrix<T, N, S> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        for row in 0..N {
            for col in 0..N {
                *self.storage.element_mut(row, col) += other.elem(row, col);
            }
        }
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Sub for SquareMatrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_fn(|row, col| self.elem(row, col) - other.elem(row, col))
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> SubAssign for SquareMatrix<T, N, S> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        for row in 0..N {
            for col in 0..N {
                *self.storage.element_mut(row, col) -= other.elem(row, col);
            }
        }
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Mul<T> for SquareMatrix<T, N, S> {
    type Output = Self;
    #[inline]
    fn mul(self, scale: T) -> Self {
        Self::from_fn(|row, col| self.elem(row, col) * scale)
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> MulAssign<T> for SquareMatrix<T, N, S> {
    #[inline]
    fn mul_assign(&mut self, scale: T) {
        for row in 0..N {
            for col in 0..N {
                *self.storage.element_mut(row, col) *= scale;
            }
        }
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Div<T> for SquareMatrix<T, N, S> {
    type Output = Self;

    /// Panics when `scale` is a degenerate divisor, see [`SquareMatrix::checked_div`]
    #[inline]
    fn div(self, scale: T) -> Self {
        self.checked_div(scale).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> DivAssign<T> for SquareMatrix<T, N, S> {
    #[inline]
    fn div_assign(&mut self, scale: T) {
        if let Err(err) = self.checked_div_assign(scale) {
            panic!("{}", err);
        }
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Mul<Vector<T, N>>
    for SquareMatrix<T, N, S>
{
    type Output = Vector<T, N>;

    /// result[i] = Σⱼ M(i,j)·v[j]
    #[inline]
    fn mul(self, v: Vector<T, N>) -> Vector<T, N> {
        Vector::new(std::array::from_fn(|row| {
            (0..N).fold(T::zero(), |acc, col| acc + self.elem(row, col) * v[col])
        }))
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> Mul for SquareMatrix<T, N, S> {
    type Output = Self;

    /// result(i,j) = Σₖ A(i,k)·B(k,j)
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::from_fn(|row, col| {
            (0..N).fold(T::zero(), |acc, k| acc + self.elem(row, k) * other.elem(k, col))
        })
    }
}

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> MulAssign for SquareMatrix<T, N, S> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        // product is built in a fresh matrix before it replaces self
        *self = *self * other;
    }
}

macro_rules! impl_left_scalar_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const N: usize, S: MatrixStorage<$t, N>> Mul<SquareMatrix<$t, N, S>> for $t {
                type Output = SquareMatrix<$t, N, S>;
                #[inline]
                fn mul(self, matrix: SquareMatrix<$t, N, S>) -> Self::Output {
                    matrix * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: Scalar, const N: usize, S: MatrixStorage<T, N>> fmt::Display for SquareMatrix<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            write!(f, "[")?;
            for col in 0..N {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.elem(row, col))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

// Serialized as a sequence of rows: `[[1, 0], [0, 1]]`

impl<T, const N: usize, S> Serialize for SquareMatrix<T, N, S>
where
    T: Scalar + Serialize,
    S: MatrixStorage<T, N>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for row in self.rows().iter() {
            tuple.serialize_element(row)?;
        }
        tuple.end()
    }
}

struct MatrixVisitor<T, const N: usize, S>(PhantomData<(T, S)>);

impl<'de, T, const N: usize, S> Visitor<'de> for MatrixVisitor<T, N, S>
where
    T: Scalar + Deserialize<'de>,
    S: MatrixStorage<T, N>,
{
    type Value = SquareMatrix<T, N, S>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} rows of {} scalars", N, N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut rows = [Vector::<T, N>::zeros(); N];
        for (i, slot) in rows.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(SquareMatrix::from_rows(rows))
    }
}

impl<'de, T, const N: usize, S> Deserialize<'de> for SquareMatrix<T, N, S>
where
    T: Scalar + Deserialize<'de>,
    S: MatrixStorage<T, N>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, MatrixVisitor(PhantomData))
    }
}
