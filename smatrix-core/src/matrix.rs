use crate::error::{Axis, MatrixError, Result};
use crate::traits::Scalar;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A dense matrix with a compile-time shape, stored in row-major order.
///
/// `M` is the number of rows and `N` the number of columns. Both are part of
/// the type, so adding matrices of different shapes or multiplying matrices
/// with mismatched inner dimensions does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const M: usize, const N: usize> {
    data: [[T; N]; M], // data[row][col]
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Creates a matrix from a nested row-major array.
    #[inline]
    pub const fn new(data: [[T; N]; M]) -> Self {
        Self { data }
    }

    /// Creates a matrix whose element at `(row, col)` is `f(row, col)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            data: std::array::from_fn(|m| std::array::from_fn(|n| f(m, n))),
        }
    }

    /// Returns the (rows, columns) pair of this matrix type.
    #[inline]
    pub const fn shape() -> (usize, usize) {
        (M, N)
    }

    /// Returns a reference to the underlying nested array.
    #[inline]
    pub fn data(&self) -> &[[T; N]; M] {
        &self.data
    }

    /// Returns a mutable reference to the underlying nested array.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [[T; N]; M] {
        &mut self.data
    }

    #[inline]
    pub fn into_array(self) -> [[T; N]; M] {
        self.data
    }

    /// Returns all elements as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Returns a reference to an element without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be below `M` and `col` must be below `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        self.data.get_unchecked(row).get_unchecked(col)
    }

    /// Returns a mutable reference to an element without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be below `M` and `col` must be below `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.data.get_unchecked_mut(row).get_unchecked_mut(col)
    }

    /// Returns a reference to row `m`.
    pub fn row(&self, m: usize) -> Result<&[T; N]> {
        check_index(m, M, Axis::Row)?;
        Ok(&self.data[m])
    }

    /// Returns a mutable reference to row `m`.
    pub fn row_mut(&mut self, m: usize) -> Result<&mut [T; N]> {
        check_index(m, M, Axis::Row)?;
        Ok(&mut self.data[m])
    }

    /// Applies `f` to every element, producing a matrix of the same shape.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, M, N> {
        Matrix {
            data: self.data.map(|row| row.map(&mut f)),
        }
    }
}

impl<T: Copy, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Creates a matrix with every element set to `value`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self {
            data: [[value; N]; M],
        }
    }

    /// Creates a matrix from a flat row-major sequence.
    ///
    /// The sequence must hold at least `M * N` elements; any extra elements
    /// are ignored.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() < M * N {
            return Err(MatrixError::InsufficientData {
                expected: M * N,
                actual: values.len(),
            });
        }
        Ok(Self::from_fn(|m, n| values[n + m * N]))
    }

    /// Returns the element at `(row, col)` by value.
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        check_index(row, M, Axis::Row)?;
        check_index(col, N, Axis::Column)?;
        Ok(self.data[row][col])
    }

    /// Returns a copy of column `n`.
    pub fn column(&self, n: usize) -> Result<[T; M]> {
        check_index(n, N, Axis::Column)?;
        Ok(std::array::from_fn(|m| self.data[m][n]))
    }

    pub fn fill(&mut self, value: T) {
        self.data = [[value; N]; M];
    }

    /// Returns the transpose, `result[n][m] == self[m][n]`.
    pub fn transposed(&self) -> Matrix<T, N, M> {
        Matrix::from_fn(|n, m| self.data[m][n])
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    #[inline]
    pub fn zeros() -> Self {
        Self::from_value(T::zero())
    }

    #[inline]
    pub fn ones() -> Self {
        Self::from_value(T::one())
    }

    /// Sets every element to zero in place.
    pub fn fill_zeros(&mut self) {
        self.fill(T::zero());
    }

    /// Sets every element to one in place.
    pub fn fill_ones(&mut self) {
        self.fill(T::one());
    }
}

fn check_index(index: usize, bound: usize, axis: Axis) -> Result<()> {
    if index >= bound {
        return Err(MatrixError::IndexOutOfRange { index, bound, axis });
    }
    Ok(())
}

impl<T: Scalar, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    fn from(data: [[T; N]; M]) -> Self {
        Self::new(data)
    }
}

// Element operator. Out-of-range indices panic through the array bounds check.
impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs_row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (lhs, &rhs) in lhs_row.iter_mut().zip(rhs_row.iter()) {
                *lhs = *lhs + rhs;
            }
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs_row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (lhs, &rhs) in lhs_row.iter_mut().zip(rhs_row.iter()) {
                *lhs = *lhs - rhs;
            }
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        for element in self.data.iter_mut().flatten() {
            *element = *element * rhs;
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Add for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn add(self, rhs: Self) -> Matrix<T, M, N> {
        *self + *rhs
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn sub(self, rhs: Self) -> Matrix<T, M, N> {
        *self - *rhs
    }
}

impl<T: Scalar + Neg<Output = T>, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|element| -element)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: T) -> Matrix<T, M, N> {
        *self * rhs
    }
}

impl<T: Scalar, const M: usize, const R: usize, const N: usize> Mul<&Matrix<T, R, N>>
    for &Matrix<T, M, R>
{
    type Output = Matrix<T, M, N>;

    /// `C[m][n] = Σ_r A[m][r] * B[r][n]`, accumulated in `T` from zero.
    fn mul(self, rhs: &Matrix<T, R, N>) -> Matrix<T, M, N> {
        let mut result = Matrix::<T, M, N>::zeros();
        for m in 0..M {
            for n in 0..N {
                let mut acc = T::zero();
                for r in 0..R {
                    // SAFETY: m < M, r < R and n < N by the loop bounds.
                    acc = acc + unsafe { *self.get_unchecked(m, r) * *rhs.get_unchecked(r, n) };
                }
                result.data[m][n] = acc;
            }
        }
        result
    }
}

impl<T: Scalar, const M: usize, const R: usize, const N: usize> Mul<Matrix<T, R, N>>
    for Matrix<T, M, R>
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: Matrix<T, R, N>) -> Matrix<T, M, N> {
        &self * &rhs
    }
}

/// Renders `Matrix(M, N)` followed by one tab-indented line per row, each
/// element followed by a single space.
impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix({}, {})", M, N)?;
        writeln!(f, "{{")?;
        for row in &self.data {
            f.write_str("\t")?;
            for element in row {
                write!(f, "{} ", element)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const M: usize, const N: usize> bytemuck::Zeroable
    for Matrix<T, M, N>
{
}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const M: usize, const N: usize> bytemuck::Pod for Matrix<T, M, N> {}

// Serialized as a flat row-major sequence of exactly M * N elements.
#[cfg(feature = "serde")]
impl<T: serde::Serialize, const M: usize, const N: usize> serde::Serialize for Matrix<T, M, N> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const M: usize, const N: usize> serde::Deserialize<'de> for Matrix<T, M, N>
where
    T: serde::Deserialize<'de> + Copy,
{
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        if values.len() != M * N {
            return Err(serde::de::Error::invalid_length(
                values.len(),
                &format!("{} elements", M * N).as_str(),
            ));
        }
        Ok(Self::from_fn(|m, n| values[n + m * N]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i32, 2, 3> {
        Matrix::new([[1, 2, 3], [4, 5, 6]])
    }

    #[test]
    fn test_from_slice_row_major() {
        let matrix = Matrix::<i32, 2, 3>::from_slice(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(matrix, sample());
        assert_eq!(matrix[(1, 0)], 4);
    }

    #[test]
    fn test_from_slice_insufficient_data() {
        let result = Matrix::<i32, 2, 2>::from_slice(&[1, 2, 3]);
        assert_eq!(
            result,
            Err(MatrixError::InsufficientData {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_value_and_fill_helpers() {
        let mut matrix = Matrix::<f64, 2, 2>::from_value(2.5);
        assert!(matrix.as_slice().iter().all(|&e| e == 2.5));
        matrix.fill_zeros();
        assert_eq!(matrix, Matrix::zeros());
        matrix.fill_ones();
        assert_eq!(matrix, Matrix::ones());
        matrix.fill(-1.0);
        assert_eq!(matrix.as_slice(), &[-1.0; 4]);
        assert_eq!(Matrix::<u8, 3, 1>::default(), Matrix::from_value(0));
    }

    #[test]
    fn test_checked_access() {
        let matrix = sample();
        assert_eq!(matrix.at(1, 2), Ok(6));
        assert_eq!(
            matrix.at(2, 0),
            Err(MatrixError::IndexOutOfRange {
                index: 2,
                bound: 2,
                axis: Axis::Row
            })
        );
        assert_eq!(
            matrix.at(0, 3),
            Err(MatrixError::IndexOutOfRange {
                index: 3,
                bound: 3,
                axis: Axis::Column
            })
        );
        assert_eq!(matrix.row(1), Ok(&[4, 5, 6]));
        assert!(matrix.row(2).is_err());
        assert_eq!(matrix.column(1), Ok([2, 5]));
        assert!(matrix.column(3).is_err());
    }

    #[test]
    fn test_row_mut_writes_through() {
        let mut matrix = sample();
        matrix.row_mut(0).unwrap()[2] = 30;
        matrix[(1, 1)] = 50;
        assert_eq!(matrix, Matrix::new([[1, 2, 30], [4, 50, 6]]));
        assert!(matrix.row_mut(5).is_err());
    }

    #[test]
    fn test_unchecked_access() {
        let mut matrix = sample();
        unsafe {
            assert_eq!(*matrix.get_unchecked(1, 2), 6);
            *matrix.get_unchecked_mut(0, 0) = 10;
        }
        assert_eq!(matrix[(0, 0)], 10);
    }

    #[test]
    fn test_add_sub() {
        let a = sample();
        let b = Matrix::new([[6, 5, 4], [3, 2, 1]]);
        assert_eq!(a + b, Matrix::from_value(7));
        assert_eq!(&a - &b, Matrix::new([[-5, -3, -1], [1, 3, 5]]));
        assert_eq!((a + b) - b, a);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        // Operands are left untouched.
        assert_eq!(a, sample());
    }

    #[test]
    fn test_scalar_mul_and_neg() {
        let a = sample();
        assert_eq!(a * 2, Matrix::new([[2, 4, 6], [8, 10, 12]]));
        assert_eq!(&a * 0, Matrix::zeros());
        assert_eq!(-a, Matrix::new([[-1, -2, -3], [-4, -5, -6]]));

        let mut b = a;
        b *= 3;
        assert_eq!(b[(1, 2)], 18);
    }

    #[test]
    fn test_matrix_mul() {
        let a = sample();
        let b = Matrix::new([[7, 8], [9, 10], [11, 12]]);
        let c: Matrix<i32, 2, 2> = a * b;
        assert_eq!(c, Matrix::new([[58, 64], [139, 154]]));

        let row = Matrix::new([[1, 2, 3]]);
        let col = Matrix::new([[4], [5], [6]]);
        assert_eq!(&row * &col, Matrix::new([[32]]));
        assert_eq!((col * row)[(2, 2)], 18);
    }

    #[test]
    fn test_transposed() {
        let a = sample();
        let t = a.transposed();
        assert_eq!(t, Matrix::new([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(t.transposed(), a);
    }

    #[test]
    fn test_map_and_shape() {
        let a = sample().map(|e| e as f32 * 0.5);
        assert_eq!(a[(1, 2)], 3.0);
        assert_eq!(Matrix::<f32, 2, 3>::shape(), (2, 3));
        assert_eq!(Matrix::<f32, 3, 3>::shape(), (3, 3));
    }

    #[test]
    fn test_display() {
        let a = Matrix::new([[1, 0], [0, 1]]);
        assert_eq!(a.to_string(), "Matrix(2, 2)\n{\n\t1 0 \n\t0 1 \n}\n");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_flat_row_major() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");
        let back: Matrix<f64, 2, 2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_wrong_length() {
        assert!(serde_json::from_str::<Matrix<i32, 2, 2>>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<Matrix<i32, 2, 2>>("[1,2,3,4,5]").is_err());
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn test_bytemuck_cast_flat() {
        let a = Matrix::<u32, 2, 2>::new([[1, 2], [3, 4]]);
        let flat: [u32; 4] = bytemuck::cast(a);
        assert_eq!(flat, [1, 2, 3, 4]);
        let mats = [a, Matrix::identity()];
        assert_eq!(bytemuck::cast_slice::<_, u32>(&mats), &[1, 2, 3, 4, 1, 0, 0, 1]);
    }
}
