#[allow(unused_imports)]
use crate::core::prelude::*;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Mul, Neg, Sub},
};

/// A 2D vector using 32-bit floating point coordinates.
///
/// [`Vec2`] doubles as a free vector (for [`dot()`](Vec2::dot), [`cross()`](Vec2::cross),
/// addition and scaling) and as a point, when multiplied by a [`Mat3x3`] with an implicit
/// homogeneous coordinate of 1.
///
/// # Examples
///
/// ```
/// use lilith::util::linalg::Vec2;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.dot(v2), 11.0);
/// ```
///
/// Equality is exact component-wise comparison; use [`almost_eq()`](Vec2::almost_eq) to compare
/// results of trigonometric operations.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 1.0, y: 4.0 };
    /// assert_eq!(v1.dot(v2), 14.0); // 2*1 + 3*4
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product of two vectors.
    ///
    /// In 2D, the cross product is a scalar representing the signed area of the
    /// parallelogram formed by the two vectors. It is positive if the second vector
    /// is counter-clockwise from the first vector, and negative otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    /// let v1 = Vec2 { x: 1.0, y: 4.0 };
    /// let v2 = Vec2 { x: 2.0, y: 3.0 };
    /// assert_eq!(v1.cross(v2), -5.0); // 1*3 - 4*2
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Multiplies both components by `scalar`. Equivalent to `self * scalar`.
    #[must_use]
    pub fn scaled(&self, scalar: f32) -> Vec2 {
        Vec2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    /// Checks if each component is within [`EPSILON`](crate::core::config::EPSILON) of the
    /// corresponding component of `rhs`.
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (self.x - rhs.x).abs() < EPSILON && (self.y - rhs.y).abs() < EPSILON
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).with_context(|| format!("Vec2::to_bytes(): {self}"))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Vec2> {
        bincode::deserialize(bytes)
            .with_context(|| format!("Vec2::from_bytes(): {} bytes", bytes.len()))
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Vec2::zero()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

/// Renders `values` as `[a, b, ...]`, each with `precision` digits after the decimal point.
fn bracketed(values: &[f32], precision: usize) -> String {
    format!(
        "[{}]",
        values.iter().map(|v| format!("{v:.precision$}")).join(", ")
    )
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        write!(f, "{}", bracketed(&[self.x, self.y], precision))
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs.scaled(self)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 3x3 matrix representation for 2D affine transformations.
///
/// Entries are stored row-major and indexed `data[row][column]`:
/// ```text
/// | data[0][0] data[0][1] data[0][2] |
/// | data[1][0] data[1][1] data[1][2] |
/// | data[2][0] data[2][1] data[2][2] |
/// ```
/// The upper-left 2x2 block holds rotation and scale, and `data[0][2]`, `data[1][2]` hold the
/// translation. The bottom row is `[0, 0, 1]` for affine transforms, but this is not enforced.
///
/// All operations take `self` by value or reference and return a new matrix.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Mat3x3 {
    pub data: [[f32; 3]; 3],
}

impl Mat3x3 {
    /// Creates a zero matrix.
    pub fn zero() -> Mat3x3 {
        Mat3x3 {
            data: [[0.0; 3]; 3],
        }
    }

    /// Creates an identity matrix.
    ///
    /// Returns a matrix representing no transformation:
    /// ```text
    /// | 1 0 0 |
    /// | 0 1 0 |
    /// | 0 0 1 |
    /// ```
    pub fn identity() -> Mat3x3 {
        Mat3x3 {
            data: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from nine values in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    /// let m = Mat3x3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    /// assert_eq!(m.data[0], [1.0, 2.0, 3.0]);
    /// assert_eq!(m.data[2][0], 7.0);
    /// ```
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn from_values(
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: f32,
        f: f32,
        g: f32,
        h: f32,
        i: f32,
    ) -> Mat3x3 {
        Mat3x3 {
            data: [[a, b, c], [d, e, f], [g, h, i]],
        }
    }

    /// Creates a translation matrix.
    ///
    /// ```text
    /// | 1 0 x |
    /// | 0 1 y |
    /// | 0 0 1 |
    /// ```
    pub fn translation(vec: Vec2) -> Mat3x3 {
        let mut rv = Self::identity();
        rv.data[0][2] = vec.x;
        rv.data[1][2] = vec.y;
        rv
    }

    /// Creates a matrix that rotates counterclockwise by `degrees`:
    /// ```text
    /// | cos(θ)  -sin(θ)  0 |
    /// | sin(θ)   cos(θ)  0 |
    /// | 0        0       1 |
    /// ```
    pub fn rotation(degrees: f32) -> Mat3x3 {
        // Conversion is done in double precision, then narrowed.
        #[allow(clippy::cast_possible_truncation)]
        let radians = (f64::from(degrees) * (std::f64::consts::PI / 180.0)) as f32;
        let (sin, cos) = radians.sin_cos();
        let mut rv = Self::identity();
        rv.data[0][0] = cos;
        rv.data[0][1] = -sin;
        rv.data[1][0] = sin;
        rv.data[1][1] = cos;
        rv
    }

    /// Calculates the determinant by cofactor expansion along the first row.
    ///
    /// # Examples
    /// ```
    /// use lilith::util::linalg::Mat3x3;
    ///
    /// assert_eq!(Mat3x3::identity().det(), 1.0);
    /// let singular = Mat3x3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    /// assert_eq!(singular.det(), 0.0);
    /// ```
    #[must_use]
    pub fn det(&self) -> f32 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Creates a new matrix that is the transpose of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    ///
    /// let m = Mat3x3::translation(Vec2 { x: 2.0, y: 3.0 });
    /// let m_t = m.transposed();
    ///
    /// // Translation components move from third column to third row
    /// assert_eq!(m_t.data[2][0], m.data[0][2]);
    /// assert_eq!(m_t.data[2][1], m.data[1][2]);
    /// ```
    pub fn transposed(&self) -> Mat3x3 {
        Mat3x3 {
            data: std::array::from_fn(|i| std::array::from_fn(|j| self.data[j][i])),
        }
    }

    /// Multiplies every entry by `scalar`. Equivalent to `self * scalar`.
    pub fn scaled(&self, scalar: f32) -> Mat3x3 {
        Mat3x3 {
            data: self.data.map(|row| row.map(|x| x * scalar)),
        }
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    ///
    /// The inverse is the adjugate (transposed cofactor matrix) divided by the determinant.
    /// No tolerance is applied: a nearly-singular matrix still produces a (numerically poor)
    /// inverse.
    #[allow(clippy::float_cmp)]
    pub fn try_inverse(&self) -> Option<Mat3x3> {
        let det = self.det();
        if det == 0.0 {
            return None;
        }
        let m = &self.data;
        Some(Mat3x3::from_values(
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        ))
    }

    /// Returns the inverse, or the zero matrix if the determinant is exactly zero.
    ///
    /// A singular input is indistinguishable from an intentional zero matrix in the result; use
    /// [`try_inverse()`](Mat3x3::try_inverse) to tell the two apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    ///
    /// let m = Mat3x3::translation(Vec2 { x: 5.0, y: 7.0 });
    /// assert!((m * m.inverse()).almost_eq(Mat3x3::identity()));
    ///
    /// let singular = Mat3x3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    /// assert_eq!(singular.inverse(), Mat3x3::zero());
    /// ```
    pub fn inverse(&self) -> Mat3x3 {
        self.try_inverse().unwrap_or_else(|| {
            debug!("Mat3x3::inverse(): singular matrix, returning zero: {:?}", self);
            Mat3x3::zero()
        })
    }

    /// Applies this matrix to `point` with an implicit homogeneous coordinate of 1.
    ///
    /// The bottom row is never consulted, so this is only meaningful for affine matrices.
    /// Equivalent to `self * point`.
    #[must_use]
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let m = &self.data;
        Vec2 {
            x: m[0][0] * point.x + m[0][1] * point.y + m[0][2] * 1.0,
            y: m[1][0] * point.x + m[1][1] * point.y + m[1][2] * 1.0,
        }
    }

    /// Returns `self * T(vec)`, i.e. the translation is applied in this matrix's local frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    ///
    /// let m = Mat3x3::identity().translate(Vec2 { x: 5.0, y: 7.0 });
    /// assert_eq!(m.transform_point(Vec2::zero()), Vec2 { x: 5.0, y: 7.0 });
    /// ```
    pub fn translate(&self, vec: Vec2) -> Mat3x3 {
        *self * Mat3x3::translation(vec)
    }

    /// Returns `self * R(degrees)`. Positive angles rotate counterclockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    ///
    /// let m = Mat3x3::identity().rotate(90.0);
    /// let rotated = m.transform_point(Vec2 { x: 1.0, y: 0.0 });
    /// assert!(rotated.almost_eq(Vec2 { x: 0.0, y: 1.0 }));
    /// ```
    pub fn rotate(&self, degrees: f32) -> Mat3x3 {
        *self * Mat3x3::rotation(degrees)
    }

    /// Rotates by `degrees` about `point`: translate to the pivot, rotate, translate back.
    pub fn rotate_around(&self, point: Vec2, degrees: f32) -> Mat3x3 {
        self.translate(point)
            .rotate(degrees)
            .translate(point.scaled(-1.0))
    }

    /// Multiplies `data[0][0]` by `vec.x` and `data[1][1]` by `vec.y`, leaving every other entry
    /// untouched. This is not the same as [`scaled()`](Mat3x3::scaled).
    pub fn scale_by_vector(&self, vec: Vec2) -> Mat3x3 {
        let mut rv = *self;
        rv.data[0][0] *= vec.x;
        rv.data[1][1] *= vec.y;
        rv
    }

    /// Compares two matrices entry-wise within [`EPSILON`](crate::core::config::EPSILON).
    ///
    /// # Examples
    ///
    /// ```
    /// use lilith::core::prelude::*;
    ///
    /// let m1 = Mat3x3::rotation(10.0);
    /// let m2 = Mat3x3::rotation(10.0001);
    /// assert!(m1.almost_eq(m2));
    ///
    /// let m3 = Mat3x3::rotation(20.0);
    /// assert!(!m1.almost_eq(m3));
    /// ```
    pub fn almost_eq(&self, rhs: Mat3x3) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(rhs.data.iter().flatten())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).context("Mat3x3::to_bytes()")
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Mat3x3> {
        bincode::deserialize(bytes)
            .with_context(|| format!("Mat3x3::from_bytes(): {} bytes", bytes.len()))
    }
}

impl Default for Mat3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl One for Mat3x3 {
    fn one() -> Self {
        Self::identity()
    }
}

impl Zero for Mat3x3 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[[f32; 3]; 3]> for Mat3x3 {
    fn from(data: [[f32; 3]; 3]) -> Self {
        Mat3x3 { data }
    }
}

impl From<Mat3x3> for [[f32; 3]; 3] {
    fn from(value: Mat3x3) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Mat3x3 {
    type Error = anyhow::Error;

    /// Reads nine values in row-major order.
    fn try_from(values: &[f32]) -> Result<Self> {
        let Ok(values) = <[f32; 9]>::try_from(values) else {
            bail!("Mat3x3::try_from(): expected 9 values, got {}", values.len());
        };
        Ok(Mat3x3 {
            data: std::array::from_fn(|i| std::array::from_fn(|j| values[3 * i + j])),
        })
    }
}

impl fmt::Display for Mat3x3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        write!(
            f,
            "{}",
            self.data
                .iter()
                .map(|row| bracketed(row, precision))
                .join("\n")
        )
    }
}

impl Add<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn add(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3 {
            data: std::array::from_fn(|i| std::array::from_fn(|j| self.data[i][j] + rhs.data[i][j])),
        }
    }
}

impl Sub<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn sub(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3 {
            data: std::array::from_fn(|i| std::array::from_fn(|j| self.data[i][j] - rhs.data[i][j])),
        }
    }
}

impl Mul<f32> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}
impl Mul<Mat3x3> for f32 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        rhs.scaled(self)
    }
}

impl Mul<Vec2> for Mat3x3 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        self.transform_point(rhs)
    }
}

impl Mul<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        let (a, b) = (&self.data, &rhs.data);
        Mat3x3 {
            data: std::array::from_fn(|i| {
                std::array::from_fn(|j| a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j])
            }),
        }
    }
}
