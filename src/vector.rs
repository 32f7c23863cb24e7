//! Dense `f64` vectors for geometry and linear algebra helpers.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance used when comparing components against zero.
pub const EPS: f64 = 1e-10;

/// A dense vector of `f64` components.
///
/// Components past the end of the vector read as zero, and writing past the end extends the
/// vector. Binary operations between vectors of different dimensions treat the shorter one as
/// padded with zeros.
///
/// # Examples
///
/// ```
/// use procon_collections::vector::Vector;
///
/// let u = Vector::from(vec![1.0, 2.0]);
/// let v = Vector::from(vec![3.0, 4.0, 5.0]);
///
/// assert_eq!((&u + &v).components(), &[4.0, 6.0, 5.0]);
/// assert_eq!(u.dot(&v), 11.0);
/// assert_eq!(Vector::from(vec![3.0, 4.0]).norm(), 5.0);
/// assert_eq!((u * 2.0).components(), &[2.0, 4.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Constructs the zero vector of dimension `dimension`.
    pub fn zeros(dimension: usize) -> Self {
        Vector {
            components: vec![0.0; dimension],
        }
    }

    /// Returns the number of stored components.
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Returns the stored components.
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Returns the component at `index`, or zero past the end of the vector.
    pub fn get(&self, index: usize) -> f64 {
        self.components.get(index).cloned().unwrap_or(0.0)
    }

    /// Sets the component at `index`, extending the vector with zeros if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::vector::Vector;
    ///
    /// let mut v = Vector::zeros(1);
    /// v.set(2, 3.0);
    /// assert_eq!(v.components(), &[0.0, 0.0, 3.0]);
    /// ```
    pub fn set(&mut self, index: usize, value: f64) {
        self.extend_to(index + 1);
        self.components[index] = value;
    }

    /// Extends the vector with zeros until it has at least `dimension` components.
    pub fn extend_to(&mut self, dimension: usize) {
        if self.dimension() < dimension {
            self.components.resize(dimension, 0.0);
        }
    }

    /// Returns the Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns `true` if every component is within [`EPS`] of zero.
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|x| x.abs() < EPS)
    }

    /// Returns the dot product.
    pub fn dot(&self, other: &Vector) -> f64 {
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Returns the angle between two vectors in radians, or zero if either vector is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use procon_collections::vector::Vector;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let x = Vector::from(vec![2.0, 0.0]);
    /// let y = Vector::from(vec![0.0, 3.0]);
    /// assert!((x.angle(&y) - FRAC_PI_2).abs() < 1e-9);
    /// ```
    pub fn angle(&self, other: &Vector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        let cos = self.dot(other) / (self.norm() * other.norm());
        cos.max(-1.0).min(1.0).acos()
    }

    fn zip_assign<F>(&mut self, other: &Vector, f: F)
    where
        F: Fn(f64, f64) -> f64,
    {
        self.extend_to(other.dimension());
        for (index, component) in self.components.iter_mut().enumerate() {
            *component = f(*component, other.get(index));
        }
    }

    fn map_assign<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        for component in &mut self.components {
            *component = f(*component);
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Vector { components }
    }
}

impl<'a> AddAssign<&'a Vector> for Vector {
    fn add_assign(&mut self, other: &Vector) {
        self.zip_assign(other, |a, b| a + b);
    }
}

impl<'a> SubAssign<&'a Vector> for Vector {
    fn sub_assign(&mut self, other: &Vector) {
        self.zip_assign(other, |a, b| a - b);
    }
}

impl AddAssign<f64> for Vector {
    fn add_assign(&mut self, other: f64) {
        self.map_assign(|a| a + other);
    }
}

impl SubAssign<f64> for Vector {
    fn sub_assign(&mut self, other: f64) {
        self.map_assign(|a| a - other);
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, other: f64) {
        self.map_assign(|a| a * other);
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, other: f64) {
        self.map_assign(|a| a / other);
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        let mut ret = self.clone();
        ret += other;
        ret
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, other: &Vector) -> Vector {
        let mut ret = self.clone();
        ret -= other;
        ret
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(mut self, other: Vector) -> Vector {
        self += &other;
        self
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(mut self, other: Vector) -> Vector {
        self -= &other;
        self
    }
}

impl Add<f64> for Vector {
    type Output = Vector;

    fn add(mut self, other: f64) -> Vector {
        self += other;
        self
    }
}

impl Add<Vector> for f64 {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        other + self
    }
}

impl Sub<f64> for Vector {
    type Output = Vector;

    fn sub(mut self, other: f64) -> Vector {
        self -= other;
        self
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, other: f64) -> Vector {
        self *= other;
        self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, other: Vector) -> Vector {
        other * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(mut self, other: f64) -> Vector {
        self /= other;
        self
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self * -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn test_get_past_end() {
        let v = Vector::from(vec![1.0]);
        assert_eq!(v.get(0), 1.0);
        assert_eq!(v.get(5), 0.0);
        assert_eq!(v.dimension(), 1);
    }

    #[test]
    fn test_sub_pads_with_zeros() {
        let u = Vector::from(vec![1.0, 1.0]);
        let v = Vector::from(vec![0.5, 0.25, 2.0]);
        assert_eq!((u - v).components(), &[0.5, 0.75, -2.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vector::from(vec![2.0, 4.0]);
        assert_eq!((v.clone() + 1.0).components(), &[3.0, 5.0]);
        assert_eq!((1.0 + v.clone()).components(), &[3.0, 5.0]);
        assert_eq!((v.clone() - 1.0).components(), &[1.0, 3.0]);
        assert_eq!((0.5 * v.clone()).components(), &[1.0, 2.0]);
        assert_eq!((v.clone() / 2.0).components(), &[1.0, 2.0]);
        assert_eq!((-v).components(), &[-2.0, -4.0]);
    }

    #[test]
    fn test_zero_and_angle() {
        assert!(Vector::zeros(3).is_zero());
        assert!(Vector::from(vec![1e-12]).is_zero());
        let v = Vector::from(vec![1.0, 1.0]);
        assert_eq!(v.angle(&Vector::zeros(2)), 0.0);
        assert!(v.angle(&v).abs() < 1e-6);
        let w = Vector::from(vec![-1.0, -1.0]);
        assert!((v.angle(&w) - std::f64::consts::PI).abs() < 1e-6);
    }
}
