/// Three-component vector used for mesh vertex positions
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

use nalgebra::Point3;

use crate::error::VectorError;

/// A 3D floating-point vector
///
/// Components are read through `x()`/`y()`/`z()` or by index. Indexing with
/// `[]` panics on an index outside `0..=2`; use [`Vector3::get`] and
/// [`Vector3::set`] for the fallible form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    /// Componentwise sum
    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise product with a scalar
    pub fn scale(self, scalar: f32) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    pub fn get(&self, index: usize) -> Result<f32, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(VectorError::InvalidIndex(index)),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f32, VectorError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(VectorError::InvalidIndex(index)),
        }
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<(), VectorError> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::add(self, rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f32) -> Vector3 {
        self.scale(scalar)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, vector: Vector3) -> Vector3 {
        vector * self
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", VectorError::InvalidIndex(index)),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match self.get_mut(index) {
            Ok(component) => component,
            Err(e) => panic!("{}", e),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Vector3> for Point3<f32> {
    fn from(v: Vector3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let v = Vector3::default();
        assert_eq!(v, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_index_matches_constructor() {
        let v = Vector3::new(1.5, -2.0, 3.25);
        assert_eq!(v[0], 1.5);
        assert_eq!(v[1], -2.0);
        assert_eq!(v[2], 3.25);
        assert_eq!(v.get(0), Ok(1.5));
        assert_eq!(v.get(1), Ok(-2.0));
        assert_eq!(v.get(2), Ok(3.25));
    }

    #[test]
    fn test_invalid_index_is_an_error() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(3), Err(VectorError::InvalidIndex(3)));
        assert_eq!(v.set(7, 1.0), Err(VectorError::InvalidIndex(7)));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "invalid component index 3")]
    fn test_index_operator_panics_out_of_range() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_component_mutation() {
        let mut v = Vector3::default();
        v[0] = 4.0;
        v.set(2, -1.0).unwrap();
        assert_eq!(v, Vector3::new(4.0, 0.0, -1.0));
    }

    #[test]
    fn test_add_leaves_operands_untouched() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -2.0, 10.0);
        assert_eq!(a + b, Vector3::new(1.5, 0.0, 13.0));
        assert_eq!(a.add(b), a + b);
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_scalar_multiplication_commutes() {
        let v = Vector3::new(0.1, -0.2, 0.3);
        for s in [0.0, 1.0, -3.5, 250.0, 1e-3] {
            assert_eq!(v * s, s * v);
            assert_eq!(v * s, v.scale(s));
        }
        assert_eq!(v * 2.0, Vector3::new(0.2, -0.4, 0.6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, -0.5, 0.25).to_string(), "(1, -0.5, 0.25)");
    }

    #[test]
    fn test_into_point() {
        let p: Point3<f32> = Vector3::new(1.0, 2.0, 3.0).into();
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    }
}
