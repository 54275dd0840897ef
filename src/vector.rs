use std::fmt;

use crate::error::VecMatError;

pub mod test;

/// A fixed-length sequence of `f64` components, indexed from 0.
///
/// The length is fixed at construction. `Clone` duplicates the underlying
/// storage, so a clone never aliases its source, and `PartialEq` compares
/// lengths and components by value.
///
/// There is no internal synchronization; mutating one instance from several
/// threads needs external locking.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Component at `index`.
    pub fn component(&self, index: usize) -> Result<f64, VecMatError> {
        self.components
            .get(index)
            .copied()
            .ok_or(VecMatError::OutOfBounds {
                index,
                len: self.components.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    fn check_len(&self, other: &Vector) -> Result<(), VecMatError> {
        if self.len() != other.len() {
            return Err(VecMatError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(())
    }

    /// Multiplies every component by `factor`, in place.
    pub fn scale_by(&mut self, factor: f64) {
        for component in &mut self.components {
            *component *= factor;
        }
    }

    /// Elementwise addition of `other` into `self`.
    pub fn add_in_place(&mut self, other: &Vector) -> Result<(), VecMatError> {
        self.check_len(other)?;
        for (component, addend) in self.components.iter_mut().zip(&other.components) {
            *component += addend;
        }
        Ok(())
    }

    /// Dot product with an equal-length vector.
    pub fn dot(&self, other: &Vector) -> Result<f64, VecMatError> {
        self.check_len(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Right-handed cross product; both operands have to be 3-dimensional.
    pub fn cross(&self, other: &Vector) -> Result<Vector, VecMatError> {
        if self.len() != 3 {
            return Err(VecMatError::DimensionMismatch {
                expected: 3,
                found: self.len(),
            });
        }
        if other.len() != 3 {
            return Err(VecMatError::DimensionMismatch {
                expected: 3,
                found: other.len(),
            });
        }

        let a = &self.components;
        let b = &other.components;
        Ok(Vector::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn magnitude(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Scalar product as a new vector; the receiver is untouched.
    pub fn scaled(&self, factor: f64) -> Vector {
        Vector::new(self.components.iter().map(|c| factor * c).collect())
    }

    /// Vector projection of `self` onto `other`.
    ///
    /// Fails with `DivisionByZero` when `other` is the zero vector.
    pub fn projection(&self, other: &Vector) -> Result<Vector, VecMatError> {
        self.check_len(other)?;
        let magnitude_squared = other.dot(other)?;
        if magnitude_squared == 0.0 {
            return Err(VecMatError::DivisionByZero);
        }
        let ratio = self.dot(other)? / magnitude_squared;
        Ok(other.scaled(ratio))
    }

    /// Magnitude of the projection of `self` onto `other`.
    pub fn scalar_component(&self, other: &Vector) -> Result<f64, VecMatError> {
        Ok(self.projection(other)?.magnitude())
    }

    /// Sine of the angle between two 3-dimensional vectors,
    /// `|a x b| / (|a| |b|)`.
    pub fn sine_of_angle(&self, other: &Vector) -> Result<f64, VecMatError> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return Err(VecMatError::DivisionByZero);
        }
        Ok(self.cross(other)?.magnitude() / denominator)
    }

    /// Cosine of the angle between two equal-length vectors,
    /// `a . b / (|a| |b|)`.
    pub fn cosine_of_angle(&self, other: &Vector) -> Result<f64, VecMatError> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return Err(VecMatError::DivisionByZero);
        }
        Ok(self.dot(other)? / denominator)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Vector::new(components)
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Vector::new(components.to_vec())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, ">")
    }
}
