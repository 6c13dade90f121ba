use std::{
    fmt::Display,
    ops::{Add, Mul, Sub},
};

/// Rows are indexed by the input component, columns by the output component.
pub struct Matrix3(pub [Vec3; 3]);

impl Matrix3 {
    pub const fn new(x: [f64; 3], y: [f64; 3], z: [f64; 3]) -> Self {
        Self([Vec3(x), Vec3(y), Vec3(z)])
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3(pub [f64; 3]);

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self([self.0[0] * rhs, self.0[1] * rhs, self.0[2] * rhs])
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}

// Summed left to right so results match a hand-written `a*x + b*y + c*z`.
impl Mul<&Matrix3> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: &Matrix3) -> Self::Output {
        rhs.0[0] * self.0[0] + rhs.0[1] * self.0[1] + rhs.0[2] * self.0[2]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self(value)
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}
