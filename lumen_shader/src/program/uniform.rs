/// UniformValue - typed payloads for named uniform uploads

use glam::{Mat4, Vec3, Vec4};

use crate::driver::{Driver, UniformLocation};

/// A value to upload into a uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// `bool`, uploaded as an `int` 0/1
    Bool(bool),
    /// `int`
    Int(i32),
    /// `float`
    Float(f32),
    /// `vec3`
    Vec3(Vec3),
    /// `vec4`
    Vec4(Vec4),
    /// `mat4`, uploaded column-major without transposition
    Mat4(Mat4),
}

impl UniformValue {
    /// GLSL type name
    pub fn glsl_type(&self) -> &'static str {
        match self {
            UniformValue::Bool(_) => "bool",
            UniformValue::Int(_) => "int",
            UniformValue::Float(_) => "float",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Vec4(_) => "vec4",
            UniformValue::Mat4(_) => "mat4",
        }
    }

    /// Issue the single typed upload call for this value
    pub(crate) fn upload(&self, driver: &mut dyn Driver, location: Option<UniformLocation>) {
        match *self {
            UniformValue::Bool(value) => driver.uniform_1_i32(location, i32::from(value)),
            UniformValue::Int(value) => driver.uniform_1_i32(location, value),
            UniformValue::Float(value) => driver.uniform_1_f32(location, value),
            UniformValue::Vec3(v) => driver.uniform_3_f32(location, v.x, v.y, v.z),
            UniformValue::Vec4(v) => driver.uniform_4_f32(location, v.x, v.y, v.z, v.w),
            UniformValue::Mat4(m) => driver.uniform_matrix_4_f32(location, false, &m.to_cols_array()),
        }
    }
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

impl From<&Mat4> for UniformValue {
    fn from(value: &Mat4) -> Self {
        UniformValue::Mat4(*value)
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
