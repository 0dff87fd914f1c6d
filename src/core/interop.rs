//! The extension API surface exercised by the `interop-demo` smoke test:
//! plain functions, container conversions, value types, polymorphic shapes,
//! callbacks, sensor processing, array math, and owned resources.

use crate::utils::error::{Result, ToolkitError};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul};
use std::sync::Arc;

pub const DEFAULT_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_INTEGRATION_STEPS: usize = 1000;

fn overflow(operation: &str) -> ToolkitError {
    ToolkitError::ValidationError {
        message: format!("{} overflows i32", operation),
    }
}

pub fn add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or_else(|| overflow("addition"))
}

/// `b` defaults to [`DEFAULT_MULTIPLIER`].
pub fn multiply(a: f64, b: Option<f64>) -> f64 {
    a * b.unwrap_or(DEFAULT_MULTIPLIER)
}

/// Truncating division, returning `(quotient, remainder)`.
pub fn divide_with_remainder(dividend: i32, divisor: i32) -> Result<(i32, i32)> {
    if divisor == 0 {
        return Err(ToolkitError::ValidationError {
            message: "division by zero".to_string(),
        });
    }
    let quotient = dividend
        .checked_div(divisor)
        .ok_or_else(|| overflow("division"))?;
    let remainder = dividend
        .checked_rem(divisor)
        .ok_or_else(|| overflow("division"))?;
    Ok((quotient, remainder))
}

pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

pub fn square_elements(values: &[i32]) -> Result<Vec<i32>> {
    values
        .iter()
        .map(|v| v.checked_mul(*v).ok_or_else(|| overflow("squaring")))
        .collect()
}

pub fn count_words<S: AsRef<str>>(words: &[S]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in words {
        *counts.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({:.6}, {:.6})", self.x, self.y)
    }
}

pub trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
}

#[derive(Debug, Clone)]
pub struct Circle {
    name: String,
    radius: f64,
}

impl Circle {
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        Self {
            name: name.into(),
            radius,
        }
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        &self.name
    }

    // Matches the extension's fixed-precision pi.
    fn area(&self) -> f64 {
        3.14159 * self.radius * self.radius
    }
}

#[derive(Debug, Clone)]
pub struct Rectangle {
    name: String,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

pub fn process_with_callback<F>(data: &[i32], callback: F) -> Vec<i32>
where
    F: Fn(i32) -> i32,
{
    data.iter().map(|&v| callback(v)).collect()
}

/// Left Riemann sum of `func` over `[start, end)`.
pub fn integrate<F>(func: F, start: f64, end: f64, steps: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if steps == 0 {
        return Err(ToolkitError::ValidationError {
            message: "integration needs at least one step".to_string(),
        });
    }
    let dx = (end - start) / steps as f64;
    Ok((0..steps)
        .map(|i| func(start + i as f64 * dx) * dx)
        .sum())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub timestamp: f64,
    pub value: f64,
    pub sensor_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct SensorProcessor {
    readings: Vec<SensorReading>,
}

impl SensorProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_reading(&mut self, timestamp: f64, value: f64, sensor_id: impl Into<String>) {
        self.readings.push(SensorReading {
            timestamp,
            value,
            sensor_id: sensor_id.into(),
        });
    }

    pub fn reading_count(&self) -> usize {
        self.readings.len()
    }

    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    pub fn process_readings<F>(&self, processor: F) -> Vec<f64>
    where
        F: Fn(&SensorReading) -> f64,
    {
        self.readings.iter().map(processor).collect()
    }

    pub fn filter_readings<F>(&self, predicate: F) -> Vec<SensorReading>
    where
        F: Fn(&SensorReading) -> bool,
    {
        self.readings
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}

pub fn square_array(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v * v).collect()
}

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(ToolkitError::ValidationError {
                message: "Inputs must be 2D arrays with equal row lengths".to_string(),
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let row = &self.data[r * self.cols..(r + 1) * self.cols];
            let cells: Vec<String> = row.iter().map(|v| format!("{:.1}", v)).collect();
            let open = if r == 0 { "[" } else { " " };
            let close = if r + 1 == self.rows { "]" } else { "" };
            write!(f, "{}[{}]{}", open, cells.join(" "), close)?;
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub fn matrix_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols != b.rows {
        return Err(ToolkitError::ValidationError {
            message: format!(
                "Matrix dimensions don't match: {}x{} * {}x{}",
                a.rows, a.cols, b.rows, b.cols
            ),
        });
    }

    let mut result = Matrix::zeros(a.rows, b.cols);
    for i in 0..a.rows {
        for j in 0..b.cols {
            result.data[i * b.cols + j] = (0..a.cols)
                .map(|k| a.data[i * a.cols + k] * b.data[k * b.cols + j])
                .sum();
        }
    }
    Ok(result)
}

/// Announces its creation and destruction in the log.
#[derive(Debug)]
pub struct Resource {
    name: String,
    id: i32,
}

impl Resource {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        let resource = Self {
            name: name.into(),
            id,
        };
        tracing::info!("Resource created: {} (ID: {})", resource.name, resource.id);
        resource
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        tracing::info!("Resource destroyed: {} (ID: {})", self.name, self.id);
    }
}

pub fn create_resource(name: &str, id: i32) -> Box<Resource> {
    Box::new(Resource::new(name, id))
}

pub fn create_shared_resource(name: &str, id: i32) -> Arc<Resource> {
    Arc::new(Resource::new(name, id))
}
