//! Concrete shape variants.

use std::f64::consts::PI;

use crate::{Shape, ShapeKind};

/// Circle with the given radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

/// Axis-aligned rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }
}

impl Shape for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

/// Equilateral triangle with the given side length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub side: f64,
}

impl Triangle {
    #[inline]
    pub const fn new(side: f64) -> Self {
        Triangle { side }
    }
}

impl Shape for Triangle {
    fn perimeter(&self) -> f64 {
        3.0 * self.side
    }

    fn area(&self) -> f64 {
        // √3/4 · s²
        3.0_f64.sqrt() / 4.0 * self.side * self.side
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }
}
