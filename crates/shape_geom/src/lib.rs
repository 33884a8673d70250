//! Shape capability for the shape box.
//!
//! A shape is anything that can report its perimeter and area, plus a
//! [`ShapeKind`] discriminant so containers can pick out one variant without
//! downcasting.
//!
//! # Variants
//!
//! - [`Circle`]: radius `r`, perimeter `2πr`, area `πr²`
//! - [`Rectangle`]: `width × height`
//! - [`Triangle`]: equilateral, side `s`, area `√3/4 · s²`
//!
//! Dimensions are not validated. Callers are expected to pass non-negative
//! finite values.

mod kind;
mod variants;

use std::fmt;

pub use kind::ShapeKind;
pub use variants::{Circle, Rectangle, Triangle};

/// A geometric shape that can be stored in a shape box.
///
/// `Debug` is a supertrait so boxed shapes can appear in error output and
/// test assertions.
pub trait Shape: fmt::Debug {
    /// Length of the shape's boundary.
    fn perimeter(&self) -> f64;

    /// Area enclosed by the shape.
    fn area(&self) -> f64;

    /// Which concrete variant this shape is.
    fn kind(&self) -> ShapeKind;

    /// Returns `true` if this shape is of the given variant.
    #[inline]
    fn is(&self, kind: ShapeKind) -> bool {
        self.kind() == kind
    }
}
