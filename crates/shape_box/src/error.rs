//! Errors returned by [`ShapeBox`](crate::ShapeBox) operations.

use shape_geom::ShapeKind;

/// Why a shape box operation was rejected.
///
/// A rejected operation never mutates the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    /// `add` on a box that already holds `capacity` shapes.
    #[error("box is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Index is not less than the current length.
    #[error("index {index} out of range for box of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Index is in range but no shape is stored there.
    #[error("shape at index {index} doesn't exist")]
    SlotEmpty { index: usize },

    /// Bulk removal found no shape of the requested variant.
    #[error("no {kind}s in the box")]
    NoMatchingVariant { kind: ShapeKind },
}
