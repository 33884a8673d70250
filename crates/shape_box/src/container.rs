//! The capacity-bounded shape container.

use shape_geom::{Shape, ShapeKind};

use crate::BoxError;

/// An ordered, capacity-bounded collection of shapes.
///
/// # Invariants
///
/// - `shapes.len() <= capacity` at all times.
/// - Indices are dense: removing a shape shifts later shapes down by one,
///   preserving their relative order.
/// - `capacity` never changes after construction.
///
/// Slots are stored as `Option` so an absent shape is distinguishable from
/// an out-of-range index. No public operation leaves a slot empty, since
/// `add` only appends and removal always compacts.
#[derive(Debug)]
pub struct ShapeBox {
    shapes: Vec<Option<Box<dyn Shape>>>,
    capacity: usize,
}

impl ShapeBox {
    /// Create an empty box holding at most `capacity` shapes.
    pub fn new(capacity: usize) -> Self {
        ShapeBox {
            shapes: Vec::new(),
            capacity,
        }
    }

    /// Maximum number of shapes this box can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots currently in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.shapes.len() >= self.capacity
    }

    /// How many more shapes `add` will accept.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.shapes.len())
    }

    /// Append a shape.
    ///
    /// Fails with [`BoxError::CapacityExceeded`] when the box is full.
    pub fn add(&mut self, shape: impl Shape + 'static) -> Result<(), BoxError> {
        self.add_boxed(Box::new(shape))
    }

    /// Append an already boxed shape.
    pub fn add_boxed(&mut self, shape: Box<dyn Shape>) -> Result<(), BoxError> {
        if self.is_full() {
            let err = BoxError::CapacityExceeded {
                capacity: self.capacity,
            };
            return Err(self.reject("add", err));
        }

        let kind = shape.kind();
        self.shapes.push(Some(shape));
        tracing::debug!(
            %kind,
            len = self.shapes.len(),
            capacity = self.capacity,
            "added shape",
        );
        Ok(())
    }

    /// Borrow the shape at `index`.
    pub fn get(&self, index: usize) -> Result<&dyn Shape, BoxError> {
        match self.shapes.get(index) {
            Some(Some(shape)) => Ok(&**shape),
            Some(None) => Err(self.reject("get", BoxError::SlotEmpty { index })),
            None => Err(self.reject("get", self.out_of_range(index))),
        }
    }

    /// Remove and return the shape at `index`, shifting later shapes left.
    pub fn extract(&mut self, index: usize) -> Result<Box<dyn Shape>, BoxError> {
        self.check_occupied("extract", index)?;

        let Some(shape) = self.shapes.remove(index) else {
            unreachable!("slot {index} was checked as occupied")
        };
        tracing::debug!(
            index,
            kind = %shape.kind(),
            len = self.shapes.len(),
            "extracted shape",
        );
        Ok(shape)
    }

    /// Store `shape` at `index` and return the shape it displaced.
    pub fn replace(
        &mut self,
        index: usize,
        shape: impl Shape + 'static,
    ) -> Result<Box<dyn Shape>, BoxError> {
        self.replace_boxed(index, Box::new(shape))
    }

    /// Boxed form of [`ShapeBox::replace`].
    pub fn replace_boxed(
        &mut self,
        index: usize,
        shape: Box<dyn Shape>,
    ) -> Result<Box<dyn Shape>, BoxError> {
        self.check_occupied("replace", index)?;

        let kind = shape.kind();
        let Some(previous) = self.shapes[index].replace(shape) else {
            unreachable!("slot {index} was checked as occupied")
        };
        tracing::debug!(
            index,
            old = %previous.kind(),
            new = %kind,
            "replaced shape",
        );
        Ok(previous)
    }

    /// Iterate over the stored shapes in insertion order.
    ///
    /// Empty slots are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> + '_ {
        self.shapes.iter().flatten().map(|shape| &**shape as &dyn Shape)
    }

    /// Sum of every stored shape's perimeter; `0.0` for an empty box.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn total_perimeter(&self) -> f64 {
        self.iter().fold(0.0, |sum, shape| sum + shape.perimeter())
    }

    /// Sum of every stored shape's area; `0.0` for an empty box.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn total_area(&self) -> f64 {
        self.iter().fold(0.0, |sum, shape| sum + shape.area())
    }

    /// Remove every shape of the given variant, keeping the rest in order.
    ///
    /// Returns how many shapes were removed. Fails with
    /// [`BoxError::NoMatchingVariant`] when there were none, in which case
    /// the box is unchanged.
    pub fn remove_all(&mut self, kind: ShapeKind) -> Result<usize, BoxError> {
        let matched = self.iter().filter(|shape| shape.is(kind)).count();
        if matched == 0 {
            return Err(self.reject("remove_all", BoxError::NoMatchingVariant { kind }));
        }

        self.shapes
            .retain(|slot| !slot.as_ref().is_some_and(|shape| shape.is(kind)));
        tracing::debug!(
            %kind,
            removed = matched,
            len = self.shapes.len(),
            "removed all shapes of variant",
        );
        Ok(matched)
    }

    /// Remove every [`Circle`](shape_geom::Circle) from the box.
    pub fn remove_all_circles(&mut self) -> Result<usize, BoxError> {
        self.remove_all(ShapeKind::Circle)
    }

    fn check_occupied(&self, op: &'static str, index: usize) -> Result<(), BoxError> {
        match self.shapes.get(index) {
            Some(Some(_)) => Ok(()),
            Some(None) => Err(self.reject(op, BoxError::SlotEmpty { index })),
            None => Err(self.reject(op, self.out_of_range(index))),
        }
    }

    fn out_of_range(&self, index: usize) -> BoxError {
        BoxError::IndexOutOfRange {
            index,
            len: self.shapes.len(),
        }
    }

    fn reject(&self, op: &'static str, err: BoxError) -> BoxError {
        tracing::trace!(op, %err, len = self.shapes.len(), "rejected operation");
        err
    }

    /// Append an empty slot. Test-only: no public operation creates holes.
    #[cfg(test)]
    pub(crate) fn push_empty_slot(&mut self) {
        assert!(!self.is_full(), "cannot add a slot to a full box");
        self.shapes.push(None);
    }
}
