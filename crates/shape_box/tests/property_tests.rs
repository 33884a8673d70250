//! Property-based tests for the shape box.
//!
//! Random sequences of shapes are generated and the box is checked against
//! a plain `Vec` model:
//! 1. Capacity: exactly `capacity` adds succeed.
//! 2. Extraction compacts and preserves order.
//! 3. Replacement keeps length and is observable through `get`.
//! 4. Bulk circle removal removes exactly the circles.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use shape_box::{BoxError, Circle, Rectangle, Shape, ShapeBox, ShapeKind, Triangle};

// -- Strategies --

/// A shape description that can be built repeatedly.
#[derive(Clone, Copy, Debug)]
enum ShapeDesc {
    Circle(f64),
    Rectangle(f64, f64),
    Triangle(f64),
}

impl ShapeDesc {
    fn build(self) -> Box<dyn Shape> {
        match self {
            ShapeDesc::Circle(r) => Box::new(Circle::new(r)),
            ShapeDesc::Rectangle(w, h) => Box::new(Rectangle::new(w, h)),
            ShapeDesc::Triangle(s) => Box::new(Triangle::new(s)),
        }
    }

    fn kind(self) -> ShapeKind {
        match self {
            ShapeDesc::Circle(_) => ShapeKind::Circle,
            ShapeDesc::Rectangle(..) => ShapeKind::Rectangle,
            ShapeDesc::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

fn dimension() -> impl Strategy<Value = f64> {
    0.0..100.0_f64
}

fn shape_strategy() -> impl Strategy<Value = ShapeDesc> {
    prop_oneof![
        dimension().prop_map(ShapeDesc::Circle),
        (dimension(), dimension()).prop_map(|(w, h)| ShapeDesc::Rectangle(w, h)),
        dimension().prop_map(ShapeDesc::Triangle),
    ]
}

fn shape_descs(max: usize) -> impl Strategy<Value = Vec<ShapeDesc>> {
    prop::collection::vec(shape_strategy(), 0..max)
}

fn build_box(capacity: usize, descs: &[ShapeDesc]) -> ShapeBox {
    let mut b = ShapeBox::new(capacity);
    for desc in descs {
        b.add_boxed(desc.build()).unwrap();
    }
    b
}

fn debug_all(b: &ShapeBox) -> Vec<String> {
    b.iter().map(|shape| format!("{shape:?}")).collect()
}

fn debug_descs(descs: &[ShapeDesc]) -> Vec<String> {
    descs
        .iter()
        .map(|desc| format!("{:?}", desc.build()))
        .collect()
}

// -- Properties --

proptest! {
    #[test]
    fn capacity_is_never_exceeded(capacity in 0usize..16, extra in 1usize..4) {
        let mut b = ShapeBox::new(capacity);
        for _ in 0..capacity {
            prop_assert!(b.add(Circle::new(1.0)).is_ok());
        }
        for _ in 0..extra {
            prop_assert_eq!(
                b.add(Rectangle::new(1.0, 1.0)),
                Err(BoxError::CapacityExceeded { capacity })
            );
        }
        prop_assert_eq!(b.len(), capacity);
    }

    #[test]
    fn get_out_of_range_is_rejected(descs in shape_descs(10), offset in 0usize..10) {
        let b = build_box(10, &descs);
        let index = descs.len() + offset;
        prop_assert_eq!(
            b.get(index).unwrap_err(),
            BoxError::IndexOutOfRange { index, len: descs.len() }
        );
    }

    #[test]
    fn extract_compacts_in_order(descs in shape_descs(12), pick in any::<prop::sample::Index>()) {
        prop_assume!(!descs.is_empty());
        let i = pick.index(descs.len());
        let mut b = build_box(12, &descs);

        let removed = b.extract(i).unwrap();
        prop_assert_eq!(format!("{removed:?}"), format!("{:?}", descs[i].build()));

        let mut model = descs.clone();
        model.remove(i);
        prop_assert_eq!(b.len(), descs.len() - 1);
        prop_assert_eq!(debug_all(&b), debug_descs(&model));
    }

    #[test]
    fn replace_keeps_length(
        descs in shape_descs(12),
        pick in any::<prop::sample::Index>(),
        with in shape_strategy(),
    ) {
        prop_assume!(!descs.is_empty());
        let i = pick.index(descs.len());
        let mut b = build_box(12, &descs);

        let previous = b.replace_boxed(i, with.build()).unwrap();
        prop_assert_eq!(format!("{previous:?}"), format!("{:?}", descs[i].build()));
        prop_assert_eq!(b.len(), descs.len());
        prop_assert_eq!(format!("{:?}", b.get(i).unwrap()), format!("{:?}", with.build()));
    }

    #[test]
    fn totals_match_model(descs in shape_descs(12)) {
        let b = build_box(12, &descs);
        let perimeter: f64 = descs.iter().map(|s| s.build().perimeter()).sum();
        let area: f64 = descs.iter().map(|s| s.build().area()).sum();
        prop_assert!((b.total_perimeter() - perimeter).abs() <= 1e-9 * perimeter.max(1.0));
        prop_assert!((b.total_area() - area).abs() <= 1e-9 * area.max(1.0));
    }

    #[test]
    fn remove_all_circles_removes_exactly_the_circles(descs in shape_descs(12)) {
        let mut b = build_box(12, &descs);
        let circles = descs.iter().filter(|s| s.kind() == ShapeKind::Circle).count();
        let before = debug_all(&b);

        let result = b.remove_all_circles();
        if circles == 0 {
            prop_assert_eq!(
                result,
                Err(BoxError::NoMatchingVariant { kind: ShapeKind::Circle })
            );
            prop_assert_eq!(debug_all(&b), before);
        } else {
            prop_assert_eq!(result, Ok(circles));
            let rest: Vec<ShapeDesc> = descs
                .iter()
                .copied()
                .filter(|s| s.kind() != ShapeKind::Circle)
                .collect();
            prop_assert_eq!(b.len(), descs.len() - circles);
            prop_assert_eq!(debug_all(&b), debug_descs(&rest));
        }
    }
}
