//! Shape Box - a capacity-bounded container of shapes.
//!
//! [`ShapeBox`] holds an ordered sequence of boxed [`Shape`] trait objects up
//! to a capacity fixed at construction. Shapes are appended with
//! [`ShapeBox::add`] and addressed by dense `usize` indices; removing a shape
//! shifts every later shape down by one.
//!
//! # Failure Model
//!
//! Every fallible operation returns [`BoxError`]. Validation always runs to
//! completion before anything is mutated, so a failed call leaves the box
//! exactly as it was.
//!
//! # Logging
//!
//! Mutations emit `tracing` events at `debug`, rejected calls at `trace`.
//! Call [`init_tracing`] and set `RUST_LOG=shape_box=debug` to see them.

mod container;
mod error;

pub use container::ShapeBox;
pub use error::BoxError;
pub use shape_geom::{Circle, Rectangle, Shape, ShapeKind, Triangle};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; only the first call installs a subscriber,
/// and only if `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A test harness or host application may already own the global
            // subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
