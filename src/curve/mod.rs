//! Kurven-Mathematik: Bézier-Erzeugung, Interpolation und Aggregation.
//!
//! Layer-neutral und ohne Zustand: alle Funktionen sind reine Funktionen
//! ihrer Eingaben und können von `app` und externen Hosts genutzt werden.

pub mod aggregate;
pub mod geometry;
pub mod interpolation;


pub use aggregate::{aggregate, aggregate_with, grid_positions, AggregateConfig};
pub use geometry::{generate_curve, generate_curve_points, nearest_point_by_x, quadratic_bezier};
pub use interpolation::interpolate_y_at;
