//! Star-polygon geometry and turtle-path generation.
//!
//! This crate computes {p/q} star polygons — the figure traced by connecting
//! every q-th vertex of a regular p-gon inscribed in a circle — and emits the
//! drawing as a sequence of turtle-style commands. It owns all of the
//! geometry: vertex turning angles, chord lengths, and the multi-pass
//! procedure needed when p and q share a factor. Rendering is delegated to a
//! [`canvas::Canvas`] collaborator; the crate ships a headless recorder for
//! tests and an SVG writer as the concrete backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Pure {p/q} formulas: angle table, chord and side lengths |
//! | [`star`] | [`star::Star`] value and the drawing procedure |
//! | [`canvas`] | Draw commands, the [`canvas::Canvas`] contract, command recorder |
//! | [`svg`] | SVG document backend implementing [`canvas::Canvas`] |
//! | [`consts`] | Shared numeric constants (minimum order, defaults, colors) |

pub mod canvas;
pub mod consts;
pub mod geom;
pub mod star;
pub mod svg;

/// Errors produced by star construction and drawing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The polygon order is below 3; no regular polygon exists.
    #[error("polygon order must be at least 3, got {p}")]
    InvalidOrder {
        /// The rejected order.
        p: u32,
    },
    /// The circumradius is zero, negative, or not finite.
    #[error("radius must be a positive finite number")]
    InvalidRadius,
    /// The step q is outside the valid range `[2, ceil(p/2) - 1]` for this order.
    #[error("step {q} is not a valid star ratio for order {p}")]
    InvalidStep {
        /// The polygon order.
        p: u32,
        /// The rejected step.
        q: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
