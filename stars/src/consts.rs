//! Shared numeric constants for the stars crate.

// ── Geometry ────────────────────────────────────────────────────

/// Smallest polygon order that admits a non-degenerate star polygon.
/// {3/q} and {4/q} have no valid step; drawing below this order is a no-op.
pub const MIN_STAR_ORDER: u32 = 5;

/// Smallest step q of any star ratio. q = 1 traces the convex polygon.
pub const MIN_STEP: u32 = 2;

// ── Defaults ────────────────────────────────────────────────────

/// Default circumradius in world units.
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Default heading from the star center to the first vertex, in degrees
/// (turtle convention: counter-clockwise from the positive x-axis, 90 = up).
pub const DEFAULT_POINTING_ANGLE: f64 = 90.0;

/// Default order range drawn by the gallery driver, inclusive.
pub const DEFAULT_ORDER_RANGE: (u32, u32) = (5, 19);

// ── SVG backend ─────────────────────────────────────────────────

/// Background color of the rendered document.
pub const SVG_BACKGROUND: &str = "#000000";

/// Fill and stroke color for star paths.
pub const SVG_PEN: &str = "#F5D33C";

/// Margin between the circumscribing circle and the viewport edge, as a
/// fraction of the radius.
pub const SVG_MARGIN_RATIO: f64 = 0.15;
