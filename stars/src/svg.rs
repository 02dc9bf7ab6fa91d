//! SVG document backend for the [`Canvas`] contract.
//!
//! This is the only module that knows about a concrete output surface. It
//! runs a turtle state machine (position, heading, pen state) over the
//! incoming commands, accumulates pen-down motion into subpaths, and renders
//! the result as a standalone SVG document: dark background, filled star
//! paths, viewport centered on the world origin.
//!
//! World y points up; SVG y points down. The flip happens once, at render
//! time.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use crate::canvas::{Canvas, Point};
use crate::consts::{SVG_BACKGROUND, SVG_MARGIN_RATIO, SVG_PEN};

/// One continuous pen-down trace.
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    /// Vertices in world coordinates, in drawing order.
    pub points: Vec<Point>,
    /// Whether the trace was captured inside a begin/end fill group.
    pub filled: bool,
}

/// A [`Canvas`] that renders to an SVG document.
#[derive(Debug)]
pub struct SvgCanvas {
    half_extent: f64,
    pos: Point,
    heading: f64,
    pen_down: bool,
    filling: bool,
    current: Vec<Point>,
    subpaths: Vec<SubPath>,
}

impl SvgCanvas {
    /// A canvas whose viewport spans `[-half_extent, half_extent]` on both
    /// axes, centered on the world origin.
    #[must_use]
    pub fn new(half_extent: f64) -> Self {
        Self {
            half_extent,
            pos: Point::origin(),
            heading: 0.0,
            pen_down: false,
            filling: false,
            current: Vec::new(),
            subpaths: Vec::new(),
        }
    }

    /// A canvas sized to fit a star of the given circumradius, with the
    /// standard margin around the circumscribing circle.
    #[must_use]
    pub fn for_radius(radius: f64) -> Self {
        Self::new(radius * (1.0 + SVG_MARGIN_RATIO))
    }

    /// Completed subpaths, in drawing order. The in-progress trace (pen
    /// still down) is not included until it is flushed by a pen-up or an
    /// end-fill.
    #[must_use]
    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    /// Current pen position in world coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Current heading in degrees, CCW from the positive x-axis.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Render the accumulated scene as a standalone SVG document.
    #[must_use]
    pub fn document(&self) -> String {
        let e = self.half_extent;
        let size = 2.0 * e;
        let mut doc = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{x:.2} {y:.2} {s:.2} {s:.2}">"#,
                "\n",
                r#"  <rect x="{x:.2}" y="{y:.2}" width="{s:.2}" height="{s:.2}" fill="{bg}"/>"#,
                "\n",
            ),
            x = -e,
            y = -e,
            s = size,
            bg = SVG_BACKGROUND,
        );
        for subpath in self.subpaths.iter().chain(self.pending().iter()) {
            doc.push_str("  ");
            doc.push_str(&render_subpath(subpath));
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }

    /// The in-progress trace as a subpath, if it has any segments yet.
    fn pending(&self) -> Option<SubPath> {
        if self.current.len() >= 2 {
            Some(SubPath { points: self.current.clone(), filled: self.filling })
        } else {
            None
        }
    }

    /// Seal the in-progress trace into a completed subpath.
    fn flush(&mut self) {
        if self.current.len() >= 2 {
            let points = std::mem::take(&mut self.current);
            self.subpaths.push(SubPath { points, filled: self.filling });
        } else {
            self.current.clear();
        }
    }

    /// Record pen-down motion from the current position to `to`.
    fn trace_to(&mut self, to: Point) {
        if self.pen_down {
            if self.current.is_empty() {
                self.current.push(self.pos);
            }
            self.current.push(to);
        }
        self.pos = to;
    }
}

impl Canvas for SvgCanvas {
    fn pen_up(&mut self) {
        self.flush();
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn move_to(&mut self, to: Point) {
        self.trace_to(to);
    }

    fn set_heading(&mut self, degrees: f64) {
        self.heading = degrees;
    }

    fn forward(&mut self, length: f64) {
        let rad = self.heading.to_radians();
        let to = Point::new(self.pos.x + length * rad.cos(), self.pos.y + length * rad.sin());
        self.trace_to(to);
    }

    fn turn_right(&mut self, degrees: f64) {
        self.heading -= degrees;
    }

    fn turn_left(&mut self, degrees: f64) {
        self.heading += degrees;
    }

    fn begin_fill(&mut self) {
        self.filling = true;
    }

    fn end_fill(&mut self) {
        self.flush();
        self.filling = false;
    }

    fn clear(&mut self) {
        self.current.clear();
        self.subpaths.clear();
    }
}

/// Render one subpath as an SVG `<path>` element, flipping world y (up) to
/// SVG y (down).
fn render_subpath(subpath: &SubPath) -> String {
    let mut d = String::new();
    for (i, point) in subpath.points.iter().enumerate() {
        let prefix = if i == 0 { "M" } else { " L" };
        d.push_str(&format!("{prefix} {:.3},{:.3}", point.x, -point.y));
    }
    if subpath.filled {
        d.push_str(" Z");
        format!(r#"<path d="{d}" fill="{SVG_PEN}" stroke="{SVG_PEN}" stroke-width="1"/>"#)
    } else {
        format!(r#"<path d="{d}" fill="none" stroke="{SVG_PEN}" stroke-width="2"/>"#)
    }
}
