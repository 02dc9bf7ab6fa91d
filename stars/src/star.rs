//! The [`Star`] value and the turtle drawing procedure.
//!
//! A `Star` is the immutable description of all star polygons of one order:
//! the order `p`, the circumradius, and the derived table of turning angles
//! keyed by step `q`. Drawing {p/q} emits commands onto a
//! [`Canvas`] and retains nothing — the same star drawn twice from the same
//! arguments produces an identical command sequence.

#[cfg(test)]
#[path = "star_test.rs"]
mod star_test;

use std::collections::BTreeMap;
use std::time::Duration;

use num_integer::gcd;

use crate::canvas::{Canvas, Point};
use crate::consts::MIN_STAR_ORDER;
use crate::{Error, Result, geom};

/// Pacing strategy between the variants of [`Star::draw_all`].
///
/// The library itself never decides to sleep; callers that want visual
/// pacing pass [`Pacer::Fixed`], headless callers pass [`Pacer::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacer {
    /// No delay between variants (tests, batch rendering).
    #[default]
    None,
    /// Sleep for a fixed interval after each variant.
    Fixed(Duration),
}

impl Pacer {
    fn pause(self) {
        if let Self::Fixed(interval) = self {
            std::thread::sleep(interval);
        }
    }
}

/// All star polygons of one order: `p`, the circumradius, and the derived
/// angle table. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    p: u32,
    radius: f64,
    angles: BTreeMap<u32, f64>,
}

impl Star {
    /// Build the star description for order `p` with the given circumradius.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOrder`] when `p < 3`, [`Error::InvalidRadius`] when
    /// the radius is not a positive finite number.
    pub fn new(p: u32, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius);
        }
        let angles = geom::turning_angles(p)?;
        Ok(Self { p, radius, angles })
    }

    /// The polygon order.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.p
    }

    /// The circumradius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Turning angle in degrees for step `q`, if `q` is a valid star ratio.
    #[must_use]
    pub fn turning_angle(&self, q: u32) -> Option<f64> {
        self.angles.get(&q).copied()
    }

    /// The valid steps for this order, ascending. Empty when `p < 5`.
    #[must_use]
    pub fn steps(&self) -> Vec<u32> {
        self.angles.keys().copied().collect()
    }

    /// Draw the {p/q} star onto `canvas`, centered at `center`, with the
    /// first vertex in the direction `pointing_angle` (degrees CCW from +x).
    ///
    /// For `p < 5` this is a no-op: no non-degenerate star exists below
    /// order 5. When `gcd(p, q) = n > 1` the figure decomposes into `n`
    /// congruent {p/n / q/n} sub-polygons, each traced as its own closed
    /// fill group with the pen repositioned between passes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStep`] when `q` is not a key of the angle table.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        q: u32,
        center: Point,
        pointing_angle: f64,
    ) -> Result<()> {
        if self.p < MIN_STAR_ORDER {
            return Ok(());
        }
        let Some(&theta) = self.angles.get(&q) else {
            return Err(Error::InvalidStep { p: self.p, q });
        };

        // Walk out to a vertex and face along the first chord.
        canvas.pen_up();
        canvas.move_to(center);
        canvas.set_heading(pointing_angle);
        canvas.forward(self.radius);
        canvas.turn_right(180.0 - theta / 2.0);
        canvas.pen_down();

        let n = gcd(self.p, q);
        let length = geom::chord(self.radius, geom::gamma(q, self.p));
        let sides_per_pass = self.p / n;

        trace_pass(canvas, sides_per_pass, length, theta);

        // {p/q} = n {p'/q'}: the remaining n-1 congruent sub-polygons, each
        // offset by one p-gon side along the circumscribing circle.
        let beta = geom::beta(q, self.p);
        let side = geom::side(self.radius, self.p);
        for _ in 1..n {
            canvas.pen_up();
            canvas.turn_left(beta);
            canvas.forward(side);
            canvas.turn_right(180.0 - beta - theta);
            canvas.pen_down();
            trace_pass(canvas, sides_per_pass, length, theta);
        }
        Ok(())
    }

    /// Draw every valid {p/q} variant of this order in ascending `q`,
    /// clearing the canvas between variants and pausing per `pacer`.
    pub fn draw_all(
        &self,
        canvas: &mut dyn Canvas,
        center: Point,
        pointing_angle: f64,
        pacer: Pacer,
    ) -> Result<()> {
        for q in self.steps() {
            self.draw(canvas, q, center, pointing_angle)?;
            pacer.pause();
            canvas.clear();
        }
        Ok(())
    }
}

/// One closed fill group: `sides` chords of `length`, turning right by the
/// exterior angle `180 - theta` at each vertex.
fn trace_pass(canvas: &mut dyn Canvas, sides: u32, length: f64, theta: f64) {
    canvas.begin_fill();
    for _ in 0..sides {
        canvas.forward(length);
        canvas.turn_right(180.0 - theta);
    }
    canvas.end_fill();
}
