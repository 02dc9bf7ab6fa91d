//! Draw commands and the canvas contract.
//!
//! The drawing procedure in [`crate::star`] never touches a rendering surface
//! directly; it talks to a [`Canvas`], the turtle-style collaborator that
//! executes primitive pen operations. Backends implement the trait
//! ([`crate::svg::SvgCanvas`] for documents, [`Recorder`] for headless
//! capture in tests).
//!
//! Conventions: all angles are degrees, headings are measured
//! counter-clockwise from the positive x-axis (90° = straight up), and the
//! world y-axis points up.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use serde::{Deserialize, Serialize};

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The world origin.
    #[must_use]
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// One primitive turtle operation, as emitted by the drawing procedure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum DrawCommand {
    /// Lift the pen; subsequent motion leaves no trace.
    PenUp,
    /// Lower the pen; subsequent motion draws.
    PenDown,
    /// Jump to an absolute position without changing heading.
    MoveTo {
        /// Target position in world space.
        to: Point,
    },
    /// Face an absolute heading in degrees.
    SetHeading {
        /// New heading, CCW from the positive x-axis.
        degrees: f64,
    },
    /// Advance along the current heading.
    Forward {
        /// Distance in world units.
        length: f64,
    },
    /// Rotate clockwise.
    TurnRight {
        /// Rotation in degrees.
        degrees: f64,
    },
    /// Rotate counter-clockwise.
    TurnLeft {
        /// Rotation in degrees.
        degrees: f64,
    },
    /// Start accumulating a filled region.
    BeginFill,
    /// Close and fill the region accumulated since [`DrawCommand::BeginFill`].
    EndFill,
    /// Erase everything drawn so far.
    Clear,
}

/// The turtle-style rendering collaborator consumed by the drawing procedure.
///
/// One method per [`DrawCommand`]; implementations own all backend state
/// (pen position, heading, accumulated paths).
pub trait Canvas {
    fn pen_up(&mut self);
    fn pen_down(&mut self);
    fn move_to(&mut self, to: Point);
    fn set_heading(&mut self, degrees: f64);
    fn forward(&mut self, length: f64);
    fn turn_right(&mut self, degrees: f64);
    fn turn_left(&mut self, degrees: f64);
    fn begin_fill(&mut self);
    fn end_fill(&mut self);
    fn clear(&mut self);
}

/// A headless [`Canvas`] that records every command it receives.
///
/// This is the test harness: geometry is verified against the captured
/// command sequence instead of pixels. It is also the source for the JSON
/// trace output format.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in emission order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consume the recorder, returning the captured sequence.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Canvas for Recorder {
    fn pen_up(&mut self) {
        self.commands.push(DrawCommand::PenUp);
    }

    fn pen_down(&mut self) {
        self.commands.push(DrawCommand::PenDown);
    }

    fn move_to(&mut self, to: Point) {
        self.commands.push(DrawCommand::MoveTo { to });
    }

    fn set_heading(&mut self, degrees: f64) {
        self.commands.push(DrawCommand::SetHeading { degrees });
    }

    fn forward(&mut self, length: f64) {
        self.commands.push(DrawCommand::Forward { length });
    }

    fn turn_right(&mut self, degrees: f64) {
        self.commands.push(DrawCommand::TurnRight { degrees });
    }

    fn turn_left(&mut self, degrees: f64) {
        self.commands.push(DrawCommand::TurnLeft { degrees });
    }

    fn begin_fill(&mut self) {
        self.commands.push(DrawCommand::BeginFill);
    }

    fn end_fill(&mut self) {
        self.commands.push(DrawCommand::EndFill);
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}
