#![allow(clippy::float_cmp)]

use super::*;
use crate::canvas::{DrawCommand, Recorder};

const EPSILON: f64 = 1e-9;

fn drawn(p: u32, q: u32) -> Vec<DrawCommand> {
    let star = Star::new(p, 100.0).unwrap();
    let mut rec = Recorder::new();
    star.draw(&mut rec, q, Point::origin(), 90.0).unwrap();
    rec.into_commands()
}

/// Forward lengths grouped by fill group (begin_fill .. end_fill).
fn fill_groups(commands: &[DrawCommand]) -> Vec<Vec<f64>> {
    let mut groups = Vec::new();
    let mut current: Option<Vec<f64>> = None;
    for cmd in commands {
        match cmd {
            DrawCommand::BeginFill => current = Some(Vec::new()),
            DrawCommand::EndFill => {
                if let Some(group) = current.take() {
                    groups.push(group);
                }
            }
            DrawCommand::Forward { length } => {
                if let Some(group) = &mut current {
                    group.push(*length);
                }
            }
            _ => {}
        }
    }
    groups
}

/// Replay commands through a minimal turtle to get the final pen position.
fn replay(commands: &[DrawCommand]) -> (Point, f64) {
    let mut pos = Point::origin();
    let mut heading: f64 = 0.0;
    for cmd in commands {
        match cmd {
            DrawCommand::MoveTo { to } => pos = *to,
            DrawCommand::SetHeading { degrees } => heading = *degrees,
            DrawCommand::Forward { length } => {
                pos.x += length * heading.to_radians().cos();
                pos.y += length * heading.to_radians().sin();
            }
            DrawCommand::TurnRight { degrees } => heading -= degrees,
            DrawCommand::TurnLeft { degrees } => heading += degrees,
            _ => {}
        }
    }
    (pos, heading)
}

// --- Construction ---

#[test]
fn new_rejects_low_order() {
    assert_eq!(Star::new(2, 100.0), Err(Error::InvalidOrder { p: 2 }));
}

#[test]
fn new_rejects_bad_radius() {
    assert_eq!(Star::new(5, 0.0), Err(Error::InvalidRadius));
    assert_eq!(Star::new(5, -10.0), Err(Error::InvalidRadius));
    assert_eq!(Star::new(5, f64::NAN), Err(Error::InvalidRadius));
    assert_eq!(Star::new(5, f64::INFINITY), Err(Error::InvalidRadius));
}

#[test]
fn accessors_report_inputs() {
    let star = Star::new(7, 42.0).unwrap();
    assert_eq!(star.order(), 7);
    assert_eq!(star.radius(), 42.0);
}

#[test]
fn steps_ascend() {
    let star = Star::new(12, 100.0).unwrap();
    assert_eq!(star.steps(), vec![2, 3, 4, 5]);
}

#[test]
fn turning_angle_lookup() {
    let star = Star::new(5, 100.0).unwrap();
    assert!((star.turning_angle(2).unwrap() - 36.0).abs() < EPSILON);
    assert!(star.turning_angle(3).is_none());
}

// --- draw: degenerate orders ---

#[test]
fn draw_below_order_five_is_noop() {
    for p in [3, 4] {
        let star = Star::new(p, 100.0).unwrap();
        let mut rec = Recorder::new();
        star.draw(&mut rec, 2, Point::origin(), 90.0).unwrap();
        assert!(rec.commands().is_empty(), "p={p} should emit nothing");
    }
}

#[test]
fn draw_rejects_invalid_step() {
    let star = Star::new(5, 100.0).unwrap();
    let mut rec = Recorder::new();
    let err = star.draw(&mut rec, 3, Point::origin(), 90.0).unwrap_err();
    assert_eq!(err, Error::InvalidStep { p: 5, q: 3 });
    assert!(rec.commands().is_empty());
}

// --- draw: pentagram {5/2}, coprime single pass ---

#[test]
fn pentagram_is_single_pass_of_five_segments() {
    let groups = fill_groups(&drawn(5, 2));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 5);
}

#[test]
fn pentagram_chord_length() {
    let groups = fill_groups(&drawn(5, 2));
    for length in &groups[0] {
        assert!((length - 190.211).abs() < 1e-3);
    }
}

#[test]
fn pentagram_positioning_prefix() {
    let commands = drawn(5, 2);
    assert_eq!(commands[0], DrawCommand::PenUp);
    assert_eq!(commands[1], DrawCommand::MoveTo { to: Point::origin() });
    assert_eq!(commands[2], DrawCommand::SetHeading { degrees: 90.0 });
    assert_eq!(commands[3], DrawCommand::Forward { length: 100.0 });
    // 180 - theta/2 = 180 - 18 = 162
    assert_eq!(commands[4], DrawCommand::TurnRight { degrees: 162.0 });
    assert_eq!(commands[5], DrawCommand::PenDown);
}

#[test]
fn pentagram_turns_exterior_angle() {
    let commands = drawn(5, 2);
    let turns: Vec<f64> = commands[6..]
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::TurnRight { degrees } => Some(*degrees),
            _ => None,
        })
        .collect();
    assert_eq!(turns.len(), 5);
    for turn in turns {
        assert!((turn - 144.0).abs() < EPSILON);
    }
}

#[test]
fn pentagram_path_closes() {
    let commands = drawn(5, 2);
    let (end, _) = replay(&commands);
    // The pen finishes back on the starting vertex: (0, radius).
    assert!(end.x.abs() < 1e-6);
    assert!((end.y - 100.0).abs() < 1e-6);
}

// --- draw: hexagram {6/2}, two-pass decomposition ---

#[test]
fn hexagram_is_two_triangle_passes() {
    let commands = drawn(6, 2);
    let groups = fill_groups(&commands);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 3);
    assert_eq!(groups[1].len(), 3);
}

#[test]
fn hexagram_segment_length_is_inscribed_triangle_side() {
    // chord(100, 120°) = 2·100·sin(60°) ≈ 173.205
    let groups = fill_groups(&drawn(6, 2));
    let total: usize = groups.iter().map(Vec::len).sum();
    assert_eq!(total, 6);
    for group in &groups {
        for length in group {
            assert!((length - 173.205).abs() < 1e-3);
        }
    }
}

#[test]
fn hexagram_repositions_between_passes() {
    let commands = drawn(6, 2);
    // Between the two fill groups: pen_up, left(beta), forward(side),
    // right(180 - beta - theta), pen_down.
    let end_first = commands
        .iter()
        .position(|c| *c == DrawCommand::EndFill)
        .unwrap();
    assert_eq!(commands[end_first + 1], DrawCommand::PenUp);
    // beta(2,6) = 30, side(100,6) = 100, theta(2,6) = 60.
    assert_eq!(commands[end_first + 2], DrawCommand::TurnLeft { degrees: 30.0 });
    let DrawCommand::Forward { length } = commands[end_first + 3] else {
        panic!("expected forward after reposition turn");
    };
    assert!((length - 100.0).abs() < 1e-9);
    assert_eq!(commands[end_first + 4], DrawCommand::TurnRight { degrees: 90.0 });
    assert_eq!(commands[end_first + 5], DrawCommand::PenDown);
}

#[test]
fn octagram_decomposes_into_two_squares() {
    // gcd(8, 2) = 2: {8/2} = 2 {4/1}.
    let groups = fill_groups(&drawn(8, 2));
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.len() == 4));
}

#[test]
fn twelve_four_decomposes_into_four_triangles() {
    // gcd(12, 4) = 4: {12/4} = 4 {3/1}.
    let groups = fill_groups(&drawn(12, 4));
    assert_eq!(groups.len(), 4);
    assert!(groups.iter().all(|g| g.len() == 3));
}

#[test]
fn coprime_heptagram_variants_are_single_pass() {
    for q in [2, 3] {
        let groups = fill_groups(&drawn(7, q));
        assert_eq!(groups.len(), 1, "{{7/{q}}} should be unicursal");
        assert_eq!(groups[0].len(), 7);
    }
}

// --- Purity ---

#[test]
fn draw_is_idempotent() {
    let star = Star::new(9, 100.0).unwrap();
    let center = Point::new(15.0, -40.0);

    let mut first = Recorder::new();
    star.draw(&mut first, 3, center, 45.0).unwrap();
    let mut second = Recorder::new();
    star.draw(&mut second, 3, center, 45.0).unwrap();

    assert_eq!(first.commands(), second.commands());
}

#[test]
fn draw_respects_center_and_pointing_angle() {
    let star = Star::new(5, 100.0).unwrap();
    let mut rec = Recorder::new();
    let center = Point::new(200.0, 300.0);
    star.draw(&mut rec, 2, center, 0.0).unwrap();
    assert_eq!(rec.commands()[1], DrawCommand::MoveTo { to: center });
    assert_eq!(rec.commands()[2], DrawCommand::SetHeading { degrees: 0.0 });
}

// --- draw_all ---

#[test]
fn draw_all_covers_every_step_and_clears_between() {
    let star = Star::new(7, 100.0).unwrap();
    let mut rec = Recorder::new();
    star.draw_all(&mut rec, Point::origin(), 90.0, Pacer::None)
        .unwrap();

    let clears = rec
        .commands()
        .iter()
        .filter(|c| **c == DrawCommand::Clear)
        .count();
    assert_eq!(clears, star.steps().len());
}

#[test]
fn draw_all_below_order_five_emits_nothing() {
    // p = 3 and 4 have empty step tables, so nothing at all is emitted.
    let star = Star::new(4, 100.0).unwrap();
    let mut rec = Recorder::new();
    star.draw_all(&mut rec, Point::origin(), 90.0, Pacer::None)
        .unwrap();
    assert!(rec.commands().is_empty());
}

// --- Pacer ---

#[test]
fn default_pacer_is_none() {
    assert_eq!(Pacer::default(), Pacer::None);
}
