#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for planar robot kinematics."]
#![doc = ""]
#![doc = "This crate provides the position, heading, and fixed-step integration"]
#![doc = "math used by the roverlink teleoperation simulator: heading angles in"]
#![doc = "degrees normalized to `[0, 360)`, displacement of a position along a"]
#![doc = "heading, and hundredths rounding for externally visible coordinates."]

use core::f64::consts::PI;
use core::fmt;
use libm::{cos, round, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the unbounded 2-D plane, in world-frame coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// World-frame x coordinate.
    pub x: f64,
    /// World-frame y coordinate.
    pub y: f64,
}

impl Position {
    /// Construct a new position.
    ///
    /// # Arguments
    ///
    /// * `x`: World-frame x coordinate.
    /// * `y`: World-frame y coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Advance the position by one integration step along `heading_deg`.
    ///
    /// The step displaces the position by `cos(heading) × step` on x and
    /// `sin(heading) × step` on y. A negative `step` moves the position
    /// backwards along the heading.
    ///
    /// # Arguments
    ///
    /// * `heading_deg`: Heading in degrees, measured counter-clockwise from
    ///   the positive x-axis.
    /// * `step`: Signed displacement magnitude for this step.
    pub fn advance(&mut self, heading_deg: f64, step: f64) {
        let (dx, dy) = displacement(heading_deg, step);
        self.x += dx;
        self.y += dy;
    }

    /// Returns the position advanced by one step, leaving `self` untouched.
    ///
    /// See [`Position::advance`] for the step semantics.
    pub fn advanced(&self, heading_deg: f64, step: f64) -> Self {
        let mut next = *self;
        next.advance(heading_deg, step);
        next
    }

    /// Returns the position with both coordinates rounded to hundredths.
    ///
    /// This is the projection used for externally visible state; the
    /// unrounded position keeps accumulating drift-free internally.
    pub fn rounded(&self) -> Self {
        Position {
            x: round_hundredths(self.x),
            y: round_hundredths(self.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.2}, y: {:.2})", self.x, self.y)
    }
}

/// Convert a heading in degrees to radians.
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Normalize a heading in degrees to `[0, 360)`.
///
/// # Arguments
///
/// * `deg`: The heading in degrees to normalize. May be any finite value,
///   including large accumulations and negative angles.
///
/// # Returns
///
/// The equivalent heading in `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    d
}

/// Displacement `(dx, dy)` for one step of magnitude `step` along
/// `heading_deg`.
pub fn displacement(heading_deg: f64, step: f64) -> (f64, f64) {
    let radians = degrees_to_radians(heading_deg);
    (cos(radians) * step, sin(radians) * step)
}

/// Round a coordinate to two decimal places.
pub fn round_hundredths(v: f64) -> f64 {
    round(v * 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(0.0) - 0.0).abs() < EPSILON);
        assert!((normalize_degrees(359.0) - 359.0).abs() < EPSILON);
        assert!((normalize_degrees(360.0) - 0.0).abs() < EPSILON);
        assert!((normalize_degrees(365.0) - 5.0).abs() < EPSILON);
        assert!((normalize_degrees(-5.0) - 355.0).abs() < EPSILON); // -5 wraps below zero
        assert!((normalize_degrees(-360.0) - 0.0).abs() < EPSILON);
        assert!((normalize_degrees(725.0) - 5.0).abs() < EPSILON); // two full turns + 5
        assert!((normalize_degrees(-725.0) - 355.0).abs() < EPSILON);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(0.0) - 0.0).abs() < EPSILON);
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((degrees_to_radians(-90.0) - (-PI / 2.0)).abs() < EPSILON);
    }

    #[test]
    fn test_displacement_cardinal_headings() {
        // Heading 0: all displacement on x.
        let (dx, dy) = displacement(0.0, 1.0);
        assert!((dx - 1.0).abs() < EPSILON);
        assert!((dy - 0.0).abs() < EPSILON);

        // Heading 90: all displacement on y.
        let (dx, dy) = displacement(90.0, 1.0);
        assert!((dx - 0.0).abs() < EPSILON);
        assert!((dy - 1.0).abs() < EPSILON);

        // Heading 180: negative x.
        let (dx, dy) = displacement(180.0, 1.0);
        assert!((dx - (-1.0)).abs() < EPSILON);
        assert!((dy - 0.0).abs() < EPSILON);

        // Heading 270: negative y.
        let (dx, dy) = displacement(270.0, 1.0);
        assert!((dx - 0.0).abs() < EPSILON);
        assert!((dy - (-1.0)).abs() < EPSILON);
    }

    #[test]
    fn test_displacement_scales_with_step() {
        // Heading 0, step 0.5: dx = cos(0) * 0.5 = 0.5
        let (dx, dy) = displacement(0.0, 0.5);
        assert!((dx - 0.5).abs() < EPSILON);
        assert!((dy - 0.0).abs() < EPSILON);

        // Negative step reverses the direction of travel.
        let (dx, dy) = displacement(0.0, -0.5);
        assert!((dx - (-0.5)).abs() < EPSILON);
        assert!((dy - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_displacement_diagonal() {
        // Heading 45, step 1: dx = dy = sqrt(2)/2
        let expected = 2.0_f64.sqrt() / 2.0;
        let (dx, dy) = displacement(45.0, 1.0);
        assert!((dx - expected).abs() < EPSILON);
        assert!((dy - expected).abs() < EPSILON);
    }

    #[test]
    fn test_position_advance_accumulates() {
        let mut pos = Position::new(0.0, 0.0);
        pos.advance(0.0, 1.0);
        pos.advance(0.0, 1.0);
        pos.advance(0.0, 1.0);
        assert!((pos.x - 3.0).abs() < EPSILON);
        assert!((pos.y - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_position_advanced_leaves_original() {
        let pos = Position::new(1.0, 2.0);
        let next = pos.advanced(90.0, 2.0);
        assert!((pos.x - 1.0).abs() < EPSILON);
        assert!((pos.y - 2.0).abs() < EPSILON);
        assert!((next.x - 1.0).abs() < EPSILON);
        assert!((next.y - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_round_hundredths() {
        assert!((round_hundredths(1.005) - 1.0).abs() < 0.01); // binary 1.005 sits just below
        assert!((round_hundredths(2.349) - 2.35).abs() < EPSILON);
        assert!((round_hundredths(-2.349) - (-2.35)).abs() < EPSILON);
        assert!((round_hundredths(0.0) - 0.0).abs() < EPSILON);
        assert!((round_hundredths(123.456789) - 123.46).abs() < EPSILON);
    }

    #[test]
    fn test_position_rounded() {
        let pos = Position::new(1.23456, -9.87654);
        let rounded = pos.rounded();
        assert!((rounded.x - 1.23).abs() < EPSILON);
        assert!((rounded.y - (-9.88)).abs() < EPSILON);
        // Source position keeps its full precision.
        assert!((pos.x - 1.23456).abs() < EPSILON);
    }

    #[test]
    fn test_display_formats_to_hundredths() {
        let pos = Position::new(1.0 / 3.0, -2.5);
        assert_eq!(format!("{pos}"), "(x: 0.33, y: -2.50)");
    }
}
