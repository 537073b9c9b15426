use std::f32::consts::{FRAC_PI_2, PI};

/// Base stroke width of the dial, in logical pixels. Hand widths and the hub
/// radius derive from it.
pub const STROKE_WIDTH: f32 = 20.0;

/// Point size of the cardinal numerals.
pub const TEXT_SIZE: f32 = 60.0;

/// Dial geometry derived from the drawing surface size.
///
/// The radius leaves room for the stroke on every side; a surface too small
/// to fit any dial degenerates to all zeroes instead of going negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub radius: f32,
    pub minute_hand_len: f32,
    pub second_hand_len: f32,
}

impl FaceGeometry {
    pub fn for_surface(width: f32, height: f32, stroke: f32) -> Self {
        let radius = (width.min(height) / 2.0 - stroke).max(0.0);
        Self {
            radius,
            minute_hand_len: 0.6 * radius,
            second_hand_len: 0.8 * radius,
        }
    }

    /// Distance from the dial box's top-left to its center, per axis.
    pub fn center_offset(&self, stroke: f32) -> f32 {
        self.radius + stroke
    }

    /// Side length of the square box the dial occupies.
    pub fn side(&self, stroke: f32) -> f32 {
        2.0 * (self.radius + stroke)
    }
}

/// Angle of a hand at `position`, in radians.
///
/// Position 0 points straight up; each unit is 6 degrees clockwise (screen
/// coordinates, +Y down).
pub fn hand_angle(position: u8) -> f32 {
    PI * position as f32 / 30.0 - FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn geometry_for_landscape_surface() {
        let geo = FaceGeometry::for_surface(200.0, 100.0, 20.0);
        assert_eq!(geo.radius, 30.0);
        assert_eq!(geo.minute_hand_len, 18.0);
        assert_eq!(geo.second_hand_len, 24.0);
    }

    #[test]
    fn undersized_surface_degenerates_to_zero() {
        let geo = FaceGeometry::for_surface(10.0, 10.0, 20.0);
        assert_eq!(geo.radius, 0.0);
        assert_eq!(geo.minute_hand_len, 0.0);
        assert_eq!(geo.second_hand_len, 0.0);
    }

    #[test]
    fn center_sits_stroke_past_the_radius() {
        let geo = FaceGeometry::for_surface(200.0, 100.0, 20.0);
        assert_eq!(geo.center_offset(20.0), 50.0);
        assert_eq!(geo.side(20.0), 100.0);
    }

    #[test]
    fn cardinal_angles() {
        assert!((hand_angle(0) - (-FRAC_PI_2)).abs() < EPS); // up
        assert!(hand_angle(15).abs() < EPS); // right
        assert!((hand_angle(30) - FRAC_PI_2).abs() < EPS); // down
        assert!((hand_angle(45) - PI).abs() < EPS); // left
    }
}
