use bevy::prelude::*;
use std::f32::consts::PI;

/// Vertical squash of the main rotor disc, giving the side-on "flat" look.
pub const MAIN_ROTOR_FLATTEN: f32 = 8.0;
/// Half-length of the tail rotor blade.
pub const TAIL_ROTOR_LENGTH: f32 = 14.0;
/// Tail rotor spins this many times faster than the main rotor.
pub const TAIL_ROTOR_RATIO: f32 = 3.0;

/// Main rotor blade, rotated and stretched from the rotor angle every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct MainRotorBlade {
    pub length: f32,
}

/// Tail rotor blade, stretched vertically from the rotor angle every frame.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TailRotorBlade;

/// Root of the helicopter drawing, positioned from the altitude every frame.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct HelicopterBody;

/// Visual pose of a rotor blade segment in its parent's local frame (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladePose {
    /// Full tip-to-tip length.
    pub length: f32,
    /// Rotation around z (rad).
    pub rotation: f32,
}

impl MainRotorBlade {
    /// Both blade tips sit at `hub ± (cos a · length, sin a · flatten)` in screen
    /// space; the pose is the segment between them.
    pub fn pose(&self, rotor_angle: f32) -> BladePose {
        let tip = Vec2::new(
            rotor_angle.cos() * self.length,
            -rotor_angle.sin() * MAIN_ROTOR_FLATTEN,
        );
        BladePose {
            length: 2.0 * tip.length(),
            rotation: tip.y.atan2(tip.x),
        }
    }
}

impl TailRotorBlade {
    pub fn pose(rotor_angle: f32) -> BladePose {
        let swing = (rotor_angle * TAIL_ROTOR_RATIO).sin() * TAIL_ROTOR_LENGTH;
        BladePose {
            length: 2.0 * swing.abs(),
            rotation: PI / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_main_blade_is_longest_when_level() {
        let blade = MainRotorBlade { length: 100.0 };
        let level = blade.pose(0.0);
        assert_relative_eq!(level.length, 200.0);
        assert_relative_eq!(level.rotation, 0.0);

        let edge_on = blade.pose(FRAC_PI_2);
        assert_relative_eq!(edge_on.length, 2.0 * MAIN_ROTOR_FLATTEN, epsilon = 1e-3);
    }

    #[test]
    fn test_main_blade_tilts_with_angle() {
        let blade = MainRotorBlade { length: 100.0 };
        let pose = blade.pose(0.5);
        assert!(pose.rotation < 0.0);
        assert!(pose.length < 200.0 && pose.length > 2.0 * MAIN_ROTOR_FLATTEN);
    }

    #[test]
    fn test_tail_blade_swings() {
        assert_relative_eq!(TailRotorBlade::pose(0.0).length, 0.0);
        let peak = TailRotorBlade::pose(FRAC_PI_2 / TAIL_ROTOR_RATIO);
        assert_relative_eq!(peak.length, 2.0 * TAIL_ROTOR_LENGTH, epsilon = 1e-4);
    }
}
