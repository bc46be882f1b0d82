//! Tuning options for the starfield background.

use ratatui::style::Color;

/// Tuning for the starfield background animation.
///
/// Star count scales with surface area times `density`; each star's drift
/// speed is a random base scaled by `speed_factor`. Every star is filled
/// with `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldOptions {
    /// Star count per unit of surface area.
    pub density: f32,
    /// Multiplier applied to each star's randomized drift speed.
    pub speed_factor: f32,
    /// Fill color used for every star.
    pub color: Color,
}

impl Default for StarfieldOptions {
    fn default() -> Self {
        Self {
            density: 0.05,
            speed_factor: 0.015,
            color: Color::White,
        }
    }
}
