//! Star generation and per-tick drift.

use byeol_core::StarfieldOptions;
use rand::Rng;

/// A single drifting star.
#[derive(Debug, Clone)]
pub struct Star {
    /// Horizontal position in surface cells.
    pub x: f32,
    /// Vertical position in surface cells.
    pub y: f32,
    /// Draw radius; selects the glyph.
    pub radius: f32,
    /// Upward drift per tick.
    pub speed: f32,
}

/// Field size for the given surface dimensions.
pub fn star_count(width: u16, height: u16, density: f32) -> usize {
    if density <= 0.0 {
        return 0;
    }
    (width as f32 * height as f32 * density / 40.0).floor() as usize
}

/// Generate a fresh field for the given dimensions.
///
/// Every star draws from the same fixed ranges: position anywhere on the
/// surface, radius in `[0.5, 1.0)`, drift speed in `[0.2, 0.7)` scaled by
/// the configured speed factor.
pub fn generate_field(
    width: u16,
    height: u16,
    opts: &StarfieldOptions,
    rng: &mut impl Rng,
) -> Vec<Star> {
    (0..star_count(width, height, opts.density))
        .map(|_| Star {
            x: rng.random_range(0.0..width as f32),
            y: rng.random_range(0.0..height as f32),
            radius: rng.random_range(0.5..1.0),
            speed: rng.random_range(0.2..0.7) * opts.speed_factor * 15.0,
        })
        .collect()
}

/// Advance every star one tick.
///
/// A star that crosses the top edge wraps to the bottom edge in a freshly
/// randomized column, so `0 <= y <= height` holds after every tick.
pub fn update(stars: &mut [Star], width: u16, height: u16, rng: &mut impl Rng) {
    for star in stars {
        star.y -= star.speed;
        if star.y < 0.0 {
            star.y = height as f32;
            star.x = rng.random_range(0.0..width as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn opts() -> StarfieldOptions {
        StarfieldOptions::default()
    }

    #[test]
    fn test_star_count_formula() {
        assert_eq!(star_count(800, 600, 0.05), 600);
        assert_eq!(star_count(400, 300, 0.05), 150);
        assert_eq!(star_count(80, 24, 1.0), 48);
    }

    #[test]
    fn test_star_count_degenerate() {
        assert_eq!(star_count(0, 600, 0.05), 0);
        assert_eq!(star_count(800, 0, 0.05), 0);
        assert_eq!(star_count(800, 600, 0.0), 0);
        assert_eq!(star_count(800, 600, -1.0), 0);
    }

    #[test]
    fn test_generated_field_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = generate_field(800, 600, &opts(), &mut rng);
        assert_eq!(stars.len(), 600);

        let speed_lo = 0.2 * 0.015 * 15.0;
        let speed_hi = 0.7 * 0.015 * 15.0;
        for star in &stars {
            assert!((0.0..800.0).contains(&star.x));
            assert!((0.0..600.0).contains(&star.y));
            assert!((0.5..1.0).contains(&star.radius));
            assert!((speed_lo..speed_hi).contains(&star.speed));
        }
    }

    #[test]
    fn test_field_shape_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = generate_field(800, 600, &opts(), &mut rng);
        let second = generate_field(800, 600, &opts(), &mut rng);
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_top_edge_wraps_to_bottom() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut stars = vec![Star {
            x: 123.0,
            y: 0.3,
            radius: 0.6,
            speed: 0.5,
        }];

        update(&mut stars, 800, 600, &mut rng);

        assert_eq!(stars[0].y, 600.0);
        assert!((0.0..800.0).contains(&stars[0].x));
        assert_ne!(stars[0].x, 123.0);
    }

    #[test]
    fn test_y_stays_in_bounds_over_many_ticks() {
        let mut rng = StdRng::seed_from_u64(11);
        let options = StarfieldOptions {
            density: 1.0,
            speed_factor: 0.1,
            ..StarfieldOptions::default()
        };
        let mut stars = generate_field(120, 40, &options, &mut rng);

        for _ in 0..1_000 {
            update(&mut stars, 120, 40, &mut rng);
            for star in &stars {
                assert!(star.y >= 0.0);
                assert!(star.y <= 40.0);
            }
        }
    }
}
