//! Glyph constants for the starfield.

/// Glyphs for small stars (radius below 0.67).
pub const SMALL_STARS: &[char] = &['.', '·'];

/// Glyphs for medium stars (radius below 0.84).
pub const MEDIUM_STARS: &[char] = &['+', '*'];

/// Glyphs for large stars.
pub const LARGE_STARS: &[char] = &['✦', '✧'];

/// Pick the glyph for a star of the given draw radius.
///
/// A terminal cell cannot shrink, so the radius selects the glyph instead;
/// the low bits of the radius keep the choice stable for a star's lifetime.
pub fn glyph_for(radius: f32) -> char {
    let set = if radius < 0.67 {
        SMALL_STARS
    } else if radius < 0.84 {
        MEDIUM_STARS
    } else {
        LARGE_STARS
    };
    set[(radius * 1000.0) as usize % set.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_buckets() {
        assert!(SMALL_STARS.contains(&glyph_for(0.5)));
        assert!(MEDIUM_STARS.contains(&glyph_for(0.7)));
        assert!(LARGE_STARS.contains(&glyph_for(0.99)));
    }
}
