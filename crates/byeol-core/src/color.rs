//! Color string parsing for configuration values.

use ratatui::style::Color;

/// Parse a color from a config string.
///
/// Accepts `#RGB` and `#RRGGBB` hex notation as well as a small set of
/// named colors. Returns `None` for anything else.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    match s.to_ascii_lowercase().as_str() {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "yellow" => Some(Color::Yellow),
        "gray" | "grey" => Some(Color::Gray),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        // #RGB shorthand: each digit doubles (f -> ff)
        3 => {
            let mut parts = hex.chars().map(|c| {
                c.to_digit(16).map(|d| {
                    let d = d as u8;
                    d << 4 | d
                })
            });
            let r = parts.next()??;
            let g = parts.next()??;
            let b = parts.next()??;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
