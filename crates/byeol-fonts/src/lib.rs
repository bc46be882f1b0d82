//! Block-letter glyphs for the byeol wordmark.

/// Letter B (7 lines tall, 6 chars wide)
pub const LETTER_B: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter Y
pub const LETTER_Y: [&str; 7] = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter E
pub const LETTER_E: [&str; 7] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter O
pub const LETTER_O: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Letter L
pub const LETTER_L: [&str; 7] = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

/// Build the block-letter wordmark.
///
/// # Returns
/// A vector of 7 strings, each representing one line of the wordmark.
pub fn build_wordmark() -> Vec<String> {
    const LETTERS: [&[&str; 7]; 5] = [&LETTER_B, &LETTER_Y, &LETTER_E, &LETTER_O, &LETTER_L];

    let mut lines = Vec::with_capacity(7);

    for row in 0..7 {
        let mut line = String::new();
        for (i, letter) in LETTERS.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(letter[row]);
        }
        lines.push(line);
    }

    lines
}
