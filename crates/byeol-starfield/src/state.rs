//! Starfield state management.

use byeol_core::StarfieldOptions;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars;
use crate::star::{self, Star};

/// Starfield animation state.
///
/// Owns the current field and the dimensions it was generated for. The
/// field stays empty until the first render with a nonzero area, is
/// replaced wholesale whenever the rendered area's dimensions change, and
/// advances one tick per render. Dropping the state discards the field;
/// the caller's event loop decides when rendering stops.
#[derive(Debug)]
pub struct StarfieldState {
    /// Tuning the field was generated with.
    opts: StarfieldOptions,
    /// Current field.
    stars: Vec<Star>,
    /// Last known surface width.
    last_width: u16,
    /// Last known surface height.
    last_height: u16,
    /// Randomness for generation and wraparound columns.
    rng: StdRng,
}

impl StarfieldState {
    /// Create an idle starfield; no field exists until the first render.
    pub fn new(opts: StarfieldOptions) -> Self {
        Self {
            opts,
            stars: Vec::new(),
            last_width: 0,
            last_height: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Render the starfield into `area` and advance the drift one tick.
    ///
    /// Dimension changes are detected here, so a resized surface gets a
    /// fully regenerated field before anything is drawn; a zero-sized area
    /// skips the frame entirely and leaves the field untouched.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if area.width != self.last_width || area.height != self.last_height {
            self.regenerate(area.width, area.height);
        }

        frame.render_widget(Paragraph::new(self.draw_lines()), area);
        self.tick();
    }

    /// Replace the entire field for new surface dimensions.
    fn regenerate(&mut self, width: u16, height: u16) {
        self.stars = star::generate_field(width, height, &self.opts, &mut self.rng);
        self.last_width = width;
        self.last_height = height;
    }

    /// Advance every star one tick.
    fn tick(&mut self) {
        star::update(
            &mut self.stars,
            self.last_width,
            self.last_height,
            &mut self.rng,
        );
    }

    /// Build one line of spans per surface row from the current field.
    ///
    /// Cells without a star stay blank, so the paragraph overwrites the
    /// whole area and no stale star from the previous frame survives. A
    /// star sitting exactly on the bottom edge is off-grid until it
    /// drifts back into view.
    fn draw_lines(&self) -> Vec<Line<'static>> {
        let width = self.last_width as usize;
        let height = self.last_height as usize;
        let style = Style::new().fg(self.opts.color);

        let mut grid = vec![vec![' '; width]; height];
        for star in &self.stars {
            let col = star.x as usize;
            let row = star.y as usize;
            if col < width && row < height {
                grid[row][col] = chars::glyph_for(star.radius);
            }
        }

        grid.into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|ch| {
                        if ch == ' ' {
                            Span::raw(" ")
                        } else {
                            Span::styled(ch.to_string(), style)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
