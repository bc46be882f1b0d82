use std::time::{Duration, Instant};

use byeol_config::Config;
use byeol_core::StarfieldOptions;
use byeol_fonts::build_wordmark;
use byeol_starfield::StarfieldState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

mod form;
mod headline;
mod whitelist;

use form::{FormField, SignupForm};
use headline::HeadlineCarousel;
use whitelist::Whitelist;

/// Accent color for highlights and the wordmark.
const ACCENT: Color = Color::Blue;

/// Tagline shown under the rotating headline.
const TAGLINE: &str = "Ambient night skies that drift quietly behind your work";

/// Height of the signup card including its border.
const CARD_HEIGHT: u16 = 15;

/// Width of the signup column; the hero panel fills the rest.
const CARD_COLUMN_WIDTH: u16 = 42;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = match Config::config_dir() {
        Some(dir) => Config::load_or_create(&dir)?,
        None => Config::default(),
    };
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Frame interval for the event loop.
    tick_rate: Duration,
    /// Starfield background state.
    starfield: StarfieldState,
    /// Rotating hero headlines.
    headlines: HeadlineCarousel,
    /// Signup form state.
    form: SignupForm,
    /// Captured signups and today's spots.
    whitelist: Whitelist,
}

impl App {
    /// Construct a new instance of [`App`] from loaded configuration.
    pub fn new(config: Config) -> Self {
        let options: StarfieldOptions = config.starfield_options();
        Self {
            running: false,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            starfield: StarfieldState::new(options),
            headlines: HeadlineCarousel::new(
                config.ui.headlines,
                Duration::from_secs(config.ui.rotation_secs),
            ),
            form: SignupForm::new(),
            whitelist: Whitelist::new(config.ui.spots_per_day),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.headlines.maybe_advance(Instant::now());

        let area = frame.area();

        // Background first so the panels draw over it.
        self.starfield.render(frame, area);

        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);

        // The hero wordmark needs room; narrow terminals get the card alone.
        if rows[0].width >= CARD_COLUMN_WIDTH * 2 {
            let columns = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(CARD_COLUMN_WIDTH),
            ])
            .split(rows[0]);
            self.render_hero(frame, columns[0]);
            self.render_card(frame, columns[1]);
        } else {
            self.render_card(frame, rows[0]);
        }

        self.render_help(frame, rows[1]);
    }

    /// Render the hero panel: wordmark, rotating headline, tagline.
    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7), // Wordmark (7 lines)
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Tagline
            Constraint::Fill(1),
        ])
        .split(area);

        let wordmark: Vec<Line> = build_wordmark()
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(ACCENT)))
            .collect();
        frame.render_widget(
            Paragraph::new(wordmark).alignment(Alignment::Center),
            chunks[1],
        );

        if let Some(headline) = self.headlines.current() {
            let headline = Paragraph::new(headline.to_string())
                .style(Style::new().bold())
                .alignment(Alignment::Center);
            frame.render_widget(headline, chunks[3]);
        }

        let tagline = Paragraph::new(TAGLINE)
            .style(Style::new().dark_gray())
            .alignment(Alignment::Center);
        frame.render_widget(tagline, chunks[4]);
    }

    /// Render the signup card.
    fn render_card(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Fill(1),
        ])
        .split(area);
        let card = chunks[1].inner(Margin::new(2, 0));

        let block = Block::bordered()
            .title(" byeol · invite only ")
            .border_style(Style::new().dark_gray());
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let spots = self.whitelist.spots_left();
        let focus = self.form.focus();

        let mut lines: Vec<Line> = vec![
            Line::from("Secure Your Spot".bold()),
            Line::from("Join the whitelist for early access.".dark_gray()),
            Line::raw(""),
        ];
        lines.push(field_label("Full Name", focus == FormField::Name));
        lines.push(self.input_line(FormField::Name));
        lines.push(Line::raw(""));
        lines.push(field_label("Email Address", focus == FormField::Email));
        lines.push(self.input_line(FormField::Email));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            "● ".green(),
            format!("{spots} spots remaining today").dark_gray(),
        ]));
        lines.push(self.status_line());
        lines.push(Line::raw(""));
        lines.push(Line::from("github.com/am2rican5/byeol".dark_gray()));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render the value row of a form field, with cursor and placeholder.
    fn input_line(&self, field: FormField) -> Line<'static> {
        let (value, placeholder) = match field {
            FormField::Name => (self.form.name(), "John Doe"),
            FormField::Email => (self.form.email(), "name@company.com"),
        };
        let focused = self.form.focus() == field && !self.form.is_submitted();

        let mut spans: Vec<Span> = vec![Span::raw("  "), Span::raw(value.to_string())];
        if focused {
            spans.push("▌".fg(ACCENT));
        }
        if value.is_empty() {
            spans.push(placeholder.dark_gray().italic());
        }
        Line::from(spans)
    }

    /// Render the submit outcome row.
    fn status_line(&self) -> Line<'static> {
        if self.form.is_submitted() {
            Line::from("✓ You're on the list. Watch your inbox.".green())
        } else if let Some(error) = self.form.error() {
            Line::from(error.to_string().red())
        } else {
            Line::raw("")
        }
    }

    /// Render the key help line.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = Line::from(vec![
            "tab".bold().fg(ACCENT),
            " switch field  ".dark_gray(),
            "enter".bold().fg(ACCENT),
            " join whitelist  ".dark_gray(),
            "esc".bold().fg(ACCENT),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the starfield keeps drifting.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // Dimension changes are picked up at draw time.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab | KeyCode::BackTab) => self.form.cycle_focus(),
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::Backspace) => self.form.delete(),
            (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert(c);
            }
            _ => {}
        }
    }

    /// Validate the form and capture the entry on the whitelist.
    fn submit(&mut self) {
        if self.form.is_submitted() {
            return;
        }
        match self.form.entry() {
            Ok((name, email)) => match self.whitelist.join(name, email) {
                Ok(()) => self.form.mark_submitted(),
                Err(message) => self.form.set_error(message),
            },
            Err(message) => self.form.set_error(message),
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Build the label row of a form field with a focus marker.
fn field_label(label: &'static str, focused: bool) -> Line<'static> {
    let marker = if focused {
        "▸ ".fg(ACCENT)
    } else {
        Span::raw("  ")
    };
    Line::from(vec![marker, label.dark_gray()])
}
