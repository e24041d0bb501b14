//! Interactive slide presenter using ratatui.
//!
//! Keys are translated into engine [`Command`]s; everything drawn is read
//! from [`PresentationEngine::current_visible_content`].

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::core::{Command, Fragment, NavigationState, PresentationEngine, ProgressStyle};
use crate::error::{DeckError, Result};

/// Presenter settings resolved from config and the deck.
#[derive(Debug, Clone, Copy)]
pub struct PresenterOptions {
    /// Input poll interval in milliseconds.
    pub tick_ms: u64,
    pub show_progress: bool,
    pub progress_style: ProgressStyle,
    /// Show transition and background labels in the title bar.
    pub show_metadata: bool,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            show_progress: true,
            progress_style: ProgressStyle::Bar,
            show_metadata: false,
        }
    }
}

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Close the presenter
    Quit,
    /// Keep running
    Continue,
}

/// Engine command bound to `code`, if any.
///
/// Presenter-only keys (quit, help, overview, digits) return `None`.
#[must_use]
pub const fn command_for_key(code: KeyCode, slide_count: usize) -> Option<Command> {
    match code {
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::PageDown
        | KeyCode::Enter
        | KeyCode::Char(' ' | 'l' | 'j' | 'n') => Some(Command::Advance),
        KeyCode::Left
        | KeyCode::Up
        | KeyCode::PageUp
        | KeyCode::Backspace
        | KeyCode::Char('h' | 'k' | 'p') => Some(Command::Retreat),
        KeyCode::Home | KeyCode::Char('g') => Some(Command::JumpToSlide(0)),
        KeyCode::End | KeyCode::Char('G') => {
            Some(Command::JumpToSlide(slide_count.saturating_sub(1)))
        }
        _ => None,
    }
}

/// Presenter state wrapped around one engine.
pub struct PresenterTui {
    engine: PresentationEngine,
    options: PresenterOptions,
    /// Digits typed so far for a jump
    jump_buffer: String,
    /// Slide overview selection, when the overview is open
    overview: Option<ListState>,
    show_help: bool,
    status_message: Option<String>,
}

impl PresenterTui {
    #[must_use]
    pub const fn new(engine: PresentationEngine, options: PresenterOptions) -> Self {
        Self {
            engine,
            options,
            jump_buffer: String::new(),
            overview: None,
            show_help: false,
            status_message: None,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &PresentationEngine {
        &self.engine
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Run the main loop until the user quits; returns the final position.
    pub fn run(
        mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<NavigationState> {
        let tick = Duration::from_millis(self.options.tick_ms);
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code, key.modifiers) == Action::Quit {
                        return Ok(self.engine.state());
                    }
                }
            }
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let progress_height = if self.options.show_progress
            && self.options.progress_style != ProgressStyle::None
        {
            1
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),               // Title bar
                Constraint::Min(3),                  // Slide
                Constraint::Length(progress_height), // Progress
                Constraint::Length(1),               // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_slide(f, chunks[1]);
        if progress_height > 0 {
            self.draw_progress(f, chunks[2]);
        }
        self.draw_help_bar(f, chunks[3]);

        if self.overview.is_some() {
            self.draw_overview(f);
        }
        if self.show_help {
            Self::draw_help_overlay(f);
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let visible = self.engine.current_visible_content();
        let deck_title = self
            .engine
            .deck()
            .meta()
            .title
            .clone()
            .unwrap_or_else(|| "stepdeck".to_string());

        let mut spans = vec![
            Span::styled(deck_title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " | slide {} / {}",
                visible.slide_index + 1,
                visible.slide_count
            )),
        ];
        if visible.reveal_unit_count > 0 {
            spans.push(Span::raw(format!(
                " | step {} / {}",
                visible.reveal_step, visible.reveal_unit_count
            )));
        }
        if self.options.show_metadata {
            if !visible.transition.is_empty() {
                spans.push(Span::raw(format!(" | {}", visible.transition.join(" "))));
            }
            if let Some(background) = visible.background {
                spans.push(Span::raw(format!(" | bg:{background}")));
            }
        }
        if let Some(message) = &self.status_message {
            spans.push(Span::styled(
                format!(" | {message}"),
                Style::default().fg(Color::Red),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Cyan));
        f.render_widget(paragraph, area);
    }

    fn draw_slide(&self, f: &mut Frame, area: Rect) {
        let title = self
            .engine
            .current_slide()
            .title()
            .map(|t| format!(" {t} "))
            .unwrap_or_default();
        let paragraph = Paragraph::new(self.slide_text())
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn draw_progress(&self, f: &mut Frame, area: Rect) {
        let ordinal = self.engine.state_ordinal() + 1;
        let total = self.engine.total_states();
        match self.options.progress_style {
            ProgressStyle::Bar => {
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
                    .ratio(self.engine.progress().clamp(0.0, 1.0))
                    .label(format!("{ordinal} / {total}"));
                f.render_widget(gauge, area);
            }
            ProgressStyle::Number => {
                let paragraph = Paragraph::new(format!("{ordinal} / {total}"))
                    .style(Style::default().fg(Color::Cyan));
                f.render_widget(paragraph, area);
            }
            ProgressStyle::None => {}
        }
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help_text = if self.overview.is_some() {
            "j/k: select  Enter: go to slide  Esc/o: close".to_string()
        } else if self.jump_buffer.is_empty() {
            "→/Space: next  ←: back  g/G: first/last  <n>Enter: jump  o: overview  ?: help  q: quit"
                .to_string()
        } else {
            format!("jump to slide: {}_  (Enter to go, Esc to cancel)", self.jump_buffer)
        };

        let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
        f.render_widget(paragraph, area);
    }

    fn draw_overview(&mut self, f: &mut Frame) {
        let popup = centered(f.area(), 60, 20);
        let items: Vec<ListItem> = self
            .engine
            .deck()
            .slides()
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let title = slide.title().unwrap_or_else(|| "(untitled)".to_string());
                let marker = if i == self.engine.slide_index() { "*" } else { " " };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{marker}{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::raw(title),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Slides "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_widget(Clear, popup);
        if let Some(state) = self.overview.as_mut() {
            f.render_stateful_widget(list, popup, state);
        }
    }

    fn draw_help_overlay(f: &mut Frame) {
        let help_area = centered(f.area(), 56, 18);
        f.render_widget(Clear, help_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  → ↓ Space l j n PgDn Enter   Reveal next / next slide"),
            Line::from("  ← ↑ Backspace h k p PgUp     Hide last / previous slide"),
            Line::from("  g / Home                     First slide"),
            Line::from("  G / End                      Last slide"),
            Line::from("  <number> Enter               Go to slide <number>"),
            Line::from("  o                            Slide overview"),
            Line::from("  q / Esc / Ctrl-C             Quit"),
            Line::from(""),
            Line::from("Press ? or Esc to close this help"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, help_area);
    }

    /// Lines for the always-visible content followed by the revealed units.
    fn slide_text(&self) -> Text<'static> {
        let visible = self.engine.current_visible_content();
        let mut lines: Vec<Line<'static>> = Vec::new();
        for (i, fragment) in visible.fragments().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.extend(fragment_lines(fragment));
        }
        Text::from(lines)
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.show_help {
            if matches!(key, KeyCode::Char('?' | 'q') | KeyCode::Esc | KeyCode::Enter) {
                self.show_help = false;
            }
            return Action::Continue;
        }

        if self.overview.is_some() {
            self.handle_overview_key(key);
            return Action::Continue;
        }

        match key {
            KeyCode::Char(digit) if digit.is_ascii_digit() => {
                self.jump_buffer.push(digit);
                return Action::Continue;
            }
            KeyCode::Enter if !self.jump_buffer.is_empty() => {
                self.submit_jump();
                return Action::Continue;
            }
            KeyCode::Backspace if !self.jump_buffer.is_empty() => {
                self.jump_buffer.pop();
                return Action::Continue;
            }
            KeyCode::Esc if !self.jump_buffer.is_empty() => {
                self.jump_buffer.clear();
                return Action::Continue;
            }
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('?') => {
                self.show_help = true;
                return Action::Continue;
            }
            KeyCode::Char('o') => {
                let mut state = ListState::default();
                state.select(Some(self.engine.slide_index()));
                self.overview = Some(state);
                return Action::Continue;
            }
            _ => {}
        }

        self.jump_buffer.clear();
        if let Some(command) = command_for_key(key, self.engine.deck().len()) {
            self.apply(command);
        }
        Action::Continue
    }

    fn handle_overview_key(&mut self, key: KeyCode) {
        let last = self.engine.deck().len() - 1;
        let Some(state) = self.overview.as_mut() else {
            return;
        };
        let selected = state.selected().unwrap_or(0);
        match key {
            KeyCode::Down | KeyCode::Char('j') => state.select(Some((selected + 1).min(last))),
            KeyCode::Up | KeyCode::Char('k') => state.select(Some(selected.saturating_sub(1))),
            KeyCode::Home | KeyCode::Char('g') => state.select(Some(0)),
            KeyCode::End | KeyCode::Char('G') => state.select(Some(last)),
            KeyCode::Enter => {
                self.overview = None;
                self.apply(Command::JumpToSlide(selected));
            }
            KeyCode::Esc | KeyCode::Char('o' | 'q') => self.overview = None,
            _ => {}
        }
    }

    fn submit_jump(&mut self) {
        let typed = std::mem::take(&mut self.jump_buffer);
        match typed.parse::<usize>() {
            Ok(number) if number > 0 => self.apply(Command::JumpToSlide(number - 1)),
            _ => self.status_message = Some(format!("No slide {typed}")),
        }
    }

    fn apply(&mut self, command: Command) {
        match self.engine.apply(command) {
            Ok(()) => self.status_message = None,
            Err(err) => {
                tracing::debug!(?command, error = %err, "command rejected");
                self.status_message = Some(err.to_string());
            }
        }
    }
}

/// Styled terminal lines for one fragment.
fn fragment_lines(fragment: &Fragment) -> Vec<Line<'static>> {
    match fragment {
        Fragment::Heading { text, level } => {
            let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
            if *level == 1 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            vec![Line::from(Span::styled(text.clone(), style))]
        }
        Fragment::Text { text } => text.lines().map(|l| Line::from(l.to_string())).collect(),
        Fragment::Code { source, lang } => {
            let code = Style::default().fg(Color::Yellow);
            let mut lines = Vec::new();
            if let Some(lang) = lang {
                lines.push(Line::from(Span::styled(
                    lang.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.extend(
                source
                    .lines()
                    .map(|l| Line::from(Span::styled(format!("  {l}"), code))),
            );
            lines
        }
        Fragment::Image { src, alt } => {
            let label = alt.as_ref().map_or_else(|| format!("[image] {src}"), |alt| {
                format!("[image: {alt}] {src}")
            });
            vec![Line::from(Span::styled(
                label,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
            ))]
        }
        Fragment::Video { src } => vec![Line::from(Span::styled(
            format!("[video] {src}"),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        ))],
        Fragment::Link { href, text } => {
            let mut spans = Vec::new();
            if let Some(text) = text {
                spans.push(Span::raw(format!("{text} ")));
            }
            spans.push(Span::styled(
                href.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ));
            vec![Line::from(spans)]
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        tracing::debug!("terminal entered raw mode");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        tracing::debug!("terminal restored");
    }
}

/// Present `engine` until the user quits; returns the final position.
pub fn run_presenter(
    engine: PresentationEngine,
    options: PresenterOptions,
) -> Result<NavigationState> {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return Err(DeckError::TerminalRequired(
            "present needs stdin and stdout attached to a terminal".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    PresenterTui::new(engine, options).run(&mut terminal)
}
