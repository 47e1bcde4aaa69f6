//! Brand screen shown while the first artwork fetches get going

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Gauge, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const BRAND: Color = Color::Rgb(139, 92, 246);
const ACCENT: Color = Color::Rgb(236, 72, 153);
const BACKDROP: Color = Color::Rgb(15, 10, 30);

const TICKET: &[&str] = &[
    " ┌──────────────────────────────┐ ",
    " │  ╭──╮                  ╭──╮  │ ",
    " │  │  │   T I C K E T    │  │  │ ",
    " │  ╰──╯    S A F E R     ╰──╯  │ ",
    " │ ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄ │ ",
    " │   ◆ NFT  ·  WEB3  ·  EVENTS  │ ",
    " └──────────────────────────────┘ ",
];

pub struct SplashComponent {
    shown_at: Option<Instant>,
    hold: Duration,
    /// One line about the loaded catalog, e.g. "12 eventos en 9 ciudades"
    pub summary: String,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            shown_at: None,
            hold: Duration::from_millis(1200),
            summary: String::new(),
        }
    }

    /// Fraction of the hold time elapsed, 0.0 before `init`
    pub fn progress(&self) -> f64 {
        let Some(shown_at) = self.shown_at else {
            return 0.0;
        };
        if self.hold.is_zero() {
            return 1.0;
        }
        (shown_at.elapsed().as_secs_f64() / self.hold.as_secs_f64()).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.shown_at.is_some() && self.progress() >= 1.0
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.shown_at = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(Some(match key.code {
            KeyCode::Char('q') => Action::ForceQuit,
            _ => Action::SplashComplete,
        }))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok((action == Action::Tick && self.is_complete()).then_some(Action::SplashComplete))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(BACKDROP)), area);

        let art_height = TICKET.len() as u16;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(art_height + 6) / 2),
                Constraint::Length(art_height),
                Constraint::Length(1),
                Constraint::Length(1), // Wordmark
                Constraint::Length(1), // Summary
                Constraint::Length(1),
                Constraint::Length(1), // Gauge
                Constraint::Min(0),
            ])
            .split(area);

        let art: Vec<Line> = TICKET
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(BRAND))))
            .collect();
        frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), rows[1]);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let wordmark = Line::from(vec![
            Span::styled("Ticket", bold.fg(Color::White)),
            Span::styled("Safer", bold.fg(ACCENT)),
        ]);
        frame.render_widget(Paragraph::new(wordmark).alignment(Alignment::Center), rows[3]);

        let summary = Line::from(Span::styled(
            self.summary.as_str(),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(summary).alignment(Alignment::Center), rows[4]);

        let gauge_width = 34u16.min(area.width);
        let gauge_area = Rect {
            x: area.x + (area.width - gauge_width) / 2,
            width: gauge_width,
            ..rows[6]
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(BRAND).bg(BACKDROP))
            .ratio(self.progress())
            .label("");
        frame.render_widget(gauge, gauge_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_complete_before_init() {
        let splash = SplashComponent::new();
        assert_eq!(splash.progress(), 0.0);
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_complete_after_hold() {
        let mut splash = SplashComponent::new();
        splash.hold = Duration::ZERO;
        splash.init().unwrap();
        assert!(splash.is_complete());
        assert_eq!(splash.update(Action::Tick).unwrap(), Some(Action::SplashComplete));
    }

    #[test]
    fn test_q_quits_other_keys_skip() {
        let mut splash = SplashComponent::new();
        assert_eq!(
            splash.handle_key_event(KeyEvent::from(KeyCode::Char('q'))).unwrap(),
            Some(Action::ForceQuit)
        );
        assert_eq!(
            splash.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap(),
            Some(Action::SplashComplete)
        );
    }
}
