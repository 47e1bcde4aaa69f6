//! Home view - landing page with featured events and quick stats

use crate::action::Action;
use crate::component::Component;
use crate::components::text::truncate_to_width;
use crate::config::Config;
use crate::model::event::Event;
use crate::model::View;
use crate::services::{ImageLoader, ImageState, PLACEHOLDER_TEXT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Number of events featured on the landing page
pub const FEATURED_COUNT: usize = 3;

#[derive(Default)]
pub struct HomeComponent {
    /// Highlighted featured card
    pub selected: usize,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn featured(events: &[Event]) -> &[Event] {
        &events[..events.len().min(FEATURED_COUNT)]
    }

    pub fn selected_event<'a>(&self, events: &'a [Event]) -> Option<&'a Event> {
        Self::featured(events).get(self.selected)
    }

    pub fn next(&mut self, len: usize) {
        if self.selected + 1 < len.min(FEATURED_COUNT) {
            self.selected += 1;
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => Some(Action::PrevItem),
            KeyCode::Enter => Some(Action::OpenCheckout),
            KeyCode::Char('e') => Some(Action::SetView(View::Events)),
            KeyCode::Char('c') => Some(Action::SetView(View::CreateEvent)),
            _ => None,
        };
        Ok(action)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

pub struct HomeRenderContext<'a> {
    pub events: &'a [Event],
    pub city_count: usize,
    pub favorites_count: usize,
    pub config: &'a Config,
    pub images: &'a ImageLoader,
}

pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero
            Constraint::Min(8),    // Featured
            Constraint::Length(4), // Stats
        ])
        .split(area);

    render_hero(frame, chunks[0], ctx.config);
    render_featured(frame, chunks[1], home, ctx);
    render_stats(frame, chunks[2], ctx);

    Ok(())
}

fn render_hero(frame: &mut Frame, area: Rect, config: &Config) {
    let badge = if config.wallet_connected() {
        Span::styled(
            format!(" ● {} ", config.network),
            Style::default().fg(Color::Black).bg(Color::Green),
        )
    } else {
        Span::styled(
            format!(" ○ {} · sin wallet ", config.network),
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            "Entradas seguras en la blockchain",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Compra, guarda y revende tickets NFT para los mejores eventos.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            badge,
            Span::raw("  "),
            Span::styled(" e ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Explorar eventos  "),
            Span::styled(" c ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Crear evento"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" TicketSafer ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(paragraph, area);
}

fn render_featured(frame: &mut Frame, area: Rect, home: &HomeComponent, ctx: &HomeRenderContext) {
    let featured = HomeComponent::featured(ctx.events);
    if featured.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = featured
        .iter()
        .map(|_| Constraint::Ratio(1, featured.len() as u32))
        .collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (event, card)) in featured.iter().zip(cards.iter()).enumerate() {
        let selected = i == home.selected;
        let width = card.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", event.icon(), event.category),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(Span::styled(
                truncate_to_width(&event.title, width),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&event.artist, width),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(format!("{} · {}", event.formatted_date(), event.time)),
            Line::from(truncate_to_width(
                &format!("{}, {}", event.venue, event.city),
                width,
            )),
            Line::from(Span::styled(
                event.formatted_price(),
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            Line::from(image_line(ctx.images, &event.image)),
        ];

        let border = if selected { Color::Yellow } else { Color::DarkGray };
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(if selected { " Destacado ▶ " } else { " Destacado " })
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, *card);
    }
}

fn image_line(images: &ImageLoader, url: &str) -> Span<'static> {
    match images.state(url) {
        Some(ImageState::Loaded(info)) => {
            Span::styled(format!("▣ {}", info.summary()), Style::default().fg(Color::DarkGray))
        }
        Some(ImageState::Failed(_)) => {
            Span::styled(format!("▢ {}", PLACEHOLDER_TEXT), Style::default().fg(Color::DarkGray))
        }
        _ => Span::styled("▢ cargando imagen...", Style::default().fg(Color::DarkGray)),
    }
}

fn render_stats(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let line = Line::from(vec![
        Span::styled(
            format!("{}", ctx.events.len()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" eventos   "),
        Span::styled(
            format!("{}", ctx.city_count),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ciudades   "),
        Span::styled(
            format!("{}", ctx.favorites_count),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" favoritos"),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::mock_events;

    #[test]
    fn test_featured_is_first_three() {
        let events = mock_events();
        let featured = HomeComponent::featured(&events);
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, events[0].id);
    }

    #[test]
    fn test_selection_stays_within_featured() {
        let events = mock_events();
        let mut home = HomeComponent::new();
        for _ in 0..5 {
            home.next(events.len());
        }
        assert_eq!(home.selected, 2);
        assert_eq!(home.selected_event(&events).unwrap().id, events[2].id);

        home.previous();
        assert_eq!(home.selected, 1);
    }

    #[test]
    fn test_featured_handles_short_catalog() {
        let events = mock_events();
        assert_eq!(HomeComponent::featured(&events[..2]).len(), 2);
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap(),
            Some(Action::OpenCheckout)
        );
        assert_eq!(
            home.handle_key_event(KeyEvent::from(KeyCode::Char('e'))).unwrap(),
            Some(Action::SetView(View::Events))
        );
    }
}
