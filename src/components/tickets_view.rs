//! Ticket collection view
//!
//! Lists the wallet's NFT tickets with a status filter and shows the
//! highlighted ticket's details.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::split_list_detail;
use crate::components::text::truncate_to_width;
use crate::model::tickets::{filter_tickets, OwnedTicket, TicketFilter, TicketStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

pub struct TicketsComponent {
    pub filter: TicketFilter,
    pub list_state: ListState,
}

impl Default for TicketsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketsComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            filter: TicketFilter::default(),
            list_state,
        }
    }

    pub fn visible<'a>(&self, tickets: &'a [OwnedTicket]) -> Vec<&'a OwnedTicket> {
        filter_tickets(tickets, self.filter)
    }

    pub fn selected_ticket<'a>(&self, tickets: &'a [OwnedTicket]) -> Option<&'a OwnedTicket> {
        let index = self.list_state.selected()?;
        self.visible(tickets).get(index).copied()
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.list_state.select(Some(0));
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self, len: usize) {
        self.list_state.select(Some(len.saturating_sub(1)));
    }
}

impl Component for TicketsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Char('f') => Some(Action::CycleTicketFilter),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextItem),
            MouseEventKind::ScrollUp => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }
}

fn status_color(status: TicketStatus) -> Color {
    match status {
        TicketStatus::Active => Color::Green,
        TicketStatus::Used => Color::Blue,
        TicketStatus::Expired => Color::Red,
    }
}

pub fn draw_tickets_screen(
    frame: &mut Frame,
    area: Rect,
    view: &mut TicketsComponent,
    tickets: &[OwnedTicket],
) -> Result<()> {
    let (left, right) = split_list_detail(area, 55);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(left);

    let filters = TicketFilter::all();
    let titles: Vec<String> = filters
        .iter()
        .map(|f| format!("{} ({})", f.name(), f.count(tickets)))
        .collect();
    let selected = filters.iter().position(|f| *f == view.filter).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let visible = view.visible(tickets);
    let title_width = chunks[1].width.saturating_sub(30) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .map(|ticket| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", ticket.status.icon()),
                    Style::default().fg(status_color(ticket.status)),
                ),
                Span::styled(
                    format!(
                        "{:<width$}",
                        truncate_to_width(&ticket.event_title, title_width),
                        width = title_width
                    ),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(" {:<9}", ticket.ticket_type),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!(" {}", ticket.short_tx_hash()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Mis Tickets ({}) ", visible.len()))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, chunks[1], &mut view.list_state);

    render_ticket_detail(frame, right, view.selected_ticket(tickets));
    Ok(())
}

fn render_ticket_detail(frame: &mut Frame, area: Rect, ticket: Option<&OwnedTicket>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Detalle ")
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(ticket) = ticket else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No hay tickets con este estado",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let label = |text: &str| Span::styled(format!("{:<16}", text), Style::default().fg(Color::Cyan));
    let mut lines = vec![
        Line::from(Span::styled(
            ticket.event_title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            ticket.artist.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            label("Estado"),
            Span::styled(
                format!("{} {}", ticket.status.icon(), ticket.status.name()),
                Style::default().fg(status_color(ticket.status)),
            ),
        ]),
        Line::from(vec![label("ID"), Span::raw(ticket.id.clone())]),
        Line::from(vec![
            label("Lugar"),
            Span::raw(format!("{}, {}", ticket.venue, ticket.city)),
        ]),
        Line::from(vec![
            label("Fecha"),
            Span::raw(format!("{} {}", ticket.date, ticket.time)),
        ]),
        Line::from(vec![
            label("Entrada"),
            Span::raw(format!("{} · {}", ticket.ticket_type, ticket.seat)),
        ]),
        Line::from(vec![label("Precio"), Span::raw(ticket.formatted_price())]),
        Line::from(vec![
            label("Precio original"),
            Span::raw(format!("{} ETH", ticket.original_price)),
        ]),
        Line::from(vec![label("Comisiones"), Span::raw(format!("{} ETH", ticket.fees))]),
        Line::from(vec![label("Comprado"), Span::raw(ticket.purchase_date.clone())]),
    ];

    if let Some(ref used) = ticket.used_date {
        lines.push(Line::from(vec![label("Usado"), Span::raw(used.clone())]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        label("Transacción"),
        Span::styled(ticket.tx_hash.clone(), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(vec![
        label("Reventa"),
        if ticket.can_resell() {
            Span::styled("Disponible", Style::default().fg(Color::Green))
        } else {
            Span::styled("No disponible", Style::default().fg(Color::DarkGray))
        },
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
