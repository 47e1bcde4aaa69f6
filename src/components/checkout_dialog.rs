//! Checkout dialog component
//!
//! Drives a `CheckoutDraft` through its four steps inside a modal. The
//! draft lives here while the modal is open and is dropped on close.

use crate::action::Action;
use crate::component::Component;
use crate::model::checkout::{CheckoutDraft, CheckoutField, CheckoutStep, TicketTier};
use crate::model::event::{format_amount, Event};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct CheckoutDialog {
    pub draft: Option<CheckoutDraft>,
    /// Highlighted tier on the selection step
    pub tier_index: usize,
    /// Highlighted row on the form steps
    pub field_index: usize,
    pub error: Option<String>,
}

impl CheckoutDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a purchase with one General ticket selected
    pub fn open(&mut self, event: Event) {
        tracing::info!(event_id = event.id, "Checkout opened");
        self.draft = Some(CheckoutDraft::open(event, TicketTier::General));
        self.tier_index = 0;
        self.field_index = 0;
        self.error = None;
    }

    /// Drop the draft, handing back the receipt when the purchase finished
    pub fn close(&mut self) -> Option<String> {
        let draft = self.draft.take()?;
        self.error = None;
        draft.confirmation().map(|c| {
            format!(
                "Compra confirmada: {} × {} ({})",
                c.tickets, c.event_title, c.formatted_total()
            )
        })
    }

    fn selected_tier(&self) -> TicketTier {
        TicketTier::all()
            .get(self.tier_index)
            .copied()
            .unwrap_or(TicketTier::General)
    }

    /// Rows on the current form step. The payment step has the method
    /// toggle as its first row.
    fn row_count(&self) -> usize {
        let Some(draft) = &self.draft else {
            return 0;
        };
        match draft.step {
            CheckoutStep::TicketSelection => TicketTier::all().len(),
            CheckoutStep::CustomerInfo => draft.fields().len(),
            CheckoutStep::Payment => draft.fields().len() + 1,
            CheckoutStep::Confirmation => 0,
        }
    }

    fn selected_field(&self) -> Option<CheckoutField> {
        let draft = self.draft.as_ref()?;
        let index = match draft.step {
            CheckoutStep::Payment => self.field_index.checked_sub(1)?,
            _ => self.field_index,
        };
        draft.fields().get(index).copied()
    }

    fn on_method_row(&self) -> bool {
        self.draft
            .as_ref()
            .is_some_and(|d| d.step == CheckoutStep::Payment && self.field_index == 0)
    }

    fn move_down(&mut self) {
        if let Some(CheckoutStep::TicketSelection) = self.draft.as_ref().map(|d| d.step) {
            if self.tier_index + 1 < TicketTier::all().len() {
                self.tier_index += 1;
            }
        } else if self.field_index + 1 < self.row_count() {
            self.field_index += 1;
        }
    }

    fn move_up(&mut self) {
        if let Some(CheckoutStep::TicketSelection) = self.draft.as_ref().map(|d| d.step) {
            self.tier_index = self.tier_index.saturating_sub(1);
        } else {
            self.field_index = self.field_index.saturating_sub(1);
        }
    }

    fn advance(&mut self) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        match draft.advance() {
            Ok(_) => {
                self.field_index = 0;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn back(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            if draft.back().is_ok() {
                self.field_index = 0;
                self.error = None;
            }
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent) -> Option<Action> {
        let tier = self.selected_tier();
        match key.code {
            KeyCode::Enter => self.advance(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Char('+') | KeyCode::Right => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.add_ticket(tier);
                    self.error = None;
                }
            }
            KeyCode::Char('-') | KeyCode::Left => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.remove_one(tier);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => self.advance(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down | KeyCode::Tab => self.move_down(),
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right if self.on_method_row() => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.payment.method = draft.payment.method.toggled();
                }
            }
            KeyCode::Backspace => {
                if let (Some(field), Some(draft)) = (self.selected_field(), self.draft.as_mut()) {
                    draft.field_value_mut(field).pop();
                }
            }
            KeyCode::Char(c) => {
                if let (Some(field), Some(draft)) = (self.selected_field(), self.draft.as_mut()) {
                    draft.field_value_mut(field).push(c);
                }
            }
            _ => {}
        }
        None
    }
}

impl Component for CheckoutDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let Some((step, can_go_back)) = self.draft.as_ref().map(|d| (d.step, d.can_go_back())) else {
            return Ok(Some(Action::CloseModal));
        };

        // Ctrl+x abandons the purchase from any step, even mid-field
        if key.code == KeyCode::Char('x') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::CloseModal));
        }

        // Esc steps back through the form and closes from either end
        if key.code == KeyCode::Esc {
            if can_go_back {
                self.back();
                return Ok(None);
            }
            return Ok(Some(Action::CloseModal));
        }

        let action = match step {
            CheckoutStep::TicketSelection => self.handle_selection_key(key),
            CheckoutStep::CustomerInfo | CheckoutStep::Payment => self.handle_form_key(key),
            CheckoutStep::Confirmation => match key.code {
                KeyCode::Enter => Some(Action::CloseModal),
                _ => None,
            },
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(draft) = &self.draft else {
            return Ok(());
        };

        let popup_width = 70u16.min(area.width.saturating_sub(4));
        let popup_height = 24u16.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + progress
                Constraint::Min(8),    // Step content
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let progress: Vec<Span> = CheckoutStep::all()
            .iter()
            .flat_map(|step| {
                let style = if *step == draft.step {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if step.number() < draft.step.number() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                [
                    Span::styled(format!("{}. {}", step.number(), step.title()), style),
                    Span::raw("  "),
                ]
            })
            .collect();
        let header = Paragraph::new(Line::from(progress))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Comprar: {} ", draft.event.title))
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(header, chunks[0]);

        let mut lines = match draft.step {
            CheckoutStep::TicketSelection => self.selection_lines(draft),
            CheckoutStep::CustomerInfo | CheckoutStep::Payment => self.form_lines(draft),
            CheckoutStep::Confirmation => confirmation_lines(draft),
        };

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )]));
        }

        let content = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    " Paso {} de 4: {} ",
                    draft.step.number(),
                    draft.step.title()
                ))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(content, chunks[1]);

        let keys = match draft.step {
            CheckoutStep::TicketSelection => " j/k  Entrada   +/-  Cantidad   Enter  Continuar",
            CheckoutStep::CustomerInfo => " ↑/↓  Campo   Enter  Continuar",
            CheckoutStep::Payment => " ↑/↓  Campo   Space  Método   Enter  Pagar",
            CheckoutStep::Confirmation => " Enter  Cerrar",
        };
        let esc = match draft.step {
            _ if draft.can_go_back() => "Volver",
            CheckoutStep::Confirmation => "Cerrar",
            _ => "Cancelar",
        };
        let help = Paragraph::new(Line::from(vec![Span::styled(
            format!("{}   Esc  {}   Ctrl+x  Cancelar", keys, esc),
            Style::default().fg(Color::DarkGray),
        )]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

impl CheckoutDialog {
    fn selection_lines(&self, draft: &CheckoutDraft) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];

        for (i, tier) in TicketTier::all().into_iter().enumerate() {
            let selected = i == self.tier_index;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<10}", tier.name()), name_style),
                Span::styled(
                    format!(
                        "{:>10} {}",
                        format_amount(tier.price_for(&draft.event)),
                        draft.event.currency
                    ),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("   × {}", draft.quantity_of(tier)),
                    Style::default().fg(Color::Green),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", tier.description()),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "{} entrada(s)  {}",
                draft.total_tickets(),
                draft.formatted_total()
            )),
        ]));
        lines
    }

    fn form_lines(&self, draft: &CheckoutDraft) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];
        let mut row = 0usize;

        if draft.step == CheckoutStep::Payment {
            let selected = self.field_index == 0;
            lines.push(form_row(
                "Método de pago",
                &format!("◀ {} ▶", draft.payment.method.name()),
                selected,
                false,
            ));
            lines.push(Line::from(""));
            row = 1;
        }

        for field in draft.fields() {
            let selected = self.field_index == row;
            lines.push(form_row(
                field.label(),
                draft.field_value(field),
                selected,
                selected,
            ));
            row += 1;
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Total a pagar: {}", draft.formatted_total()),
            Style::default().fg(Color::Cyan),
        )));
        lines
    }
}

fn form_row(label: &str, value: &str, selected: bool, cursor: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let value = if cursor {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let value_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, value_style),
    ])
}

fn confirmation_lines(draft: &CheckoutDraft) -> Vec<Line<'static>> {
    let Some(receipt) = draft.confirmation() else {
        return vec![Line::from("Procesando...")];
    };

    let label = |text: &str| Span::styled(format!("{:<14}", text), Style::default().fg(Color::Cyan));
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ ¡Compra confirmada!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![label("Evento"), Span::raw(receipt.event_title.clone())]),
        Line::from(vec![
            label("Fecha"),
            Span::raw(format!("{} {}", receipt.date, receipt.time)),
        ]),
        Line::from(vec![
            label("Lugar"),
            Span::raw(format!("{}, {}", receipt.venue, receipt.city)),
        ]),
        Line::from(vec![label("Entradas"), Span::raw(receipt.tickets.to_string())]),
        Line::from(vec![label("Total"), Span::raw(receipt.formatted_total())]),
        Line::from(vec![
            label("Pago"),
            Span::raw(receipt.payment_method.name().to_string()),
        ]),
        Line::from(vec![
            label("Transacción"),
            Span::styled(receipt.tx_hash.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            label("Confirmado"),
            Span::raw(receipt.confirmed_at.format("%d/%m/%Y %H:%M").to_string()),
        ]),
    ]
}
