//! Create-event wizard view
//!
//! Four steps of form editing over a `CreationWizard`. Every key except
//! the view switches goes to this component while it is on screen.

use crate::action::Action;
use crate::component::Component;
use crate::model::creation::{CreateStep, CreationWizard, DraftField, PublishReceipt, TicketField};
use crate::model::event::format_amount;
use crate::model::View;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Per-ticket-type rows on the ticket step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketRow {
    Text(TicketField),
    MaxPerPerson,
    Active,
}

/// One focusable row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(DraftField),
    EventType,
    Ticket(u32, TicketRow),
    RefundPolicy,
    Transferable,
    ResaleAllowed,
}

const LABEL_WIDTH: usize = 26;

#[derive(Default)]
pub struct CreateEventComponent {
    pub wizard: CreationWizard,
    pub selected_row: usize,
    pub error: Option<String>,
}

impl CreateEventComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focusable rows on the current step
    pub fn rows(&self) -> Vec<FormRow> {
        match self.wizard.step {
            CreateStep::BasicInfo => {
                let mut rows = Vec::new();
                for field in DraftField::for_step(CreateStep::BasicInfo) {
                    rows.push(FormRow::Field(field));
                    if field == DraftField::Category {
                        rows.push(FormRow::EventType);
                    }
                }
                rows
            }
            CreateStep::VenueAndDate => DraftField::for_step(CreateStep::VenueAndDate)
                .into_iter()
                .map(FormRow::Field)
                .collect(),
            CreateStep::TicketConfiguration => self
                .wizard
                .draft
                .ticket_types
                .iter()
                .flat_map(|ticket| {
                    TicketField::all()
                        .into_iter()
                        .map(TicketRow::Text)
                        .chain([TicketRow::MaxPerPerson, TicketRow::Active])
                        .map(move |row| FormRow::Ticket(ticket.id, row))
                })
                .collect(),
            CreateStep::Review => [FormRow::RefundPolicy, FormRow::Transferable, FormRow::ResaleAllowed]
                .into_iter()
                .chain(DraftField::for_step(CreateStep::Review).into_iter().map(FormRow::Field))
                .collect(),
        }
    }

    pub fn selected(&self) -> Option<FormRow> {
        self.rows().get(self.selected_row).copied()
    }

    fn select_next(&mut self) {
        if self.selected_row + 1 < self.rows().len() {
            self.selected_row += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    fn advance(&mut self) {
        match self.wizard.advance() {
            Ok(step) => {
                tracing::debug!("Create event wizard at step {}", step.step_number());
                self.selected_row = 0;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn back(&mut self) {
        if self.wizard.back().is_ok() {
            self.selected_row = 0;
            self.error = None;
        }
    }

    /// Publish from the review step
    pub fn publish(&mut self) -> Option<PublishReceipt> {
        match self.wizard.publish() {
            Ok(receipt) => {
                self.selected_row = 0;
                self.error = None;
                Some(receipt)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.wizard.cancel();
        self.selected_row = 0;
        self.error = None;
    }

    fn ticket_value(&self, id: u32, field: TicketField) -> String {
        self.wizard
            .draft
            .ticket_types
            .iter()
            .find(|t| t.id == id)
            .map(|t| match field {
                TicketField::Name => t.name.clone(),
                TicketField::Description => t.description.clone(),
                TicketField::Price => t.price.clone(),
                TicketField::Quantity => t.quantity.clone(),
            })
            .unwrap_or_default()
    }

    fn max_per_person(&self, id: u32) -> u32 {
        self.wizard
            .draft
            .ticket_types
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.max_per_person)
            .unwrap_or(1)
    }

    /// Apply an edit to the text under the cursor
    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.selected() {
            Some(FormRow::Field(field)) if !field.is_choice() => {
                edit(self.wizard.draft.field_mut(field));
            }
            Some(FormRow::Ticket(id, TicketRow::Text(field))) => {
                let mut value = self.ticket_value(id, field);
                edit(&mut value);
                self.wizard.update_ticket_type(id, field, &value);
            }
            _ => return,
        }
        self.error = None;
    }

    /// Left/right/space on a non-text row
    fn change_value(&mut self, forward: bool) {
        match self.selected() {
            Some(FormRow::Field(field)) if field.is_choice() => {
                self.wizard.draft.cycle_choice(field);
            }
            Some(FormRow::EventType) => {
                self.wizard.draft.event_type = self.wizard.draft.event_type.next();
            }
            Some(FormRow::Ticket(id, TicketRow::MaxPerPerson)) => {
                let current = self.max_per_person(id);
                let max = if forward {
                    current + 1
                } else {
                    current.saturating_sub(1)
                };
                self.wizard.set_max_per_person(id, max);
            }
            Some(FormRow::Ticket(id, TicketRow::Active)) => {
                self.wizard.toggle_ticket_active(id);
            }
            Some(FormRow::RefundPolicy) => {
                let policy = self.wizard.draft.refund_policy;
                self.wizard.draft.refund_policy = if forward { policy.next() } else { policy.prev() };
            }
            Some(FormRow::Transferable) => {
                self.wizard.draft.transferable = !self.wizard.draft.transferable;
            }
            Some(FormRow::ResaleAllowed) => {
                self.wizard.draft.resale_allowed = !self.wizard.draft.resale_allowed;
            }
            _ => {}
        }
    }

    fn selected_ticket_id(&self) -> Option<u32> {
        match self.selected() {
            Some(FormRow::Ticket(id, _)) => Some(id),
            _ => None,
        }
    }

    fn handle_ticket_shortcut(&mut self, c: char) {
        if self.wizard.step != CreateStep::TicketConfiguration {
            return;
        }
        match c {
            'n' => {
                self.wizard.add_ticket_type();
                // Jump to the new type's name row
                let per_ticket = TicketField::all().len() + 2;
                self.selected_row = (self.wizard.draft.ticket_types.len() - 1) * per_ticket;
            }
            'd' => {
                if let Some(id) = self.selected_ticket_id() {
                    self.wizard.remove_ticket_type(id);
                    self.clamp_selection();
                }
            }
            'a' => {
                if let Some(id) = self.selected_ticket_id() {
                    self.wizard.toggle_ticket_active(id);
                }
            }
            _ => {}
        }
    }
}

impl Component for CreateEventComponent {
    /// The form takes every key except the F-key view switches
    fn captures_input(&self) -> bool {
        true
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = key.code {
                if c == 'x' {
                    return Ok(Some(Action::CancelEventDraft));
                }
                self.handle_ticket_shortcut(c);
            }
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Enter if self.wizard.step == CreateStep::Review => Some(Action::PublishEvent),
            KeyCode::Enter => {
                self.advance();
                None
            }
            KeyCode::Esc if self.wizard.step == CreateStep::BasicInfo => {
                Some(Action::SetView(View::Home))
            }
            KeyCode::Esc => {
                self.back();
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::Left => {
                self.change_value(false);
                None
            }
            KeyCode::Right => {
                self.change_value(true);
                None
            }
            KeyCode::Backspace => {
                self.edit_text(|value| {
                    value.pop();
                });
                None
            }
            KeyCode::Char(' ')
                if !matches!(
                    self.selected(),
                    Some(FormRow::Field(f)) if !f.is_choice()
                ) && !matches!(self.selected(), Some(FormRow::Ticket(_, TicketRow::Text(_)))) =>
            {
                self.change_value(true);
                None
            }
            KeyCode::Char(c) => {
                self.edit_text(|value| value.push(c));
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::CancelEventDraft {
            self.cancel();
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Progress
                Constraint::Min(8),    // Content
                Constraint::Length(3), // Help
            ])
            .split(area);

        let step = self.wizard.step;
        let mut progress: Vec<Span> = vec![Span::styled(
            format!(" Paso {} de 4: {}   ", step.step_number(), step.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        for s in CreateStep::all() {
            let style = if s == step {
                Style::default().fg(Color::Yellow)
            } else if s.step_number() < step.step_number() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            progress.push(Span::styled(if s.step_number() <= step.step_number() { "●" } else { "○" }, style));
            progress.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(progress)), chunks[0]);

        let (mut lines, selected_line) = match step {
            CreateStep::Review => self.review_lines(),
            _ => self.form_lines(),
        };

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )]));
        }

        let visible = chunks[1].height.saturating_sub(2) as usize;
        let scroll = (selected_line + 2).saturating_sub(visible) as u16;
        let content = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Crear Evento ")
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, chunks[1]);

        let help_text = match step {
            CreateStep::BasicInfo => {
                " ↑/↓  Campo   ←/→  Opción   Enter  Continuar   Esc  Salir   Ctrl+x  Descartar"
            }
            CreateStep::VenueAndDate => {
                " ↑/↓  Campo   Enter  Continuar   Esc  Volver   Ctrl+x  Descartar"
            }
            CreateStep::TicketConfiguration => {
                " ↑/↓  Campo   Ctrl+n  Nueva   Ctrl+d  Quitar   Ctrl+a  Activar   Enter  Continuar   Esc  Volver"
            }
            CreateStep::Review => {
                " ↑/↓  Política   ←/→  Cambiar   Enter  Publicar   Esc  Volver   Ctrl+x  Descartar"
            }
        };
        let readiness = if step == CreateStep::Review {
            Span::raw("")
        } else if self.wizard.can_advance() {
            Span::styled("  ✓ paso completo", Style::default().fg(Color::Green))
        } else {
            Span::styled(
                format!("  faltan {}", self.wizard.missing_fields().len()),
                Style::default().fg(Color::Yellow),
            )
        };
        let help = Paragraph::new(Line::from(vec![
            Span::styled(help_text, Style::default().fg(Color::DarkGray)),
            readiness,
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

impl CreateEventComponent {
    /// Form lines plus the line index of the selected row
    fn form_lines(&self) -> (Vec<Line<'static>>, usize) {
        let mut lines = vec![Line::from("")];
        let mut selected_line = 0;
        let mut current_ticket = None;

        for (i, row) in self.rows().into_iter().enumerate() {
            let selected = i == self.selected_row;

            if let FormRow::Ticket(id, _) = row {
                if current_ticket != Some(id) {
                    current_ticket = Some(id);
                    if i > 0 {
                        lines.push(Line::from(""));
                    }
                    lines.push(Line::from(Span::styled(
                        format!("Tipo de entrada #{}", id),
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
            }

            if selected {
                selected_line = lines.len();
            }
            let (label, value, editable) = self.row_display(row);
            lines.push(field_line(&label, &value, selected, editable));
        }

        if self.wizard.step == CreateStep::TicketConfiguration {
            let draft = &self.wizard.draft;
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "Total: {} entradas   Recaudación estimada: {} ETH",
                    draft.total_tickets_to_sell(),
                    format_amount(draft.estimated_revenue())
                ),
                Style::default().fg(Color::Cyan),
            )));
        }

        (lines, selected_line)
    }

    fn row_display(&self, row: FormRow) -> (String, String, bool) {
        let draft = &self.wizard.draft;
        match row {
            FormRow::Field(field) => {
                let mut label = field.label().to_string();
                if field.is_required() {
                    label.push_str(" *");
                }
                let value = draft.field(field);
                let value = if field.is_choice() {
                    let shown = if value.is_empty() { "-" } else { value };
                    format!("◀ {} ▶", shown)
                } else {
                    value.to_string()
                };
                (label, value, !field.is_choice())
            }
            FormRow::EventType => (
                "Tipo de evento".to_string(),
                format!("◀ {} ▶", draft.event_type.name()),
                false,
            ),
            FormRow::Ticket(id, TicketRow::Text(field)) => {
                (field.label().to_string(), self.ticket_value(id, field), true)
            }
            FormRow::Ticket(id, TicketRow::MaxPerPerson) => (
                "Máximo por persona".to_string(),
                format!("◀ {} ▶", self.max_per_person(id)),
                false,
            ),
            FormRow::Ticket(id, TicketRow::Active) => {
                let active = draft
                    .ticket_types
                    .iter()
                    .find(|t| t.id == id)
                    .is_some_and(|t| t.is_active);
                ("Activa".to_string(), checkbox(active), false)
            }
            FormRow::RefundPolicy => (
                "Política de reembolso".to_string(),
                format!("◀ {} ▶", draft.refund_policy.label()),
                false,
            ),
            FormRow::Transferable => (
                "Tickets transferibles".to_string(),
                checkbox(draft.transferable),
                false,
            ),
            FormRow::ResaleAllowed => (
                "Permitir reventa".to_string(),
                checkbox(draft.resale_allowed),
                false,
            ),
        }
    }

    /// Review summary followed by the policy rows, plus the selected line
    fn review_lines(&self) -> (Vec<Line<'static>>, usize) {
        let draft = &self.wizard.draft;
        let label = |text: &str| {
            Span::styled(
                format!("{:<20}", text),
                Style::default().fg(Color::Cyan),
            )
        };
        let or_dash = |value: &str| {
            if value.trim().is_empty() {
                "-".to_string()
            } else {
                value.to_string()
            }
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Revisa tu evento antes de publicarlo:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![label("Título"), Span::raw(draft.title.clone())]),
            Line::from(vec![label("Artista"), Span::raw(draft.artist.clone())]),
            Line::from(vec![
                label("Categoría"),
                Span::raw(format!("{} · {}", draft.category, draft.event_type.name())),
            ]),
            Line::from(vec![label("Género"), Span::raw(or_dash(&draft.genre))]),
            Line::from(vec![label("Edad"), Span::raw(or_dash(&draft.age_restriction))]),
            Line::from(vec![
                label("Lugar"),
                Span::raw(format!("{}, {}", draft.venue, draft.address)),
            ]),
            Line::from(vec![
                label("Ciudad"),
                Span::raw(format!("{}, {}", draft.city, draft.country)),
            ]),
            Line::from(vec![
                label("Fecha"),
                Span::raw(format!("{} {}", draft.date, draft.time)),
            ]),
            Line::from(vec![label("Puertas"), Span::raw(or_dash(&draft.doors))]),
            Line::from(""),
            Line::from(Span::styled(
                "Entradas:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        for ticket in &draft.ticket_types {
            let status = if ticket.is_active { "" } else { " (inactiva)" };
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(
                    format!("{}{}", or_dash(&ticket.name), status),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(
                        "  {} × {} ETH  (máx. {} por persona)",
                        ticket.parsed_quantity(),
                        or_dash(&ticket.price),
                        ticket.max_per_person
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label("Total de entradas"),
            Span::raw(draft.total_tickets_to_sell().to_string()),
        ]));
        lines.push(Line::from(vec![
            label("Recaudación est."),
            Span::styled(
                format!("{} ETH", format_amount(draft.estimated_revenue())),
                Style::default().fg(Color::Green),
            ),
        ]));
        if let Some(percent) = draft.capacity_usage_percent() {
            lines.push(Line::from(vec![
                label("Uso de capacidad"),
                Span::raw(format!("{}%", percent)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Políticas del evento:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let mut selected_line = 0;
        for (i, row) in self.rows().into_iter().enumerate() {
            let selected = i == self.selected_row;
            if selected {
                selected_line = lines.len();
            }
            let (label, value, editable) = self.row_display(row);
            lines.push(field_line(&label, &value, selected, editable));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Presiona Enter para publicar...",
            Style::default().fg(Color::Yellow),
        )));
        (lines, selected_line)
    }
}

fn checkbox(checked: bool) -> String {
    if checked { "[x]" } else { "[ ]" }.to_string()
}

fn field_line(label: &str, value: &str, selected: bool, editable: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let value = if selected && editable {
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
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(value, value_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::creation::RefundPolicy;

    fn press(comp: &mut CreateEventComponent, code: KeyCode) -> Option<Action> {
        comp.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    fn ctrl(comp: &mut CreateEventComponent, c: char) -> Option<Action> {
        comp.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap()
    }

    fn type_text(comp: &mut CreateEventComponent, text: &str) {
        for c in text.chars() {
            press(comp, KeyCode::Char(c));
        }
    }

    fn fill_basic(comp: &mut CreateEventComponent) {
        type_text(comp, "Noche de Jazz");
        press(comp, KeyCode::Down);
        type_text(comp, "Trío Sur");
        press(comp, KeyCode::Down);
        press(comp, KeyCode::Down);
        press(comp, KeyCode::Right);
    }

    #[test]
    fn test_basic_rows_include_event_type_after_category() {
        let comp = CreateEventComponent::new();
        let rows = comp.rows();
        assert_eq!(rows[3], FormRow::Field(DraftField::Category));
        assert_eq!(rows[4], FormRow::EventType);
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn test_typing_and_choice_cycling() {
        let mut comp = CreateEventComponent::new();
        fill_basic(&mut comp);
        assert_eq!(comp.wizard.draft.title, "Noche de Jazz");
        assert_eq!(comp.wizard.draft.artist, "Trío Sur");
        assert_eq!(comp.wizard.draft.category, "Música");
    }

    #[test]
    fn test_enter_with_missing_fields_shows_error() {
        let mut comp = CreateEventComponent::new();
        press(&mut comp, KeyCode::Enter);
        assert_eq!(comp.wizard.step, CreateStep::BasicInfo);
        assert!(comp.error.as_deref().unwrap().contains("título"));

        fill_basic(&mut comp);
        assert!(comp.error.is_none());
        press(&mut comp, KeyCode::Enter);
        assert_eq!(comp.wizard.step, CreateStep::VenueAndDate);
    }

    #[test]
    fn test_esc_on_first_step_leaves_view() {
        let mut comp = CreateEventComponent::new();
        assert_eq!(
            press(&mut comp, KeyCode::Esc),
            Some(Action::SetView(View::Home))
        );
    }

    #[test]
    fn test_ctrl_x_requests_cancel() {
        let mut comp = CreateEventComponent::new();
        type_text(&mut comp, "Borrador");
        assert_eq!(ctrl(&mut comp, 'x'), Some(Action::CancelEventDraft));
        comp.update(Action::CancelEventDraft).unwrap();
        assert!(comp.wizard.draft.title.is_empty());
    }

    #[test]
    fn test_ticket_step_add_edit_and_remove() {
        let mut comp = CreateEventComponent::new();
        comp.wizard.step = CreateStep::TicketConfiguration;
        assert_eq!(comp.rows().len(), 6);

        ctrl(&mut comp, 'n');
        assert_eq!(comp.wizard.draft.ticket_types.len(), 2);
        assert_eq!(comp.selected(), Some(FormRow::Ticket(2, TicketRow::Text(TicketField::Name))));

        type_text(&mut comp, "VIP");
        assert_eq!(comp.wizard.draft.ticket_types[1].name, "VIP");

        ctrl(&mut comp, 'd');
        assert_eq!(comp.wizard.draft.ticket_types.len(), 1);
        assert!(comp.selected_row < comp.rows().len());
    }

    #[test]
    fn test_space_toggles_active_row() {
        let mut comp = CreateEventComponent::new();
        comp.wizard.step = CreateStep::TicketConfiguration;
        comp.selected_row = 5;
        assert_eq!(comp.selected(), Some(FormRow::Ticket(1, TicketRow::Active)));

        press(&mut comp, KeyCode::Char(' '));
        assert!(!comp.wizard.draft.ticket_types[0].is_active);
    }

    #[test]
    fn test_enter_on_review_requests_publish() {
        let mut comp = CreateEventComponent::new();
        comp.wizard.step = CreateStep::Review;
        comp.wizard.draft.title = "Noche de Jazz".to_string();
        assert_eq!(press(&mut comp, KeyCode::Enter), Some(Action::PublishEvent));

        let receipt = comp.publish().unwrap();
        assert_eq!(receipt.title, "Noche de Jazz");
        assert_eq!(comp.wizard.step, CreateStep::BasicInfo);
    }

    #[test]
    fn test_review_policy_rows() {
        let mut comp = CreateEventComponent::new();
        comp.wizard.step = CreateStep::Review;
        assert_eq!(
            comp.rows(),
            vec![
                FormRow::RefundPolicy,
                FormRow::Transferable,
                FormRow::ResaleAllowed,
                FormRow::Field(DraftField::Terms),
            ]
        );

        press(&mut comp, KeyCode::Right);
        assert_eq!(comp.wizard.draft.refund_policy, RefundPolicy::PartialRefund);
        press(&mut comp, KeyCode::Left);
        press(&mut comp, KeyCode::Left);
        assert_eq!(comp.wizard.draft.refund_policy, RefundPolicy::FullRefund);

        press(&mut comp, KeyCode::Down);
        press(&mut comp, KeyCode::Char(' '));
        assert!(!comp.wizard.draft.transferable);
        press(&mut comp, KeyCode::Down);
        press(&mut comp, KeyCode::Char(' '));
        assert!(!comp.wizard.draft.resale_allowed);

        press(&mut comp, KeyCode::Down);
        type_text(&mut comp, "Sin reingreso");
        assert_eq!(comp.wizard.draft.terms, "Sin reingreso");
        assert!(comp.wizard.has_changes());
        assert_eq!(press(&mut comp, KeyCode::Enter), Some(Action::PublishEvent));
    }

    #[test]
    fn test_review_lines_show_policies() {
        let mut comp = CreateEventComponent::new();
        comp.wizard.step = CreateStep::Review;
        comp.selected_row = 3;
        let (lines, selected_line) = comp.review_lines();
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Sin reembolso")));
        assert!(text.iter().any(|l| l.contains("Permitir reventa") && l.contains("[x]")));
        assert!(text[selected_line].contains("Términos adicionales"));
    }
}
