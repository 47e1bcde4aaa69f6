//! Filter dialog component
//!
//! Edits a working copy of the filter options; Enter applies it to the
//! events list, Esc throws it away.

use crate::action::Action;
use crate::component::Component;
use crate::model::event::format_amount;
use crate::model::filter::{DateRange, FilterOptions, DEFAULT_PRICE_RANGE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Price bands offered by the dialog, in the catalog currency
const PRICE_PRESETS: &[(f64, f64)] = &[
    DEFAULT_PRICE_RANGE,
    (0.0, 0.03),
    (0.03, 0.06),
    (0.06, 0.1),
    (0.1, 0.25),
];

/// One editable row of the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    Sort,
    DateRange,
    Price,
    Availability,
    TimeOfDay,
    VenueKind,
    Location,
    FavoritesOnly,
    Category(String),
    Genre(String),
}

pub struct FilterDialog {
    /// Working copy, applied on confirm
    pub options: FilterOptions,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for FilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            options: FilterOptions::default(),
            categories: Vec::new(),
            genres: Vec::new(),
            selected_index: 0,
            list_state,
        }
    }

    /// Load the current options and the values to offer
    pub fn open(&mut self, options: &FilterOptions, categories: Vec<String>, genres: Vec<String>) {
        self.options = options.clone();
        self.categories = categories;
        self.genres = genres;
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn rows(&self) -> Vec<FilterRow> {
        let mut rows = vec![
            FilterRow::Sort,
            FilterRow::DateRange,
            FilterRow::Price,
            FilterRow::Availability,
            FilterRow::TimeOfDay,
            FilterRow::VenueKind,
            FilterRow::Location,
            FilterRow::FavoritesOnly,
        ];
        rows.extend(self.categories.iter().cloned().map(FilterRow::Category));
        rows.extend(self.genres.iter().cloned().map(FilterRow::Genre));
        rows
    }

    pub fn selected_row(&self) -> Option<FilterRow> {
        self.rows().get(self.selected_index).cloned()
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.rows().len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Cycle or toggle the value of the selected row
    pub fn activate(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let options = &mut self.options;
        match row {
            FilterRow::Sort => options.sort = options.sort.next(),
            FilterRow::DateRange => options.date_range = DateRange::cycle(options.date_range),
            FilterRow::Price => options.price_range = next_price_preset(options.price_range),
            FilterRow::Availability => options.availability = options.availability.next(),
            FilterRow::TimeOfDay => options.time_of_day = options.time_of_day.next(),
            FilterRow::VenueKind => options.venue_kind = options.venue_kind.next(),
            FilterRow::Location => {}
            FilterRow::FavoritesOnly => options.favorites_only = !options.favorites_only,
            FilterRow::Category(category) => options.toggle_category(&category),
            FilterRow::Genre(genre) => options.toggle_genre(&genre),
        }
    }

    fn row_value(&self, row: &FilterRow) -> String {
        let options = &self.options;
        match row {
            FilterRow::Sort => options.sort.name().to_string(),
            FilterRow::DateRange => options
                .date_range
                .map(|r| r.name().to_string())
                .unwrap_or_else(|| "Cualquier fecha".to_string()),
            FilterRow::Price => price_label(options.price_range),
            FilterRow::Availability => options.availability.name().to_string(),
            FilterRow::TimeOfDay => options.time_of_day.name().to_string(),
            FilterRow::VenueKind => options.venue_kind.name().to_string(),
            FilterRow::Location => {
                if self.selected_row().as_ref() == Some(row) {
                    format!("{}_", options.location)
                } else if options.location.is_empty() {
                    "Cualquier lugar".to_string()
                } else {
                    options.location.clone()
                }
            }
            FilterRow::FavoritesOnly => checkbox(options.favorites_only).to_string(),
            FilterRow::Category(category) => {
                checkbox(options.categories.contains(category)).to_string()
            }
            FilterRow::Genre(genre) => checkbox(options.genres.contains(genre)).to_string(),
        }
    }
}

fn row_label(row: &FilterRow) -> String {
    match row {
        FilterRow::Sort => "Ordenar por".to_string(),
        FilterRow::DateRange => "Fecha".to_string(),
        FilterRow::Price => "Precio".to_string(),
        FilterRow::Availability => "Disponibilidad".to_string(),
        FilterRow::TimeOfDay => "Horario".to_string(),
        FilterRow::VenueKind => "Tipo de lugar".to_string(),
        FilterRow::Location => "Ubicación".to_string(),
        FilterRow::FavoritesOnly => "Solo favoritos".to_string(),
        FilterRow::Category(category) => format!("Categoría: {}", category),
        FilterRow::Genre(genre) => format!("Género: {}", genre),
    }
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn next_price_preset(current: (f64, f64)) -> (f64, f64) {
    match PRICE_PRESETS.iter().position(|p| *p == current) {
        Some(i) => PRICE_PRESETS[(i + 1) % PRICE_PRESETS.len()],
        None => PRICE_PRESETS[0],
    }
}

fn price_label(range: (f64, f64)) -> String {
    if range == DEFAULT_PRICE_RANGE {
        "Todos los precios".to_string()
    } else {
        format!("{} - {} ETH", format_amount(range.0), format_amount(range.1))
    }
}

impl Component for FilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let on_location = self.selected_row() == Some(FilterRow::Location);

        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Up => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::Backspace if on_location => {
                self.options.location.pop();
                None
            }
            KeyCode::Char(c) if on_location => {
                self.options.location.push(c);
                None
            }
            KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                self.activate();
                None
            }
            KeyCode::Char('x') => {
                self.options.clear();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let rows = self.rows();
        let popup_width = 60u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 8).min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Rows
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let active = self.options.active_count();
        let header_text = if active == 0 {
            "Sin filtros activos".to_string()
        } else {
            format!("{} filtro(s) activo(s)", active)
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filtros ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let label_width = 28usize;
        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let value = self.row_value(row);
                let value_style = if value.starts_with("[x]") {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", row_label(row), width = label_width),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(value, value_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Aplicar  "),
            Span::styled(" Space ", Style::default().fg(Color::Cyan)),
            Span::raw("Cambiar  "),
            Span::styled(" x ", Style::default().fg(Color::Cyan)),
            Span::raw("Limpiar  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancelar"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::SortKey;

    fn dialog() -> FilterDialog {
        let mut dialog = FilterDialog::new();
        dialog.open(
            &FilterOptions::default(),
            vec!["Concierto".to_string(), "Festival".to_string()],
            vec!["Tango".to_string()],
        );
        dialog
    }

    fn press(dialog: &mut FilterDialog, code: KeyCode) -> Option<Action> {
        dialog.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    #[test]
    fn test_rows_include_categories_and_genres() {
        let rows = dialog().rows();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[8], FilterRow::Category("Concierto".to_string()));
        assert_eq!(rows[10], FilterRow::Genre("Tango".to_string()));
    }

    #[test]
    fn test_space_cycles_sort() {
        let mut dialog = dialog();
        press(&mut dialog, KeyCode::Char(' '));
        assert_eq!(dialog.options.sort, SortKey::PriceLow);
    }

    #[test]
    fn test_toggle_category_row() {
        let mut dialog = dialog();
        for _ in 0..8 {
            press(&mut dialog, KeyCode::Down);
        }
        press(&mut dialog, KeyCode::Char(' '));
        assert!(dialog.options.categories.contains("Concierto"));
        assert_eq!(dialog.options.active_count(), 1);
    }

    #[test]
    fn test_location_row_takes_text() {
        let mut dialog = dialog();
        for _ in 0..6 {
            press(&mut dialog, KeyCode::Down);
        }
        assert_eq!(dialog.selected_row(), Some(FilterRow::Location));
        press(&mut dialog, KeyCode::Char('j'));
        press(&mut dialog, KeyCode::Char('u'));
        press(&mut dialog, KeyCode::Backspace);
        assert_eq!(dialog.options.location, "j");
    }

    #[test]
    fn test_price_presets_cycle_back_to_default() {
        let mut range = DEFAULT_PRICE_RANGE;
        for _ in 0..PRICE_PRESETS.len() {
            range = next_price_preset(range);
        }
        assert_eq!(range, DEFAULT_PRICE_RANGE);
        assert_eq!(next_price_preset((0.0, 0.05)), DEFAULT_PRICE_RANGE);
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(DEFAULT_PRICE_RANGE), "Todos los precios");
        assert_eq!(price_label((0.03, 0.06)), "0.03 - 0.06 ETH");
        assert!(PRICE_PRESETS.iter().all(|p| price_label(*p).is_ascii()));
    }

    #[test]
    fn test_confirm_and_cancel_actions() {
        let mut dialog = dialog();
        assert_eq!(press(&mut dialog, KeyCode::Enter), Some(Action::ConfirmModal));
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
    }
}
