//! Events component - the catalog browser
//!
//! Displays the search bar, the filtered event list and the detail panel of
//! the selected event. Owns the query, the filter options and the list
//! navigation state; the filtered list itself is derived on every use.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::split_list_detail;
use crate::components::text::{highlight_matches, pad_to_width, truncate_to_width};
use crate::model::checkout::TicketTier;
use crate::model::event::Event;
use crate::model::favorites::Favorites;
use crate::model::filter::{FilterOptions, SavedSearch};
use crate::services::image_loader::{ImageLoader, ImageState, VisibleSet, PLACEHOLDER_TEXT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const DATE_COLUMN: usize = 10;
const PRICE_COLUMN: usize = 12;

// ═══════════════════════════════════════════════════════════════════════════════
// Events Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct EventsComponent {
    pub list_state: ListState,

    pub search_query: String,

    /// Whether keystrokes go to the search bar
    pub search_mode: bool,

    pub options: FilterOptions,

    /// Image URLs of the rows drawn in the last frame
    pub visible: VisibleSet,
}

impl Default for EventsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            search_query: String::new(),
            search_mode: false,
            options: FilterOptions::default(),
            visible: VisibleSet::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_event<'a>(&self, results: &[&'a Event]) -> Option<&'a Event> {
        results.get(self.list_state.selected()?).copied()
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self, len: usize) {
        self.list_state.select(if len == 0 { None } else { Some(0) });
        *self.list_state.offset_mut() = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.list_state.select(len.checked_sub(1));
    }

    /// Keep the selection inside a result list that may have shrunk
    pub fn clamp_selection(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char) {
        self.search_query.push(c);
        self.select_first(1);
    }

    pub fn search_backspace(&mut self) {
        self.search_query.pop();
        self.select_first(1);
    }

    /// Replace the query with a suggestion's title
    pub fn accept_suggestion(&mut self, suggestion: &Event) {
        self.search_query = suggestion.title.clone();
        self.search_mode = false;
        self.select_first(1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn cycle_sort(&mut self) {
        self.options.sort = self.options.sort.next();
        self.select_first(1);
    }

    pub fn toggle_favorites_only(&mut self) {
        self.options.favorites_only = !self.options.favorites_only;
        self.select_first(1);
    }

    pub fn set_options(&mut self, options: FilterOptions) {
        self.options = options;
        self.select_first(1);
    }

    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.options.clear();
        self.select_first(1);
    }

    /// Replace query and filters with a preset
    pub fn apply_saved_search(&mut self, search: &SavedSearch) {
        self.search_query = search.query.clone();
        self.options = search.options.clone();
        self.select_first(1);
    }
}

impl Component for EventsComponent {
    fn captures_input(&self) -> bool {
        self.search_mode
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Enter => Some(Action::OpenCheckout),

            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('f') => Some(Action::OpenFilterDialog),
            KeyCode::Char('s') => Some(Action::CycleSort),
            KeyCode::Char('*') => Some(Action::ToggleFavorite),
            KeyCode::Char('F') => Some(Action::ToggleFavoritesOnly),
            KeyCode::Char('x') => Some(Action::ClearFilters),
            KeyCode::Char('S') => Some(Action::OpenSaveSearch),
            KeyCode::Char(c @ '1'..='9') => {
                c.to_digit(10).map(|d| Action::ApplySavedSearch(d as usize - 1))
            }
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

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the events screen
pub struct EventsRenderContext<'a> {
    /// Filtered and sorted events
    pub results: &'a [&'a Event],
    pub catalog_len: usize,
    pub suggestions: &'a [&'a Event],
    pub favorites: &'a Favorites,
    pub saved_searches: &'a [SavedSearch],
    pub images: &'a ImageLoader,
}

pub fn draw_events_screen(
    frame: &mut Frame,
    area: Rect,
    events: &mut EventsComponent,
    ctx: &EventsRenderContext,
) -> Result<()> {
    let (left, right) = split_list_detail(area, 50);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(left);

    render_search_bar(frame, left_chunks[0], events);
    render_filter_summary(frame, left_chunks[1], events, ctx);
    render_event_list(frame, left_chunks[2], events, ctx);

    let selected = events.selected_event(ctx.results);
    render_event_detail(frame, right, selected, ctx);

    if events.search_mode && !ctx.suggestions.is_empty() {
        render_suggestions(frame, left_chunks[2], ctx.suggestions);
    }

    Ok(())
}

fn render_search_bar(frame: &mut Frame, area: Rect, events: &EventsComponent) {
    let (border, text) = if events.search_mode {
        (Color::Cyan, format!("{}_", events.search_query))
    } else if events.search_query.is_empty() {
        (Color::DarkGray, "Buscar eventos, artistas, lugares...".to_string())
    } else {
        (Color::DarkGray, events.search_query.clone())
    };

    let text_style = if events.search_query.is_empty() && !events.search_mode {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("🔍 ", Style::default().fg(Color::Cyan)),
        Span::styled(text, text_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Buscar "),
    );
    frame.render_widget(paragraph, area);
}

fn render_filter_summary(
    frame: &mut Frame,
    area: Rect,
    events: &EventsComponent,
    ctx: &EventsRenderContext,
) {
    let mut spans = vec![
        Span::styled(" Orden: ", Style::default().fg(Color::DarkGray)),
        Span::styled(events.options.sort.name(), Style::default().fg(Color::Cyan)),
    ];

    let active = events.options.active_count();
    if active > 0 {
        spans.push(Span::styled(
            format!("  {} filtro(s)", active),
            Style::default().fg(Color::Yellow),
        ));
    }
    if events.options.favorites_only {
        spans.push(Span::styled("  ★ favoritos", Style::default().fg(Color::Yellow)));
    }

    if !ctx.saved_searches.is_empty() {
        spans.push(Span::styled("  │", Style::default().fg(Color::DarkGray)));
        for (i, search) in ctx.saved_searches.iter().enumerate().take(9) {
            spans.push(Span::styled(
                format!(" {}", i + 1),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", search.name),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_event_list(
    frame: &mut Frame,
    area: Rect,
    events: &mut EventsComponent,
    ctx: &EventsRenderContext,
) {
    let inner_width = area.width.saturating_sub(4) as usize;
    // star + gaps
    let title_width = inner_width.saturating_sub(DATE_COLUMN + PRICE_COLUMN + 4);

    let items: Vec<ListItem> = ctx
        .results
        .iter()
        .map(|event| {
            let is_favorite = ctx.favorites.contains(event.id);
            let star = if is_favorite { "★ " } else { "  " };

            let title = pad_to_width(&truncate_to_width(&event.title, title_width), title_width);
            let mut spans = vec![Span::styled(star, Style::default().fg(Color::Yellow))];
            spans.extend(highlight_matches(
                &title,
                &events.search_query,
                Style::default().fg(Color::White),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {:>width$}", event.formatted_date(), width = DATE_COLUMN),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!(" {:>width$}", event.formatted_price(), width = PRICE_COLUMN),
                Style::default().fg(Color::Green),
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Eventos ({}/{}) ", ctx.results.len(), ctx.catalog_len);
    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Line::from(Span::styled(
            "  No hay eventos que coincidan. Presiona x para limpiar.",
            Style::default().fg(Color::DarkGray),
        )))])
    } else {
        List::new(items)
    };

    let list = list
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut events.list_state);

    // Rows on screen drive the deferred image fetches
    let rows = area.height.saturating_sub(2) as usize;
    let offset = events.list_state.offset();
    events.visible.clear();
    for event in ctx.results.iter().skip(offset).take(rows) {
        events.visible.insert(event.image.clone());
    }
}

fn render_event_detail(
    frame: &mut Frame,
    area: Rect,
    event: Option<&Event>,
    ctx: &EventsRenderContext,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Detalle ")
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(event) = event else {
        frame.render_widget(
            Paragraph::new("Selecciona un evento").block(block),
            area,
        );
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", event.icon()), Style::default().fg(Color::Yellow)),
            Span::styled(
                event.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            if ctx.favorites.contains(event.id) {
                Span::styled("  ★", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("")
            },
        ]),
        Line::from(Span::styled(event.artist.clone(), Style::default().fg(Color::Magenta))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Fecha:   ", label),
            Span::raw(format!("{} · {}", event.formatted_date(), event.time)),
        ]),
        Line::from(vec![
            Span::styled("Lugar:   ", label),
            Span::raw(format!("{}, {}, {}", event.venue, event.city, event.country)),
        ]),
        Line::from(vec![
            Span::styled("Género:  ", label),
            Span::raw(format!("{} · {}", event.category, event.genre)),
        ]),
        Line::from(vec![
            Span::styled("Quedan:  ", label),
            Span::raw(format!(
                "{} entradas ({})",
                event.available,
                event.availability_level().name()
            )),
        ]),
        Line::from(vec![
            Span::styled("Imagen:  ", label),
            image_status(ctx.images, &event.image),
        ]),
        Line::from(""),
    ];

    lines.push(Line::from(Span::styled(
        "Entradas",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for tier in TicketTier::all() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", tier.name()), Style::default().fg(Color::White)),
            Span::styled(
                format!(
                    "{} {}",
                    crate::model::event::format_amount(tier.price_for(event)),
                    event.currency
                ),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::raw(event.description.clone())));

    if !event.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(
            event
                .tags
                .iter()
                .map(|t| Span::styled(format!("#{} ", t), Style::default().fg(Color::Blue)))
                .collect::<Vec<_>>(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn image_status(images: &ImageLoader, url: &str) -> Span<'static> {
    match images.state(url) {
        None | Some(ImageState::Deferred) => {
            Span::styled("en espera", Style::default().fg(Color::DarkGray))
        }
        Some(ImageState::Pending) => {
            Span::styled("cargando...", Style::default().fg(Color::Yellow))
        }
        Some(ImageState::Loaded(info)) => {
            Span::styled(info.summary(), Style::default().fg(Color::Green))
        }
        Some(ImageState::Failed(_)) => {
            Span::styled(PLACEHOLDER_TEXT, Style::default().fg(Color::Red))
        }
    }
}

fn render_suggestions(frame: &mut Frame, list_area: Rect, suggestions: &[&Event]) {
    let height = (suggestions.len() as u16 + 2).min(list_area.height);
    let area = Rect::new(list_area.x + 2, list_area.y, list_area.width.saturating_sub(4), height);
    frame.render_widget(Clear, area);

    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = suggestions
        .iter()
        .map(|event| {
            let text = format!("{} · {} · {}", event.title, event.artist, event.city);
            Line::from(Span::styled(
                truncate_to_width(&text, width),
                Style::default().fg(Color::White),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Sugerencias (Tab) "),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::tests::create_test_event;
    use crate::model::filter::SortKey;

    #[test]
    fn test_navigation_wraps() {
        let mut events = EventsComponent::new();
        events.next(3);
        events.next(3);
        assert_eq!(events.selected_index(), Some(2));
        events.next(3);
        assert_eq!(events.selected_index(), Some(0));
        events.previous(3);
        assert_eq!(events.selected_index(), Some(2));
    }

    #[test]
    fn test_empty_results_clear_selection() {
        let mut events = EventsComponent::new();
        events.clamp_selection(0);
        assert_eq!(events.selected_index(), None);
        events.clamp_selection(4);
        assert_eq!(events.selected_index(), Some(0));
    }

    #[test]
    fn test_clamp_after_results_shrink() {
        let mut events = EventsComponent::new();
        events.select_last(10);
        events.clamp_selection(3);
        assert_eq!(events.selected_index(), Some(2));
    }

    #[test]
    fn test_selected_event() {
        let a = create_test_event(1, "A", 0.1, "2025-03-01");
        let b = create_test_event(2, "B", 0.1, "2025-03-02");
        let results = vec![&a, &b];

        let mut events = EventsComponent::new();
        events.next(results.len());
        assert_eq!(events.selected_event(&results).map(|e| e.id), Some(2));
    }

    #[test]
    fn test_search_editing_resets_selection() {
        let mut events = EventsComponent::new();
        events.select_last(5);
        events.search_input('t');
        events.search_input('a');
        assert_eq!(events.search_query, "ta");
        assert_eq!(events.selected_index(), Some(0));
        events.search_backspace();
        assert_eq!(events.search_query, "t");
    }

    #[test]
    fn test_accept_suggestion_fills_query() {
        let event = create_test_event(7, "Noche de Tango", 0.1, "2025-03-01");
        let mut events = EventsComponent::new();
        events.enter_search_mode();
        events.accept_suggestion(&event);
        assert_eq!(events.search_query, "Noche de Tango");
        assert!(!events.search_mode);
    }

    #[test]
    fn test_clear_filters_resets_everything() {
        let mut events = EventsComponent::new();
        events.search_query = "rock".to_string();
        events.cycle_sort();
        events.toggle_favorites_only();

        events.clear_filters();
        assert!(events.search_query.is_empty());
        assert_eq!(events.options, FilterOptions::default());
        assert_eq!(events.options.sort, SortKey::Date);
    }

    #[test]
    fn test_saved_search_replaces_options() {
        let mut events = EventsComponent::new();
        events.toggle_favorites_only();

        let mut options = FilterOptions::default();
        options.toggle_category("Festival");
        let preset = SavedSearch {
            id: 9,
            name: "Festivales".to_string(),
            query: "verano".to_string(),
            options: options.clone(),
        };

        events.apply_saved_search(&preset);
        assert_eq!(events.search_query, "verano");
        assert_eq!(events.options, options);
        assert!(!events.options.favorites_only);
    }

    #[test]
    fn test_digit_keys_map_to_saved_searches() {
        let mut events = EventsComponent::new();
        let action = events
            .handle_key_event(KeyEvent::from(KeyCode::Char('2')))
            .unwrap();
        assert_eq!(action, Some(Action::ApplySavedSearch(1)));
    }
}
