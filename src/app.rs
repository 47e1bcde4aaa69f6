//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It routes actions between views and owns the services; the business
//! rules live in `model`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, centered_popup, draw_dashboard_screen, draw_events_screen,
    draw_home_screen, draw_tickets_screen, shell, CheckoutDialog, CreateEventComponent,
    DashboardComponent, DashboardRenderContext, EventsComponent, EventsRenderContext,
    FilterDialog, HelpDialog, HomeComponent, HomeRenderContext, QuitDialog, SplashComponent,
    TicketsComponent,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::event::{format_amount, Event};
use crate::model::filter::{
    all_categories, all_genres, filter_events, save_search, search_suggestions,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::model::{Favorites, View};
use crate::services::{
    HttpFetcher, ImageLoader, ImageState, JsonFileStore, KeyValueStore, MemoryStore,
    StaticProbe,
};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// View shown in the body, selected in the tab bar
    pub view: View,

    /// Domain state (business data)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    pub config: Config,

    /// Backing store for favorites
    store: Box<dyn KeyValueStore>,

    /// Background artwork fetches
    pub images: ImageLoader,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub events: EventsComponent,
    pub tickets: TicketsComponent,
    pub dashboard: DashboardComponent,
    pub create_event: CreateEventComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub filter_dialog: FilterDialog,
    pub checkout_dialog: CheckoutDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app with the on-disk store and the HTTP image fetcher
    pub fn new(config: Config) -> App {
        let store: Box<dyn KeyValueStore> = match JsonFileStore::open_default() {
            Ok(store) => {
                tracing::info!("Using storage at {}", store.path().display());
                Box::new(store)
            }
            Err(e) => {
                tracing::warn!("Favorites will not persist: {}", e);
                Box::new(MemoryStore::new())
            }
        };

        let images = match (config.fetch_images, HttpFetcher::new()) {
            (true, Ok(fetcher)) => ImageLoader::new(
                Arc::new(fetcher),
                Box::new(StaticProbe {
                    webp: config.prefer_webp,
                }),
            ),
            (true, Err(e)) => {
                tracing::warn!("Images disabled: {}", e);
                ImageLoader::disabled()
            }
            (false, _) => ImageLoader::disabled(),
        };

        let mut app = Self::with_services(config, store, images);
        app.images
            .preload(app.domain.events.iter().map(|e| e.image.as_str()));
        app
    }

    /// Create the app around the given store and image loader
    pub fn with_services(config: Config, store: Box<dyn KeyValueStore>, images: ImageLoader) -> App {
        let favorites = Favorites::load(store.as_ref());
        let domain = DomainState::new(favorites);
        let mut splash = SplashComponent::new();
        splash.summary = format!(
            "{} eventos en {} ciudades · {}",
            domain.events.len(),
            domain.city_count(),
            config.network
        );

        App {
            mode: AppMode::Splash,
            view: View::default(),
            domain,
            modals: ModalStack::new(),
            config,
            store,
            images,
            should_quit: false,
            error: None,
            status_message: None,
            splash,
            home: HomeComponent::new(),
            events: EventsComponent::new(),
            tickets: TicketsComponent::new(),
            dashboard: DashboardComponent::new(),
            create_event: CreateEventComponent::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            filter_dialog: FilterDialog::new(),
            checkout_dialog: CheckoutDialog::new(),
        }
    }

    /// Filtered, sorted catalog for the events view
    pub fn event_results(&self) -> Vec<&Event> {
        catalog_results(&self.domain, &self.events)
    }

    /// The event under the cursor in the current view
    pub fn selected_event_id(&self) -> Option<u32> {
        match self.view {
            View::Home => self.home.selected_event(&self.domain.events).map(|e| e.id),
            View::Events => self
                .events
                .selected_event(&self.event_results())
                .map(|e| e.id),
            View::Dashboard => self
                .dashboard
                .selected_favorite(&self.domain.favorite_events())
                .map(|e| e.id),
            View::MyTickets | View::CreateEvent => None,
        }
    }

    fn view_component(&mut self) -> &mut dyn Component {
        match self.view {
            View::Home => &mut self.home,
            View::Events => &mut self.events,
            View::MyTickets => &mut self.tickets,
            View::Dashboard => &mut self.dashboard,
            View::CreateEvent => &mut self.create_event,
        }
    }

    fn set_view(&mut self, view: View) {
        if self.view != view {
            tracing::info!(from = self.view.name(), to = view.name(), "View changed");
        }
        self.view = view;
        self.events.exit_search_mode();
    }

    fn move_selection(&mut self, action: &Action) {
        match self.view {
            View::Home => match action {
                Action::NextItem | Action::LastItem => self.home.next(self.domain.events.len()),
                _ => self.home.previous(),
            },
            View::Events => {
                let len = self.event_results().len();
                match action {
                    Action::NextItem => self.events.next(len),
                    Action::PrevItem => self.events.previous(len),
                    Action::FirstItem => self.events.select_first(len),
                    _ => self.events.select_last(len),
                }
            }
            View::MyTickets => {
                let len = self.tickets.visible(&self.domain.owned_tickets).len();
                match action {
                    Action::NextItem => self.tickets.next(len),
                    Action::PrevItem => self.tickets.previous(),
                    Action::FirstItem => self.tickets.select_first(),
                    _ => self.tickets.select_last(len),
                }
            }
            View::Dashboard => {
                let len = self.domain.favorite_events().len();
                match action {
                    Action::NextItem | Action::LastItem => self.dashboard.next(len),
                    _ => self.dashboard.previous(),
                }
            }
            View::CreateEvent => {}
        }
    }

    /// Keep list cursors inside lists that may have shrunk
    fn clamp_selections(&mut self) {
        let results = self.event_results().len();
        self.events.clamp_selection(results);
        let favorites = self.domain.favorite_events().len();
        self.dashboard.clamp_selection(favorites);
    }

    fn toggle_favorite(&mut self) {
        let Some(id) = self.selected_event_id() else {
            return;
        };
        let title = self
            .domain
            .event(id)
            .map(|e| e.title.clone())
            .unwrap_or_default();

        match self.domain.favorites.toggle(id, self.store.as_mut()) {
            Ok(true) => self.status_message = Some(format!("★ {} agregado a favoritos", title)),
            Ok(false) => self.status_message = Some(format!("{} quitado de favoritos", title)),
            Err(e) => {
                tracing::warn!("Could not persist favorites: {}", e);
                self.error = Some(format!("No se pudieron guardar los favoritos: {}", e));
            }
        }
        self.clamp_selections();
    }

    fn open_checkout(&mut self) {
        let Some(event) = self
            .selected_event_id()
            .and_then(|id| self.domain.event(id))
            .cloned()
        else {
            return;
        };

        if event.available == 0 {
            self.status_message = Some(format!("{} está agotado", event.title));
            return;
        }
        self.checkout_dialog.open(event);
        self.modals.push(Modal::Checkout);
    }
}

/// Filter the catalog by the events view's query and options
fn catalog_results<'a>(domain: &'a DomainState, events: &EventsComponent) -> Vec<&'a Event> {
    filter_events(
        &domain.events,
        &events.search_query,
        &events.options,
        domain.favorites.ids(),
        Local::now().date_naive(),
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                self.error = None;
                self.status_message = None;

                if let Some(modal) = self.modals.top().cloned() {
                    return self.handle_modal_key_event(&modal, key);
                }

                if let KeyCode::F(n) = key.code {
                    let view = (n as usize).checked_sub(1).and_then(View::from_index);
                    return Ok(view.map(Action::SetView));
                }

                if self.view_component().captures_input() {
                    return match self.view {
                        View::Events => self.handle_search_key_event(key),
                        _ => self.view_component().handle_key_event(key),
                    };
                }

                match key.code {
                    KeyCode::Char('q') => Ok(Some(Action::OpenQuitDialog)),
                    KeyCode::Char('?') => Ok(Some(Action::OpenHelp)),
                    KeyCode::Tab => Ok(Some(Action::NextView)),
                    KeyCode::BackTab => Ok(Some(Action::PrevView)),
                    _ => self.view_component().handle_key_event(key),
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || !self.modals.is_empty() {
            return Ok(None);
        }
        self.view_component().handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                self.images.poll();
                if self.view == View::Events {
                    let urls: Vec<String> = self
                        .events
                        .visible
                        .iter()
                        .filter(|url| !self.images.state(url).is_some_and(ImageState::is_settled))
                        .map(str::to_string)
                        .collect();
                    for url in &urls {
                        self.images.request(url, false, &self.events.visible);
                    }
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem | Action::PrevItem | Action::FirstItem | Action::LastItem => {
                self.move_selection(&action);
            }
            Action::NextView => self.set_view(self.view.next()),
            Action::PrevView => self.set_view(self.view.prev()),
            Action::SetView(view) => self.set_view(view),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.unsaved_draft = self.create_event.wizard.has_changes();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.open_for(self.view);
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                if let Some(Modal::Checkout) = self.modals.pop() {
                    if let Some(message) = self.checkout_dialog.close() {
                        self.status_message = Some(message);
                    }
                }
            }
            Action::ConfirmModal => match self.modals.top().cloned() {
                Some(Modal::Filter) => {
                    self.events.set_options(self.filter_dialog.options.clone());
                    self.modals.pop();
                }
                Some(Modal::QuitConfirm) => self.should_quit = true,
                _ => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Search (delegate to EventsComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.events.enter_search_mode(),
            Action::ExitSearchMode => self.events.exit_search_mode(),
            Action::SearchInput(c) => self.events.search_input(c),
            Action::SearchBackspace => self.events.search_backspace(),
            Action::AcceptSuggestion => {
                let suggestion = search_suggestions(&self.domain.events, &self.events.search_query)
                    .first()
                    .map(|e| (*e).clone());
                if let Some(event) = suggestion {
                    self.events.accept_suggestion(&event);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Catalog Filters
            // ─────────────────────────────────────────────────────────────────
            Action::OpenFilterDialog => {
                self.filter_dialog.open(
                    &self.events.options,
                    all_categories(&self.domain.events),
                    all_genres(&self.domain.events),
                );
                self.modals.push(Modal::Filter);
            }
            Action::CycleSort => self.events.cycle_sort(),
            Action::ToggleFavoritesOnly => self.events.toggle_favorites_only(),
            Action::ClearFilters => self.events.clear_filters(),
            Action::ApplySavedSearch(index) => {
                if let Some(search) = self.domain.saved_searches.get(index).cloned() {
                    self.events.apply_saved_search(&search);
                    self.status_message = Some(format!("Búsqueda aplicada: {}", search.name));
                }
            }
            Action::OpenSaveSearch => {
                self.modals.push(Modal::SaveSearch {
                    name: String::new(),
                });
            }
            Action::SaveSearch(name) => {
                let name = name.trim();
                if !name.is_empty() {
                    save_search(
                        &mut self.domain.saved_searches,
                        name,
                        &self.events.search_query,
                        &self.events.options,
                    );
                    self.status_message = Some(format!("Búsqueda guardada: {}", name));
                }
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Favorites, Checkout, Creation, Tickets
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::OpenCheckout => self.open_checkout(),
            Action::PublishEvent => {
                if let Some(receipt) = self.create_event.publish() {
                    self.status_message = Some(format!(
                        "Evento publicado: {} ({} entradas, {} ETH estimados)",
                        receipt.title,
                        receipt.total_tickets,
                        format_amount(receipt.estimated_revenue)
                    ));
                }
            }
            Action::CancelEventDraft => {
                self.create_event.update(Action::CancelEventDraft)?;
                self.status_message = Some("Borrador descartado".to_string());
            }
            Action::CycleTicketFilter => self.tickets.cycle_filter(),
            Action::SaveProfile => {
                self.dashboard.update(Action::SaveProfile)?;
                self.status_message = Some("Perfil actualizado correctamente".to_string());
            }
            Action::ResetProfile => {
                self.dashboard.update(Action::ResetProfile)?;
                self.status_message = Some("Perfil restablecido".to_string());
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let has_status = self.error.is_some()
                    || self.status_message.is_some()
                    || self.images.pending_count() > 0;
                let layout = calculate_main_layout(area, has_status);

                shell::render_tabs(frame, layout.tabs, self.view, &self.config);

                match self.view {
                    View::Home => {
                        let ctx = HomeRenderContext {
                            events: &self.domain.events,
                            city_count: self.domain.city_count(),
                            favorites_count: self.domain.favorites.len(),
                            config: &self.config,
                            images: &self.images,
                        };
                        draw_home_screen(frame, layout.body, &self.home, &ctx)?;
                    }
                    View::Events => {
                        let results = catalog_results(&self.domain, &self.events);
                        let suggestions = if self.events.search_mode {
                            search_suggestions(&self.domain.events, &self.events.search_query)
                        } else {
                            Vec::new()
                        };
                        let ctx = EventsRenderContext {
                            results: &results,
                            catalog_len: self.domain.events.len(),
                            suggestions: &suggestions,
                            favorites: &self.domain.favorites,
                            saved_searches: &self.domain.saved_searches,
                            images: &self.images,
                        };
                        draw_events_screen(frame, layout.body, &mut self.events, &ctx)?;
                    }
                    View::MyTickets => {
                        draw_tickets_screen(
                            frame,
                            layout.body,
                            &mut self.tickets,
                            &self.domain.owned_tickets,
                        )?;
                    }
                    View::Dashboard => {
                        let favorites = self.domain.favorite_events();
                        let ctx = DashboardRenderContext {
                            config: &self.config,
                            tickets: &self.domain.owned_tickets,
                            favorites: &favorites,
                        };
                        draw_dashboard_screen(frame, layout.body, &mut self.dashboard, &ctx)?;
                    }
                    View::CreateEvent => self.create_event.draw(frame, layout.body)?,
                }

                if let Some(status_area) = layout.status {
                    shell::render_status_bar(
                        frame,
                        status_area,
                        self.error.as_deref(),
                        self.status_message.as_deref(),
                        self.images.pending_count(),
                    );
                }
                let capturing = self.view_component().captures_input();
                shell::render_help_bar(frame, layout.help, self.view, capturing);

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Filter => self.filter_dialog.handle_key_event(key),
            Modal::Checkout => self.checkout_dialog.handle_key_event(key),
            Modal::SaveSearch { name } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SaveSearch(name.clone())),
                    KeyCode::Backspace => {
                        if let Some(Modal::SaveSearch { name }) = self.modals.top_mut() {
                            name.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::SaveSearch { name }) = self.modals.top_mut() {
                            name.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Tab => Some(Action::AcceptSuggestion),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::Filter => self.filter_dialog.draw(frame, area)?,
            Modal::Checkout => self.checkout_dialog.draw(frame, area)?,
            Modal::SaveSearch { name } => self.draw_save_search(frame, area, name)?,
        }
        Ok(())
    }

    fn draw_save_search(&self, frame: &mut Frame, area: Rect, name: &str) -> Result<()> {
        let popup_area = centered_popup(area, 60, 10);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nombre para esta búsqueda:",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("> {}_", name),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("Guardar  "),
                Span::styled(" Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw("Cancelar"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(" Guardar búsqueda ")
                    .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::model::filter::SortKey;
    use crossterm::event::KeyModifiers;

    /// Store whose writes always fail
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::NoStorageDir)
        }
    }

    fn app_with_store(store: Box<dyn KeyValueStore>) -> App {
        let mut app = App::with_services(Config::default(), store, ImageLoader::disabled());
        app.mode = AppMode::Running;
        app
    }

    fn app() -> App {
        app_with_store(Box::new(MemoryStore::new()))
    }

    /// Feed a key through the app and apply the resulting actions
    fn press(app: &mut App, code: KeyCode) {
        press_key(app, KeyEvent::from(code));
    }

    fn press_key(app: &mut App, key: KeyEvent) {
        let mut action = app.handle_key_event(key).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_function_keys_switch_views() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.view, View::Events);
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.view, View::CreateEvent);
        press(&mut app, KeyCode::F(9));
        assert_eq!(app.view, View::CreateEvent);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Events);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, View::CreateEvent);
    }

    #[test]
    fn test_splash_completes_on_key() {
        let mut app = App::with_services(
            Config::default(),
            Box::new(MemoryStore::new()),
            ImageLoader::disabled(),
        );
        assert_eq!(app.mode, AppMode::Splash);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Running);
    }

    #[test]
    fn test_toggle_favorite_from_events() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        let id = app.selected_event_id().unwrap();

        press(&mut app, KeyCode::Char('*'));
        assert!(app.domain.favorites.contains(id));
        assert!(app.status_message.is_some());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_store_failure_keeps_in_memory_favorite() {
        let mut app = app_with_store(Box::new(FailingStore));
        press(&mut app, KeyCode::F(2));
        let id = app.selected_event_id().unwrap();

        press(&mut app, KeyCode::Char('*'));
        assert!(app.domain.favorites.contains(id));
        assert!(app.error.is_some());
    }

    #[test]
    fn test_favorites_only_clamps_selection() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Char('*'));
        press(&mut app, KeyCode::Char('F'));
        assert_eq!(app.event_results().len(), 1);

        press(&mut app, KeyCode::Char('*'));
        assert!(app.event_results().is_empty());
        assert_eq!(app.selected_event_id(), None);
    }

    #[test]
    fn test_search_mode_captures_q() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));

        assert_eq!(app.events.search_query, "q");
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_filter_dialog_applies_on_enter_only() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.events.options.sort, SortKey::Date);

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.events.options.sort, SortKey::PriceLow);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_save_search_prompt() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Char('S'));
        assert!(matches!(app.modals.top(), Some(Modal::SaveSearch { .. })));

        for c in "Rock".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert_eq!(app.domain.saved_searches.len(), 3);
        assert_eq!(app.domain.saved_searches[2].name, "Rock");
    }

    #[test]
    fn test_checkout_from_home_reports_purchase() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modals.top(), Some(&Modal::Checkout));
        let event_id = app.checkout_dialog.draft.as_ref().unwrap().event.id;
        assert_eq!(event_id, app.domain.events[0].id);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert!(app.checkout_dialog.draft.is_none());
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Compra confirmada"));
    }

    #[test]
    fn test_cancelled_checkout_drops_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert!(app.modals.is_empty());
        assert!(app.checkout_dialog.draft.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_dashboard_profile_edit_save_and_reset() {
        let mut app = app();
        press(&mut app, KeyCode::F(4));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        // q is typed into the username, not a quit request
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modals.is_empty());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dashboard.profile.username, "q");

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Perfil actualizado correctamente")
        );

        press(&mut app, KeyCode::Char('r'));
        assert!(app.dashboard.profile.username.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Perfil restablecido"));
    }

    #[test]
    fn test_dashboard_favorites_tab_drives_selection() {
        let mut app = app();
        let id = app.domain.events[0].id;
        app.domain.favorites.toggle(id, app.store.as_mut()).unwrap();
        press(&mut app, KeyCode::F(4));
        assert_eq!(app.selected_event_id(), None);

        app.dashboard.tab = crate::components::dashboard::DashboardTab::Favorites;
        assert_eq!(app.selected_event_id(), Some(id));
    }

    #[test]
    fn test_ctrl_x_cancels_checkout_from_payment() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.checkout_dialog.draft.as_ref().map(|d| d.step),
            Some(crate::model::checkout::CheckoutStep::Payment)
        );

        press_key(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert!(app.modals.is_empty());
        assert!(app.checkout_dialog.draft.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_create_event_view_takes_q_and_publishes() {
        let mut app = app();
        press(&mut app, KeyCode::F(5));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modals.is_empty());
        assert_eq!(app.create_event.wizard.draft.title, "q");

        app.create_event.wizard.step = crate::model::CreateStep::Review;
        press(&mut app, KeyCode::Enter);
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Evento publicado"));
        assert!(app.create_event.wizard.draft.title.is_empty());
    }

    #[test]
    fn test_quit_dialog_confirm() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('s'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_dialog_warns_about_draft() {
        let mut app = app();
        press(&mut app, KeyCode::F(5));
        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::F(1));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.quit_dialog.unsaved_draft);

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);
    }
}
