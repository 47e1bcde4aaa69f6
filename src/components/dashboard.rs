//! Wallet dashboard view
//!
//! Four tabs: activity overview, profile form, settings toggles and the
//! favorites list. The profile lives here for the session only.

use crate::action::Action;
use crate::component::Component;
use crate::components::text::truncate_to_width;
use crate::config::Config;
use crate::model::event::{format_amount, Event};
use crate::model::profile::{ProfileField, Setting, UserProfile};
use crate::model::tickets::{collection_stats, shorten_hash, OwnedTicket};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Recent purchases listed on the overview
const RECENT_ACTIVITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Profile,
    Settings,
    Favorites,
}

impl DashboardTab {
    pub fn all() -> Vec<DashboardTab> {
        vec![
            DashboardTab::Overview,
            DashboardTab::Profile,
            DashboardTab::Settings,
            DashboardTab::Favorites,
        ]
    }

    pub fn title(&self) -> &str {
        match self {
            DashboardTab::Overview => "Resumen",
            DashboardTab::Profile => "Perfil",
            DashboardTab::Settings => "Configuración",
            DashboardTab::Favorites => "Favoritos",
        }
    }

    pub fn next(&self) -> DashboardTab {
        match self {
            DashboardTab::Overview => DashboardTab::Profile,
            DashboardTab::Profile => DashboardTab::Settings,
            DashboardTab::Settings => DashboardTab::Favorites,
            DashboardTab::Favorites => DashboardTab::Overview,
        }
    }

    pub fn prev(&self) -> DashboardTab {
        match self {
            DashboardTab::Overview => DashboardTab::Favorites,
            DashboardTab::Profile => DashboardTab::Overview,
            DashboardTab::Settings => DashboardTab::Profile,
            DashboardTab::Favorites => DashboardTab::Settings,
        }
    }
}

pub struct DashboardComponent {
    pub tab: DashboardTab,
    /// Selection in the favorites list
    pub list_state: ListState,
    pub profile: UserProfile,
    pub profile_row: usize,
    pub settings_row: usize,
    /// The selected profile field is taking typed text
    pub editing: bool,
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            tab: DashboardTab::default(),
            list_state,
            profile: UserProfile::default(),
            profile_row: 0,
            settings_row: 0,
            editing: false,
        }
    }

    /// Highlighted favorite, only while the favorites tab is open
    pub fn selected_favorite<'a>(&self, favorites: &[&'a Event]) -> Option<&'a Event> {
        if self.tab != DashboardTab::Favorites {
            return None;
        }
        favorites.get(self.list_state.selected()?).copied()
    }

    pub fn selected_profile_field(&self) -> Option<ProfileField> {
        ProfileField::all().get(self.profile_row).copied()
    }

    pub fn selected_setting(&self) -> Option<Setting> {
        Setting::all().get(self.settings_row).copied()
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(field) = self.selected_profile_field() else {
            self.editing = false;
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.editing = false,
            KeyCode::Backspace => self.profile.pop_char(field),
            KeyCode::Char(c) => {
                self.profile.push_char(field, c);
            }
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.profile_row = step_row(self.profile_row, ProfileField::all().len(), true);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.profile_row = step_row(self.profile_row, ProfileField::all().len(), false);
            }
            KeyCode::Enter => self.editing = true,
            KeyCode::Char('s') => return Some(Action::SaveProfile),
            KeyCode::Char('r') => return Some(Action::ResetProfile),
            _ => {}
        }
        None
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.settings_row = step_row(self.settings_row, Setting::all().len(), true);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.settings_row = step_row(self.settings_row, Setting::all().len(), false);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(setting) = self.selected_setting() {
                    let on = self.profile.toggle(setting);
                    tracing::debug!(setting = setting.label(), on, "Setting toggled");
                }
            }
            _ => {}
        }
    }

    pub fn next(&mut self, len: usize) {
        let i = self.list_state.selected().unwrap_or(0);
        if i + 1 < len {
            self.list_state.select(Some(i + 1));
        }
    }

    pub fn previous(&mut self) {
        let i = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(i));
    }

    pub fn clamp_selection(&mut self, len: usize) {
        if let Some(i) = self.list_state.selected() {
            if i >= len {
                self.list_state.select(Some(len.saturating_sub(1)));
            }
        }
    }
}

fn step_row(row: usize, len: usize, forward: bool) -> usize {
    if forward {
        (row + 1).min(len.saturating_sub(1))
    } else {
        row.saturating_sub(1)
    }
}

impl Component for DashboardComponent {
    /// Typing into a profile field takes every key
    fn captures_input(&self) -> bool {
        self.editing
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing {
            self.handle_edit_key(key);
            return Ok(None);
        }

        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                self.tab = self.tab.prev();
                return Ok(None);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.tab = self.tab.next();
                return Ok(None);
            }
            _ => {}
        }

        let action = match self.tab {
            DashboardTab::Overview => None,
            DashboardTab::Profile => self.handle_profile_key(key),
            DashboardTab::Settings => {
                self.handle_settings_key(key);
                None
            }
            DashboardTab::Favorites => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
                KeyCode::Enter => Some(Action::OpenCheckout),
                KeyCode::Char('*') => Some(Action::ToggleFavorite),
                _ => None,
            },
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SaveProfile => tracing::info!(
                username = %self.profile.username,
                email = %self.profile.email,
                location = %self.profile.location,
                "Profile saved"
            ),
            Action::ResetProfile => {
                self.profile.reset();
                self.editing = false;
            }
            _ => {}
        }
        Ok(None)
    }
}

pub struct DashboardRenderContext<'a> {
    pub config: &'a Config,
    pub tickets: &'a [OwnedTicket],
    pub favorites: &'a [&'a Event],
}

pub fn draw_dashboard_screen(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut DashboardComponent,
    ctx: &DashboardRenderContext,
) -> Result<()> {
    let Some(address) = ctx.config.wallet_address.as_deref() else {
        render_connect_prompt(frame, area);
        return Ok(());
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header + tabs
            Constraint::Min(6),    // Tab content
        ])
        .split(area);

    render_header(frame, chunks[0], dashboard, address);

    match dashboard.tab {
        DashboardTab::Overview => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Min(4)])
                .split(chunks[1]);
            render_stats(frame, rows[0], ctx.tickets);

            let bottom = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(rows[1]);
            render_activity(frame, bottom[0], ctx.tickets);
            render_wallet(frame, bottom[1], ctx.config, address);
        }
        DashboardTab::Profile => render_profile(frame, chunks[1], dashboard),
        DashboardTab::Settings => render_settings(frame, chunks[1], dashboard),
        DashboardTab::Favorites => render_favorites(frame, chunks[1], dashboard, ctx.favorites),
    }

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, dashboard: &DashboardComponent, address: &str) {
    let profile = &dashboard.profile;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", profile.initial(Some(address))),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}   ", profile.display_name(Some(address))),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    for tab in DashboardTab::all() {
        let style = if tab == dashboard.tab {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_connect_prompt(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Conecta tu wallet",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("El dashboard necesita una wallet conectada para mostrar tus tickets."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Define "),
            Span::styled(
                "TICKETSAFER_WALLET_ADDRESS",
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" en el entorno o en .env y vuelve a iniciar."),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Dashboard ")
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(paragraph, area);
}

fn render_stats(frame: &mut Frame, area: Rect, tickets: &[OwnedTicket]) {
    let stats = collection_stats(tickets);
    let cells = [
        ("Tickets", stats.owned.to_string(), Color::Cyan),
        ("Activos", stats.active.to_string(), Color::Green),
        (
            "Total gastado",
            format!("{} ETH", format_amount(stats.total_spent)),
            Color::Magenta,
        ),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((label, value, color), column) in cells.into_iter().zip(columns.iter()) {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, *column);
    }
}

/// Latest purchases, newest first as stored
fn activity_lines(tickets: &[OwnedTicket]) -> Vec<Line<'static>> {
    if tickets.is_empty() {
        return vec![Line::from(Span::styled(
            "Sin compras todavía",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    tickets
        .iter()
        .take(RECENT_ACTIVITY)
        .map(|ticket| {
            Line::from(vec![
                Span::styled("Ticket comprado: ", Style::default().fg(Color::DarkGray)),
                Span::styled(ticket.event_title.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", ticket.purchase_date),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", ticket.formatted_price()),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect()
}

fn render_activity(frame: &mut Frame, area: Rect, tickets: &[OwnedTicket]) {
    let paragraph = Paragraph::new(activity_lines(tickets))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Actividad reciente ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}

fn profile_lines(dashboard: &DashboardComponent) -> Vec<Line<'static>> {
    let profile = &dashboard.profile;
    let mut lines = vec![Line::from("")];

    for (i, field) in ProfileField::all().into_iter().enumerate() {
        let selected = i == dashboard.profile_row;
        let value = profile.field(field);
        let editing = selected && dashboard.editing;
        let (text, color) = if editing {
            (format!("{}_", value), Color::White)
        } else if value.is_empty() {
            (field.placeholder().to_string(), Color::DarkGray)
        } else {
            (value.to_string(), Color::Gray)
        };
        let mut style = Style::default().fg(color);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        let value_span = Span::styled(text, style);

        let mut spans = vec![
            Span::styled(
                if selected { "> " } else { "  " },
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("{:<20}", field.label()), Style::default().fg(Color::Cyan)),
            value_span,
        ];
        if let Some(max) = field.max_len() {
            spans.push(Span::styled(
                format!("  {}/{}", value.chars().count(), max),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn render_profile(frame: &mut Frame, area: Rect, dashboard: &DashboardComponent) {
    let help = if dashboard.editing {
        " Escribe para editar   Enter/Esc  Listo"
    } else {
        " j/k  Campo   Enter  Editar   s  Guardar   r  Restablecer   h/l  Pestaña"
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let paragraph = Paragraph::new(profile_lines(dashboard))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Perfil ")
                .border_style(Style::default().fg(if dashboard.editing {
                    Color::Yellow
                } else {
                    Color::Cyan
                })),
        );
    frame.render_widget(paragraph, chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
        chunks[1],
    );
}

fn settings_lines(dashboard: &DashboardComponent) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut group = None;

    for (i, setting) in Setting::all().into_iter().enumerate() {
        let heading = if setting.is_privacy() { "Privacidad" } else { "Notificaciones" };
        if group != Some(heading) {
            group = Some(heading);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let selected = i == dashboard.settings_row;
        let on = dashboard.profile.setting(setting);
        lines.push(Line::from(vec![
            Span::styled(
                if selected { "> " } else { "  " },
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                if on { "[x] " } else { "[ ] " },
                Style::default().fg(if on { Color::Green } else { Color::DarkGray }),
            ),
            Span::styled(
                format!("{:<28}", setting.label()),
                if selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
            Span::styled(
                setting.description().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines
}

fn render_settings(frame: &mut Frame, area: Rect, dashboard: &DashboardComponent) {
    let paragraph = Paragraph::new(settings_lines(dashboard))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Configuración ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}

fn render_favorites(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut DashboardComponent,
    favorites: &[&Event],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Favoritos ({}) ", favorites.len()))
        .border_style(Style::default().fg(Color::Cyan));

    if favorites.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Marca eventos con * para verlos aquí",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let title_width = area.width.saturating_sub(28) as usize;
    let items: Vec<ListItem> = favorites
        .iter()
        .map(|event| {
            ListItem::new(Line::from(vec![
                Span::styled("★ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!(
                        "{:<width$}",
                        truncate_to_width(&event.title, title_width),
                        width = title_width
                    ),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(" {}", event.formatted_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!(" {}", event.formatted_price()),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut dashboard.list_state);
}

fn render_wallet(frame: &mut Frame, area: Rect, config: &Config, address: &str) {
    let project_id = if config.wallet_connect_project_id.is_empty() {
        "sin configurar".to_string()
    } else {
        config.wallet_connect_project_id.clone()
    };

    let label = |text: &str| Span::styled(format!("{:<12}", text), Style::default().fg(Color::Cyan));
    let lines = vec![
        Line::from(vec![
            label("Red"),
            Span::styled(
                format!(" ● {} ", config.network),
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(vec![label("Wallet"), Span::raw(shorten_hash(address))]),
        Line::from(vec![label("Proyecto"), Span::raw(project_id)]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Wallet ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
