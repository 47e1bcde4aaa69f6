//! Navigation chrome around the active view: tab bar, status line, help bar

use crate::config::Config;
use crate::model::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn render_tabs(frame: &mut Frame, area: Rect, view: View, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(area);

    let titles: Vec<String> = View::all()
        .iter()
        .enumerate()
        .map(|(i, v)| format!("F{} {}", i + 1, v.name()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(Span::styled(
                    " TicketSafer ",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .select(view.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let wallet = match config.wallet_address.as_deref() {
        Some(address) => Span::styled(
            format!(" ● {} ", short_address(address)),
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        None => Span::styled(
            " ○ Sin wallet ",
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        ),
    };
    let badge = Paragraph::new(Line::from(wallet))
        .alignment(ratatui::layout::Alignment::Right)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(badge, chunks[1]);
}

/// `0x1234...abcd` style address for the badge
fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    error: Option<&str>,
    status: Option<&str>,
    pending_images: usize,
) {
    let span = match (error, status) {
        (Some(error), _) => Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ),
        (None, Some(status)) => Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ),
        (None, None) if pending_images > 0 => Span::styled(
            format!(" Cargando {} imágenes... ", pending_images),
            Style::default().fg(Color::DarkGray),
        ),
        (None, None) => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(span)), area);
}

fn key(text: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// `capturing` is set while the view takes every key (search, text fields)
pub fn render_help_bar(frame: &mut Frame, area: Rect, view: View, capturing: bool) {
    frame.render_widget(Paragraph::new(Line::from(help_spans(view, capturing))), area);
}

fn help_spans(view: View, capturing: bool) -> Vec<Span<'static>> {
    let mut spans = if capturing && view == View::Events {
        vec![
            key("Esc/Enter", Color::Yellow),
            Span::raw("Terminar  "),
            key("Tab", Color::Green),
            Span::raw("Sugerencia"),
        ]
    } else if capturing && view == View::Dashboard {
        vec![key("Esc/Enter", Color::Yellow), Span::raw("Terminar edición")]
    } else {
        match view {
            View::Home => vec![
                key("j/k", Color::Cyan),
                Span::raw("Destacado "),
                key("Enter", Color::Green),
                Span::raw("Comprar "),
                key("e", Color::Cyan),
                Span::raw("Eventos "),
            ],
            View::Events => vec![
                key("/", Color::Cyan),
                Span::raw("Buscar "),
                key("f", Color::Cyan),
                Span::raw("Filtros "),
                key("s", Color::Cyan),
                Span::raw("Orden "),
                key("*", Color::Yellow),
                Span::raw("Favorito "),
                key("Enter", Color::Green),
                Span::raw("Comprar "),
                key("S", Color::Magenta),
                Span::raw("Guardar "),
            ],
            View::MyTickets => vec![
                key("j/k", Color::Cyan),
                Span::raw("Mover "),
                key("f", Color::Cyan),
                Span::raw("Estado "),
            ],
            View::Dashboard => vec![
                key("h/l", Color::Cyan),
                Span::raw("Pestaña "),
                key("j/k", Color::Cyan),
                Span::raw("Mover "),
                key("Enter", Color::Green),
                Span::raw("Elegir "),
                key("*", Color::Yellow),
                Span::raw("Quitar favorito "),
            ],
            View::CreateEvent => vec![
                key("F1", Color::Cyan),
                Span::raw("Inicio "),
                key("Ctrl+x", Color::Red),
                Span::raw("Descartar "),
            ],
        }
    };

    if !capturing {
        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        spans.push(key("Tab", Color::White));
        spans.push(Span::raw("Vista "));
        spans.push(key("?", Color::White));
        spans.push(Span::raw("Ayuda "));
        spans.push(key("q", Color::Yellow));
        spans.push(Span::raw("Salir"));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"),
            "0x71C7...976F"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    fn help_text(view: View, capturing: bool) -> String {
        Line::from(help_spans(view, capturing)).to_string()
    }

    #[test]
    fn test_help_bar_hides_globals_while_capturing() {
        assert!(help_text(View::Dashboard, false).contains("Salir"));
        assert!(help_text(View::Dashboard, false).contains("Pestaña"));

        let editing = help_text(View::Dashboard, true);
        assert!(editing.contains("Terminar edición"));
        assert!(!editing.contains("Salir"));

        assert!(help_text(View::Events, true).contains("Sugerencia"));
        assert!(!help_text(View::CreateEvent, true).contains("Salir"));
    }
}
