//! Keyboard reference, opened scrolled to the section of the current view

use crate::action::Action;
use crate::component::Component;
use crate::model::View;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

type Shortcut = (&'static str, &'static str);

struct Section {
    title: &'static str,
    /// View whose help bar points here
    view: Option<View>,
    keys: &'static [Shortcut],
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Navegación",
        view: None,
        keys: &[
            ("Tab", "Vista siguiente"),
            ("Shift+Tab", "Vista anterior"),
            ("F1 .. F5", "Inicio / Eventos / Mis Tickets / Dashboard / Crear"),
            ("?", "Mostrar esta ayuda"),
            ("q", "Salir"),
        ],
    },
    Section {
        title: "Inicio",
        view: Some(View::Home),
        keys: &[
            ("j / k", "Cambiar evento destacado"),
            ("Enter", "Comprar entradas"),
            ("e", "Explorar eventos"),
            ("c", "Crear evento"),
        ],
    },
    Section {
        title: "Eventos",
        view: Some(View::Events),
        keys: &[
            ("j / k", "Evento siguiente / anterior"),
            ("g / G", "Primero / último"),
            ("Enter", "Comprar entradas"),
            ("/", "Buscar (Tab acepta la sugerencia)"),
            ("f", "Abrir filtros"),
            ("s", "Cambiar orden"),
            ("*", "Marcar / desmarcar favorito"),
            ("F", "Solo favoritos"),
            ("x", "Limpiar búsqueda y filtros"),
            ("1 .. 9", "Aplicar búsqueda guardada"),
            ("S", "Guardar búsqueda actual"),
        ],
    },
    Section {
        title: "Checkout",
        view: None,
        keys: &[
            ("+ / -", "Sumar / quitar entrada del tipo elegido"),
            ("↑ / ↓", "Cambiar tipo o campo"),
            ("Space", "Cambiar método de pago"),
            ("Enter", "Continuar / pagar"),
            ("Esc", "Volver o cancelar"),
            ("Ctrl+x", "Cancelar la compra desde cualquier paso"),
        ],
    },
    Section {
        title: "Mis Tickets",
        view: Some(View::MyTickets),
        keys: &[("j / k", "Ticket siguiente / anterior"), ("f", "Filtrar por estado")],
    },
    Section {
        title: "Dashboard",
        view: Some(View::Dashboard),
        keys: &[
            ("h / l", "Resumen / Perfil / Configuración / Favoritos"),
            ("j / k", "Fila siguiente / anterior"),
            ("Enter", "Editar campo, cambiar opción o comprar"),
            ("Space", "Activar / desactivar opción"),
            ("s", "Guardar perfil"),
            ("r", "Restablecer perfil"),
            ("*", "Quitar de favoritos"),
        ],
    },
    Section {
        title: "Crear Evento",
        view: Some(View::CreateEvent),
        keys: &[
            ("↑ / ↓", "Campo anterior / siguiente"),
            ("← / →", "Cambiar opción"),
            ("Ctrl+n", "Agregar tipo de entrada"),
            ("Ctrl+d", "Eliminar tipo de entrada"),
            ("Ctrl+a", "Activar / pausar tipo de entrada"),
            ("Enter", "Paso siguiente / publicar"),
            ("Esc", "Paso anterior"),
            ("Ctrl+x", "Descartar borrador"),
        ],
    },
];

/// Blank line, title, underline
const SECTION_HEADER_LINES: usize = 3;

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    /// Reset the scroll so the section for `view` is at the top
    pub fn open_for(&mut self, view: View) {
        self.scroll_offset = section_offset(view);
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}

fn section_offset(view: View) -> usize {
    SECTIONS
        .iter()
        .take_while(|s| s.view != Some(view))
        .map(|s| SECTION_HEADER_LINES + s.keys.len())
        .sum()
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", section.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(section.title.chars().count() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
        for (key, description) in section.keys {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:12}", key),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*description),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  q, Esc o ? para cerrar",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => return Ok(Some(Action::CloseModal)),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_offset = 0,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let dialog = area.inner(Margin {
            vertical: 2,
            horizontal: 6,
        });

        let lines = help_lines();
        let total = lines.len();
        let height = dialog.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Atajos de teclado ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog);

        if max_scroll > 0 {
            let mut state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                dialog.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_for_view_scrolls_to_its_section() {
        let mut help = HelpDialog::default();
        help.open_for(View::Events);

        let lines = help_lines();
        let title = lines[help.scroll_offset + 1].to_string();
        assert_eq!(title.trim(), "Eventos");
    }

    #[test]
    fn test_every_view_has_a_section() {
        for view in View::all() {
            assert!(SECTIONS.iter().any(|s| s.view == Some(view)), "{:?}", view);
        }
    }

    #[test]
    fn test_scroll_never_goes_negative() {
        let mut help = HelpDialog::default();
        help.handle_key_event(KeyEvent::from(KeyCode::Up)).unwrap();
        assert_eq!(help.scroll_offset, 0);
        assert_eq!(
            help.handle_key_event(KeyEvent::from(KeyCode::Char('?'))).unwrap(),
            Some(Action::CloseModal)
        );
    }
}
