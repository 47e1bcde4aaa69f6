//! Exit confirmation, with a warning when an event draft would be lost

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct QuitDialog {
    /// Set by the app when the quit dialog opens
    pub unsaved_draft: bool,
}

impl QuitDialog {
    fn lines(&self) -> Vec<Line<'static>> {
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("¿Salir de TicketSafer?", bold(Color::White))),
        ];
        if self.unsaved_draft {
            lines.push(Line::from(Span::styled(
                "El borrador del evento se perderá",
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Tus favoritos ya están guardados",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" s/Enter ", bold(Color::Green)),
            Span::raw("Salir  "),
            Span::styled(" n/Esc ", bold(Color::Red)),
            Span::raw("Seguir aquí"),
        ]));
        lines
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Char('s' | 'S' | 'y' | 'Y') | KeyCode::Enter => Some(Action::ForceQuit),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        })
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 46, 8);
        frame.render_widget(Clear, popup);

        let border = if self.unsaved_draft { Color::Red } else { Color::Yellow };
        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(" Salir "),
            );
        frame.render_widget(paragraph, popup);
        Ok(())
    }
}
