//! Component trait shared by views and dialogs
//!
//! Components turn terminal input into [`Action`]s and react to the actions
//! the app routes back to them. Views that show catalog or wallet data are
//! rendered by `draw_*_screen` functions with a render context, so their
//! `draw` stays the default no-op.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// True while the component consumes plain keys as text, so global
    /// shortcuts like `q` and `?` must not fire
    fn captures_input(&self) -> bool {
        false
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// React to a routed action, optionally chaining another
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let _ = (frame, area);
        Ok(())
    }
}
