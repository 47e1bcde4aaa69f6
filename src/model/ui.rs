//! UI state - presentation state separate from domain data
//!
//! Per-view presentation state lives in the view components themselves.

/// Top-level view selected in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Events,
    MyTickets,
    Dashboard,
    CreateEvent,
}

impl View {
    pub fn all() -> Vec<View> {
        vec![
            View::Home,
            View::Events,
            View::MyTickets,
            View::Dashboard,
            View::CreateEvent,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            View::Home => "Inicio",
            View::Events => "Eventos",
            View::MyTickets => "Mis Tickets",
            View::Dashboard => "Dashboard",
            View::CreateEvent => "Crear Evento",
        }
    }

    pub fn next(&self) -> View {
        match self {
            View::Home => View::Events,
            View::Events => View::MyTickets,
            View::MyTickets => View::Dashboard,
            View::Dashboard => View::CreateEvent,
            View::CreateEvent => View::Home,
        }
    }

    pub fn prev(&self) -> View {
        match self {
            View::Home => View::CreateEvent,
            View::Events => View::Home,
            View::MyTickets => View::Events,
            View::Dashboard => View::MyTickets,
            View::CreateEvent => View::Dashboard,
        }
    }

    /// Position in the tab bar, also the F-key number minus one
    pub fn index(&self) -> usize {
        View::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        View::all().get(index).copied()
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle_wraps() {
        let mut view = View::Home;
        for _ in 0..View::all().len() {
            view = view.next();
        }
        assert_eq!(view, View::Home);
        assert_eq!(View::Home.prev(), View::CreateEvent);
    }

    #[test]
    fn test_view_index_roundtrip() {
        for view in View::all() {
            assert_eq!(View::from_index(view.index()), Some(view));
        }
        assert_eq!(View::from_index(9), None);
    }
}
