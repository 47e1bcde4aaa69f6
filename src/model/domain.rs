//! Domain state - business/data state separate from UI concerns

use super::catalog::{mock_events, mock_owned_tickets};
use super::event::Event;
use super::favorites::Favorites;
use super::filter::{default_saved_searches, SavedSearch};
use super::tickets::OwnedTicket;

/// Domain state containing all business data
#[derive(Debug, Default)]
pub struct DomainState {
    /// The event catalog, fixed at startup
    pub events: Vec<Event>,

    /// Tickets held by the connected wallet
    pub owned_tickets: Vec<OwnedTicket>,

    /// Favorite event ids, mirrored to the key-value store
    pub favorites: Favorites,

    /// Named search presets for this session
    pub saved_searches: Vec<SavedSearch>,
}

impl DomainState {
    /// Domain state seeded with the mock catalog
    pub fn new(favorites: Favorites) -> Self {
        Self {
            events: mock_events(),
            owned_tickets: mock_owned_tickets(),
            favorites,
            saved_searches: default_saved_searches(),
        }
    }

    pub fn event(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Favorite events in catalog order
    pub fn favorite_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| self.favorites.contains(e.id))
            .collect()
    }

    /// Number of distinct cities in the catalog
    pub fn city_count(&self) -> usize {
        let mut cities: Vec<&str> = self.events.iter().map(|e| e.city.as_str()).collect();
        cities.sort_unstable();
        cities.dedup();
        cities.len()
    }
}
