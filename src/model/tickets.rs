//! Tickets held by the connected wallet

use super::event::format_amount;
use serde::{Deserialize, Serialize};

/// Lifecycle of an owned ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Used,
    Expired,
}

impl TicketStatus {
    pub fn name(&self) -> &str {
        match self {
            TicketStatus::Active => "Activo",
            TicketStatus::Used => "Usado",
            TicketStatus::Expired => "Expirado",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            TicketStatus::Active => "✓",
            TicketStatus::Used => "◉",
            TicketStatus::Expired => "✗",
        }
    }
}

/// An NFT ticket in the wallet's collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedTicket {
    pub id: String,
    pub event_title: String,
    pub artist: String,
    pub venue: String,
    pub city: String,
    pub date: String,
    pub time: String,
    pub ticket_type: String,
    pub seat: String,
    pub price: f64,
    pub purchase_date: String,
    pub tx_hash: String,
    pub status: TicketStatus,
    pub resaleable: bool,
    pub original_price: f64,
    pub fees: f64,
    pub used_date: Option<String>,
}

impl OwnedTicket {
    /// Transaction hash shortened to its first 10 and last 8 characters
    pub fn short_tx_hash(&self) -> String {
        shorten_hash(&self.tx_hash)
    }

    pub fn formatted_price(&self) -> String {
        format!("{} ETH", format_amount(self.price))
    }

    /// Resale only makes sense for tickets that can still be used
    pub fn can_resell(&self) -> bool {
        self.resaleable && self.status == TicketStatus::Active
    }
}

/// Shorten a hex hash for display, e.g. `0x8f2e4a1b...8c9d0e1f`
pub fn shorten_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 18 {
        return hash.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Status filter for the ticket collection view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketFilter {
    #[default]
    All,
    Active,
    Used,
    Expired,
}

impl TicketFilter {
    pub fn all() -> Vec<TicketFilter> {
        vec![
            TicketFilter::All,
            TicketFilter::Active,
            TicketFilter::Used,
            TicketFilter::Expired,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            TicketFilter::All => "Todos",
            TicketFilter::Active => "Activos",
            TicketFilter::Used => "Usados",
            TicketFilter::Expired => "Expirados",
        }
    }

    pub fn next(&self) -> TicketFilter {
        match self {
            TicketFilter::All => TicketFilter::Active,
            TicketFilter::Active => TicketFilter::Used,
            TicketFilter::Used => TicketFilter::Expired,
            TicketFilter::Expired => TicketFilter::All,
        }
    }

    pub fn matches(&self, ticket: &OwnedTicket) -> bool {
        match self {
            TicketFilter::All => true,
            TicketFilter::Active => ticket.status == TicketStatus::Active,
            TicketFilter::Used => ticket.status == TicketStatus::Used,
            TicketFilter::Expired => ticket.status == TicketStatus::Expired,
        }
    }

    /// Number of tickets this filter would show
    pub fn count(&self, tickets: &[OwnedTicket]) -> usize {
        tickets.iter().filter(|t| self.matches(t)).count()
    }
}

/// Apply a status filter, preserving collection order
pub fn filter_tickets(tickets: &[OwnedTicket], filter: TicketFilter) -> Vec<&OwnedTicket> {
    tickets.iter().filter(|t| filter.matches(t)).collect()
}

/// Aggregate numbers for the dashboard overview
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    pub owned: usize,
    pub active: usize,
    pub total_spent: f64,
}

pub fn collection_stats(tickets: &[OwnedTicket]) -> CollectionStats {
    CollectionStats {
        owned: tickets.len(),
        active: TicketFilter::Active.count(tickets),
        total_spent: tickets.iter().map(|t| t.price).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::mock_owned_tickets;

    #[test]
    fn test_short_tx_hash() {
        let tickets = mock_owned_tickets();
        assert_eq!(tickets[0].short_tx_hash(), "0x8f2e4a1b...8c9d0e1f");
        assert_eq!(shorten_hash("0x1234"), "0x1234");
    }

    #[test]
    fn test_filter_counts() {
        let tickets = mock_owned_tickets();
        assert_eq!(TicketFilter::All.count(&tickets), 10);
        assert_eq!(TicketFilter::Active.count(&tickets), 6);
        assert_eq!(TicketFilter::Used.count(&tickets), 2);
        assert_eq!(TicketFilter::Expired.count(&tickets), 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let tickets = mock_owned_tickets();
        let used: Vec<&str> = filter_tickets(&tickets, TicketFilter::Used)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(used, vec!["NFT-003", "NFT-006"]);
    }

    #[test]
    fn test_filter_cycle_returns_to_all() {
        let mut filter = TicketFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, TicketFilter::All);
    }

    #[test]
    fn test_can_resell_only_active() {
        let tickets = mock_owned_tickets();
        assert!(tickets[0].can_resell());
        assert!(!tickets[2].can_resell());
    }
}
