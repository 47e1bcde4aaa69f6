//! Event records for the catalog

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A ticketed happening (concert, festival, show)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub venue: String,
    /// ISO date (`YYYY-MM-DD`). Kept as text because the catalog is literal
    /// data and not every entry is a real calendar date.
    pub date: String,
    /// Local start time (`HH:MM`)
    pub time: String,
    pub price: f64,
    pub currency: String,
    pub category: String,
    pub genre: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    pub available: u32,
    pub city: String,
    pub country: String,
    pub venue_type: String,
    pub time_of_day: String,
}

/// Ticket availability bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityLevel {
    High,
    Medium,
    Low,
}

impl AvailabilityLevel {
    pub fn name(&self) -> &str {
        match self {
            AvailabilityLevel::High => "high",
            AvailabilityLevel::Medium => "medium",
            AvailabilityLevel::Low => "low",
        }
    }
}

impl Event {
    /// Parsed calendar date, `None` when the literal is not a valid date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Start hour, `None` when the time literal has no numeric hour
    pub fn hour(&self) -> Option<u32> {
        let hour: u32 = self.time.split(':').next()?.trim().parse().ok()?;
        (hour < 24).then_some(hour)
    }

    /// Availability bucket with fixed thresholds at 1000 and 100
    pub fn availability_level(&self) -> AvailabilityLevel {
        if self.available > 1000 {
            AvailabilityLevel::High
        } else if self.available > 100 {
            AvailabilityLevel::Medium
        } else {
            AvailabilityLevel::Low
        }
    }

    /// Price with its currency label, e.g. `0.063 ETH`
    pub fn formatted_price(&self) -> String {
        format!("{} {}", format_amount(self.price), self.currency)
    }

    /// Date in day-first form for display, falling back to the raw literal
    pub fn formatted_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// Icon for the event category
    pub fn icon(&self) -> &str {
        match self.category.as_str() {
            "Concierto" => "♪",
            "Festival" => "★",
            "Show" => "◆",
            "Teatro" => "▲",
            "Deportes" => "●",
            _ => "•",
        }
    }
}

/// Format an amount with up to three decimals, trimming trailing zeros
pub fn format_amount(amount: f64) -> String {
    let text = format!("{:.3}", amount);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn create_test_event(id: u32, title: &str, price: f64, date: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            artist: "Artist".to_string(),
            venue: "Luna Park".to_string(),
            date: date.to_string(),
            time: "20:00".to_string(),
            price,
            currency: "ETH".to_string(),
            category: "Concierto".to_string(),
            genre: "Rock".to_string(),
            image: String::new(),
            description: String::new(),
            tags: vec![],
            available: 500,
            city: "Buenos Aires".to_string(),
            country: "Argentina".to_string(),
            venue_type: "arena".to_string(),
            time_of_day: "noche".to_string(),
        }
    }

    #[test]
    fn test_parsed_date_rejects_impossible_dates() {
        let valid = create_test_event(1, "a", 0.1, "2025-03-15");
        assert_eq!(valid.parsed_date(), NaiveDate::from_ymd_opt(2025, 3, 15));

        let leap = create_test_event(2, "b", 0.1, "2025-02-29");
        assert_eq!(leap.parsed_date(), None);
        assert_eq!(leap.formatted_date(), "2025-02-29");
    }

    #[test]
    fn test_hour_parsing() {
        let mut event = create_test_event(1, "a", 0.1, "2025-03-15");
        event.time = "01:00".to_string();
        assert_eq!(event.hour(), Some(1));

        event.time = "late".to_string();
        assert_eq!(event.hour(), None);
    }

    #[test]
    fn test_availability_thresholds() {
        let mut event = create_test_event(1, "a", 0.1, "2025-03-15");
        event.available = 1001;
        assert_eq!(event.availability_level(), AvailabilityLevel::High);
        event.available = 1000;
        assert_eq!(event.availability_level(), AvailabilityLevel::Medium);
        event.available = 101;
        assert_eq!(event.availability_level(), AvailabilityLevel::Medium);
        event.available = 100;
        assert_eq!(event.availability_level(), AvailabilityLevel::Low);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.063), "0.063");
        assert_eq!(format_amount(0.12), "0.12");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(0.1576), "0.158");
    }
}
