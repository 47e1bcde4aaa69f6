//! Catalog filtering and sorting
//!
//! `filter_events` is a pure function of the catalog, the search text, the
//! filter options, the favorite set and "today". The events view calls it on
//! every redraw; nothing derived from it is stored.

use super::event::{AvailabilityLevel, Event};
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Price bounds a fresh filter starts with
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 0.25);

/// Maximum number of live search suggestions
const MAX_SUGGESTIONS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Filter dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    PriceLow,
    PriceHigh,
    Popularity,
    Availability,
    Alphabetical,
    Distance,
}

impl SortKey {
    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Date,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Popularity,
            SortKey::Availability,
            SortKey::Alphabetical,
            SortKey::Distance,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            SortKey::Date => "Fecha",
            SortKey::PriceLow => "Precio: menor a mayor",
            SortKey::PriceHigh => "Precio: mayor a menor",
            SortKey::Popularity => "Popularidad",
            SortKey::Availability => "Disponibilidad",
            SortKey::Alphabetical => "Alfabético",
            SortKey::Distance => "Distancia",
        }
    }

    pub fn next(&self) -> SortKey {
        let all = Self::all();
        let idx = all.iter().position(|k| k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Calendar window relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Today,
    Tomorrow,
    ThisWeek,
    ThisMonth,
    NextMonth,
}

impl DateRange {
    pub fn all() -> Vec<DateRange> {
        vec![
            DateRange::Today,
            DateRange::Tomorrow,
            DateRange::ThisWeek,
            DateRange::ThisMonth,
            DateRange::NextMonth,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            DateRange::Today => "Hoy",
            DateRange::Tomorrow => "Mañana",
            DateRange::ThisWeek => "Esta semana",
            DateRange::ThisMonth => "Este mes",
            DateRange::NextMonth => "Próximo mes",
        }
    }

    /// Step through `None → Today → … → NextMonth → None`
    pub fn cycle(current: Option<DateRange>) -> Option<DateRange> {
        match current {
            None => Some(DateRange::Today),
            Some(DateRange::Today) => Some(DateRange::Tomorrow),
            Some(DateRange::Tomorrow) => Some(DateRange::ThisWeek),
            Some(DateRange::ThisWeek) => Some(DateRange::ThisMonth),
            Some(DateRange::ThisMonth) => Some(DateRange::NextMonth),
            Some(DateRange::NextMonth) => None,
        }
    }

    /// Whether `date` falls inside this window
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateRange::Today => date == today,
            DateRange::Tomorrow => today.succ_opt() == Some(date),
            DateRange::ThisWeek => {
                let end = today + chrono::Duration::days(7);
                date >= today && date <= end
            }
            DateRange::ThisMonth => match last_of_month(today) {
                Some(end) => date >= today && date <= end,
                None => false,
            },
            DateRange::NextMonth => {
                let Some(start) = first_of_next_month(today) else {
                    return false;
                };
                match last_of_month(start) {
                    Some(end) => date >= start && date <= end,
                    None => false,
                }
            }
        }
    }
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_next_month(date)?.pred_opt()
}

/// Ticket availability bucket filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl AvailabilityFilter {
    pub fn name(&self) -> &str {
        match self {
            AvailabilityFilter::All => "Todas",
            AvailabilityFilter::High => "Alta (>1000)",
            AvailabilityFilter::Medium => "Media (100-1000)",
            AvailabilityFilter::Low => "Baja (<100)",
        }
    }

    pub fn next(&self) -> AvailabilityFilter {
        match self {
            AvailabilityFilter::All => AvailabilityFilter::High,
            AvailabilityFilter::High => AvailabilityFilter::Medium,
            AvailabilityFilter::Medium => AvailabilityFilter::Low,
            AvailabilityFilter::Low => AvailabilityFilter::All,
        }
    }

    pub fn matches(&self, level: AvailabilityLevel) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::High => level == AvailabilityLevel::High,
            AvailabilityFilter::Medium => level == AvailabilityLevel::Medium,
            AvailabilityFilter::Low => level == AvailabilityLevel::Low,
        }
    }
}

/// Start-time bucket filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeOfDayFilter {
    #[default]
    All,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDayFilter {
    pub fn name(&self) -> &str {
        match self {
            TimeOfDayFilter::All => "Cualquier hora",
            TimeOfDayFilter::Morning => "Mañana (6-12)",
            TimeOfDayFilter::Afternoon => "Tarde (12-18)",
            TimeOfDayFilter::Evening => "Noche (18-22)",
            TimeOfDayFilter::Night => "Madrugada (22-6)",
        }
    }

    pub fn next(&self) -> TimeOfDayFilter {
        match self {
            TimeOfDayFilter::All => TimeOfDayFilter::Morning,
            TimeOfDayFilter::Morning => TimeOfDayFilter::Afternoon,
            TimeOfDayFilter::Afternoon => TimeOfDayFilter::Evening,
            TimeOfDayFilter::Evening => TimeOfDayFilter::Night,
            TimeOfDayFilter::Night => TimeOfDayFilter::All,
        }
    }

    /// A missing hour only matches `All`
    pub fn matches(&self, hour: Option<u32>) -> bool {
        if *self == TimeOfDayFilter::All {
            return true;
        }
        let Some(hour) = hour else {
            return false;
        };
        match self {
            TimeOfDayFilter::All => true,
            TimeOfDayFilter::Morning => (6..12).contains(&hour),
            TimeOfDayFilter::Afternoon => (12..18).contains(&hour),
            TimeOfDayFilter::Evening => (18..22).contains(&hour),
            TimeOfDayFilter::Night => hour >= 22 || hour < 6,
        }
    }
}

/// Venue classification filter, matched on the venue name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VenueKind {
    #[default]
    All,
    Stadium,
    Arena,
    Theater,
    Club,
    Outdoor,
}

impl VenueKind {
    pub fn name(&self) -> &str {
        match self {
            VenueKind::All => "Todos",
            VenueKind::Stadium => "Estadio",
            VenueKind::Arena => "Arena",
            VenueKind::Theater => "Teatro",
            VenueKind::Club => "Club",
            VenueKind::Outdoor => "Aire libre",
        }
    }

    pub fn next(&self) -> VenueKind {
        match self {
            VenueKind::All => VenueKind::Stadium,
            VenueKind::Stadium => VenueKind::Arena,
            VenueKind::Arena => VenueKind::Theater,
            VenueKind::Theater => VenueKind::Club,
            VenueKind::Club => VenueKind::Outdoor,
            VenueKind::Outdoor => VenueKind::All,
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            VenueKind::All => &[],
            VenueKind::Stadium => &["estadio", "stadium"],
            VenueKind::Arena => &["arena", "coliseo"],
            VenueKind::Theater => &["teatro", "theater"],
            VenueKind::Club => &["club", "bar"],
            VenueKind::Outdoor => &["parque", "park", "hipódromo"],
        }
    }

    pub fn matches(&self, venue: &str) -> bool {
        if *self == VenueKind::All {
            return true;
        }
        let venue = venue.to_lowercase();
        self.keywords().iter().any(|k| venue.contains(k))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter options
// ─────────────────────────────────────────────────────────────────────────────

/// Every user-adjustable predicate plus the sort key
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub categories: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub price_range: (f64, f64),
    pub date_range: Option<DateRange>,
    pub location: String,
    pub sort: SortKey,
    pub availability: AvailabilityFilter,
    pub time_of_day: TimeOfDayFilter,
    pub venue_kind: VenueKind,
    pub favorites_only: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            genres: BTreeSet::new(),
            price_range: DEFAULT_PRICE_RANGE,
            date_range: None,
            location: String::new(),
            sort: SortKey::default(),
            availability: AvailabilityFilter::default(),
            time_of_day: TimeOfDayFilter::default(),
            venue_kind: VenueKind::default(),
            favorites_only: false,
        }
    }
}

impl FilterOptions {
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.genres.remove(genre) {
            self.genres.insert(genre.to_string());
        }
    }

    /// True when the price bounds differ from the defaults
    pub fn price_narrowed(&self) -> bool {
        self.price_range.0 > DEFAULT_PRICE_RANGE.0 || self.price_range.1 < DEFAULT_PRICE_RANGE.1
    }

    /// Number of active predicates (each selected category and genre counts)
    pub fn active_count(&self) -> usize {
        self.categories.len()
            + self.genres.len()
            + usize::from(!self.location.is_empty())
            + usize::from(self.date_range.is_some())
            + usize::from(self.price_narrowed())
            + usize::from(self.availability != AvailabilityFilter::All)
            + usize::from(self.time_of_day != TimeOfDayFilter::All)
            + usize::from(self.venue_kind != VenueKind::All)
            + usize::from(self.favorites_only)
    }

    /// Reset every predicate and the sort key
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single event passes every active predicate
    pub fn matches(
        &self,
        event: &Event,
        query: &str,
        favorites: &BTreeSet<u32>,
        today: NaiveDate,
    ) -> bool {
        let query = query.trim();
        if !query.is_empty() && !matches_query(event, query) {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&event.category) {
            return false;
        }

        if !self.genres.is_empty() && !self.genres.contains(&event.genre) {
            return false;
        }

        if event.price < self.price_range.0 || event.price > self.price_range.1 {
            return false;
        }

        let location = self.location.trim().to_lowercase();
        if !location.is_empty()
            && ![&event.city, &event.country, &event.venue]
                .iter()
                .any(|field| field.to_lowercase().contains(&location))
        {
            return false;
        }

        if let Some(range) = self.date_range {
            match event.parsed_date() {
                Some(date) if range.contains(date, today) => {}
                _ => return false,
            }
        }

        self.availability.matches(event.availability_level())
            && self.time_of_day.matches(event.hour())
            && self.venue_kind.matches(&event.venue)
            && (!self.favorites_only || favorites.contains(&event.id))
    }
}

/// Case-insensitive match over title, artist, venue, city, genre and tags
fn matches_query(event: &Event, query: &str) -> bool {
    let needle = query.to_lowercase();
    [
        &event.title,
        &event.artist,
        &event.venue,
        &event.city,
        &event.genre,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
        || event
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

// ─────────────────────────────────────────────────────────────────────────────
// Filtering, sorting and suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// Filter and sort the catalog
pub fn filter_events<'a>(
    events: &'a [Event],
    query: &str,
    options: &FilterOptions,
    favorites: &BTreeSet<u32>,
    today: NaiveDate,
) -> Vec<&'a Event> {
    let mut filtered: Vec<&Event> = events
        .iter()
        .filter(|event| options.matches(event, query, favorites, today))
        .collect();

    sort_events(&mut filtered, options.sort);
    filtered
}

/// Stable sort by the given key
pub fn sort_events(events: &mut [&Event], sort: SortKey) {
    match sort {
        SortKey::Date => events.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::PriceLow => events.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => events.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Popularity | SortKey::Availability => {
            events.sort_by(|a, b| b.available.cmp(&a.available))
        }
        SortKey::Alphabetical => events.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        // No geolocation; city order stands in for distance
        SortKey::Distance => events.sort_by(|a, b| locale_cmp(&a.city, &b.city)),
    }
}

/// Up to five events whose title, artist, venue, city or genre contain the query
pub fn search_suggestions<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| {
            [
                &event.title,
                &event.artist,
                &event.venue,
                &event.city,
                &event.genre,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Compare strings the way a Spanish reader expects: case and accents are
/// ignored first, raw text breaks ties
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Distinct categories present in the catalog, in locale order
pub fn all_categories(events: &[Event]) -> Vec<String> {
    distinct(events.iter().map(|e| e.category.as_str()))
}

/// Distinct genres present in the catalog, in locale order
pub fn all_genres(events: &[Event]) -> Vec<String> {
    distinct(events.iter().map(|e| e.genre.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out.dedup();
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Saved searches
// ─────────────────────────────────────────────────────────────────────────────

/// A named query + filter preset, kept for the session
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSearch {
    pub id: u32,
    pub name: String,
    pub query: String,
    pub options: FilterOptions,
}

/// The two built-in presets
pub fn default_saved_searches() -> Vec<SavedSearch> {
    let mut cheap_concerts = FilterOptions::default();
    cheap_concerts.toggle_category("Concierto");
    cheap_concerts.price_range = (0.0, 0.05);

    let mut summer_festivals = FilterOptions::default();
    summer_festivals.toggle_category("Festival");
    summer_festivals.date_range = Some(DateRange::ThisMonth);

    vec![
        SavedSearch {
            id: 1,
            name: "Conciertos Económicos".to_string(),
            query: String::new(),
            options: cheap_concerts,
        },
        SavedSearch {
            id: 2,
            name: "Festivales de Verano".to_string(),
            query: String::new(),
            options: summer_festivals,
        },
    ]
}

/// Append the current query and filters as a new preset, returning its id
pub fn save_search(
    searches: &mut Vec<SavedSearch>,
    name: &str,
    query: &str,
    options: &FilterOptions,
) -> u32 {
    let id = searches.iter().map(|s| s.id).max().unwrap_or(0) + 1;
    searches.push(SavedSearch {
        id,
        name: name.to_string(),
        query: query.to_string(),
        options: options.clone(),
    });
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::mock_events;
    use crate::model::event::tests::create_test_event;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ids(events: &[&Event]) -> Vec<u32> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_search_tango_returns_two_events() {
        let events = mock_events();
        let result = filter_events(
            &events,
            "tango",
            &FilterOptions::default(),
            &BTreeSet::new(),
            date("2025-01-01"),
        );
        assert_eq!(ids(&result), vec![6, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_tags() {
        let events = mock_events();
        let today = date("2025-01-01");
        let upper = filter_events(&events, "TANGO", &FilterOptions::default(), &BTreeSet::new(), today);
        assert_eq!(upper.len(), 2);

        let by_tag = filter_events(&events, "superclásico", &FilterOptions::default(), &BTreeSet::new(), today);
        assert_eq!(ids(&by_tag), vec![8]);
    }

    #[test]
    fn test_default_filters_keep_whole_catalog() {
        let events = mock_events();
        let result = filter_events(&events, "", &FilterOptions::default(), &BTreeSet::new(), date("2025-01-01"));
        assert_eq!(result.len(), events.len());
    }

    #[test]
    fn test_date_sort_puts_invalid_dates_last() {
        let events = mock_events();
        let result = filter_events(&events, "", &FilterOptions::default(), &BTreeSet::new(), date("2025-01-01"));
        assert_eq!(result.last().map(|e| e.id), Some(10));
        assert_eq!(result.first().map(|e| e.id), Some(14));
    }

    #[test]
    fn test_sort_price_low_is_non_decreasing() {
        let events = mock_events();
        let options = FilterOptions {
            sort: SortKey::PriceLow,
            ..Default::default()
        };
        let result = filter_events(&events, "", &options, &BTreeSet::new(), date("2025-01-01"));
        assert!(result.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_sort_price_high_is_non_increasing() {
        let events = mock_events();
        let options = FilterOptions {
            sort: SortKey::PriceHigh,
            ..Default::default()
        };
        let result = filter_events(&events, "", &options, &BTreeSet::new(), date("2025-01-01"));
        assert!(result.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_sort_alphabetical_uses_locale_order() {
        let events = mock_events();
        let options = FilterOptions {
            sort: SortKey::Alphabetical,
            ..Default::default()
        };
        let result = filter_events(&events, "", &options, &BTreeSet::new(), date("2025-01-01"));
        assert!(result
            .windows(2)
            .all(|w| locale_cmp(&w[0].title, &w[1].title) != Ordering::Greater));
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let a = create_test_event(1, "a", 0.1, "2025-03-15");
        let b = create_test_event(2, "b", 0.1, "2025-03-15");
        let c = create_test_event(3, "c", 0.05, "2025-03-15");
        let mut events = vec![&a, &b, &c];
        sort_events(&mut events, SortKey::PriceHigh);
        assert_eq!(ids(&events), vec![1, 2, 3]);
    }

    #[test]
    fn test_locale_cmp_folds_accents_and_case() {
        assert_eq!(locale_cmp("Ópera", "obra"), Ordering::Greater);
        assert_eq!(locale_cmp("álbum", "Zona"), Ordering::Less);
        assert_eq!(locale_cmp("abc", "abc"), Ordering::Equal);
        assert_ne!(locale_cmp("abc", "ABC"), Ordering::Equal);
    }

    #[test]
    fn test_date_ranges() {
        let events = mock_events();
        let today = date("2025-03-10");
        let run = |range| {
            let options = FilterOptions {
                date_range: Some(range),
                ..Default::default()
            };
            ids(&filter_events(&events, "", &options, &BTreeSet::new(), today))
        };

        assert_eq!(run(DateRange::ThisWeek), vec![8, 19, 1]);
        assert_eq!(run(DateRange::ThisMonth), vec![8, 19, 1, 13, 4, 16]);
        assert_eq!(run(DateRange::NextMonth), vec![9, 15, 11, 2, 18]);
        assert!(run(DateRange::Today).is_empty());
    }

    #[test]
    fn test_invalid_date_never_matches_a_range() {
        let events = mock_events();
        let today = date("2025-02-28");
        for range in DateRange::all() {
            let options = FilterOptions {
                date_range: Some(range),
                ..Default::default()
            };
            let result = filter_events(&events, "", &options, &BTreeSet::new(), today);
            assert!(result.iter().all(|e| e.id != 10), "{:?}", range);
        }

        let options = FilterOptions {
            date_range: Some(DateRange::Today),
            ..Default::default()
        };
        assert_eq!(ids(&filter_events(&events, "", &options, &BTreeSet::new(), today)), vec![3]);
    }

    #[test]
    fn test_date_range_across_year_end() {
        let today = date("2025-12-30");
        assert!(DateRange::Tomorrow.contains(date("2025-12-31"), today));
        assert!(DateRange::ThisWeek.contains(date("2026-01-06"), today));
        assert!(!DateRange::ThisMonth.contains(date("2026-01-01"), today));
        assert!(DateRange::NextMonth.contains(date("2026-01-31"), today));
        assert!(!DateRange::NextMonth.contains(date("2026-02-01"), today));
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert!(TimeOfDayFilter::Morning.matches(Some(6)));
        assert!(!TimeOfDayFilter::Morning.matches(Some(12)));
        assert!(TimeOfDayFilter::Evening.matches(Some(21)));
        assert!(TimeOfDayFilter::Night.matches(Some(22)));
        assert!(TimeOfDayFilter::Night.matches(Some(1)));
        assert!(!TimeOfDayFilter::Night.matches(None));
        assert!(TimeOfDayFilter::All.matches(None));

        let events = mock_events();
        let options = FilterOptions {
            time_of_day: TimeOfDayFilter::Night,
            ..Default::default()
        };
        let mut night = ids(&filter_events(&events, "", &options, &BTreeSet::new(), date("2025-01-01")));
        night.sort();
        assert_eq!(night, vec![6, 10, 13]);
    }

    #[test]
    fn test_venue_kinds() {
        let events = mock_events();
        let run = |kind| {
            let options = FilterOptions {
                venue_kind: kind,
                ..Default::default()
            };
            let mut found = ids(&filter_events(&events, "", &options, &BTreeSet::new(), date("2025-01-01")));
            found.sort();
            found
        };
        assert_eq!(run(VenueKind::Stadium), vec![1, 8, 11, 17]);
        assert_eq!(run(VenueKind::Outdoor), vec![2, 4, 5, 9, 17]);
        assert_eq!(run(VenueKind::Club), vec![6, 10, 14]);
    }

    #[test]
    fn test_favorites_only() {
        let events = mock_events();
        let favorites: BTreeSet<u32> = [5, 2].into_iter().collect();
        let options = FilterOptions {
            favorites_only: true,
            ..Default::default()
        };
        let result = filter_events(&events, "", &options, &favorites, date("2025-01-01"));
        assert_eq!(ids(&result), vec![2, 5]);
    }

    #[test]
    fn test_location_matches_city_country_or_venue() {
        let events = mock_events();
        let options = FilterOptions {
            location: "miami".to_string(),
            ..Default::default()
        };
        let result = filter_events(&events, "", &options, &BTreeSet::new(), date("2025-01-01"));
        assert_eq!(ids(&result), vec![4]);

        let options = FilterOptions {
            location: "colón".to_string(),
            ..Default::default()
        };
        let mut result = ids(&filter_events(&events, "", &options, &BTreeSet::new(), date("2025-01-01")));
        result.sort();
        assert_eq!(result, vec![12, 15]);
    }

    #[test]
    fn test_results_satisfy_every_predicate() {
        let events = mock_events();
        let favorites: BTreeSet<u32> = [1, 3, 8, 16].into_iter().collect();
        let today = date("2025-03-10");

        let mut option_sets = Vec::new();
        for range in [None, Some(DateRange::ThisWeek), Some(DateRange::NextMonth)] {
            for availability in [AvailabilityFilter::All, AvailabilityFilter::High, AvailabilityFilter::Low] {
                for venue_kind in [VenueKind::All, VenueKind::Theater, VenueKind::Stadium] {
                    for favorites_only in [false, true] {
                        let mut options = FilterOptions {
                            date_range: range,
                            availability,
                            venue_kind,
                            favorites_only,
                            price_range: (0.02, 0.1),
                            ..Default::default()
                        };
                        if favorites_only {
                            options.toggle_category("Concierto");
                            options.toggle_category("Festival");
                        }
                        option_sets.push(options);
                    }
                }
            }
        }

        for options in &option_sets {
            for query in ["", "buenos", "rock"] {
                let result = filter_events(&events, query, options, &favorites, today);
                for event in &result {
                    assert!(options.matches(event, query, &favorites, today));
                }

                let expected = events
                    .iter()
                    .filter(|e| options.matches(e, query, &favorites, today))
                    .count();
                assert_eq!(result.len(), expected);
            }
        }
    }

    #[test]
    fn test_active_count_and_clear() {
        let mut options = FilterOptions::default();
        assert_eq!(options.active_count(), 0);

        options.toggle_category("Concierto");
        options.toggle_category("Festival");
        options.toggle_genre("Tango");
        options.price_range = (0.0, 0.1);
        options.favorites_only = true;
        options.date_range = Some(DateRange::Today);
        assert_eq!(options.active_count(), 6);

        options.toggle_category("Festival");
        assert_eq!(options.active_count(), 5);

        options.sort = SortKey::PriceHigh;
        options.clear();
        assert_eq!(options, FilterOptions::default());
    }

    #[test]
    fn test_search_suggestions_capped_at_five() {
        let events = mock_events();
        assert_eq!(search_suggestions(&events, "buenos aires").len(), 5);
        assert!(search_suggestions(&events, "").is_empty());
        assert_eq!(ids(&search_suggestions(&events, "coldplay")), vec![1]);
    }

    #[test]
    fn test_saved_searches() {
        let events = mock_events();
        let mut searches = default_saved_searches();
        assert_eq!(searches.len(), 2);

        let cheap = &searches[0].options;
        let result = filter_events(&events, "", cheap, &BTreeSet::new(), date("2025-01-01"));
        assert!(result
            .iter()
            .all(|e| e.category == "Concierto" && e.price <= 0.05));
        assert_eq!(result.len(), 3);

        let mut current = FilterOptions::default();
        current.toggle_genre("Jazz");
        let id = save_search(&mut searches, "Jazz", "parque", &current);
        assert_eq!(id, 3);
        assert_eq!(searches[2].options, current);
    }

    #[test]
    fn test_all_categories_sorted_and_distinct() {
        let events = mock_events();
        assert_eq!(
            all_categories(&events),
            vec!["Concierto", "Deportes", "Festival", "Show", "Teatro"]
        );
        let genres = all_genres(&events);
        assert!(genres.contains(&"Tango".to_string()));
        assert_eq!(genres.iter().filter(|g| *g == "Electrónica").count(), 1);
    }

    #[test]
    fn test_sort_key_cycle() {
        let mut key = SortKey::Date;
        for _ in 0..SortKey::all().len() {
            key = key.next();
        }
        assert_eq!(key, SortKey::Date);
    }
}
