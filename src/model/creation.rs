//! Event-creation wizard state
//!
//! Collects a new event's fields over four steps. Publishing produces a
//! receipt and resets the form; nothing is stored.

use crate::error::WizardError;

/// Category choices offered by the form
pub const CATEGORY_OPTIONS: &[&str] = &[
    "Música",
    "Teatro",
    "Deportes",
    "Entretenimiento",
    "Familia",
    "Cultura",
];

/// Age restriction choices; the empty string means none
pub const AGE_OPTIONS: &[&str] = &["", "13+", "16+", "18+", "21+"];

/// Default tickets a single buyer may take of one type
const DEFAULT_MAX_PER_PERSON: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateStep {
    #[default]
    BasicInfo,
    VenueAndDate,
    TicketConfiguration,
    Review,
}

impl CreateStep {
    pub fn all() -> Vec<CreateStep> {
        vec![
            CreateStep::BasicInfo,
            CreateStep::VenueAndDate,
            CreateStep::TicketConfiguration,
            CreateStep::Review,
        ]
    }

    pub fn title(&self) -> &str {
        match self {
            CreateStep::BasicInfo => "Información básica",
            CreateStep::VenueAndDate => "Lugar y fecha",
            CreateStep::TicketConfiguration => "Tickets",
            CreateStep::Review => "Revisión y publicación",
        }
    }

    pub fn step_number(&self) -> usize {
        match self {
            CreateStep::BasicInfo => 1,
            CreateStep::VenueAndDate => 2,
            CreateStep::TicketConfiguration => 3,
            CreateStep::Review => 4,
        }
    }

    fn next(&self) -> Option<CreateStep> {
        match self {
            CreateStep::BasicInfo => Some(CreateStep::VenueAndDate),
            CreateStep::VenueAndDate => Some(CreateStep::TicketConfiguration),
            CreateStep::TicketConfiguration => Some(CreateStep::Review),
            CreateStep::Review => None,
        }
    }

    fn prev(&self) -> Option<CreateStep> {
        match self {
            CreateStep::BasicInfo => None,
            CreateStep::VenueAndDate => Some(CreateStep::BasicInfo),
            CreateStep::TicketConfiguration => Some(CreateStep::VenueAndDate),
            CreateStep::Review => Some(CreateStep::TicketConfiguration),
        }
    }
}

/// Kind of event being drafted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventType {
    #[default]
    Concert,
    Festival,
    Theater,
    Sports,
    Conference,
    Other,
}

impl EventType {
    pub fn name(&self) -> &str {
        match self {
            EventType::Concert => "Concierto",
            EventType::Festival => "Festival",
            EventType::Theater => "Teatro",
            EventType::Sports => "Deportes",
            EventType::Conference => "Conferencia",
            EventType::Other => "Otro",
        }
    }

    pub fn next(&self) -> EventType {
        match self {
            EventType::Concert => EventType::Festival,
            EventType::Festival => EventType::Theater,
            EventType::Theater => EventType::Sports,
            EventType::Sports => EventType::Conference,
            EventType::Conference => EventType::Other,
            EventType::Other => EventType::Concert,
        }
    }
}

/// What buyers get back if they cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefundPolicy {
    #[default]
    NoRefund,
    PartialRefund,
    FullRefund,
}

impl RefundPolicy {
    pub fn all() -> Vec<RefundPolicy> {
        vec![
            RefundPolicy::NoRefund,
            RefundPolicy::PartialRefund,
            RefundPolicy::FullRefund,
        ]
    }

    /// Stable identifier, used in logs
    pub fn key(&self) -> &str {
        match self {
            RefundPolicy::NoRefund => "no-refund",
            RefundPolicy::PartialRefund => "partial-refund",
            RefundPolicy::FullRefund => "full-refund",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RefundPolicy::NoRefund => "Sin reembolso",
            RefundPolicy::PartialRefund => "Reembolso parcial (hasta 7 días antes)",
            RefundPolicy::FullRefund => "Reembolso completo (hasta 24 horas antes)",
        }
    }

    pub fn next(&self) -> RefundPolicy {
        match self {
            RefundPolicy::NoRefund => RefundPolicy::PartialRefund,
            RefundPolicy::PartialRefund => RefundPolicy::FullRefund,
            RefundPolicy::FullRefund => RefundPolicy::NoRefund,
        }
    }

    pub fn prev(&self) -> RefundPolicy {
        match self {
            RefundPolicy::NoRefund => RefundPolicy::FullRefund,
            RefundPolicy::PartialRefund => RefundPolicy::NoRefund,
            RefundPolicy::FullRefund => RefundPolicy::PartialRefund,
        }
    }
}

/// A ticket type being configured. Price and quantity stay as typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketTypeDraft {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub max_per_person: u32,
    pub is_active: bool,
}

impl TicketTypeDraft {
    fn blank(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            quantity: String::new(),
            max_per_person: DEFAULT_MAX_PER_PERSON,
            is_active: true,
        }
    }

    /// Name, price and quantity are all filled in
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.name) && !is_blank(&self.price) && !is_blank(&self.quantity)
    }

    /// Parsed quantity, zero when unparseable
    pub fn parsed_quantity(&self) -> u64 {
        self.quantity.trim().parse().unwrap_or(0)
    }

    /// Parsed price, zero when unparseable
    pub fn parsed_price(&self) -> f64 {
        self.price.trim().parse().unwrap_or(0.0)
    }
}

/// Editable text fields of a ticket type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    Name,
    Description,
    Price,
    Quantity,
}

impl TicketField {
    pub fn all() -> Vec<TicketField> {
        vec![
            TicketField::Name,
            TicketField::Description,
            TicketField::Price,
            TicketField::Quantity,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            TicketField::Name => "Nombre",
            TicketField::Description => "Descripción",
            TicketField::Price => "Precio (ETH)",
            TicketField::Quantity => "Cantidad",
        }
    }
}

/// Editable fields of the event itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Artist,
    Description,
    Category,
    Genre,
    AgeRestriction,
    CoverImage,
    Venue,
    MaxCapacity,
    Address,
    City,
    Country,
    Date,
    Time,
    Doors,
    Terms,
}

impl DraftField {
    pub fn label(&self) -> &str {
        match self {
            DraftField::Title => "Título del evento",
            DraftField::Artist => "Artista / Organizador",
            DraftField::Description => "Descripción",
            DraftField::Category => "Categoría",
            DraftField::Genre => "Género",
            DraftField::AgeRestriction => "Restricción de edad",
            DraftField::CoverImage => "Imagen de portada (URL)",
            DraftField::Venue => "Lugar",
            DraftField::MaxCapacity => "Capacidad máxima",
            DraftField::Address => "Dirección",
            DraftField::City => "Ciudad",
            DraftField::Country => "País",
            DraftField::Date => "Fecha (AAAA-MM-DD)",
            DraftField::Time => "Hora (HH:MM)",
            DraftField::Doors => "Apertura de puertas",
            DraftField::Terms => "Términos adicionales",
        }
    }

    /// Fields picked from a fixed list instead of typed
    pub fn is_choice(&self) -> bool {
        matches!(self, DraftField::Category | DraftField::AgeRestriction)
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            DraftField::Title
                | DraftField::Artist
                | DraftField::Category
                | DraftField::Venue
                | DraftField::MaxCapacity
                | DraftField::Address
                | DraftField::City
                | DraftField::Date
                | DraftField::Time
        )
    }

    /// Editable fields shown on a step
    pub fn for_step(step: CreateStep) -> Vec<DraftField> {
        match step {
            CreateStep::BasicInfo => vec![
                DraftField::Title,
                DraftField::Artist,
                DraftField::Description,
                DraftField::Category,
                DraftField::Genre,
                DraftField::AgeRestriction,
                DraftField::CoverImage,
            ],
            CreateStep::VenueAndDate => vec![
                DraftField::Venue,
                DraftField::MaxCapacity,
                DraftField::Address,
                DraftField::City,
                DraftField::Country,
                DraftField::Date,
                DraftField::Time,
                DraftField::Doors,
            ],
            CreateStep::TicketConfiguration => Vec::new(),
            CreateStep::Review => vec![DraftField::Terms],
        }
    }
}

/// The event being drafted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub artist: String,
    pub description: String,
    pub category: String,
    pub genre: String,
    pub age_restriction: String,
    pub cover_image: String,
    pub event_type: EventType,
    pub venue: String,
    pub max_capacity: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub date: String,
    pub time: String,
    pub doors: String,
    pub ticket_types: Vec<TicketTypeDraft>,
    pub refund_policy: RefundPolicy,
    pub transferable: bool,
    pub resale_allowed: bool,
    pub terms: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            description: String::new(),
            category: String::new(),
            genre: String::new(),
            age_restriction: String::new(),
            cover_image: String::new(),
            event_type: EventType::default(),
            venue: String::new(),
            max_capacity: String::new(),
            address: String::new(),
            city: String::new(),
            country: "Argentina".to_string(),
            date: String::new(),
            time: String::new(),
            doors: String::new(),
            ticket_types: vec![TicketTypeDraft {
                name: "General".to_string(),
                description: "Acceso general al evento".to_string(),
                ..TicketTypeDraft::blank(1)
            }],
            refund_policy: RefundPolicy::default(),
            transferable: true,
            resale_allowed: true,
            terms: String::new(),
        }
    }
}

impl EventDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Artist => &self.artist,
            DraftField::Description => &self.description,
            DraftField::Category => &self.category,
            DraftField::Genre => &self.genre,
            DraftField::AgeRestriction => &self.age_restriction,
            DraftField::CoverImage => &self.cover_image,
            DraftField::Venue => &self.venue,
            DraftField::MaxCapacity => &self.max_capacity,
            DraftField::Address => &self.address,
            DraftField::City => &self.city,
            DraftField::Country => &self.country,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Doors => &self.doors,
            DraftField::Terms => &self.terms,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Artist => &mut self.artist,
            DraftField::Description => &mut self.description,
            DraftField::Category => &mut self.category,
            DraftField::Genre => &mut self.genre,
            DraftField::AgeRestriction => &mut self.age_restriction,
            DraftField::CoverImage => &mut self.cover_image,
            DraftField::Venue => &mut self.venue,
            DraftField::MaxCapacity => &mut self.max_capacity,
            DraftField::Address => &mut self.address,
            DraftField::City => &mut self.city,
            DraftField::Country => &mut self.country,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
            DraftField::Doors => &mut self.doors,
            DraftField::Terms => &mut self.terms,
        }
    }

    /// Step a choice field to its next option
    pub fn cycle_choice(&mut self, field: DraftField) {
        let options = match field {
            DraftField::Category => CATEGORY_OPTIONS,
            DraftField::AgeRestriction => AGE_OPTIONS,
            _ => return,
        };
        let value = self.field_mut(field);
        let next = options
            .iter()
            .position(|o| *o == value.as_str())
            .map(|idx| (idx + 1) % options.len())
            .unwrap_or(0);
        *value = options[next].to_string();
    }

    /// Sum of parsed quantities across ticket types
    pub fn total_tickets_to_sell(&self) -> u64 {
        self.ticket_types.iter().map(TicketTypeDraft::parsed_quantity).sum()
    }

    /// Sum of quantity × price across ticket types
    pub fn estimated_revenue(&self) -> f64 {
        self.ticket_types
            .iter()
            .map(|t| t.parsed_quantity() as f64 * t.parsed_price())
            .sum()
    }

    /// Share of the venue capacity covered by the configured tickets
    pub fn capacity_usage_percent(&self) -> Option<u64> {
        let capacity: u64 = self.max_capacity.trim().parse().ok()?;
        if capacity == 0 {
            return None;
        }
        let ratio = self.total_tickets_to_sell() as f64 / capacity as f64;
        Some((ratio * 100.0).round() as u64)
    }
}

/// Summary returned by a successful publish
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReceipt {
    pub title: String,
    pub total_tickets: u64,
    pub estimated_revenue: f64,
}

/// The creation wizard: current step plus the draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreationWizard {
    pub step: CreateStep,
    pub draft: EventDraft,
}

impl CreationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of the required fields still missing on the current step
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let draft = &self.draft;
        let required: Vec<(&'static str, &str)> = match self.step {
            CreateStep::BasicInfo => vec![
                ("título", draft.title.as_str()),
                ("artista", draft.artist.as_str()),
                ("categoría", draft.category.as_str()),
            ],
            CreateStep::VenueAndDate => vec![
                ("lugar", draft.venue.as_str()),
                ("capacidad máxima", draft.max_capacity.as_str()),
                ("dirección", draft.address.as_str()),
                ("ciudad", draft.city.as_str()),
                ("fecha", draft.date.as_str()),
                ("hora", draft.time.as_str()),
            ],
            CreateStep::TicketConfiguration => {
                if draft.ticket_types.iter().any(TicketTypeDraft::is_complete) {
                    Vec::new()
                } else {
                    vec![("un tipo de entrada con nombre, precio y cantidad", "")]
                }
            }
            CreateStep::Review => Vec::new(),
        };

        required
            .into_iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn can_advance(&self) -> bool {
        self.step != CreateStep::Review && self.missing_fields().is_empty()
    }

    pub fn advance(&mut self) -> Result<CreateStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AlreadyComplete)?;
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(WizardError::MissingFields(missing));
        }
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<CreateStep, WizardError> {
        let prev = self.step.prev().ok_or(WizardError::NoPreviousStep)?;
        self.step = prev;
        Ok(prev)
    }

    /// Append a blank ticket type, returning its id
    pub fn add_ticket_type(&mut self) -> u32 {
        let id = self
            .draft
            .ticket_types
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            + 1;
        self.draft.ticket_types.push(TicketTypeDraft::blank(id));
        id
    }

    /// Set one text field of a ticket type. Unknown ids are ignored.
    pub fn update_ticket_type(&mut self, id: u32, field: TicketField, value: &str) {
        if let Some(ticket) = self.ticket_type_mut(id) {
            let slot = match field {
                TicketField::Name => &mut ticket.name,
                TicketField::Description => &mut ticket.description,
                TicketField::Price => &mut ticket.price,
                TicketField::Quantity => &mut ticket.quantity,
            };
            *slot = value.to_string();
        }
    }

    pub fn set_max_per_person(&mut self, id: u32, max: u32) {
        if let Some(ticket) = self.ticket_type_mut(id) {
            ticket.max_per_person = max.max(1);
        }
    }

    pub fn toggle_ticket_active(&mut self, id: u32) {
        if let Some(ticket) = self.ticket_type_mut(id) {
            ticket.is_active = !ticket.is_active;
        }
    }

    pub fn remove_ticket_type(&mut self, id: u32) {
        self.draft.ticket_types.retain(|t| t.id != id);
    }

    fn ticket_type_mut(&mut self, id: u32) -> Option<&mut TicketTypeDraft> {
        self.draft.ticket_types.iter_mut().find(|t| t.id == id)
    }

    /// Finish the wizard from the review step and start over
    pub fn publish(&mut self) -> Result<PublishReceipt, WizardError> {
        if self.step != CreateStep::Review {
            return Err(WizardError::NotReadyToPublish);
        }

        let receipt = PublishReceipt {
            title: self.draft.title.trim().to_string(),
            total_tickets: self.draft.total_tickets_to_sell(),
            estimated_revenue: self.draft.estimated_revenue(),
        };
        tracing::info!(
            title = %receipt.title,
            tickets = receipt.total_tickets,
            refund_policy = self.draft.refund_policy.key(),
            transferable = self.draft.transferable,
            resale_allowed = self.draft.resale_allowed,
            "Event published"
        );

        self.cancel();
        Ok(receipt)
    }

    /// Whether anything was typed or chosen since the last reset
    pub fn has_changes(&self) -> bool {
        *self != Self::default()
    }

    /// Drop the draft and return to the first step
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_basic(wizard: &mut CreationWizard) {
        wizard.draft.title = "Noche de Jazz".to_string();
        wizard.draft.artist = "Quinteto Sur".to_string();
        wizard.draft.category = "Música".to_string();
    }

    fn fill_venue(wizard: &mut CreationWizard) {
        wizard.draft.venue = "Usina del Arte".to_string();
        wizard.draft.max_capacity = "1000".to_string();
        wizard.draft.address = "Agustín R. Caffarena 1".to_string();
        wizard.draft.city = "Buenos Aires".to_string();
        wizard.draft.date = "2025-06-01".to_string();
        wizard.draft.time = "21:00".to_string();
    }

    #[test]
    fn test_default_draft() {
        let wizard = CreationWizard::new();
        assert_eq!(wizard.step, CreateStep::BasicInfo);
        assert_eq!(wizard.draft.country, "Argentina");
        assert_eq!(wizard.draft.ticket_types.len(), 1);
        assert_eq!(wizard.draft.ticket_types[0].name, "General");
        assert_eq!(wizard.draft.ticket_types[0].max_per_person, 4);
        assert!(wizard.draft.ticket_types[0].is_active);
        assert_eq!(wizard.draft.refund_policy, RefundPolicy::NoRefund);
        assert!(wizard.draft.transferable);
        assert!(wizard.draft.resale_allowed);
        assert!(wizard.draft.terms.is_empty());
    }

    #[test]
    fn test_basic_info_requires_title_artist_category() {
        let mut wizard = CreationWizard::new();
        assert_eq!(
            wizard.advance(),
            Err(WizardError::MissingFields(vec!["título", "artista", "categoría"]))
        );

        wizard.draft.title = "Noche de Jazz".to_string();
        wizard.draft.artist = "   ".to_string();
        wizard.draft.category = "Música".to_string();
        assert_eq!(wizard.advance(), Err(WizardError::MissingFields(vec!["artista"])));
        assert_eq!(wizard.step, CreateStep::BasicInfo);

        fill_basic(&mut wizard);
        assert_eq!(wizard.advance(), Ok(CreateStep::VenueAndDate));
    }

    #[test]
    fn test_venue_step_gating() {
        let mut wizard = CreationWizard::new();
        fill_basic(&mut wizard);
        wizard.advance().unwrap();

        wizard.draft.venue = "Usina del Arte".to_string();
        let Err(WizardError::MissingFields(missing)) = wizard.advance() else {
            panic!("expected missing fields");
        };
        assert_eq!(missing.len(), 5);

        fill_venue(&mut wizard);
        assert_eq!(wizard.advance(), Ok(CreateStep::TicketConfiguration));
    }

    #[test]
    fn test_ticket_step_needs_one_complete_type() {
        let mut wizard = CreationWizard::new();
        fill_basic(&mut wizard);
        wizard.advance().unwrap();
        fill_venue(&mut wizard);
        wizard.advance().unwrap();

        assert!(!wizard.can_advance());
        wizard.update_ticket_type(1, TicketField::Price, "0.05");
        assert!(!wizard.can_advance());
        wizard.update_ticket_type(1, TicketField::Quantity, "500");
        assert_eq!(wizard.advance(), Ok(CreateStep::Review));
        assert_eq!(wizard.advance(), Err(WizardError::AlreadyComplete));
    }

    #[test]
    fn test_ticket_type_ids_and_removal() {
        let mut wizard = CreationWizard::new();
        assert_eq!(wizard.add_ticket_type(), 2);
        assert_eq!(wizard.add_ticket_type(), 3);

        wizard.remove_ticket_type(2);
        assert_eq!(wizard.add_ticket_type(), 4);

        wizard.remove_ticket_type(99);
        let ids: Vec<u32> = wizard.draft.ticket_types.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        wizard.toggle_ticket_active(3);
        wizard.set_max_per_person(3, 0);
        let ticket = &wizard.draft.ticket_types[1];
        assert!(!ticket.is_active);
        assert_eq!(ticket.max_per_person, 1);
    }

    #[test]
    fn test_totals_ignore_unparseable_values() {
        let mut wizard = CreationWizard::new();
        wizard.update_ticket_type(1, TicketField::Quantity, "100");
        wizard.update_ticket_type(1, TicketField::Price, "0.05");
        let vip = wizard.add_ticket_type();
        wizard.update_ticket_type(vip, TicketField::Quantity, "20");
        wizard.update_ticket_type(vip, TicketField::Price, "abc");
        let bad = wizard.add_ticket_type();
        wizard.update_ticket_type(bad, TicketField::Quantity, "lots");

        assert_eq!(wizard.draft.total_tickets_to_sell(), 120);
        assert!((wizard.draft.estimated_revenue() - 5.0).abs() < 1e-9);

        wizard.draft.max_capacity = "240".to_string();
        assert_eq!(wizard.draft.capacity_usage_percent(), Some(50));
    }

    #[test]
    fn test_publish_only_from_review_and_resets() {
        let mut wizard = CreationWizard::new();
        assert_eq!(wizard.publish(), Err(WizardError::NotReadyToPublish));

        fill_basic(&mut wizard);
        wizard.advance().unwrap();
        fill_venue(&mut wizard);
        wizard.advance().unwrap();
        wizard.update_ticket_type(1, TicketField::Price, "0.1");
        wizard.update_ticket_type(1, TicketField::Quantity, "10");
        wizard.advance().unwrap();

        let receipt = wizard.publish().unwrap();
        assert_eq!(receipt.title, "Noche de Jazz");
        assert_eq!(receipt.total_tickets, 10);
        assert!((receipt.estimated_revenue - 1.0).abs() < 1e-9);
        assert_eq!(wizard, CreationWizard::new());
    }

    #[test]
    fn test_back_and_cancel() {
        let mut wizard = CreationWizard::new();
        assert_eq!(wizard.back(), Err(WizardError::NoPreviousStep));

        fill_basic(&mut wizard);
        wizard.advance().unwrap();
        assert_eq!(wizard.back(), Ok(CreateStep::BasicInfo));
        assert_eq!(wizard.draft.title, "Noche de Jazz");

        assert!(wizard.has_changes());
        wizard.cancel();
        assert_eq!(wizard, CreationWizard::new());
        assert!(!wizard.has_changes());
    }

    #[test]
    fn test_cycle_choice() {
        let mut draft = EventDraft::default();
        draft.cycle_choice(DraftField::Category);
        assert_eq!(draft.category, "Música");
        draft.category = "Cultura".to_string();
        draft.cycle_choice(DraftField::Category);
        assert_eq!(draft.category, "Música");

        draft.cycle_choice(DraftField::AgeRestriction);
        assert_eq!(draft.age_restriction, "13+");
        draft.age_restriction = "18+".to_string();
        draft.cycle_choice(DraftField::AgeRestriction);
        assert_eq!(draft.age_restriction, "21+");
        draft.cycle_choice(DraftField::AgeRestriction);
        assert_eq!(draft.age_restriction, "");

        draft.cycle_choice(DraftField::Title);
        assert_eq!(draft.title, "");
    }

    #[test]
    fn test_refund_policy_cycles_both_ways() {
        for policy in RefundPolicy::all() {
            assert_eq!(policy.next().prev(), policy);
        }
        assert_eq!(RefundPolicy::FullRefund.next(), RefundPolicy::NoRefund);
        assert_eq!(RefundPolicy::PartialRefund.key(), "partial-refund");
    }

    #[test]
    fn test_terms_count_as_changes_and_reset() {
        let mut wizard = CreationWizard::new();
        wizard.draft.resale_allowed = false;
        assert!(wizard.has_changes());
        wizard.draft.resale_allowed = true;
        assert!(!wizard.has_changes());

        wizard.draft.refund_policy = RefundPolicy::FullRefund;
        wizard.draft.field_mut(DraftField::Terms).push_str("Sin mascotas");
        assert!(wizard.has_changes());
        assert_eq!(wizard.draft.field(DraftField::Terms), "Sin mascotas");

        wizard.cancel();
        assert_eq!(wizard.draft.refund_policy, RefundPolicy::NoRefund);
        assert!(wizard.draft.terms.is_empty());
    }

    #[test]
    fn test_review_step_has_only_terms_text() {
        assert_eq!(DraftField::for_step(CreateStep::Review), vec![DraftField::Terms]);
        assert!(!DraftField::Terms.is_required());
        assert!(DraftField::for_step(CreateStep::TicketConfiguration).is_empty());
    }
}
