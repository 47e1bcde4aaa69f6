//! Checkout wizard state
//!
//! A four-step linear flow: ticket selection, customer info, payment method
//! and confirmation. Nothing is submitted anywhere; the confirmation carries
//! a cosmetic transaction hash.

use super::event::{format_amount, Event};
use crate::error::WizardError;
use chrono::{DateTime, Local};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ─────────────────────────────────────────────────────────────────────────────
// Tickets
// ─────────────────────────────────────────────────────────────────────────────

/// Ticket tier with a fixed multiplier over the event's base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketTier {
    General,
    Vip,
    Platinum,
}

impl TicketTier {
    pub fn all() -> Vec<TicketTier> {
        vec![TicketTier::General, TicketTier::Vip, TicketTier::Platinum]
    }

    pub fn name(&self) -> &str {
        match self {
            TicketTier::General => "General",
            TicketTier::Vip => "VIP",
            TicketTier::Platinum => "Platinum",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TicketTier::General => "Acceso general al evento",
            TicketTier::Vip => "Zona preferencial y acceso anticipado",
            TicketTier::Platinum => "Primera fila, meet & greet y merchandising",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TicketTier::General => 1.0,
            TicketTier::Vip => 2.5,
            TicketTier::Platinum => 4.0,
        }
    }

    pub fn price_for(&self, event: &Event) -> f64 {
        event.price * self.multiplier()
    }
}

/// One selected tier and how many of it
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub tier: TicketTier,
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Buyer details
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Crypto,
    Card,
}

impl PaymentMethod {
    pub fn name(&self) -> &str {
        match self {
            PaymentMethod::Crypto => "Criptomonedas (ETH)",
            PaymentMethod::Card => "Tarjeta de crédito/débito",
        }
    }

    pub fn toggled(&self) -> PaymentMethod {
        match self {
            PaymentMethod::Crypto => PaymentMethod::Card,
            PaymentMethod::Card => PaymentMethod::Crypto,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub crypto_wallet: String,
}

/// An editable text field of the checkout form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutField {
    FirstName,
    LastName,
    Email,
    Phone,
    IdNumber,
    CardNumber,
    ExpiryDate,
    Cvv,
    CryptoWallet,
}

impl CheckoutField {
    pub fn label(&self) -> &str {
        match self {
            CheckoutField::FirstName => "Nombre",
            CheckoutField::LastName => "Apellido",
            CheckoutField::Email => "Email",
            CheckoutField::Phone => "Teléfono",
            CheckoutField::IdNumber => "DNI / Pasaporte",
            CheckoutField::CardNumber => "Número de tarjeta",
            CheckoutField::ExpiryDate => "Vencimiento (MM/AA)",
            CheckoutField::Cvv => "CVV",
            CheckoutField::CryptoWallet => "Wallet de pago",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Steps
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    TicketSelection,
    CustomerInfo,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    pub fn all() -> Vec<CheckoutStep> {
        vec![
            CheckoutStep::TicketSelection,
            CheckoutStep::CustomerInfo,
            CheckoutStep::Payment,
            CheckoutStep::Confirmation,
        ]
    }

    pub fn number(&self) -> usize {
        match self {
            CheckoutStep::TicketSelection => 1,
            CheckoutStep::CustomerInfo => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Confirmation => 4,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CheckoutStep::TicketSelection => "Tickets",
            CheckoutStep::CustomerInfo => "Información",
            CheckoutStep::Payment => "Pago",
            CheckoutStep::Confirmation => "Confirmación",
        }
    }

    fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::TicketSelection => Some(CheckoutStep::CustomerInfo),
            CheckoutStep::CustomerInfo => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Confirmation),
            CheckoutStep::Confirmation => None,
        }
    }

    fn prev(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::CustomerInfo => Some(CheckoutStep::TicketSelection),
            CheckoutStep::Payment => Some(CheckoutStep::CustomerInfo),
            CheckoutStep::TicketSelection | CheckoutStep::Confirmation => None,
        }
    }
}

/// Receipt shown on the last step
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub event_title: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub city: String,
    pub tickets: u32,
    pub total: f64,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub tx_hash: String,
    pub confirmed_at: DateTime<Local>,
}

impl OrderConfirmation {
    pub fn formatted_total(&self) -> String {
        format!("{} {}", format_amount(self.total), self.currency)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draft
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the buyer has entered so far. Dropped on cancel or finish.
#[derive(Debug, Clone)]
pub struct CheckoutDraft {
    pub event: Event,
    pub step: CheckoutStep,
    pub items: Vec<LineItem>,
    pub customer: CustomerInfo,
    pub payment: PaymentInfo,
    confirmation: Option<OrderConfirmation>,
}

impl CheckoutDraft {
    /// Empty draft for an event
    pub fn new(event: Event) -> Self {
        Self {
            event,
            step: CheckoutStep::default(),
            items: Vec::new(),
            customer: CustomerInfo::default(),
            payment: PaymentInfo::default(),
            confirmation: None,
        }
    }

    /// Draft with one ticket of `tier` already selected
    pub fn open(event: Event, tier: TicketTier) -> Self {
        let mut draft = Self::new(event);
        draft.add_ticket(tier);
        draft
    }

    pub fn quantity_of(&self, tier: TicketTier) -> u32 {
        self.items
            .iter()
            .find(|item| item.tier == tier)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Add one ticket of a tier, creating the line when needed
    pub fn add_ticket(&mut self, tier: TicketTier) {
        if let Some(item) = self.items.iter_mut().find(|item| item.tier == tier) {
            item.quantity += 1;
            return;
        }
        self.items.push(LineItem {
            tier,
            unit_price: tier.price_for(&self.event),
            quantity: 1,
        });
    }

    /// Set a line's quantity; negatives clamp to zero and zero drops the line
    pub fn set_quantity(&mut self, tier: TicketTier, quantity: i64) {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);

        match self.items.iter_mut().find(|item| item.tier == tier) {
            Some(item) => item.quantity = quantity,
            None if quantity > 0 => self.items.push(LineItem {
                tier,
                unit_price: tier.price_for(&self.event),
                quantity,
            }),
            None => {}
        }

        self.items.retain(|item| item.quantity > 0);
    }

    /// Remove one ticket of a tier
    pub fn remove_one(&mut self, tier: TicketTier) {
        let current = i64::from(self.quantity_of(tier));
        self.set_quantity(tier, current - 1);
    }

    pub fn total_tickets(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn formatted_total(&self) -> String {
        format!("{} {}", format_amount(self.total_price()), self.event.currency)
    }

    pub fn can_go_back(&self) -> bool {
        self.step.prev().is_some()
    }

    /// Move forward one step
    pub fn advance(&mut self) -> Result<CheckoutStep, WizardError> {
        if self.step == CheckoutStep::TicketSelection && self.items.is_empty() {
            return Err(WizardError::NoTicketsSelected);
        }

        let next = self.step.next().ok_or(WizardError::AlreadyComplete)?;
        if next == CheckoutStep::Confirmation {
            let confirmation = self.build_confirmation();
            tracing::info!(
                event_id = self.event.id,
                tickets = confirmation.tickets,
                total = confirmation.total,
                "Checkout confirmed"
            );
            self.confirmation = Some(confirmation);
        }
        self.step = next;
        Ok(next)
    }

    /// Move back one step (customer info and payment only)
    pub fn back(&mut self) -> Result<CheckoutStep, WizardError> {
        let prev = self.step.prev().ok_or(WizardError::NoPreviousStep)?;
        self.step = prev;
        Ok(prev)
    }

    /// The receipt, once the last step has been reached
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Text fields editable on the current step
    pub fn fields(&self) -> Vec<CheckoutField> {
        match self.step {
            CheckoutStep::CustomerInfo => vec![
                CheckoutField::FirstName,
                CheckoutField::LastName,
                CheckoutField::Email,
                CheckoutField::Phone,
                CheckoutField::IdNumber,
            ],
            CheckoutStep::Payment => match self.payment.method {
                PaymentMethod::Crypto => vec![CheckoutField::CryptoWallet],
                PaymentMethod::Card => vec![
                    CheckoutField::CardNumber,
                    CheckoutField::ExpiryDate,
                    CheckoutField::Cvv,
                ],
            },
            CheckoutStep::TicketSelection | CheckoutStep::Confirmation => Vec::new(),
        }
    }

    pub fn field_value(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FirstName => &self.customer.first_name,
            CheckoutField::LastName => &self.customer.last_name,
            CheckoutField::Email => &self.customer.email,
            CheckoutField::Phone => &self.customer.phone,
            CheckoutField::IdNumber => &self.customer.id_number,
            CheckoutField::CardNumber => &self.payment.card_number,
            CheckoutField::ExpiryDate => &self.payment.expiry_date,
            CheckoutField::Cvv => &self.payment.cvv,
            CheckoutField::CryptoWallet => &self.payment.crypto_wallet,
        }
    }

    pub fn field_value_mut(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::FirstName => &mut self.customer.first_name,
            CheckoutField::LastName => &mut self.customer.last_name,
            CheckoutField::Email => &mut self.customer.email,
            CheckoutField::Phone => &mut self.customer.phone,
            CheckoutField::IdNumber => &mut self.customer.id_number,
            CheckoutField::CardNumber => &mut self.payment.card_number,
            CheckoutField::ExpiryDate => &mut self.payment.expiry_date,
            CheckoutField::Cvv => &mut self.payment.cvv,
            CheckoutField::CryptoWallet => &mut self.payment.crypto_wallet,
        }
    }

    fn build_confirmation(&self) -> OrderConfirmation {
        let confirmed_at = Local::now();
        OrderConfirmation {
            event_title: self.event.title.clone(),
            date: self.event.formatted_date(),
            time: self.event.time.clone(),
            venue: self.event.venue.clone(),
            city: self.event.city.clone(),
            tickets: self.total_tickets(),
            total: self.total_price(),
            currency: self.event.currency.clone(),
            payment_method: self.payment.method,
            tx_hash: cosmetic_tx_hash(self.event.id, &confirmed_at),
            confirmed_at,
        }
    }
}

/// A 32-byte hex string shaped like a transaction hash
fn cosmetic_tx_hash(event_id: u32, at: &DateTime<Local>) -> String {
    let mut hash = String::from("0x");
    for round in 0u8..4 {
        let mut hasher = DefaultHasher::new();
        event_id.hash(&mut hasher);
        at.timestamp_nanos_opt().hash(&mut hasher);
        round.hash(&mut hasher);
        hash.push_str(&format!("{:016x}", hasher.finish()));
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::tests::create_test_event;

    fn draft() -> CheckoutDraft {
        CheckoutDraft::new(create_test_event(1, "Coldplay", 0.1, "2025-03-15"))
    }

    #[test]
    fn test_advance_without_tickets_is_rejected() {
        let mut draft = draft();
        assert_eq!(draft.advance(), Err(WizardError::NoTicketsSelected));
        assert_eq!(draft.step, CheckoutStep::TicketSelection);
    }

    #[test]
    fn test_one_general_ticket_reaches_customer_info() {
        let mut draft = draft();
        draft.add_ticket(TicketTier::General);
        assert_eq!(draft.advance(), Ok(CheckoutStep::CustomerInfo));
    }

    #[test]
    fn test_add_ticket_increments_existing_line() {
        let mut draft = draft();
        draft.add_ticket(TicketTier::Vip);
        draft.add_ticket(TicketTier::General);
        draft.add_ticket(TicketTier::Vip);

        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[0].tier, TicketTier::Vip);
        assert_eq!(draft.quantity_of(TicketTier::Vip), 2);
        assert_eq!(draft.total_tickets(), 3);
    }

    #[test]
    fn test_set_quantity_clamps_and_drops_zero_lines() {
        let mut draft = draft();
        draft.add_ticket(TicketTier::General);
        draft.set_quantity(TicketTier::General, 4);
        assert_eq!(draft.quantity_of(TicketTier::General), 4);

        draft.set_quantity(TicketTier::General, -3);
        assert!(draft.items.is_empty());

        draft.set_quantity(TicketTier::Platinum, 0);
        assert!(draft.items.is_empty());
    }

    #[test]
    fn test_remove_one() {
        let mut draft = CheckoutDraft::open(create_test_event(1, "a", 0.1, "2025-03-15"), TicketTier::Platinum);
        draft.add_ticket(TicketTier::Platinum);
        draft.remove_one(TicketTier::Platinum);
        assert_eq!(draft.quantity_of(TicketTier::Platinum), 1);
        draft.remove_one(TicketTier::Platinum);
        assert!(draft.items.is_empty());
        draft.remove_one(TicketTier::Platinum);
        assert!(draft.items.is_empty());
    }

    #[test]
    fn test_totals_use_tier_multipliers() {
        let mut draft = CheckoutDraft::open(create_test_event(1, "a", 0.1, "2025-03-15"), TicketTier::Vip);
        assert_eq!(draft.quantity_of(TicketTier::Vip), 1);
        draft.add_ticket(TicketTier::General);
        draft.add_ticket(TicketTier::Platinum);

        assert!((draft.total_price() - 0.75).abs() < 1e-9);
        assert_eq!(draft.formatted_total(), "0.75 ETH");
    }

    #[test]
    fn test_back_only_from_middle_steps() {
        let mut draft = draft();
        assert_eq!(draft.back(), Err(WizardError::NoPreviousStep));

        draft.add_ticket(TicketTier::General);
        draft.advance().unwrap();
        draft.advance().unwrap();
        assert_eq!(draft.step, CheckoutStep::Payment);
        assert_eq!(draft.back(), Ok(CheckoutStep::CustomerInfo));

        draft.advance().unwrap();
        draft.advance().unwrap();
        assert_eq!(draft.step, CheckoutStep::Confirmation);
        assert!(!draft.can_go_back());
        assert_eq!(draft.back(), Err(WizardError::NoPreviousStep));
    }

    #[test]
    fn test_confirmation_after_payment() {
        let mut draft = draft();
        draft.add_ticket(TicketTier::General);
        draft.add_ticket(TicketTier::General);
        draft.advance().unwrap();
        draft.advance().unwrap();
        assert!(draft.confirmation().is_none());

        draft.payment.method = draft.payment.method.toggled();
        draft.advance().unwrap();
        let confirmation = draft.confirmation().unwrap();
        assert_eq!(confirmation.event_title, "Coldplay");
        assert_eq!(confirmation.tickets, 2);
        assert_eq!(confirmation.payment_method, PaymentMethod::Card);
        assert_eq!(confirmation.tx_hash.len(), 66);
        assert!(confirmation.tx_hash.starts_with("0x"));

        assert_eq!(draft.advance(), Err(WizardError::AlreadyComplete));
    }

    #[test]
    fn test_fields_follow_payment_method() {
        let mut draft = draft();
        assert!(draft.fields().is_empty());

        draft.add_ticket(TicketTier::General);
        draft.advance().unwrap();
        assert_eq!(draft.fields().len(), 5);

        draft.field_value_mut(CheckoutField::Email).push_str("ana@example.com");
        assert_eq!(draft.customer.email, "ana@example.com");

        draft.advance().unwrap();
        assert_eq!(draft.fields(), vec![CheckoutField::CryptoWallet]);
        draft.payment.method = PaymentMethod::Card;
        assert_eq!(draft.fields().len(), 3);
    }
}
