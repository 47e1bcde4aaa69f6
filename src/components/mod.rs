//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod checkout_dialog;
pub mod create_event;
pub mod dashboard;
pub mod events;
pub mod filter_dialog;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod shell;
pub mod splash;
pub mod text;
pub mod tickets_view;

pub use checkout_dialog::CheckoutDialog;
pub use create_event::CreateEventComponent;
pub use dashboard::{draw_dashboard_screen, DashboardComponent, DashboardRenderContext};
pub use events::{draw_events_screen, EventsComponent, EventsRenderContext};
pub use filter_dialog::FilterDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use tickets_view::{draw_tickets_screen, TicketsComponent};
