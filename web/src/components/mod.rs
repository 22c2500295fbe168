pub mod auth_guard;
pub mod booking_calendar;
pub mod disclaimer;
pub mod navbar;
pub mod slot_grid;

// Re-export commonly used types
pub use auth_guard::AdminAuthGuard;
pub use booking_calendar::BookingCalendar;
pub use disclaimer::DisclaimerGate;
pub use navbar::Navbar;
pub use slot_grid::SlotGrid;
