//! Read-only reports and event log export

pub mod export;
pub mod reporter;

pub use export::export_events;
pub use reporter::{
    financial_summary, hotel_status, occupancy_forecast, FinancialSummary, HotelStatus,
};
