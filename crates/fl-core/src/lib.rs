pub mod error;
pub mod loose_number;
pub mod models;
pub mod record;
pub mod record_id;

pub use error::{CoreError, Result};
pub use loose_number::LooseNumber;
pub use models::expense_claim::ExpenseClaim;
pub use models::gps_point::GpsPoint;
pub use models::timesheet_entry::TimesheetEntry;
pub use models::user::User;
pub use record::{KindFilter, Record, SortOrder};

#[cfg(test)]
mod tests;
