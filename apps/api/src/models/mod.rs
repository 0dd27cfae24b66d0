// Core domain types: demo accounts, submission records, activity feed entries.
// Stores under src/store/ own all mutation; these types stay plain data.

pub mod account;
pub mod activity;
pub mod record;

pub use account::{Account, Role};
pub use activity::ActivityEntry;
pub use record::{RecordPatch, RecordStatus, SubmissionRecord};
