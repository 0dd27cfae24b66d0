// HTTP surface, split by domain. Handlers stay thin: extract, take the
// store lock, call the store or workflow, shape the response.

pub mod admin;
pub mod analysis;
pub mod auth;
pub mod decisions;
pub mod records;
