//! Record models.
//!
//! Each record is built once from the positional arguments of its program,
//! rendered to a file and dropped when the process exits.
pub mod attendance;
pub mod submission;
