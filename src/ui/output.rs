//! Console messages for both programs.
//!
//! The confirmation lines on stdout are read by the calling application, so
//! their wording is kept stable.

use crate::error::RecordError;
use std::path::Path;

pub const SUBMISSION_SENT: &str = "Atividade enviada!";
pub const ATTENDANCE_GENERATED: &str = "Relatório de presença gerado!";

pub fn print_submission_sent(path: &Path) {
    log::info!("Submission stored at '{}'", path.display());
    println!("{}", SUBMISSION_SENT);
}

pub fn print_attendance_generated(path: &Path) {
    log::info!("Attendance roster stored at '{}'", path.display());
    println!("{}", ATTENDANCE_GENERATED);
}

/// Prints a fatal error to stderr.
pub fn print_error(error: &RecordError) {
    eprintln!("{}", error);
}
