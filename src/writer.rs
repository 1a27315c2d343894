//! Turns positional arguments into record files on disk.
//!
//! Files are created or truncated unconditionally. Two invocations aimed at
//! the same path (same activity and registration number, or same roster
//! base name) race, and whichever finishes last wins; no locking or merging
//! is attempted. Keeping paths unique is up to the caller.

use crate::config::OutputConfig;
use crate::error::RecordError;
use crate::layout::AttendanceLayout;
use crate::models::{attendance::AttendanceRecord, submission::SubmissionRecord};
use crate::render::{render_attendance, render_submission};
use chrono::NaiveDateTime;
use log::{debug, info};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Writes `content` to `path`, truncating any previous file.
///
/// Nothing is written unless the open succeeds, so a failed open leaves no file behind.
pub fn write_record(path: &Path, content: &str) -> Result<(), RecordError> {
    debug!("Opening '{}' for writing", path.display());
    let mut file = File::create(path).map_err(|source| RecordError::FileCreation {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| RecordError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Wrote {} bytes to '{}'", content.len(), path.display());
    Ok(())
}

/// Handles one `atividade_aluno` invocation.
///
/// The argument count is checked before the output file is opened, so a
/// malformed call never creates or truncates anything.
///
/// # Arguments
/// * `config` - Where the `atividades_alunos` directory lives
/// * `args` - The seven positional values, without the program name
/// * `delivered_at` - When set, a `Data de Entrega` line is written
///
/// # Returns
/// The path of the written file, `atividades_alunos/<id>_<registration>.txt`
///
/// # Errors
/// - `RecordError::ArgumentCount` if `args` does not hold exactly seven values
/// - `RecordError::FileCreation` if the directory is missing or not writable
/// - `RecordError::FileWrite` if writing the opened file fails
pub fn submit_activity(
    config: &OutputConfig,
    args: &[String],
    delivered_at: Option<NaiveDateTime>,
) -> Result<PathBuf, RecordError> {
    let record = SubmissionRecord::from_args(args)?;
    debug!("Submission record: {:?}", record);

    let path = config.submission_path(&record.activity_id, &record.registration_number);
    write_record(&path, &render_submission(&record, delivered_at))?;
    Ok(path)
}

/// Handles one `relatorio_presenca` invocation and returns the written path.
///
/// Errors mirror [`submit_activity`]; the minimum argument count depends on
/// `layout`.
pub fn generate_attendance_report(
    config: &OutputConfig,
    args: &[String],
    layout: AttendanceLayout,
) -> Result<PathBuf, RecordError> {
    let record = AttendanceRecord::from_args(args, layout)?;
    debug!(
        "Attendance record for {} with {} students",
        record.date,
        record.student_entries.len()
    );

    let path = config.attendance_path(&record.file_base_name);
    write_record(&path, &render_attendance(&record))?;
    Ok(path)
}
