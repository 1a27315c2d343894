//! Text templates for the generated files.

use crate::models::{attendance::AttendanceRecord, submission::SubmissionRecord};
use chrono::NaiveDateTime;

pub const SEPARATOR: &str = "======================";

/// Format of the optional `Data de Entrega` line
pub const DELIVERY_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Renders a submission file. `delivered_at` adds the delivery-date line.
pub fn render_submission(
    record: &SubmissionRecord,
    delivered_at: Option<NaiveDateTime>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Disciplina: {}\n", record.subject_name));
    out.push_str(&format!("Atividade: {}\n", record.title));
    out.push_str(&format!("{}\n", SEPARATOR));
    out.push_str(&format!("Nome: {}\n", record.student_name));
    out.push_str(&format!("Matrícula: {}\n", record.registration_number));
    if let Some(at) = delivered_at {
        out.push_str(&format!(
            "Data de Entrega: {}\n",
            at.format(DELIVERY_TIMESTAMP_FORMAT)
        ));
    }
    out.push_str(&format!("{}\n", SEPARATOR));
    out.push_str(&format!("{}\n\n", record.title));
    out.push_str(&format!("Resposta: {}\n", record.answer_text));
    out
}

/// Line for one student. The trailing space after the question is part of the format.
pub fn roster_line(student_entry: &str) -> String {
    format!("{}      [  ]  Presente? \n", student_entry)
}

pub fn render_attendance(record: &AttendanceRecord) -> String {
    let mut out = String::new();
    out.push_str("Relatório de Presença\n");
    out.push_str(&format!("{}\n", SEPARATOR));
    out.push_str(&format!("{}\n", record.class_info));
    if let Some(professor) = &record.professor_name {
        out.push_str(&format!("Professor: {}\n", professor));
    }
    out.push_str(&format!("Data: {}\n", record.date));
    out.push_str(&format!("{}\n", SEPARATOR));
    for entry in &record.student_entries {
        out.push_str(&roster_line(entry));
    }
    out
}
