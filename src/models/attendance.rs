use crate::error::RecordError;
use crate::layout::AttendanceLayout;

/// Roster for one class session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: String,
    /// Opaque student tokens in roster order, e.g. "Maria Silva - A12345B"
    pub student_entries: Vec<String>,
    pub class_info: String,
    /// Only set when the layout carries a professor slot
    pub professor_name: Option<String>,
    pub file_base_name: String,
}

impl AttendanceRecord {
    /// Builds a record from the positional arguments of `relatorio_presenca`.
    pub fn from_args(args: &[String], layout: AttendanceLayout) -> Result<Self, RecordError> {
        let students = layout.check_count(args)?;
        // The trailing block starts right after the last student and ends the list.
        let first_trailing = students.end;

        Ok(AttendanceRecord {
            date: args[AttendanceLayout::DATE_POSITION].clone(),
            class_info: args[first_trailing].clone(),
            professor_name: layout
                .include_professor_line
                .then(|| args[first_trailing + 1].clone()),
            file_base_name: args[args.len() - 1].clone(),
            student_entries: args[students].to_vec(),
        })
    }
}
