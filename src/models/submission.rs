use crate::error::RecordError;
use crate::layout::{SubmissionField, check_submission_count};

/// One student's answer to an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub activity_id: String,
    pub title: String,
    pub student_name: String,
    pub registration_number: String,
    pub answer_text: String,
    pub subject_name: String,
}

impl SubmissionRecord {
    /// Builds a record from the positional arguments of `atividade_aluno`.
    ///
    /// The argument count is checked first; the legacy slot is read past.
    pub fn from_args(args: &[String]) -> Result<Self, RecordError> {
        check_submission_count(args)?;
        let field = |f: SubmissionField| args[f.position()].clone();

        Ok(SubmissionRecord {
            activity_id: field(SubmissionField::ActivityId),
            title: field(SubmissionField::Title),
            student_name: field(SubmissionField::StudentName),
            registration_number: field(SubmissionField::RegistrationNumber),
            answer_text: field(SubmissionField::AnswerText),
            subject_name: field(SubmissionField::SubjectName),
        })
    }
}
