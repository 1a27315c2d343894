//! Argument-mapping tables for both programs.
//!
//! Positions here are 0-based over the positional arguments, i.e. the
//! program name is not counted. Argument counts are checked against these
//! tables before any record is built or any file is opened.

use crate::error::{ExpectedArgs, RecordError};
use std::ops::Range;

pub const SUBMISSION_PROGRAM: &str = "atividade_aluno";
pub const ATTENDANCE_PROGRAM: &str = "relatorio_presenca";

/// Fields of a submission, in the order the caller passes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionField {
    ActivityId,
    /// Accepted for compatibility with existing callers, never rendered
    LegacySlot,
    Title,
    StudentName,
    RegistrationNumber,
    AnswerText,
    SubjectName,
}

pub const SUBMISSION_LAYOUT: [SubmissionField; 7] = [
    SubmissionField::ActivityId,
    SubmissionField::LegacySlot,
    SubmissionField::Title,
    SubmissionField::StudentName,
    SubmissionField::RegistrationNumber,
    SubmissionField::AnswerText,
    SubmissionField::SubjectName,
];

impl SubmissionField {
    /// Index of this field in the positional argument list.
    pub fn position(self) -> usize {
        match self {
            SubmissionField::ActivityId => 0,
            SubmissionField::LegacySlot => 1,
            SubmissionField::Title => 2,
            SubmissionField::StudentName => 3,
            SubmissionField::RegistrationNumber => 4,
            SubmissionField::AnswerText => 5,
            SubmissionField::SubjectName => 6,
        }
    }
}

/// Fails unless exactly one argument per layout slot was supplied.
pub fn check_submission_count(args: &[String]) -> Result<(), RecordError> {
    if args.len() != SUBMISSION_LAYOUT.len() {
        return Err(RecordError::ArgumentCount {
            program: SUBMISSION_PROGRAM,
            expected: ExpectedArgs::Exactly(SUBMISSION_LAYOUT.len()),
            received: args.len(),
        });
    }
    Ok(())
}

/// Fields that follow the student list on an attendance command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingField {
    ClassInfo,
    ProfessorName,
    FileBaseName,
}

const TRAILING_WITHOUT_PROFESSOR: [TrailingField; 2] =
    [TrailingField::ClassInfo, TrailingField::FileBaseName];

const TRAILING_WITH_PROFESSOR: [TrailingField; 3] = [
    TrailingField::ClassInfo,
    TrailingField::ProfessorName,
    TrailingField::FileBaseName,
];

/// Shape of an attendance command line:
///
/// ```text
/// <date> <student>... <class info> [<professor>] <file base name>
/// ```
///
/// The professor slot only exists when `include_professor_line` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceLayout {
    pub include_professor_line: bool,
}

impl AttendanceLayout {
    pub const DATE_POSITION: usize = 0;

    pub fn trailing_fields(&self) -> &'static [TrailingField] {
        if self.include_professor_line {
            &TRAILING_WITH_PROFESSOR
        } else {
            &TRAILING_WITHOUT_PROFESSOR
        }
    }

    /// Smallest valid argument count: the date plus the trailing block.
    pub fn min_args(&self) -> usize {
        Self::DATE_POSITION + 1 + self.trailing_fields().len()
    }

    /// Index range of the student entries in a list of `arg_count`
    /// positional arguments. The range is empty when no students were
    /// given and `None` when the list cannot even hold the fixed fields.
    pub fn student_range(&self, arg_count: usize) -> Option<Range<usize>> {
        if arg_count < self.min_args() {
            return None;
        }
        let first_trailing = arg_count - self.trailing_fields().len();
        Some(Self::DATE_POSITION + 1..first_trailing)
    }

    /// Checks `args` against this layout before anything is read from it.
    ///
    /// # Arguments
    /// * `args` - Positional arguments, without the program name
    ///
    /// # Returns
    /// The index range of the student entries. When it is `Ok`, the date
    /// and every trailing field are guaranteed to be present.
    ///
    /// # Errors
    /// `RecordError::ArgumentCount` when fewer than `min_args()` arguments
    /// were given.
    pub fn check_count(&self, args: &[String]) -> Result<Range<usize>, RecordError> {
        self.student_range(args.len()).ok_or(RecordError::ArgumentCount {
            program: ATTENDANCE_PROGRAM,
            expected: ExpectedArgs::AtLeast(self.min_args()),
            received: args.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: AttendanceLayout = AttendanceLayout {
        include_professor_line: false,
    };
    const WITH_PROFESSOR: AttendanceLayout = AttendanceLayout {
        include_professor_line: true,
    };

    fn args(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("arg{}", i)).collect()
    }

    #[test]
    fn submission_positions_follow_layout_order() {
        assert_eq!(SubmissionField::ActivityId.position(), 0);
        assert_eq!(SubmissionField::LegacySlot.position(), 1);
        assert_eq!(SubmissionField::Title.position(), 2);
        assert_eq!(SubmissionField::RegistrationNumber.position(), 4);
        assert_eq!(SubmissionField::SubjectName.position(), 6);
    }

    #[test]
    fn positions_agree_with_layout_table() {
        for (i, field) in SUBMISSION_LAYOUT.iter().enumerate() {
            assert_eq!(field.position(), i, "{:?}", field);
        }
    }

    #[test]
    fn submission_count_must_be_exact() {
        assert!(check_submission_count(&args(7)).is_ok());
        for n in [0, 6, 8] {
            match check_submission_count(&args(n)) {
                Err(RecordError::ArgumentCount {
                    expected, received, ..
                }) => {
                    assert_eq!(expected, ExpectedArgs::Exactly(7));
                    assert_eq!(received, n);
                }
                other => panic!("unexpected result for {} args: {:?}", n, other),
            }
        }
    }

    #[test]
    fn student_range_with_zero_students() {
        assert_eq!(PLAIN.student_range(3), Some(1..1));
        assert_eq!(WITH_PROFESSOR.student_range(4), Some(1..1));
    }

    #[test]
    fn student_range_with_one_student() {
        assert_eq!(PLAIN.student_range(4), Some(1..2));
        assert_eq!(WITH_PROFESSOR.student_range(5), Some(1..2));
    }

    #[test]
    fn student_range_with_many_students() {
        let range = PLAIN.student_range(33).unwrap();
        assert_eq!(range, 1..31);
        assert_eq!(range.len(), 30);
        assert_eq!(WITH_PROFESSOR.student_range(33).unwrap().len(), 29);
    }

    #[test]
    fn student_range_rejects_lists_missing_fixed_fields() {
        assert_eq!(PLAIN.student_range(0), None);
        assert_eq!(PLAIN.student_range(2), None);
        assert_eq!(WITH_PROFESSOR.student_range(3), None);
    }

    #[test]
    fn trailing_block_order() {
        assert_eq!(
            PLAIN.trailing_fields(),
            &[TrailingField::ClassInfo, TrailingField::FileBaseName]
        );
        assert_eq!(
            WITH_PROFESSOR.trailing_fields(),
            &[
                TrailingField::ClassInfo,
                TrailingField::ProfessorName,
                TrailingField::FileBaseName
            ]
        );
        assert_eq!(PLAIN.min_args(), 3);
        assert_eq!(WITH_PROFESSOR.min_args(), 4);
    }

    #[test]
    fn check_count_reports_minimum() {
        match WITH_PROFESSOR.check_count(&args(2)) {
            Err(RecordError::ArgumentCount {
                program,
                expected,
                received,
            }) => {
                assert_eq!(program, ATTENDANCE_PROGRAM);
                assert_eq!(expected, ExpectedArgs::AtLeast(4));
                assert_eq!(received, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
