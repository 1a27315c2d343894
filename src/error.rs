//! Error type shared by both record writers.

use std::{fmt, io, path::PathBuf};

/// How many positional arguments a program accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedArgs {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for ExpectedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedArgs::Exactly(n) => write!(f, "exactly {}", n),
            ExpectedArgs::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Errors raised while turning arguments into a record file.
#[derive(Debug)]
pub enum RecordError {
    /// Wrong number of positional arguments. Raised before any file is touched.
    ArgumentCount {
        program: &'static str,
        expected: ExpectedArgs,
        received: usize,
    },
    /// The output file could not be opened for writing
    FileCreation { path: PathBuf, source: io::Error },
    /// The output file was opened but writing its content failed
    FileWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::ArgumentCount {
                program,
                expected,
                received,
            } => write!(
                f,
                "{}: expected {} arguments, received {}",
                program, expected, received
            ),
            RecordError::FileCreation { path, source } => {
                write!(f, "Erro ao criar o arquivo: {}: {}", path.display(), source)
            }
            RecordError::FileWrite { path, source } => {
                write!(f, "Erro ao escrever o arquivo: {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::ArgumentCount { .. } => None,
            RecordError::FileCreation { source, .. } | RecordError::FileWrite { source, .. } => {
                Some(source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn argument_count_message_names_program_and_counts() {
        let err = RecordError::ArgumentCount {
            program: "atividade_aluno",
            expected: ExpectedArgs::Exactly(7),
            received: 3,
        };
        assert_eq!(
            err.to_string(),
            "atividade_aluno: expected exactly 7 arguments, received 3"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn file_creation_message_includes_os_reason() {
        let err = RecordError::FileCreation {
            path: PathBuf::from("atividades_alunos/X_Y.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.starts_with("Erro ao criar o arquivo: atividades_alunos/X_Y.txt"));
        assert!(message.ends_with("No such file or directory"));
        assert!(err.source().is_some());
    }
}
