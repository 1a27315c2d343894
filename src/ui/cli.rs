//! Command-line interface module.
//!
//! Both programs take plain positional arguments. The only flags select
//! template variants and must come before the first positional value;
//! anything after it, including values starting with `-`, is data.
//!
//! In first position the exact tokens `--help`, `--version` and the
//! variant flags (`--data-entrega`, `--professor`) are read as flags, and
//! `--help`/`--version` exit with status 0 without writing a file. A
//! caller whose first value may be one of those tokens passes `--` before
//! the values; everything after `--` is data.

use crate::layout::AttendanceLayout;
use clap::Parser;

/// Writes a student's activity answer to atividades_alunos/<ID>_<MATRICULA>.txt
#[derive(Parser, Debug)]
#[command(name = "atividade_aluno", version, about, long_about = None)]
pub struct SubmissionArgs {
    /// Add a "Data de Entrega" line with the current local time
    #[arg(long = "data-entrega")]
    pub with_delivery_date: bool,

    /// ID, legacy slot, title, student name, registration number, answer, subject
    #[arg(
        value_name = "CAMPO",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,
}

/// Writes a class attendance roster to relatorios_presenca/<ARQUIVO>.txt
#[derive(Parser, Debug)]
#[command(name = "relatorio_presenca", version, about, long_about = None)]
pub struct AttendanceArgs {
    /// Expect a professor name between the class info and the file name,
    /// and print it below the class info. The academic management
    /// application always sends a professor name, so it must pass this
    /// flag; without it the professor is read as the class info and the
    /// class info as the last student.
    #[arg(long = "professor")]
    pub include_professor_line: bool,

    /// Date, students..., class info, [professor], output file base name
    #[arg(
        value_name = "CAMPO",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,
}

impl AttendanceArgs {
    pub fn layout(&self) -> AttendanceLayout {
        AttendanceLayout {
            include_professor_line: self.include_professor_line,
        }
    }
}
