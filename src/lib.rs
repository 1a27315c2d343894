//! Writers for student activity submissions and class attendance rosters.
//!
//! The library backs two binaries, `atividade_aluno` and
//! `relatorio_presenca`. Each maps its positional arguments onto a record,
//! renders it to text and writes it into a fixed directory.

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod render;
pub mod ui;
pub mod writer;
