//! Console side of `atividade_aluno` and `relatorio_presenca`.
//!
//! `cli` turns argv into the positional values plus the variant flags;
//! `output` owns the confirmation lines the calling application reads back.

pub mod cli;
pub mod output;
