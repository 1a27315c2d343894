use chrono::Local;
use clap::Parser;
use registro_academico::config::OutputConfig;
use registro_academico::ui::cli::SubmissionArgs;
use registro_academico::ui::output::{print_error, print_submission_sent};
use registro_academico::writer::submit_activity;
use std::process;

fn main() {
    env_logger::init();

    let args = SubmissionArgs::parse();
    let delivered_at = args
        .with_delivery_date
        .then(|| Local::now().naive_local());

    match submit_activity(&OutputConfig::default(), &args.values, delivered_at) {
        Ok(path) => print_submission_sent(&path),
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    }
}
