use clap::Parser;
use registro_academico::config::OutputConfig;
use registro_academico::ui::cli::AttendanceArgs;
use registro_academico::ui::output::{print_attendance_generated, print_error};
use registro_academico::writer::generate_attendance_report;
use std::process;

fn main() {
    env_logger::init();

    let args = AttendanceArgs::parse();

    match generate_attendance_report(&OutputConfig::default(), &args.values, args.layout()) {
        Ok(path) => print_attendance_generated(&path),
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    }
}
