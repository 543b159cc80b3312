use std::process::ExitCode;

fn main() -> ExitCode {
    match ascii_scatter::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("scatter: {e}");
            ExitCode::FAILURE
        }
    }
}
