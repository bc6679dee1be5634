use std::process::ExitCode;

use sdt::ui::output;

fn main() -> ExitCode {
    match sdt::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
