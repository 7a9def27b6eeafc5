use std::process::ExitCode;

fn main() -> ExitCode {
    appmeta::app::startup::startup()
}
