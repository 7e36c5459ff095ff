use std::process::ExitCode;

fn main() -> ExitCode {
    glowmatch_cli::run()
}
