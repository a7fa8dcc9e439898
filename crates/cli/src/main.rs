use std::process::ExitCode;

fn main() -> ExitCode {
    pawcast_cli::run()
}
