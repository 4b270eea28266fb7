use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    log::debug!("cwd: {:?}", std::env::current_dir());
    match bikeshare_explorer::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
