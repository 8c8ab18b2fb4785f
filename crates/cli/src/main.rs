use clap::Parser;

use theater_cli::Args;

fn main() -> std::process::ExitCode {
    theater_observability::init();

    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();

    match theater_cli::run(&args, &mut stdout) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "statement generation failed");
            eprintln!("error: {err:#}");
            std::process::ExitCode::FAILURE
        }
    }
}
