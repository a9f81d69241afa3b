use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use cli::{Cli, Commands, YtCommand};
use consts::CONFIG;
use errors::{handle_error, report_error};

mod cli;
mod config;
mod consts;
mod errors;
mod systems;
mod utils;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = systems::logger::init(&CONFIG.logger) {
        eprintln!("warning: logging disabled, could not open the log file: {e}");
    }
    if let Some(e) = &CONFIG.load_error {
        warn!("Ignoring the configuration file {e}");
    }

    let code = match cli.command {
        Some(Commands::Yt(command)) => yt(command).await,
        None => help(None),
    };
    log::logger().flush();
    code
}

fn help(subcommand: Option<&str>) -> ExitCode {
    match cli::print_help(subcommand) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error("Could not print the help:", e),
    }
}

async fn yt(command: YtCommand) -> ExitCode {
    let Some(video_id) = command.video_id() else {
        return help(Some("yt"));
    };
    match lookup(video_id).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

/// Prints the player response of `video_id` to stdout.
async fn lookup(video_id: &str) -> Result<(), ExitCode> {
    info!("Looking up {video_id}");
    let response = handle_error(
        "Could not get the player response:",
        ytplayer::fetch_player_response(video_id).await,
    )?;
    let serialized = handle_error(
        "Could not serialize the player response:",
        serde_json::to_string(&response),
    )?;
    handle_error(
        "Could not write the player response:",
        print_line(&mut std::io::stdout().lock(), &serialized),
    )
}

/// Writes `line` and a newline, without panicking when the reader has gone away.
fn print_line(out: &mut impl Write, line: &str) -> std::io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::print_line;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_is_terminated() {
        let mut out = Vec::new();
        print_line(&mut out, r#"{"a":1}"#).unwrap();
        assert_eq!(out, b"{\"a\":1}\n");
    }

    #[test]
    fn closed_pipe_is_an_error() {
        let error = print_line(&mut ClosedPipe, "{}").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
