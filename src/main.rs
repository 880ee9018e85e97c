use clap::Parser;
use std::io;

use cyberkit::cli::{self, handlers, Args, CliCommand, OutputFormat};
use cyberkit::models::Direction;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = cyberkit::bootstrap();
    log::debug!("Command line args: {:?}", args);

    let format = OutputFormat::from_flag(args.json);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Some(CliCommand::Analyze { password }) => {
            handlers::handle_analyze(&mut input, &mut out, &config, format, password.as_deref())?;
        }
        Some(CliCommand::Caesar { shift, message }) => {
            handlers::handle_caesar(&mut input, &mut out, &config, format, shift, message.as_deref())?;
        }
        Some(CliCommand::Encrypt { shift, message }) => {
            handlers::handle_transform(&mut out, format, Direction::Encrypt, &message, shift)?;
        }
        Some(CliCommand::Decrypt { shift, message }) => {
            handlers::handle_transform(&mut out, format, Direction::Decrypt, &message, shift)?;
        }
        Some(CliCommand::Menu) | None => {
            // inquire talks to the terminal directly
            drop(input);
            drop(out);
            cli::menu::run_cli_menu(&config)?;
        }
    }

    Ok(())
}
