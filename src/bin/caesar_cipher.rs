use std::io;

use cyberkit::cli::handlers;

fn main() -> anyhow::Result<()> {
    let config = cyberkit::bootstrap();

    let stdin = io::stdin();
    let stdout = io::stdout();
    handlers::handle_caesar_cipher(&mut stdin.lock(), &mut stdout.lock(), &config)?;

    Ok(())
}
