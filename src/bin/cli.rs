// src/bin/cli.rs
use runlah_races::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
