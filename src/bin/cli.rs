// src/bin/cli.rs
use ts_locations::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = cli::parse_args(std::env::args().skip(1))?;
    cli::run(opts).await?;
    Ok(())
}
