mod cli;

use clap::Parser;

use caravan_engine::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.logging());

    let path = caravan_studio::render_to_file(&cli.scene_config())?;
    log::info!("desert caravan scene saved as {}", path.display());
    Ok(())
}
