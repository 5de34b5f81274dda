use anyhow::Result;
use tracing::info;

use plies_cli::{GameConfig, GameSession};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("plies starting");
    GameSession::new(GameConfig::default()).run()?;
    Ok(())
}
