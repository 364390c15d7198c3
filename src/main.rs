use std::io;
use std::path::PathBuf;

use anyhow::Context;
use floorplan::{init_logging, Session, Settings, BUILD_DATE, VERSION};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let arg = std::env::args_os().nth(1);
    if arg.as_deref().and_then(|a| a.to_str()) == Some("--version") {
        println!("floorplan {} ({})", VERSION, BUILD_DATE);
        return Ok(());
    }

    let settings_path = arg.map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref())
        .context("failed to load settings")?;

    // Initialize logging
    init_logging(&settings.logging)?;
    info!("floorplan {} starting", VERSION);

    let mut session = Session::new(settings.layout);
    let stdin = io::stdin();
    let skipped = session
        .run(stdin.lock(), io::stdout().lock())
        .context("driver session failed")?;

    info!(
        rooms = session.editor().layout().room_count(),
        doors = session.editor().layout().door_count(),
        skipped,
        "Session finished"
    );
    Ok(())
}
