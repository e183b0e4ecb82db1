use tardy_portal::app::{App, Tui};
use tardy_portal::config::PortalConfig;
use tardy_portal::sink::TracingSink;
use tardy_portal::{error, logging, Result};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", error::user_friendly_message(&err));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = PortalConfig::load()?;
    let _log_guard = logging::init(&config)?;

    let mut tui = Tui::new(config.tick_rate())?;
    tui.init()?;

    let mut app = App::new(config, TracingSink::new());
    let outcome = app.run(&mut tui).await;

    // Leave the alternate screen before anything is printed
    tui.restore()?;

    if let Err(err) = &outcome {
        tracing::error!(error = %err, "Portal exited with an error");
    }
    outcome
}
