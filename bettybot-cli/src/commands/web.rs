//! Web server command

use anyhow::{Context, Result};
use bettybot::config::Settings;
use bettybot::{web, Engine};
use console::style;

/// Start the HTTP server
pub struct WebCommand {
    port: Option<u16>,
}

impl WebCommand {
    /// Create a new command instance
    pub const fn new(port: Option<u16>) -> Self {
        Self { port }
    }

    /// Settings with the port override applied
    fn effective_settings(&self, mut settings: Settings) -> Settings {
        if let Some(port) = self.port {
            settings.web.port = port;
        }
        settings
    }

    /// Execute the command
    pub fn execute(&self, settings: Settings) -> Result<()> {
        let settings = self.effective_settings(settings);
        let addr = settings.web.bind_addr()?;
        let engine = Engine::load(&settings).context("Failed to load registries")?;

        println!(
            "{} {}",
            style("Listening on").green().bold(),
            style(format!("http://{addr}")).cyan()
        );

        let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
        runtime.block_on(web::serve(engine, addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_override() {
        let settings = WebCommand::new(Some(9000)).effective_settings(Settings::default());
        assert_eq!(settings.web.port, 9000);
    }

    #[test]
    fn test_default_port() {
        let settings = WebCommand::new(None).effective_settings(Settings::default());
        assert_eq!(settings.web.port, 8000);
    }
}
