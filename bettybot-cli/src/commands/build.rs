//! Build command

use anyhow::{Context, Result};
use bettybot::config::Settings;
use bettybot::{Engine, Files};
use console::style;
use std::path::PathBuf;

/// Build a JSON configuration
pub struct BuildCommand {
    config: PathBuf,
    write: bool,
}

impl BuildCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `config` - Path to the JSON configuration document
    /// * `write` - Write each file to disk instead of printing the joined text
    pub const fn new(config: PathBuf, write: bool) -> Self {
        Self { config, write }
    }

    /// Execute the command
    pub fn execute(&self, settings: &Settings) -> Result<()> {
        let engine = Engine::load(settings).context("Failed to load registries")?;
        let files = Files::from_path(&self.config)?;

        if self.write {
            for path in engine.build_and_write(&files)? {
                println!("{} {}", style("Wrote").green().bold(), path.display());
            }
        } else {
            println!("{}", engine.build(&files)?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Settings) {
        let dir = TempDir::new().unwrap();
        let themes = dir.path().join("themes");
        let modules = dir.path().join("modules");
        fs::create_dir_all(&themes).unwrap();
        fs::create_dir_all(&modules).unwrap();
        fs::write(themes.join("dark"), r#"{"color": "black"}"#).unwrap();
        fs::write(modules.join("greet"), "Hello [[.name]], color [[.color]]").unwrap();

        let settings = Settings::default()
            .with_themes_dir(themes)
            .with_templates(format!("{}/*", modules.display()));
        (dir, settings)
    }

    #[test]
    fn test_execute_writes_files() {
        let (dir, settings) = fixture();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        let config = dir.path().join("site.json");
        fs::write(&config, config_json(&out)).unwrap();

        BuildCommand::new(config, true).execute(&settings).unwrap();
        assert_eq!(
            fs::read_to_string(out.join("index.txt")).unwrap(),
            "Hello Ann, color black"
        );
    }

    #[test]
    fn test_execute_missing_config() {
        let (dir, settings) = fixture();
        let cmd = BuildCommand::new(dir.path().join("absent.json"), false);
        assert!(cmd.execute(&settings).is_err());
    }

    #[test]
    fn test_execute_unknown_theme() {
        let (dir, settings) = fixture();
        let config = dir.path().join("site.json");
        fs::write(
            &config,
            r#"{"themes": ["light"], "files": [{"modules": [{"name": "greet", "values": {"name": "A"}}]}]}"#,
        )
        .unwrap();

        let err = BuildCommand::new(config, false).execute(&settings).unwrap_err();
        assert!(err.to_string().contains("theme 'light' not found"));
    }

    fn config_json(out: &std::path::Path) -> String {
        format!(
            r#"{{
                "outputDir": "{}",
                "themes": ["dark"],
                "files": [{{"filename": "index.txt", "modules": [{{"name": "greet", "values": {{"name": "Ann"}}}}]}}]
            }}"#,
            out.display()
        )
    }
}
