use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".logograde";
const CONFIG_FILE_NAME: &str = "config.toml";

impl Config {
    /// Load `~/.logograde/config.toml` (or `$LOGOGRADE_HOME/config.toml`),
    /// writing a default file on first run.
    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_in(&Self::default_base_dir()?)
    }

    pub fn load_or_init_in(base_dir: &Path) -> Result<Self> {
        let config_path = base_dir.join(CONFIG_FILE_NAME);

        if !base_dir.exists() {
            fs::create_dir_all(base_dir).with_context(|| {
                format!("Failed to create config directory {}", base_dir.display())
            })?;
        }

        let mut config = if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path.clone_from(&config_path);
            config.base_dir = base_dir.to_path_buf();
            config
        } else {
            let config = Self {
                base_dir: base_dir.to_path_buf(),
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    fn default_base_dir() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("LOGOGRADE_HOME")
            && !home.trim().is_empty()
        {
            return Ok(PathBuf::from(home));
        }

        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Ok(home.join(CONFIG_DIR_NAME))
    }
}
