use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::constants::{GREEN, RESET};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default = "default_show_reduced")]
    pub show_reduced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub quiet: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            show_reduced: default_show_reduced(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check: CheckConfig::default(),
            quiet: false,
        }
    }
}

const fn default_show_reduced() -> bool {
    false
}

pub fn load_config() -> Result<Config> {
    let (cfg, _) = load_config_with_status()?;
    Ok(cfg)
}

pub fn load_config_with_status() -> Result<(Config, bool)> {
    let path = config_path()?;
    if !path.exists() {
        return Ok((Config::default(), false));
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let cfg: Config = serde_yaml::from_str(&data)
        .with_context(|| "failed to parse configuration from YAML".to_string())?;
    Ok((cfg, true))
}

pub fn config_path() -> Result<PathBuf> {
    let base = BaseDirs::new().context("failed to determine home directory")?;
    Ok(base.home_dir().join(".typeq.yaml"))
}

pub fn create_default_config_file() -> Result<PathBuf> {
    let path = config_path()?;
    let cfg = Config::default();
    let yaml = serde_yaml::to_string(&cfg)?;
    fs::write(&path, yaml)
        .with_context(|| format!("failed to write default config to {}", path.display()))?;
    Ok(path)
}

pub fn display_settings() -> Result<()> {
    let path = config_path()?;
    let (config, existed) = load_config_with_status()?;

    let config_existed = existed && path.exists();

    if !config_existed {
        println!("📝 Configuration file not found. Creating default configuration...\n");
        let created_path = create_default_config_file()?;
        println!(
            "✅ Created default configuration at: {}\n",
            created_path.display()
        );
    }

    println!("🔧 typeq Configuration Settings");
    println!("═══════════════════════════════\n");

    if config_existed {
        println!("📍 Config file: {}", path.display());
    } else {
        println!("📍 Config file: {} (newly created)", path.display());
    }

    println!("Current settings:\n");

    println!("🔘 {green}Verbosity:{reset}", green = GREEN, reset = RESET);
    println!(
        "  • {green}quiet{reset}: {}\n",
        config.quiet,
        green = GREEN,
        reset = RESET
    );

    println!("🔎 {green}Check:{reset}", green = GREEN, reset = RESET);
    let reduced_desc = if config.check.show_reduced {
        "Reduced forms are printed before every verdict"
    } else {
        "Only the verdict is printed (pass --show-reduced to override)"
    };
    println!(
        "  • {green}show_reduced{reset}: {}",
        config.check.show_reduced,
        green = GREEN,
        reset = RESET
    );
    println!("    {}\n", reduced_desc);

    if !config.check.show_reduced {
        println!(
            "💡 To always see what each string reduces to, edit {}:",
            path.display()
        );
        println!("   check:\n     show_reduced: true\n");
    }

    Ok(())
}

pub fn print_config_error(err: &anyhow::Error) {
    eprintln!("❌ Failed to load configuration: {err}");
}
