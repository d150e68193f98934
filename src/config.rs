use crate::credentials::{CredentialTable, BUILTIN_PROFILES};
use crate::keymap::Keymap;
use anyhow::{bail, Context, Result};
use indoc::indoc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Written to disk the first time the application runs.
const DEFAULT_CONFIG: &str = indoc! {r#"
    # profilegate configuration
    #
    # theme: "dark", "light" or "nocolor"
    theme = "dark"

    [keymap]
    # "standard" or "vim"
    preset = "standard"
    # overrides = [{ key = "ctrl+q", action = "quit" }]

    # Profiles are shown in this order. A profile with a `pin` asks for it
    # before opening; a profile without one opens directly.
    [[profiles]]
    name = "MKA"
    pin = "1234"

    [[profiles]]
    name = "B"
    pin = "5678"

    [[profiles]]
    name = "C"
    pin = "9101"

    [[profiles]]
    name = "D"
    pin = "1121"

    [[profiles]]
    name = "E"
    pin = "3141"
"#};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI theme name
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Key bindings
    #[serde(default)]
    pub keymap: Keymap,
    /// Profiles shown on the selector
    #[serde(default = "default_profiles")]
    pub profiles: Vec<ProfileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// Display name, also the key into the credential table
    pub name: String,
    /// PIN required to open the profile, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl ProfileEntry {
    pub fn new(name: impl Into<String>, pin: Option<&str>) -> Self {
        Self {
            name: name.into(),
            pin: pin.map(str::to_string),
        }
    }

    pub fn requires_pin(&self) -> bool {
        self.pin.is_some()
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_profiles() -> Vec<ProfileEntry> {
    BUILTIN_PROFILES
        .iter()
        .map(|&(name, pin)| ProfileEntry::new(name, Some(pin)))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
            profiles: default_profiles(),
        }
    }
}

impl Config {
    /// Load the config file, writing the default template first if it does
    /// not exist yet.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
            }
            std::fs::write(config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
            set_private_permissions(config_path)?;
            tracing::info!("Created default config at {:?}", config_path);
        }
        Self::load(config_path)
    }

    /// Load and validate an existing config file.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the selector cannot represent.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if profile.name.trim().is_empty() {
                bail!("Profile names cannot be empty");
            }
            if !seen.insert(profile.name.as_str()) {
                bail!("Duplicate profile name: {}", profile.name);
            }
            if profile.pin.as_deref() == Some("") {
                bail!(
                    "Profile '{}' has an empty PIN; remove the pin field to open it without one",
                    profile.name
                );
            }
        }
        for binding in &self.keymap.overrides {
            if let Err(e) = binding.parse() {
                bail!("Invalid key binding '{}': {}", binding.key, e);
            }
        }
        Ok(())
    }

    /// Build the credential table from the profiles that carry a PIN.
    pub fn credential_table(&self) -> CredentialTable {
        self.profiles
            .iter()
            .filter_map(|p| p.pin.as_deref().map(|pin| (p.name.as_str(), pin)))
            .collect()
    }

    /// Profile names in selector order.
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }
}

fn set_private_permissions(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .with_context(|| format!("Failed to get file metadata: {:?}", path))?
            .permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)
            .with_context(|| format!("Failed to set file permissions: {:?}", path))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
