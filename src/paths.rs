use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Config directory (always ~/.config/profilegate, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("profilegate")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to. Falls back to the home directory
/// when the platform has no cache directory.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("profilegate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = get_config_path();
        assert!(path.ends_with(".config/profilegate/config.toml"));
    }

    #[test]
    fn test_log_dir_is_namespaced() {
        assert!(get_log_dir().ends_with("profilegate"));
    }
}
