use std::path::PathBuf;

/// Overrides the config directory; used by tests and packagers.
pub const CONFIG_DIR_ENV: &str = "STAYZY_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// `$STAYZY_CONFIG_DIR`, else `~/.config/stayzy` on every OS
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("stayzy"),
    }
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Where the log file goes: the platform cache dir, else the home dir.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("stayzy")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_inside_config_dir() {
        let path = get_config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        assert_eq!(path.parent(), Some(get_config_dir().as_path()));
    }

    #[test]
    fn test_log_dir_is_named_after_app() {
        assert!(get_log_dir().ends_with("stayzy"));
    }
}
