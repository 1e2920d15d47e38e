//! Sandbox paths.
//!
//! Inside a Zellij plugin the host filesystem appears under `/host`, which
//! normally resolves to the directory Zellij was started from (usually `~`).

use std::path::PathBuf;

/// Directory holding the trace file.
///
/// Resolves to `/host/.local/share/zellij/flagdial`, i.e.
/// `~/.local/share/zellij/flagdial` on the host.
///
/// ```
/// use flagdial::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/flagdial"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("flagdial")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// Used for user-supplied `theme_file` and `catalog_file` paths.
///
/// ```
/// use flagdial::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/countries.toml"), "/host/countries.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/flagdial.toml"), "/etc/flagdial.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("~user/file"), "~user/file");
        assert_eq!(expand_tilde("data/~/x"), "data/~/x");
    }
}
