//! Path helpers for the `/host` mount of the Zellij sandbox.

use std::path::PathBuf;

/// Directory for the plugin's own files (trace output).
///
/// `/host` is the cwd of the last focused terminal, normally the user's home,
/// so this is usually `~/.local/share/zellij/menuboard`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("menuboard")
}

/// Rewrites a leading `~` to `/host` so user-facing paths such as
/// `theme_file "~/themes/house.toml"` resolve inside the sandbox.
///
/// ```
/// use menuboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/house.toml"), "/host/themes/house.toml");
/// assert_eq!(expand_tilde("/etc/menuboard.toml"), "/etc/menuboard.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_only() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a"), "/host/a");
        assert_eq!(expand_tilde("~other/a"), "~other/a");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }

    #[test]
    fn data_dir_is_under_zellij_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/menuboard")
        );
    }
}
