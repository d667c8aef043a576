//! Path display helpers.

use std::path::Path;

/// Render `path` for terminal output, abbreviating the user's home
/// directory to `~`.
pub fn abbreviate_home(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.display().to_string()
}
