//! Platform-specific helpers and path resolution.
//!
//! This module concentrates the places where Windows and Unix genuinely
//! differ: home-directory lookup, environment-variable expansion syntax,
//! and the Windows extended-length path prefix. Everything else in the
//! crate stays platform-neutral.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Returns `true` when running on Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

/// Returns the current user's home directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined, with a
/// platform-appropriate hint about which environment variable to check.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine home directory.\n\n{platform_help}")
    })
}

/// Resolves a user-supplied path string into a usable [`PathBuf`].
///
/// Performs, in order:
/// 1. Tilde expansion: a leading `~/` is replaced with the home directory.
///    Named home references (`~user`) are rejected, since resolving other
///    users' homes is not portable.
/// 2. Environment-variable expansion: `$VAR` / `${VAR}` everywhere, plus
///    `%VAR%` on Windows.
/// 3. Extended-length prefixing on Windows when the result is long enough
///    to need it (see [`windows_long_path`]).
///
/// # Errors
///
/// Returns an error for a bare `~user` reference or when an undefined
/// environment variable is referenced.
///
/// # Examples
///
/// ```rust,no_run
/// use fskit::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = resolve_path("~/.config/app/config.toml")?;
/// let data = resolve_path("$HOME/data")?;
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = if let Some(stripped) = path.strip_prefix("~/") {
        let home = get_home_dir()?;
        home.join(stripped)
    } else if path.starts_with('~') && path.len() > 1 {
        return Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for the current home directory.\n\
            Use '~/' followed by a relative path, like '~/Documents/file.txt'"
        ));
    } else if path == "~" {
        get_home_dir()?
    } else {
        PathBuf::from(path)
    };

    let path_str = expanded.to_string_lossy();

    let expanded_str = if is_windows() && path_str.contains('%') {
        // Windows-style %VAR% expansion first, then Unix-style for
        // compatibility with mixed input
        let mut result = path_str.to_string();
        let re = Regex::new(r"%([^%]+)%").expect("static pattern");

        for cap in re.captures_iter(&path_str) {
            if let Some(var_name) = cap.get(1)
                && let Ok(value) = std::env::var(var_name.as_str())
            {
                result = result.replace(&format!("%{}%", var_name.as_str()), &value);
            }
        }

        match shellexpand::env(&result) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => result,
        }
    } else {
        shellexpand::env(&path_str)
            .with_context(|| {
                format!(
                    "Failed to expand environment variables in path: {path_str}\n\n\
                    Common issues:\n\
                    - Undefined environment variable (e.g., $UNDEFINED_VAR)\n\
                    - Invalid variable syntax (use $VAR or ${{VAR}})"
                )
            })?
            .into_owned()
    };

    Ok(windows_long_path(Path::new(&expanded_str)))
}

/// Rewrites a long path with the Windows extended-length prefix.
///
/// Windows limits ordinary paths to 260 characters; the `\\?\` prefix
/// lifts that limit. Paths already carrying the prefix, and paths short
/// enough not to need it, are returned unchanged.
#[cfg(windows)]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str.len() > 260 && !path_str.starts_with(r"\\?\") {
        let absolute_path = if path.is_relative() {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(path)
        } else {
            path.to_path_buf()
        };

        let absolute_str = absolute_path.to_string_lossy();
        if absolute_str.len() > 260 {
            if let Some(stripped) = absolute_str.strip_prefix(r"\\") {
                PathBuf::from(format!(r"\\?\UNC\{stripped}"))
            } else {
                PathBuf::from(format!(r"\\?\{absolute_str}"))
            }
        } else {
            absolute_path
        }
    } else {
        path.to_path_buf()
    }
}

/// No-op implementation of [`windows_long_path`] for non-Windows
/// platforms, where no path-length prefix exists.
#[cfg(not(windows))]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}
