use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path to derive sibling artifact names
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use confgen::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Appends `suffix` to the full file name, keeping any existing extension.
    ///
    /// # Examples
    /// ```
    /// use confgen::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("/etc/nixos/configuration.nix");
    /// assert_eq!(
    ///     path.with_appended_suffix(".bak"),
    ///     PathBuf::from("/etc/nixos/configuration.nix.bak")
    /// );
    /// ```
    fn with_appended_suffix(&self, suffix: &str) -> PathBuf;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn with_appended_suffix(&self, suffix: &str) -> PathBuf {
        let mut name = self.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }
}
