use std::path::PathBuf;

use crate::error::Result;
use crate::ioutils::write_file;

/// A single filesystem effect of a generation run, in execution order.
#[derive(Debug, PartialEq)]
pub enum VariantOperation {
    /// Byte-for-byte copy of the template as read, overwriting any previous backup.
    Backup { target: PathBuf, content: Vec<u8>, target_exists: bool },
    /// One-time copy of the template, skipped when the target already exists.
    Snapshot { target: PathBuf, content: Vec<u8>, target_exists: bool },
    /// The generated document replacing the template.
    Write { target: PathBuf, content: String },
}

impl VariantOperation {
    pub fn target(&self) -> &PathBuf {
        match self {
            VariantOperation::Backup { target, .. }
            | VariantOperation::Snapshot { target, .. }
            | VariantOperation::Write { target, .. } => target,
        }
    }

    /// Whether executing this operation would change anything on disk.
    pub fn is_effective(&self) -> bool {
        !matches!(self, VariantOperation::Snapshot { target_exists: true, .. })
    }

    /// Performs the operation.
    ///
    /// # Returns
    /// * `Ok(false)` - If the operation was skipped (existing pristine copy)
    pub fn execute(&self) -> Result<bool> {
        match self {
            VariantOperation::Backup { target, content, .. } => write_file(content, target)?,
            VariantOperation::Snapshot { target_exists: true, .. } => return Ok(false),
            VariantOperation::Snapshot { target, content, .. } => {
                // re-checked here: the plan may be stale by now
                if target.exists() {
                    return Ok(false);
                }
                write_file(content, target)?
            }
            VariantOperation::Write { target, content } => write_file(content, target)?,
        }
        Ok(true)
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            VariantOperation::Backup { target, content, target_exists } => {
                if *target_exists {
                    format!(
                        "{prefix}Backing up {} bytes to '{}' (overwriting existing backup)",
                        content.len(),
                        target.display()
                    )
                } else {
                    format!(
                        "{prefix}Backing up {} bytes to '{}'",
                        content.len(),
                        target.display()
                    )
                }
            }
            VariantOperation::Snapshot { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{prefix}Keeping pristine copy '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("{prefix}Saving pristine copy to '{}'", target.display())
                }
            }
            VariantOperation::Write { target, content } => {
                format!("{prefix}Writing {} bytes to '{}'", content.len(), target.display())
            }
        }
    }
}
