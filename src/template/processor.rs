use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::config::SettingsV1;
use crate::error::Result;
use crate::ext::PathExt;
use crate::ioutils::{decode_document, read_document};
use crate::marker::Marker;
use crate::params::ParameterSet;
use crate::resolver::resolve;

use super::operation::VariantOperation;
use super::substitute::substitute_all;

/// Outcome of planning one generation run.
#[derive(Debug)]
pub struct GenerationPlan {
    /// Operations to execute, backup first.
    pub operations: Vec<VariantOperation>,
    pub backup_path: PathBuf,
    pub pristine_path: Option<PathBuf>,
    /// Occurrences replaced per marker, in substitution order.
    pub replacements: IndexMap<Marker, usize>,
}

impl GenerationPlan {
    pub fn total_replacements(&self) -> usize {
        self.replacements.values().sum()
    }

    /// The generated document.
    pub fn output(&self) -> &str {
        self.operations
            .iter()
            .find_map(|op| match op {
                VariantOperation::Write { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// Turns a template document and a parameter set into a generation plan.
pub struct VariantGenerator<'a> {
    settings: &'a SettingsV1,
    keep_pristine: bool,
}

impl<'a> VariantGenerator<'a> {
    pub fn new(settings: &'a SettingsV1) -> Self {
        Self { settings, keep_pristine: false }
    }

    /// Also plan a one-time pristine snapshot next to the template.
    pub fn keep_pristine(mut self, keep_pristine: bool) -> Self {
        self.keep_pristine = keep_pristine;
        self
    }

    pub fn backup_path(&self, template_path: &Path) -> PathBuf {
        template_path.with_appended_suffix(&self.settings.backup_suffix)
    }

    pub fn pristine_path(&self, template_path: &Path) -> PathBuf {
        template_path.with_appended_suffix(&self.settings.pristine_suffix)
    }

    /// Reads `template_path` and plans the backup and the rewrite.
    ///
    /// Nothing is written here; the returned operations carry the exact
    /// bytes that were read, so the backup matches the template as it was
    /// before this run.
    pub fn plan(&self, template_path: &Path, params: &ParameterSet) -> Result<GenerationPlan> {
        let original = read_document(template_path)?;
        let document = decode_document(template_path, &original)?;
        log::debug!("Read {} bytes from '{}'", original.len(), template_path.display());

        let (output, replacements) = self.render(document, params);
        if replacements.values().all(|count| *count == 0) {
            log::warn!(
                "No markers found in '{}'; it may already be generated. \
                 The backup will still be overwritten.",
                template_path.display()
            );
        }

        let backup_path = self.backup_path(template_path);
        let pristine_path = self.keep_pristine.then(|| self.pristine_path(template_path));

        let mut operations = Vec::with_capacity(3);
        operations.push(VariantOperation::Backup {
            target: backup_path.clone(),
            content: original.clone(),
            target_exists: backup_path.exists(),
        });
        if let Some(target) = &pristine_path {
            operations.push(VariantOperation::Snapshot {
                target: target.clone(),
                content: original,
                target_exists: target.exists(),
            });
        }
        operations.push(VariantOperation::Write {
            target: template_path.to_path_buf(),
            content: output,
        });

        Ok(GenerationPlan { operations, backup_path, pristine_path, replacements })
    }

    /// Substitutes every marker in `document` with its resolved snippet.
    pub fn render(
        &self,
        document: &str,
        params: &ParameterSet,
    ) -> (String, IndexMap<Marker, usize>) {
        let resolution = resolve(params);
        let pairs: Vec<(&str, &str)> = resolution
            .iter()
            .map(|(marker, snippet)| (self.settings.markers.literal(*marker), snippet.as_str()))
            .collect();
        let (output, counts) = substitute_all(document, &pairs);

        let mut replacements = IndexMap::with_capacity(resolution.len());
        for ((marker, snippet), count) in resolution.iter().zip(counts) {
            let literal = self.settings.markers.literal(*marker);
            log::debug!("Replaced {count} occurrence(s) of {marker} ({literal:?})");
            log::trace!("Snippet for {marker}:\n{snippet}");
            replacements.insert(*marker, count);
        }

        (output, replacements)
    }
}
