//! Variant generation engine
//!
//! - `substitute`: Marker replacement within a single document
//! - `operation`: Filesystem effects of a run
//! - `processor`: Planning a run from a template and a parameter set

pub mod operation;
pub mod processor;
pub mod substitute;

use std::path::Path;

use crate::config::SettingsV1;
use crate::error::Result;
use crate::params::ParameterSet;
use processor::{GenerationPlan, VariantGenerator};

/// Generates a variant of the template at `template_path` in place.
///
/// Parameters are validated before the template is touched, so an invalid
/// value leaves both the template and any existing backup unchanged. The
/// backup is written before the template is rewritten. Running again on an
/// already generated file replaces nothing but still overwrites the backup
/// with the current, generated content.
///
/// # Arguments
/// * `template_path` - Template document, rewritten in place
/// * `architecture` - `x86` or `arm`
/// * `accelerator` - `coral`, `intel`, `rockchip` or `none` (default)
/// * `board` - `rpi4` or `generic` (default); ignored unless `architecture` is `arm`
pub fn generate<P: AsRef<Path>>(
    template_path: P,
    architecture: &str,
    accelerator: Option<&str>,
    board: Option<&str>,
) -> Result<GenerationPlan> {
    let params = ParameterSet::parse(Some(architecture), accelerator, board)?;
    let settings = SettingsV1::default();
    generate_with(template_path.as_ref(), &params, &VariantGenerator::new(&settings))
}

/// Plans and executes a run with an already configured generator.
pub fn generate_with(
    template_path: &Path,
    params: &ParameterSet,
    generator: &VariantGenerator,
) -> Result<GenerationPlan> {
    log::info!("Generating '{}' for {params}", template_path.display());
    let plan = generator.plan(template_path, params)?;
    apply(&plan, false)?;
    Ok(plan)
}

/// Executes the planned operations in order, stopping at the first failure.
///
/// With `dry_run` set nothing is written; the operations are only logged.
pub fn apply(plan: &GenerationPlan, dry_run: bool) -> Result<()> {
    for operation in &plan.operations {
        log::trace!("Handling operation: {operation:?}");
        let performed = if dry_run { operation.is_effective() } else { operation.execute()? };
        log::info!("{}", operation.get_message(dry_run));
        if !performed {
            log::debug!("Skipped '{}'", operation.target().display());
        }
    }
    Ok(())
}
