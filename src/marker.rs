//! The fixed set of placeholders a template may contain.

use serde::Deserialize;
use std::fmt::Display;

use crate::constants::markers;
use crate::error::{Error, Result};

/// One of the enumerated placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    BootLoaderX86,
    BootLoaderArm,
    KernelPackages,
    Detector,
    Hardware,
}

impl Marker {
    /// Substitution order.
    pub const ALL: [Marker; 5] = [
        Marker::BootLoaderX86,
        Marker::BootLoaderArm,
        Marker::KernelPackages,
        Marker::Detector,
        Marker::Hardware,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Marker::BootLoaderX86 => "boot_loader_x86",
            Marker::BootLoaderArm => "boot_loader_arm",
            Marker::KernelPackages => "kernel_packages",
            Marker::Detector => "detector",
            Marker::Hardware => "hardware",
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Literal spelling of every marker as it appears in a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerSet {
    pub boot_loader_x86: String,
    pub boot_loader_arm: String,
    pub kernel_packages: String,
    pub detector: String,
    pub hardware: String,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            boot_loader_x86: markers::BOOT_LOADER_X86.to_string(),
            boot_loader_arm: markers::BOOT_LOADER_ARM.to_string(),
            kernel_packages: markers::KERNEL_PACKAGES.to_string(),
            detector: markers::DETECTOR.to_string(),
            hardware: markers::HARDWARE.to_string(),
        }
    }
}

impl MarkerSet {
    pub fn literal(&self, marker: Marker) -> &str {
        match marker {
            Marker::BootLoaderX86 => &self.boot_loader_x86,
            Marker::BootLoaderArm => &self.boot_loader_arm,
            Marker::KernelPackages => &self.kernel_packages,
            Marker::Detector => &self.detector,
            Marker::Hardware => &self.hardware,
        }
    }

    /// Iterates `(marker, literal)` pairs in substitution order.
    pub fn iter(&self) -> impl Iterator<Item = (Marker, &str)> + '_ {
        Marker::ALL.into_iter().map(move |marker| (marker, self.literal(marker)))
    }

    /// Checks that substituting one marker can never touch another.
    ///
    /// Every literal must be non-blank and no literal may contain another.
    pub fn validate(&self) -> Result<()> {
        for (marker, literal) in self.iter() {
            if literal.trim().is_empty() {
                return Err(Error::ConfigValidation(format!(
                    "marker '{marker}' must not be empty"
                )));
            }
        }
        for (a, literal_a) in self.iter() {
            for (b, literal_b) in self.iter() {
                if a != b && literal_a.contains(literal_b) {
                    return Err(Error::ConfigValidation(format!(
                        "marker '{a}' ({literal_a:?}) overlaps marker '{b}' ({literal_b:?})"
                    )));
                }
            }
        }
        Ok(())
    }
}
