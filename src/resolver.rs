//! Table-driven resolution of a parameter set into one snippet per marker.

use indexmap::IndexMap;

use crate::marker::Marker;
use crate::params::{Accelerator, Architecture, Board, ParameterSet};
use crate::snippets::{boot, detector, hardware, kernel};

/// Ordered marker to snippet mapping. An empty snippet erases its marker.
pub type Resolution = IndexMap<Marker, String>;

/// Resolves every marker for `params`.
///
/// The result always contains all of [`Marker::ALL`], in that order.
pub fn resolve(params: &ParameterSet) -> Resolution {
    let (x86_boot, arm_boot) = boot_loader(params);

    let mut resolution = Resolution::with_capacity(Marker::ALL.len());
    resolution.insert(Marker::BootLoaderX86, x86_boot.to_string());
    resolution.insert(Marker::BootLoaderArm, arm_boot.to_string());
    resolution.insert(Marker::KernelPackages, kernel_packages(params).to_string());
    resolution.insert(Marker::Detector, detector_for(params.accelerator).to_string());
    resolution.insert(Marker::Hardware, hardware_fragments(params).join("\n"));
    resolution
}

/// Returns the (x86, arm) boot loader snippets; the unused one is empty.
fn boot_loader(params: &ParameterSet) -> (&'static str, &'static str) {
    match (params.architecture, params.board) {
        (Architecture::X86, _) => (boot::SYSTEMD_BOOT, ""),
        (Architecture::Arm, Board::Rpi4) => ("", boot::RPI4),
        (Architecture::Arm, Board::Generic) => ("", boot::GENERIC_ARM),
    }
}

fn kernel_packages(params: &ParameterSet) -> &'static str {
    match (params.architecture, params.board) {
        (Architecture::X86, _) => kernel::X86,
        (Architecture::Arm, Board::Rpi4) => kernel::RPI4,
        (Architecture::Arm, Board::Generic) => kernel::GENERIC_ARM,
    }
}

pub fn detector_for(accelerator: Accelerator) -> &'static str {
    match accelerator {
        Accelerator::Coral => detector::CORAL,
        Accelerator::Intel => detector::INTEL,
        Accelerator::Rockchip => detector::ROCKCHIP,
        Accelerator::None => detector::CPU,
    }
}

/// Hardware extras as an ordered list: the architecture's base block, then
/// whatever the accelerator adds on that architecture.
pub fn hardware_fragments(params: &ParameterSet) -> Vec<&'static str> {
    let mut fragments = match params.architecture {
        Architecture::X86 => vec![hardware::X86_DRIVERS],
        Architecture::Arm => vec![hardware::ARM_DRIVERS, hardware::ARM_VIDEO_MODULES],
    };

    match (params.architecture, params.accelerator) {
        (Architecture::X86, Accelerator::Coral) => fragments.push(hardware::CORAL_UDEV),
        (Architecture::Arm, Accelerator::Coral) => fragments.push(hardware::CORAL_ARM_PACKAGES),
        (_, Accelerator::Rockchip) => fragments.push(hardware::ROCKCHIP_MODULES),
        (_, Accelerator::Intel | Accelerator::None) => {}
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(arch: Architecture, accel: Accelerator, board: Board) -> ParameterSet {
        ParameterSet::new(arch, accel, board)
    }

    #[test]
    fn resolves_every_marker_for_every_combination() {
        for set in ParameterSet::all() {
            let resolution = resolve(&set);
            let markers: Vec<_> = resolution.keys().copied().collect();
            assert_eq!(markers, Marker::ALL.to_vec(), "{set}");
            assert!(!resolution[&Marker::Detector].is_empty(), "{set}");
            assert!(!resolution[&Marker::Hardware].is_empty(), "{set}");
        }
    }

    #[test]
    fn x86_erases_the_arm_boot_loader() {
        let resolution = resolve(&params(Architecture::X86, Accelerator::None, Board::Generic));
        assert_eq!(resolution[&Marker::BootLoaderX86], boot::SYSTEMD_BOOT);
        assert_eq!(resolution[&Marker::BootLoaderArm], "");
        assert_eq!(resolution[&Marker::KernelPackages], kernel::X86);
    }

    #[test]
    fn arm_boot_block_follows_the_board() {
        let rpi4 = resolve(&params(Architecture::Arm, Accelerator::None, Board::Rpi4));
        assert_eq!(rpi4[&Marker::BootLoaderX86], "");
        assert_eq!(rpi4[&Marker::BootLoaderArm], boot::RPI4);
        assert_eq!(rpi4[&Marker::KernelPackages], kernel::RPI4);

        let generic = resolve(&params(Architecture::Arm, Accelerator::None, Board::Generic));
        assert_eq!(generic[&Marker::BootLoaderArm], boot::GENERIC_ARM);
        assert_eq!(generic[&Marker::KernelPackages], kernel::GENERIC_ARM);
    }

    #[test]
    fn detector_lookup_is_total() {
        assert!(detector_for(Accelerator::Coral).contains("\"edgetpu\""));
        assert!(detector_for(Accelerator::Intel).contains("\"cpu\""));
        assert!(detector_for(Accelerator::Intel).contains("preset-vaapi"));
        assert!(detector_for(Accelerator::Rockchip).contains("\"rknn\""));
        assert_eq!(detector_for(Accelerator::None), detector::CPU);
    }

    #[test]
    fn arm_rockchip_composes_base_then_video_then_npu() {
        let fragments =
            hardware_fragments(&params(Architecture::Arm, Accelerator::Rockchip, Board::Generic));
        assert_eq!(
            fragments,
            vec![hardware::ARM_DRIVERS, hardware::ARM_VIDEO_MODULES, hardware::ROCKCHIP_MODULES]
        );
    }

    #[test]
    fn coral_fragment_depends_on_architecture() {
        let x86 = hardware_fragments(&params(Architecture::X86, Accelerator::Coral, Board::Generic));
        assert_eq!(x86, vec![hardware::X86_DRIVERS, hardware::CORAL_UDEV]);

        let arm = hardware_fragments(&params(Architecture::Arm, Accelerator::Coral, Board::Rpi4));
        assert_eq!(
            arm,
            vec![hardware::ARM_DRIVERS, hardware::ARM_VIDEO_MODULES, hardware::CORAL_ARM_PACKAGES]
        );
    }

    #[test]
    fn hardware_snippet_is_one_fragment_per_line() {
        let set = params(Architecture::X86, Accelerator::Coral, Board::Generic);
        let resolution = resolve(&set);
        let lines: Vec<_> = resolution[&Marker::Hardware].lines().collect();
        assert_eq!(lines, hardware_fragments(&set));
    }
}
