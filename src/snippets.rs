//! Replacement text for each marker.
//!
//! Plain data. Multi-line snippets carry no indentation of their own; the
//! substitution step indents them to match the marker they replace.

/// Boot loader blocks
pub mod boot {
    pub const SYSTEMD_BOOT: &str = "\
boot.loader.systemd-boot.enable = true;
boot.loader.efi.canTouchEfiVariables = true;";

    pub const RPI4: &str = "\
boot.loader.grub.enable = false;
boot.loader.generic-extlinux-compatible.enable = true;
hardware.raspberry-pi.\"4\".apply-overlays-dtmerge.enable = true;
hardware.enableRedistributableFirmware = true;";

    pub const GENERIC_ARM: &str = "\
boot.loader.grub.enable = false;
boot.loader.generic-extlinux-compatible.enable = true;";
}

/// Kernel package set references
pub mod kernel {
    pub const X86: &str = "pkgs.linuxPackages_latest";
    pub const RPI4: &str = "pkgs.linuxPackages_rpi4";
    pub const GENERIC_ARM: &str = "pkgs.linuxPackages";
}

/// Object detector declarations
pub mod detector {
    pub const CORAL: &str = "\
coral = {
  type = \"edgetpu\";
  device = \"usb\";
};
cpu_fallback = {
  type = \"cpu\";
};";

    pub const INTEL: &str = "\
# Intel: detection runs on the CPU. Enable VAAPI decode separately with
# ffmpeg.hwaccel_args = \"preset-vaapi\" in the camera settings.
cpu = {
  type = \"cpu\";
};";

    pub const ROCKCHIP: &str = "\
rknn = {
  type = \"rknn\";
  num_cores = 3;
};";

    pub const CPU: &str = "\
cpu = {
  type = \"cpu\";
};";
}

/// Hardware extras fragments, composed in order
pub mod hardware {
    pub const X86_DRIVERS: &str =
        "hardware.graphics.extraPackages = with pkgs; [ intel-media-driver intel-vaapi-driver libva-vdpau-driver ];";

    pub const ARM_DRIVERS: &str = "hardware.graphics.extraPackages = with pkgs; [ mesa ];";

    pub const ARM_VIDEO_MODULES: &str = "boot.kernelModules = [ \"bcm2835_v4l2\" \"v4l2_mem2mem\" ];";

    pub const CORAL_UDEV: &str =
        "services.udev.extraRules = ''SUBSYSTEM==\"apex\", MODE=\"0660\", GROUP=\"apex\"'';";

    pub const ROCKCHIP_MODULES: &str =
        "boot.initrd.availableKernelModules = [ \"rknpu\" \"mali_kbase\" ];";

    pub const CORAL_ARM_PACKAGES: &str = "environment.systemPackages = with pkgs; [ libedgetpu ];";
}
