//! Constants used throughout confgen

/// Settings file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["confgen.json", "confgen.yaml", "confgen.yml"];

/// Default suffix appended to the template file name for the backup artifact
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// Default suffix for the one-time pristine snapshot
pub const DEFAULT_PRISTINE_SUFFIX: &str = ".orig";

/// Default literal spellings of the enumerated markers
pub mod markers {
    pub const BOOT_LOADER_X86: &str = "# @BOOTLOADER_X86@";
    pub const BOOT_LOADER_ARM: &str = "# @BOOTLOADER_ARM@";
    pub const KERNEL_PACKAGES: &str = "@KERNEL_PACKAGES@";
    pub const DETECTOR: &str = "# @DETECTOR@";
    pub const HARDWARE: &str = "# @HARDWARE@";
}

/// Printed after a successful run; the activation itself is never invoked.
pub const ACTIVATION_REMINDER: &str =
    "Review the result, then activate it with `nixos-rebuild switch`.";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
