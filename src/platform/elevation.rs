/// smartctl needs raw device access, which normally means root.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    // Privilege problems surface as smartctl errors on other platforms
    true
}

/// Whether a privilege warning should be shown before running smartctl
pub fn needs_privilege_warning(use_sudo: bool) -> bool {
    !use_sudo && !is_elevated()
}
