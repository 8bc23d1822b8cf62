use once_cell::sync::Lazy;

/// Whether a human is likely watching the output (stdout is a terminal).
///
/// When unattended, commands print bare values meant for scripts instead of styled log lines.
pub static USER_ATTENDED: Lazy<bool> = Lazy::new(|| console::user_attended());
