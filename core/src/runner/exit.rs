/// Exit code the dispatcher relays for a finished delegate.
///
/// Normal exits pass through unchanged; a signal-terminated delegate maps to
/// `128 + signal`, and anything else to 1.
pub fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(1)
    }
}
