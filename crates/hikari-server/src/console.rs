//! Console port.

/// The server console.
pub trait Console {
    /// Run a command as the console. Returns whether the host accepted it.
    fn dispatch_command(&self, command: &str) -> bool;

    /// Write a line to the server log.
    fn log(&self, message: &str);
}
