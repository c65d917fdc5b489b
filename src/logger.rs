/// Sink for best-effort diagnostics that cannot be returned to the caller,
/// such as a failed drop while cleaning up a temporary database.
pub trait Logger: Send + Sync {
    /// Report a single line
    fn print(&self, line: &str);
}

impl<F> Logger for F
where
    F: Fn(&str) + Send + Sync,
{
    fn print(&self, line: &str) {
        self(line)
    }
}

/// A [`Logger`] that forwards every line to `tracing` at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn print(&self, line: &str) {
        tracing::warn!(target: "mysql_tempdb", "{}", line);
    }
}
