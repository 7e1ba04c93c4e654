/// Receives classifier trace lines when diagnostic mode is on.
pub trait TraceSink {
    fn trace(&self, message: &str);
}

impl<F: Fn(&str)> TraceSink for F {
    fn trace(&self, message: &str) {
        self(message);
    }
}

/// Forwards trace lines to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn trace(&self, message: &str) {
        tracing::debug!(target: "changed_areas::classify", "{message}");
    }
}
