//! Line-oriented progress sinks
//!
//! Training reports goal hits, heartbeats and interruption through a
//! [`Logger`]. The default sink forwards to `tracing`; tests collect the
//! lines in memory.

/// Sink for human-readable progress messages
pub trait Logger {
    fn log(&mut self, message: &str);
}

/// Forwards every message to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&mut self, message: &str) {
        tracing::info!(target: "qpath::progress", "{}", message);
    }
}

/// Keeps every message
#[derive(Debug, Default, Clone)]
pub struct MemoryLogger {
    pub lines: Vec<String>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages that start with `prefix`
    pub fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.lines.iter().map(String::as_str).filter(move |l| l.starts_with(prefix))
    }
}

impl Logger for MemoryLogger {
    fn log(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&mut self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_filters() {
        let mut logger = MemoryLogger::new();
        logger.log("Completed Episode 1000");
        logger.log("Goal reached! Reward: -0.8");
        logger.log("Completed Episode 2000");
        assert_eq!(logger.matching("Completed").count(), 2);
        assert_eq!(logger.matching("Goal").count(), 1);
    }
}
