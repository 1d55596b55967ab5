use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solvers.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with the given logger.
    pub fn new_with_logger(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an instance of `Environment` which logs into stdout.
    pub fn new_with_stdout_logger() -> Self {
        Self::new_with_logger(Arc::new(|msg: &str| println!("{msg}")))
    }

    /// Passes message to the logger.
    pub fn log(&self, msg: &str) {
        (self.logger)(msg)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new_with_logger(Arc::new(|_: &str| {}))
    }
}
