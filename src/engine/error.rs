use std::fmt;
use std::io;

/// Errors from requesting a background search
#[derive(Debug)]
pub enum EngineError {
    /// A search is already running
    Busy,
    /// The worker thread could not be started
    Spawn(io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Busy => write!(f, "A search is already in progress"),
            EngineError::Spawn(err) => write!(f, "Failed to start search thread: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Busy => None,
            EngineError::Spawn(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_busy_display() {
        assert!(EngineError::Busy.to_string().contains("in progress"));
        assert!(EngineError::Busy.source().is_none());
    }

    #[test]
    fn test_spawn_keeps_source() {
        let err = EngineError::Spawn(io::Error::new(io::ErrorKind::Other, "no threads"));
        assert!(err.to_string().contains("no threads"));
        assert!(err.source().is_some());
    }
}
