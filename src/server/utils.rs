//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::CloneError;

impl HttpServer {
    /// Format a readable error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> CloneError {
        if error.kind() == std::io::ErrorKind::AddrInUse {
            CloneError::config(format!(
                "Port {} is already in use; stop the other process or set TTS_CLONE_PORT",
                port
            ))
        } else {
            CloneError::config(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
