//! Server startup utilities.

use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:   http://{addr}/api/v1");
    info!("Health:     http://{addr}/health");
    info!("Swagger UI: http://{addr}/swagger-ui");
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0:8080");
    }
}
