//! Server startup output.

use roster_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____            __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#);
}

/// Prints where the service can be reached.
pub fn print_startup_info(config: &AppConfig) {
    let base = format!("http://{}", config.server.addr());
    let separator = "=".repeat(60);

    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Storage:     {}", config.database.backend);
    info!("Employees:   {}/employees", base);
    info!("Health:      {}/health", base);
    info!("API Docs:    {}/swagger-ui", base);
    info!("{}", separator);
}
