//! Prints the configured access matrix as JSON.
//!
//! Useful to review who can open which page before shipping a config change.

use boardroom_dashboard::{Dashboard, DashboardConfig};

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load()?;
    boardroom_observability::init(&config.log);

    // Unreachable routes are already logged during validation.
    let dashboard = Dashboard::from_config(&config)?;
    let matrix = dashboard.access_matrix();
    tracing::info!(routes = matrix.routes.len(), tiers = matrix.tiers.len(), "access matrix built");

    println!("{}", serde_json::to_string_pretty(&matrix)?);
    Ok(())
}
