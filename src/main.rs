use anyhow::Context;
use cerberus_status::{telemetry, UserStatus};

fn main() -> anyhow::Result<()> {
    let config = cerberus_status::config::get_config().context("failed to read config.")?;

    // 遥测初始化
    let subscriber = telemetry::get_subscriber(
        &config.application.name,
        &config.application.log_level,
        std::io::stdout,
    );
    telemetry::init_subscriber(subscriber);

    for status in UserStatus::ALL {
        tracing::info!(
            status = status.as_str(),
            label = status.label(),
            scopes = ?status.scopes(),
            "user status loaded."
        );
    }

    Ok(())
}
