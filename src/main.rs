use anyhow::Context;

use coursehub::shared::utils::init_logger;
use coursehub::{log_error, log_info, AppConfig, ApplicationContainer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let container = ApplicationContainer::new(&config).context("failed to connect to database")?;

    let database = container.database().clone();
    let migrated = tokio::task::spawn_blocking(move || database.run_migrations())
        .await
        .context("migration task panicked")?;
    let applied = match migrated {
        Ok(applied) => applied,
        Err(e) => {
            log_error!("Migrations failed, closing the pool: {}", e);
            container.close();
            return Err(e).context("failed to run migrations");
        }
    };
    log_info!("{} pending migrations applied", applied);

    let status = container.database().pool_status();
    log_info!(
        "coursehub ready: {} connections ({} idle, max {})",
        status.connections,
        status.idle_connections,
        status.max_size
    );

    container.close();
    Ok(())
}
