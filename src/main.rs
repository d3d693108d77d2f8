// Main entry point - Dependency injection and smoke run
use std::sync::Arc;

use anyhow::Context;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};

use kpi_dashboard_client::application::dashboard_service::DashboardService;
use kpi_dashboard_client::domain::period::AlertPeriod;
use kpi_dashboard_client::infrastructure::config::load_client_config;
use kpi_dashboard_client::infrastructure::http_backend::HttpKpiBackend;
use kpi_dashboard_client::infrastructure::notifications::NotificationChannel;
use kpi_dashboard_client::infrastructure::session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_client_config()?;

    // Shared session and failure channel (infrastructure layer)
    let session = Arc::new(SessionStore::new());
    let notifications = NotificationChannel::new();

    // Surface transport failures the way the browser UI shows a toast
    let mut failures = BroadcastStream::new(notifications.subscribe());
    tokio::spawn(async move {
        while let Some(Ok(notification)) = failures.next().await {
            eprintln!("[{}] {}", notification.message, notification.detail);
        }
    });

    // Create backend and facade (application layer)
    let backend = Arc::new(HttpKpiBackend::new(
        &config.backend,
        session.clone(),
        notifications,
    )?);
    let service = DashboardService::new(backend, session);

    let username = std::env::var("KPI_USERNAME").context("KPI_USERNAME is not set")?;
    let password = std::env::var("KPI_PASSWORD").context("KPI_PASSWORD is not set")?;
    service.login(&username, &password).await?;

    let kpis = service.kpis().await?;
    println!("{} KPIs available", kpis.len());
    for kpi in &kpis {
        println!("  {} [{}] {:?}", kpi.name_id, kpi.unit, kpi.category);
    }

    let alerts = service.alerts(AlertPeriod::Today).await?;
    println!("{} alerts today", alerts.len());
    for alert in &alerts {
        println!(
            "  #{} {:?} machine {} {}: {}",
            alert.id, alert.severity, alert.machine_id, alert.kpi, alert.alert_description
        );
    }

    service.logout().await?;

    Ok(())
}
