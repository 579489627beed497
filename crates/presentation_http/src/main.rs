//! FaultMart HTTP server
//!
//! Main entry point for the demo backend. Startup walks the same sequence
//! every time: configuration, database, migrations, session cleanup, then
//! the listener - with the db-failure and critical-failure switches able to
//! abort the sequence at their rehearsed points.

use std::{sync::Arc, time::Duration};

use application::{AccountService, NotificationService, OrderService};
use infrastructure::{
    AppConfig, Argon2PasswordHasher, HttpEventBus, HttpPaymentGateway, JwtTokenSigner,
    SqliteOrderStore, SqliteSessionStore, SqliteUserStore, create_pool, run_migrations,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faultmart_server=debug,presentation_http=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    info!(
        "🛒 FaultMart v{} starting on port {}",
        env!("CARGO_PKG_VERSION"),
        config.server.port
    );
    if config.faults.any_enabled() {
        warn!(switches = ?config.faults.enabled_switches(), "Fault injection enabled");
    }

    // Database; the db-failure switch aborts here.
    info!("Initializing database...");
    let pool = create_pool(&config.database, &config.faults).map_err(|e| {
        error!("Failed to start application: {e}");
        anyhow::anyhow!(e)
    })?;
    if config.database.run_migrations {
        run_migrations(&pool)?;
    }
    info!("Database initialized successfully");

    // Adapters
    let payment_timeout = Duration::from_secs(config.services.payment_timeout_secs);
    let event_bus_timeout = Duration::from_secs(config.services.event_bus_timeout_secs);
    let tokens = Arc::new(JwtTokenSigner::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_hours,
    ));
    let accounts = Arc::new(
        AccountService::new(
            Arc::new(SqliteUserStore::new(pool.clone())),
            Arc::new(SqliteSessionStore::new(pool.clone())),
            Arc::new(Argon2PasswordHasher::new()),
            tokens.clone(),
            Arc::new(HttpEventBus::new(
                config.services.event_bus_url.clone(),
                event_bus_timeout,
            )),
        )
        .with_token_ttl(chrono::Duration::hours(config.auth.token_ttl_hours)),
    );
    let orders = Arc::new(OrderService::new(
        Arc::new(SqliteOrderStore::new(pool.clone())),
        Arc::new(HttpPaymentGateway::new(
            config.services.payment_url.clone(),
            payment_timeout,
            config.faults.payment_timeout,
        )),
    ));
    let notifications = NotificationService::new(config.faults.email_failure);

    // Startup session sweep, best-effort
    info!("Session cleanup job started");
    match accounts.cleanup_sessions().await {
        Ok(removed) => {
            info!("Session cleanup completed: removed {removed} expired sessions");
        }
        Err(e) => error!("Session cleanup failed: {e}"),
    }

    // The critical-failure switch aborts startup with a rehearsed trace
    // before the listener binds.
    if config.faults.critical_failure {
        info!("Shutting down gracefully...");
        error!("Unhandled exception in main thread");
        error!("Traceback (most recent call last):");
        error!("  File \"main.py\", line 400, in <module>");
        error!("    app.run()");
        error!("  File \"main.py\", line 398, in run_app");
        error!("    initialize_services()");
        error!("  File \"services/initializer.py\", line 33, in initialize_services");
        error!("    raise RuntimeError(\"Unable to initialize critical service: payment-service\")");
        error!("RuntimeError: Unable to initialize critical service: payment-service");
        anyhow::bail!("Unable to initialize critical service: payment-service");
    }

    let state = AppState {
        accounts,
        orders,
        notifications,
        pool,
        faults: config.faults,
    };

    let app = routes::create_router(state, tokens).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
