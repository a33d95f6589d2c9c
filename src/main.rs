use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use voicebridge::application::services::{ConversionService, ModelBootstrapper};
use voicebridge::infrastructure::audio::SymphoniaAudioInspector;
use voicebridge::infrastructure::model::{CandleModelLoader, select_compute_device};
use voicebridge::infrastructure::observability::{TracingConfig, init_tracing};
use voicebridge::presentation::{AppState, CliArgs, Interface, ServerSettings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    init_tracing(&TracingConfig::default());

    let server = ServerSettings::from_env();

    if args.share {
        tracing::warn!("--share requested, but public share links are not supported; serving locally");
    }

    let options = args.bootstrap_options(select_compute_device());
    let context = tokio::task::spawn_blocking(move || {
        ModelBootstrapper::new(Arc::new(CandleModelLoader::new())).bootstrap(&options)
    })
    .await?;

    if !context.is_loaded() {
        tracing::warn!(
            error = context.load_error().unwrap_or_default(),
            "Starting without a model; conversions will report it as not loaded"
        );
    }

    let context = Arc::new(context);
    let conversion_service = Arc::new(ConversionService::new(
        Arc::clone(&context),
        Arc::new(SymphoniaAudioInspector),
        args.placeholder.into(),
    ));

    let state = AppState {
        context,
        conversion_service,
        interface: Arc::new(Interface::voice_conversion()),
        share_requested: args.share,
    };

    let router = create_router(state, server.max_upload_bytes);

    let addr = server.socket_addr();
    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
