use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use tolka::application::ports::{AudioDemuxer, FileLoader, Translator};
use tolka::infrastructure::audio::{FfmpegDemuxer, TranscriptionEngineFactory};
use tolka::infrastructure::llm::{LlmTranslator, create_llm_client};
use tolka::infrastructure::observability::{TracingConfig, init_tracing};
use tolka::infrastructure::text_processing::CompositeFileLoader;
use tolka::presentation::{AppDependencies, AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging))
        .context("Failed to initialize tracing")?;

    let llm_client =
        create_llm_client(&settings.llm).context("Failed to create text-generation client")?;
    let transcription_engine = TranscriptionEngineFactory::from_settings(&settings.transcription)
        .context("Failed to create transcription engine")?;

    let demuxer = FfmpegDemuxer::new(&settings.video.ffmpeg_path, &settings.video.ffprobe_path);
    if let Err(e) = demuxer.check_binaries().await {
        tracing::warn!(error = %e, "ffmpeg/ffprobe unavailable, video processing will fail");
    }

    let translator: Arc<dyn Translator> = Arc::new(LlmTranslator::new(Arc::clone(&llm_client)));
    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::with_default_adapters());
    let demuxer: Arc<dyn AudioDemuxer> = Arc::new(demuxer);

    let state = AppState::from_settings(
        AppDependencies {
            llm_client,
            transcription_engine,
            translator,
            file_loader,
            demuxer,
        },
        &settings,
    );

    let router = create_router(state, settings.server.max_body_bytes);

    let ip = settings
        .server
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("Invalid server host: {}", settings.server.host))?;
    let addr = SocketAddr::new(ip, settings.server.port);

    tracing::info!(
        %addr,
        llm_provider = ?settings.llm.provider,
        transcription_provider = ?settings.transcription.provider,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
