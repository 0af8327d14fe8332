use std::sync::Arc;

use crate::application::ports::{
    AudioDemuxer, FileLoader, LlmClient, TranscriptionEngine, Translator,
};
use crate::application::services::{
    AudioService, DocumentService, ImageService, TextService, TranslationService,
    VideoPipelineConfig, VideoService,
};
use crate::presentation::config::Settings;

/// Collaborators the pipelines are built from.
pub struct AppDependencies {
    pub llm_client: Arc<dyn LlmClient>,
    pub transcription_engine: Arc<dyn TranscriptionEngine>,
    pub translator: Arc<dyn Translator>,
    pub file_loader: Arc<dyn FileLoader>,
    pub demuxer: Arc<dyn AudioDemuxer>,
}

#[derive(Clone)]
pub struct AppState {
    pub text_service: Arc<TextService>,
    pub document_service: Arc<DocumentService>,
    pub image_service: Arc<ImageService>,
    pub audio_service: Arc<AudioService>,
    pub video_service: Arc<VideoService>,
    pub translation_service: Arc<TranslationService>,
}

impl AppState {
    pub fn new(
        deps: AppDependencies,
        video_config: VideoPipelineConfig,
        default_language: impl Into<String>,
    ) -> Self {
        let AppDependencies {
            llm_client,
            transcription_engine,
            translator,
            file_loader,
            demuxer,
        } = deps;

        Self {
            text_service: Arc::new(TextService::new(Arc::clone(&llm_client))),
            document_service: Arc::new(DocumentService::new(file_loader, Arc::clone(&llm_client))),
            image_service: Arc::new(ImageService::new(Arc::clone(&llm_client))),
            audio_service: Arc::new(AudioService::new(
                Arc::clone(&transcription_engine),
                Arc::clone(&llm_client),
            )),
            video_service: Arc::new(VideoService::new(
                transcription_engine,
                llm_client,
                demuxer,
                video_config,
            )),
            translation_service: Arc::new(TranslationService::new(translator, default_language)),
        }
    }

    pub fn from_settings(deps: AppDependencies, settings: &Settings) -> Self {
        Self::new(
            deps,
            settings.video.pipeline_config(),
            settings.translation.default_language.clone(),
        )
    }
}
