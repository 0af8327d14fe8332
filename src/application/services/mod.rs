mod audio_service;
mod document_service;
mod image_service;
mod processing_error;
mod scoped_temp_file;
mod text_service;
mod translation_service;
mod video_service;

pub use audio_service::AudioService;
pub use document_service::DocumentService;
pub use image_service::{ImageLanguages, ImageService};
pub use processing_error::ProcessingError;
pub use scoped_temp_file::ScopedTempFile;
pub use text_service::TextService;
pub use translation_service::TranslationService;
pub use video_service::{
    DEFAULT_CHUNK_SIZE_BYTES, DEFAULT_DEMUX_TIMEOUT, StagedVideo, VideoPipelineConfig, VideoService,
};
