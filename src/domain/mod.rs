mod document_format;
mod prompt;
mod target_language;
mod transcript;
mod uploaded_asset;
mod video_format;

pub use document_format::DocumentFormat;
pub use prompt::{DEFAULT_IMAGE_INSTRUCTION, PromptSubject, build_image_prompt, build_prompt};
pub use target_language::{DEFAULT_LANGUAGE, TargetLanguage};
pub use transcript::Transcript;
pub use uploaded_asset::{UploadedAsset, file_extension};
pub use video_format::VideoFormat;
