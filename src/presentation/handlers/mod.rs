mod audio;
mod document;
mod form;
mod health;
mod image;
mod response;
mod stt;
mod text;
mod translate;
mod video;

pub use audio::process_audio_handler;
pub use document::process_document_handler;
pub use form::{FormFields, UploadForm};
pub use health::health_handler;
pub use image::process_image_handler;
pub use response::{ApiResponse, ErrorResponse, status_for};
pub use stt::stt_handler;
pub use text::process_text_handler;
pub use translate::translate_response_handler;
pub use video::process_video_handler;
