mod image_service_test;
mod processing_error_test;
mod translation_service_test;
