mod audio;
mod observability;
mod text_processing;
