mod prompt_test;
mod target_language_test;
mod video_format_test;
