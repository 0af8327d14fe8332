use tolka::domain::VideoFormat;

#[test]
fn given_allowed_mime_types_when_detecting_then_formats_resolve() {
    assert_eq!(VideoFormat::detect("video/mp4", "a.bin"), Some(VideoFormat::Mp4));
    assert_eq!(
        VideoFormat::detect("video/x-matroska", "a"),
        Some(VideoFormat::Mkv)
    );
    assert_eq!(VideoFormat::detect("video/webm", ""), Some(VideoFormat::Webm));
    assert_eq!(
        VideoFormat::detect("video/x-msvideo", "clip"),
        Some(VideoFormat::Avi)
    );
}

#[test]
fn given_mime_with_parameters_when_detecting_then_parameters_are_ignored() {
    assert_eq!(
        VideoFormat::detect("video/mp4; codecs=\"avc1\"", "clip.mp4"),
        Some(VideoFormat::Mp4)
    );
}

#[test]
fn given_octet_stream_when_detecting_then_extension_decides() {
    assert_eq!(
        VideoFormat::detect("application/octet-stream", "lecture.WEBM"),
        Some(VideoFormat::Webm)
    );
    assert_eq!(
        VideoFormat::detect("application/octet-stream", "lecture.mov"),
        None
    );
}

#[test]
fn given_disallowed_mime_when_detecting_then_extension_is_not_consulted() {
    assert_eq!(VideoFormat::detect("video/quicktime", "clip.mp4"), None);
}

#[test]
fn given_format_when_choosing_temp_suffix_then_matches_container() {
    assert_eq!(VideoFormat::Mkv.as_suffix(), ".mkv");
    assert_eq!(VideoFormat::Avi.as_suffix(), ".avi");
}
