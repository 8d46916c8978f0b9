use super::*;

#[test]
fn file_name_is_last_path_segment() {
    assert_eq!(
        download_file_name("https://cdn.example.com/users/7/sunset.png"),
        "sunset.png"
    );
}

#[test]
fn file_name_strips_query_string() {
    assert_eq!(
        download_file_name("https://bucket.s3.amazonaws.com/a/b/cat.jpg?X-Amz-Signature=abc&x=1"),
        "cat.jpg"
    );
}

#[test]
fn file_name_strips_fragment() {
    assert_eq!(download_file_name("https://cdn.example.com/dog.webp#top"), "dog.webp");
}

#[test]
fn file_name_defaults_when_segment_empty() {
    assert_eq!(download_file_name("https://cdn.example.com/photos/"), "photo.jpg");
    assert_eq!(download_file_name("https://cdn.example.com/?id=4"), "photo.jpg");
    assert_eq!(download_file_name(""), "photo.jpg");
}

#[test]
fn file_name_without_slashes_is_kept() {
    assert_eq!(download_file_name("local.gif"), "local.gif");
}
