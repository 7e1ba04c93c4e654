use super::*;

#[test]
fn detects_common_binary_types() {
    assert!(is_binary("assets/logo.png"));
    assert!(is_binary("docs/manual.pdf"));
    assert!(is_binary("release/app.exe"));
    assert!(is_binary("lib/native.so"));
    assert!(is_binary("fonts/inter.woff2"));
    assert!(is_binary("data/cache.sqlite"));
}

#[test]
fn detection_is_case_insensitive() {
    assert!(is_binary("IMAGE.PNG"));
    assert!(is_binary("photo.PnG"));
    assert!(is_binary("archive.ZiP"));
}

#[test]
fn text_files_are_not_binary() {
    assert!(!is_binary("README"));
    assert!(!is_binary("src/main.rs"));
    assert!(!is_binary("package.json"));
    assert!(!is_binary("Dockerfile"));
}

#[test]
fn multiple_dots_use_the_trailing_suffix() {
    assert!(is_binary("version.1.2.3.exe"));
    assert!(is_binary("backup.tar.gz"));
    assert!(!is_binary("image.png.txt"));
}

#[test]
fn directories_do_not_affect_detection() {
    assert!(!is_binary("images.png/readme.md"));
    assert!(is_binary("deeply/nested/path/to/icon.ico"));
}
