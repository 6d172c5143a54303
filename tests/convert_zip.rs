use std::fs::{self, File};
use std::io::Write;

use notion2md::convert_export;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Builds a small export archive shaped like a Notion workspace export:
/// nested folders and files whose names carry trailing hash tokens, with
/// percent-encoded cross-links between them.
fn write_export_zip(zip_path: &std::path::Path) {
    let file = File::create(zip_path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.add_directory("My Export 0123abcd/", options).unwrap();
    zip.start_file("My Export 0123abcd/Note One a1b2c3.md", options)
        .unwrap();
    zip.write_all(
        b"# Note One\n\nSee [two](Note%20Two%20d4e5f6.md) and [sub](Sub%20Pages%20f0f0f0/Nested%20ee44.md)\n",
    )
    .unwrap();

    zip.start_file("My Export 0123abcd/Note Two d4e5f6.md", options)
        .unwrap();
    zip.write_all(b"# Note Two\nBack to [one](Note%20One%20a1b2c3.md)\n")
        .unwrap();

    zip.add_directory("My Export 0123abcd/Sub Pages f0f0f0/", options)
        .unwrap();
    zip.start_file("My Export 0123abcd/Sub Pages f0f0f0/Nested ee44.md", options)
        .unwrap();
    zip.write_all(b"# Nested/Page\nUp: [one](../Note%20One%20a1b2c3.md)\n")
        .unwrap();

    zip.finish().unwrap();
}

#[test]
fn converts_a_full_export_archive() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("export.zip");
    let out = dir.path().join("markdown_import");
    write_export_zip(&zip_path);

    convert_export(&zip_path, &out).unwrap();

    let root = out.join("My Export");
    assert!(root.is_dir());

    let one = fs::read_to_string(root.join("Note One.md")).unwrap();
    assert_eq!(
        one,
        "\nSee [two](Note%20Two.md) and [sub](Sub%20Pages/Nested-Page.md)\n"
    );

    let two = fs::read_to_string(root.join("Note Two.md")).unwrap();
    assert_eq!(two, "Back to [one](Note%20One.md)\n");

    let nested = fs::read_to_string(root.join("Sub Pages/Nested-Page.md")).unwrap();
    assert_eq!(nested, "Up: [one](../Note%20One.md)\n");

    // No trace of the hashed names remains anywhere
    assert!(!root.join("Note One a1b2c3.md").exists());
    assert!(!root.join("Sub Pages f0f0f0").exists());
}

#[test]
fn rerun_replaces_a_stale_extraction_dir() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("export.zip");
    let out = dir.path().join("markdown_import");
    write_export_zip(&zip_path);

    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("leftover.md"), "# Stale\nfrom a previous run\n").unwrap();

    convert_export(&zip_path, &out).unwrap();

    // The stale tree was wiped, not converted again
    assert!(!out.join("leftover.md").exists());
    assert!(!out.join("Stale.md").exists());
    assert!(out.join("My Export").is_dir());
}

#[test]
fn missing_archive_fails_before_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("markdown_import");

    let result = convert_export(&dir.path().join("nope.zip"), &out);

    assert!(result.is_err());
}
