mod common;

use common::{file_blocks, write_file, HeadlessSink, MemorySink};
use copydir::aggregate::OutputDocument;
use copydir::copy::{BasicClipboardCopier, ClipboardCopier, CopierConfig};
use copydir::copy_paths_to_clipboard;
use copydir::errors::ClipboardError;
use copydir::sink::{deliver, Delivery};
use tempfile::tempdir;

fn config() -> CopierConfig {
    CopierConfig {
        summary: true,
        ..CopierConfig::default()
    }
}

#[tokio::test]
async fn test_copy_directory_and_file_to_sink() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(root, "project/src/main.rs", "fn main() {}").await;
    write_file(root, "project/target/debug/gen.rs", "generated").await;
    write_file(root, "notes.md", "# Notes").await;

    let paths = vec![
        root.join("project").to_string_lossy().into_owned(),
        root.join("notes.md").to_string_lossy().into_owned(),
    ];
    let mut sink = MemorySink::default();
    let delivery = copy_paths_to_clipboard(config(), &paths, &mut sink)
        .await
        .unwrap();

    assert_eq!(sink.writes.len(), 1);
    let copied = &sink.writes[0];
    assert_eq!(file_blocks(copied), 2);
    assert!(copied.contains("fn main() {}"));
    assert!(!copied.contains("generated"));
    let main_at = copied.find("main.rs").unwrap();
    let notes_at = copied.find("notes.md").unwrap();
    assert!(main_at < notes_at, "Output must follow request order");
    assert_eq!(
        delivery,
        Delivery::Copied {
            files: 2,
            bytes: copied.len()
        }
    );
}

#[tokio::test]
async fn test_one_good_file_is_enough() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "readme.md", "hello").await;
    write_file(dir.path(), "setup.exe", "MZ").await;

    let paths = vec![
        dir.path().join("readme.md").to_string_lossy().into_owned(),
        dir.path().join("setup.exe").to_string_lossy().into_owned(),
        dir.path().join("missing.py").to_string_lossy().into_owned(),
    ];
    let mut sink = MemorySink::default();
    let result = copy_paths_to_clipboard(config(), &paths, &mut sink).await;

    assert!(result.is_ok(), "Expected success, got {:?}", result.err());
    assert_eq!(file_blocks(&sink.writes[0]), 1);
}

#[tokio::test]
async fn test_nonexistent_path_is_empty_result() {
    let dir = tempdir().unwrap();
    let paths = vec![dir.path().join("nope").to_string_lossy().into_owned()];
    let mut sink = MemorySink::default();

    let result = copy_paths_to_clipboard(config(), &paths, &mut sink).await;

    assert!(matches!(result, Err(ClipboardError::EmptyResult)));
    assert!(sink.writes.is_empty(), "Sink must not be touched");
}

#[tokio::test]
async fn test_tree_with_nothing_eligible_is_empty_result() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "node_modules/pkg/index.js", "x").await;
    write_file(dir.path(), "logo.png", "png").await;
    let paths = vec![dir.path().to_string_lossy().into_owned()];
    let mut sink = MemorySink::default();

    let result = copy_paths_to_clipboard(config(), &paths, &mut sink).await;

    assert!(matches!(result, Err(ClipboardError::EmptyResult)));
    assert!(sink.writes.is_empty());
}

#[tokio::test]
async fn test_no_paths() {
    let mut sink = MemorySink::default();
    let result = copy_paths_to_clipboard(config(), &[], &mut sink).await;
    assert!(matches!(result, Err(ClipboardError::NoPaths)));
}

#[tokio::test]
async fn test_sink_failure_is_distinct_from_empty_result() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.py", "x=1").await;
    let paths = vec![dir.path().to_string_lossy().into_owned()];
    let mut sink = HeadlessSink::default();

    let result = copy_paths_to_clipboard(config(), &paths, &mut sink).await;

    assert_eq!(sink.attempts, 1);
    match result {
        Err(e) => {
            assert!(e.is_sink_failure(), "Unexpected error: {}", e);
            assert!(!matches!(e, ClipboardError::EmptyResult));
        }
        Ok(delivery) => panic!("Expected sink failure, got {:?}", delivery),
    }
}

#[tokio::test]
async fn test_build_document_preserves_resolution_order() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "b.txt", "second").await;
    write_file(dir.path(), "a.txt", "first").await;
    let paths = vec![
        dir.path().join("b.txt").to_string_lossy().into_owned(),
        dir.path().join("a.txt").to_string_lossy().into_owned(),
        dir.path().join("b.txt").to_string_lossy().into_owned(),
    ];

    let copier = BasicClipboardCopier::new(CopierConfig::default());
    let document = copier.build_document(&paths).await;

    assert_eq!(document.file_count(), 3);
    let order: Vec<&str> = document
        .records()
        .iter()
        .map(|r| r.path.rsplit('/').next().unwrap())
        .collect();
    assert_eq!(order, vec!["b.txt", "a.txt", "b.txt"]);
}

#[test]
fn test_deliver_empty_document_skips_sink() {
    let mut sink = MemorySink::default();
    let result = deliver(&mut sink, OutputDocument::new());
    assert!(matches!(result, Err(ClipboardError::EmptyResult)));
    assert!(sink.writes.is_empty());
}
