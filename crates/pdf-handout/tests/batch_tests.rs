mod common;

use common::*;
use pdf_handout::*;
use std::path::Path;
use std::sync::Arc;

fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"").unwrap();
}

#[tokio::test]
async fn test_discover_worksheets_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("week1/1-Worksheet.pdf"));
    touch(&root.join("week2/deep/2-2-worksheet.PDF"));
    touch(&root.join("notes.pdf"));
    touch(&root.join("week1/1-Handout.pdf"));
    touch(&root.join("week1/readme-worksheet.txt"));

    let found = discover_worksheets(root).await.unwrap();

    assert_eq!(
        found,
        vec![
            root.join("week1/1-Worksheet.pdf"),
            root.join("week2/deep/2-2-worksheet.PDF"),
        ]
    );
}

#[tokio::test]
async fn test_discover_missing_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = discover_worksheets(dir.path().join("nowhere")).await;
    assert!(matches!(result, Err(HandoutError::Io(_))));
}

#[tokio::test]
async fn test_batch_continues_past_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_test_pdf(&root.join("1-Worksheet.pdf"), 4);
    std::fs::write(root.join("2-Worksheet.pdf"), b"this is not a pdf").unwrap();
    std::fs::create_dir_all(root.join("sub")).unwrap();
    write_test_pdf(&root.join("sub/3-1-worksheet.pdf"), 3);

    let mut seen = Vec::new();
    let report = convert_all(
        root,
        Arc::new(FixedWidthFont),
        2024,
        &HandoutLayout::default(),
        |outcome| {
            seen.push(matches!(outcome, FileOutcome::Converted(_)));
        },
    )
    .await
    .unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(seen.len(), 3);
    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.failed.len(), 1);

    let failure = &report.failed[0];
    assert_eq!(failure.input, root.join("2-Worksheet.pdf"));
    assert!(matches!(failure.error, HandoutError::DocumentOpen { .. }));

    assert!(root.join("1-Handout.pdf").exists());
    assert!(root.join("sub/3-1-Handout.pdf").exists());
    assert!(!root.join("2-Handout.pdf").exists());

    let sub = report
        .converted
        .iter()
        .find(|r| r.input.ends_with("3-1-worksheet.pdf"))
        .unwrap();
    assert_eq!(sub.output_pages, 1);
    assert_eq!((sub.metadata.week, sub.metadata.part), (1, 1));
}

#[tokio::test]
async fn test_batch_never_overwrites_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("5-WORKSHEET.pdf");
    write_test_pdf(&input, 2);
    let original = std::fs::read(&input).unwrap();

    let report = convert_all(
        dir.path(),
        Arc::new(FixedWidthFont),
        2024,
        &HandoutLayout::default(),
        |_| {},
    )
    .await
    .unwrap();

    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        report.failed[0].error,
        HandoutError::OutputCollision(_)
    ));
    assert_eq!(std::fs::read(&input).unwrap(), original);
}

#[tokio::test]
async fn test_rerun_skips_generated_handouts() {
    let dir = tempfile::tempdir().unwrap();
    write_test_pdf(&dir.path().join("6-Worksheet.pdf"), 2);

    for _ in 0..2 {
        let report = convert_all(
            dir.path(),
            Arc::new(FixedWidthFont),
            2024,
            &HandoutLayout::default(),
            |_| {},
        )
        .await
        .unwrap();
        assert_eq!(report.converted.len(), 1);
        assert!(report.failed.is_empty());
    }
}
