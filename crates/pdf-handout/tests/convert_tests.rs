mod common;

use common::*;
use pdf_handout::*;
use std::sync::Arc;

#[tokio::test]
async fn test_convert_writes_handout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("4-2-Worksheet.pdf");
    let output = dir.path().join("4-2-Handout.pdf");
    write_test_pdf(&input, 5);

    let report = convert(
        &input,
        &output,
        Arc::new(FixedWidthFont),
        2024,
        &HandoutLayout::default(),
    )
    .await
    .unwrap();

    assert_eq!(report.source_pages, 5);
    assert_eq!(report.output_pages, 2);
    assert!(report.dropped_trailing_page);
    assert_eq!(
        report.metadata,
        Metadata {
            week: 4,
            part: 2,
            year: 2024
        }
    );

    let loaded = load_pdf(&output).await.unwrap();
    assert_eq!(loaded.page_count(), 2);

    let first = page_ids(loaded.document())[0];
    let header: String = "Handout | OM 4 - 2"
        .bytes()
        .map(|b| format!("{:02X}", b))
        .collect();
    assert!(page_content(loaded.document(), first).contains(&header));
}

#[tokio::test]
async fn test_convert_unmatched_name_uses_default_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.pdf");
    let output = dir.path().join("notes-out.pdf");
    write_test_pdf(&input, 2);

    let report = convert(
        &input,
        &output,
        Arc::new(FixedWidthFont),
        2030,
        &HandoutLayout::default(),
    )
    .await
    .unwrap();

    assert_eq!(report.metadata, Metadata::fallback(2030));
    assert!(!report.dropped_trailing_page);
}

#[tokio::test]
async fn test_convert_corrupt_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("1-Worksheet.pdf");
    let output = dir.path().join("1-Handout.pdf");
    std::fs::write(&input, b"this is not a pdf").unwrap();

    let result = convert(
        &input,
        &output,
        Arc::new(FixedWidthFont),
        2024,
        &HandoutLayout::default(),
    )
    .await;

    match result {
        Err(HandoutError::DocumentOpen { path, .. }) => assert_eq!(path, input),
        other => panic!("Expected DocumentOpen, got {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_convert_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert(
        dir.path().join("missing.pdf"),
        dir.path().join("out.pdf"),
        Arc::new(FixedWidthFont),
        2024,
        &HandoutLayout::default(),
    )
    .await;

    assert!(matches!(result, Err(HandoutError::DocumentOpen { .. })));
}

#[tokio::test]
async fn test_convert_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("1-Worksheet.pdf");
    let output = dir.path().join("no-such-dir").join("1-Handout.pdf");
    write_test_pdf(&input, 2);

    let result = convert(
        &input,
        &output,
        Arc::new(FixedWidthFont),
        2024,
        &HandoutLayout::default(),
    )
    .await;

    match result {
        Err(HandoutError::Write { path, .. }) => assert_eq!(path, output),
        other => panic!("Expected Write error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_pdf_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handout.pdf");

    let source = SourceDocument::new(create_test_pdf(4));
    let doc = build_handout(
        &source,
        &Metadata::fallback(2024),
        &FixedWidthFont,
        &HandoutLayout::default(),
    )
    .unwrap();
    save_pdf(doc, &path).await.unwrap();

    let loaded = load_pdf(&path).await.unwrap();
    assert_eq!(loaded.page_count(), 2);
}
