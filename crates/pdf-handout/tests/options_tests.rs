use pdf_handout::*;

#[test]
fn test_default_layout_is_valid_a4() {
    let layout = HandoutLayout::default();
    assert!(layout.validate().is_ok());
    assert_eq!(layout.page_width_pt, 595.276);
    assert_eq!(layout.page_height_pt, 841.890);
    assert_eq!(layout.slot_margin_pt, 10.0);
    assert_eq!(
        layout.frame,
        FrameMargins {
            left: 14.0,
            top: 14.0,
            right: 14.0,
            bottom: 20.0,
        }
    );
    assert_eq!(layout.font_size, 12.0);
}

#[test]
fn test_slot_dimensions() {
    let layout = HandoutLayout::default();
    assert!((layout.slot_height() - (841.890 - 30.0) / 2.0).abs() < 1e-3);
    assert!((layout.slot_width() - (595.276 - 20.0)).abs() < 1e-3);
}

#[test]
fn test_validation_oversized_margin() {
    let layout = HandoutLayout {
        slot_margin_pt: 300.0,
        ..Default::default()
    };
    match layout.validate() {
        Err(HandoutError::Config(msg)) => assert!(msg.contains("no room for slots")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_negative_margin() {
    let layout = HandoutLayout {
        slot_margin_pt: -1.0,
        ..Default::default()
    };
    assert!(layout.validate().is_err());
}

#[test]
fn test_validation_frame_without_room() {
    let layout = HandoutLayout {
        frame: FrameMargins {
            left: 300.0,
            right: 300.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(layout.validate().is_err());
}

#[test]
fn test_validation_font_size() {
    let layout = HandoutLayout {
        font_size: 0.0,
        ..Default::default()
    };
    assert!(layout.validate().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_layout_round_trips_through_json() {
    let layout = HandoutLayout {
        slot_margin_pt: 12.5,
        color: Rgb::gray(0.3),
        ..Default::default()
    };

    let json = serde_json::to_string(&layout).unwrap();
    let restored: HandoutLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, layout);
    assert!(restored.validate().is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn test_layout_from_json_is_validated() {
    let mut value = serde_json::to_value(HandoutLayout::default()).unwrap();
    value["slot_margin_pt"] = serde_json::json!(500.0);

    let layout: HandoutLayout = serde_json::from_value(value).unwrap();
    assert!(matches!(layout.validate(), Err(HandoutError::Config(_))));
}

#[cfg(feature = "serde")]
#[test]
fn test_metadata_serializes_field_names() {
    let metadata = Metadata {
        week: 3,
        part: 2,
        year: 2024,
    };

    let value = serde_json::to_value(metadata).unwrap();
    assert_eq!(value, serde_json::json!({ "week": 3, "part": 2, "year": 2024 }));
    assert_eq!(serde_json::from_value::<Metadata>(value).unwrap(), metadata);
}
