use super::*;

#[test]
fn decodes_full_response() {
    let body = r#"{
        "folder": "retro-monthly-12",
        "saved_count": 2,
        "items": [
            {"page": "page-001.jpg", "note": "warped"},
            {"page": "page-002.jpg"}
        ]
    }"#;
    let response: UploadResponse = serde_json::from_str(body).expect("valid body");
    assert_eq!(response.folder, "retro-monthly-12");
    assert_eq!(response.saved_count, 2);
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0]["page"], "page-001.jpg");
}

#[test]
fn missing_items_defaults_to_empty() {
    let body = r#"{"folder": "x", "saved_count": 0}"#;
    let response: UploadResponse = serde_json::from_str(body).expect("valid body");
    assert!(response.items.is_empty());
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"folder": "x", "saved_count": 1, "items": [], "elapsed_ms": 120}"#;
    let response: UploadResponse = serde_json::from_str(body).expect("valid body");
    assert_eq!(response.saved_count, 1);
}

#[test]
fn missing_folder_is_an_error() {
    let body = r#"{"saved_count": 1}"#;
    assert!(serde_json::from_str::<UploadResponse>(body).is_err());
}
