use super::*;

// --- UploadState ---

#[test]
fn upload_starts_idle() {
    let state = UploadState::default();
    assert!(!state.sending);
}

// --- reject_reason ---

#[test]
fn empty_title_is_rejected() {
    assert!(reject_reason("", 3).is_some());
}

#[test]
fn whitespace_title_is_rejected() {
    assert!(reject_reason("   \t", 3).is_some());
}

#[test]
fn empty_capture_set_is_rejected() {
    assert!(reject_reason("Magazine A", 0).is_some());
}

#[test]
fn title_complaint_wins_over_capture_complaint() {
    let reason = reject_reason("", 0);
    assert_eq!(reason, Some("Enter the magazine title first"));
}

#[test]
fn titled_non_empty_set_passes() {
    assert_eq!(reject_reason("Magazine A", 3), None);
}
