use classify_core::models::ResultView;
use classify_core::session::StatusLine;
use classify_core::{ClassificationResult, ClassifierKind, IconCategory};
use cli::{input, render};
use std::fs;
use tempfile::tempdir;

#[test]
fn panel_tolerates_all_fields_absent() {
    let text = render::panel(&ResultView::default());
    assert!(!text.contains("icon:"));
    assert!(text.contains("result:     —"));
    assert!(text.contains("confidence: — [--------------------]"));
}

#[test]
fn panel_shows_one_decimal_and_clamped_bar() {
    let view = ResultView {
        title: Some("flight".into()),
        confidence: Some(77.67),
        icon_name: Some("chat_bubble".into()),
    };
    let text = render::panel(&view);
    assert!(text.contains("icon:       chat_bubble"));
    assert!(text.contains("result:     flight"));
    assert!(text.contains("77.7%"));

    assert_eq!(render::bar(150.0), format!("[{}]", "#".repeat(20)));
    assert_eq!(render::bar(-5.0), format!("[{}]", "-".repeat(20)));
    assert_eq!(render::bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
}

#[test]
fn status_lines_are_prefixed_by_kind() {
    assert_eq!(
        render::status(&StatusLine::success(ClassifierKind::Image.success_message())),
        "ok: Classification completed."
    );
    assert_eq!(render::status(&StatusLine::error("boom")), "error: boom");
    assert_eq!(render::status(&StatusLine::info("")), "");
}

#[test]
fn json_output_carries_result_and_view() {
    let result = ClassificationResult {
        label: "Positive / Happy".into(),
        confidence_percent: Some(96.8),
        category: IconCategory::VerySatisfied,
    };
    let out = render::result_json(
        &result,
        &StatusLine::success(ClassifierKind::EmotionText.success_message()),
    );

    assert_eq!(out["status"], "success");
    assert_eq!(out["message"], "Emotion classification completed.");
    assert_eq!(out["result"]["category"], "very_satisfied");
    assert_eq!(out["view"]["iconName"], "sentiment_very_satisfied");
    assert_eq!(out["view"]["title"], "Positive / Happy");
}

#[tokio::test]
async fn image_request_uses_file_name() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("a350.jpg");
    fs::write(&path, b"jpeg bytes").unwrap();

    let request = input::image_request(&path).await.unwrap();
    assert_eq!(request.kind(), ClassifierKind::Image);
    match request {
        classify_core::ClassificationRequest::Image { file_name, bytes } => {
            assert_eq!(file_name, "a350.jpg");
            assert_eq!(&bytes[..], b"jpeg bytes");
        }
        other => panic!("unexpected request {other:?}"),
    }
}

#[tokio::test]
async fn missing_image_is_an_error() {
    let temp = tempdir().unwrap();
    assert!(input::image_request(&temp.path().join("nope.png")).await.is_err());
}
