//! Per-kind mapping from a remote JSON body to a label and confidence.
//!
//! Missing fields never fail: the label falls back to [`UNKNOWN_LABEL`] and
//! confidence stays absent.

use crate::models::ClassifierKind;
use serde_json::Value;

pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub label: String,
    pub confidence_percent: Option<f64>,
}

pub fn decode(kind: ClassifierKind, body: &Value) -> Decoded {
    match kind {
        ClassifierKind::Image => decode_image(body),
        ClassifierKind::IntentText => decode_intent(body),
        ClassifierKind::EmotionText => decode_emotion(body),
    }
}

/// `{ "label": "Airbus A350-900", "confidence": 0.994 }`
pub fn decode_image(body: &Value) -> Decoded {
    decode_with_fields(body, &["label"])
}

/// `{ "intent": "flight", "confidence": 0.7767 }`; `intent` wins over `label`.
pub fn decode_intent(body: &Value) -> Decoded {
    decode_with_fields(body, &["intent", "label"])
}

/// `{ "label": "Positive / Happy", "confidence": 0.968 }`
pub fn decode_emotion(body: &Value) -> Decoded {
    decode_with_fields(body, &["label"])
}

fn decode_with_fields(body: &Value, label_fields: &[&str]) -> Decoded {
    let label = label_fields
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_str))
        .unwrap_or(UNKNOWN_LABEL)
        .to_string();
    Decoded {
        label,
        confidence_percent: confidence_percent(body.get("confidence")),
    }
}

/// Scales a `[0, 1]` fraction to percent, clamped into `[0, 100]`.
pub fn confidence_percent(value: Option<&Value>) -> Option<f64> {
    let fraction = value?.as_f64()?;
    if !fraction.is_finite() {
        return None;
    }
    Some((fraction * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn intent_field_takes_priority() {
        let d = decode_intent(&json!({ "intent": "flight", "label": "other", "confidence": 0.7767 }));
        assert_eq!(d.label, "flight");
        assert!(close(d.confidence_percent.unwrap(), 77.67));
    }

    #[test]
    fn intent_falls_back_to_label() {
        let d = decode_intent(&json!({ "label": "airfare" }));
        assert_eq!(d.label, "airfare");
        assert_eq!(d.confidence_percent, None);
    }

    #[test]
    fn label_only_kinds_ignore_intent() {
        let body = json!({ "intent": "flight" });
        assert_eq!(decode_emotion(&body).label, UNKNOWN_LABEL);
        assert_eq!(decode_image(&body).label, UNKNOWN_LABEL);
    }

    #[test]
    fn null_label_is_treated_as_missing() {
        let d = decode_intent(&json!({ "intent": null, "label": "greeting" }));
        assert_eq!(d.label, "greeting");
    }

    #[test]
    fn non_string_label_is_skipped() {
        assert_eq!(decode_intent(&json!({ "intent": 3, "label": "greeting" })).label, "greeting");
        assert_eq!(decode_intent(&json!({ "intent": 3 })).label, UNKNOWN_LABEL);
    }

    #[test]
    fn missing_confidence_is_absent_not_zero() {
        let d = decode(ClassifierKind::EmotionText, &json!({}));
        assert_eq!(d.label, UNKNOWN_LABEL);
        assert_eq!(d.confidence_percent, None);
    }

    #[test]
    fn out_of_range_confidence_is_clamped() {
        assert_eq!(confidence_percent(Some(&json!(1.2))), Some(100.0));
        assert_eq!(confidence_percent(Some(&json!(-0.1))), Some(0.0));
        assert_eq!(confidence_percent(Some(&json!(1))), Some(100.0));
        assert_eq!(confidence_percent(Some(&json!(0))), Some(0.0));
    }

    #[test]
    fn non_numeric_confidence_is_absent() {
        assert_eq!(confidence_percent(Some(&json!("0.9"))), None);
        assert_eq!(confidence_percent(Some(&Value::Null)), None);
        assert_eq!(confidence_percent(None), None);
    }

    #[test]
    fn non_object_body_falls_back() {
        let d = decode_image(&json!(["Airbus"]));
        assert_eq!(d.label, UNKNOWN_LABEL);
        assert_eq!(d.confidence_percent, None);
    }
}
