use crate::classifier::ClassifyError;
use bytes::Bytes;
use providers::RemotePayload;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    Image,
    IntentText,
    EmotionText,
}

impl ClassifierKind {
    pub const ALL: [ClassifierKind; 3] = [
        ClassifierKind::Image,
        ClassifierKind::IntentText,
        ClassifierKind::EmotionText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Image => "image",
            ClassifierKind::IntentText => "intent",
            ClassifierKind::EmotionText => "emotion",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ClassifierKind::Image => "Classification completed.",
            ClassifierKind::IntentText => "Intent analysis completed.",
            ClassifierKind::EmotionText => "Emotion classification completed.",
        }
    }

    pub fn empty_input_message(&self) -> &'static str {
        match self {
            ClassifierKind::Image => "Please upload an aircraft image first.",
            ClassifierKind::IntentText => "Please type/paste a message first.",
            ClassifierKind::EmotionText => "Please paste a message first.",
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for one classifier; the variant decides encoding and endpoint.
#[derive(Debug, Clone)]
pub enum ClassificationRequest {
    Image { file_name: String, bytes: Bytes },
    IntentText(String),
    EmotionText(String),
}

impl ClassificationRequest {
    pub fn image(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        ClassificationRequest::Image {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Builds a text request; `Image` is rejected since it needs a file.
    pub fn text(kind: ClassifierKind, text: impl Into<String>) -> Result<Self, ClassifyError> {
        match kind {
            ClassifierKind::IntentText => Ok(ClassificationRequest::IntentText(text.into())),
            ClassifierKind::EmotionText => Ok(ClassificationRequest::EmotionText(text.into())),
            ClassifierKind::Image => Err(ClassifyError::Validation {
                kind,
                reason: "image classification needs a file payload".to_string(),
            }),
        }
    }

    pub fn kind(&self) -> ClassifierKind {
        match self {
            ClassificationRequest::Image { .. } => ClassifierKind::Image,
            ClassificationRequest::IntentText(_) => ClassifierKind::IntentText,
            ClassificationRequest::EmotionText(_) => ClassifierKind::EmotionText,
        }
    }

    /// Rejects empty payloads and produces the wire payload (text is trimmed).
    pub fn into_payload(self) -> Result<RemotePayload, ClassifyError> {
        let kind = self.kind();
        match self {
            ClassificationRequest::Image { file_name, bytes } => {
                if bytes.is_empty() {
                    return Err(ClassifyError::Validation {
                        kind,
                        reason: "image payload is empty".to_string(),
                    });
                }
                Ok(RemotePayload::File { file_name, bytes })
            }
            ClassificationRequest::IntentText(text) | ClassificationRequest::EmotionText(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(ClassifyError::Validation {
                        kind,
                        reason: "text is empty".to_string(),
                    });
                }
                Ok(RemotePayload::Text(trimmed.to_string()))
            }
        }
    }
}

/// Display class for a result, named after the icon the front-end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    VerySatisfied,
    Neutral,
    Dissatisfied,
    Mood,
    FlightTakeoff,
    ChatBubble,
}

impl IconCategory {
    pub fn icon_name(&self) -> &'static str {
        match self {
            IconCategory::VerySatisfied => "sentiment_very_satisfied",
            IconCategory::Neutral => "sentiment_neutral",
            IconCategory::Dissatisfied => "sentiment_dissatisfied",
            IconCategory::Mood => "mood",
            IconCategory::FlightTakeoff => "flight_takeoff",
            IconCategory::ChatBubble => "chat_bubble",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    /// Always within `[0, 100]` when present.
    pub confidence_percent: Option<f64>,
    pub category: IconCategory,
}

impl ClassificationResult {
    pub fn view(&self) -> ResultView {
        ResultView {
            title: Some(self.label.clone()),
            confidence: self.confidence_percent,
            icon_name: Some(self.category.icon_name().to_string()),
        }
    }
}

/// Fields handed to the result panel. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub title: Option<String>,
    pub confidence: Option<f64>,
    pub icon_name: Option<String>,
}

impl ResultView {
    pub const PLACEHOLDER: &'static str = "—";

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::PLACEHOLDER)
    }

    pub fn confidence_text(&self) -> String {
        match self.confidence {
            Some(c) => format!("{c:.1}%"),
            None => Self::PLACEHOLDER.to_string(),
        }
    }

    /// Width of the confidence bar in percent.
    pub fn bar_width(&self) -> f64 {
        self.confidence.map(|c| c.clamp(0.0, 100.0)).unwrap_or(0.0)
    }
}
