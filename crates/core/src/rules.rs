use crate::models::{ClassifierKind, IconCategory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct IconRule {
    pub keywords: Vec<String>,
    pub category: IconCategory,
}

impl IconRule {
    pub fn new(keywords: &[&str], category: IconCategory) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category,
        }
    }

    /// Case-insensitive substring match of any keyword against `label`.
    pub fn matches(&self, label: &str) -> bool {
        let lower = label.to_lowercase();
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && lower.contains(&k.to_lowercase()))
    }
}

/// Ordered rules; the first matching rule wins.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct IconRuleTable {
    #[serde(default)]
    pub rules: Vec<IconRule>,
    pub fallback: IconCategory,
}

impl IconRuleTable {
    pub fn new(rules: Vec<IconRule>, fallback: IconCategory) -> Self {
        Self { rules, fallback }
    }

    pub fn fixed(category: IconCategory) -> Self {
        Self::new(Vec::new(), category)
    }

    pub fn emotion() -> Self {
        Self::new(
            vec![
                IconRule::new(
                    &["positive", "happy", "joy", "excited", "satisfied"],
                    IconCategory::VerySatisfied,
                ),
                IconRule::new(&["neutral", "calm", "okay"], IconCategory::Neutral),
                IconRule::new(
                    &["negative", "sad", "angry", "frustrated", "upset", "disappointed"],
                    IconCategory::Dissatisfied,
                ),
            ],
            IconCategory::Mood,
        )
    }

    pub fn resolve(&self, label: &str) -> IconCategory {
        self.rules
            .iter()
            .find(|r| r.matches(label))
            .map(|r| r.category)
            .unwrap_or(self.fallback)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconRuleSet {
    pub image: IconRuleTable,
    pub intent: IconRuleTable,
    pub emotion: IconRuleTable,
}

impl Default for IconRuleSet {
    fn default() -> Self {
        Self {
            image: IconRuleTable::fixed(IconCategory::FlightTakeoff),
            intent: IconRuleTable::fixed(IconCategory::ChatBubble),
            emotion: IconRuleTable::emotion(),
        }
    }
}

impl IconRuleSet {
    /// Default set, with the emotion table replaced from `path` when given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut set = Self::default();
        if let Some(path) = path {
            set.emotion = load_table(path)?;
        }
        Ok(set)
    }

    pub fn for_kind(&self, kind: ClassifierKind) -> &IconRuleTable {
        match kind {
            ClassifierKind::Image => &self.image,
            ClassifierKind::IntentText => &self.intent,
            ClassifierKind::EmotionText => &self.emotion,
        }
    }

    pub fn resolve(&self, kind: ClassifierKind, label: &str) -> IconCategory {
        self.for_kind(kind).resolve(label)
    }
}

pub fn load_table(path: &Path) -> anyhow::Result<IconRuleTable> {
    let content = fs::read_to_string(path)?;
    let table: IconRuleTable = toml::from_str(&content)?;
    Ok(table)
}
