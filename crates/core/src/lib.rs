//! Core library: configuration, result model, icon rules, decoding and the classifier client.

pub mod classifier;
pub mod config;
pub mod decode;
pub mod models;
pub mod rules;
pub mod session;

pub use classifier::{ClassifierClient, ClassifyError};
pub use models::{ClassificationRequest, ClassificationResult, ClassifierKind, IconCategory};
pub use session::{RequestSlot, RequestState};
