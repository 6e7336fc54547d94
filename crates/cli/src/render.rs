use classify_core::models::ResultView;
use classify_core::session::{StatusKind, StatusLine};
use classify_core::ClassificationResult;
use serde_json::json;

const BAR_CELLS: usize = 20;

/// Text bar for a width in percent, e.g. `[#####---------------]`.
pub fn bar(width_percent: f64) -> String {
    let filled = ((width_percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

/// Terminal version of the result panel.
pub fn panel(view: &ResultView) -> String {
    let mut out = String::new();
    if let Some(icon) = &view.icon_name {
        out.push_str(&format!("icon:       {icon}\n"));
    }
    out.push_str(&format!("result:     {}\n", view.title_text()));
    out.push_str(&format!(
        "confidence: {} {}",
        view.confidence_text(),
        bar(view.bar_width())
    ));
    out
}

pub fn status(line: &StatusLine) -> String {
    match line.kind {
        StatusKind::Info => line.message.clone(),
        StatusKind::Success => format!("ok: {}", line.message),
        StatusKind::Error => format!("error: {}", line.message),
    }
}

pub fn result_json(result: &ClassificationResult, status: &StatusLine) -> serde_json::Value {
    json!({
        "status": status.kind,
        "message": status.message,
        "result": result,
        "view": result.view(),
    })
}
