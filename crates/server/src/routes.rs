use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use providers::relay::{ForwardingProxy, RelayResponse};
use serde_json::Value;
use tracing::warn;

pub const INTENT_ROUTE: &str = "/api/predict/intent";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(INTENT_ROUTE, web::post().to(predict_intent));
}

/// Forwards `{"text": ..}` to the intent upstream and mirrors its reply.
pub async fn predict_intent(
    proxy: web::Data<ForwardingProxy>,
    body: web::Json<Value>,
) -> HttpResponse {
    into_response(proxy.forward(&body).await)
}

fn into_response(relayed: RelayResponse) -> HttpResponse {
    let status = StatusCode::from_u16(relayed.status).unwrap_or_else(|_| {
        warn!(status = relayed.status, "upstream sent an unusable status code");
        StatusCode::BAD_GATEWAY
    });
    HttpResponse::build(status).json(relayed.body)
}
