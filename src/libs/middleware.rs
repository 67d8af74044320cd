use axum::{
    body::Body,
    http::{header::USER_AGENT, Request},
    middleware::Next,
    response::Response,
    RequestPartsExt,
};
use axum_client_ip::InsecureClientIp;
use log::info;

pub const HEALTH_PATH: &str = "/_health";

/// Health checks are polled constantly and stay out of the access log.
pub fn is_logged(path: &str) -> bool {
    path != HEALTH_PATH
}

pub async fn request_logger(req: Request<Body>, next: Next<Body>) -> Response {
    let (mut parts, body) = req.into_parts();

    if is_logged(parts.uri.path()) {
        let remote_addr = match parts.extract::<InsecureClientIp>().await {
            Ok(InsecureClientIp(ip)) => ip.to_string(),
            Err(_) => "-".to_string(),
        };
        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        info!(
            "{} - \"{} {} {:?}\" \"{}\"",
            remote_addr,
            parts.method,
            parts.uri.path(),
            parts.version,
            user_agent
        );
    }

    let req = Request::from_parts(parts, body);
    next.run(req).await
}
