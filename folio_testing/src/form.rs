use std::{collections::HashMap, net::IpAddr};

use anyhow::Context;
use axum::{http::StatusCode, routing, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you shortly.";
pub const BOT_MESSAGE: &str = "Nice try, bot.";
pub const CAPTCHA_FAILED: &str = "Captcha verification failed.";
pub const INVALID_EMAIL: &str = "Invalid email address.";
pub const INVALID_PAYLOAD: &str = "Invalid request payload.";

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting form endpoint testing server on {host}:{port}");
    info!("Form endpoint: http://{host}:{port}/");
    info!(
        "Valid recaptcha responses start with \"success\", every other non-empty response is \
         rejected"
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    serve(listener).await
}

/// Serves the testing form endpoint on an already bound listener.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, router())
        .await
        .context("Failed to start HTTP server")
}

pub fn router() -> Router<()> {
    Router::new().route("/", routing::post(submit))
}

async fn submit(body: String) -> (StatusCode, Json<Value>) {
    let (status, body) = handle(&body);
    (status, Json(body))
}

fn handle(body: &str) -> (StatusCode, Value) {
    let Some(fields) = parse_body(body) else {
        warn!("Failed to parse request body");
        return error(StatusCode::BAD_REQUEST, INVALID_PAYLOAD);
    };
    if !field(&fields, "BotCheck").is_empty() {
        warn!("Bot detected by honeypot field");
        return success(BOT_MESSAGE);
    }

    let captcha_response = field(&fields, "g-recaptcha-response");
    if captcha_response.is_empty() {
        return error(StatusCode::BAD_REQUEST, CAPTCHA_FAILED);
    }
    if !captcha_response.starts_with("success") {
        warn!(captcha_response, "Captcha verification failed");
        return error(StatusCode::FORBIDDEN, CAPTCHA_FAILED);
    }

    let email = field(&fields, "CustomerEmail");
    if !(email.contains('@') && email.contains('.')) {
        return error(StatusCode::BAD_REQUEST, INVALID_EMAIL);
    }

    info!(
        email,
        details = field(&fields, "MessageDetails"),
        "Received contact message"
    );
    success(SUCCESS_MESSAGE)
}

fn field<'a>(fields: &'a HashMap<String, String>, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or_default()
}

/// Accepts a JSON object, falling back to url-encoded form data.
fn parse_body(body: &str) -> Option<HashMap<String, String>> {
    match serde_json::from_str::<HashMap<String, Value>>(body) {
        Ok(fields) => Some(
            fields
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(value) => (key, value),
                    value => (key, value.to_string()),
                })
                .collect(),
        ),
        Err(_) if body.contains('=') => Some(
            url::form_urlencoded::parse(body.as_bytes())
                .into_owned()
                .collect(),
        ),
        Err(_) => None,
    }
}

fn success(message: &str) -> (StatusCode, Value) {
    (StatusCode::OK, json!({ "message": message }))
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Value) {
    (status, json!({ "error": message }))
}
