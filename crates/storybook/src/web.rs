//! Single-page web form for generating storybooks.

use crate::{StorybookGenerator, StorybookOutcome};
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use storybook_error::{HttpError, StorybookError, StorybookErrorKind, StorybookResult};
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

const TITLE: &str = "Children's Storybook Generator";

/// Shared state for the form handlers.
#[derive(Clone)]
pub struct WebState {
    generator: Arc<StorybookGenerator>,
}

impl WebState {
    /// State over a generator.
    pub fn new(generator: StorybookGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Fields posted by the form.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    /// Story prompt as typed
    #[serde(default)]
    pub prompt: String,
}

/// Creates the web form router.
pub fn create_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serve the form until the process is stopped.
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails.
#[instrument(skip(generator))]
pub async fn serve(bind: &str, generator: StorybookGenerator) -> StorybookResult<()> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", bind, e)))?;
    info!(address = %bind, "Serving storybook form");

    axum::serve(listener, create_router(WebState::new(generator)))
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;
    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn index() -> Html<String> {
    Html(render_page("", ""))
}

async fn generate(
    State(state): State<WebState>,
    Form(form): Form<GenerateForm>,
) -> (StatusCode, Html<String>) {
    match state.generator.generate(&form.prompt).await {
        Ok(outcome) => (
            StatusCode::OK,
            Html(render_page(&form.prompt, &render_outcome(&outcome))),
        ),
        Err(e) => {
            let status = status_for(&e);
            let body = match e.kind() {
                StorybookErrorKind::Prompt(_) => notice("warning", &e.user_message()),
                _ => {
                    error!(error = %e, "Storybook generation failed");
                    notice(
                        "error",
                        &format!("Storybook generation failed: {}", e.user_message()),
                    )
                }
            };
            (status, Html(render_page(&form.prompt, &body)))
        }
    }
}

fn status_for(error: &StorybookError) -> StatusCode {
    match error.kind() {
        StorybookErrorKind::Prompt(_) => StatusCode::BAD_REQUEST,
        StorybookErrorKind::Models(_) | StorybookErrorKind::Http(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn notice(class: &str, message: &str) -> String {
    format!(
        "<p class=\"{}\">{}</p>\n",
        class,
        encode_text(message).replace('\n', "<br>")
    )
}

fn render_outcome(outcome: &StorybookOutcome) -> String {
    let mut body = String::new();
    for failure in outcome.failures() {
        body.push_str(&notice("error", &failure.to_string()));
    }
    if outcome.is_empty() {
        body.push_str(&notice("warning", "No illustrations could be generated."));
    }
    body.push_str(&notice("success", outcome.success_message()));
    body.push_str(&format!(
        "<a download=\"storybook.pdf\" href=\"{}\">Download PDF</a>\n",
        encode_double_quoted_attribute(&outcome.storybook().data_uri())
    ));
    body
}

fn render_page(prompt: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
.warning {{ color: #8a6d3b; }}
.error {{ color: #a94442; }}
.success {{ color: #3c763d; }}
</style>
</head>
<body>
<h1>{title}</h1>
<form method="post" action="/generate">
<label for="prompt">Enter a prompt for your story:</label><br>
<input type="text" id="prompt" name="prompt" size="60" value="{prompt}">
<button type="submit">Generate Storybook</button>
</form>
{body}</body>
</html>
"#,
        title = TITLE,
        prompt = encode_double_quoted_attribute(prompt),
        body = body,
    )
}
