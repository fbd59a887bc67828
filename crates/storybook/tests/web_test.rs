//! Tests for the web form.

mod test_utils;

use std::net::SocketAddr;
use std::sync::Arc;
use storybook::web::{WebState, create_router};
use storybook::{ModelRegistry, StorybookAssembler, StorybookGenerator};
use test_utils::{MockImages, MockStory};

const STORY: &str = "A panda looked at the sky. The panda <flew> away";

async fn spawn(images: MockImages) -> SocketAddr {
    spawn_with(MockStory::new_success(STORY), images).await
}

async fn spawn_with(story: MockStory, images: MockImages) -> SocketAddr {
    let registry = ModelRegistry::new(Arc::new(story), Arc::new(images));
    let generator = StorybookGenerator::new(registry, StorybookAssembler::default());
    let app = create_router(WebState::new(generator));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_health_check() {
    let addr = spawn(MockImages::new()).await;

    let body: serde_json::Value = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_index_renders_form() {
    let addr = spawn(MockImages::new()).await;

    let body = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<form method=\"post\" action=\"/generate\">"));
    assert!(body.contains("Generate Storybook"));
}

#[tokio::test]
async fn test_blank_prompt_shows_warning() {
    let addr = spawn(MockImages::new()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .form(&[("prompt", "  ")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("Please enter a prompt to continue"));
    assert!(!body.contains("Download PDF"));
}

#[tokio::test]
async fn test_generate_offers_download() {
    let addr = spawn(MockImages::new()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .form(&[("prompt", "a panda who learns to fly")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Storybook generated successfully!"));
    assert!(body.contains("href=\"data:application/pdf;base64,"));
    assert!(body.contains("Download PDF"));
    assert!(body.contains("value=\"a panda who learns to fly\""));
}

#[tokio::test]
async fn test_failed_page_is_reported_escaped() {
    let addr = spawn(MockImages::new().failing_on("The panda <flew> away")).await;

    let body = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .form(&[("prompt", "a panda who learns to fly")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Image generation failed for: The panda &lt;flew&gt; away"));
    assert!(!body.contains("<flew>"));
    assert!(body.contains("Download PDF"));
}

#[tokio::test]
async fn test_story_failure_hides_source_locations() {
    let addr = spawn_with(MockStory::new_error("model offline"), MockImages::new()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/generate", addr))
        .form(&[("prompt", "a panda who learns to fly")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body = response.text().await.unwrap();
    assert!(body.contains("Storybook generation failed: Backend error: model offline</p>"));
    assert!(!body.contains(".rs"));
    assert!(!body.contains("Download PDF"));
}
