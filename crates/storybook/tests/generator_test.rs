//! End-to-end tests for the request pipeline with mock capabilities.

mod test_utils;

use std::sync::Arc;
use std::time::Duration;
use storybook::{ModelRegistry, StorybookAssembler, StorybookErrorKind, StorybookGenerator};
use test_utils::{MockImages, MockStory, StoryBehavior, pdf_captions, pdf_page_count};

const PANDA_STORY: &str = "Once upon a time a panda dreamed of flying. \
                           She practiced every day. \
                           Finally she soared above the bamboo";

fn generator(story: MockStory, images: MockImages) -> StorybookGenerator {
    let registry = ModelRegistry::new(Arc::new(story), Arc::new(images));
    StorybookGenerator::new(registry, StorybookAssembler::default())
}

#[tokio::test]
async fn test_blank_prompt_calls_nothing() {
    let story = MockStory::new_success(PANDA_STORY);
    let images = MockImages::new();
    let story_prompts = story.prompts();
    let image_prompts = images.prompts();

    for prompt in ["", "   ", "\n\t"] {
        let err = generator(MockStory::new_success(PANDA_STORY), MockImages::new())
            .generate(prompt)
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), StorybookErrorKind::Prompt(_)));
    }

    let err = generator(story, images).generate("").await.unwrap_err();
    assert!(err.to_string().contains("Please enter a prompt to continue"));
    assert!(story_prompts.lock().unwrap().is_empty());
    assert!(image_prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_panda_story_makes_three_pages_in_order() {
    let story = MockStory::new_success(PANDA_STORY);
    let images = MockImages::new();
    let story_prompts = story.prompts();
    let image_prompts = images.prompts();

    let outcome = generator(story, images)
        .generate("a panda who learns to fly")
        .await
        .unwrap();

    assert_eq!(outcome.page_count(), 3);
    assert!(outcome.failures().is_empty());
    assert_eq!(outcome.prompt().as_str(), "a panda who learns to fly");
    assert_eq!(outcome.story(), PANDA_STORY);
    assert_eq!(*story_prompts.lock().unwrap(), vec!["a panda who learns to fly"]);

    let expected = vec![
        "Once upon a time a panda dreamed of flying",
        "She practiced every day",
        "Finally she soared above the bamboo",
    ];
    assert_eq!(*image_prompts.lock().unwrap(), expected);

    let bytes = outcome.storybook().bytes();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(pdf_page_count(bytes), 3);
    assert_eq!(pdf_captions(bytes), expected);
    assert!(
        outcome
            .storybook()
            .data_uri()
            .starts_with("data:application/pdf;base64,")
    );
}

#[tokio::test]
async fn test_failed_image_skips_its_paragraph() {
    let images = MockImages::new().failing_on("She practiced every day");

    let outcome = generator(MockStory::new_success(PANDA_STORY), images)
        .generate("a panda who learns to fly")
        .await
        .unwrap();

    assert_eq!(outcome.page_count(), 2);
    assert_eq!(outcome.failures().len(), 1);

    let failure = &outcome.failures()[0];
    assert_eq!(*failure.index(), 1);
    assert_eq!(failure.paragraph(), "She practiced every day");
    assert!(
        failure
            .to_string()
            == "Image generation failed for: She practiced every day\nError: Backend error: API error 503"
    );

    assert_eq!(
        pdf_captions(outcome.storybook().bytes()),
        vec![
            "Once upon a time a panda dreamed of flying",
            "Finally she soared above the bamboo",
        ]
    );
}

#[tokio::test]
async fn test_all_images_failing_yields_empty_valid_pdf() {
    let images = MockImages::new()
        .failing_on("Once upon a time a panda dreamed of flying")
        .failing_on("She practiced every day")
        .failing_on("Finally she soared above the bamboo");

    let outcome = generator(MockStory::new_success(PANDA_STORY), images)
        .generate("a panda who learns to fly")
        .await
        .unwrap();

    assert!(outcome.is_empty());
    assert_eq!(outcome.failures().len(), 3);
    assert_eq!(pdf_page_count(outcome.storybook().bytes()), 1);
}

#[tokio::test]
async fn test_story_is_capped_at_five_pages() {
    let story = "One. Two. Three. Four. Five. Six. Seven";
    let images = MockImages::new();
    let image_prompts = images.prompts();

    let outcome = generator(MockStory::new_success(story), images)
        .generate("counting")
        .await
        .unwrap();

    assert_eq!(outcome.paragraphs().len(), 5);
    assert_eq!(outcome.page_count(), 5);
    assert_eq!(
        *image_prompts.lock().unwrap(),
        vec!["One", "Two", "Three", "Four", "Five"]
    );
}

#[tokio::test]
async fn test_image_prompts_are_truncated() {
    let long = (1..=100).map(|n| format!("w{}", n)).collect::<Vec<_>>().join(" ");
    let images = MockImages::new();
    let image_prompts = images.prompts();

    let outcome = generator(MockStory::new_success(long.clone()), images)
        .generate("words")
        .await
        .unwrap();

    let sent = image_prompts.lock().unwrap()[0].clone();
    assert_eq!(sent.split_whitespace().count(), 75);
    assert!(sent.ends_with("w75"));

    // The caption keeps the full paragraph.
    assert_eq!(outcome.paragraphs()[0].text(), &long);
}

#[tokio::test]
async fn test_custom_word_budget() {
    let images = MockImages::new();
    let image_prompts = images.prompts();

    generator(MockStory::new_success("a b c d e f"), images)
        .with_max_words(3)
        .generate("letters")
        .await
        .unwrap();

    assert_eq!(*image_prompts.lock().unwrap(), vec!["a b c"]);
}

#[tokio::test]
async fn test_concurrent_images_keep_story_order() {
    let images = MockImages::new()
        .delaying("Once upon a time a panda dreamed of flying", Duration::from_millis(150))
        .delaying("She practiced every day", Duration::from_millis(75));

    let outcome = generator(MockStory::new_success(PANDA_STORY), images)
        .with_concurrency(3)
        .generate("a panda who learns to fly")
        .await
        .unwrap();

    assert_eq!(
        pdf_captions(outcome.storybook().bytes()),
        vec![
            "Once upon a time a panda dreamed of flying",
            "She practiced every day",
            "Finally she soared above the bamboo",
        ]
    );
}

#[tokio::test]
async fn test_story_failure_aborts_request() {
    let images = MockImages::new();
    let image_prompts = images.prompts();

    let err = generator(MockStory::new_error("model offline"), images)
        .generate("a panda who learns to fly")
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), StorybookErrorKind::Models(_)));
    assert!(err.to_string().contains("model offline"));
    assert!(image_prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_first_candidate_is_used() {
    let story = MockStory::new(StoryBehavior::Candidates(vec![
        "First story".to_string(),
        "Second story".to_string(),
    ]));

    let outcome = generator(story, MockImages::new())
        .generate("pick one")
        .await
        .unwrap();

    assert_eq!(outcome.story(), "First story");
}

#[tokio::test]
async fn test_no_candidates_is_an_error() {
    let story = MockStory::new(StoryBehavior::Candidates(Vec::new()));

    let err = generator(story, MockImages::new())
        .generate("anything")
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), StorybookErrorKind::Models(_)));
}

#[tokio::test]
async fn test_empty_story_segments_still_become_pages() {
    let images = MockImages::new();
    let image_prompts = images.prompts();

    let outcome = generator(MockStory::new_success("First. . Third. "), images)
        .generate("gaps")
        .await
        .unwrap();

    assert_eq!(outcome.paragraphs().len(), 4);
    assert_eq!(*image_prompts.lock().unwrap(), vec!["First", "", "Third", ""]);
    assert_eq!(outcome.page_count(), 4);
}
