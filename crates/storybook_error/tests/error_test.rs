//! Tests for error conversion and display.

use storybook_error::{
    AssemblyError, AssemblyErrorKind, ConfigError, HttpError, HuggingFaceErrorKind, ModelsError,
    ModelsErrorKind, PromptError, PromptErrorKind, StorageError, StorageErrorKind, StorybookError,
    StorybookErrorKind, StorybookResult,
};

#[test]
fn test_prompt_error_message() {
    let err = PromptError::new(PromptErrorKind::Empty);
    assert_eq!(err.kind.to_string(), "Please enter a prompt to continue");
    assert!(err.to_string().contains("Please enter a prompt to continue"));
    assert!(err.file.ends_with(".rs"));
}

#[test]
fn test_location_is_captured_at_call_site() {
    let err = HttpError::new("Connection refused");
    assert!(err.file.contains("error_test"));
    assert!(err.line > 0);
}

#[test]
fn test_every_error_converts_to_storybook_error() {
    let cases: Vec<StorybookError> = vec![
        HttpError::new("refused").into(),
        ConfigError::new("bad toml").into(),
        PromptError::new(PromptErrorKind::Empty).into(),
        ModelsError::new(ModelsErrorKind::EmptyStory).into(),
        StorageError::new(StorageErrorKind::NotFound("page_0.png".to_string())).into(),
        AssemblyError::new(AssemblyErrorKind::Serialize("disk full".to_string())).into(),
    ];

    assert!(matches!(cases[0].kind(), StorybookErrorKind::Http(_)));
    assert!(matches!(cases[1].kind(), StorybookErrorKind::Config(_)));
    assert!(matches!(cases[2].kind(), StorybookErrorKind::Prompt(_)));
    assert!(matches!(cases[3].kind(), StorybookErrorKind::Models(_)));
    assert!(matches!(cases[4].kind(), StorybookErrorKind::Storage(_)));
    assert!(matches!(cases[5].kind(), StorybookErrorKind::Assembly(_)));
}

#[test]
fn test_hub_errors_nest_in_models_error() {
    let err = ModelsError::from(HuggingFaceErrorKind::Api {
        status: 503,
        message: "Model is loading".to_string(),
    });

    assert_eq!(
        err.kind,
        ModelsErrorKind::HuggingFace(HuggingFaceErrorKind::Api {
            status: 503,
            message: "Model is loading".to_string(),
        })
    );
    assert_eq!(err.kind.to_string(), "HuggingFace: API error 503: Model is loading");
}

#[test]
fn test_question_mark_propagation() {
    fn decode() -> StorybookResult<()> {
        Err(AssemblyError::new(AssemblyErrorKind::ImageDecode {
            page: 2,
            message: "invalid PNG signature".to_string(),
        }))?
    }

    let err = decode().unwrap_err();
    assert!(err.to_string().contains("Failed to decode image for page 2"));
}

#[test]
fn test_user_message_omits_location() {
    let cases: Vec<(StorybookError, &str)> = vec![
        (HttpError::new("refused").into(), "refused"),
        (ConfigError::new("bad toml").into(), "bad toml"),
        (
            ModelsError::new(ModelsErrorKind::Backend("model offline".to_string())).into(),
            "Backend error: model offline",
        ),
        (
            StorageError::new(StorageErrorKind::FileWrite("/tmp/out.pdf".to_string())).into(),
            "Failed to write file: /tmp/out.pdf",
        ),
        (
            AssemblyError::new(AssemblyErrorKind::Serialize("disk full".to_string())).into(),
            "Failed to serialize document: disk full",
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.user_message(), expected);
        assert!(err.to_string().contains("error_test.rs"));
    }
}
