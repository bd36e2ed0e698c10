/*!
 * Tests for error types and their user-visible messages
 */

use kalike::errors::{AppError, PipelineError, ProviderError};

#[test]
fn test_providerError_display_shouldNameTheFailure() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "backend unavailable".to_string(),
    };
    assert_eq!(error.to_string(), "API responded with error: 503 - backend unavailable");

    let error = ProviderError::RateLimitExceeded("try again later".to_string());
    assert!(error.to_string().starts_with("Rate limit exceeded"));
}

#[test]
fn test_pipelineError_stage_shouldNameEachStage() {
    let cases = [
        (PipelineError::EmptyInput, "input"),
        (
            PipelineError::Translation(ProviderError::ConnectionError("down".to_string())),
            "translation",
        ),
        (
            PipelineError::Transliteration(ProviderError::ParseError("bad".to_string())),
            "transliteration",
        ),
        (
            PipelineError::Phonetics(ProviderError::RequestFailed("timeout".to_string())),
            "phonetics",
        ),
        (
            PipelineError::Speech(ProviderError::RequestFailed("timeout".to_string())),
            "speech",
        ),
    ];

    for (error, stage) in cases {
        assert_eq!(error.stage(), stage);
    }
}

#[test]
fn test_pipelineError_isInputError_shouldOnlyFlagEmptyInput() {
    assert!(PipelineError::EmptyInput.is_input_error());

    let service_failure =
        PipelineError::Translation(ProviderError::ConnectionError("down".to_string()));
    assert!(!service_failure.is_input_error());
}

#[test]
fn test_pipelineError_display_shouldIncludeSourceMessage() {
    let error = PipelineError::Speech(ProviderError::RequestFailed("timed out".to_string()));
    let message = error.to_string();

    assert!(message.contains("Speech synthesis failed"));
    assert!(message.contains("timed out"));
}

#[test]
fn test_appError_fromConversions_shouldPickTheRightVariant() {
    let from_provider: AppError = ProviderError::ParseError("garbage".to_string()).into();
    assert!(matches!(from_provider, AppError::Provider(_)));

    let from_pipeline: AppError = PipelineError::EmptyInput.into();
    assert!(matches!(from_pipeline, AppError::Pipeline(_)));

    let from_io: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(from_io, AppError::File(_)));

    let from_anyhow: AppError = anyhow::anyhow!("something else").into();
    assert!(matches!(from_anyhow, AppError::Unknown(_)));
}
