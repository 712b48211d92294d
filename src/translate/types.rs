use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when the service answers 200 without the expected
/// `choices[0].text` field.
pub const NO_TRANSLATION: &str = "No translation provided";

/// The closed set of languages the T5 service is prompted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    French,
    German,
    Romanian,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Romanian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Romanian => "Romanian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub source_language: Language,
    pub target_language: Language,
    pub text: String,
}

impl TranslationRequest {
    /// T5 task prefix: `translate {source} to {target}: {text}`.
    pub fn prompt(&self) -> String {
        format!(
            "translate {} to {}: {}",
            self.source_language, self.target_language, self.text
        )
    }

    /// Pre-dispatch checks. The shell runs these before involving the
    /// client; on failure no HTTP request is made.
    pub fn validate(&self) -> Result<()> {
        if self.source_language == self.target_language {
            return Err(Error::validation(
                "Source and target languages must be different.",
            ));
        }
        if self.text.trim().is_empty() {
            return Err(Error::validation("Please enter some text to translate."));
        }
        Ok(())
    }
}

/// Successful adapter outcome. `Placeholder` is the degraded case: the
/// service answered 200 but the body carried no usable translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Text(String),
    Placeholder,
}

/// Completion-style payload for the OpenAI-compatible T5 route.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: &'static str,
    pub prompt: String,
    pub stream: bool,
    pub max_tokens: u32,
}

impl From<&TranslationRequest> for CompletionRequest {
    fn from(request: &TranslationRequest) -> Self {
        Self {
            model: "t5",
            prompt: request.prompt(),
            stream: false,
            max_tokens: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub text: Option<String>,
}

impl CompletionResponse {
    /// `choices[0].text`, if the service provided it.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn request(source: Language, target: Language, text: &str) -> TranslationRequest {
        TranslationRequest {
            source_language: source,
            target_language: target,
            text: text.to_string(),
        }
    }

    #[rstest]
    #[case(Language::English, Language::French, "Hello", "translate English to French: Hello")]
    #[case(Language::German, Language::Romanian, "Guten Tag", "translate German to Romanian: Guten Tag")]
    #[case(Language::French, Language::English, "Bonjour", "translate French to English: Bonjour")]
    fn test_prompt_format(
        #[case] source: Language,
        #[case] target: Language,
        #[case] text: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(request(source, target, text).prompt(), expected);
    }

    #[test]
    fn test_prompt_format_for_every_language_pair() {
        for source in Language::ALL {
            for target in Language::ALL {
                if source == target {
                    continue;
                }
                let req = request(source, target, "some text");
                assert_eq!(
                    req.prompt(),
                    format!("translate {} to {}: some text", source, target)
                );
            }
        }
    }

    #[test]
    fn test_validate_rejects_same_languages() {
        let err = request(Language::English, Language::English, "Hello")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Source and target languages must be different."
        );
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        let err = request(Language::English, Language::French, "   \n\t")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter some text to translate.");
    }

    #[test]
    fn test_validate_accepts_distinct_languages_and_text() {
        assert!(
            request(Language::English, Language::French, "Hello")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_completion_payload_shape() {
        let req = request(Language::English, Language::French, "Hello");
        let payload = serde_json::to_value(CompletionRequest::from(&req)).unwrap();
        assert_eq!(
            payload,
            json!({
                "model": "t5",
                "prompt": "translate English to French: Hello",
                "stream": false,
                "max_tokens": 30,
            })
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let response: CompletionResponse =
            serde_json::from_value(json!({"choices": [{"text": "Bonjour", "index": 0}]})).unwrap();
        assert_eq!(response.into_text(), Some("Bonjour".to_string()));
    }

    #[test]
    fn test_response_without_choices_yields_no_text() {
        let response: CompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_text(), None);

        let response: CompletionResponse =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(response.into_text(), None);

        let response: CompletionResponse =
            serde_json::from_value(json!({"choices": [{"index": 0}]})).unwrap();
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_language_serde_uses_display_spelling() {
        let value = serde_json::to_value(Language::Romanian).unwrap();
        assert_eq!(value, json!("Romanian"));

        let parsed: Language = serde_json::from_value(json!("German")).unwrap();
        assert_eq!(parsed, Language::German);
    }
}
