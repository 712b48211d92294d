mod client;
mod types;

pub use client::TranslateClient;
pub use types::{
    CompletionChoice, CompletionRequest, CompletionResponse, Language, NO_TRANSLATION,
    Translation, TranslationRequest,
};
