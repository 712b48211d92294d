mod client;
mod types;

pub use client::FillMaskClient;
pub use types::{FillMaskRequest, MASK_TOKEN, PredictRequest, PredictResponse};
