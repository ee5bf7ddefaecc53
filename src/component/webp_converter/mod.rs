//! JPEG 轉 WebP 元件
//!
//! 掃描資料夾中的 `.jpg` / `.jpeg`，逐一轉成同名的 `.webp`

mod codec;
mod error;
mod main;
mod outcome;

pub use codec::{ImageCodec, WEBP_EXTENSION, WEBP_QUALITY, WebpCodec, target_path};
pub use error::ConversionError;
pub use main::WebpConverter;
pub use outcome::{ConversionOutcome, ConversionSummary};
