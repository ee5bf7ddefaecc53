use super::error::ConversionError;
use image::{DynamicImage, ImageError, ImageReader};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// 有損壓縮品質 (0-100)，固定不可調整
pub const WEBP_QUALITY: f32 = 85.0;
pub const WEBP_EXTENSION: &str = "webp";

/// 影像編解碼介面，測試時可替換為不碰檔案系統的實作
pub trait ImageCodec {
    fn decode(&self, source: &Path) -> Result<DynamicImage, ConversionError>;

    fn encode(
        &self,
        image: &DynamicImage,
        target: &Path,
        quality: f32,
    ) -> Result<(), ConversionError>;
}

/// 輸出路徑：同資料夾、同主檔名，副檔名換成 `.webp`
#[must_use]
pub fn target_path(source: &Path) -> PathBuf {
    source.with_extension(WEBP_EXTENSION)
}

/// 寫入中的暫存檔，完成後才改名成輸出檔
fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// `image` 解碼 + libwebp 有損編碼
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl ImageCodec for WebpCodec {
    fn decode(&self, source: &Path) -> Result<DynamicImage, ConversionError> {
        // 依檔案內容判斷格式，副檔名只作為無法判斷時的備援
        let decoded = ImageReader::open(source)
            .and_then(ImageReader::with_guessed_format)
            .map_err(ImageError::IoError)
            .and_then(ImageReader::decode);

        decoded.map_err(|e| ConversionError::Decode {
            path: source.to_path_buf(),
            source: e,
        })
    }

    fn encode(
        &self,
        image: &DynamicImage,
        target: &Path,
        quality: f32,
    ) -> Result<(), ConversionError> {
        let (width, height) = (image.width(), image.height());

        // libwebp 只接受 RGB8 / RGBA8
        let encoded = if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
        } else {
            let rgb = image.to_rgb8();
            webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
        }
        .map_err(|e| ConversionError::Encode {
            path: target.to_path_buf(),
            reason: format!("{e:?}"),
        })?;

        // 先寫暫存檔再改名，寫入失敗時保留原本的輸出檔
        let partial = partial_path(target);
        let written = fs::write(&partial, &*encoded).and_then(|()| fs::rename(&partial, target));

        written.map_err(|e| {
            if partial.exists() && fs::remove_file(&partial).is_err() {
                warn!("無法清理暫存檔: {}", partial.display());
            }
            ConversionError::Write {
                path: target.to_path_buf(),
                source: e,
            }
        })
    }
}
