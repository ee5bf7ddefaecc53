use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 單一檔案轉換失敗，只影響該檔案，不會中止整批轉換
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("cannot decode image: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode WebP: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("cannot write file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConversionError {
    /// 發生錯誤的檔案路徑（解碼為來源檔，編碼與寫入為輸出檔）
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. } | Self::Encode { path, .. } | Self::Write { path, .. } => {
                path
            }
        }
    }
}
