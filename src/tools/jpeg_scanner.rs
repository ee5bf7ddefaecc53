use anyhow::{Context, Result, bail};
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 來源副檔名，大小寫敏感（`.JPG` 不會被選取）
pub const JPEG_SUFFIXES: [&str; 2] = [".jpeg", ".jpg"];

/// 檔名是否以 `.jpeg` 或 `.jpg` 結尾
#[must_use]
pub fn has_jpeg_suffix(file_name: &std::ffi::OsStr) -> bool {
    let bytes = file_name.as_encoded_bytes();
    JPEG_SUFFIXES
        .iter()
        .any(|suffix| bytes.ends_with(suffix.as_bytes()))
}

/// 來源資料夾必須存在且是資料夾，否則整批轉換無法進行
fn validate_source_directory(directory: &Path) -> Result<()> {
    if !directory.exists() {
        bail!("來源資料夾不存在: {}", directory.display());
    }
    if !directory.is_dir() {
        bail!("來源路徑不是資料夾: {}", directory.display());
    }
    Ok(())
}

/// 掃描資料夾第一層的 JPEG 檔案（不遞迴），依檔名排序
pub fn scan_jpeg_files(directory: &Path) -> Result<Vec<PathBuf>> {
    validate_source_directory(directory)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // 根目錄無法列出時中止，單一項目（例如斷掉的連結）則略過
            Err(e) if e.depth() == 0 => {
                return Err(e)
                    .with_context(|| format!("無法讀取資料夾: {}", directory.display()));
            }
            Err(e) => {
                warn!("略過無法讀取的項目: {e}");
                continue;
            }
        };
        if entry.file_type().is_file() && has_jpeg_suffix(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
