//! 整合測試 - 在暫存資料夾中以真實的 JPEG 驗證整批轉換

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use image::{Rgb, RgbImage};
use jpeg_to_webp::component::WebpConverter;
use jpeg_to_webp::component::webp_converter::ConversionError;
use tempfile::TempDir;

fn write_jpeg(path: &Path) {
    RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 64]))
        .save_with_format(path, image::ImageFormat::Jpeg)
        .unwrap();
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

fn webp_names(dir: &Path) -> BTreeSet<String> {
    file_names(dir)
        .into_iter()
        .filter(|name| name.ends_with(".webp"))
        .collect()
}

fn converter() -> WebpConverter {
    WebpConverter::new(Arc::new(AtomicBool::new(false)))
}

/// 測試 1: 只轉換 .jpg / .jpeg，其他檔案完全忽略
#[test]
fn test_converts_only_jpeg_candidates() {
    let temp_dir = TempDir::new().unwrap();
    write_jpeg(&temp_dir.path().join("a.jpg"));
    write_jpeg(&temp_dir.path().join("b.jpeg"));
    fs::write(temp_dir.path().join("c.png"), b"not scanned").unwrap();

    let summary = converter().run(temp_dir.path()).unwrap();

    assert_eq!(summary.outcomes.len(), 2);
    assert_eq!(summary.converted(), 2);
    assert_eq!(
        webp_names(temp_dir.path()),
        BTreeSet::from(["a.webp".to_string(), "b.webp".to_string()])
    );
    assert!(
        summary
            .outcomes
            .iter()
            .all(|o| o.source().file_name().unwrap() != "c.png")
    );

    let bytes = fs::read(temp_dir.path().join("a.webp")).unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WEBP");
}

/// 測試 2: 空資料夾不產生任何檔案
#[test]
fn test_empty_directory_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let summary = converter().run(temp_dir.path()).unwrap();

    assert!(summary.is_empty());
    assert!(file_names(temp_dir.path()).is_empty());
}

/// 測試 3: 空檔案解碼失敗，不產生輸出，後續檔案照常轉換
#[test]
fn test_corrupt_file_is_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.jpg"), b"").unwrap();
    fs::write(temp_dir.path().join("b.jpg"), b"plain text, not an image").unwrap();
    write_jpeg(&temp_dir.path().join("c.jpg"));

    let summary = converter().run(temp_dir.path()).unwrap();

    assert_eq!(summary.converted(), 1);
    assert_eq!(summary.failed(), 2);
    let failed: Vec<_> = summary
        .outcomes
        .iter()
        .filter(|o| !o.is_converted())
        .map(|o| o.source().file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(failed, vec!["a.jpg", "b.jpg"]);
    assert_eq!(
        webp_names(temp_dir.path()),
        BTreeSet::from(["c.webp".to_string()])
    );
}

/// 測試 4: 大寫副檔名不會被選取
#[test]
fn test_uppercase_extension_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    write_jpeg(&temp_dir.path().join("photo.JPG"));

    let summary = converter().run(temp_dir.path()).unwrap();

    assert!(summary.is_empty());
    assert!(webp_names(temp_dir.path()).is_empty());
}

/// 測試 5: 重複執行覆寫同名輸出，不產生額外檔案
#[test]
fn test_second_run_overwrites_outputs() {
    let temp_dir = TempDir::new().unwrap();
    write_jpeg(&temp_dir.path().join("a.jpg"));
    write_jpeg(&temp_dir.path().join("b.jpeg"));

    converter().run(temp_dir.path()).unwrap();
    let first = file_names(temp_dir.path());

    let summary = converter().run(temp_dir.path()).unwrap();
    assert_eq!(summary.converted(), 2);
    assert_eq!(file_names(temp_dir.path()), first);
}

/// 測試 6: 既有的同名檔案會被覆寫，來源檔保持不變
#[test]
fn test_existing_target_is_overwritten_and_source_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("a.jpg");
    write_jpeg(&source);
    fs::write(temp_dir.path().join("a.webp"), b"stale").unwrap();
    let source_bytes = fs::read(&source).unwrap();

    let summary = converter().run(temp_dir.path()).unwrap();

    assert_eq!(summary.converted(), 1);
    assert_ne!(fs::read(temp_dir.path().join("a.webp")).unwrap(), b"stale");
    assert_eq!(fs::read(&source).unwrap(), source_bytes);
}

/// 測試 7: 輸出檔集合等於成功轉換的來源檔集合
#[test]
fn test_written_files_match_successful_candidates() {
    let temp_dir = TempDir::new().unwrap();
    write_jpeg(&temp_dir.path().join("one.jpg"));
    fs::write(temp_dir.path().join("two.jpeg"), b"\xFF\xD8\xFF").unwrap();
    write_jpeg(&temp_dir.path().join("three.jpeg"));

    let summary = converter().run(temp_dir.path()).unwrap();

    let converted: BTreeSet<String> = summary
        .targets()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(converted, webp_names(temp_dir.path()));
    assert_eq!(
        converted,
        BTreeSet::from(["one.webp".to_string(), "three.webp".to_string()])
    );
}

/// 測試 8: 資料夾不存在時整批失敗
#[test]
fn test_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    assert!(converter().run(&temp_dir.path().join("missing")).is_err());
}

/// 測試 9: 單檔轉換回傳解碼錯誤
#[test]
fn test_convert_one_reports_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("broken.jpg");
    fs::write(&source, b"").unwrap();

    let err = converter().convert_one(&source).unwrap_err();

    assert!(matches!(err, ConversionError::Decode { .. }));
    assert_eq!(err.path(), source.as_path());
    assert!(!temp_dir.path().join("broken.webp").exists());
}

/// 測試 10: 依內容解碼，隱藏檔 `.jpg` 與內容是 PNG 的 `.jpg` 都能轉換
#[test]
fn test_decodes_by_content_not_extension() {
    let temp_dir = TempDir::new().unwrap();
    write_jpeg(&temp_dir.path().join(".jpg"));
    RgbImage::from_pixel(8, 8, Rgb([0, 128, 255]))
        .save_with_format(temp_dir.path().join("x.jpg"), image::ImageFormat::Png)
        .unwrap();

    let summary = converter().run(temp_dir.path()).unwrap();

    assert_eq!(summary.converted(), 2);
    assert_eq!(summary.failed(), 0);
    assert_eq!(
        webp_names(temp_dir.path()),
        BTreeSet::from([".jpg.webp".to_string(), "x.webp".to_string()])
    );
}
