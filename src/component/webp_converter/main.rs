use super::codec::{ImageCodec, WEBP_QUALITY, WebpCodec, target_path};
use super::error::ConversionError;
use super::outcome::{ConversionOutcome, ConversionSummary};
use crate::tools::scan_jpeg_files;
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rust_i18n::t;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// JPEG 轉 WebP 元件
///
/// 流程：
/// 1. 掃描資料夾第一層的 `.jpg` / `.jpeg`
/// 2. 逐一解碼並以固定品質有損編碼成 `.webp`
/// 3. 每個檔案輸出成功或失敗訊息，失敗不影響後續檔案
pub struct WebpConverter<C = WebpCodec> {
    codec: C,
    shutdown_signal: Arc<AtomicBool>,
}

impl WebpConverter {
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::with_codec(WebpCodec, shutdown_signal)
    }
}

impl<C: ImageCodec> WebpConverter<C> {
    pub const fn with_codec(codec: C, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            codec,
            shutdown_signal,
        }
    }

    pub fn run(&self, directory: &Path) -> Result<ConversionSummary> {
        info!("開始掃描目錄: {}", directory.display());
        let candidates = self.scan(directory)?;

        if candidates.is_empty() {
            println!("{}", style(no_images_notice()).yellow());
            return Ok(ConversionSummary::default());
        }

        println!("{}", style(found_notice(candidates.len())).cyan());

        let summary = self.convert_all(&candidates);
        self.print_summary(&summary);

        Ok(summary)
    }

    pub fn scan(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        scan_jpeg_files(directory)
    }

    /// 轉換單一檔案，回傳輸出路徑；來源檔不會被修改
    pub fn convert_one(&self, source: &Path) -> Result<PathBuf, ConversionError> {
        let image = self.codec.decode(source)?;
        let target = target_path(source);
        self.codec.encode(&image, &target, WEBP_QUALITY)?;
        Ok(target)
    }

    pub fn convert_all(&self, candidates: &[PathBuf]) -> ConversionSummary {
        let progress = ProgressBar::new(candidates.len() as u64);
        if let Ok(progress_style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len}")
        {
            progress.set_style(progress_style.progress_chars("=>-"));
        }

        let mut summary = ConversionSummary::default();

        for (index, source) in candidates.iter().enumerate() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                summary.unprocessed = candidates.len() - index;
                break;
            }

            debug!("[{}/{}] {}", index + 1, candidates.len(), source.display());

            let outcome = match self.convert_one(source) {
                Ok(target) => {
                    progress.suspend(|| {
                        println!("{}", style(success_notice(&target)).green());
                    });
                    ConversionOutcome::Converted {
                        source: source.clone(),
                        target,
                    }
                }
                Err(error) => {
                    warn!("轉換失敗 {}: {error}", source.display());
                    progress.suspend(|| {
                        println!("{}", style(failure_notice(source, &error)).red());
                    });
                    ConversionOutcome::Failed {
                        source: source.clone(),
                        error,
                    }
                }
            };

            summary.outcomes.push(outcome);
            progress.inc(1);
        }

        progress.finish_and_clear();
        summary
    }

    fn print_summary(&self, summary: &ConversionSummary) {
        println!();
        println!(
            "{}",
            style(t!(
                "convert.summary",
                converted = summary.converted(),
                failed = summary.failed()
            ))
            .bold()
        );

        if summary.unprocessed > 0 {
            println!(
                "{}",
                style(t!("convert.interrupted", count = summary.unprocessed)).yellow()
            );
        }

        info!(
            "轉換完成 - 成功: {}, 失敗: {}, 未處理: {}",
            summary.converted(),
            summary.failed(),
            summary.unprocessed
        );
    }
}

fn no_images_notice() -> String {
    t!("convert.no_images").into_owned()
}

fn found_notice(count: usize) -> String {
    t!("convert.found", count = count).into_owned()
}

/// 成功訊息，顯示新建立的輸出檔名
fn success_notice(target: &Path) -> String {
    t!("convert.done", file = display_name(target)).into_owned()
}

/// 失敗訊息，顯示原始檔名與錯誤原因
fn failure_notice(source: &Path, error: &ConversionError) -> String {
    t!(
        "convert.failed",
        file = display_name(source),
        error = error.to_string()
    )
    .into_owned()
}

fn display_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
}
