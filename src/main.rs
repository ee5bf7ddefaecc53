use anyhow::Result;
use console::style;
use jpeg_to_webp::component::WebpConverter;
use jpeg_to_webp::config::Config;
use jpeg_to_webp::init;
use jpeg_to_webp::signal::setup_shutdown_signal;
use log::warn;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!(
                "{} {e:#}",
                style(jpeg_to_webp::error_prefix()).red().bold()
            );
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::new();
    rust_i18n::set_locale(config.settings.language.as_str());

    let shutdown_signal = setup_shutdown_signal()?;
    let converter = WebpConverter::new(shutdown_signal);

    // 個別檔案失敗不影響結束碼
    converter.run(Path::new("."))?;
    Ok(())
}
