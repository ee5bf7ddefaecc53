#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

pub mod component;
pub mod config;
pub mod init;
pub mod signal;
pub mod tools;

/// 錯誤訊息前綴（依目前語系）
#[must_use]
pub fn error_prefix() -> String {
    t!("main.error_prefix").into_owned()
}
