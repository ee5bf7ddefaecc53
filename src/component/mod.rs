//! 功能元件模組

pub mod webp_converter;

pub use webp_converter::WebpConverter;
