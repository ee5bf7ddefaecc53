mod jpeg_scanner;

pub use jpeg_scanner::{JPEG_SUFFIXES, has_jpeg_suffix, scan_jpeg_files};
