pub mod clipboard;
pub mod static_export;
