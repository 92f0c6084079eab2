pub mod format;
pub mod notice;
