pub mod config;
pub mod format;
pub mod llm;
pub mod notion;
pub mod raw_info;
