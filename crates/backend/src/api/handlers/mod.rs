pub mod a001_report;
pub mod proxy;
