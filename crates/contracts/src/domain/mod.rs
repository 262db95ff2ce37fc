pub mod a001_report;
