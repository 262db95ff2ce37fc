pub mod date_utils;
pub mod icons;
pub mod request_sequence;
