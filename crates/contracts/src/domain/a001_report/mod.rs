pub mod key;
pub mod mapping;
pub mod selection;

pub use key::{resolve_key, OuterSection, ReportKey};
pub use mapping::{PageTextResponse, ReportKeyMapping};
pub use selection::{AgentRole, ReportQuery, ReportSelection, TimeSlot};

/// Path of the mapping file served by the backend
pub const REPORT_MAPPING_PATH: &str = "/pipeline/notion_page_ids.json";
