//! Report key resolution
//!
//! Маппинг (дата, роль агента, слот) → ключ документа в `notion_page_ids.json`.
//! Пять временных слотов сворачиваются в три секции файла: t_1, t_2 (слоты 2-4)
//! и t_5.

use super::selection::{AgentRole, ReportQuery, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Infix used for every intraday key, whichever of slots 2..=4 was chosen.
pub const INTRADAY_INFIX: &str = "t_2_t_4";

/// Верхнеуровневая секция файла маппинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OuterSection {
    #[serde(rename = "t_1")]
    T1,
    #[serde(rename = "t_2")]
    T2,
    #[serde(rename = "t_5")]
    T5,
}

impl OuterSection {
    pub fn for_slot(slot: TimeSlot) -> Self {
        match slot {
            TimeSlot::PreMarket => OuterSection::T1,
            TimeSlot::Morning | TimeSlot::Midday | TimeSlot::Afternoon => OuterSection::T2,
            TimeSlot::PostMarket => OuterSection::T5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OuterSection::T1 => "t_1",
            OuterSection::T2 => "t_2",
            OuterSection::T5 => "t_5",
        }
    }
}

impl fmt::Display for OuterSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved lookup key: the section plus the full key inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportKey {
    pub section: OuterSection,
    pub full_key: String,
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.full_key)
    }
}

/// Суффикс ключа по роли. Только у трейдера суффикс зависит от слота:
/// отчёты на открытие/закрытие против внутридневного лога.
pub fn agent_suffix(agent_role: AgentRole, slot: TimeSlot) -> &'static str {
    match agent_role {
        AgentRole::Analyst => "analyst_rp",
        AgentRole::PortfolioManager => "portfolio_report",
        AgentRole::Trader => match slot {
            TimeSlot::PreMarket | TimeSlot::PostMarket => "trader_report",
            _ => "trader_log",
        },
    }
}

/// "2023-01-03" → "20230103"
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Resolve the mapping key for a report. Pure and total.
pub fn resolve_key(date: NaiveDate, agent_role: AgentRole, time_slot: TimeSlot) -> ReportKey {
    let date = format_report_date(date);
    let suffix = agent_suffix(agent_role, time_slot);

    let full_key = if time_slot.is_intraday() {
        format!("{}_{}_{}", date, INTRADAY_INFIX, suffix)
    } else {
        format!("{}_{}_{}", date, time_slot.token(), suffix)
    };

    ReportKey {
        section: OuterSection::for_slot(time_slot),
        full_key,
    }
}

impl ReportQuery {
    pub fn key(&self) -> ReportKey {
        resolve_key(self.date, self.agent_role, self.time_slot)
    }
}
