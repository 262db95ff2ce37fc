use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Тип агента, чьи отчёты можно просматривать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    Analyst,
    PortfolioManager,
    Trader,
}

impl AgentRole {
    /// Все роли в порядке отображения
    pub fn all() -> [AgentRole; 3] {
        [
            AgentRole::Analyst,
            AgentRole::PortfolioManager,
            AgentRole::Trader,
        ]
    }

    /// Человекочитаемое название (как в списке выбора)
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::Analyst => "Analyst",
            AgentRole::PortfolioManager => "Portfolio Manager",
            AgentRole::Trader => "Trader",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string does not name a known agent role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown agent role: {0}")]
pub struct UnknownAgentRole(pub String);

impl FromStr for AgentRole {
    type Err = UnknownAgentRole;

    /// Case-insensitive, accepts the display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analyst" => Ok(AgentRole::Analyst),
            "portfolio manager" | "portfolio_manager" => Ok(AgentRole::PortfolioManager),
            "trader" => Ok(AgentRole::Trader),
            _ => Err(UnknownAgentRole(s.to_string())),
        }
    }
}

/// Торговый временной слот дня (t_1 … t_5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    PreMarket,
    Morning,
    Midday,
    Afternoon,
    PostMarket,
}

impl TimeSlot {
    pub fn all() -> [TimeSlot; 5] {
        [
            TimeSlot::PreMarket,
            TimeSlot::Morning,
            TimeSlot::Midday,
            TimeSlot::Afternoon,
            TimeSlot::PostMarket,
        ]
    }

    /// Порядковый номер слота, 1..=5
    pub fn index(&self) -> u8 {
        match self {
            TimeSlot::PreMarket => 1,
            TimeSlot::Morning => 2,
            TimeSlot::Midday => 3,
            TimeSlot::Afternoon => 4,
            TimeSlot::PostMarket => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(TimeSlot::PreMarket),
            2 => Some(TimeSlot::Morning),
            3 => Some(TimeSlot::Midday),
            4 => Some(TimeSlot::Afternoon),
            5 => Some(TimeSlot::PostMarket),
            _ => None,
        }
    }

    /// Token used by the report pipeline, e.g. "t_3"
    pub fn token(&self) -> String {
        format!("t_{}", self.index())
    }

    /// Slots 2..=4 are the intraday ones; they share one report section.
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            TimeSlot::Morning | TimeSlot::Midday | TimeSlot::Afternoon
        )
    }

    /// Подпись слота в интерфейсе
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::PreMarket => "개장 이전",
            TimeSlot::Morning => "오전장",
            TimeSlot::Midday => "중간점",
            TimeSlot::Afternoon => "오후장",
            TimeSlot::PostMarket => "폐장 이후",
        }
    }
}

/// Fully specified report query: every field of a [`ReportSelection`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportQuery {
    pub date: NaiveDate,
    pub agent_role: AgentRole,
    pub time_slot: TimeSlot,
}

/// Выбор пользователя на странице отчётов.
///
/// Поля заполняются независимо (дата из календаря, роль и слот одним кликом).
/// Каждое поле хранит последнее выбранное значение; выбор не сбрасывается при
/// изменении другого поля.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSelection {
    pub date: Option<NaiveDate>,
    pub agent_role: Option<AgentRole>,
    pub time_slot: Option<TimeSlot>,
}

impl ReportSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// Role and slot come from the same click target, so they are set together.
    pub fn set_agent_slot(&mut self, agent_role: AgentRole, time_slot: TimeSlot) {
        self.agent_role = Some(agent_role);
        self.time_slot = Some(time_slot);
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    /// Returns the query only when all three fields are set.
    pub fn complete(&self) -> Option<ReportQuery> {
        Some(ReportQuery {
            date: self.date?,
            agent_role: self.agent_role?,
            time_slot: self.time_slot?,
        })
    }
}
