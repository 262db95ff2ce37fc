use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Key of the aggregated row inside every quarter / day
pub const TOTAL_KEY: &str = "_total";

pub const PORTFOLIO_RESULTS_PATH: &str = "/pipeline/portfolio_quarter_results_log.json";
pub const TICKER_RESULTS_PATH: &str = "/pipeline/ticker_quarter_results_log.json";
pub const DAILY_PROFIT_RATE_PATH: &str = "/pipeline/daily_profit_rate_log.json";

/// Квартал отчётного года
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub fn all() -> [Quarter; 4] {
        [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    /// Месяцы квартала в формате "MM"
    pub fn months(&self) -> [&'static str; 3] {
        match self {
            Quarter::Q1 => ["01", "02", "03"],
            Quarter::Q2 => ["04", "05", "06"],
            Quarter::Q3 => ["07", "08", "09"],
            Quarter::Q4 => ["10", "11", "12"],
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Quarter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "Q1" => Ok(Quarter::Q1),
            "Q2" => Ok(Quarter::Q2),
            "Q3" => Ok(Quarter::Q3),
            "Q4" => Ok(Quarter::Q4),
            other => Err(format!("unknown quarter: {}", other)),
        }
    }
}

/// Выбор тикера: все сразу или один
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerFilter {
    All,
    Ticker(String),
}

impl TickerFilter {
    /// "all" (or empty) selects every ticker
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => TickerFilter::All,
            ticker => TickerFilter::Ticker(ticker.to_string()),
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            TickerFilter::All => "all",
            TickerFilter::Ticker(t) => t.as_str(),
        }
    }
}

/// Portfolio performance of one ticker within a quarter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub profit_rate: f64,
}

/// Closing figures of one ticker within a quarter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerPerformance {
    #[serde(default)]
    pub final_value: f64,
    #[serde(default)]
    pub last_trade_price: f64,
}

/// quarter → ticker → row
pub type QuarterResults<T> = HashMap<String, BTreeMap<String, T>>;

/// `portfolio_quarter_results_log.json`
pub type PortfolioQuarterResults = QuarterResults<PortfolioPerformance>;

/// `ticker_quarter_results_log.json`
pub type TickerQuarterResults = QuarterResults<TickerPerformance>;

/// `daily_profit_rate_log.json`: "YYYYMMDD" → ticker (or `_total`) → rate
pub type DailyProfitRates = BTreeMap<String, HashMap<String, f64>>;

/// Точка графика доходности
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
    pub date: String,
    pub rate: f64,
}
