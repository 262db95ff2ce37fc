use std::fmt;
use std::str::FromStr;

/// Страницы приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Landing,
    ProjIntro,
    StockForecast,
    Report,
    Profit,
}

impl PageId {
    pub fn all() -> [PageId; 5] {
        [
            PageId::Landing,
            PageId::ProjIntro,
            PageId::StockForecast,
            PageId::Report,
            PageId::Profit,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Landing => "landing",
            PageId::ProjIntro => "proj_intro",
            PageId::StockForecast => "stock_forecast",
            PageId::Report => "report",
            PageId::Profit => "profit",
        }
    }

    /// DOM id of the page root element
    pub fn container_id(&self) -> &'static str {
        match self {
            PageId::Landing => "landing_main",
            PageId::ProjIntro => "proj_intro_container",
            PageId::StockForecast => "stock_forecast_container",
            PageId::Report => "report_container",
            PageId::Profit => "profit_container",
        }
    }

    /// Landing is full-bleed; every other page sits next to the sidebar.
    pub fn has_chrome(&self) -> bool {
        !matches!(self, PageId::Landing)
    }

    /// Подпись пункта меню
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Landing => "Prometheus AI",
            PageId::ProjIntro => "프로젝트 소개",
            PageId::StockForecast => "종목 전망 검색",
            PageId::Report => "보고서 조회",
            PageId::Profit => "수익률 조회",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::all()
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("unknown page id: {}", s))
    }
}
