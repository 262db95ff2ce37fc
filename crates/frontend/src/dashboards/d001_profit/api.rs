use contracts::dashboards::d001_profit::{
    DailyProfitRates, PortfolioQuarterResults, TickerQuarterResults, DAILY_PROFIT_RATE_PATH,
    PORTFOLIO_RESULTS_PATH, TICKER_RESULTS_PATH,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Доходность портфеля по кварталам
pub async fn get_portfolio_results() -> Result<PortfolioQuarterResults, String> {
    get_json(PORTFOLIO_RESULTS_PATH).await
}

/// Итоги по тикерам по кварталам
pub async fn get_ticker_results() -> Result<TickerQuarterResults, String> {
    get_json(TICKER_RESULTS_PATH).await
}

/// Дневная доходность
pub async fn get_daily_profit_rates() -> Result<DailyProfitRates, String> {
    get_json(DAILY_PROFIT_RATE_PATH).await
}
