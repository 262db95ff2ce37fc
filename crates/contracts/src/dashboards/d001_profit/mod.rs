//! D001 Profit dashboard — consumption of the quarterly performance datasets
//!
//! Выбор (квартал + тикер) → подмножество данных трёх статических JSON файлов.

pub mod dto;

pub use dto::*;

use std::collections::BTreeMap;

/// Window of the moving average applied to the chart series
pub const SMOOTHING_WINDOW: usize = 3;

/// Тикеры квартала без агрегированной строки `_total`
pub fn tickers_for_quarter<T>(results: &QuarterResults<T>, quarter: Quarter) -> Vec<String> {
    results
        .get(quarter.code())
        .map(|rows| {
            rows.keys()
                .filter(|ticker| ticker.as_str() != TOTAL_KEY)
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// `_total` row of the latest quarter that has one
pub fn latest_total(results: &PortfolioQuarterResults) -> Option<(Quarter, PortfolioPerformance)> {
    Quarter::all().into_iter().rev().find_map(|quarter| {
        results
            .get(quarter.code())
            .and_then(|rows| rows.get(TOTAL_KEY))
            .map(|total| (quarter, total.clone()))
    })
}

/// Subset of a quarter: the whole quarter for `All`, or a single-entry map.
///
/// Unknown quarter or ticker yields an empty map.
pub fn select<T: Clone>(
    results: &QuarterResults<T>,
    quarter: Quarter,
    filter: &TickerFilter,
) -> BTreeMap<String, T> {
    let Some(rows) = results.get(quarter.code()) else {
        return BTreeMap::new();
    };

    match filter {
        TickerFilter::All => rows.clone(),
        TickerFilter::Ticker(ticker) => rows
            .get(ticker)
            .map(|row| BTreeMap::from([(ticker.clone(), row.clone())]))
            .unwrap_or_default(),
    }
}

/// Daily rates of the quarter in date order; a missing value counts as 0.
pub fn quarter_series(
    daily: &DailyProfitRates,
    quarter: Quarter,
    filter: &TickerFilter,
) -> Vec<ProfitPoint> {
    let months = quarter.months();
    let column = match filter {
        TickerFilter::All => TOTAL_KEY,
        TickerFilter::Ticker(ticker) => ticker.as_str(),
    };

    daily
        .iter()
        .filter(|(date, _)| {
            date.get(4..6)
                .map(|month| months.contains(&month))
                .unwrap_or(false)
        })
        .map(|(date, rates)| ProfitPoint {
            date: date.clone(),
            rate: rates.get(column).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Trailing moving average; the first points average over what is available.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Series ready for charting: filtered by quarter, then smoothed.
pub fn smoothed_series(
    daily: &DailyProfitRates,
    quarter: Quarter,
    filter: &TickerFilter,
) -> Vec<ProfitPoint> {
    let points = quarter_series(daily, quarter, filter);
    let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
    let smoothed = moving_average(&rates, SMOOTHING_WINDOW);

    points
        .into_iter()
        .zip(smoothed)
        .map(|(point, rate)| ProfitPoint {
            date: point.date,
            rate,
        })
        .collect()
}

/// Everything the profit page shows for one (quarter, ticker) choice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfitReport {
    /// Per-ticker portfolio rows, `_total` excluded
    pub portfolio: BTreeMap<String, PortfolioPerformance>,
    pub total: Option<PortfolioPerformance>,
    pub tickers: BTreeMap<String, TickerPerformance>,
    /// Smoothed daily rate series
    pub series: Vec<ProfitPoint>,
}

impl ProfitReport {
    pub fn build(
        portfolio: &PortfolioQuarterResults,
        tickers: &TickerQuarterResults,
        daily: &DailyProfitRates,
        quarter: Quarter,
        filter: &TickerFilter,
    ) -> Self {
        let mut rows = select(portfolio, quarter, filter);
        let total = rows.remove(TOTAL_KEY);

        Self {
            portfolio: rows,
            total,
            tickers: select(tickers, quarter, filter),
            series: smoothed_series(daily, quarter, filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn portfolio() -> PortfolioQuarterResults {
        serde_json::from_str(
            r#"{
                "Q1": {
                    "005930": { "profit": 120000.5, "profit_rate": 3.2 },
                    "000660": { "profit": -5000.0, "profit_rate": -0.4 },
                    "_total": { "profit": 115000.5, "profit_rate": 2.8 }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_tickers_exclude_total() {
        let tickers = tickers_for_quarter(&portfolio(), Quarter::Q1);
        assert_eq!(tickers, vec!["000660".to_string(), "005930".to_string()]);
        assert!(tickers_for_quarter(&portfolio(), Quarter::Q2).is_empty());
    }

    #[test]
    fn test_select_subset() {
        let data = portfolio();

        let all = select(&data, Quarter::Q1, &TickerFilter::All);
        assert_eq!(all.len(), 3);

        let one = select(&data, Quarter::Q1, &TickerFilter::parse("005930"));
        assert_eq!(one.len(), 1);
        assert_eq!(one["005930"].profit_rate, 3.2);

        let unknown = select(&data, Quarter::Q1, &TickerFilter::parse("999999"));
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_quarter_series_filters_months() {
        let mut daily = DailyProfitRates::new();
        daily.insert(
            "20230331".into(),
            HashMap::from([("_total".to_string(), 1.0), ("005930".to_string(), 2.0)]),
        );
        daily.insert("20230103".into(), HashMap::from([("_total".to_string(), 0.5)]));
        daily.insert("20230401".into(), HashMap::from([("_total".to_string(), 9.0)]));

        let total = quarter_series(&daily, Quarter::Q1, &TickerFilter::All);
        assert_eq!(
            total,
            vec![
                ProfitPoint { date: "20230103".into(), rate: 0.5 },
                ProfitPoint { date: "20230331".into(), rate: 1.0 },
            ]
        );

        let ticker = quarter_series(&daily, Quarter::Q1, &TickerFilter::parse("005930"));
        assert_eq!(ticker[0].rate, 0.0);
        assert_eq!(ticker[1].rate, 2.0);
    }

    #[test]
    fn test_moving_average() {
        let smoothed = moving_average(&[3.0, 6.0, 9.0, 0.0], 3);
        assert_eq!(smoothed, vec![3.0, 4.5, 6.0, 5.0]);
        assert!(moving_average(&[], 3).is_empty());
        assert_eq!(moving_average(&[1.0, 2.0], 0), vec![1.0, 2.0]);
    }

    #[test]
    fn test_latest_total() {
        let mut data = portfolio();
        assert_eq!(latest_total(&data).unwrap().0, Quarter::Q1);

        data.insert("Q3".into(), BTreeMap::new());
        assert_eq!(latest_total(&data).unwrap().0, Quarter::Q1);

        data.insert(
            "Q2".into(),
            BTreeMap::from([(TOTAL_KEY.to_string(), PortfolioPerformance { profit: 1.0, profit_rate: 0.1 })]),
        );
        let (quarter, total) = latest_total(&data).unwrap();
        assert_eq!(quarter, Quarter::Q2);
        assert_eq!(total.profit_rate, 0.1);

        assert!(latest_total(&PortfolioQuarterResults::new()).is_none());
    }

    #[test]
    fn test_profit_report() {
        let tickers: TickerQuarterResults = serde_json::from_str(
            r#"{ "Q1": { "005930": { "final_value": 1000000.0, "last_trade_price": 61000.0 } } }"#,
        )
        .unwrap();
        let mut daily = DailyProfitRates::new();
        daily.insert("20230102".into(), HashMap::from([(TOTAL_KEY.to_string(), 3.0)]));
        daily.insert("20230103".into(), HashMap::from([(TOTAL_KEY.to_string(), 6.0)]));

        let all = ProfitReport::build(&portfolio(), &tickers, &daily, Quarter::Q1, &TickerFilter::All);
        assert_eq!(all.portfolio.len(), 2);
        assert!(!all.portfolio.contains_key(TOTAL_KEY));
        assert_eq!(all.total.as_ref().map(|t| t.profit_rate), Some(2.8));
        assert_eq!(all.tickers.len(), 1);
        assert_eq!(
            all.series.iter().map(|p| p.rate).collect::<Vec<_>>(),
            vec![3.0, 4.5]
        );

        let one = ProfitReport::build(
            &portfolio(),
            &tickers,
            &daily,
            Quarter::Q1,
            &TickerFilter::parse("000660"),
        );
        assert_eq!(one.portfolio.keys().collect::<Vec<_>>(), vec!["000660"]);
        assert!(one.total.is_none());
        assert!(one.tickers.is_empty());
        assert_eq!(
            one.series.iter().map(|p| p.rate).collect::<Vec<_>>(),
            vec![0.0, 0.0]
        );
    }

    #[test]
    fn test_quarter_parsing() {
        assert_eq!("q3".parse::<Quarter>(), Ok(Quarter::Q3));
        assert!("Q5".parse::<Quarter>().is_err());
    }
}
