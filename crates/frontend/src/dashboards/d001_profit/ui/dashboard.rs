use crate::dashboards::d001_profit::api;
use crate::dashboards::d001_profit::chart::{
    polyline_points, zero_line, CHART_HEIGHT, CHART_PADDING, CHART_WIDTH,
};
use crate::shared::date_utils::{format_amount, format_compact_date};
use contracts::dashboards::d001_profit::{
    tickers_for_quarter, PortfolioQuarterResults, ProfitReport, Quarter, TickerFilter,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Profit dashboard: quarter + ticker → portfolio performance, ticker info, rate chart
#[component]
pub fn ProfitDashboard() -> impl IntoView {
    let quarter_value = RwSignal::new(String::new());
    let ticker_value = RwSignal::new(String::new());

    let (portfolio, set_portfolio) = signal(None::<PortfolioQuarterResults>);
    let (report, set_report) = signal(None::<ProfitReport>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Ticker list comes from the portfolio results
    spawn_local(async move {
        match api::get_portfolio_results().await {
            Ok(data) => set_portfolio.set(Some(data)),
            Err(e) => log::error!("Failed to load portfolio results: {}", e),
        }
    });

    let quarter = Memo::new(move |_| quarter_value.get().parse::<Quarter>().ok());

    let ticker_options = Memo::new(move |_| {
        let Some(q) = quarter.get() else {
            return Vec::new();
        };
        portfolio.with(|data| {
            data.as_ref()
                .map(|d| tickers_for_quarter(d, q))
                .unwrap_or_default()
        })
    });

    // New quarter: back to "all tickers"
    Effect::new(move |_| {
        if quarter.get().is_some() {
            ticker_value.set(TickerFilter::All.as_value().to_string());
        }
    });

    let on_search = move |_| {
        let (Some(q), ticker) = (quarter.get_untracked(), ticker_value.get_untracked()) else {
            set_error.set(Some("분기와 종목을 선택하세요.".to_string()));
            return;
        };
        if ticker.is_empty() {
            set_error.set(Some("분기와 종목을 선택하세요.".to_string()));
            return;
        }
        let filter = TickerFilter::parse(&ticker);
        set_error.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let result = async {
                let portfolio = api::get_portfolio_results().await?;
                let tickers = api::get_ticker_results().await?;
                let daily = api::get_daily_profit_rates().await?;
                Ok::<_, String>(ProfitReport::build(&portfolio, &tickers, &daily, q, &filter))
            }
            .await;

            match result {
                Ok(data) => set_report.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load profit data: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="profit_wrapper">
            <img class="profit_title" src="assets/imgs/profit/title.svg" alt="수익률 조회" />

            <div class="profit_main_area">
                <div class="profit_left_area">
                    <Select value=quarter_value>
                        <option value="">"분기 선택"</option>
                        {Quarter::all().into_iter().map(|q| view! {
                            <option value=q.code()>{q.code()}</option>
                        }).collect_view()}
                    </Select>

                    <Select value=ticker_value>
                        {move || if quarter.get().is_some() {
                            view! { <option value="all">"모든 종목"</option> }.into_any()
                        } else {
                            view! { <option value="">"종목 선택"</option> }.into_any()
                        }}
                        <For
                            each=move || ticker_options.get()
                            key=|ticker| ticker.clone()
                            children=move |ticker: String| {
                                let label = ticker.clone();
                                view! { <option value=ticker>{label}</option> }
                            }
                        />
                    </Select>

                    <Button appearance=ButtonAppearance::Primary on_click=on_search>
                        "조회"
                    </Button>
                </div>

                <div class="profit_right_area">
                    {move || loading.get().then(|| view! {
                        <Flex gap=FlexGap::Small>
                            <Spinner />
                        </Flex>
                    })}

                    {move || error.get().map(|err| view! {
                        <div class="profit_error">{err}</div>
                    })}

                    {move || report.get().map(|data| view! { <ProfitReportView data=data /> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfitReportView(data: ProfitReport) -> impl IntoView {
    let line = polyline_points(&data.series, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);
    let zero_y = zero_line(&data.series, CHART_HEIGHT, CHART_PADDING);
    let first_date = data.series.first().map(|p| format_compact_date(&p.date));
    let last_date = data.series.last().map(|p| format_compact_date(&p.date));

    view! {
        <div class="profit_chart">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                width="100%"
                preserveAspectRatio="none"
            >
                <line
                    x1=CHART_PADDING.to_string()
                    x2=(CHART_WIDTH - CHART_PADDING).to_string()
                    y1=zero_y.to_string()
                    y2=zero_y.to_string()
                    stroke="#cccccc"
                    stroke-dasharray="4 4"
                />
                <polyline points=line fill="none" stroke="#B50000" stroke-width="2" />
            </svg>
            <div class="profit_chart_axis">
                <span>{first_date.unwrap_or_default()}</span>
                <span>{last_date.unwrap_or_default()}</span>
            </div>
        </div>

        <div class="portfolio_info">
            <h3>"포트폴리오 성과"</h3>
            {data.total.map(|total| view! {
                <p class="portfolio_total">
                    {format!("합계 수익률: {:.2}%", total.profit_rate)}
                </p>
            })}
            {data.portfolio.into_iter().map(|(ticker, row)| view! {
                <div>
                    <h4>{format!("종목: {}", ticker)}</h4>
                    <p>{format!("수익: {}원", format_amount(row.profit))}</p>
                    <p>{format!("수익률: {:.2}%", row.profit_rate)}</p>
                </div>
            }).collect_view()}
        </div>

        <div class="ticker_info">
            <h3>"종목별 정보"</h3>
            {data.tickers.into_iter().map(|(ticker, row)| view! {
                <div>
                    <h4>{format!("종목: {}", ticker)}</h4>
                    <p>{format!("최종 평가액: {}원", format_amount(row.final_value))}</p>
                    <p>{format!("마지막 거래 가격: {}원", format_amount(row.last_trade_price))}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
