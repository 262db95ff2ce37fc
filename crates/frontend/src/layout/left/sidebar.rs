//! Sidebar: логотип (на лендинг), сводка портфеля, пункты меню

use crate::dashboards::d001_profit::api;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::PageId;
use crate::shared::icons::icon;
use contracts::dashboards::d001_profit::{latest_total, PortfolioPerformance, Quarter};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn menu_items() -> Vec<(PageId, &'static str)> {
    vec![
        (PageId::ProjIntro, "info"),
        (PageId::StockForecast, "search"),
        (PageId::Report, "file-text"),
        (PageId::Profit, "trending-up"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div id="sideBar_container" class="app-sidebar__content">
            <div
                class="app-sidebar__logo"
                on:click=move |_| ctx.navigate(PageId::Landing)
            >
                <img src="assets/logos/PI_logo_black.svg" alt="Prometheus AI" />
            </div>

            <PortfolioSummary />

            <div class="app-sidebar__items">
                {menu_items().into_iter().map(|(page, icon_name)| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active() == page
                            on:click=move |_| ctx.navigate(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{page.title()}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// "AI 포트폴리오 현황": итог последнего квартала с данными
#[component]
fn PortfolioSummary() -> impl IntoView {
    let (summary, set_summary) = signal(None::<(Quarter, PortfolioPerformance)>);

    spawn_local(async move {
        match api::get_portfolio_results().await {
            Ok(results) => set_summary.set(latest_total(&results)),
            Err(e) => log::error!("Failed to load portfolio summary: {}", e),
        }
    });

    view! {
        <div class="app-sidebar__portfolio">
            <div class="app-sidebar__portfolio-title">"AI 포트폴리오 현황"</div>
            <div class="app-sidebar__portfolio-box">
                {move || summary.get().map(|(quarter, total)| view! {
                    <span class="app-sidebar__portfolio-quarter">{quarter.code()}</span>
                    <span class="app-sidebar__portfolio-rate">
                        {format!("{:+.2}%", total.profit_rate)}
                    </span>
                })}
            </div>
        </div>
    }
}
