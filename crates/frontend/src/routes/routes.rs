use crate::dashboards::d001_profit::ui::ProfitDashboard;
use crate::domain::a001_report::ui::ReportPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::pages::landing::LandingPage;
use crate::pages::proj_intro::ProjIntroPage;
use crate::pages::stock_forecast::StockForecastPage;
use crate::routes::page::PageId;
use leptos::prelude::*;

/// Renders the one mounted page; switching pages drops the previous subtree
/// together with its signals.
fn render_page(page: PageId) -> AnyView {
    match page {
        PageId::Landing => view! { <LandingPage /> }.into_any(),
        PageId::ProjIntro => view! { <ProjIntroPage /> }.into_any(),
        PageId::StockForecast => view! { <StockForecastPage /> }.into_any(),
        PageId::Report => view! { <ReportPage /> }.into_any(),
        PageId::Profit => view! { <ProfitDashboard /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <div id=move || ctx.active().container_id() class="page-container">
                        // Every activation notifies, so re-entering a page rebuilds it
                        {move || render_page(ctx.active())}
                    </div>
                }.into_any()
            }
        />
    }
}
