use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::PageId;
use leptos::prelude::*;

/// Карточки лендинга: (страница, картинка)
fn cards() -> [(PageId, &'static str); 4] {
    [
        (PageId::ProjIntro, "assets/imgs/landing/0.svg"),
        (PageId::StockForecast, "assets/imgs/landing/1.svg"),
        (PageId::Report, "assets/imgs/landing/2.svg"),
        (PageId::Profit, "assets/imgs/landing/3.svg"),
    ]
}

/// Full-bleed start page; the sidebar is not mounted here.
#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="landing_main">
            <div class="landing_main_upper">
                <img class="PI_logo_landing" src="assets/logos/PI_logo_black.svg" alt="Prometheus AI" />
                <div class="landing_typeIt">"AI 멀티 에이전트 기반 포트폴리오 운용"</div>
            </div>

            <div class="landing_card_container">
                {cards().into_iter().map(|(page, img)| view! {
                    <div class="landing_card_element" on:click=move |_| ctx.navigate(page)>
                        <img class="landing_card_img" src=img alt=page.title() />
                        <p class="landing_card_text">{page.title()}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
