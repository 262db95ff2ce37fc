use super::{api, build_chat_request, carousel_track, completion_text, INPUT_PLACEHOLDER};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum ForecastState {
    Idle,
    Loading,
    Done(String),
    Failed(String),
}

#[component]
pub fn StockForecastPage() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let state = RwSignal::new(ForecastState::Idle);

    let submit = move || {
        let query = input.get_untracked().trim().to_string();
        if query.is_empty() || state.get_untracked() == ForecastState::Loading {
            return;
        }
        state.set(ForecastState::Loading);

        spawn_local(async move {
            let result = async {
                let raw_info = api::post_raw_info(&query).await?;
                let payload = api::post_chat(&build_chat_request(&query, &raw_info)).await?;
                // Without a usable completion the script output is still worth showing
                Ok::<_, String>(completion_text(&payload).unwrap_or(raw_info))
            }
            .await;

            match result {
                Ok(text) => state.set(ForecastState::Done(text)),
                Err(e) => {
                    log::error!("Stock forecast failed: {}", e);
                    state.set(ForecastState::Failed(e));
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="stock_forecast_wrapper">
            <img class="stock_forecast_top_title" src="assets/imgs/stock_forecast/title.svg" alt="종목 전망 검색" />
            <img class="stock_forecast_PI_logo" src="assets/logos/logo_wo_background.svg" alt="Prometheus AI" />

            <div class="stock_forecast_carousel">
                <div class="carousel_track">
                    {carousel_track().into_iter().map(|src| view! {
                        <img class="carousel_img" src=src />
                    }).collect_view()}
                </div>
            </div>

            <textarea
                class="stock_forecast_chat_input"
                placeholder=INPUT_PLACEHOLDER
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>

            <div class="stock_forecast_result">
                {move || match state.get() {
                    ForecastState::Idle => ().into_any(),
                    ForecastState::Loading => view! {
                        <Flex gap=FlexGap::Small>
                            <Spinner />
                            <span>"정보를 불러오는 중입니다..."</span>
                        </Flex>
                    }.into_any(),
                    ForecastState::Done(text) => view! {
                        <div class="stock_forecast_answer">
                            {text.split('\n').map(|line| view! { <p>{line.to_string()}</p> }).collect_view()}
                        </div>
                    }.into_any(),
                    ForecastState::Failed(err) => view! {
                        <div class="stock_forecast_error">{err}</div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
