use crate::domain::a001_report::lookup::{
    text_lines, HttpReportSource, ReportLookup, ReportPanel, LOADING_TEXT,
};
use crate::shared::date_utils::parse_input_date;
use contracts::domain::a001_report::{AgentRole, ReportSelection, TimeSlot};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Страница "보고서 조회": календарь и список агентов слева, отчёт справа.
///
/// Selection and panel live in this component, so leaving the page discards them.
#[component]
pub fn ReportPage() -> impl IntoView {
    let selection = RwSignal::new(ReportSelection::new());
    let panel = RwSignal::new(ReportPanel::Prompt);
    let lookup = StoredValue::new(ReportLookup::new(HttpReportSource));

    let try_lookup = move || {
        let current = selection.get_untracked();
        if !current.is_complete() {
            return;
        }
        let lookup = lookup.get_value();
        spawn_local(async move {
            lookup.run(&current, move |next| panel.set(next)).await;
        });
    };

    let on_date_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        log::debug!("selected date: {}", value);
        selection.update(|s| s.set_date(parse_input_date(&value)));
        try_lookup();
    };

    let on_agent_slot = move |role: AgentRole, slot: TimeSlot| {
        log::debug!("selected agent: {} {}", role, slot.token());
        selection.update(|s| s.set_agent_slot(role, slot));
        try_lookup();
    };

    let is_selected = move |role: AgentRole, slot: TimeSlot| {
        selection.with(|s| s.agent_role == Some(role) && s.time_slot == Some(slot))
    };

    view! {
        <div class="report_wrapper">
            <img class="report_title" src="assets/imgs/report/title.svg" alt="보고서 조회" />

            <Show when=move || panel.get() == ReportPanel::Pending>
                <div class="info_bar_container">
                    <div class="info_bar_text">{LOADING_TEXT}</div>
                    <div class="info_bar_bar"></div>
                </div>
            </Show>

            <div class="report_main_area">
                <div class="report_left_area">
                    <div class="report_calendar">
                        <input type="date" class="report_date_input" on:change=on_date_change />
                    </div>

                    <div class="report_toggle_list">
                        {AgentRole::all().into_iter().map(|role| view! {
                            <details class="report_toggle_details">
                                <summary class="report_toggle_title">{role.display_name()}</summary>
                                <div class="report_toggle_items">
                                    {TimeSlot::all().into_iter().map(|slot| view! {
                                        <div
                                            class="report_toggle_item"
                                            class:report_toggle_item--selected=move || is_selected(role, slot)
                                            on:click=move |_| on_agent_slot(role, slot)
                                        >
                                            {slot.label()}
                                        </div>
                                    }).collect_view()}
                                </div>
                            </details>
                        }).collect_view()}
                    </div>
                </div>

                <div class="report_right_area">
                    {move || {
                        let current = panel.get();
                        match current.placeholder() {
                            Some(text) => view! {
                                <div class="report_right_area_temp">
                                    {render_lines(text)}
                                </div>
                            }.into_any(),
                            None => match current {
                                ReportPanel::Document(text) => view! {
                                    <div class="report_document">{render_lines(&text)}</div>
                                }.into_any(),
                                _ => ().into_any(),
                            },
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn render_lines(text: &str) -> impl IntoView {
    let lines: Vec<String> = text_lines(text).into_iter().map(str::to_string).collect();
    let last = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {line}
                {(i < last).then(|| view! { <br /> })}
            }
        })
        .collect_view()
}
