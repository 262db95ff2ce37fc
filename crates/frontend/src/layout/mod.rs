pub mod global_context;
pub mod left;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
///
/// The sidebar exists only while the active page carries chrome; the landing
/// page gets the whole viewport.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send + Sync,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout" class:app-layout--full=move || !ctx.chrome_mounted()>
            <Show when=move || ctx.chrome_mounted()>
                <aside class="app-sidebar">{left()}</aside>
            </Show>
            <main class="app-main">{center()}</main>
        </div>
    }
}
