use leptos::prelude::*;

#[component]
pub fn ProjIntroPage() -> impl IntoView {
    view! {
        <div class="proj_intro_wrapper">
            <img
                class="proj_intro_contents"
                src="assets/imgs/proj_intro/paragraph.svg"
                alt="프로젝트 소개"
            />
        </div>
    }
}
