//! Floating button that returns the window to the top.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::state::site::SiteState;

/// Hidden until the page has scrolled past `SCROLL_TOP_THRESHOLD_PX`.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let visible = Memo::new(move |_| site.with(SiteState::scroll_top_visible));

    view! {
        <button
            class="scroll-top"
            class:scroll-top--visible=move || visible.get()
            aria-hidden=move || (!visible.get()).to_string()
            tabindex=move || if visible.get() { "0" } else { "-1" }
            title="Back to top"
            on:click=move |_| crate::util::scroll::scroll_to_top()
        >
            <Icon kind=IconKind::ArrowUp/>
        </button>
    }
}
