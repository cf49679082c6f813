//! Slow-drifting decorative orbs behind the page content.
//!
//! Purely cosmetic; motion comes from CSS keyframes so nothing here runs
//! per frame.

use leptos::prelude::*;

/// `(modifier class, animation duration in seconds)` per orb.
const ORBS: [(&str, u32); 3] = [("orb--primary", 20), ("orb--accent", 25), ("orb--small", 15)];

#[component]
pub fn BackgroundOrbs() -> impl IntoView {
    view! {
        <div class="orbs" aria-hidden="true">
            {ORBS
                .iter()
                .map(|(modifier, secs)| {
                    view! {
                        <div
                            class=format!("orb {modifier}")
                            style=format!("animation-duration: {secs}s")
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
