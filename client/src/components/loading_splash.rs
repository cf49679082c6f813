//! Full-screen splash shown while the site boots.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::{COMPANY_NAME, COMPANY_TAGLINE};

#[component]
pub fn LoadingSplash() -> impl IntoView {
    view! {
        <div class="splash" role="status" aria-live="polite">
            <div class="splash__content">
                <div class="splash__logo">
                    <span class="splash__spinner">
                        <Icon kind=IconKind::Phone/>
                    </span>
                </div>
                <h1 class="splash__title">{COMPANY_NAME}</h1>
                <p class="splash__tagline">{COMPANY_TAGLINE}</p>
            </div>
        </div>
    }
}
