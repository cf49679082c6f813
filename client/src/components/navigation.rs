//! Fixed top navigation bar with theme toggle and mobile sheet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `SiteState`: highlights the current page,
//! switches pages, flips dark mode, and opens/closes the mobile sheet. The
//! bar turns opaque once the window has scrolled past a small threshold.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use super::ui::{Button, ButtonSize, ButtonVariant};
use crate::app::navigate_to;
use crate::content::{COMPANY_NAME, COMPANY_TAGLINE};
use crate::state::page::Page;
use crate::state::site::SiteState;

/// Class list for a desktop navigation link.
#[must_use]
pub fn nav_link_class(page: Page, current: Page) -> &'static str {
    if page == current { "nav__link nav__link--active" } else { "nav__link" }
}

/// Accessible label for the theme toggle.
#[must_use]
pub fn theme_toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode { "Switch to light mode" } else { "Switch to dark mode" }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let current = Memo::new(move |_| site.with(|s| s.page));
    let dark_mode = Memo::new(move |_| site.with(|s| s.dark_mode));
    let scrolled = Memo::new(move |_| site.with(SiteState::nav_scrolled));
    let menu_open = Memo::new(move |_| site.with(|s| s.mobile_menu_open));

    let go_contact = Callback::new(move |()| navigate_to(site, Page::Contact));
    let on_toggle_theme = Callback::new(move |()| {
        let next = crate::util::dark_mode::toggle(site.with_untracked(|s| s.dark_mode));
        site.update(|s| s.dark_mode = next);
    });
    let on_open_menu = Callback::new(move |()| site.update(|s| s.mobile_menu_open = true));
    let on_close_menu = Callback::new(move |()| site.update(|s| s.mobile_menu_open = false));

    view! {
        <header class="nav" class:nav--scrolled=move || scrolled.get()>
            <nav class="container nav__inner">
                <button class="nav__brand" on:click=move |_| navigate_to(site, Page::Home)>
                    <span class="nav__logo">
                        <Icon kind=IconKind::Phone/>
                    </span>
                    <span class="nav__brand-text">
                        <span class="nav__brand-name">{COMPANY_NAME}</span>
                        <span class="nav__brand-tagline">{COMPANY_TAGLINE}</span>
                    </span>
                </button>

                <div class="nav__links">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class=move || nav_link_class(page, current.get())
                                    aria-current=move || (current.get() == page).then_some("page")
                                    on:click=move |_| navigate_to(site, page)
                                >
                                    {page.label()}
                                    <Show when=move || current.get() == page>
                                        <span class="nav__underline"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav__actions">
                    <button
                        class="btn btn--ghost btn--icon nav__theme"
                        class:nav__theme--dark=move || dark_mode.get()
                        title=move || theme_toggle_label(dark_mode.get())
                        aria-label=move || theme_toggle_label(dark_mode.get())
                        on:click=move |_| on_toggle_theme.run(())
                    >
                        {move || {
                            if dark_mode.get() {
                                view! { <Icon kind=IconKind::Sun/> }.into_any()
                            } else {
                                view! { <Icon kind=IconKind::Moon/> }.into_any()
                            }
                        }}
                    </button>

                    <div class="nav__cta">
                        <Button variant=ButtonVariant::Outline icon=IconKind::Mail on_click=go_contact>
                            "Contact Us"
                        </Button>
                        <Button icon=IconKind::Phone on_click=go_contact>
                            "Get Quote"
                        </Button>
                    </div>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="nav__menu-toggle"
                        title="Open menu"
                        icon=IconKind::Menu
                        on_click=on_open_menu
                    >
                        ""
                    </Button>
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <MobileSheet current=current on_close=on_close_menu/>
            </Show>
        </header>
    }
}

/// Slide-in page list for narrow screens. Clicking the backdrop closes it.
#[component]
fn MobileSheet(current: Memo<Page>, on_close: Callback<()>) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let go_contact = Callback::new(move |()| navigate_to(site, Page::Contact));

    view! {
        <div class="sheet-backdrop" on:click=move |_| on_close.run(())>
            <aside class="sheet" on:click=move |ev| ev.stop_propagation() role="dialog" aria-modal="true">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    class="sheet__close"
                    title="Close menu"
                    icon=IconKind::X
                    on_click=on_close
                >
                    ""
                </Button>
                <div class="sheet__links">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="sheet__link"
                                    class:sheet__link--active=move || current.get() == page
                                    on:click=move |_| navigate_to(site, page)
                                >
                                    {page.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="sheet__actions">
                    <Button variant=ButtonVariant::Outline class="btn--block" icon=IconKind::Mail on_click=go_contact>
                        "Contact Us"
                    </Button>
                    <Button class="btn--block" icon=IconKind::Phone on_click=go_contact>
                        "Get Quote"
                    </Button>
                </div>
            </aside>
        </div>
    }
}
