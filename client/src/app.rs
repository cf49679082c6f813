//! Root application component, page switch, and browser start-up effects.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    background::BackgroundOrbs, footer::Footer, loading_splash::LoadingSplash, navigation::Navigation,
    scroll_top::ScrollTopButton,
};
use crate::content::COMPANY_NAME;
use crate::pages::{
    about::AboutPage, blog::BlogPage, careers::CareersPage, contact::ContactPage, home::HomePage,
    services::ServicesPage,
};
use crate::state::page::Page;
use crate::state::site::SiteState;
use crate::util::{dark_mode, scroll};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Switch to `page`, close the mobile sheet, and scroll back to the top.
///
/// Shared by every link and button that changes page.
pub fn navigate_to(site: RwSignal<SiteState>, page: Page) {
    if site.try_update(|s| s.navigate(page)).unwrap_or(false) {
        log::debug!("page -> {}", page.id());
    }
    scroll::scroll_to_top();
}

/// Root application component.
///
/// Provides the shared `SiteState` and renders the site for every path;
/// paths other than `/` fall back to the same view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = RwSignal::new(SiteState::default());
    provide_context(site);

    view! {
        <Stylesheet id="leptos" href="/pkg/callcenter-site.css"/>
        <Meta
            name="description"
            content="Professional call center and compliant bank collection services."
        />

        <Router>
            <Routes fallback=Site>
                <Route path=StaticSegment("") view=Site/>
            </Routes>
        </Router>
    }
}

/// Splash while booting, then the full layout with the current page.
#[component]
fn Site() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let loading = Memo::new(move |_| site.with(|s| s.loading));
    let current = Memo::new(move |_| site.with(|s| s.page));

    install_browser_effects(site);

    view! {
        <Title text=move || format!("{} | {COMPANY_NAME}", current.get().label())/>
        <Show when=move || !loading.get() fallback=LoadingSplash>
            <div class="site">
                <BackgroundOrbs/>
                <Navigation/>
                <main class="site__main">
                    {move || {
                        let page = current.get();
                        view! { <div class="page-transition" data-page=page.id()>{render_page(page)}</div> }
                    }}
                </main>
                <Footer/>
                <ScrollTopButton/>
            </div>
        </Show>
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Services => view! { <ServicesPage/> }.into_any(),
        Page::Careers => view! { <CareersPage/> }.into_any(),
        Page::Blog => view! { <BlogPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
    }
}

/// Restore the theme, start the splash timer, and track scroll and Escape.
///
/// Effects only run in the browser, so SSR always renders the splash with
/// the light theme.
fn install_browser_effects(site: RwSignal<SiteState>) {
    Effect::new(move |_| {
        let stored = dark_mode::read_preference();
        dark_mode::apply(stored);
        site.update(|s| {
            s.dark_mode = stored;
            s.scroll_y = scroll::scroll_y();
        });
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::state::site::SPLASH_DURATION_MS;

        gloo_timers::callback::Timeout::new(SPLASH_DURATION_MS, move || {
            site.update(|s| s.loading = false);
        })
        .forget();

        let _scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let y = scroll::scroll_y();
            site.update(|s| s.scroll_y = y);
        });
        let _keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && site.with_untracked(|s| s.mobile_menu_open) {
                site.update(|s| s.mobile_menu_open = false);
            }
        });
    });
}
