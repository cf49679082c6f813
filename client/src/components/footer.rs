//! Site footer: brand blurb, page link columns, socials, and legal bar.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::app::navigate_to;
use crate::content::contact::tel_href;
use crate::content::footer::{
    BLURB, CERTIFICATIONS, COPYRIGHT, FOOTER_STATS, LEGAL_LINKS, REGION, SECTIONS, SOCIAL_LINKS,
};
use crate::content::{COMPANY_EMAIL, COMPANY_NAME, COMPANY_PHONE, COMPANY_TAGLINE};
use crate::state::site::SiteState;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <span class="footer__logo-mark">
                            <Icon kind=IconKind::Phone/>
                        </span>
                        <div>
                            <h2 class="footer__name">{COMPANY_NAME}</h2>
                            <p class="footer__tagline">{COMPANY_TAGLINE}</p>
                        </div>
                    </div>
                    <p class="footer__blurb">{BLURB}</p>
                    <ul class="footer__contact">
                        <li>
                            <Icon kind=IconKind::Phone class="footer__contact-icon"/>
                            <a href=tel_href(COMPANY_PHONE)>{COMPANY_PHONE}</a>
                        </li>
                        <li>
                            <Icon kind=IconKind::Mail class="footer__contact-icon"/>
                            <a href=format!("mailto:{COMPANY_EMAIL}")>{COMPANY_EMAIL}</a>
                        </li>
                    </ul>
                    <ul class="footer__certs">
                        {CERTIFICATIONS
                            .iter()
                            .map(|(icon, text)| {
                                view! {
                                    <li class="footer__cert">
                                        <Icon kind=*icon class="footer__cert-icon"/>
                                        <span>{*text}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                {SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <div class="footer__section">
                                <h3 class="footer__section-title">{section.title}</h3>
                                <ul class="footer__links">
                                    {section
                                        .links
                                        .iter()
                                        .map(|link| {
                                            let page = link.page;
                                            view! {
                                                <li>
                                                    <button
                                                        class="footer__link"
                                                        on:click=move |_| navigate_to(site, page)
                                                    >
                                                        {link.label}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container footer__strip">
                <div class="footer__socials">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a class="footer__social" href=social.href aria-label=social.label>
                                    <Icon kind=social.icon/>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="footer__stats">
                    {FOOTER_STATS
                        .iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="footer__stat">
                                    <div class="footer__stat-number gradient-text">{*number}</div>
                                    <div class="footer__stat-label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="footer__legal">
                <div class="container footer__legal-inner">
                    <span>{COPYRIGHT}</span>
                    <span class="footer__legal-links">
                        {LEGAL_LINKS
                            .iter()
                            .map(|label| view! { <button class="footer__legal-link">{*label}</button> })
                            .collect_view()}
                    </span>
                    <span class="footer__region">
                        <Icon kind=IconKind::Globe class="footer__region-icon"/>
                        {REGION}
                    </span>
                </div>
            </div>
        </footer>
    }
}
