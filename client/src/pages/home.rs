//! Landing page: hero, headline stats, core services, testimonials.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::navigate_to;
use crate::components::icons::{Icon, IconKind};
use crate::components::ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CheckList, CtaBanner, IconTile, SectionHeader};
use crate::content::home::{SERVICES, STATS, TESTIMONIALS, TRUST_BADGES};
use crate::state::page::Page;
use crate::state::site::SiteState;

/// Number of filled stars for a rating, clamped to five.
#[must_use]
pub fn filled_stars(rating: u8) -> usize {
    usize::from(rating.min(5))
}

/// Initials shown in a testimonial avatar, e.g. `"Sarah Johnson"` -> `"SJ"`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let go_contact = Callback::new(move |()| navigate_to(site, Page::Contact));
    let go_services = Callback::new(move |()| navigate_to(site, Page::Services));
    let go_about = Callback::new(move |()| navigate_to(site, Page::About));

    view! {
        <div class="page page--home">
            <section class="hero">
                <div class="container hero__inner">
                    <Badge variant=BadgeVariant::Glass icon=IconKind::Zap class="hero__badge">
                        "Trusted by 500+ Businesses"
                    </Badge>
                    <h1 class="hero__title">
                        "Professional " <span class="gradient-text">"Call Center"</span> <br/>
                        "& Collection Services"
                    </h1>
                    <p class="hero__lead">
                        "Elevate your customer experience and maximize debt recovery with our "
                        "cutting-edge call center solutions and compliant collection services."
                    </p>
                    <div class="hero__actions">
                        <Button size=ButtonSize::Lg icon=IconKind::ArrowRight on_click=go_contact>
                            "Get Started Today"
                        </Button>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Lg on_click=go_services>
                            "View Services"
                        </Button>
                    </div>
                    <ul class="hero__trust">
                        {TRUST_BADGES
                            .iter()
                            .map(|text| {
                                view! {
                                    <li class="hero__trust-item">
                                        <Icon kind=IconKind::CheckCircle class="hero__trust-icon"/>
                                        {*text}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </section>

            <section class="section stats">
                <div class="container grid grid--4">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <Card class="stat">
                                    <IconTile kind=stat.icon class="stat__icon"/>
                                    <div class="stat__number gradient-text">{stat.number}</div>
                                    <div class="stat__label">{stat.label}</div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        badge="Our Services"
                        badge_icon=IconKind::Target
                        title="Comprehensive Solutions for "
                        highlight="Your Business"
                        lead="From customer support to debt recovery, we deliver results that matter."
                    />
                    <div class="grid grid--2">
                        {SERVICES
                            .iter()
                            .map(|service| {
                                view! {
                                    <Card class="offering">
                                        <IconTile kind=service.icon/>
                                        <h3 class="offering__title">{service.title}</h3>
                                        <p class="offering__description">{service.description}</p>
                                        <CheckList items=service.features class="offering__features"/>
                                        <Button variant=ButtonVariant::Ghost icon=IconKind::ArrowRight on_click=go_services>
                                            "Learn More"
                                        </Button>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section testimonials">
                <div class="container">
                    <SectionHeader
                        badge="Testimonials"
                        badge_icon=IconKind::MessageSquare
                        title="What Our "
                        highlight="Clients Say"
                    />
                    <div class="grid grid--3">
                        {TESTIMONIALS
                            .iter()
                            .map(|t| {
                                view! {
                                    <Card class="testimonial">
                                        <div class="testimonial__stars" aria-label=format!("{} out of 5 stars", t.rating)>
                                            {(0..filled_stars(t.rating))
                                                .map(|_| view! { <Icon kind=IconKind::Star class="testimonial__star"/> })
                                                .collect_view()}
                                        </div>
                                        <blockquote class="testimonial__quote">{t.content}</blockquote>
                                        <div class="testimonial__author">
                                            <span class="avatar">{initials(t.name)}</span>
                                            <div>
                                                <div class="testimonial__name">{t.name}</div>
                                                <div class="testimonial__role">{format!("{}, {}", t.role, t.company)}</div>
                                            </div>
                                        </div>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Ready to Transform "
                highlight="Your Operations?"
                lead="Join hundreds of businesses that trust us with their customer communications and collections."
                primary_label="Start Your Journey"
                on_primary=go_contact
                secondary_label="Learn About Us"
                on_secondary=go_about
            />
        </div>
    }
}
