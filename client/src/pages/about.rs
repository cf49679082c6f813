//! Company story: mission pillars, values, timeline, leadership.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use super::home::initials;
use crate::app::navigate_to;
use crate::components::icons::IconKind;
use crate::components::ui::{Badge, BadgeVariant, Card, CtaBanner, IconTile, SectionHeader};
use crate::content::about::{LEADERSHIP, PILLARS, TIMELINE, VALUES};
use crate::state::page::Page;
use crate::state::site::SiteState;

/// Timeline entries alternate sides, starting on the left.
#[must_use]
pub fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 { "timeline__item timeline__item--left" } else { "timeline__item timeline__item--right" }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let go_careers = Callback::new(move |()| navigate_to(site, Page::Careers));
    let go_contact = Callback::new(move |()| navigate_to(site, Page::Contact));

    view! {
        <div class="page page--about">
            <section class="hero hero--compact">
                <div class="container hero__inner">
                    <Badge variant=BadgeVariant::Glass icon=IconKind::Building class="hero__badge">
                        "About CallCenter Pro"
                    </Badge>
                    <h1 class="hero__title">
                        "Building " <span class="gradient-text">"Excellence"</span> " Since 2015"
                    </h1>
                    <p class="hero__lead">
                        "We've grown from a small team with big dreams to an industry leader, "
                        "serving 500+ clients with innovative call center and collection solutions."
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container grid grid--3">
                    {PILLARS
                        .iter()
                        .map(|pillar| {
                            view! {
                                <Card class="pillar">
                                    <IconTile kind=pillar.icon/>
                                    <h3 class="pillar__title">{pillar.title}</h3>
                                    <p class="pillar__description">{pillar.description}</p>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        badge="Our Values"
                        badge_icon=IconKind::Heart
                        title="What Drives "
                        highlight="Us Forward"
                        lead="Our core values guide every decision we make and every service we deliver."
                    />
                    <div class="grid grid--2">
                        {VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <Card class="value">
                                        <IconTile kind=value.icon/>
                                        <div>
                                            <h3 class="value__title">{value.title}</h3>
                                            <p class="value__description">{value.description}</p>
                                        </div>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        badge="Our Journey"
                        badge_icon=IconKind::Calendar
                        title="A Decade of "
                        highlight="Growth"
                    />
                    <ol class="timeline">
                        {TIMELINE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <li class=timeline_side(index)>
                                        <span class="timeline__dot"></span>
                                        <Card class="timeline__card">
                                            <div class="timeline__year gradient-text">{entry.year}</div>
                                            <h3 class="timeline__title">{entry.title}</h3>
                                            <p class="timeline__description">{entry.description}</p>
                                            <Badge variant=BadgeVariant::Outline>{entry.milestone}</Badge>
                                        </Card>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        badge="Leadership"
                        badge_icon=IconKind::Users
                        title="Meet Our "
                        highlight="Leadership Team"
                    />
                    <div class="grid grid--3">
                        {LEADERSHIP
                            .iter()
                            .map(|leader| {
                                view! {
                                    <Card class="leader">
                                        <span class="avatar avatar--lg">{initials(leader.name)}</span>
                                        <h3 class="leader__name">{leader.name}</h3>
                                        <p class="leader__role gradient-text">{leader.role}</p>
                                        <p class="leader__bio">{leader.bio}</p>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Join Our "
                highlight="Growing Team"
                lead="Be part of a company that values innovation, integrity, and professional growth."
                primary_label="View Open Positions"
                on_primary=go_careers
                secondary_label="Contact Us"
                on_secondary=go_contact
            />
        </div>
    }
}
