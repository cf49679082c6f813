//! Service catalog: call-center and collection offerings, industries, benefits.

use leptos::prelude::*;

use crate::app::navigate_to;
use crate::components::icons::IconKind;
use crate::components::ui::{Badge, BadgeVariant, Card, CheckList, CtaBanner, IconTile, SectionHeader};
use crate::content::Offering;
use crate::content::services::{BENEFITS, CALL_CENTER_SERVICES, COLLECTION_SERVICES, INDUSTRIES, SERVICE_LINES};
use crate::state::page::Page;
use crate::state::site::SiteState;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let go_contact = Callback::new(move |()| navigate_to(site, Page::Contact));
    let go_about = Callback::new(move |()| navigate_to(site, Page::About));

    view! {
        <div class="page page--services">
            <section class="hero hero--compact">
                <div class="container hero__inner">
                    <Badge variant=BadgeVariant::Glass icon=IconKind::Briefcase class="hero__badge">
                        "Our Services"
                    </Badge>
                    <h1 class="hero__title">
                        "Solutions That " <span class="gradient-text">"Drive Results"</span>
                    </h1>
                    <p class="hero__lead">
                        "Comprehensive call center and collection services designed to "
                        "enhance customer experience and maximize recovery."
                    </p>
                    <div class="grid grid--2 hero__lines">
                        {SERVICE_LINES
                            .iter()
                            .map(|line| {
                                view! {
                                    <Card class="service-line">
                                        <IconTile kind=line.icon/>
                                        <h3 class="service-line__title">{line.title}</h3>
                                        <p class="service-line__description">{line.description}</p>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <OfferingSection
                badge="Call Center"
                badge_icon=IconKind::Headphones
                title="Call Center "
                highlight="Solutions"
                items=CALL_CENTER_SERVICES
            />
            <OfferingSection
                badge="Collections"
                badge_icon=IconKind::CreditCard
                title="Bank Collection "
                highlight="Services"
                items=COLLECTION_SERVICES
            />

            <section class="section">
                <div class="container">
                    <SectionHeader
                        badge="Industries"
                        badge_icon=IconKind::Building
                        title="Industry "
                        highlight="Expertise"
                        lead="Specialized knowledge across the sectors we serve."
                    />
                    <div class="grid grid--4">
                        {INDUSTRIES
                            .iter()
                            .map(|industry| {
                                view! {
                                    <Card class="industry">
                                        <IconTile kind=industry.icon/>
                                        <h3 class="industry__title">{industry.title}</h3>
                                        <p class="industry__description">{industry.description}</p>
                                        <div class="industry__sectors">
                                            {industry
                                                .sectors
                                                .iter()
                                                .map(|sector| view! { <Badge variant=BadgeVariant::Outline>{*sector}</Badge> })
                                                .collect_view()}
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
                        badge="Why Choose Us"
                        badge_icon=IconKind::Award
                        title="Measurable "
                        highlight="Benefits"
                    />
                    <div class="grid grid--4">
                        {BENEFITS
                            .iter()
                            .map(|benefit| {
                                view! {
                                    <Card class="benefit">
                                        <IconTile kind=benefit.icon/>
                                        <div class="benefit__metric gradient-text">{benefit.metric}</div>
                                        <h3 class="benefit__title">{benefit.title}</h3>
                                        <p class="benefit__description">{benefit.description}</p>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Ready to "
                highlight="Get Started?"
                lead="Let's discuss how our services can help you reach your business goals."
                primary_label="Request a Quote"
                on_primary=go_contact
                secondary_label="Learn More About Us"
                on_secondary=go_about
            />
        </div>
    }
}

#[component]
fn OfferingSection(
    badge: &'static str,
    badge_icon: IconKind,
    title: &'static str,
    highlight: &'static str,
    items: &'static [Offering],
) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <SectionHeader badge=badge badge_icon=badge_icon title=title highlight=highlight/>
                <div class="grid grid--2">
                    {items
                        .iter()
                        .map(|offering| {
                            view! {
                                <Card class="offering">
                                    <IconTile kind=offering.icon/>
                                    <h3 class="offering__title">{offering.title}</h3>
                                    <p class="offering__description">{offering.description}</p>
                                    <CheckList items=offering.features class="offering__features"/>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
