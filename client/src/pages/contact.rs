//! Contact page: inquiry form, contact channels, offices, FAQ.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use super::{FormStatus, bind_field, submit_form};
use crate::components::icons::{Icon, IconKind};
use crate::components::ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, IconTile, SectionHeader, SelectField, TextAreaField, TextField};
use crate::content::contact::{
    BUSINESS_HOURS, CONTACT_METHODS, ContactMethod, FAQS, OFFICES, REASONS, SERVICE_OPTIONS, TIMELINE_OPTIONS,
    directions_url, tel_href,
};
use crate::state::forms::ContactForm;
use crate::util::scroll::scroll_into_view;

/// Element id of the inquiry form card.
pub const CONTACT_FORM_ID: &str = "contact-form";

/// Channels featured in the hero; the sidebar lists all of them.
const HERO_METHODS: usize = 2;

const SENT_MESSAGE: &str = "Thanks! A specialist will reach out within one business day.";

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(FormStatus::Idle);

    view! {
        <div class="page page--contact">
            <section class="hero hero--compact">
                <div class="container hero__inner">
                    <Badge variant=BadgeVariant::Glass icon=IconKind::MessageSquare class="hero__badge">
                        "Get In Touch"
                    </Badge>
                    <h1 class="hero__title">
                        "Let's Start a " <span class="gradient-text">"Conversation"</span>
                    </h1>
                    <p class="hero__lead">
                        "Ready to transform your customer operations? Our experts are here to help "
                        "you find the perfect solution for your business needs."
                    </p>
                    <div class="grid grid--2 hero__lines">
                        {CONTACT_METHODS
                            .iter()
                            .take(HERO_METHODS)
                            .map(|method| view! { <MethodCard method=method/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container contact-layout">
                    <InquiryForm form=form status=status/>
                    <aside class="contact-sidebar">
                        <Card class="sidebar-card">
                            <h3 class="sidebar-card__title">"Quick Contact Options"</h3>
                            <ul class="sidebar-list">
                                {CONTACT_METHODS
                                    .iter()
                                    .map(|method| {
                                        view! {
                                            <li class="sidebar-list__item">
                                                <IconTile kind=method.icon class="icon-tile--sm"/>
                                                <div>
                                                    <div class="sidebar-list__title">{method.title}</div>
                                                    <div class="sidebar-list__detail">{method.contact}</div>
                                                    <div class="sidebar-list__note">{method.available}</div>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Card>
                        <Card class="sidebar-card">
                            <h3 class="sidebar-card__title">
                                <Icon kind=IconKind::Clock class="sidebar-card__icon"/>
                                "Business Hours"
                            </h3>
                            <dl class="hours">
                                {BUSINESS_HOURS
                                    .iter()
                                    .map(|(days, hours)| {
                                        view! {
                                            <div class="hours__row">
                                                <dt>{*days}</dt>
                                                <dd>{*hours}</dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        </Card>
                        <Card class="sidebar-card">
                            <h3 class="sidebar-card__title">"Why Choose Us?"</h3>
                            <ul class="sidebar-list">
                                {REASONS
                                    .iter()
                                    .map(|(title, detail)| {
                                        view! {
                                            <li class="sidebar-list__item">
                                                <Icon kind=IconKind::CheckCircle class="sidebar-list__check"/>
                                                <div>
                                                    <div class="sidebar-list__title">{*title}</div>
                                                    <div class="sidebar-list__note">{*detail}</div>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Card>
                    </aside>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        badge="Our Locations"
                        badge_icon=IconKind::MapPin
                        title="Visit Our "
                        highlight="Offices"
                    />
                    <div class="grid grid--3">
                        {OFFICES
                            .iter()
                            .map(|office| {
                                view! {
                                    <Card class="office">
                                        <h3 class="office__city">{office.city}</h3>
                                        <p class="office__line">
                                            <Icon kind=IconKind::MapPin class="office__icon"/>
                                            <span>{office.address} <br/> {office.locality}</span>
                                        </p>
                                        <p class="office__line">
                                            <Icon kind=IconKind::Phone class="office__icon"/>
                                            <a href=tel_href(office.phone)>{office.phone}</a>
                                        </p>
                                        <p class="office__line">
                                            <Icon kind=IconKind::Mail class="office__icon"/>
                                            <a href=format!("mailto:{}", office.email)>{office.email}</a>
                                        </p>
                                        <p class="office__line">
                                            <Icon kind=IconKind::Clock class="office__icon"/>
                                            {office.hours}
                                        </p>
                                        <a
                                            class="btn btn--outline btn--sm btn--block"
                                            href=directions_url(office)
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            <Icon kind=IconKind::MapPin class="btn__icon"/>
                                            "Get Directions"
                                        </a>
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
                        badge="FAQ"
                        badge_icon=IconKind::MessageSquare
                        title="Frequently Asked "
                        highlight="Questions"
                    />
                    <div class="grid grid--2">
                        {FAQS
                            .iter()
                            .map(|faq| {
                                view! {
                                    <Card class="faq">
                                        <h3 class="faq__question">{faq.question}</h3>
                                        <p class="faq__answer">{faq.answer}</p>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="faq__more">
                        <p>"Still have questions? We're here to help."</p>
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=Callback::new(|()| scroll_into_view(CONTACT_FORM_ID))
                        >
                            "Contact Support"
                        </Button>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn MethodCard(method: &'static ContactMethod) -> impl IntoView {
    view! {
        <Card class="method">
            <IconTile kind=method.icon/>
            <h3 class="method__title">{method.title}</h3>
            <p class="method__description">{method.description}</p>
            <p class="method__contact gradient-text">{method.contact}</p>
            <Badge variant=BadgeVariant::Outline>{method.available}</Badge>
        </Card>
    }
}

#[component]
fn InquiryForm(form: RwSignal<ContactForm>, status: RwSignal<FormStatus>) -> impl IntoView {
    let (name, on_name) = bind_field(form, "name", |f| f.name.as_str());
    let (email, on_email) = bind_field(form, "email", |f| f.email.as_str());
    let (company, on_company) = bind_field(form, "company", |f| f.company.as_str());
    let (phone, on_phone) = bind_field(form, "phone", |f| f.phone.as_str());
    let (service, on_service) = bind_field(form, "service", |f| f.service.as_str());
    let (timeline, on_timeline) = bind_field(form, "timeline", |f| f.timeline.as_str());
    let (message, on_message) = bind_field(form, "message", |f| f.message.as_str());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(form.with_untracked(|f| submit_form(f, SENT_MESSAGE)));
    };

    view! {
        <div id=CONTACT_FORM_ID class="contact-form">
            <Card class="form-card">
                <h2 class="form-card__title">
                    <Icon kind=IconKind::Send class="form-card__icon"/>
                    "Send Us a Message"
                </h2>
                <form class="form" on:submit=on_submit>
                    <div class="grid grid--2">
                        <TextField
                            id="name"
                            label="Full Name"
                            placeholder="Your full name"
                            value=name
                            on_input=on_name
                            required=true
                        />
                        <TextField
                            id="email"
                            label="Email Address"
                            input_type="email"
                            placeholder="your@company.com"
                            value=email
                            on_input=on_email
                            required=true
                        />
                        <TextField
                            id="company"
                            label="Company Name"
                            placeholder="Your company"
                            value=company
                            on_input=on_company
                        />
                        <TextField
                            id="phone"
                            label="Phone Number"
                            input_type="tel"
                            placeholder="(555) 123-4567"
                            value=phone
                            on_input=on_phone
                        />
                        <SelectField
                            id="service"
                            label="Service Interest"
                            options=SERVICE_OPTIONS
                            placeholder="Select a service"
                            value=service
                            on_change=on_service
                        />
                        <SelectField
                            id="timeline"
                            label="Timeline"
                            options=TIMELINE_OPTIONS
                            placeholder="When do you need this?"
                            value=timeline
                            on_change=on_timeline
                        />
                    </div>
                    <TextAreaField
                        id="message"
                        label="Project Details"
                        placeholder="Tell us about your specific needs, current challenges, and what you hope to achieve..."
                        value=message
                        on_input=on_message
                        required=true
                    />
                    <Button kind="submit" size=ButtonSize::Lg class="btn--block" icon=IconKind::Send>
                        "Send Message"
                    </Button>
                    <p class=move || status.with(FormStatus::class) role="status">
                        {move || status.with(|s| s.message().map(str::to_owned))}
                    </p>
                </form>
            </Card>
        </div>
    }
}
