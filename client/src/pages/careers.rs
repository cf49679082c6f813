//! Careers page: perks, culture, open positions, and the application form.
//!
//! One job card can be expanded at a time. "Apply Now" copies the job title
//! into the application draft and scrolls the form into view.

#[cfg(test)]
#[path = "careers_test.rs"]
mod careers_test;

use leptos::prelude::*;

use super::{FormStatus, bind_field, submit_form};
use crate::components::icons::{Icon, IconKind};
use crate::components::ui::{Badge, BadgeVariant, Button, ButtonSize, Card, CheckList, IconTile, SectionHeader, TextAreaField, TextField};
use crate::content::careers::{CULTURE, JOBS, Job, PERKS};
use crate::state::forms::{ApplicationForm, SiteForm};
use crate::util::scroll::scroll_into_view;

/// Element id of the application form section.
pub const APPLICATION_FORM_ID: &str = "application-form";

const SENT_MESSAGE: &str = "Thanks for applying! Our recruiting team will be in touch.";

/// Expanding the open job collapses it; any other job replaces it.
#[must_use]
pub fn toggle_selected_job(current: Option<u32>, id: u32) -> Option<u32> {
    if current == Some(id) { None } else { Some(id) }
}

#[must_use]
pub fn details_label(expanded: bool) -> &'static str {
    if expanded { "Hide Details" } else { "View Details" }
}

#[component]
pub fn CareersPage() -> impl IntoView {
    let selected = RwSignal::new(None::<u32>);
    let form = RwSignal::new(ApplicationForm::default());
    let status = RwSignal::new(FormStatus::Idle);

    let on_apply = Callback::new(move |job: &'static Job| {
        form.update(|f| {
            f.set("position", job.title.to_owned());
        });
        scroll_into_view(APPLICATION_FORM_ID);
    });

    view! {
        <div class="page page--careers">
            <section class="hero hero--compact">
                <div class="container hero__inner">
                    <Badge variant=BadgeVariant::Glass icon=IconKind::Users class="hero__badge">
                        "Join Our Team"
                    </Badge>
                    <h1 class="hero__title">
                        "Build Your " <span class="gradient-text">"Career"</span> " With Us"
                    </h1>
                    <p class="hero__lead">
                        "Join a team that values innovation, growth, and making a difference in "
                        "customer experience and financial services."
                    </p>
                    <div class="hero__actions">
                        <Button
                            size=ButtonSize::Lg
                            icon=IconKind::Briefcase
                            on_click=Callback::new(|()| scroll_into_view("open-positions"))
                        >
                            "View Open Positions"
                        </Button>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        badge="Benefits"
                        badge_icon=IconKind::Heart
                        title="Why Work "
                        highlight="With Us"
                        lead="We take care of our people so they can take care of our clients."
                    />
                    <div class="grid grid--3">
                        {PERKS
                            .iter()
                            .map(|perk| {
                                view! {
                                    <Card class="perk">
                                        <IconTile kind=perk.icon/>
                                        <h3 class="perk__title">{perk.title}</h3>
                                        <p class="perk__description">{perk.description}</p>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader badge="Culture" badge_icon=IconKind::Star title="Our " highlight="Culture"/>
                    <div class="grid grid--4">
                        {CULTURE
                            .iter()
                            .map(|point| {
                                view! {
                                    <Card class="culture">
                                        <h3 class="culture__title">{point.title}</h3>
                                        <p class="culture__description">{point.description}</p>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section" id="open-positions">
                <div class="container">
                    <SectionHeader
                        badge="Open Positions"
                        badge_icon=IconKind::Briefcase
                        title="Current "
                        highlight="Opportunities"
                    />
                    <div class="jobs">
                        {JOBS
                            .iter()
                            .map(|job| view! { <JobCard job=job selected=selected on_apply=on_apply/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <ApplicationSection form=form status=status/>
        </div>
    }
}

#[component]
fn JobCard(job: &'static Job, selected: RwSignal<Option<u32>>, on_apply: Callback<&'static Job>) -> impl IntoView {
    let expanded = Memo::new(move |_| selected.get() == Some(job.id));

    view! {
        <Card class="job">
            <div class="job__header">
                <div>
                    <h3 class="job__title">{job.title}</h3>
                    <div class="job__meta">
                        <Badge variant=BadgeVariant::Outline icon=IconKind::Building>{job.department}</Badge>
                        <span class="job__meta-item">
                            <Icon kind=IconKind::MapPin class="job__meta-icon"/>
                            {job.location}
                        </span>
                        <span class="job__meta-item">
                            <Icon kind=IconKind::Clock class="job__meta-icon"/>
                            {job.employment_type}
                        </span>
                        <span class="job__meta-item">
                            <Icon kind=IconKind::DollarSign class="job__meta-icon"/>
                            {job.salary}
                        </span>
                    </div>
                </div>
                <div class="job__actions">
                    <button
                        class="btn btn--outline btn--md"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| selected.update(|s| *s = toggle_selected_job(*s, job.id))
                    >
                        {move || details_label(expanded.get())}
                    </button>
                    <Button icon=IconKind::Send on_click=Callback::new(move |()| on_apply.run(job))>
                        "Apply Now"
                    </Button>
                </div>
            </div>
            <p class="job__description">{job.description}</p>
            <Show when=move || expanded.get()>
                <div class="job__details">
                    <p class="job__experience">
                        <strong>"Experience: "</strong>
                        {job.experience}
                    </p>
                    <div class="grid grid--2">
                        <div>
                            <h4 class="job__details-title">"Requirements"</h4>
                            <CheckList items=job.requirements/>
                        </div>
                        <div>
                            <h4 class="job__details-title">"Benefits"</h4>
                            <CheckList items=job.benefits/>
                        </div>
                    </div>
                </div>
            </Show>
        </Card>
    }
}

#[component]
fn ApplicationSection(form: RwSignal<ApplicationForm>, status: RwSignal<FormStatus>) -> impl IntoView {
    let (name, on_name) = bind_field(form, "name", |f| f.name.as_str());
    let (email, on_email) = bind_field(form, "email", |f| f.email.as_str());
    let (phone, on_phone) = bind_field(form, "phone", |f| f.phone.as_str());
    let (position, on_position) = bind_field(form, "position", |f| f.position.as_str());
    let (experience, on_experience) = bind_field(form, "experience", |f| f.experience.as_str());
    let (cover_letter, on_cover_letter) = bind_field(form, "coverLetter", |f| f.cover_letter.as_str());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(form.with_untracked(|f| submit_form(f, SENT_MESSAGE)));
    };

    view! {
        <section class="section" id=APPLICATION_FORM_ID>
            <div class="container container--narrow">
                <SectionHeader
                    badge="Apply"
                    badge_icon=IconKind::FileText
                    title="Submit Your "
                    highlight="Application"
                    lead="Tell us about yourself and the role you're interested in."
                />
                <Card class="form-card">
                    <form class="form" on:submit=on_submit>
                        <div class="grid grid--2">
                            <TextField id="name" label="Full Name" value=name on_input=on_name required=true/>
                            <TextField
                                id="email"
                                label="Email Address"
                                input_type="email"
                                value=email
                                on_input=on_email
                                required=true
                            />
                            <TextField
                                id="phone"
                                label="Phone Number"
                                input_type="tel"
                                value=phone
                                on_input=on_phone
                                required=true
                            />
                            <TextField
                                id="position"
                                label="Position Applied For"
                                value=position
                                on_input=on_position
                                required=true
                            />
                        </div>
                        <TextField
                            id="experience"
                            label="Years of Experience"
                            placeholder="e.g. 3 years"
                            value=experience
                            on_input=on_experience
                            required=true
                        />
                        <TextAreaField
                            id="coverLetter"
                            label="Cover Letter"
                            placeholder="Tell us why you'd be a great fit..."
                            value=cover_letter
                            on_input=on_cover_letter
                            required=true
                        />
                        <Button kind="submit" size=ButtonSize::Lg class="btn--block" icon=IconKind::Send>
                            "Submit Application"
                        </Button>
                        <p class=move || status.with(FormStatus::class) role="status">
                            {move || status.with(|s| s.message().map(str::to_owned))}
                        </p>
                    </form>
                </Card>
                <p class="form-note">
                    <Icon kind=IconKind::Shield class="form-note__icon"/>
                    "Applications stay in your browser session; nothing is uploaded."
                </p>
            </div>
        </section>
    }
}
