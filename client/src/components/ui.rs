//! Layout primitives: buttons, cards, badges, section headers, form fields.
//!
//! DESIGN
//! ======
//! Primitives own only their class composition. Pages pass content as
//! children and wire behavior through callbacks, so the same button or card
//! renders identically on every page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::contact::SelectOption;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Gradient fill.
    #[default]
    Primary,
    /// Glass background with a border.
    Outline,
    /// Transparent until hovered.
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    /// Square, icon-only.
    Icon,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Outline,
    Glass,
}

/// Compose the class list for a button.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Ghost => "btn--ghost",
    };
    let size = match size {
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Md => "btn--md",
        ButtonSize::Lg => "btn--lg",
        ButtonSize::Icon => "btn--icon",
    };
    join_classes(&["btn", variant, size, extra])
}

/// Compose the class list for a badge.
#[must_use]
pub fn badge_class(variant: BadgeVariant, extra: &str) -> String {
    let variant = match variant {
        BadgeVariant::Solid => "badge--solid",
        BadgeVariant::Outline => "badge--outline",
        BadgeVariant::Glass => "badge--glass",
    };
    join_classes(&["badge", variant, extra])
}

/// Join non-empty class fragments with single spaces.
#[must_use]
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    /// HTML `type` attribute.
    #[prop(default = "button")]
    kind: &'static str,
    #[prop(optional)] icon: Option<IconKind>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=button_class(variant, size, &class)
            type=kind
            title=title.clone()
            aria-label=title
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {icon.map(|icon| view! { <Icon kind=icon class="btn__icon"/> })}
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=join_classes(&["card", &class])>
            <div class="card__content">{children()}</div>
        </div>
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional)] icon: Option<IconKind>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant, &class)>
            {icon.map(|icon| view! { <Icon kind=icon class="badge__icon"/> })}
            {children()}
        </span>
    }
}

/// Rounded gradient tile holding a single icon.
#[component]
pub fn IconTile(kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=join_classes(&["icon-tile", &class])>
            <Icon kind=kind/>
        </div>
    }
}

/// Centered badge + two-line heading + lead paragraph used by most sections.
#[component]
pub fn SectionHeader(
    #[prop(optional)] badge: Option<&'static str>,
    #[prop(optional)] badge_icon: Option<IconKind>,
    title: &'static str,
    /// Second heading line rendered with the gradient text style.
    #[prop(optional)]
    highlight: Option<&'static str>,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class="section-header">
            {badge.map(|text| view! { <Badge icon=badge_icon.unwrap_or(IconKind::Star) class="section-header__badge">{text}</Badge> })}
            <h2 class="section-header__title">
                {title}
                {highlight.map(|text| view! { <span class="gradient-text section-header__highlight">{text}</span> })}
            </h2>
            {lead.map(|text| view! { <p class="section-header__lead">{text}</p> })}
        </header>
    }
}

/// Two-button call-to-action banner closing a page.
#[component]
pub fn CtaBanner(
    title: &'static str,
    highlight: &'static str,
    lead: &'static str,
    primary_label: &'static str,
    on_primary: Callback<()>,
    secondary_label: &'static str,
    on_secondary: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="container">
                <Card class="cta__card">
                    <h2 class="cta__title">
                        {title}
                        <span class="gradient-text">{highlight}</span>
                    </h2>
                    <p class="cta__lead">{lead}</p>
                    <div class="cta__actions">
                        <Button size=ButtonSize::Lg icon=IconKind::ArrowRight on_click=on_primary>
                            {primary_label}
                        </Button>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Lg on_click=on_secondary>
                            {secondary_label}
                        </Button>
                    </div>
                </Card>
            </div>
        </section>
    }
}

/// Bulleted checklist with check icons.
#[component]
pub fn CheckList(items: &'static [&'static str], #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <ul class=join_classes(&["check-list", &class])>
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="check-list__item">
                            <Icon kind=IconKind::CheckCircle class="check-list__icon"/>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Labelled single-line input bound to a string signal.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=id>{field_label(label, required)}</label>
            <input
                class="field__input"
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled multi-line input bound to a string signal.
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 6)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=id>{field_label(label, required)}</label>
            <textarea
                class="field__input field__input--multiline"
                id=id
                name=id
                rows=rows.to_string()
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Labelled `<select>` over a fixed option list with an empty placeholder.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    options: &'static [SelectOption],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=id>{label}</label>
            <select
                class="field__input field__select"
                id=id
                name=id
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true>{placeholder}</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Label text with a trailing asterisk for required fields.
#[must_use]
pub fn field_label(label: &str, required: bool) -> String {
    if required { format!("{label} *") } else { label.to_owned() }
}
