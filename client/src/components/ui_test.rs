use super::*;

#[test]
fn join_classes_skips_blank_fragments() {
    assert_eq!(join_classes(&["card", "", "  ", "card--wide "]), "card card--wide");
}

#[test]
fn button_class_defaults_to_primary_medium() {
    assert_eq!(
        button_class(ButtonVariant::default(), ButtonSize::default(), ""),
        "btn btn--primary btn--md"
    );
}

#[test]
fn button_class_appends_extra_classes() {
    assert_eq!(
        button_class(ButtonVariant::Outline, ButtonSize::Lg, "glass"),
        "btn btn--outline btn--lg glass"
    );
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Icon, ""), "btn btn--ghost btn--icon");
}

#[test]
fn badge_class_variants() {
    assert_eq!(badge_class(BadgeVariant::Solid, ""), "badge badge--solid");
    assert_eq!(badge_class(BadgeVariant::Glass, "post-card__category"), "badge badge--glass post-card__category");
}

#[test]
fn field_label_marks_required_fields() {
    assert_eq!(field_label("Full Name", true), "Full Name *");
    assert_eq!(field_label("Company Name", false), "Company Name");
}
