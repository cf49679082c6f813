use super::*;

#[test]
fn toggling_the_open_job_collapses_it() {
    assert_eq!(toggle_selected_job(Some(2), 2), None);
}

#[test]
fn toggling_another_job_replaces_the_open_one() {
    assert_eq!(toggle_selected_job(None, 3), Some(3));
    assert_eq!(toggle_selected_job(Some(1), 4), Some(4));
}

#[test]
fn details_button_label_tracks_expansion() {
    assert_eq!(details_label(false), "View Details");
    assert_eq!(details_label(true), "Hide Details");
}

#[test]
fn applying_fills_position_with_job_title() {
    let job = &JOBS[1];
    let mut form = ApplicationForm::default();
    assert!(form.set("position", job.title.to_owned()));
    assert_eq!(form.position, "Collections Specialist");
    assert_eq!(form.missing_required(), vec!["name", "email", "phone", "experience", "coverLetter"]);
}
