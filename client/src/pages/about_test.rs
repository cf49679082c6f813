use super::*;

#[test]
fn timeline_alternates_sides() {
    assert!(timeline_side(0).ends_with("--left"));
    assert!(timeline_side(1).ends_with("--right"));
    assert_eq!(timeline_side(4), timeline_side(0));
}
