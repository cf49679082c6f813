use super::*;

#[test]
fn stars_are_capped_at_five() {
    assert_eq!(filled_stars(4), 4);
    assert_eq!(filled_stars(9), 5);
}

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(initials("Sarah Johnson"), "SJ");
    assert_eq!(initials("  jo  ann smith "), "JAS");
    assert_eq!(initials(""), "");
}
