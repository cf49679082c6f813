use std::collections::HashSet;

use super::*;

#[test]
fn all_lists_each_icon_once() {
    let unique: HashSet<_> = IconKind::ALL.iter().collect();
    assert_eq!(unique.len(), IconKind::ALL.len());
}

#[test]
fn every_icon_has_path_data() {
    for kind in IconKind::ALL {
        let paths = kind.paths();
        assert!(!paths.is_empty(), "{kind:?} has no paths");
        for d in paths {
            assert!(d.starts_with(['M', 'm']), "{kind:?} path must start with a move: {d}");
        }
    }
}
