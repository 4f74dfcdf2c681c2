use geo::{line_string, LineString};

pub(crate) fn ls0() -> LineString {
    line_string![
        (x: 0., y: 1.),
        (x: 1., y: 2.)
    ]
}

pub(crate) fn ls1() -> LineString {
    line_string![
        (x: 3., y: 4.),
        (x: 5., y: 6.),
        (x: 7., y: 4.)
    ]
}

pub(crate) fn ls_empty() -> LineString {
    LineString::new(vec![])
}

/// A single vertex repeated; fails the validity check.
pub(crate) fn ls_degenerate() -> LineString {
    line_string![
        (x: 1., y: 1.),
        (x: 1., y: 1.)
    ]
}
