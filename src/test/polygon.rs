use geo::{polygon, LineString, Polygon};

/// Square with one triangular hole: 5 exterior and 4 interior coordinates once closed.
pub(crate) fn p0() -> Polygon {
    polygon!(
        exterior: [
            (x: 0., y: 0.),
            (x: 10., y: 0.),
            (x: 10., y: 10.),
            (x: 0., y: 10.),
        ],
        interiors: [
            [
                (x: 2., y: 2.),
                (x: 4., y: 2.),
                (x: 4., y: 4.),
            ],
        ],
    )
}

/// Triangle without holes: 4 coordinates once closed.
pub(crate) fn p1() -> Polygon {
    polygon![
        (x: 20., y: 20.),
        (x: 30., y: 20.),
        (x: 25., y: 30.),
    ]
}

/// Collapsed exterior; fails the validity check.
pub(crate) fn p_invalid() -> Polygon {
    polygon![
        (x: 0., y: 0.),
        (x: 1., y: 1.),
    ]
}

pub(crate) fn p_empty() -> Polygon {
    Polygon::new(LineString::new(vec![]), vec![])
}
