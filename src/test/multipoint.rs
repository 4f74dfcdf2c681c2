use geo::{point, MultiPoint};

use crate::test::point::p_nan;

pub(crate) fn mp0() -> MultiPoint {
    MultiPoint::new(vec![
        point!(
            x: 0., y: 1.
        ),
        point!(
            x: 1., y: 2.
        ),
    ])
}

pub(crate) fn mp1() -> MultiPoint {
    MultiPoint::new(vec![
        point!(
            x: 3., y: 4.
        ),
        p_nan(),
        point!(
            x: 5., y: 6.
        ),
    ])
}
