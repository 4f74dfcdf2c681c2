use geo::MultiPolygon;

use crate::test::polygon::{p0, p1, p_invalid};

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(vec![p0(), p1()])
}

/// `p0`, an invalid polygon, then `p1`.
pub(crate) fn mp_with_invalid() -> MultiPolygon {
    MultiPolygon::new(vec![p0(), p_invalid(), p1()])
}
