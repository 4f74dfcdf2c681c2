pub(crate) mod collection;
pub(crate) mod linestring;
pub(crate) mod multipoint;
pub(crate) mod multipolygon;
pub(crate) mod nullable;
pub(crate) mod polygon;
