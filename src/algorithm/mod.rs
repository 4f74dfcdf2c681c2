//! Operations over many source geometries at once.

mod batch;

#[cfg(feature = "rayon")]
pub use batch::par_convert_batch;
pub use batch::{convert_batch, BatchOutput};
