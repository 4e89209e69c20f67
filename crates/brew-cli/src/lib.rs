//! Library components of the `brewdata` command line.

pub mod logging;
pub mod pipeline;
