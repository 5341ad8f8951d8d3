//! Concrete clock implementations.

mod coarse;
mod hi_res;
mod manual;
#[cfg(unix)]
mod monotonic;
mod null;

pub use coarse::*;
pub use hi_res::*;
pub use manual::*;
#[cfg(unix)]
pub use monotonic::*;
pub use null::*;
