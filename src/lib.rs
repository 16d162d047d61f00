pub mod cs;
pub mod error;
pub mod math;

pub use cs::sort;
pub use error::{Error, Result};
pub use math::root_finding;

pub use cs::sort::{find_kth, find_kth_by, find_kth_by_key};
pub use math::root_finding::{bracket_tail, find_tail, find_tail_with_tolerance, TailBracket};
