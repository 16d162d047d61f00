pub mod root_finding;

pub use root_finding::{
    bracket_tail, find_tail, find_tail_with_tolerance, TailBracket, DEFAULT_TOLERANCE,
};
