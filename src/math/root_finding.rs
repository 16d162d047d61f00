pub mod tail_finder;

pub use tail_finder::{
    bracket_tail, find_tail, find_tail_with_tolerance, TailBracket, DEFAULT_TOLERANCE,
};
