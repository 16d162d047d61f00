pub mod median_of_medians;

pub use median_of_medians::{
    find_kth, find_kth_by, find_kth_by_key, GROUP_SIZE, SMALL_COLLECTION,
};
