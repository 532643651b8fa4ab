pub mod centroid;
pub mod chains;

pub use centroid::{cell_nearest_centroid, nearest_to, weighted_centroid};
pub use chains::{check_disjoint, decompose_above_below, decompose_left_right};
