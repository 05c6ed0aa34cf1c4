mod images;
mod results;

pub use images::{checkerboard, half_white, two_by_two_corner};
pub use results::fixed_result;
