mod group;
mod section;

pub use group::*;
pub use section::*;
