mod flattened_path;
mod dashed_lines;

pub use self::flattened_path::*;
pub use self::dashed_lines::*;
