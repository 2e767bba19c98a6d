mod options;

pub use options::*;
