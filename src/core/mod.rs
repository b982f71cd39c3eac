pub mod call;

pub use call::{dispatch, parse_call};
