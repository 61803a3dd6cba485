//!
//! Responses handed back by a [`Transport`](crate::Transport),
//! and the wrappers that materialize them.
//!

mod raw_response;
pub use self::raw_response::*;

mod file_response;
pub use self::file_response::*;
