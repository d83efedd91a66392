//! Independent price signals read from a parsed page.
//!
//! Every extractor is a soft-miss: `None` (or an empty list) means the
//! signal is not on the page and the caller moves on to its next fallback.

pub mod meta;
pub mod state;
pub mod structured;
pub mod text;
