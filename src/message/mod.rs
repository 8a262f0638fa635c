// SPDX-License-Identifier: MIT

//! Commit message parsing.

mod header;
mod parse;

pub use header::{parse_header, Header};
pub use parse::Message;
