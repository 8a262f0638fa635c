// SPDX-License-Identifier: MIT

//! Configuration module for emolint.
//!
//! This module handles loading and parsing the rule table from
//! various sources (files, defaults).

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, TYPE_ENUM};
pub use loader::{find_config_file, load_config, parse_config};
pub use schema::*;
