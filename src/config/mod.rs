// SPDX-License-Identifier: MIT

//! Configuration documents: schema, loading and shipped presets.

pub mod loader;
pub mod presets;
pub mod schema;

pub use loader::{find_config_file, load_config, load_config_from, parse_config};
pub use schema::{Applicability, ConfigDocument, Rule, RuleParam, Severity};
