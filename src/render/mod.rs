//! Output formatting for the CLI.

pub mod text;

pub use text::{render_json, render_list};
