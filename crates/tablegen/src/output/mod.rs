//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::prelude::p_g;

/// Colors the additions of a plan.
pub fn colorize(line: &str) -> String {
    if line.trim_start().starts_with('+') {
        p_g(line)
    } else {
        line.to_string()
    }
}
