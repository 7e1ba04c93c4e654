use indexmap::IndexMap;
use serde::Serialize;

use crate::classify::AreaResults;
use crate::error::Result;

use super::{OutputFormatter, display_name};

/// Renders `{ area: { changed, files, count } }`.
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonArea<'a> {
    changed: bool,
    files: &'a [String],
    count: usize,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, as used for the `areas_json` step output.
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &AreaResults) -> Result<String> {
        // The flat rule-set is keyed "files" unless an area already owns that name.
        let flat_key_taken = results.contains_key("files");
        let areas: IndexMap<&str, JsonArea<'_>> = results
            .iter()
            .map(|(name, result)| {
                let key = if flat_key_taken {
                    name.as_str()
                } else {
                    display_name(name)
                };
                (
                    key,
                    JsonArea {
                        changed: result.changed,
                        files: &result.files,
                        count: result.count,
                    },
                )
            })
            .collect();

        let json = if self.pretty {
            serde_json::to_string_pretty(&areas)?
        } else {
            serde_json::to_string(&areas)?
        };
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
