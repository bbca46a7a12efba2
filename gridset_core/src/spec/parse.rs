// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON payload parsing.
//!
//! The payload mirrors the hosted grid-definition format: object members
//! whose *order* carries meaning (breakpoints, grid systems, columns) are
//! read through [`Entries`], a visitor that collects `(key, value)` pairs
//! in document order instead of going through a sorted map.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{Breakpoint, Column, GridSpec, GridSystem, Gutter, PrefixIndex, Ratio};

/// The key under which `prefixes` lists every prefix that exists anywhere.
const INDEX_KEY: &str = "index";

/// A fatal grid-definition error.
///
/// The overlay cannot proceed without a complete specification; construction
/// never yields a partial model.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The payload is not valid JSON or does not match the expected shape
    /// (including a missing `widths` or `prefixes` member).
    #[error("malformed grid definition: {0}")]
    Malformed(String),
}

/// JSON object members collected as `(key, value)` pairs in document order.
struct Entries<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Deserialize)]
struct RawSpec {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    widths: Entries<RawBreakpoint>,
    prefixes: Entries<Vec<String>>,
}

#[derive(Deserialize)]
struct RawBreakpoint {
    width: f64,
    grids: Entries<RawGrid>,
}

#[derive(Deserialize)]
struct RawGrid {
    name: String,
    prefix: String,
    width: f64,
    columns: Entries<Column>,
    gutter: Gutter,
    ratio: Ratio,
}

impl GridSpec {
    /// Parses a grid-definition payload.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Malformed`] when the payload is not valid JSON
    /// or does not match the expected shape. A prefix listed in `prefixes`
    /// without a matching grid system is *not* an error; it is logged and
    /// never shown.
    pub fn from_json(payload: &str) -> Result<Self, SpecError> {
        let raw: RawSpec =
            serde_json::from_str(payload).map_err(|err| SpecError::Malformed(err.to_string()))?;

        let widths: Vec<Breakpoint> = raw
            .widths
            .0
            .into_iter()
            .map(|(key, bp)| Breakpoint {
                key,
                width: bp.width,
                grids: bp
                    .grids
                    .0
                    .into_iter()
                    .map(|(gkey, grid)| GridSystem {
                        key: gkey,
                        name: grid.name,
                        prefix: grid.prefix,
                        width: grid.width,
                        columns: grid.columns.0.into_iter().map(|(_, col)| col).collect(),
                        gutter: grid.gutter,
                        ratio: grid.ratio,
                    })
                    .collect(),
            })
            .collect();

        let mut prefixes = PrefixIndex::default();
        for (key, list) in raw.prefixes.0 {
            if key == INDEX_KEY {
                prefixes.index = list;
            } else {
                prefixes.by_breakpoint.push((key, list));
            }
        }

        let spec = Self {
            id: raw.id,
            name: raw.name,
            widths,
            prefixes,
        };
        spec.warn_dangling_prefixes();
        Ok(spec)
    }

    /// Logs prefixes that no grid system declares. Fail-soft: such a prefix
    /// simply never matches a marker and never renders.
    fn warn_dangling_prefixes(&self) {
        for prefix in &self.prefixes.index {
            let declared = self
                .widths
                .iter()
                .flat_map(|bp| bp.grids.iter())
                .any(|grid| grid.prefix == *prefix);
            if !declared {
                log::warn!("prefix {prefix:?} has no grid system and will never be shown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    const FIXTURE: &str = r#"{
        "id": "21065",
        "name": "UCL",
        "widths": {
            "990": {
                "width": 990,
                "grids": {
                    "dl": {
                        "name": "Desktop - Layout", "prefix": "dl", "width": 990,
                        "columns": {
                            "dl1": {"name": "dl1", "unit": "%", "percent": 19.86531984, "px": 196.67},
                            "dl2": {"name": "dl2", "unit": "%", "percent": 8.4108252, "px": 83.27}
                        },
                        "gutter": {"unit": "px", "px": 30, "percent": 3.03030303},
                        "ratio": {"name": "golden", "value": 0.61803398}
                    },
                    "dc": {
                        "name": "Desktop - Content", "prefix": "dc", "width": 990,
                        "columns": {
                            "dc1": {"name": "dc1", "unit": "%", "percent": 33, "px": 326.7}
                        },
                        "gutter": {"unit": "px", "px": 20, "percent": 2.02020202},
                        "ratio": {"name": "even", "value": 1}
                    }
                }
            },
            "320": {
                "width": 320,
                "grids": {
                    "m": {
                        "name": "Mobile", "prefix": "m", "width": 320,
                        "columns": {
                            "m2": {"name": "m2", "unit": "%", "percent": 46.796875, "px": 149.75},
                            "m1": {"name": "m1", "unit": "%", "percent": 46.796875, "px": 149.75}
                        },
                        "gutter": {"unit": "px", "px": 20, "percent": 6.25},
                        "ratio": {"name": "even", "value": 1}
                    }
                }
            }
        },
        "prefixes": {
            "index": ["dl", "dc", "m"],
            "990": ["dl", "dc"],
            "320": ["m"]
        }
    }"#;

    #[test]
    fn parses_full_payload() {
        let spec = GridSpec::from_json(FIXTURE).unwrap();
        assert_eq!(spec.id(), "21065");
        assert_eq!(spec.name(), "UCL");
        assert_eq!(spec.widths_in_declared_order().count(), 2);
        assert_eq!(spec.prefixes().index(), &["dl", "dc", "m"]);
    }

    #[test]
    fn breakpoints_keep_declared_order() {
        let spec = GridSpec::from_json(FIXTURE).unwrap();
        let keys: Vec<&str> = spec
            .widths_in_declared_order()
            .map(|bp| bp.key.as_str())
            .collect();
        // Payload declares 990 before 320; numeric or lexical sorting would
        // flip them.
        assert_eq!(keys, vec!["990", "320"]);
    }

    #[test]
    fn columns_keep_declared_order() {
        let spec = GridSpec::from_json(FIXTURE).unwrap();
        let mobile = &spec.grids_for_width("320").unwrap()[0];
        let names: Vec<&str> = mobile.columns.iter().map(|c| c.name.as_str()).collect();
        // "m2" is declared before "m1" on purpose.
        assert_eq!(names, vec!["m2", "m1"]);
    }

    #[test]
    fn grid_fields_round_through() {
        let spec = GridSpec::from_json(FIXTURE).unwrap();
        let grids = spec.grids_for_width("990").unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].key, "dl");
        assert_eq!(grids[0].name, "Desktop - Layout");
        assert_eq!(grids[0].prefix, "dl");
        assert_eq!(grids[0].gutter.px, 30.0);
        assert_eq!(grids[0].ratio.name, "golden");
        assert_eq!(grids[0].columns[1].percent, 8.4108252);
    }

    #[test]
    fn missing_widths_is_fatal() {
        let err = GridSpec::from_json(r#"{"prefixes": {"index": []}}"#).unwrap_err();
        let SpecError::Malformed(message) = err;
        assert!(message.contains("widths"), "got: {message}");
    }

    #[test]
    fn missing_prefixes_is_fatal() {
        let err = GridSpec::from_json(r#"{"widths": {}}"#).unwrap_err();
        let SpecError::Malformed(message) = err;
        assert!(message.contains("prefixes"), "got: {message}");
    }

    #[test]
    fn invalid_json_is_fatal() {
        assert!(GridSpec::from_json("{not json").is_err());
    }

    #[test]
    fn missing_id_and_name_default_to_empty() {
        let spec =
            GridSpec::from_json(r#"{"widths": {}, "prefixes": {"index": []}}"#).unwrap();
        assert_eq!(spec.id(), "");
        assert_eq!(spec.name(), "");
    }

    #[test]
    fn dangling_prefix_is_tolerated() {
        let payload = r#"{
            "widths": {},
            "prefixes": {"index": ["ghost"], "990": ["ghost"]}
        }"#;
        let spec = GridSpec::from_json(payload).unwrap();
        assert_eq!(spec.prefixes().for_key("990"), &["ghost"]);
    }
}
