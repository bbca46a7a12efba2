// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed, immutable grid specification and its read-only lookups.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

/// Suffix appended to a prefix code to form a hide-marker class token.
pub const HIDE_SUFFIX: &str = "-hide";

/// The root grid specification, loaded once and read-only afterwards.
///
/// Constructed exclusively by [`GridSpec::from_json`](Self::from_json);
/// there is no mutating API.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) widths: Vec<Breakpoint>,
    pub(crate) prefixes: PrefixIndex,
}

/// One breakpoint: a pixel-width threshold and the grid systems valid there.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoint {
    /// The payload member name ("990") the breakpoint was declared under.
    pub key: String,
    /// The breakpoint's pixel width. Informational; lookups go by `key`.
    pub width: f64,
    /// Grid systems in declared order.
    pub grids: Vec<GridSystem>,
}

/// A named column layout valid at one breakpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSystem {
    /// The payload member name ("dl") the grid was declared under.
    pub key: String,
    /// Human-readable label, e.g. "Desktop - Layout".
    pub name: String,
    /// Short code used to build marker class tokens
    /// (`<prefix>-showgrid`, `<prefix>-hide`).
    pub prefix: String,
    /// The pixel width this grid system assumes.
    pub width: f64,
    /// Columns in declared order, rendered left-to-right.
    pub columns: Vec<Column>,
    /// Inter-column spacing. Carried through, not laid out by this engine.
    pub gutter: Gutter,
    /// Descriptive ratio metadata, not consumed by layout math.
    pub ratio: Ratio,
}

/// One column of a grid system.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Column {
    /// Label shown in the overlay and used as the rendered block's class.
    pub name: String,
    /// The dimension unit ("%" in all observed payloads).
    pub unit: String,
    /// The column's width as a percentage of its grid system's width.
    pub percent: f64,
    /// The column's width in pixels at the grid's nominal width. Informational.
    pub px: f64,
}

/// Inter-column spacing of a grid system.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Gutter {
    /// The unit the gutter was designed in.
    pub unit: String,
    /// Gutter width in pixels.
    pub px: f64,
    /// Gutter width as a percentage of the grid's width.
    pub percent: f64,
}

/// Descriptive ratio metadata of a grid system.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ratio {
    /// Ratio name, e.g. "golden" or "even".
    pub name: String,
    /// Numeric ratio value.
    pub value: f64,
}

/// The `prefixes` table: which grid-system prefixes are relevant at which
/// breakpoint, plus the `"index"` list of every prefix that exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrefixIndex {
    pub(crate) index: Vec<String>,
    /// (breakpoint key, prefixes) in declared order, `"index"` excluded.
    pub(crate) by_breakpoint: Vec<(String, Vec<String>)>,
}

impl PrefixIndex {
    /// Every prefix that exists anywhere, as declared under `"index"`.
    #[must_use]
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// The prefixes declared under the given breakpoint key, or an empty
    /// slice when the key has no entry.
    #[must_use]
    pub fn for_key(&self, key: &str) -> &[String] {
        self.by_breakpoint
            .iter()
            .find(|(k, _)| k == key)
            .map_or(&[], |(_, list)| list.as_slice())
    }
}

impl GridSpec {
    /// The payload's identifier, e.g. a hosted-specification id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The payload's human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The breakpoints in payload declaration order.
    pub fn widths_in_declared_order(&self) -> impl Iterator<Item = &Breakpoint> {
        self.widths.iter()
    }

    /// The breakpoint declared under `key`, if any.
    #[must_use]
    pub fn breakpoint(&self, key: &str) -> Option<&Breakpoint> {
        self.widths.iter().find(|bp| bp.key == key)
    }

    /// The grid systems of the breakpoint declared under `key`.
    #[must_use]
    pub fn grids_for_width(&self, key: &str) -> Option<&[GridSystem]> {
        self.breakpoint(key).map(|bp| bp.grids.as_slice())
    }

    /// The `prefixes` table.
    #[must_use]
    pub fn prefixes(&self) -> &PrefixIndex {
        &self.prefixes
    }

    /// The hide-class tokens for panels that do not belong at breakpoint
    /// `key`: every prefix declared under any *other* breakpoint key,
    /// first-seen order, deduplicated, each with the [`HIDE_SUFFIX`].
    ///
    /// The `"index"` entry never contributes, and a prefix also declared
    /// under `key` itself is never hidden, even when another breakpoint
    /// declares it too.
    #[must_use]
    pub fn prefixes_hidden_at(&self, key: &str) -> Vec<String> {
        let own = self.prefixes.for_key(key);
        let mut hides = Vec::new();
        for (other_key, list) in &self.prefixes.by_breakpoint {
            if other_key == key {
                continue;
            }
            for prefix in list {
                if own.contains(prefix) {
                    continue;
                }
                let token = format!("{prefix}{HIDE_SUFFIX}");
                if !hides.contains(&token) {
                    hides.push(token);
                }
            }
        }
        hides
    }
}
