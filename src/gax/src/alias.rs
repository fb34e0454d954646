// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonicalize loosely-typed option values.
//!
//! Some request options accept several spellings for the same value, for
//! example `"truncate"`, `"write_truncate"` and `"WriteTruncate"` all mean
//! `WRITE_TRUNCATE`. Each option has one [AliasTable]. Lookups ignore case.
//! Values without a match pass through unchanged, the service rejects them if
//! they are invalid.

/// Maps lowercase aliases to their canonical value.
///
/// # Example
/// ```
/// # use google_cloud_gax::alias::AliasTable;
/// const PRIORITY: AliasTable = AliasTable::new(&[
///     ("batch", "BATCH"),
///     ("interactive", "INTERACTIVE"),
/// ]);
/// assert_eq!(PRIORITY.canonicalize("Batch"), "BATCH");
/// assert_eq!(PRIORITY.canonicalize("urgent"), "urgent");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    /// Creates a table. The aliases must be lowercase.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the canonical value for `alias`, if the table has one.
    pub fn lookup(&self, alias: &str) -> Option<&'static str> {
        let alias = alias.trim();
        self.entries
            .iter()
            .find(|(a, _)| a.eq_ignore_ascii_case(alias))
            .map(|(_, canonical)| *canonical)
    }

    /// Returns the canonical value for `value`, or `value` unchanged.
    pub fn canonicalize(&self, value: &str) -> String {
        self.lookup(value)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const WRITE: AliasTable = AliasTable::new(&[
        ("write_truncate", "WRITE_TRUNCATE"),
        ("writetruncate", "WRITE_TRUNCATE"),
        ("truncate", "WRITE_TRUNCATE"),
        ("write_append", "WRITE_APPEND"),
    ]);

    #[test_case("write_truncate")]
    #[test_case("writetruncate")]
    #[test_case("truncate")]
    #[test_case("WriteTruncate")]
    #[test_case("TRUNCATE")]
    fn aliases(input: &str) {
        assert_eq!(WRITE.lookup(input), Some("WRITE_TRUNCATE"));
        assert_eq!(WRITE.canonicalize(input), "WRITE_TRUNCATE");
    }

    #[test]
    fn pass_through() {
        assert_eq!(WRITE.lookup("overwrite"), None);
        assert_eq!(WRITE.canonicalize("overwrite"), "overwrite");
    }
}
