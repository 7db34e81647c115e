//! Persistent two-way mapping between synthetic names and qualified paths.
//!
//! Text form, one entry per line:
//!
//! ```text
//! $:a
//! $a:a.prototype.b
//! $b:foo['\:']
//! ```
//!
//! The first unescaped `:` separates the name from the path. Both fields
//! escape `\` as `\\`, `:` as `\:`, line feed as `\n` and carriage return
//! as `\r`. Blank lines are ignored.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::name_generator::NameGenerator;
use crate::qualified_path::QualifiedPath;

const SEPARATOR: char = ':';
const ESCAPE: char = '\\';

/// Name -> path entries in insertion order, plus the reverse index.
///
/// A name maps to exactly one path and a path to exactly one name. Entries
/// are only ever added.
#[derive(Clone, Debug, Default)]
pub struct VariableMap {
    name_to_path: IndexMap<String, QualifiedPath, FxBuildHasher>,
    path_to_name: FxHashMap<QualifiedPath, String>,
}

impl VariableMap {
    pub fn new() -> Self {
        VariableMap::default()
    }

    /// Parse the line format. Errors carry the 1-based line number.
    pub fn from_serialized(text: &str) -> Result<Self, MapParseError> {
        let mut map = VariableMap::new();
        for (index, raw_line) in text.split('\n').enumerate() {
            let line = index + 1;
            let raw_line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            if raw_line.trim().is_empty() {
                continue;
            }
            let (name, path) =
                parse_line(raw_line).map_err(|kind| MapParseError { line, kind })?;
            map.insert(name, QualifiedPath::from_canonical(path))
                .map_err(|kind| MapParseError { line, kind })?;
        }
        Ok(map)
    }

    /// Build from `path -> name` pairs. The reported line is the 1-based
    /// position of the offending pair.
    pub fn from_map<I, P, N>(entries: I) -> Result<Self, MapParseError>
    where
        I: IntoIterator<Item = (P, N)>,
        P: Into<String>,
        N: Into<String>,
    {
        let mut map = VariableMap::new();
        for (index, (path, name)) in entries.into_iter().enumerate() {
            let name = name.into();
            if name.is_empty() {
                return Err(MapParseError {
                    line: index + 1,
                    kind: MapParseErrorKind::EmptyName,
                });
            }
            map.insert(name, QualifiedPath::from_canonical(path))
                .map_err(|kind| MapParseError {
                    line: index + 1,
                    kind,
                })?;
        }
        Ok(map)
    }

    /// Add `name -> path`. Re-adding an identical entry is a no-op.
    fn insert(&mut self, name: String, path: QualifiedPath) -> Result<(), MapParseErrorKind> {
        if let Some(existing) = self.name_to_path.get(&name) {
            return if *existing == path {
                Ok(())
            } else {
                Err(MapParseErrorKind::ConflictingPath)
            };
        }
        if self.path_to_name.contains_key(&path) {
            return Err(MapParseErrorKind::ConflictingName);
        }
        self.path_to_name.insert(path.clone(), name.clone());
        self.name_to_path.insert(name, path);
        Ok(())
    }

    pub fn lookup_path_by_name(&self, name: &str) -> Option<&QualifiedPath> {
        self.name_to_path.get(name)
    }

    pub fn lookup_name_by_path(&self, path: &str) -> Option<&str> {
        self.path_to_name.get(path).map(String::as_str)
    }

    /// `(name, path)` pairs in insertion order.
    pub fn all_entries(&self) -> impl Iterator<Item = (&str, &QualifiedPath)> {
        self.name_to_path
            .iter()
            .map(|(name, path)| (name.as_str(), path))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name_to_path.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.name_to_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_path.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_path.contains_key(name)
    }

    /// Name for `path`: the one already recorded, or a fresh one from
    /// `generator` that no entry uses yet.
    pub fn record_if_absent(&mut self, path: &QualifiedPath, generator: &mut NameGenerator) -> String {
        self.record_if_absent_excluding(path, generator, |_| false)
    }

    /// Like [`record_if_absent`](Self::record_if_absent), but a fresh name
    /// also skips every candidate for which `is_excluded` holds.
    pub fn record_if_absent_excluding(
        &mut self,
        path: &QualifiedPath,
        generator: &mut NameGenerator,
        is_excluded: impl Fn(&str) -> bool,
    ) -> String {
        if let Some(name) = self.path_to_name.get(path) {
            return name.clone();
        }
        let name = generator.next_name(|candidate| {
            self.name_to_path.contains_key(candidate) || is_excluded(candidate)
        });
        self.path_to_name.insert(path.clone(), name.clone());
        self.name_to_path.insert(name.clone(), path.clone());
        name
    }

    /// Line format of every entry, each terminated by a newline.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (name, path) in &self.name_to_path {
            escape_into(&mut out, name);
            out.push(SEPARATOR);
            escape_into(&mut out, path.as_str());
            out.push('\n');
        }
        out
    }

    /// Synthetic name -> qualified path text.
    pub fn new_name_to_original_name_map(&self) -> IndexMap<String, String, FxBuildHasher> {
        self.name_to_path
            .iter()
            .map(|(name, path)| (name.clone(), path.as_str().to_string()))
            .collect()
    }

    /// Qualified path text -> synthetic name.
    pub fn original_name_to_new_name_map(&self) -> IndexMap<String, String, FxBuildHasher> {
        self.name_to_path
            .iter()
            .map(|(name, path)| (path.as_str().to_string(), name.clone()))
            .collect()
    }
}

/// Equal when both hold the same entries in the same order.
impl PartialEq for VariableMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.all_entries().eq(other.all_entries())
    }
}

impl Eq for VariableMap {}

impl fmt::Display for VariableMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn escape_into(out: &mut String, field: &str) {
    for ch in field.chars() {
        match ch {
            ESCAPE => out.push_str("\\\\"),
            SEPARATOR => out.push_str("\\:"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
}

/// Split one non-blank line into its unescaped name and path.
fn parse_line(line: &str) -> Result<(String, String), MapParseErrorKind> {
    let mut name = String::new();
    let mut path = String::new();
    let mut in_path = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        let field = if in_path { &mut path } else { &mut name };
        match ch {
            ESCAPE => match chars.next() {
                Some(ESCAPE) => field.push(ESCAPE),
                Some(SEPARATOR) => field.push(SEPARATOR),
                Some('n') => field.push('\n'),
                Some('r') => field.push('\r'),
                _ => return Err(MapParseErrorKind::InvalidEscape),
            },
            SEPARATOR if !in_path => in_path = true,
            _ => field.push(ch),
        }
    }

    if !in_path {
        return Err(MapParseErrorKind::MissingSeparator);
    }
    if name.is_empty() {
        return Err(MapParseErrorKind::EmptyName);
    }
    Ok((name, path))
}

/// A serialized map that could not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapParseError {
    /// 1-based line (or entry) number.
    pub line: usize,
    pub kind: MapParseErrorKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapParseErrorKind {
    MissingSeparator,
    EmptyName,
    InvalidEscape,
    /// A name is bound to two different paths.
    ConflictingPath,
    /// A path is bound to two different names.
    ConflictingName,
}

impl fmt::Display for MapParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MapParseErrorKind::MissingSeparator => "missing ':' separator",
            MapParseErrorKind::EmptyName => "empty name",
            MapParseErrorKind::InvalidEscape => "invalid escape sequence",
            MapParseErrorKind::ConflictingPath => "name is already bound to a different path",
            MapParseErrorKind::ConflictingName => "path is already bound to a different name",
        };
        f.write_str(text)
    }
}

impl fmt::Display for MapParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed variable map at line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for MapParseError {}

// JSON form: an object `{ "name": "path", ... }` in insertion order.

impl Serialize for VariableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, path) in self.all_entries() {
            map.serialize_entry(name, path.as_str())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VariableMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(VariableMapVisitor)
    }
}

struct VariableMapVisitor;

impl<'de> Visitor<'de> for VariableMapVisitor {
    type Value = VariableMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping synthetic names to qualified paths")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<VariableMap, A::Error> {
        let mut map = VariableMap::new();
        let mut line = 0;
        while let Some((name, path)) = access.next_entry::<String, String>()? {
            line += 1;
            let kind = if name.is_empty() {
                Some(MapParseErrorKind::EmptyName)
            } else {
                map.insert(name, QualifiedPath::from_canonical(path)).err()
            };
            if let Some(kind) = kind {
                return Err(serde::de::Error::custom(MapParseError { line, kind }));
            }
        }
        Ok(map)
    }
}
