//! The naming passes.
//!
//! Both passes walk the tree once in document order, ask the
//! [`PathBuilder`] for the path of every function expression and attach a
//! name to the ones that have a path:
//!
//! - [`NameAnonymousFunctionsMapped`] attaches short synthetic names
//!   (`$`, `$a`, ...) and returns the [`VariableMap`] that decodes them,
//!   reusing the names of a seed map from an earlier run.
//! - [`NameAnonymousFunctions`] spells the path itself as the name
//!   (`a.prototype.b` becomes `a$prototype$b`).

use jsnames_common::limits::MAX_AST_DEPTH;
use jsnames_parser::parser::{NodeArena, NodeData, NodeIndex};
use jsnames_scanner::{is_identifier_part, is_identifier_start};
use rustc_hash::FxHashSet;

use crate::name_generator::NameGenerator;
use crate::options::NamingOptions;
use crate::path_builder::{PathBuilder, PathResolution};
use crate::qualified_path::QualifiedPath;
use crate::variable_map::VariableMap;

/// Every function-like node under `root`, in pre-order (document order).
///
/// Nodes nested deeper than `MAX_AST_DEPTH` are not visited.
pub fn collect_function_nodes(arena: &NodeArena, root: NodeIndex) -> Vec<NodeIndex> {
    let mut functions = Vec::new();
    walk_pre_order(arena, root, 0, &mut |idx, data| {
        if data.is_function_like() {
            functions.push(idx);
        }
    });
    functions
}

/// Text of every identifier under `root`, property names included.
pub fn collect_identifier_texts(arena: &NodeArena, root: NodeIndex) -> FxHashSet<String> {
    let mut texts = FxHashSet::default();
    walk_pre_order(arena, root, 0, &mut |_, data| {
        if let NodeData::Identifier(ident) = data {
            texts.insert(ident.escaped_text.clone());
        }
    });
    texts
}

/// Whether an identifier spelled `name` occurs anywhere inside `func`.
///
/// A function expression's own name is in scope in its body, so attaching
/// such a name would capture that reference.
fn references_identifier(arena: &NodeArena, func: NodeIndex, name: &str) -> bool {
    let mut found = false;
    walk_pre_order(arena, func, 0, &mut |_, data| {
        if let NodeData::Identifier(ident) = data {
            found |= ident.escaped_text == name;
        }
    });
    found
}

fn walk_pre_order<'a>(
    arena: &'a NodeArena,
    idx: NodeIndex,
    depth: u32,
    visit: &mut impl FnMut(NodeIndex, &'a NodeData),
) {
    if depth >= MAX_AST_DEPTH {
        return;
    }
    let Some(data) = arena.data(idx) else {
        return;
    };
    visit(idx, data);
    for child in data.children() {
        walk_pre_order(arena, child, depth + 1, visit);
    }
}

/// Result of [`NameAnonymousFunctionsMapped::process`].
#[derive(Debug)]
pub struct MappedPassResult {
    /// The seed entries followed by the entries added in this run.
    pub map: VariableMap,
    /// Number of functions that received a name.
    pub named: usize,
}

/// Names anonymous functions with short synthetic names and records them in
/// a [`VariableMap`].
#[derive(Clone, Debug, Default)]
pub struct NameAnonymousFunctionsMapped {
    options: NamingOptions,
}

impl NameAnonymousFunctionsMapped {
    pub fn new(options: NamingOptions) -> Self {
        NameAnonymousFunctionsMapped { options }
    }

    /// Name every qualifying function under `root`.
    ///
    /// `seed` is only read: its entries are copied into the returned map, so
    /// a path seen in an earlier run keeps its name and the seed's names are
    /// never handed out for other paths. Fresh names avoid every identifier
    /// in the file. A function whose body mentions its recorded name is left
    /// anonymous.
    #[tracing::instrument(level = "debug", skip_all, fields(seed_entries = seed.map_or(0, VariableMap::len)))]
    pub fn process(
        &self,
        arena: &mut NodeArena,
        root: NodeIndex,
        seed: Option<&VariableMap>,
    ) -> MappedPassResult {
        let mut map = seed.cloned().unwrap_or_default();
        let mut generator = NameGenerator::from_options(&self.options);
        let mut named = 0;
        let used_identifiers = collect_identifier_texts(arena, root);

        for func in collect_function_nodes(arena, root) {
            let Some(path) = resolve_path(arena, func) else {
                continue;
            };
            if let Some(existing) = map.lookup_name_by_path(path.as_str())
                && references_identifier(arena, func, existing)
            {
                tracing::trace!(
                    path = %path,
                    name = existing,
                    "recorded name is referenced in the body"
                );
                continue;
            }
            let name = map.record_if_absent_excluding(&path, &mut generator, |candidate| {
                used_identifiers.contains(candidate)
            });
            if arena.set_function_name(func, &name) {
                tracing::debug!(path = %path, name = %name, "named function");
                named += 1;
            }
        }

        tracing::debug!(named, entries = map.len(), "mapped naming done");
        MappedPassResult { map, named }
    }
}

/// Totals of one [`NameAnonymousFunctions`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnmappedPassStats {
    pub named_count: usize,
    /// Total length of the attached names.
    pub bytes_used: usize,
}

/// Names anonymous functions after their qualified path, without a map.
#[derive(Clone, Debug, Default)]
pub struct NameAnonymousFunctions {
    options: NamingOptions,
}

impl NameAnonymousFunctions {
    pub fn new(options: NamingOptions) -> Self {
        NameAnonymousFunctions { options }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn process(&self, arena: &mut NodeArena, root: NodeIndex) -> UnmappedPassStats {
        let mut stats = UnmappedPassStats::default();

        for func in collect_function_nodes(arena, root) {
            let Some(path) = resolve_path(arena, func) else {
                continue;
            };
            let Some(name) = self.name_from_path(&path) else {
                tracing::trace!(path = %path, "path yields no identifier");
                continue;
            };
            if references_identifier(arena, func, &name) {
                tracing::trace!(path = %path, name = %name, "name is referenced in the body");
                continue;
            }
            if arena.set_function_name(func, &name) {
                tracing::debug!(path = %path, name = %name, "named function");
                stats.named_count += 1;
                stats.bytes_used += name.len();
            }
        }

        tracing::debug!(
            named = stats.named_count,
            bytes = stats.bytes_used,
            "unmapped naming done"
        );
        stats
    }

    /// Turn a path into an identifier: `.` becomes `$`, other characters that
    /// cannot appear in an identifier become `_`.
    pub fn name_from_path(&self, path: &QualifiedPath) -> Option<String> {
        let mut name: String = path
            .as_str()
            .chars()
            .map(|ch| match ch {
                '.' => '$',
                ch if is_identifier_part(ch) => ch,
                _ => '_',
            })
            .collect();
        let first = name.chars().next()?;
        if !is_identifier_start(first) {
            name.insert(0, '_');
        }
        if self.options.is_reserved(&name) {
            name.push('$');
        }
        Some(name)
    }
}

/// Path of `func`, logging why there is none.
fn resolve_path(arena: &NodeArena, func: NodeIndex) -> Option<QualifiedPath> {
    match PathBuilder::new(arena).build(func) {
        PathResolution::Path(path) => Some(path),
        PathResolution::NotApplicable(reason) => {
            tracing::trace!(node = func.0, %reason, "function not named");
            None
        }
    }
}
