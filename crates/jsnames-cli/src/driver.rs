//! Runs one naming pass over one script.

use anyhow::{Context, Result, bail};
use std::fmt::Write as _;
use std::path::Path;

use crate::args::{CliArgs, MapFormat};
use crate::config::resolve_options;
use jsnames_common::{Diagnostic, LineMap};
use jsnames_emitter::{Printer, PrinterOptions, print_source_file};
use jsnames_naming::{
    NameAnonymousFunctions, NameAnonymousFunctionsMapped, NamingMode, VariableMap,
};
use jsnames_parser::parser::{NodeArena, NodeIndex, ParserState};

pub const EXIT_SUCCESS: i32 = 0;
/// The input has syntax errors; nothing was written.
pub const EXIT_PARSE_ERRORS: i32 = 1;
/// I/O failure, malformed seed map or invalid configuration.
pub const EXIT_FAILURE: i32 = 2;

/// What one run produced.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Parse diagnostics; when present nothing else is produced.
    pub diagnostics: Vec<Diagnostic>,
    /// Input text, for diagnostic positions.
    pub source: String,
    /// The renamed script.
    pub output: String,
    /// Final name map (mapped mode only).
    pub map: Option<VariableMap>,
    /// Number of functions that received a name.
    pub named: usize,
}

impl RunResult {
    pub fn exit_code(&self) -> i32 {
        if self.diagnostics.is_empty() {
            EXIT_SUCCESS
        } else {
            EXIT_PARSE_ERRORS
        }
    }
}

/// Read the input and seed map, rename, and write `--out`/`--map-out` when
/// given. The renamed script is always returned in [`RunResult::output`].
#[tracing::instrument(level = "debug", skip_all, fields(input = %args.input.display()))]
pub fn run(args: &CliArgs) -> Result<RunResult> {
    let options = resolve_options(args)?;
    if options.mode == NamingMode::Unmapped && (args.map_out.is_some() || args.previous_map.is_some()) {
        bail!("--previous-map and --map-out require mapped mode");
    }

    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;
    let seed = match &args.previous_map {
        Some(path) => Some(load_map(path, args.map_format)?),
        None => None,
    };

    let file_name = args.input.display().to_string();
    let mut parser = ParserState::new(file_name, source.clone());
    let root = parser.parse_source_file();
    if !parser.get_diagnostics().is_empty() {
        tracing::debug!(count = parser.get_diagnostics().len(), "input has parse errors");
        return Ok(RunResult {
            diagnostics: parser.to_diagnostics(),
            source,
            ..RunResult::default()
        });
    }
    let mut arena = parser.into_arena();

    let mut result = RunResult {
        source,
        ..RunResult::default()
    };
    let mode = options.mode;
    match mode {
        NamingMode::Mapped => {
            let pass = NameAnonymousFunctionsMapped::new(options);
            let pass_result = pass.process(&mut arena, root, seed.as_ref());
            result.named = pass_result.named;
            result.map = Some(pass_result.map);
        }
        NamingMode::Unmapped => {
            let stats = NameAnonymousFunctions::new(options).process(&mut arena, root);
            result.named = stats.named_count;
        }
    }
    result.output = print_script(&arena, root, args.compact);

    if let Some(out) = &args.out {
        std::fs::write(out, &result.output)
            .with_context(|| format!("failed to write output: {}", out.display()))?;
    }
    if let (Some(path), Some(map)) = (&args.map_out, &result.map) {
        write_map(path, map, args.map_format)?;
    }

    tracing::debug!(named = result.named, "run complete");
    Ok(result)
}

fn print_script(arena: &NodeArena, root: NodeIndex, compact: bool) -> String {
    if !compact {
        return print_source_file(arena, root);
    }
    let options = PrinterOptions {
        compact: true,
        single_quote: false,
    };
    let mut printer = Printer::new(arena, options);
    if let Some(source_file) = arena.get_source_file_at(root) {
        printer = printer.with_source_text(&source_file.text);
    }
    printer.emit(root);
    printer.finish()
}

pub fn load_map(path: &Path, format: MapFormat) -> Result<VariableMap> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read name map: {}", path.display()))?;
    let map = match format {
        MapFormat::Text => VariableMap::from_serialized(&text)
            .with_context(|| format!("malformed name map: {}", path.display()))?,
        MapFormat::Json => serde_json::from_str(&text)
            .with_context(|| format!("malformed JSON name map: {}", path.display()))?,
    };
    Ok(map)
}

pub fn write_map(path: &Path, map: &VariableMap, format: MapFormat) -> Result<()> {
    let text = match format {
        MapFormat::Text => map.serialize(),
        MapFormat::Json => {
            let mut json = serde_json::to_string_pretty(map)?;
            json.push('\n');
            json
        }
    };
    std::fs::write(path, text)
        .with_context(|| format!("failed to write name map: {}", path.display()))
}

/// `file(line,col): error JS1005: message`, one per line.
pub fn format_diagnostics(diagnostics: &[Diagnostic], source: &str) -> String {
    let line_map = LineMap::build(source);
    let mut out = String::new();
    for diag in diagnostics {
        let pos = line_map.offset_to_position(diag.start);
        let _ = writeln!(
            out,
            "{}({},{}): error JS{}: {}",
            diag.file,
            pos.line + 1,
            pos.character + 1,
            diag.code,
            diag.message_text
        );
    }
    out
}
