//! Deterministic generator of short synthetic identifiers.
//!
//! Names are the prefix followed by a bijective base-64 counter over
//! [`CONTINUATION_CHARS`], least significant digit first:
//! `$`, `$a`, `$b`, ..., `$_`, `$$`, `$aa`, `$ba`, ...

use rustc_hash::FxHashSet;

use crate::options::NamingOptions;
use jsnames_scanner::is_reserved_word;

/// Default prefix of every generated name.
pub const DEFAULT_PREFIX: &str = "$";

/// Characters appended after the prefix, in enumeration order.
const CONTINUATION_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_$";

/// Infinite, deterministic sequence of identifiers.
///
/// The generator keeps its own cursor, so it never returns a name twice even
/// when the caller's exclusion set does not contain earlier results. The
/// sequence depends only on the prefix, the reserved names and the exclusion
/// sets passed to [`NameGenerator::next_name`].
#[derive(Clone, Debug)]
pub struct NameGenerator {
    prefix: String,
    reserved: FxHashSet<String>,
    cursor: u64,
}

impl Default for NameGenerator {
    fn default() -> Self {
        NameGenerator::new()
    }
}

impl NameGenerator {
    pub fn new() -> Self {
        NameGenerator::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        NameGenerator {
            prefix: prefix.into(),
            reserved: FxHashSet::default(),
            cursor: 0,
        }
    }

    /// Names the generator must skip in addition to reserved words.
    pub fn with_reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn from_options(options: &NamingOptions) -> Self {
        NameGenerator::with_prefix(options.prefix.clone())
            .with_reserved_names(options.reserved_names.iter().cloned())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Next candidate that is not excluded, not reserved and not returned before.
    pub fn next_name(&mut self, is_excluded: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = encode_name(&self.prefix, self.cursor);
            self.cursor += 1;
            if is_reserved_word(&candidate)
                || self.reserved.contains(&candidate)
                || is_excluded(&candidate)
            {
                continue;
            }
            return candidate;
        }
    }
}

/// The `index`-th name of the enumeration, before any filtering.
pub fn encode_name(prefix: &str, index: u64) -> String {
    let mut name = String::with_capacity(prefix.len() + 4);
    name.push_str(prefix);

    let base = CONTINUATION_CHARS.len() as u64;
    let mut n = index;
    while n > 0 {
        n -= 1;
        let digit = (n % base) as usize;
        name.push(char::from(CONTINUATION_CHARS[digit]));
        n /= base;
    }
    name
}
