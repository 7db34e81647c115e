use super::name_generator::{NameGenerator, encode_name};

fn take(generator: &mut NameGenerator, count: usize) -> Vec<String> {
    (0..count).map(|_| generator.next_name(|_| false)).collect()
}

#[test]
fn test_enumeration_order() {
    assert_eq!(encode_name("$", 0), "$");
    assert_eq!(encode_name("$", 1), "$a");
    assert_eq!(encode_name("$", 26), "$z");
    assert_eq!(encode_name("$", 27), "$A");
    assert_eq!(encode_name("$", 53), "$0");
    assert_eq!(encode_name("$", 63), "$_");
    assert_eq!(encode_name("$", 64), "$$");
    assert_eq!(encode_name("$", 65), "$aa");
    assert_eq!(encode_name("$", 66), "$ba");
    assert_eq!(encode_name("$", 64 + 64 * 64), "$$$");
    assert_eq!(encode_name("$", 64 + 64 * 64 + 1), "$aaa");
}

#[test]
fn test_first_names() {
    let mut generator = NameGenerator::new();
    assert_eq!(take(&mut generator, 4), vec!["$", "$a", "$b", "$c"]);
}

#[test]
fn test_never_repeats_without_exclusions() {
    let mut generator = NameGenerator::new();
    let names = take(&mut generator, 5000);
    let unique: std::collections::HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_skips_excluded_names() {
    let mut generator = NameGenerator::new();
    let excluded = ["$", "$b"];
    let first = generator.next_name(|name| excluded.contains(&name));
    let second = generator.next_name(|name| excluded.contains(&name));
    assert_eq!((first.as_str(), second.as_str()), ("$a", "$c"));
}

#[test]
fn test_deterministic() {
    let excluded = ["$a"];
    let run = || {
        let mut generator = NameGenerator::new();
        (0..100)
            .map(|_| generator.next_name(|name| excluded.contains(&name)))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_skips_reserved_words_with_custom_prefix() {
    // "i" + "f" and "i" + "n" are keywords.
    let mut generator = NameGenerator::with_prefix("i");
    let names: Vec<String> = (0..20).map(|_| generator.next_name(|_| false)).collect();
    assert!(!names.iter().any(|n| n == "if" || n == "in"));
    assert_eq!(names[0], "i");
    assert_eq!(names[1], "ia");
}

#[test]
fn test_skips_configured_reserved_names() {
    let mut generator = NameGenerator::new().with_reserved_names(["$", "$a"]);
    assert_eq!(generator.next_name(|_| false), "$b");
}
