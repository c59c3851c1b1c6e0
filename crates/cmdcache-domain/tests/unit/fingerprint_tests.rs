//! Unit tests for command fingerprints

use cmdcache_domain::constants::CACHE_KEY_PREFIX;
use cmdcache_domain::{Command, Fingerprint, FingerprintScheme, fingerprint};
use std::collections::HashSet;

#[test]
fn test_known_digest() {
    // sha256("echohi")
    assert_eq!(
        fingerprint(&["echo", "hi"]),
        "cmd_0955c2ea80eae312b3d5a5a518190e6b21c94f881421ae7cfbee89c1292fd81e"
    );
}

#[test]
fn test_fingerprint_is_deterministic() {
    let tokens = ["storcli", "/c0", "show"];
    let first = fingerprint(&tokens);
    for _ in 0..10 {
        assert_eq!(fingerprint(&tokens), first);
    }
}

#[test]
fn test_fingerprint_shape() {
    let key = fingerprint(&["true"]);
    assert!(key.starts_with(CACHE_KEY_PREFIX));

    let digest = &key[CACHE_KEY_PREFIX.len()..];
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_distinct_commands_distinct_fingerprints() {
    let inputs: Vec<Vec<&str>> = vec![
        vec!["echo", "hi"],
        vec!["hi", "echo"],
        vec!["echo", "hi "],
        vec!["echo", "Hi"],
        vec!["echo"],
        vec!["storcli", "/c0", "show"],
        vec!["storcli", "/c1", "show"],
        vec!["storcli", "/c0", "show", "all"],
        vec!["/usr/bin/echo", "hi"],
    ];

    let keys: HashSet<String> = inputs.iter().map(|t| fingerprint(t.as_slice())).collect();
    assert_eq!(keys.len(), inputs.len());
}

#[test]
fn test_concatenated_scheme_ignores_token_boundaries() {
    let a = Fingerprint::from_tokens(&["ab", "c"], FingerprintScheme::Concatenated, "cmd_");
    let b = Fingerprint::from_tokens(&["a", "bc"], FingerprintScheme::Concatenated, "cmd_");
    let c = Fingerprint::from_tokens(&["abc"], FingerprintScheme::Concatenated, "cmd_");

    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_length_prefixed_scheme_sees_token_boundaries() {
    let a = Fingerprint::from_tokens(&["ab", "c"], FingerprintScheme::LengthPrefixed, "cmd_");
    let b = Fingerprint::from_tokens(&["a", "bc"], FingerprintScheme::LengthPrefixed, "cmd_");
    let c = Fingerprint::from_tokens(&["abc"], FingerprintScheme::LengthPrefixed, "cmd_");

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[test]
fn test_schemes_produce_different_keys() {
    let tokens = ["echo", "hi"];
    let concatenated = Fingerprint::from_tokens(&tokens, FingerprintScheme::Concatenated, "cmd_");
    let framed = Fingerprint::from_tokens(&tokens, FingerprintScheme::LengthPrefixed, "cmd_");
    assert_ne!(concatenated, framed);
}

#[test]
fn test_compute_matches_from_tokens() {
    let command = Command::new(["echo", "hi"]).unwrap();
    let computed = Fingerprint::compute(&command, FingerprintScheme::Concatenated, "cmd_");

    assert_eq!(computed.as_str(), fingerprint(&["echo", "hi"]));
    assert_eq!(computed.to_string(), computed.clone().into_string());
}

#[test]
fn test_custom_prefix() {
    let key = Fingerprint::from_tokens(&["abc"], FingerprintScheme::Concatenated, "inv:");
    assert_eq!(
        key.as_str(),
        "inv:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}
