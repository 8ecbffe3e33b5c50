//! Interface name shortening.
//!
//! Rules are tried in order and the first one whose pattern occurs in the
//! name wins. Matching is by substring, so `TenGigabitEthernet` must be tried
//! before `GigabitEthernet` and both before `Ethernet`.

/// `(pattern, short prefix)` pairs, longest pattern first.
const RULES: &[(&str, &str)] = &[
    ("TenGigabitEthernet", "T"),
    ("GigabitEthernet", "G"),
    ("FastEthernet", "F"),
    ("Ethernet", "Eth"),
    ("port-channel", "Po"),
];

/// Shorten an interface name for description text.
///
/// Names matching no rule are returned unchanged, which makes the function
/// idempotent: every short prefix is itself free of any rule pattern.
pub fn shorten(name: &str) -> String {
    RULES
        .iter()
        .find(|(pattern, _)| name.contains(pattern))
        .map(|(pattern, prefix)| name.replace(pattern, prefix))
        .unwrap_or_else(|| name.to_string())
}
