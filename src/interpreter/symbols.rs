/// Symbol table storage and mutation rules.
///
/// Holds constants, variables and functions as separate namespaces and keeps
/// them disjoint.
pub mod core;

/// The constants and functions a new table is seeded with.
pub mod builtin;
