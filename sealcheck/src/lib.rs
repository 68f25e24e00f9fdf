//! Static exhaustiveness checking for sealed sum type interfaces
//!
//! A sum type is declared by attaching the `sumtype:decl` marker comment to
//! an interface whose method set cannot be satisfied outside its declaring
//! package. This crate verifies that every such declaration is well formed
//! and that every type switch over a declared sum type covers all of its
//! concrete variants.
//!
//! ## Architecture
//!
//! The analysis is a one-way pipeline over an immutable whole-program
//! snapshot supplied by `sealcheck-model`:
//!
//! - **Declaration scanner**: finds marker-annotated type declarations
//! - **Sealing validator**: confirms each declaration names a sealed interface
//! - **Variant resolver**: computes each sum type's leaf variants and the
//!   embedding hierarchy between sum types
//! - **Switch analyzer**: matches every type switch's case list against the
//!   leaf set under the active configuration
//! - **Aggregation**: all findings merged into one deterministic report
//!
//! No component mutates another's output, and no finding aborts the rest of
//! the analysis.

pub mod decl;
pub mod error;
pub mod hierarchy;
pub mod sealed;
pub mod switch;

// Re-export public API
pub use decl::{find_sum_type_decls, SumTypeDecl, SUM_TYPE_MARKER};
pub use error::CheckError;
pub use hierarchy::{SumTypeHierarchy, Variant};
pub use sealed::{validate_decls, SealedInterface};
pub use switch::{check_switch, find_switch_sites, SwitchSite};

use sealcheck_model::Program;

/// The two independent exhaustiveness policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// When true, a default clause in a type switch suppresses missing
    /// variant reporting for that switch regardless of actual coverage
    pub default_signifies_exhaustive: bool,
    /// When true, naming a nested declared sum type as a case counts as
    /// covering all of that nested type's variants
    pub include_shared_interfaces: bool,
}

/// Main entry point: analyze a whole-program snapshot
///
/// Runs the full pipeline and returns every finding, sorted by source
/// position as a final merge step so the report is deterministic regardless
/// of traversal details. Errors are data; an empty list means the program is
/// exhaustive under `config`.
pub fn check_program(program: &Program, config: Config) -> Vec<CheckError> {
    let (decls, mut errors) = find_sum_type_decls(program);

    let (sealed, validation_errors) = validate_decls(program, decls);
    errors.extend(validation_errors);

    let hierarchy = SumTypeHierarchy::resolve(program, &sealed);

    for site in find_switch_sites(program, &hierarchy) {
        if let Some(err) = check_switch(&site, &hierarchy, config) {
            errors.push(err);
        }
    }

    errors.sort_by(|a, b| a.location().cmp(b.location()));
    errors
}
