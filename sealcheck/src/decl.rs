//! Sum type declaration discovery
//!
//! Scans every loaded package's declaration groups for the sum type marker
//! and yields one [`SumTypeDecl`] per annotated declaration. The scan is a
//! pure read-only traversal in file and declaration order.

use crate::error::CheckError;
use sealcheck_model::{PackageName, Program, SourceLocation, TypeName};
use std::fmt;

/// The marker token that declares an interface as a closed sum type,
/// attached as a leading documentation comment on the type declaration
pub const SUM_TYPE_MARKER: &str = "sumtype:decl";

/// A declaration of a sum type found in a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumTypeDecl {
    /// The package that contains this declaration
    pub package: PackageName,
    /// The type named by the declaration
    pub type_name: String,
    /// Where the declaration was found
    pub location: SourceLocation,
}

impl SumTypeDecl {
    /// Generic-stripped identity of the declared type
    pub fn name(&self) -> TypeName {
        TypeName {
            package: self.package.clone(),
            name: self.type_name.clone(),
        }
    }
}

impl fmt::Display for SumTypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (declared at {})", self.type_name, self.location)
    }
}

/// Search every package for declarations carrying the sum type marker
///
/// A marked group that declares no type at all produces a `NotFound` error at
/// the marker's location; scanning continues with the remaining groups, so
/// one stray marker never hides the others. When a group declares several
/// types, the marker applies to the last one, matching how a documented
/// declaration group attaches to its trailing specification.
pub fn find_sum_type_decls(program: &Program) -> (Vec<SumTypeDecl>, Vec<CheckError>) {
    let mut decls = Vec::new();
    let mut errors = Vec::new();
    for package in program.packages() {
        for file in &package.files {
            for group in &file.decl_groups {
                let marked = group
                    .doc
                    .iter()
                    .any(|line| line.trim_start().starts_with(SUM_TYPE_MARKER));
                if !marked {
                    continue;
                }
                match group.specs.last() {
                    Some(type_name) => decls.push(SumTypeDecl {
                        package: package.name.clone(),
                        type_name: type_name.clone(),
                        location: group.location.clone(),
                    }),
                    None => errors.push(CheckError::NotFound {
                        location: group.location.clone(),
                    }),
                }
            }
        }
    }
    (decls, errors)
}
