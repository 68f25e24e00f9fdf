//! Error types for the sum type analyzer
//!
//! Following existing miette patterns from the model crate for consistent
//! error reporting. Analysis errors are data: the checker returns the full
//! list and never aborts on the first finding.

use crate::decl::SumTypeDecl;
use miette::Diagnostic;
use sealcheck_model::{SourceLocation, TypeName};
use thiserror::Error;

/// One analysis finding, tagged by kind
///
/// `NotFound`, `NotInterface` and `Unsealed` are structural errors in the sum
/// type declarations themselves; `Inexhaustive` is the exhaustiveness result
/// for one type switch site. None of them indicates a fault in the analyzer.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("{location}: misplaced sum type marker: no type declaration follows it")]
    #[diagnostic(
        code(sealcheck::decl::not_found),
        help("Attach the marker comment to a type declaration, or remove it")
    )]
    NotFound { location: SourceLocation },

    #[error("{}: type '{}' is not an interface, so it cannot be a sum type", .decl.location, .decl.type_name)]
    #[diagnostic(
        code(sealcheck::decl::not_interface),
        help("Sum types are declared on interfaces; concrete types are variants, not sums")
    )]
    NotInterface { decl: SumTypeDecl },

    #[error("{}: interface '{}' is not sealed: it declares no package-private method", .decl.location, .decl.type_name)]
    #[diagnostic(
        code(sealcheck::decl::unsealed),
        help("Add at least one package-private method so the interface cannot be implemented elsewhere")
    )]
    Unsealed { decl: SumTypeDecl },

    #[error("{}: exhaustiveness check failed for sum type '{}': missing cases for {}", .location, .sum_type.name, join_names(.missing))]
    #[diagnostic(
        code(sealcheck::switch::inexhaustive),
        help("Add a case for each missing variant, or name the covering sub sum type")
    )]
    Inexhaustive {
        sum_type: TypeName,
        location: SourceLocation,
        /// Missing leaf variants in declaration order
        missing: Vec<TypeName>,
    },
}

impl CheckError {
    /// Source position of the finding
    pub fn location(&self) -> &SourceLocation {
        match self {
            CheckError::NotFound { location } => location,
            CheckError::NotInterface { decl } => &decl.location,
            CheckError::Unsealed { decl } => &decl.location,
            CheckError::Inexhaustive { location, .. } => location,
        }
    }

    /// For `Inexhaustive`, the missing variant names sorted alphabetically
    /// (the rendering order); other kinds yield an empty list
    pub fn missing_names(&self) -> Vec<String> {
        match self {
            CheckError::Inexhaustive { missing, .. } => {
                let mut names: Vec<String> =
                    missing.iter().map(|name| name.name.clone()).collect();
                names.sort();
                names
            }
            _ => Vec::new(),
        }
    }
}

fn join_names(missing: &[TypeName]) -> String {
    let mut names: Vec<&str> = missing.iter().map(|name| name.name.as_str()).collect();
    names.sort_unstable();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inexhaustive_message_sorts_names() {
        let err = CheckError::Inexhaustive {
            sum_type: TypeName::new("shapes", "Shape"),
            location: SourceLocation::new("shapes/area.src", 40),
            missing: vec![
                TypeName::new("shapes", "Square"),
                TypeName::new("shapes", "Circle"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "shapes/area.src:40: exhaustiveness check failed for sum type 'Shape': missing cases for Circle, Square"
        );
        assert_eq!(err.missing_names(), vec!["Circle", "Square"]);
    }

    #[test]
    fn test_not_found_message() {
        let err = CheckError::NotFound {
            location: SourceLocation::new("shapes/shape.src", 3),
        };
        assert_eq!(
            err.to_string(),
            "shapes/shape.src:3: misplaced sum type marker: no type declaration follows it"
        );
    }
}
