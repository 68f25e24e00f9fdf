//! Errors raised while assembling a program model

use crate::types::{PackageName, TypeName};
use miette::Diagnostic;
use thiserror::Error;

/// Errors from model construction, before any analysis runs
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("type {name} is defined more than once in package {}", .name.package)]
    #[diagnostic(
        code(sealcheck::model::duplicate_type),
        help("Each named type may be defined once per package; the loader produced conflicting definitions")
    )]
    DuplicateType { name: TypeName },

    #[error("type {name} cannot be defined in package {package}")]
    #[diagnostic(
        code(sealcheck::model::foreign_type),
        help("A type definition must be registered in its declaring package")
    )]
    ForeignType { name: TypeName, package: PackageName },
}
