//! Sealing and shape validation of sum type declarations
//!
//! A declaration only graduates to a [`SealedInterface`] when its name
//! resolves to an interface that cannot be implemented outside its declaring
//! package. The test is structural: one package-private method anywhere in
//! the interface's full method set is enough, because only same-package types
//! can provide that method. How the interface seals itself is its business;
//! that it does is mandatory.

use crate::decl::SumTypeDecl;
use crate::error::CheckError;
use sealcheck_model::{Method, Program, TypeName};

/// A validated sum type: an interface confirmed to be sealed
///
/// Constructed only by [`validate_decls`]; an invalid declaration never
/// becomes a `SealedInterface`.
#[derive(Debug, Clone, PartialEq)]
pub struct SealedInterface {
    pub decl: SumTypeDecl,
    pub name: TypeName,
    /// Full method set, embedded interfaces folded in
    pub methods: Vec<Method>,
}

/// Validate every discovered declaration, partitioning into sealed
/// interfaces and structural errors
///
/// One failing declaration never blocks the others: every decl is resolved
/// independently and contributes either a `SealedInterface` or exactly one
/// error.
pub fn validate_decls(
    program: &Program,
    decls: Vec<SumTypeDecl>,
) -> (Vec<SealedInterface>, Vec<CheckError>) {
    let mut sealed = Vec::new();
    let mut errors = Vec::new();
    for decl in decls {
        match validate_decl(program, decl) {
            Ok(iface) => sealed.push(iface),
            Err(err) => errors.push(err),
        }
    }
    (sealed, errors)
}

fn validate_decl(program: &Program, decl: SumTypeDecl) -> Result<SealedInterface, CheckError> {
    let name = decl.name();
    let Some(def) = program.lookup(&name) else {
        // The declaration names a type the loader never resolved.
        return Err(CheckError::NotFound {
            location: decl.location,
        });
    };
    if !def.is_interface() {
        return Err(CheckError::NotInterface { decl });
    }
    let methods = program.method_set(&name);
    if methods.iter().all(Method::is_exported) {
        // Zero methods, or only exported ones: any external type could
        // satisfy this interface, so it is not a closed sum.
        return Err(CheckError::Unsealed { decl });
    }
    Ok(SealedInterface {
        decl,
        name,
        methods,
    })
}
