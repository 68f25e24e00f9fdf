//! Typed program model for sealcheck
//!
//! This crate is the input boundary of the sum type analyzer. An external
//! loader (driver, build tool, language front end) parses and type-checks the
//! target program and populates this model once per analysis run; the
//! analyzer in the `sealcheck` crate then reads it without ever touching
//! source text itself. The model is a whole-program snapshot: it is built up
//! front, treated as immutable afterwards, and never shared across runs.
//!
//! Three layers:
//!
//! - **Syntax facts** ([`SourceFile`], [`TypeDeclGroup`], [`TypeSwitch`]): the
//!   small slice of surface syntax the analyzer cares about, with source
//!   positions.
//! - **Type table** ([`TypeDef`], [`Method`]): named interface and concrete
//!   type definitions with their method sets, embeddings and generic
//!   parameters.
//! - **Resolution service** ([`Program`]): lookup by name, full interface
//!   method sets, and the structural `implements` relation.

pub mod error;
pub mod program;
pub mod syntax;
pub mod types;

pub use error::ModelError;
pub use program::{Package, Program};
pub use syntax::{SourceFile, SourceLocation, SwitchCase, TypeDeclGroup, TypeSwitch};
pub use types::{Method, PackageName, TypeDef, TypeName, TypeRef, Visibility};
