//! Surface syntax facts extracted from source files
//!
//! The analyzer never sees raw source text. The loader records, per file,
//! only the two constructs that matter for exhaustiveness checking:
//! documented type declaration groups (where sum type markers live) and type
//! switches. Everything carries a [`SourceLocation`] so diagnostics can point
//! back at the original source.

use crate::types::TypeRef;
use std::fmt;

/// A file and line position in the analyzed program
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One top-level type declaration group with its attached documentation
///
/// A group may declare several types at once; `specs` lists their names in
/// declaration order and may be empty when the documented group contains no
/// type specification at all (the marker-on-nothing edge case).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclGroup {
    /// Documentation lines attached to the group, comment markers stripped
    pub doc: Vec<String>,
    /// Names of the types declared by this group
    pub specs: Vec<String>,
    pub location: SourceLocation,
}

impl TypeDeclGroup {
    pub fn new(doc: Vec<String>, specs: Vec<String>, location: SourceLocation) -> Self {
        Self {
            doc,
            specs,
            location,
        }
    }
}

/// One case clause of a type switch, naming one or more types
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub types: Vec<TypeRef>,
}

impl SwitchCase {
    pub fn new(types: Vec<TypeRef>) -> Self {
        Self { types }
    }
}

/// A type switch construct: a scrutinee discriminated over an ordered case
/// list, optionally with a default clause
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSwitch {
    /// Static type of the discriminated value
    pub scrutinee: TypeRef,
    pub cases: Vec<SwitchCase>,
    pub has_default: bool,
    pub location: SourceLocation,
}

impl TypeSwitch {
    pub fn new(scrutinee: TypeRef, cases: Vec<SwitchCase>, location: SourceLocation) -> Self {
        Self {
            scrutinee,
            cases,
            has_default: false,
            location,
        }
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// Syntax facts for one source file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceFile {
    pub path: String,
    pub decl_groups: Vec<TypeDeclGroup>,
    pub switches: Vec<TypeSwitch>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            decl_groups: Vec::new(),
            switches: Vec::new(),
        }
    }

    pub fn add_decl_group(&mut self, group: TypeDeclGroup) {
        self.decl_groups.push(group);
    }

    pub fn add_switch(&mut self, switch: TypeSwitch) {
        self.switches.push(switch);
    }
}
