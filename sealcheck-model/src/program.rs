//! Whole-program snapshot and the type-resolution service
//!
//! A [`Program`] is assembled once per analysis run from every loaded
//! package, then only read. Packages and type definitions keep their
//! insertion order (via `IndexMap`), which downstream components rely on for
//! deterministic, declaration-ordered output.

use crate::error::ModelError;
use crate::syntax::SourceFile;
use crate::types::{Method, PackageName, TypeDef, TypeName};
use indexmap::IndexMap;
use std::collections::HashSet;

/// One loaded package: its syntax facts plus its named type definitions
#[derive(Debug, Clone)]
pub struct Package {
    pub name: PackageName,
    pub files: Vec<SourceFile>,
    types: IndexMap<String, TypeDef>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: PackageName::new(name),
            files: Vec::new(),
            types: IndexMap::new(),
        }
    }

    pub fn add_file(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    /// Register a type definition, rejecting duplicates
    pub fn define(&mut self, def: TypeDef) -> Result<(), ModelError> {
        let name = def.name().clone();
        if name.package != self.name {
            return Err(ModelError::ForeignType {
                name,
                package: self.name.clone(),
            });
        }
        if self.types.contains_key(&name.name) {
            return Err(ModelError::DuplicateType { name });
        }
        self.types.insert(name.name, def);
        Ok(())
    }

    /// Type definitions in declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }
}

/// Immutable whole-program snapshot supplied to the analyzer
#[derive(Debug, Clone, Default)]
pub struct Program {
    packages: IndexMap<PackageName, Package>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            packages: IndexMap::new(),
        }
    }

    pub fn add_package(&mut self, package: Package) {
        self.packages.insert(package.name.clone(), package);
    }

    /// Packages in load order
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Resolve a named type to its definition
    pub fn lookup(&self, name: &TypeName) -> Option<&TypeDef> {
        self.packages.get(&name.package)?.get(&name.name)
    }

    /// All concrete type definitions across every package, in declaration
    /// order (package load order, then definition order within a package)
    pub fn concrete_types(&self) -> impl Iterator<Item = &TypeDef> {
        self.packages()
            .flat_map(|pkg| pkg.types())
            .filter(|def| !def.is_interface())
    }

    /// Full method set of a named interface, embedded interfaces folded in
    /// transitively; deduplicated, cycle-safe. Concrete types yield their
    /// declared methods as-is. Unknown names yield an empty set.
    pub fn method_set(&self, name: &TypeName) -> Vec<Method> {
        let mut methods = Vec::new();
        let mut seen_methods = HashSet::new();
        let mut visited = HashSet::new();
        self.collect_methods(name, &mut methods, &mut seen_methods, &mut visited);
        methods
    }

    fn collect_methods(
        &self,
        name: &TypeName,
        methods: &mut Vec<Method>,
        seen_methods: &mut HashSet<Method>,
        visited: &mut HashSet<TypeName>,
    ) {
        if !visited.insert(name.clone()) {
            return;
        }
        let Some(def) = self.lookup(name) else {
            return;
        };
        for method in def.declared_methods() {
            if seen_methods.insert(method.clone()) {
                methods.push(method.clone());
            }
        }
        if let TypeDef::Interface { embeds, .. } = def {
            for embedded in embeds {
                self.collect_methods(embedded, methods, seen_methods, visited);
            }
        }
    }

    /// Whether interface `outer` embeds interface `inner`, directly or
    /// through a chain of embedded interfaces
    pub fn embeds_transitively(&self, outer: &TypeName, inner: &TypeName) -> bool {
        let mut visited = HashSet::new();
        self.embeds_walk(outer, inner, &mut visited)
    }

    fn embeds_walk(
        &self,
        outer: &TypeName,
        inner: &TypeName,
        visited: &mut HashSet<TypeName>,
    ) -> bool {
        if !visited.insert(outer.clone()) {
            return false;
        }
        let Some(TypeDef::Interface { embeds, .. }) = self.lookup(outer) else {
            return false;
        };
        embeds
            .iter()
            .any(|e| e == inner || self.embeds_walk(e, inner, visited))
    }

    /// Structural implements relation: `ty` satisfies `iface` when every
    /// method in the interface's full method set is declared by `ty`, with
    /// package-private methods additionally requiring `ty` to live in the
    /// method's declaring package.
    pub fn implements(&self, ty: &TypeName, iface: &TypeName) -> bool {
        let required = self.method_set(iface);
        if required.is_empty() {
            // An empty interface is satisfied by everything; callers decide
            // whether that is meaningful (the validator rejects it as
            // unsealed before variants are ever resolved).
            return true;
        }
        // A package-private method's identity is (declaring package, name):
        // only a method declared in the same package can match it.
        let provided = self.method_set(ty);
        required.iter().all(|req| {
            provided
                .iter()
                .any(|m| m.name == req.name && (req.is_exported() || m.package == req.package))
        })
    }
}
