//! Names, method signatures and type definitions
//!
//! Identity is nominal and generic-stripped: a [`TypeName`] is a package plus
//! an unparameterized type name, so every instantiation of a generic type
//! shares one identity. Parameterized references appear only as [`TypeRef`]s
//! inside syntax facts and are collapsed with [`TypeRef::base`].

use std::fmt;

/// Identity of one package in the analyzed program
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generic-stripped identity of a named type
///
/// Two instantiations of the same generic declaration compare equal: the
/// identity carries no type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    pub package: PackageName,
    pub name: String,
}

impl TypeName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: PackageName::new(package),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.name)
    }
}

/// A possibly parameterized reference to a named type, as written in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: TypeName,
    pub type_args: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            type_args: Vec::new(),
        }
    }

    pub fn with_args(name: TypeName, type_args: Vec<TypeRef>) -> Self {
        Self { name, type_args }
    }

    /// The generic-stripped identity of the referenced type
    pub fn base(&self) -> &TypeName {
        &self.name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_args.is_empty() {
            let args: Vec<String> = self.type_args.iter().map(|a| a.to_string()).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

/// Whether a method name is visible outside its declaring package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Any package may declare a method with this name
    Exported,
    /// Only types in the declaring package can provide this method, which is
    /// what makes an interface sealed
    PackagePrivate,
}

/// One method signature in an interface or on a concrete type
///
/// `package` is the package the signature was declared in. A package-private
/// method is only satisfied by a method declared in that same package, so two
/// identically named private methods from different packages never match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub package: PackageName,
}

impl Method {
    pub fn exported(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Exported,
            package: PackageName::new(package),
        }
    }

    pub fn package_private(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::PackagePrivate,
            package: PackageName::new(package),
        }
    }

    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }
}

/// A named type definition in the type table
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    /// An interface: directly declared methods plus embedded interfaces whose
    /// method sets are folded in transitively
    Interface {
        name: TypeName,
        methods: Vec<Method>,
        embeds: Vec<TypeName>,
    },
    /// A concrete (non-interface) type; `type_params` records generic
    /// parameters for display only, identity stays unparameterized
    Concrete {
        name: TypeName,
        type_params: Vec<String>,
        methods: Vec<Method>,
    },
}

impl TypeDef {
    pub fn name(&self) -> &TypeName {
        match self {
            TypeDef::Interface { name, .. } => name,
            TypeDef::Concrete { name, .. } => name,
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, TypeDef::Interface { .. })
    }

    /// Methods declared directly on this definition, embedded ones excluded
    pub fn declared_methods(&self) -> &[Method] {
        match self {
            TypeDef::Interface { methods, .. } => methods,
            TypeDef::Concrete { methods, .. } => methods,
        }
    }
}
