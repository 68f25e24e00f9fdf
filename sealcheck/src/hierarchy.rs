//! Variant resolution and the sum type hierarchy
//!
//! Given the validated sealed interfaces and the whole-program snapshot,
//! this module computes each sum type's concrete variants and the embedding
//! relation between sum types. Sealed interfaces that embed one another form
//! a directed graph (parent sum type -> embedded child sum type); a leaf
//! variant can be reachable both directly and through more than one child,
//! so the structure is a DAG over shared leaves, not a strict tree, and leaf
//! sets are deduplicated by type identity rather than traversal path.

use crate::sealed::SealedInterface;
use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{DiGraph, NodeIndex};
use sealcheck_model::{Program, TypeName};
use std::collections::HashSet;

/// A concrete type that implements a sealed interface
///
/// Identity is generic-stripped: every instantiation of a generic variant is
/// the same `Variant`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    pub name: TypeName,
}

impl Variant {
    pub fn new(name: TypeName) -> Self {
        Self { name }
    }
}

/// The resolved forest of sum types over their shared leaf variants
#[derive(Debug, Clone)]
pub struct SumTypeHierarchy {
    /// Embedding edges: parent sum type -> child sum type
    graph: DiGraph<TypeName, ()>,
    nodes: IndexMap<TypeName, NodeIndex>,
    /// Leaf variant set per sum type, in declaration order
    leaves: IndexMap<TypeName, IndexSet<Variant>>,
    sealed: IndexMap<TypeName, SealedInterface>,
}

impl SumTypeHierarchy {
    /// Resolve every sealed interface's variant set and the embedding
    /// relation between them
    pub fn resolve(program: &Program, sealed: &[SealedInterface]) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: IndexMap<TypeName, NodeIndex> = IndexMap::new();
        let mut sealed_map: IndexMap<TypeName, SealedInterface> = IndexMap::new();
        for iface in sealed {
            if !sealed_map.contains_key(&iface.name) {
                let idx = graph.add_node(iface.name.clone());
                nodes.insert(iface.name.clone(), idx);
            }
            // A type annotated twice keeps its first resolution; the second
            // decl was already analyzed independently by the validator.
            sealed_map.entry(iface.name.clone()).or_insert_with(|| iface.clone());
        }

        // Embedding: child embeds parent and carries its full method set.
        let names: Vec<TypeName> = nodes.keys().cloned().collect();
        for parent in &names {
            for child in &names {
                if parent == child {
                    continue;
                }
                if program.embeds_transitively(child, parent)
                    && method_subset(&sealed_map[parent], &sealed_map[child])
                {
                    graph.add_edge(nodes[parent], nodes[child], ());
                }
            }
        }

        // Direct implementers per sum type, in program declaration order.
        let mut direct: IndexMap<TypeName, IndexSet<Variant>> = names
            .iter()
            .map(|name| (name.clone(), IndexSet::new()))
            .collect();
        for def in program.concrete_types() {
            for name in &names {
                if program.implements(def.name(), name) {
                    direct[name].insert(Variant::new(def.name().clone()));
                }
            }
        }

        let mut hierarchy = Self {
            graph,
            nodes,
            leaves: IndexMap::new(),
            sealed: sealed_map,
        };
        for name in &names {
            let mut visiting = HashSet::new();
            let leaves = hierarchy.compute_leaves(program, &direct, name, &mut visiting);
            hierarchy.leaves.insert(name.clone(), leaves);
        }
        hierarchy
    }

    /// Leaf set of one sum type: direct implementers not owned by a child
    /// sum type, plus every child's leaf set
    fn compute_leaves(
        &self,
        program: &Program,
        direct: &IndexMap<TypeName, IndexSet<Variant>>,
        name: &TypeName,
        visiting: &mut HashSet<TypeName>,
    ) -> IndexSet<Variant> {
        let mut leaves = IndexSet::new();
        if !visiting.insert(name.clone()) {
            // Inconsistent embedding producing a cycle; break it rather than
            // recurse forever.
            return leaves;
        }
        let children = self.children(name);
        for variant in &direct[name] {
            let through_child = children
                .iter()
                .any(|child| program.implements(&variant.name, child));
            if !through_child {
                leaves.insert(variant.clone());
            }
        }
        for child in &children {
            leaves.extend(self.compute_leaves(program, direct, child, visiting));
        }
        visiting.remove(name);
        leaves
    }

    /// Child sum types embedded into `name`, in insertion order
    pub fn children(&self, name: &TypeName) -> Vec<TypeName> {
        let Some(&idx) = self.nodes.get(name) else {
            return Vec::new();
        };
        let mut children: Vec<TypeName> = self
            .graph
            .neighbors(idx)
            .map(|n| self.graph[n].clone())
            .collect();
        // petgraph yields neighbors in reverse insertion order
        children.reverse();
        children
    }

    /// Whether `name` is a declared (and validated) sum type
    pub fn is_sum_type(&self, name: &TypeName) -> bool {
        self.nodes.contains_key(name)
    }

    /// The full leaf variant set of a sum type, in declaration order
    pub fn leaf_variants(&self, name: &TypeName) -> Option<&IndexSet<Variant>> {
        self.leaves.get(name)
    }

    /// Declared sum types in discovery order
    pub fn sum_types(&self) -> impl Iterator<Item = &TypeName> {
        self.nodes.keys()
    }

    /// The validated interface behind a sum type name
    pub fn sealed(&self, name: &TypeName) -> Option<&SealedInterface> {
        self.sealed.get(name)
    }
}

/// Every method of `parent` appears in `child`'s full method set
fn method_subset(parent: &SealedInterface, child: &SealedInterface) -> bool {
    parent.methods.iter().all(|m| child.methods.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::find_sum_type_decls;
    use crate::sealed::validate_decls;
    use pretty_assertions::assert_eq;
    use sealcheck_model::{Method, Package, SourceFile, SourceLocation, TypeDeclGroup, TypeDef};

    /// One package with sealed T1, sealed T2 embedding T1, and concrete
    /// variants A (T1 only), B and C (both): the fixture from the nested
    /// sum type behaviour
    fn nested_program() -> Program {
        let mut pkg = Package::new("pkg");
        pkg.define(TypeDef::Interface {
            name: TypeName::new("pkg", "T1"),
            methods: vec![Method::package_private("sealed1", "pkg")],
            embeds: vec![],
        })
        .unwrap();
        pkg.define(TypeDef::Interface {
            name: TypeName::new("pkg", "T2"),
            methods: vec![Method::package_private("sealed2", "pkg")],
            embeds: vec![TypeName::new("pkg", "T1")],
        })
        .unwrap();
        pkg.define(TypeDef::Concrete {
            name: TypeName::new("pkg", "A"),
            type_params: vec![],
            methods: vec![Method::package_private("sealed1", "pkg")],
        })
        .unwrap();
        pkg.define(TypeDef::Concrete {
            name: TypeName::new("pkg", "B"),
            type_params: vec![],
            methods: vec![
                Method::package_private("sealed1", "pkg"),
                Method::package_private("sealed2", "pkg"),
            ],
        })
        .unwrap();
        pkg.define(TypeDef::Concrete {
            name: TypeName::new("pkg", "C"),
            type_params: vec![],
            methods: vec![
                Method::package_private("sealed1", "pkg"),
                Method::package_private("sealed2", "pkg"),
            ],
        })
        .unwrap();

        let mut file = SourceFile::new("pkg/types.src");
        file.add_decl_group(TypeDeclGroup::new(
            vec!["sumtype:decl".into()],
            vec!["T1".into()],
            SourceLocation::new("pkg/types.src", 2),
        ));
        file.add_decl_group(TypeDeclGroup::new(
            vec!["sumtype:decl".into()],
            vec!["T2".into()],
            SourceLocation::new("pkg/types.src", 5),
        ));
        pkg.add_file(file);

        let mut program = Program::new();
        program.add_package(pkg);
        program
    }

    fn resolve(program: &Program) -> SumTypeHierarchy {
        let (decls, errors) = find_sum_type_decls(program);
        assert_eq!(errors, vec![]);
        let (sealed, errors) = validate_decls(program, decls);
        assert_eq!(errors, vec![]);
        SumTypeHierarchy::resolve(program, &sealed)
    }

    fn leaf_names(hierarchy: &SumTypeHierarchy, name: &TypeName) -> Vec<String> {
        hierarchy
            .leaf_variants(name)
            .unwrap()
            .iter()
            .map(|v| v.name.name.clone())
            .collect()
    }

    #[test]
    fn test_embedding_recorded_as_child() {
        let program = nested_program();
        let hierarchy = resolve(&program);

        assert_eq!(
            hierarchy.children(&TypeName::new("pkg", "T1")),
            vec![TypeName::new("pkg", "T2")]
        );
        assert_eq!(hierarchy.children(&TypeName::new("pkg", "T2")), vec![]);
    }

    #[test]
    fn test_leaf_sets_deduplicate_shared_variants() {
        let program = nested_program();
        let hierarchy = resolve(&program);

        assert_eq!(
            leaf_names(&hierarchy, &TypeName::new("pkg", "T1")),
            vec!["A", "B", "C"]
        );
        assert_eq!(
            leaf_names(&hierarchy, &TypeName::new("pkg", "T2")),
            vec!["B", "C"]
        );
    }

    #[test]
    fn test_generic_instantiations_share_identity() {
        let mut pkg = Package::new("pkg");
        pkg.define(TypeDef::Interface {
            name: TypeName::new("pkg", "Node"),
            methods: vec![Method::package_private("isNode", "pkg")],
            embeds: vec![],
        })
        .unwrap();
        pkg.define(TypeDef::Concrete {
            name: TypeName::new("pkg", "Pair"),
            type_params: vec!["L".into(), "R".into()],
            methods: vec![Method::package_private("isNode", "pkg")],
        })
        .unwrap();
        let mut file = SourceFile::new("pkg/node.src");
        file.add_decl_group(TypeDeclGroup::new(
            vec!["sumtype:decl".into()],
            vec!["Node".into()],
            SourceLocation::new("pkg/node.src", 1),
        ));
        pkg.add_file(file);
        let mut program = Program::new();
        program.add_package(pkg);

        let hierarchy = resolve(&program);
        assert_eq!(
            leaf_names(&hierarchy, &TypeName::new("pkg", "Node")),
            vec!["Pair"]
        );
    }

    #[test]
    fn test_non_sum_type_names_resolve_to_nothing() {
        let program = nested_program();
        let hierarchy = resolve(&program);

        let stranger = TypeName::new("pkg", "A");
        assert!(!hierarchy.is_sum_type(&stranger));
        assert_eq!(hierarchy.leaf_variants(&stranger), None);
    }
}
