//! Type switch exhaustiveness analysis
//!
//! Finds every type switch whose scrutinee is a declared sum type and checks
//! its case list against the sum type's leaf variant set under the active
//! configuration. Each site yields at most one finding carrying the complete
//! missing variant list.

use crate::error::CheckError;
use crate::hierarchy::SumTypeHierarchy;
use crate::Config;
use indexmap::IndexSet;
use sealcheck_model::{Program, SourceLocation, SwitchCase, TypeName, TypeSwitch};

/// One type switch discriminating over a declared sum type
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchSite {
    /// The sum type statically discriminated by this switch
    pub sum_type: TypeName,
    pub cases: Vec<SwitchCase>,
    pub has_default: bool,
    pub location: SourceLocation,
}

impl SwitchSite {
    fn from_switch(sum_type: TypeName, switch: &TypeSwitch) -> Self {
        Self {
            sum_type,
            cases: switch.cases.clone(),
            has_default: switch.has_default,
            location: switch.location.clone(),
        }
    }
}

/// Collect every type switch whose scrutinee's static type is a declared sum
/// type, in file traversal order
pub fn find_switch_sites(program: &Program, hierarchy: &SumTypeHierarchy) -> Vec<SwitchSite> {
    let mut sites = Vec::new();
    for package in program.packages() {
        for file in &package.files {
            for switch in &file.switches {
                let scrutinee = switch.scrutinee.base();
                if hierarchy.is_sum_type(scrutinee) {
                    sites.push(SwitchSite::from_switch(scrutinee.clone(), switch));
                }
            }
        }
    }
    sites
}

/// Check one switch site for exhaustiveness
///
/// Coverage rules:
/// - a case naming a leaf variant of the target covers that leaf;
/// - a case naming a declared sub sum type covers that subtree's leaves only
///   when `include_shared_interfaces` is on, and only the leaves the target
///   actually owns;
/// - any other name contributes nothing.
///
/// A default clause suppresses the finding only under
/// `default_signifies_exhaustive`; otherwise it is assumed to be defensive
/// code, not a proof of coverage. Full leaf coverage is always accepted.
pub fn check_switch(
    site: &SwitchSite,
    hierarchy: &SumTypeHierarchy,
    config: Config,
) -> Option<CheckError> {
    let target_leaves = hierarchy.leaf_variants(&site.sum_type)?;

    let mut covered: IndexSet<TypeName> = IndexSet::new();
    for case in &site.cases {
        for type_ref in &case.types {
            let name = type_ref.base();
            if target_leaves.iter().any(|leaf| &leaf.name == name) {
                covered.insert(name.clone());
            } else if config.include_shared_interfaces && hierarchy.is_sum_type(name) {
                // Naming a sub sum type stands for all of its variants.
                if let Some(sub_leaves) = hierarchy.leaf_variants(name) {
                    for leaf in sub_leaves {
                        if target_leaves.contains(leaf) {
                            covered.insert(leaf.name.clone());
                        }
                    }
                }
            }
        }
    }

    let missing: Vec<TypeName> = target_leaves
        .iter()
        .filter(|leaf| !covered.contains(&leaf.name))
        .map(|leaf| leaf.name.clone())
        .collect();

    if site.has_default && config.default_signifies_exhaustive {
        return None;
    }
    if missing.is_empty() {
        return None;
    }
    Some(CheckError::Inexhaustive {
        sum_type: site.sum_type.clone(),
        location: site.location.clone(),
        missing,
    })
}
