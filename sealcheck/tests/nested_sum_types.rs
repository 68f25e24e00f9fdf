//! Nested sum types: one sealed interface embedding another

use pretty_assertions::assert_eq;
use sealcheck::{check_program, CheckError, Config};
use sealcheck_model::{
    Method, Package, Program, SourceFile, SourceLocation, SwitchCase, TypeDeclGroup, TypeDef,
    TypeName, TypeRef, TypeSwitch,
};

/// Sealed T1 with sealed T2 embedding it; variants A (T1 only) and B, C
/// (both). T1's leaves are {A, B, C}, T2's are {B, C}.
fn nested_program(covered: &[&str]) -> Program {
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
    for variant in ["B", "C"] {
        pkg.define(TypeDef::Concrete {
            name: TypeName::new("pkg", variant),
            type_params: vec![],
            methods: vec![
                Method::package_private("sealed1", "pkg"),
                Method::package_private("sealed2", "pkg"),
            ],
        })
        .unwrap();
    }

    let mut file = SourceFile::new("pkg/main.src");
    file.add_decl_group(TypeDeclGroup::new(
        vec!["sumtype:decl".into()],
        vec!["T1".into()],
        SourceLocation::new("pkg/main.src", 3),
    ));
    file.add_decl_group(TypeDeclGroup::new(
        vec!["sumtype:decl".into()],
        vec!["T2".into()],
        SourceLocation::new("pkg/main.src", 6),
    ));
    file.add_switch(TypeSwitch::new(
        TypeRef::new(TypeName::new("pkg", "T1")),
        covered
            .iter()
            .map(|name| SwitchCase::new(vec![TypeRef::new(TypeName::new("pkg", *name))]))
            .collect(),
        SourceLocation::new("pkg/main.src", 25),
    ));
    pkg.add_file(file);

    let mut program = Program::new();
    program.add_package(pkg);
    program
}

#[test]
fn test_sub_type_in_switch_covers_its_subtree() {
    let program = nested_program(&["A", "T2"]);
    let errs = check_program(
        &program,
        Config {
            include_shared_interfaces: true,
            ..Config::default()
        },
    );
    assert_eq!(errs, vec![]);
}

#[test]
fn test_sub_type_in_switch_ignored_without_flag() {
    let program = nested_program(&["A", "T2"]);
    let errs = check_program(&program, Config::default());
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].missing_names(), vec!["B", "C"]);
}

#[test]
fn test_sub_type_plus_directly_named_leaf() {
    // B is named directly, so only C stays missing when the sub sum type
    // contributes no coverage.
    let program = nested_program(&["A", "B", "T2"]);
    let errs = check_program(&program, Config::default());
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].missing_names(), vec!["C"]);
}

#[test]
fn test_all_leaves_in_switch() {
    // Naming every leaf explicitly passes under every configuration, even
    // though T2 itself never appears.
    let program = nested_program(&["A", "B", "C"]);
    for default_signifies_exhaustive in [false, true] {
        for include_shared_interfaces in [false, true] {
            let errs = check_program(
                &program,
                Config {
                    default_signifies_exhaustive,
                    include_shared_interfaces,
                },
            );
            assert_eq!(errs, vec![]);
        }
    }
}

#[test]
fn test_switch_over_child_sum_type() {
    // A switch over T2 only needs B and C; A belongs to T1 alone.
    let mut program = nested_program(&[]);
    let mut pkg = Package::new("driver");
    let mut file = SourceFile::new("driver/main.src");
    file.add_switch(TypeSwitch::new(
        TypeRef::new(TypeName::new("pkg", "T2")),
        vec![SwitchCase::new(vec![
            TypeRef::new(TypeName::new("pkg", "B")),
            TypeRef::new(TypeName::new("pkg", "C")),
        ])],
        SourceLocation::new("driver/main.src", 4),
    ));
    pkg.add_file(file);
    program.add_package(pkg);

    let errs: Vec<CheckError> = check_program(&program, Config::default())
        .into_iter()
        .filter(|err| err.location().file == "driver/main.src")
        .collect();
    assert_eq!(errs, vec![]);
}

#[test]
fn test_shared_leaf_reported_once() {
    // B is reachable both directly from T1 and through T2; with nothing
    // covered it must appear exactly once in the missing list.
    let program = nested_program(&[]);
    let errs = check_program(&program, Config::default());
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].missing_names(), vec!["A", "B", "C"]);
}
