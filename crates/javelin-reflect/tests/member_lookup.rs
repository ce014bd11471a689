mod suite;

use javelin_reflect::{BindingFlags, CallingConvention, MemberInfo, MemberKind, TypeError};
use pretty_assertions::assert_eq;

#[test]
fn package_private_inherited_methods_leak_unless_final() {
    let registry = suite::registry();
    let circle = registry.canonicalize("com.example.shapes.Circle").unwrap();
    let flags = BindingFlags::NON_PUBLIC | BindingFlags::INSTANCE;

    let methods = registry.get_methods(&circle, flags);
    let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();

    // `recompute` is package-private, inherited, instance, and overridable:
    // the asymmetry rule admits it.
    assert!(names.contains(&"recompute"));
    // The final variant is excluded under identical flags.
    assert!(!names.contains(&"invalidate"));
}

#[test]
fn package_private_inherited_fields_never_leak() {
    let registry = suite::registry();
    let circle = registry.canonicalize("com.example.shapes.Circle").unwrap();
    let shape = registry.canonicalize("com.example.shapes.Shape").unwrap();
    let flags = BindingFlags::NON_PUBLIC | BindingFlags::INSTANCE;

    let field = registry.get_field(&circle, "stamp", flags).unwrap();
    assert_eq!(field, None);

    // Queried on the declaring type itself the field is visible.
    let field = registry.get_field(&shape, "stamp", flags).unwrap();
    assert!(field.is_some());
}

#[test]
fn declared_only_excludes_inherited_members() {
    let registry = suite::registry();
    let circle = registry.canonicalize("com.example.shapes.Circle").unwrap();
    let flags = BindingFlags::DEFAULT | BindingFlags::DECLARED_ONLY;

    let methods = registry.get_methods(&circle, flags);
    assert!(methods.iter().all(|m| m.declaring_type == circle));
    assert!(methods.iter().any(|m| m.name == "radius"));
    assert!(!methods.iter().any(|m| m.name == "recompute"));
}

#[test]
fn inherited_statics_require_flatten_hierarchy() {
    let registry = suite::registry();
    let circle = registry.canonicalize("com.example.shapes.Circle").unwrap();

    let without = registry.get_field(&circle, "CACHE_LIMIT", BindingFlags::DEFAULT).unwrap();
    assert_eq!(without, None);

    let with = registry
        .get_field(
            &circle,
            "CACHE_LIMIT",
            BindingFlags::DEFAULT | BindingFlags::FLATTEN_HIERARCHY,
        )
        .unwrap();
    assert!(with.is_some());
}

#[test]
fn prefix_lookup_only_on_the_plural_surface() {
    let registry = suite::registry();
    let circle = registry.canonicalize("com.example.shapes.Circle").unwrap();

    let members = registry
        .get_member(&circle, Some("re*"), BindingFlags::DEFAULT, &[MemberKind::Method])
        .unwrap();
    let names: Vec<&str> = members
        .iter()
        .filter_map(|m| match m {
            MemberInfo::Method(m) => Some(m.name.as_str()),
            _ => None,
        })
        .collect();
    assert!(names.contains(&"render"));
    assert!(!names.contains(&"radius"));

    // A single-member lookup treats the `*` literally and finds nothing.
    let none = registry
        .get_method(
            &circle,
            "re*",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            None,
        )
        .unwrap();
    assert_eq!(none, None);
}

#[test]
fn ignore_case_matches_both_sides_lowercased() {
    let registry = suite::registry();
    let circle = registry.canonicalize("com.example.shapes.Circle").unwrap();

    let found = registry
        .get_method(
            &circle,
            "RENDER",
            BindingFlags::DEFAULT | BindingFlags::IGNORE_CASE,
            CallingConvention::Any,
            None,
        )
        .unwrap();
    assert!(found.is_some());

    let none = registry
        .get_method(
            &circle,
            "RENDER",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            None,
        )
        .unwrap();
    assert_eq!(none, None);
}

#[test]
fn calling_convention_filters_method_candidates() {
    let registry = suite::registry();
    let formatter = registry.canonicalize("com.example.text.Formatter").unwrap();

    let varargs_only = registry.get_methods_with(
        &formatter,
        BindingFlags::DEFAULT | BindingFlags::DECLARED_ONLY,
        CallingConvention::VarArgs,
    );
    assert!(varargs_only.iter().any(|m| m.name == "format"));

    let standard_only = registry.get_methods_with(
        &formatter,
        BindingFlags::DEFAULT | BindingFlags::DECLARED_ONLY,
        CallingConvention::Standard,
    );
    assert!(standard_only.iter().all(|m| m.name != "format"));
}

#[test]
fn member_groups_preserve_field_method_constructor_type_order() {
    let registry = suite::registry();
    let shape = registry.canonicalize("com.example.shapes.Shape").unwrap();
    let members = registry
        .get_members(&shape, BindingFlags::DEFAULT | BindingFlags::NON_PUBLIC)
        .unwrap();

    let kind_rank = |m: &MemberInfo| match m {
        MemberInfo::Field(_) => 0,
        MemberInfo::Method(_) => 1,
        MemberInfo::Constructor(_) => 2,
        MemberInfo::NestedType(_) => 3,
    };
    let ranks: Vec<u8> = members.iter().map(kind_rank).collect();
    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    assert_eq!(ranks, sorted);
    assert!(members.iter().any(|m| matches!(m, MemberInfo::Constructor(_))));
}

#[test]
fn nested_type_lookup_strips_the_owner_prefix() {
    let registry = suite::registry();
    let outer = registry.canonicalize("com.example.Outer").unwrap();

    let by_simple_name = registry
        .get_nested_type(&outer, "Inner", BindingFlags::DEFAULT)
        .unwrap();
    assert!(by_simple_name.is_some());

    let by_full_name = registry
        .get_nested_type(&outer, "com.example.Outer$Inner", BindingFlags::DEFAULT)
        .unwrap();
    assert_eq!(by_full_name, by_simple_name);

    // Naming the owner itself is not a nested-type match.
    let owner_itself = registry
        .get_nested_type(&outer, "com.example.Outer", BindingFlags::DEFAULT)
        .unwrap();
    assert_eq!(owner_itself, None);
}

#[test]
fn nested_type_visibility_follows_the_flags() {
    let registry = suite::registry();
    let outer = registry.canonicalize("com.example.Outer").unwrap();

    let public_only = BindingFlags::PUBLIC | BindingFlags::STATIC | BindingFlags::INSTANCE;
    let secret = registry
        .get_nested_type(&outer, "Secret", public_only)
        .unwrap();
    assert_eq!(secret, None);

    let secret = registry
        .get_nested_type(&outer, "Secret", BindingFlags::DEFAULT)
        .unwrap();
    assert!(secret.is_some());

    let all = registry.get_nested_types(&outer, BindingFlags::DEFAULT).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn unresolvable_nested_class_surfaces_the_error() {
    let registry = suite::registry();
    registry
        .register(
            &javelin_meta::ClassDecl::new("com.example.Holder", javelin_meta::Modifiers::PUBLIC)
                .with_nested_class("com.example.Holder$Gone"),
        )
        .unwrap();
    let holder = registry.canonicalize("com.example.Holder").unwrap();

    let err = registry
        .get_nested_type(&holder, "Gone", BindingFlags::DEFAULT)
        .unwrap_err();
    assert!(matches!(err, TypeError::NotResolvable(_)));
}
