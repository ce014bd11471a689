mod suite;

use javelin_reflect::Type;

#[test]
fn equivalence_is_reflexive_and_symmetric() {
    let registry = suite::registry();
    let list = registry.canonicalize("java.util.List").unwrap();
    let string = registry.canonicalize("java.lang.String").unwrap();
    let list_string = registry
        .make_generic_type(&list, vec![string.clone()])
        .unwrap();

    for ty in [&list, &string, &list_string, &Type::int(), &Type::Bottom] {
        assert!(registry.is_equivalent(ty, ty));
    }

    let other_list_string = registry.make_generic_type(&list, vec![string]).unwrap();
    assert!(registry.is_equivalent(&list_string, &other_list_string));
    assert!(registry.is_equivalent(&other_list_string, &list_string));
}

#[test]
fn equivalence_is_transitive_across_composites() {
    let registry = suite::registry();
    let number = registry.canonicalize("java.lang.Number").unwrap();

    let a = registry.extends_wildcard(number.clone());
    let b = registry.extends_wildcard(number.clone());
    let c = registry.extends_wildcard(number);
    assert!(registry.is_equivalent(&a, &b));
    assert!(registry.is_equivalent(&b, &c));
    assert!(registry.is_equivalent(&a, &c));
}

#[test]
fn separately_constructed_unbound_wildcards_are_equivalent() {
    let registry = suite::registry();
    let a = registry.unbounded_wildcard();
    let b = registry.extends_wildcard(registry.object_type());
    assert!(registry.is_equivalent(&a, &b));
    assert!(registry.is_unbound_wildcard(&a));
    assert!(registry.is_unbound_wildcard(&b));
}

#[test]
fn compound_interface_ordering_is_significant() {
    let registry = suite::registry();
    let cloneable = registry.canonicalize("java.lang.Cloneable").unwrap();
    let serializable = registry.canonicalize("java.io.Serializable").unwrap();

    let forward = registry
        .make_compound_type(&[cloneable.clone(), serializable.clone()])
        .unwrap();
    let reversed = registry
        .make_compound_type(&[serializable, cloneable])
        .unwrap();

    assert!(!registry.is_equivalent(&forward, &reversed));
    assert!(registry.is_equivalent(&forward, &forward));
}

#[test]
fn variants_never_cross_equivalence_boundaries() {
    let registry = suite::registry();
    let list = registry.canonicalize("java.util.List").unwrap();
    let type_param = registry.generic_type_parameters(&list).unwrap()[0].clone();
    let object = registry.object_type();

    // A generic parameter is never equivalent to a non-parameter, no matter
    // how its bound lines up.
    assert!(!registry.is_equivalent(&type_param, &object));
    assert!(!registry.is_equivalent(&object, &type_param));

    let wildcard = registry.unbounded_wildcard();
    assert!(!registry.is_equivalent(&wildcard, &object));
    assert!(!registry.equals(&wildcard, &object));
    assert!(!registry.equals(&type_param, &wildcard));
}

#[test]
fn equals_requires_variant_agreement_before_structure() {
    let registry = suite::registry();
    let string = registry.canonicalize("java.lang.String").unwrap();
    let wildcard = registry.extends_wildcard(string.clone());

    assert!(!registry.equals(&wildcard, &string));
    assert!(registry.equals(&string, &string));
    assert!(registry.equals(&wildcard, &registry.extends_wildcard(string)));
}
