mod suite;

use javelin_reflect::{BindingFlags, CallingConvention, Type, TypeError};
use pretty_assertions::assert_eq;

#[test]
fn hide_by_signature_returns_the_most_derived_override() {
    let registry = suite::registry();
    let circle = registry.canonicalize("com.example.shapes.Circle").unwrap();

    // Both Shape.render and Circle.render are candidates; identical
    // signatures resolve to the derived one instead of an ambiguity error.
    let found = registry
        .get_method(
            &circle,
            "render",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            None,
        )
        .unwrap()
        .expect("render should resolve");
    assert_eq!(found.declaring_type, circle);
}

#[test]
fn competing_interface_fields_are_ambiguous() {
    let registry = suite::registry();
    let settings = registry.canonicalize("com.example.cfg.Settings").unwrap();

    let err = registry
        .get_field(
            &settings,
            "TIMEOUT",
            BindingFlags::DEFAULT | BindingFlags::FLATTEN_HIERARCHY,
        )
        .unwrap_err();
    assert!(matches!(err, TypeError::AmbiguousMatch));
}

#[test]
fn varargs_shape_tolerance() {
    let registry = suite::registry();
    let formatter = registry.canonicalize("com.example.text.Formatter").unwrap();
    let string = registry.canonicalize("java.lang.String").unwrap();

    // format(int, String[]) accepts (int, String, String) through the tail.
    let found = registry
        .get_method(
            &formatter,
            "format",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[Type::int(), string.clone(), string.clone()]),
        )
        .unwrap();
    assert!(found.is_some());

    // The exact-array spelling works too.
    let found = registry
        .get_method(
            &formatter,
            "format",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[Type::int(), string.make_array_type()]),
        )
        .unwrap();
    assert!(found.is_some());

    // Short by two arguments cannot bind the varargs tail.
    let none = registry
        .get_method(
            &formatter,
            "format",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[]),
        )
        .unwrap();
    assert_eq!(none, None);
}

#[test]
fn overload_selection_picks_the_most_specific_candidate() {
    let registry = suite::registry();
    let calc = registry.canonicalize("com.example.calc.Calculator").unwrap();
    let string = registry.canonicalize("java.lang.String").unwrap();

    // describe(Object) and describe(String) are both applicable to a String
    // argument; the String overload is more specific.
    let found = registry
        .get_method(
            &calc,
            "describe",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[string.clone()]),
        )
        .unwrap()
        .expect("describe should resolve");
    assert_eq!(found.parameters[0].param_type, string);

    // With an Object argument only describe(Object) is applicable.
    let found = registry
        .get_method(
            &calc,
            "describe",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[registry.object_type()]),
        )
        .unwrap()
        .expect("describe(Object) should resolve");
    assert_eq!(found.parameters[0].param_type, registry.object_type());
}

#[test]
fn equally_specific_overloads_are_ambiguous() {
    let registry = suite::registry();
    let calc = registry.canonicalize("com.example.calc.Calculator").unwrap();
    let integer = registry.canonicalize("java.lang.Integer").unwrap();

    // accept(Number) and accept(Comparable<Integer>) both take an Integer
    // and neither parameter type converts to the other.
    let err = registry
        .get_method(
            &calc,
            "accept",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[integer]),
        )
        .unwrap_err();
    assert!(matches!(err, TypeError::AmbiguousMatch));
}

#[test]
fn no_applicable_overload_is_not_an_error() {
    let registry = suite::registry();
    let calc = registry.canonicalize("com.example.calc.Calculator").unwrap();

    let none = registry
        .get_method(
            &calc,
            "accept",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[registry.object_type()]),
        )
        .unwrap();
    assert_eq!(none, None);

    let none = registry
        .get_method(
            &calc,
            "missing",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            None,
        )
        .unwrap();
    assert_eq!(none, None);
}

#[test]
fn constructor_resolution_by_argument_shape() {
    let registry = suite::registry();
    let calc = registry.canonicalize("com.example.calc.Calculator").unwrap();

    let no_args = registry
        .get_constructor(
            &calc,
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[]),
        )
        .unwrap()
        .expect("no-arg constructor");
    assert!(no_args.parameters.is_empty());

    let int_ctor = registry
        .get_constructor(
            &calc,
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[Type::int()]),
        )
        .unwrap()
        .expect("int constructor");
    assert_eq!(int_ctor.parameters.len(), 1);

    // No argument list and several constructors with different shapes is
    // irreducibly ambiguous.
    let err = registry
        .get_constructor(&calc, BindingFlags::DEFAULT, CallingConvention::Any, None)
        .unwrap_err();
    assert!(matches!(err, TypeError::AmbiguousMatch));
}

#[test]
fn exact_binding_requires_equivalent_parameter_types() {
    let registry = suite::registry();
    let calc = registry.canonicalize("com.example.calc.Calculator").unwrap();
    let string = registry.canonicalize("java.lang.String").unwrap();
    let integer = registry.canonicalize("java.lang.Integer").unwrap();

    // Under EXACT_BINDING the Integer argument no longer converts to
    // Number or Comparable<Integer>.
    let none = registry
        .get_method(
            &calc,
            "accept",
            BindingFlags::DEFAULT | BindingFlags::EXACT_BINDING,
            CallingConvention::Any,
            Some(&[integer]),
        )
        .unwrap();
    assert_eq!(none, None);

    let found = registry
        .get_method(
            &calc,
            "describe",
            BindingFlags::DEFAULT | BindingFlags::EXACT_BINDING,
            CallingConvention::Any,
            Some(&[string.clone()]),
        )
        .unwrap()
        .expect("exact describe(String)");
    assert_eq!(found.parameters[0].param_type, string);
}

#[test]
fn substituted_signatures_drive_overload_matching() {
    let registry = suite::registry();
    let array_list = registry.canonicalize("java.util.ArrayList").unwrap();
    let string = registry.canonicalize("java.lang.String").unwrap();
    let array_list_string = registry
        .make_generic_type(&array_list, vec![string.clone()])
        .unwrap();

    let found = registry
        .get_method(
            &array_list_string,
            "add",
            BindingFlags::DEFAULT,
            CallingConvention::Any,
            Some(&[string.clone()]),
        )
        .unwrap()
        .expect("add(String) on ArrayList<String>");
    assert_eq!(found.parameters[0].param_type, string);
    assert_eq!(found.return_type, Type::boolean());
}
