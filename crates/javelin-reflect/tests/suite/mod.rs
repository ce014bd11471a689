//! Shared fixture: a small collections-flavored class set plus the
//! hierarchies the lookup tests exercise.

use javelin_meta::{
    ClassDecl, ConstructorDecl, FieldDecl, MethodDecl, Modifiers, TypeParamDecl, TypeRef,
};
use javelin_reflect::{MapResolver, TypeRegistry};

const PUBLIC: Modifiers = Modifiers::PUBLIC;

pub fn registry() -> TypeRegistry {
    TypeRegistry::with_resolver(Box::new(MapResolver::from_declarations(declarations())))
}

pub fn declarations() -> Vec<ClassDecl> {
    vec![
        collection(),
        list(),
        abstract_list(),
        array_list(),
        shape_base(),
        shape_sub(),
        const_a(),
        const_b(),
        const_impl(),
        formatter(),
        calculator(),
        outer(),
        outer_inner(),
        outer_secret(),
        color_enum(),
    ]
}

fn collection() -> ClassDecl {
    ClassDecl::interface("java.util.Collection", PUBLIC)
        .with_type_param(TypeParamDecl::new("E"))
        .with_method(MethodDecl::new(
            "size",
            PUBLIC | Modifiers::ABSTRACT,
            vec![],
            TypeRef::int(),
        ))
        .with_method(MethodDecl::new(
            "add",
            PUBLIC | Modifiers::ABSTRACT,
            vec![TypeRef::var("E")],
            TypeRef::boolean(),
        ))
}

fn list() -> ClassDecl {
    ClassDecl::interface("java.util.List", PUBLIC)
        .with_type_param(TypeParamDecl::new("E"))
        .with_interface(TypeRef::generic("java.util.Collection", vec![TypeRef::var("E")]))
        .with_method(MethodDecl::new(
            "get",
            PUBLIC | Modifiers::ABSTRACT,
            vec![TypeRef::int()],
            TypeRef::var("E"),
        ))
        .with_method(MethodDecl::new(
            "set",
            PUBLIC | Modifiers::ABSTRACT,
            vec![TypeRef::int(), TypeRef::var("E")],
            TypeRef::var("E"),
        ))
}

fn abstract_list() -> ClassDecl {
    ClassDecl::new(
        "java.util.AbstractList",
        PUBLIC | Modifiers::ABSTRACT,
    )
    .with_type_param(TypeParamDecl::new("E"))
    .with_interface(TypeRef::generic("java.util.List", vec![TypeRef::var("E")]))
    .with_method(MethodDecl::new(
        "get",
        PUBLIC | Modifiers::ABSTRACT,
        vec![TypeRef::int()],
        TypeRef::var("E"),
    ))
    .with_constructor(ConstructorDecl::new(Modifiers::PROTECTED, vec![]))
}

fn array_list() -> ClassDecl {
    ClassDecl::new("java.util.ArrayList", PUBLIC)
        .with_type_param(TypeParamDecl::new("E"))
        .with_super(TypeRef::generic(
            "java.util.AbstractList",
            vec![TypeRef::var("E")],
        ))
        .with_interface(TypeRef::generic("java.util.List", vec![TypeRef::var("E")]))
        .with_interface(TypeRef::named("java.lang.Cloneable"))
        .with_interface(TypeRef::named("java.io.Serializable"))
        .with_method(MethodDecl::new(
            "get",
            PUBLIC,
            vec![TypeRef::int()],
            TypeRef::var("E"),
        ))
        .with_method(MethodDecl::new(
            "add",
            PUBLIC,
            vec![TypeRef::var("E")],
            TypeRef::boolean(),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![TypeRef::int()]))
        .with_constructor(ConstructorDecl::new(
            PUBLIC,
            vec![TypeRef::generic(
                "java.util.Collection",
                vec![TypeRef::var("E")],
            )],
        ))
}

/// Base class with package-private members for the visibility-asymmetry
/// tests, plus a public method the override tests hide.
fn shape_base() -> ClassDecl {
    ClassDecl::new("com.example.shapes.Shape", PUBLIC)
        .with_method(MethodDecl::new(
            "render",
            PUBLIC,
            vec![],
            TypeRef::string(),
        ))
        .with_method(MethodDecl::new(
            "recompute",
            Modifiers::empty(),
            vec![],
            TypeRef::void(),
        ))
        .with_method(MethodDecl::new(
            "invalidate",
            Modifiers::FINAL,
            vec![],
            TypeRef::void(),
        ))
        .with_field(FieldDecl::new("stamp", Modifiers::empty(), TypeRef::int()))
        .with_field(FieldDecl::new(
            "CACHE_LIMIT",
            PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
            TypeRef::int(),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
}

fn shape_sub() -> ClassDecl {
    ClassDecl::new("com.example.shapes.Circle", PUBLIC)
        .with_super(TypeRef::named("com.example.shapes.Shape"))
        .with_method(MethodDecl::new(
            "render",
            PUBLIC,
            vec![],
            TypeRef::string(),
        ))
        .with_method(MethodDecl::new(
            "radius",
            PUBLIC,
            vec![],
            TypeRef::Primitive(javelin_meta::PrimitiveKind::Double),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
}

fn const_a() -> ClassDecl {
    ClassDecl::interface("com.example.cfg.Defaults", PUBLIC).with_field(FieldDecl::new(
        "TIMEOUT",
        PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
        TypeRef::int(),
    ))
}

fn const_b() -> ClassDecl {
    ClassDecl::interface("com.example.cfg.Overrides", PUBLIC).with_field(FieldDecl::new(
        "TIMEOUT",
        PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
        TypeRef::int(),
    ))
}

fn const_impl() -> ClassDecl {
    ClassDecl::new("com.example.cfg.Settings", PUBLIC)
        .with_interface(TypeRef::named("com.example.cfg.Defaults"))
        .with_interface(TypeRef::named("com.example.cfg.Overrides"))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
}

/// Varargs candidates.
fn formatter() -> ClassDecl {
    ClassDecl::new("com.example.text.Formatter", PUBLIC)
        .with_method(MethodDecl::new(
            "format",
            PUBLIC | Modifiers::VARARGS,
            vec![TypeRef::int(), TypeRef::array(TypeRef::string())],
            TypeRef::string(),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
}

/// Overload-selection candidates.
fn calculator() -> ClassDecl {
    ClassDecl::new("com.example.calc.Calculator", PUBLIC)
        .with_method(MethodDecl::new(
            "describe",
            PUBLIC,
            vec![TypeRef::object()],
            TypeRef::string(),
        ))
        .with_method(MethodDecl::new(
            "describe",
            PUBLIC,
            vec![TypeRef::string()],
            TypeRef::string(),
        ))
        .with_method(MethodDecl::new(
            "accept",
            PUBLIC,
            vec![TypeRef::named("java.lang.Number")],
            TypeRef::void(),
        ))
        .with_method(MethodDecl::new(
            "accept",
            PUBLIC,
            vec![TypeRef::generic(
                "java.lang.Comparable",
                vec![TypeRef::named("java.lang.Integer")],
            )],
            TypeRef::void(),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![TypeRef::int()]))
}

fn outer() -> ClassDecl {
    ClassDecl::new("com.example.Outer", PUBLIC)
        .with_nested_class("com.example.Outer$Inner")
        .with_nested_class("com.example.Outer$Secret")
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
}

fn outer_inner() -> ClassDecl {
    ClassDecl::new("com.example.Outer$Inner", PUBLIC | Modifiers::STATIC)
        .with_declaring_class("com.example.Outer")
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
}

fn outer_secret() -> ClassDecl {
    ClassDecl::new("com.example.Outer$Secret", Modifiers::STATIC)
        .with_declaring_class("com.example.Outer")
}

fn color_enum() -> ClassDecl {
    let constant = |name: &str| {
        FieldDecl::new(
            name,
            PUBLIC | Modifiers::STATIC | Modifiers::FINAL | Modifiers::ENUM,
            TypeRef::named("com.example.paint.Color"),
        )
    };
    ClassDecl::new(
        "com.example.paint.Color",
        PUBLIC | Modifiers::FINAL | Modifiers::ENUM,
    )
    .with_field(constant("RED"))
    .with_field(constant("GREEN"))
    .with_field(constant("BLUE"))
}
