//! Built-in `java.lang` core declarations.
//!
//! The registry needs the root object type and the primitive box classes to
//! exist before any user class loads: wildcard construction, boxing
//! conversions, and default generic-parameter bounds all reach for them.
//! This module carries a minimal, self-contained stub of that core — every
//! reference inside it stays inside the set, so installing it can never
//! touch the injected resolver.

use javelin_meta::{
    ClassDecl, ConstructorDecl, FieldDecl, MethodDecl, Modifiers, PrimitiveKind, TypeParamDecl,
    TypeRef,
};

const PUBLIC: Modifiers = Modifiers::PUBLIC;

/// The built-in declaration for `binary_name`, if it is part of the core set.
pub(crate) fn core_declaration(binary_name: &str) -> Option<ClassDecl> {
    Some(match binary_name {
        "java.lang.Object" => object(),
        "java.lang.String" => string(),
        "java.lang.CharSequence" => char_sequence(),
        "java.lang.Comparable" => comparable(),
        "java.lang.Number" => number(),
        "java.lang.Cloneable" => marker_interface("java.lang.Cloneable"),
        "java.io.Serializable" => marker_interface("java.io.Serializable"),
        "java.lang.Void" => void_box(),
        "java.lang.Boolean" => simple_box("java.lang.Boolean", PrimitiveKind::Boolean),
        "java.lang.Character" => simple_box("java.lang.Character", PrimitiveKind::Char),
        "java.lang.Byte" => numeric_box("java.lang.Byte", PrimitiveKind::Byte),
        "java.lang.Short" => numeric_box("java.lang.Short", PrimitiveKind::Short),
        "java.lang.Integer" => numeric_box("java.lang.Integer", PrimitiveKind::Int),
        "java.lang.Long" => numeric_box("java.lang.Long", PrimitiveKind::Long),
        "java.lang.Float" => numeric_box("java.lang.Float", PrimitiveKind::Float),
        "java.lang.Double" => numeric_box("java.lang.Double", PrimitiveKind::Double),
        _ => return None,
    })
}

fn object() -> ClassDecl {
    let mut decl = ClassDecl::new("java.lang.Object", PUBLIC)
        .with_method(MethodDecl::new("hashCode", PUBLIC, vec![], TypeRef::int()))
        .with_method(MethodDecl::new(
            "equals",
            PUBLIC,
            vec![TypeRef::object()],
            TypeRef::boolean(),
        ))
        .with_method(MethodDecl::new(
            "toString",
            PUBLIC,
            vec![],
            TypeRef::string(),
        ))
        .with_method(MethodDecl::new(
            "clone",
            Modifiers::PROTECTED,
            vec![],
            TypeRef::object(),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]));
    decl.super_class = None;
    decl
}

fn string() -> ClassDecl {
    ClassDecl::new("java.lang.String", PUBLIC | Modifiers::FINAL)
        .with_interface(TypeRef::named("java.io.Serializable"))
        .with_interface(TypeRef::generic(
            "java.lang.Comparable",
            vec![TypeRef::string()],
        ))
        .with_interface(TypeRef::named("java.lang.CharSequence"))
        .with_method(MethodDecl::new("length", PUBLIC, vec![], TypeRef::int()))
        .with_method(MethodDecl::new(
            "charAt",
            PUBLIC,
            vec![TypeRef::int()],
            TypeRef::Primitive(PrimitiveKind::Char),
        ))
        .with_method(MethodDecl::new(
            "isEmpty",
            PUBLIC,
            vec![],
            TypeRef::boolean(),
        ))
        .with_method(MethodDecl::new(
            "substring",
            PUBLIC,
            vec![TypeRef::int(), TypeRef::int()],
            TypeRef::string(),
        ))
        .with_method(MethodDecl::new(
            "compareTo",
            PUBLIC,
            vec![TypeRef::string()],
            TypeRef::int(),
        ))
        .with_method(MethodDecl::new(
            "valueOf",
            PUBLIC | Modifiers::STATIC,
            vec![TypeRef::object()],
            TypeRef::string(),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![TypeRef::string()]))
}

fn char_sequence() -> ClassDecl {
    ClassDecl::interface("java.lang.CharSequence", PUBLIC)
        .with_method(MethodDecl::new(
            "length",
            PUBLIC | Modifiers::ABSTRACT,
            vec![],
            TypeRef::int(),
        ))
        .with_method(MethodDecl::new(
            "charAt",
            PUBLIC | Modifiers::ABSTRACT,
            vec![TypeRef::int()],
            TypeRef::Primitive(PrimitiveKind::Char),
        ))
}

fn comparable() -> ClassDecl {
    ClassDecl::interface("java.lang.Comparable", PUBLIC)
        .with_type_param(TypeParamDecl::new("T"))
        .with_method(MethodDecl::new(
            "compareTo",
            PUBLIC | Modifiers::ABSTRACT,
            vec![TypeRef::var("T")],
            TypeRef::int(),
        ))
}

fn number() -> ClassDecl {
    let abstract_method = |name: &str, kind: PrimitiveKind| {
        MethodDecl::new(
            name,
            PUBLIC | Modifiers::ABSTRACT,
            vec![],
            TypeRef::Primitive(kind),
        )
    };
    ClassDecl::new("java.lang.Number", PUBLIC | Modifiers::ABSTRACT)
        .with_interface(TypeRef::named("java.io.Serializable"))
        .with_method(abstract_method("intValue", PrimitiveKind::Int))
        .with_method(abstract_method("longValue", PrimitiveKind::Long))
        .with_method(abstract_method("floatValue", PrimitiveKind::Float))
        .with_method(abstract_method("doubleValue", PrimitiveKind::Double))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![]))
}

fn marker_interface(binary_name: &str) -> ClassDecl {
    ClassDecl::interface(binary_name, PUBLIC)
}

fn void_box() -> ClassDecl {
    ClassDecl::new("java.lang.Void", PUBLIC | Modifiers::FINAL)
}

/// A box class that does not extend `Number` (`Boolean`, `Character`).
fn simple_box(binary_name: &str, kind: PrimitiveKind) -> ClassDecl {
    let value_method = format!("{}Value", kind.keyword());
    ClassDecl::new(binary_name, PUBLIC | Modifiers::FINAL)
        .with_interface(TypeRef::named("java.io.Serializable"))
        .with_interface(TypeRef::generic(
            "java.lang.Comparable",
            vec![TypeRef::named(binary_name)],
        ))
        .with_method(MethodDecl::new(
            value_method,
            PUBLIC,
            vec![],
            TypeRef::Primitive(kind),
        ))
        .with_method(MethodDecl::new(
            "valueOf",
            PUBLIC | Modifiers::STATIC,
            vec![TypeRef::Primitive(kind)],
            TypeRef::named(binary_name),
        ))
        .with_constructor(ConstructorDecl::new(PUBLIC, vec![TypeRef::Primitive(kind)]))
}

fn numeric_box(binary_name: &str, kind: PrimitiveKind) -> ClassDecl {
    let mut decl = simple_box(binary_name, kind).with_super(TypeRef::named("java.lang.Number"));
    decl.fields.push(FieldDecl::new(
        "MIN_VALUE",
        PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
        TypeRef::Primitive(kind),
    ));
    decl.fields.push(FieldDecl::new(
        "MAX_VALUE",
        PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
        TypeRef::Primitive(kind),
    ));
    decl
}
