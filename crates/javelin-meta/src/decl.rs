use serde::{Deserialize, Serialize};

use crate::modifiers::Modifiers;
use crate::ty_ref::TypeRef;

/// An erased class declaration: everything the host platform knows about one
/// class, in declaration order.
///
/// Names are dotted binary names (`java.util.Map$Entry` for nested classes).
/// A declaration is self-contained data; nothing here is resolved or
/// canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub binary_name: String,
    pub modifiers: Modifiers,
    /// Binary name of the enclosing class, for nested classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_class: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParamDecl>,
    /// Absent only for `java.lang.Object`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<ConstructorDecl>,
    /// Binary names of directly nested classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested_classes: Vec<String>,
}

impl ClassDecl {
    pub fn new(binary_name: impl Into<String>, modifiers: Modifiers) -> ClassDecl {
        ClassDecl {
            binary_name: binary_name.into(),
            modifiers,
            declaring_class: None,
            type_params: Vec::new(),
            super_class: Some(TypeRef::object()),
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            nested_classes: Vec::new(),
        }
    }

    /// An interface declaration (no superclass in the hierarchy-walk sense).
    pub fn interface(binary_name: impl Into<String>, modifiers: Modifiers) -> ClassDecl {
        let mut decl = ClassDecl::new(
            binary_name,
            modifiers | Modifiers::INTERFACE | Modifiers::ABSTRACT,
        );
        decl.super_class = Some(TypeRef::object());
        decl
    }

    pub fn with_super(mut self, super_class: TypeRef) -> ClassDecl {
        self.super_class = Some(super_class);
        self
    }

    pub fn with_interface(mut self, interface: TypeRef) -> ClassDecl {
        self.interfaces.push(interface);
        self
    }

    pub fn with_type_param(mut self, param: TypeParamDecl) -> ClassDecl {
        self.type_params.push(param);
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> ClassDecl {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> ClassDecl {
        self.methods.push(method);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> ClassDecl {
        self.constructors.push(constructor);
        self
    }

    pub fn with_nested_class(mut self, binary_name: impl Into<String>) -> ClassDecl {
        self.nested_classes.push(binary_name.into());
        self
    }

    pub fn with_declaring_class(mut self, binary_name: impl Into<String>) -> ClassDecl {
        self.declaring_class = Some(binary_name.into());
        self
    }
}

/// A generic type parameter declaration (`T extends Comparable<T>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParamDecl {
    pub name: String,
    /// Upper bound; `None` means `java.lang.Object`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<TypeRef>,
}

impl TypeParamDecl {
    pub fn new(name: impl Into<String>) -> TypeParamDecl {
        TypeParamDecl {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: TypeRef) -> TypeParamDecl {
        TypeParamDecl {
            name: name.into(),
            bound: Some(bound),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub modifiers: Modifiers,
    pub field_type: TypeRef,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, modifiers: Modifiers, field_type: TypeRef) -> FieldDecl {
        FieldDecl {
            name: name.into(),
            modifiers,
            field_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParamDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
}

impl MethodDecl {
    pub fn new(
        name: impl Into<String>,
        modifiers: Modifiers,
        parameters: Vec<TypeRef>,
        return_type: TypeRef,
    ) -> MethodDecl {
        MethodDecl {
            name: name.into(),
            modifiers,
            type_params: Vec::new(),
            parameters,
            return_type,
        }
    }

    pub fn with_type_param(mut self, param: TypeParamDecl) -> MethodDecl {
        self.type_params.push(param);
        self
    }

    pub fn is_varargs(&self) -> bool {
        self.modifiers.is_varargs()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<TypeRef>,
}

impl ConstructorDecl {
    pub fn new(modifiers: Modifiers, parameters: Vec<TypeRef>) -> ConstructorDecl {
        ConstructorDecl {
            modifiers,
            parameters,
        }
    }

    pub fn is_varargs(&self) -> bool {
        self.modifiers.is_varargs()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn class_decl_json_round_trip() {
        let decl = ClassDecl::new("com.example.Box", Modifiers::PUBLIC)
            .with_type_param(TypeParamDecl::new("T"))
            .with_field(FieldDecl::new(
                "value",
                Modifiers::PRIVATE,
                TypeRef::var("T"),
            ))
            .with_method(MethodDecl::new(
                "get",
                Modifiers::PUBLIC,
                vec![],
                TypeRef::var("T"),
            ))
            .with_constructor(ConstructorDecl::new(
                Modifiers::PUBLIC,
                vec![TypeRef::var("T")],
            ));

        let json = serde_json::to_string_pretty(&decl).unwrap();
        let back: ClassDecl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, decl);
    }

    #[test]
    fn defaults_are_deserialized_for_missing_lists() {
        let decl: ClassDecl = serde_json::from_str(
            r#"{"binary_name": "com.example.Marker", "modifiers": 1}"#,
        )
        .unwrap();
        assert!(decl.fields.is_empty());
        assert!(decl.methods.is_empty());
        assert_eq!(decl.super_class, None);
    }
}
