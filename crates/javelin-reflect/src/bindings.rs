use crate::ty::{Type, TypeVarId};

/// An ordered mapping from generic parameters to bound type arguments.
///
/// Declaration order is preserved; slot `i` pairs the definition's `i`-th
/// parameter with the `i`-th argument. A definition's own bindings map every
/// parameter to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeBindings {
    parameters: Vec<TypeVarId>,
    arguments: Vec<Type>,
}

impl TypeBindings {
    /// The shared empty binding set.
    pub fn empty() -> &'static TypeBindings {
        static EMPTY: TypeBindings = TypeBindings {
            parameters: Vec::new(),
            arguments: Vec::new(),
        };
        &EMPTY
    }

    pub(crate) fn new(parameters: Vec<TypeVarId>, arguments: Vec<Type>) -> TypeBindings {
        debug_assert_eq!(parameters.len(), arguments.len());
        TypeBindings {
            parameters,
            arguments,
        }
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// True only when every slot carries a concrete argument, none left as
    /// the parameter itself.
    pub fn has_bound_parameters(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.parameters
            .iter()
            .zip(&self.arguments)
            .all(|(param, arg)| !matches!(arg, Type::TypeVar(v) if v == param))
    }

    pub fn generic_parameters(&self) -> impl Iterator<Item = Type> + '_ {
        self.parameters.iter().map(|&v| Type::TypeVar(v))
    }

    pub fn bound_types(&self) -> &[Type] {
        &self.arguments
    }

    pub fn bound_type(&self, index: usize) -> Option<&Type> {
        self.arguments.get(index)
    }

    /// Replace every occurrence of a bound parameter in `ty` with its
    /// argument. Parameters not covered by this binding set (e.g. a method's
    /// own type variables) pass through untouched.
    pub fn substitute(&self, ty: &Type) -> Type {
        if self.is_empty() {
            return ty.clone();
        }
        match ty {
            Type::TypeVar(v) => {
                for (param, arg) in self.parameters.iter().zip(&self.arguments) {
                    if param == v {
                        return arg.clone();
                    }
                }
                ty.clone()
            }
            Type::Declared { class, args } => Type::Declared {
                class: *class,
                args: args.iter().map(|a| self.substitute(a)).collect(),
            },
            Type::Array(element) => Type::Array(Box::new(self.substitute(element))),
            Type::Wildcard {
                extends_bound,
                super_bound,
            } => Type::Wildcard {
                extends_bound: Box::new(self.substitute(extends_bound)),
                super_bound: Box::new(self.substitute(super_bound)),
            },
            Type::Compound { base, interfaces } => Type::Compound {
                base: Box::new(self.substitute(base)),
                interfaces: interfaces.iter().map(|i| self.substitute(i)).collect(),
            },
            Type::Erased(_) | Type::Primitive(_) | Type::Bottom | Type::Null => ty.clone(),
        }
    }
}
