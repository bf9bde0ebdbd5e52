//! Type representation.
//!
//! `Type` is a closed sum over every canonical type plus the *synthetic*
//! variants produced by the parser layer (`Unbound`, `TypeList`,
//! `CallableArgument`, `Ellipsis`, `RawExpression`). The analyzer is a
//! `Type -> Type` transformation that eliminates the synthetic variants;
//! canonical input passes through it unchanged.
//!
//! Equality is structural: provenance is ignored everywhere, union members
//! compare as a set, and a few variants compare by identity (type variables by
//! id, classes by fully-qualified name) the way the checker consuming them
//! expects.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use typa_common::Provenance;

// =============================================================================
// Any and the trivial types
// =============================================================================

/// Where an `Any` came from.
///
/// Downstream checks use this to decide whether an `Any` deserves a report
/// (explicit annotations) or should stay silent (errors already reported).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOfAny {
    /// Missing annotation.
    Unannotated,
    /// Written as `Any` in the source.
    Explicit,
    /// Stands in for a name imported from an unanalyzed module.
    FromUnimportedType,
    /// A generic used without its type arguments under the permissive policy.
    FromOmittedGenerics,
    /// Result of an error that has already been reported.
    FromError,
    /// Internal placeholder for special forms and unresolved names.
    SpecialForm,
    /// Derived from another `Any`.
    FromAnotherAny,
    /// Implementation detail that should never be visible to users.
    ImplementationArtifact,
}

/// The dynamic type.
///
/// All `Any` types are equal regardless of provenance.
#[derive(Clone, Debug)]
pub struct AnyType {
    pub type_of_any: TypeOfAny,
    pub missing_import_name: Option<String>,
    pub pos: Provenance,
}

impl AnyType {
    pub fn new(type_of_any: TypeOfAny) -> Self {
        Self::at(type_of_any, Provenance::UNKNOWN)
    }

    pub fn at(type_of_any: TypeOfAny, pos: Provenance) -> Self {
        Self {
            type_of_any,
            missing_import_name: None,
            pos,
        }
    }
}

impl PartialEq for AnyType {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for AnyType {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoneType {
    pub pos: Provenance,
}

/// The uninhabited (bottom) type. `NoReturn` is the same type with
/// `is_noreturn` set for display.
#[derive(Clone, Debug, Default)]
pub struct UninhabitedType {
    pub is_noreturn: bool,
    pub pos: Provenance,
}

impl PartialEq for UninhabitedType {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for UninhabitedType {}

/// Type of a deleted variable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletedType {
    pub source: Option<String>,
    pub pos: Provenance,
}

// =============================================================================
// Type variables
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variance {
    Invariant,
    Covariant,
    Contravariant,
}

/// Numeric identity of a bound type variable.
///
/// Class-scope bindings count up from 1, function-scope bindings count down
/// from -1, so the two never collide within one scope chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVarId(pub i32);

impl TypeVarId {
    pub const fn is_class_var(self) -> bool {
        self.0 > 0
    }

    pub const fn is_function_var(self) -> bool {
        self.0 < 0
    }
}

/// A type-variable binding record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeVarDef {
    pub name: String,
    pub fullname: String,
    pub id: TypeVarId,
    /// Permitted value set for constrained type variables (empty otherwise).
    pub values: Vec<Type>,
    pub upper_bound: Box<Type>,
    pub variance: Variance,
    pub pos: Provenance,
}

/// Reference to a bound type variable.
///
/// Two references are equal when they name the same binding.
#[derive(Clone, Debug)]
pub struct TypeVarType {
    pub def: TypeVarDef,
    pub pos: Provenance,
}

impl TypeVarType {
    pub fn new(def: TypeVarDef, pos: Provenance) -> Self {
        Self { def, pos }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }
}

impl PartialEq for TypeVarType {
    fn eq(&self, other: &Self) -> bool {
        self.def.id == other.def.id && self.def.fullname == other.def.fullname
    }
}

impl Eq for TypeVarType {}

// =============================================================================
// Classes and instances
// =============================================================================

/// Class descriptor.
///
/// Identity is the fully-qualified name.
#[derive(Clone, Debug)]
pub struct ClassInfo {
    pub fullname: String,
    /// Names of the declared type variables; their count is the class arity.
    pub type_vars: Vec<String>,
    pub is_enum: bool,
    /// Declared fixed-shape tuple base (`class P(Tuple[int, str])`).
    pub tuple_base: Option<Box<TupleType>>,
    /// Declared structural record base (`class Movie(TypedDict)`).
    pub record_base: Option<Box<RecordType>>,
}

impl ClassInfo {
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            fullname: fullname.into(),
            type_vars: Vec::new(),
            is_enum: false,
            tuple_base: None,
            record_base: None,
        }
    }

    pub fn generic(fullname: impl Into<String>, type_vars: &[&str]) -> Self {
        Self {
            type_vars: type_vars.iter().map(|name| (*name).to_string()).collect(),
            ..Self::new(fullname)
        }
    }

    /// Unqualified class name.
    pub fn name(&self) -> &str {
        short_name(&self.fullname)
    }

    pub fn arity(&self) -> usize {
        self.type_vars.len()
    }
}

impl PartialEq for ClassInfo {
    fn eq(&self, other: &Self) -> bool {
        self.fullname == other.fullname
    }
}

impl Eq for ClassInfo {}

/// Instance of a class, with type arguments.
#[derive(Clone, Debug)]
pub struct Instance {
    pub class: Arc<ClassInfo>,
    pub args: Vec<Type>,
    /// Set by arity fixup when the written arguments had the wrong count, so
    /// consumers can suppress follow-on errors.
    pub invalid: bool,
    /// Literal value known for a `Final` variable of this type.
    pub last_known_value: Option<Box<LiteralType>>,
    pub pos: Provenance,
}

impl Instance {
    pub fn new(class: Arc<ClassInfo>, args: Vec<Type>) -> Self {
        Self::at(class, args, Provenance::UNKNOWN)
    }

    pub fn at(class: Arc<ClassInfo>, args: Vec<Type>, pos: Provenance) -> Self {
        Self {
            class,
            args,
            invalid: false,
            last_known_value: None,
            pos,
        }
    }

    pub fn has_expected_arity(&self) -> bool {
        self.args.len() == self.class.arity()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
            && self.args == other.args
            && self.last_known_value == other.last_known_value
    }
}

impl Eq for Instance {}

// =============================================================================
// Structural types
// =============================================================================

/// Fixed-length tuple with a class-instance fallback.
#[derive(Clone, Debug)]
pub struct TupleType {
    pub items: Vec<Type>,
    pub fallback: Instance,
    /// Written as a bare `(A, B)` rather than `Tuple[A, B]`.
    pub implicit: bool,
    pub pos: Provenance,
}

impl TupleType {
    pub fn new(items: Vec<Type>, fallback: Instance) -> Self {
        Self {
            items,
            fallback,
            implicit: false,
            pos: Provenance::UNKNOWN,
        }
    }
}

impl PartialEq for TupleType {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.fallback == other.fallback
    }
}

impl Eq for TupleType {}

/// Structural mapping type with named, typed fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordType {
    pub items: IndexMap<String, Type>,
    pub required_keys: FxHashSet<String>,
    pub fallback: Instance,
    pub pos: Provenance,
}

/// Kind of a callable argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// Positional, required.
    Pos,
    /// Positional with a default.
    Opt,
    /// `*args`.
    Star,
    /// Keyword-only, required.
    Named,
    /// `**kwargs`.
    Star2,
    /// Keyword-only with a default.
    NamedOpt,
}

impl ArgKind {
    pub const fn is_star(self) -> bool {
        matches!(self, Self::Star | Self::Star2)
    }

    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Opt | Self::NamedOpt)
    }
}

/// Callable signature.
#[derive(Clone, Debug)]
pub struct CallableType {
    pub arg_types: Vec<Type>,
    pub arg_kinds: Vec<ArgKind>,
    pub arg_names: Vec<Option<String>>,
    pub ret_type: Box<Type>,
    /// Instance of the builtin function class, when it was available.
    pub fallback: Option<Box<Instance>>,
    /// Type variables the signature quantifies over.
    pub variables: Vec<TypeVarDef>,
    /// Written as `Callable[..., R]`: accepts arbitrary arguments.
    pub is_ellipsis_args: bool,
    pub pos: Provenance,
}

impl CallableType {
    pub fn new(
        arg_types: Vec<Type>,
        arg_kinds: Vec<ArgKind>,
        arg_names: Vec<Option<String>>,
        ret_type: Type,
    ) -> Self {
        Self {
            arg_types,
            arg_kinds,
            arg_names,
            ret_type: Box::new(ret_type),
            fallback: None,
            variables: Vec::new(),
            is_ellipsis_args: false,
            pos: Provenance::UNKNOWN,
        }
    }

    /// `(*args: T, **kwargs: T) -> R` with the ellipsis flag set.
    pub fn ellipsis_args(arg_type: Type, ret_type: Type) -> Self {
        Self {
            is_ellipsis_args: true,
            ..Self::new(
                vec![arg_type.clone(), arg_type],
                vec![ArgKind::Star, ArgKind::Star2],
                vec![None, None],
                ret_type,
            )
        }
    }
}

impl PartialEq for CallableType {
    fn eq(&self, other: &Self) -> bool {
        self.arg_types == other.arg_types
            && self.arg_kinds == other.arg_kinds
            && self.arg_names == other.arg_names
            && self.ret_type == other.ret_type
            && self.is_ellipsis_args == other.is_ellipsis_args
    }
}

impl Eq for CallableType {}

/// Union of types. Members are flat and unique when built through
/// [`make_union`](crate::make_union); equality ignores member order.
#[derive(Clone, Debug)]
pub struct UnionType {
    pub items: Vec<Type>,
    pub pos: Provenance,
}

impl UnionType {
    pub fn new(items: Vec<Type>, pos: Provenance) -> Self {
        Self { items, pos }
    }
}

impl PartialEq for UnionType {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|item| other.items.contains(item))
            && other.items.iter().all(|item| self.items.contains(item))
    }
}

impl Eq for UnionType {}

/// Scalar value of a literal type. Enum members are `Str` values with the
/// enum class as fallback; bytes are `Str` values with `builtins.bytes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

#[derive(Clone, Debug)]
pub struct LiteralType {
    pub value: LiteralValue,
    pub fallback: Instance,
    pub pos: Provenance,
}

impl LiteralType {
    pub fn new(value: LiteralValue, fallback: Instance, pos: Provenance) -> Self {
        Self {
            value,
            fallback,
            pos,
        }
    }
}

impl PartialEq for LiteralType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.fallback == other.fallback
    }
}

impl Eq for LiteralType {}

/// `Type[C]`: the class object of `C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeType {
    pub item: Box<Type>,
    pub pos: Provenance,
}

/// `*T` inside a tuple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarType {
    pub item: Box<Type>,
    pub pos: Provenance,
}

/// Forward reference to a class that is not materialized yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderType {
    pub fullname: Option<String>,
    pub args: Vec<Type>,
    pub pos: Provenance,
}

// =============================================================================
// Synthetic (unresolved) forms
// =============================================================================

/// Unresolved reference: a dotted name with optional bracketed arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnboundType {
    pub name: String,
    pub args: Vec<Type>,
    /// Nullable suffix was written (`X?` style shorthand).
    pub optional: bool,
    /// Written as `Tuple[()]`.
    pub empty_tuple_index: bool,
    /// The expression came from a string literal with this value.
    pub original_str_expr: Option<String>,
    /// Fully-qualified class of that string literal (`builtins.str`, ...).
    pub original_str_fallback: Option<String>,
    pub pos: Provenance,
}

impl UnboundType {
    pub fn new(name: impl Into<String>, args: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            args,
            optional: false,
            empty_tuple_index: false,
            original_str_expr: None,
            original_str_fallback: None,
            pos: Provenance::UNKNOWN,
        }
    }

    /// Same expression with a different argument list.
    pub fn copy_with_args(&self, args: Vec<Type>) -> Self {
        Self {
            args,
            ..self.clone()
        }
    }
}

/// Bracketed `[A, B]` list; only valid as the first argument of `Callable`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeList {
    pub items: Vec<Type>,
    pub pos: Provenance,
}

/// `Arg(T, 'name')`-style entry in a callable argument list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallableArgument {
    pub typ: Box<Type>,
    pub name: Option<String>,
    pub constructor: Option<String>,
    pub pos: Provenance,
}

/// The literal `...`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EllipsisType {
    pub pos: Provenance,
}

/// Raw scalar expression found where a type was expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawExpressionType {
    /// `None` for scalars that cannot be literal values (float, complex) and
    /// arbitrary expressions.
    pub literal_value: Option<LiteralValue>,
    pub base_type_name: String,
    pub note: Option<String>,
    pub pos: Provenance,
}

impl RawExpressionType {
    pub fn new(literal_value: Option<LiteralValue>, base_type_name: impl Into<String>) -> Self {
        Self {
            literal_value,
            base_type_name: base_type_name.into(),
            note: None,
            pos: Provenance::UNKNOWN,
        }
    }

    /// Unqualified name of the scalar's class (`float`, `int`, ...).
    pub fn simple_name(&self) -> &str {
        short_name(&self.base_type_name)
    }
}

// =============================================================================
// Type
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Any(AnyType),
    None(NoneType),
    Uninhabited(UninhabitedType),
    Deleted(DeletedType),
    TypeVar(TypeVarType),
    Instance(Instance),
    Tuple(TupleType),
    Record(RecordType),
    Callable(CallableType),
    Union(UnionType),
    Literal(LiteralType),
    TypeType(TypeType),
    Star(StarType),
    Placeholder(PlaceholderType),
    // Synthetic forms, eliminated by analysis.
    Unbound(UnboundType),
    TypeList(TypeList),
    CallableArgument(CallableArgument),
    Ellipsis(EllipsisType),
    RawExpression(RawExpressionType),
}

impl Type {
    pub fn any(type_of_any: TypeOfAny) -> Self {
        Self::Any(AnyType::new(type_of_any))
    }

    pub fn any_at(type_of_any: TypeOfAny, pos: Provenance) -> Self {
        Self::Any(AnyType::at(type_of_any, pos))
    }

    pub fn error() -> Self {
        Self::any(TypeOfAny::FromError)
    }

    pub fn none() -> Self {
        Self::None(NoneType::default())
    }

    pub fn never() -> Self {
        Self::Uninhabited(UninhabitedType::default())
    }

    pub fn no_return() -> Self {
        Self::Uninhabited(UninhabitedType {
            is_noreturn: true,
            pos: Provenance::UNKNOWN,
        })
    }

    pub fn unbound(name: impl Into<String>, args: Vec<Type>) -> Self {
        Self::Unbound(UnboundType::new(name, args))
    }

    pub fn instance(class: &Arc<ClassInfo>, args: Vec<Type>) -> Self {
        Self::Instance(Instance::new(Arc::clone(class), args))
    }

    pub fn pos(&self) -> Provenance {
        match self {
            Self::Any(t) => t.pos,
            Self::None(t) => t.pos,
            Self::Uninhabited(t) => t.pos,
            Self::Deleted(t) => t.pos,
            Self::TypeVar(t) => t.pos,
            Self::Instance(t) => t.pos,
            Self::Tuple(t) => t.pos,
            Self::Record(t) => t.pos,
            Self::Callable(t) => t.pos,
            Self::Union(t) => t.pos,
            Self::Literal(t) => t.pos,
            Self::TypeType(t) => t.pos,
            Self::Star(t) => t.pos,
            Self::Placeholder(t) => t.pos,
            Self::Unbound(t) => t.pos,
            Self::TypeList(t) => t.pos,
            Self::CallableArgument(t) => t.pos,
            Self::Ellipsis(t) => t.pos,
            Self::RawExpression(t) => t.pos,
        }
    }

    pub fn set_pos(&mut self, pos: Provenance) {
        let slot = match self {
            Self::Any(t) => &mut t.pos,
            Self::None(t) => &mut t.pos,
            Self::Uninhabited(t) => &mut t.pos,
            Self::Deleted(t) => &mut t.pos,
            Self::TypeVar(t) => &mut t.pos,
            Self::Instance(t) => &mut t.pos,
            Self::Tuple(t) => &mut t.pos,
            Self::Record(t) => &mut t.pos,
            Self::Callable(t) => &mut t.pos,
            Self::Union(t) => &mut t.pos,
            Self::Literal(t) => &mut t.pos,
            Self::TypeType(t) => &mut t.pos,
            Self::Star(t) => &mut t.pos,
            Self::Placeholder(t) => &mut t.pos,
            Self::Unbound(t) => &mut t.pos,
            Self::TypeList(t) => &mut t.pos,
            Self::CallableArgument(t) => &mut t.pos,
            Self::Ellipsis(t) => &mut t.pos,
            Self::RawExpression(t) => &mut t.pos,
        };
        *slot = pos;
    }

    /// Builder form of [`set_pos`](Self::set_pos).
    pub fn at(mut self, pos: Provenance) -> Self {
        self.set_pos(pos);
        self
    }

    /// True for the parser-level forms the analyzer must eliminate.
    pub const fn is_synthetic(&self) -> bool {
        matches!(
            self,
            Self::Unbound(_)
                | Self::TypeList(_)
                | Self::CallableArgument(_)
                | Self::Ellipsis(_)
                | Self::RawExpression(_)
        )
    }

    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any(_))
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None(_))
    }

    pub fn type_of_any(&self) -> Option<TypeOfAny> {
        match self {
            Self::Any(any) => Some(any.type_of_any),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(union) => Some(union),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&CallableType> {
        match self {
            Self::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralType> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_unbound(&self) -> Option<&UnboundType> {
        match self {
            Self::Unbound(unbound) => Some(unbound),
            _ => None,
        }
    }
}

impl From<Instance> for Type {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl From<AnyType> for Type {
    fn from(any: AnyType) -> Self {
        Self::Any(any)
    }
}

impl From<UnboundType> for Type {
    fn from(unbound: UnboundType) -> Self {
        Self::Unbound(unbound)
    }
}

impl From<LiteralType> for Type {
    fn from(literal: LiteralType) -> Self {
        Self::Literal(literal)
    }
}

impl From<CallableType> for Type {
    fn from(callable: CallableType) -> Self {
        Self::Callable(callable)
    }
}

impl From<TupleType> for Type {
    fn from(tuple: TupleType) -> Self {
        Self::Tuple(tuple)
    }
}

/// Last component of a dotted name.
pub fn short_name(fullname: &str) -> &str {
    fullname.rsplit('.').next().unwrap_or(fullname)
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod types_tests;
