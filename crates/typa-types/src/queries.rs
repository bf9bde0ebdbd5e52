//! Whole-type queries built on [`TypeQuery`].

use crate::types::{AnyType, RecordType, Type, TypeOfAny, TypeVarType};
use crate::visitor::{TypeQuery, flatten_unique};

// =============================================================================
// Boolean queries
// =============================================================================

/// Does `ty` (or anything it contains) hold an `Any` of the given origin?
///
/// Record types are skipped: their fields are validated where the record is
/// declared.
struct HasAnyOfKind(TypeOfAny);

impl TypeQuery for HasAnyOfKind {
    type Output = bool;

    fn combine(&mut self, parts: Vec<bool>) -> bool {
        parts.into_iter().any(|part| part)
    }

    fn visit_any(&mut self, t: &AnyType) -> bool {
        t.type_of_any == self.0
    }

    fn visit_record(&mut self, _t: &RecordType) -> bool {
        false
    }
}

/// True if `ty` contains an `Any` written explicitly in the source.
pub fn has_explicit_any(ty: &Type) -> bool {
    HasAnyOfKind(TypeOfAny::Explicit).query(ty)
}

/// True if `ty` contains an `Any` standing in for an unfollowed import.
pub fn has_any_from_unimported_type(ty: &Type) -> bool {
    HasAnyOfKind(TypeOfAny::FromUnimportedType).query(ty)
}

// =============================================================================
// Collecting queries
// =============================================================================

struct CollectAnyTypes;

impl TypeQuery for CollectAnyTypes {
    type Output = Vec<AnyType>;

    fn combine(&mut self, parts: Vec<Vec<AnyType>>) -> Vec<AnyType> {
        parts.into_iter().flatten().collect()
    }

    fn visit_any(&mut self, t: &AnyType) -> Vec<AnyType> {
        vec![t.clone()]
    }
}

/// Every `Any` inside `ty`, in traversal order.
pub fn collect_any_types(ty: &Type) -> Vec<AnyType> {
    CollectAnyTypes.query(ty)
}

struct CollectAllInnerTypes;

impl TypeQuery for CollectAllInnerTypes {
    type Output = Vec<Type>;

    fn combine(&mut self, parts: Vec<Vec<Type>>) -> Vec<Type> {
        parts.into_iter().flatten().collect()
    }

    fn query_types(&mut self, types: Vec<&Type>) -> Vec<Type> {
        let nested = types.iter().map(|ty| self.query(ty)).collect();
        let mut out = self.combine(nested);
        out.extend(types.into_iter().cloned());
        out
    }
}

/// Every type contained in `ty` (excluding `ty` itself): deeper types first,
/// then the direct children.
pub fn collect_all_inner_types(ty: &Type) -> Vec<Type> {
    CollectAllInnerTypes.query(ty)
}

struct TypeVarExtractor;

impl TypeQuery for TypeVarExtractor {
    type Output = Vec<TypeVarType>;

    fn combine(&mut self, parts: Vec<Vec<TypeVarType>>) -> Vec<TypeVarType> {
        flatten_unique(parts)
    }

    fn visit_type_var(&mut self, t: &TypeVarType) -> Vec<TypeVarType> {
        vec![t.clone()]
    }
}

/// Distinct type-variable references inside `ty`, in first-occurrence order.
pub fn get_type_vars(ty: &Type) -> Vec<TypeVarType> {
    TypeVarExtractor.query(ty)
}

#[cfg(test)]
#[path = "../tests/queries_tests.rs"]
mod queries_tests;
