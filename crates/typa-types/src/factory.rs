//! Canonical constructors for unions, optionals and `Type[...]`.
//!
//! These are the only places that build `Type::Union`, so every union in the
//! system is flat and free of structural duplicates.

use crate::types::{Type, TypeType, UnionType};
use smallvec::SmallVec;
use typa_common::Provenance;
use typa_common::limits::UNION_INLINE_MEMBERS;

type UnionBuffer = SmallVec<[Type; UNION_INLINE_MEMBERS]>;

/// Build the union of `items`.
///
/// Nested unions are flattened and structural duplicates dropped, keeping the
/// first occurrence. Zero members is the uninhabited type; one member is that
/// member itself.
pub fn make_union(items: impl IntoIterator<Item = Type>, pos: Provenance) -> Type {
    let mut flat: UnionBuffer = SmallVec::new();
    for item in items {
        push_union_member(&mut flat, item);
    }

    match flat.len() {
        0 => Type::never().at(pos),
        1 => flat.into_iter().next().unwrap_or_else(Type::never),
        _ => Type::Union(UnionType::new(flat.into_vec(), pos)),
    }
}

fn push_union_member(flat: &mut UnionBuffer, member: Type) {
    match member {
        Type::Union(inner) => {
            for item in inner.items {
                push_union_member(flat, item);
            }
        }
        other => {
            if !flat.contains(&other) {
                flat.push(other);
            }
        }
    }
}

/// Members of `ty` viewed as a union (a non-union is a single member).
pub fn union_items(ty: &Type) -> Vec<&Type> {
    match ty {
        Type::Union(union) => union.items.iter().flat_map(union_items).collect(),
        other => vec![other],
    }
}

/// `Optional[ty]`.
///
/// Idempotent: `None` stays `None`, and a union that already contains `None`
/// keeps exactly one `None` member, moved to the end.
pub fn make_optional(ty: Type) -> Type {
    match ty {
        Type::None(_) => ty,
        Type::Union(union) => {
            let pos = union.pos;
            let items = union
                .items
                .into_iter()
                .filter(|item| !item.is_none())
                .chain(std::iter::once(Type::none()));
            make_union(items, pos)
        }
        other => {
            let pos = other.pos();
            make_union([other, Type::none()], pos)
        }
    }
}

/// `Type[item]`, distributing over unions: `Type[Union[A, B]]` is
/// `Union[Type[A], Type[B]]`.
pub fn make_type_type(item: Type, pos: Provenance) -> Type {
    match item {
        Type::Union(union) => {
            let items = union
                .items
                .into_iter()
                .map(|member| make_type_type(member, Provenance::UNKNOWN));
            make_union(items, pos)
        }
        other => Type::TypeType(TypeType {
            item: Box::new(other),
            pos,
        }),
    }
}

#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod factory_tests;
