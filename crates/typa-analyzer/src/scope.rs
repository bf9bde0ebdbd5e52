//! Type-variable binding scopes.
//!
//! A scope is a persistent chain of frames. Entering a nested signature
//! creates a child frame that shares its ancestors through `Rc`; leaving it
//! just drops the child. Lookup walks from the innermost frame outwards, so an
//! inner binding always shadows an outer one.

use crate::api::TypeVarExpr;
use rustc_hash::FxHashMap;
use std::rc::Rc;
use typa_common::Provenance;
use typa_types::{TypeVarDef, TypeVarId};

#[derive(Clone, Debug, Default)]
pub struct TypeVarScope {
    /// Bindings of this frame, keyed by the type variable's fullname.
    bindings: FxHashMap<String, TypeVarDef>,
    parent: Option<Rc<TypeVarScope>>,
    /// Frame of the enclosing class; its bindings may not be rebound here.
    prohibited: Option<Rc<TypeVarScope>>,
    is_class_scope: bool,
    func_id: i32,
    class_id: i32,
}

impl TypeVarScope {
    /// Empty root frame.
    pub fn new() -> Self {
        Self::default()
    }

    fn child_of(parent: Option<Rc<Self>>, is_class_scope: bool, prohibited: Option<Rc<Self>>) -> Self {
        let (func_id, class_id) = parent
            .as_ref()
            .map_or((0, 0), |parent| (parent.func_id, parent.class_id));
        Self {
            bindings: FxHashMap::default(),
            parent,
            prohibited,
            is_class_scope,
            func_id,
            class_id,
        }
    }

    /// Frame for a function signature nested in this one.
    pub fn method_frame(self: &Rc<Self>) -> Self {
        Self::child_of(Some(Rc::clone(self)), false, None)
    }

    /// Frame for a class body nested in this one.
    ///
    /// The class frame hangs off the nearest function frame: type variables
    /// bound by an enclosing class are out of scope in a nested class, and
    /// rebinding them is an error.
    pub fn class_frame(self: &Rc<Self>) -> Self {
        Self::child_of(self.function_scope(), true, Some(Rc::clone(self)))
    }

    /// Nearest frame (including this one) that is not a class frame.
    fn function_scope(self: &Rc<Self>) -> Option<Rc<Self>> {
        let mut frame = Some(Rc::clone(self));
        while let Some(current) = frame.as_ref().filter(|f| f.is_class_scope) {
            frame = current.parent.clone();
        }
        frame
    }

    pub const fn is_class_scope(&self) -> bool {
        self.is_class_scope
    }

    /// Can `fullname` be bound in this frame without capturing a binding
    /// from an enclosing scope?
    pub fn allow_binding(&self, fullname: &str) -> bool {
        if self.bindings.contains_key(fullname) {
            return false;
        }
        if let Some(parent) = &self.parent
            && !parent.allow_binding(fullname)
        {
            return false;
        }
        if let Some(prohibited) = &self.prohibited
            && !prohibited.allow_binding(fullname)
        {
            return false;
        }
        true
    }

    /// Bind `expr` under `name` in this frame with a fresh id.
    ///
    /// Class frames number upwards from 1, function frames downwards from -1.
    pub fn bind_new(&mut self, name: &str, expr: &TypeVarExpr) -> TypeVarDef {
        let id = if self.is_class_scope {
            self.class_id += 1;
            self.class_id
        } else {
            self.func_id -= 1;
            self.func_id
        };
        let def = TypeVarDef {
            name: name.to_string(),
            fullname: expr.fullname.clone(),
            id: TypeVarId(id),
            values: expr.values.clone(),
            upper_bound: Box::new(expr.upper_bound.clone()),
            variance: expr.variance,
            pos: Provenance::UNKNOWN,
        };
        self.bindings.insert(expr.fullname.clone(), def.clone());
        def
    }

    /// Re-install a binding created elsewhere (a signature that already lists
    /// its variables).
    pub fn bind_existing(&mut self, def: TypeVarDef) {
        self.bindings.insert(def.fullname.clone(), def);
    }

    /// Innermost binding of `fullname`.
    pub fn get_binding(&self, fullname: &str) -> Option<&TypeVarDef> {
        match self.bindings.get(fullname) {
            Some(def) => Some(def),
            None => self.parent.as_deref()?.get_binding(fullname),
        }
    }

    /// Bindings of this frame only.
    pub fn local_bindings(&self) -> impl Iterator<Item = &TypeVarDef> {
        self.bindings.values()
    }
}

#[cfg(test)]
#[path = "../tests/scope_tests.rs"]
mod scope_tests;
