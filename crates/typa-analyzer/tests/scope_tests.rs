use super::*;
use typa_types::{Type, Variance};

fn expr(fullname: &str) -> TypeVarExpr {
    TypeVarExpr::new(fullname)
}

#[test]
fn test_function_frames_count_down() {
    let mut scope = TypeVarScope::new();
    let t = scope.bind_new("T", &expr("m.T"));
    let s = scope.bind_new("S", &expr("m.S"));
    assert_eq!(t.id, TypeVarId(-1));
    assert_eq!(s.id, TypeVarId(-2));
    assert_eq!(t.fullname, "m.T");
    assert_eq!(s.name, "S");
}

#[test]
fn test_class_frames_count_up() {
    let root = Rc::new(TypeVarScope::new());
    let mut class = root.class_frame();
    assert!(class.is_class_scope());
    assert_eq!(class.bind_new("T", &expr("m.T")).id, TypeVarId(1));
    assert_eq!(class.bind_new("S", &expr("m.S")).id, TypeVarId(2));
}

#[test]
fn test_method_frame_continues_parent_numbering() {
    let mut root = TypeVarScope::new();
    root.bind_new("T", &expr("m.T"));
    let root = Rc::new(root);
    let mut method = root.method_frame();
    assert_eq!(method.bind_new("S", &expr("m.S")).id, TypeVarId(-2));
}

#[test]
fn test_lookup_prefers_innermost_binding() {
    let mut root = TypeVarScope::new();
    root.bind_new("T", &expr("m.T"));
    let root = Rc::new(root);

    let mut inner = root.method_frame();
    assert_eq!(inner.get_binding("m.T").map(|def| def.id), Some(TypeVarId(-1)));

    let shadow = TypeVarDef {
        id: TypeVarId(-7),
        ..inner.bind_new("T", &expr("m.T"))
    };
    inner.bind_existing(shadow);
    assert_eq!(inner.get_binding("m.T").map(|def| def.id), Some(TypeVarId(-7)));
    assert_eq!(root.get_binding("m.T").map(|def| def.id), Some(TypeVarId(-1)));
    assert!(inner.get_binding("m.U").is_none());
}

#[test]
fn test_dropping_frame_restores_outer_view() {
    let root = Rc::new(TypeVarScope::new());
    {
        let mut inner = root.method_frame();
        inner.bind_new("T", &expr("m.T"));
        assert_eq!(inner.local_bindings().count(), 1);
    }
    assert!(root.get_binding("m.T").is_none());
}

#[test]
fn test_nested_class_cannot_see_or_rebind_outer_class_variables() {
    let root = Rc::new(TypeVarScope::new());
    let mut outer = root.class_frame();
    outer.bind_new("T", &expr("m.T"));
    let outer = Rc::new(outer);

    let nested = Rc::new(outer.class_frame());
    assert!(nested.get_binding("m.T").is_none());
    assert!(!nested.allow_binding("m.T"));
    assert!(nested.allow_binding("m.S"));

    let method = nested.method_frame();
    assert!(!method.allow_binding("m.T"));
}

#[test]
fn test_method_of_class_sees_class_variables() {
    let root = Rc::new(TypeVarScope::new());
    let mut class = root.class_frame();
    class.bind_new("T", &expr("m.T"));
    let class = Rc::new(class);

    let method = class.method_frame();
    assert_eq!(method.get_binding("m.T").map(|def| def.id), Some(TypeVarId(1)));
    assert!(!method.allow_binding("m.T"));
}

#[test]
fn test_binding_copies_declaration() {
    let declared = TypeVarExpr {
        values: vec![Type::none()],
        variance: Variance::Covariant,
        ..expr("m.T_co")
    };
    let def = TypeVarScope::new().bind_new("T_co", &declared);
    assert_eq!(def.values, vec![Type::none()]);
    assert_eq!(def.variance, Variance::Covariant);
}
