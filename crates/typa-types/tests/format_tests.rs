use super::*;
use crate::factory::make_union;
use std::sync::Arc;
use typa_common::Provenance;

fn class(fullname: &str) -> Arc<ClassInfo> {
    Arc::new(ClassInfo::new(fullname))
}

fn int() -> Type {
    Type::instance(&class("builtins.int"), Vec::new())
}

fn str_() -> Type {
    Type::instance(&class("builtins.str"), Vec::new())
}

#[test]
fn test_display_generic_instance() {
    let list = Arc::new(ClassInfo::generic("typing.List", &["T"]));
    assert_eq!(Type::instance(&list, vec![int()]).to_string(), "List[int]");
    assert_eq!(int().to_string(), "int");
}

#[test]
fn test_display_union_and_optional() {
    let union = make_union([int(), str_()], Provenance::UNKNOWN);
    assert_eq!(union.to_string(), "Union[int, str]");
    let optional = make_union([int(), Type::none()], Provenance::UNKNOWN);
    assert_eq!(optional.to_string(), "Optional[int]");
}

#[test]
fn test_display_callable_forms() {
    let mut callable = CallableType::new(
        vec![int(), str_()],
        vec![ArgKind::Pos, ArgKind::Opt],
        vec![None, None],
        Type::none(),
    );
    assert_eq!(
        Type::Callable(callable.clone()).to_string(),
        "Callable[[int, DefaultArg(str)], None]"
    );

    callable.arg_kinds[1] = ArgKind::Named;
    callable.arg_names[1] = Some("key".to_string());
    assert_eq!(
        Type::Callable(callable).to_string(),
        "Callable[[int, NamedArg(str, 'key')], None]"
    );

    let ellipsis = CallableType::ellipsis_args(Type::any(TypeOfAny::Explicit), int());
    assert_eq!(Type::Callable(ellipsis).to_string(), "Callable[..., int]");
}

#[test]
fn test_display_literals() {
    let int_fallback = Instance::new(class("builtins.int"), Vec::new());
    let one = LiteralType::new(LiteralValue::Int(1), int_fallback, Provenance::UNKNOWN);
    assert_eq!(Type::Literal(one).to_string(), "Literal[1]");

    let str_fallback = Instance::new(class("builtins.str"), Vec::new());
    let x = LiteralType::new(LiteralValue::Str("x".into()), str_fallback, Provenance::UNKNOWN);
    assert_eq!(Type::Literal(x).to_string(), "Literal['x']");

    let mut color = ClassInfo::new("m.Color");
    color.is_enum = true;
    let red = LiteralType::new(
        LiteralValue::Str("RED".into()),
        Instance::new(Arc::new(color), Vec::new()),
        Provenance::UNKNOWN,
    );
    assert_eq!(Type::Literal(red).to_string(), "Literal[Color.RED]");
}

#[test]
fn test_display_special_types() {
    assert_eq!(Type::no_return().to_string(), "NoReturn");
    assert_eq!(Type::error().to_string(), "Any");
    assert_eq!(Type::none().to_string(), "None");
    let ty = Type::TypeType(TypeType {
        item: Box::new(int()),
        pos: Provenance::UNKNOWN,
    });
    assert_eq!(ty.to_string(), "Type[int]");
}

#[test]
fn test_display_tuple() {
    let fallback = Instance::new(class("builtins.tuple"), Vec::new());
    let pair = TupleType::new(vec![int(), str_()], fallback.clone());
    assert_eq!(Type::Tuple(pair).to_string(), "Tuple[int, str]");
    let empty = TupleType::new(Vec::new(), fallback);
    assert_eq!(Type::Tuple(empty).to_string(), "Tuple[()]");
}

#[test]
fn test_display_unbound_with_args() {
    let mut unbound = UnboundType::new("Dict", vec![Type::unbound("str", Vec::new())]);
    unbound.optional = true;
    assert_eq!(Type::Unbound(unbound).to_string(), "Dict[str]?");
}
