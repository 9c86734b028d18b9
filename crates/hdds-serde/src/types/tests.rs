// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(arg: &Argument) -> u64 {
    let mut hasher = DefaultHasher::new();
    arg.hash(&mut hasher);
    hasher.finish()
}

fn list() -> ClassRef {
    ClassRef::with_supertypes("List", vec![ClassRef::new("Collection")])
}

#[test]
fn structurally_equal_descriptors_share_a_key() {
    let a = Argument::generic(list(), vec![Argument::string()]);
    let b = Argument::generic(list(), vec![Argument::string()]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let other = Argument::generic(list(), vec![Argument::boxed(PrimitiveKind::Int)]);
    assert_ne!(a, other);
    assert_ne!(a, Argument::of(list()));
}

#[test]
fn redeclared_supertypes_make_a_distinct_key() {
    let collection = RawType::from(ClassRef::collection());
    let rich = Argument::of(list());
    let bare = Argument::of(ClassRef::new("List"));

    assert_eq!(rich, Argument::of(ClassRef::list()));
    assert_eq!(hash_of(&rich), hash_of(&Argument::of(ClassRef::list())));
    assert_ne!(rich, bare);
    assert!(collection.is_assignable_from(rich.raw()));
    assert!(!collection.is_assignable_from(bare.raw()));

    // Equality is checked down the whole graph.
    let deep = |root: &str| {
        ClassRef::with_supertypes("Leaf", vec![ClassRef::with_supertypes("Mid", vec![ClassRef::new(root)])])
    };
    assert_eq!(deep("Root"), deep("Root"));
    assert_ne!(deep("Root"), deep("Other"));
}

#[test]
fn variable_markers_are_ignored_for_key_equality() {
    let bounded = Argument::generic(
        list(),
        vec![Argument::variable("T", Argument::string())],
    );
    let concrete = Argument::generic(list(), vec![Argument::string()]);
    assert_eq!(bounded, concrete);
    assert_eq!(hash_of(&bounded), hash_of(&concrete));
    assert!(bounded.params()[0].is_type_variable());
}

#[test]
fn primitive_and_boxed_are_distinct_keys() {
    for kind in PrimitiveKind::ALL {
        assert_ne!(Argument::primitive(kind), Argument::boxed(kind));
        assert_eq!(
            RawType::Boxed(kind).primitive_counterpart(),
            Some(RawType::Primitive(kind))
        );
    }
    assert_eq!(RawType::Primitive(PrimitiveKind::Int).primitive_counterpart(), None);
}

#[test]
fn object_accepts_references_but_not_primitives() {
    let object = RawType::from(ClassRef::object());
    assert!(object.is_assignable_from(&RawType::from(list())));
    assert!(object.is_assignable_from(&RawType::Boxed(PrimitiveKind::Long)));
    assert!(object.is_assignable_from(&RawType::array_of(RawType::Primitive(PrimitiveKind::Int))));
    assert!(!object.is_assignable_from(&RawType::Primitive(PrimitiveKind::Long)));
}

#[test]
fn subclasses_are_assignable_transitively() {
    let collection = ClassRef::new("Collection");
    let list = ClassRef::with_supertypes("List", vec![collection.clone()]);
    let array_list = ClassRef::with_supertypes("ArrayList", vec![list.clone()]);

    assert!(RawType::from(collection.clone()).is_assignable_from(&RawType::from(array_list.clone())));
    assert!(RawType::from(list).is_assignable_from(&RawType::from(array_list.clone())));
    assert!(!RawType::from(array_list).is_assignable_from(&RawType::from(collection)));
}

#[test]
fn number_accepts_numeric_boxes_and_big_numbers() {
    let number = RawType::from(ClassRef::number());
    for kind in PrimitiveKind::ALL {
        assert_eq!(
            number.is_assignable_from(&RawType::Boxed(kind)),
            kind.is_numeric(),
            "{kind}"
        );
        assert!(!number.is_assignable_from(&RawType::Primitive(kind)));
    }
    assert!(number.is_assignable_from(&RawType::from(ClassRef::big_integer())));
    assert!(number.is_assignable_from(&RawType::from(ClassRef::big_decimal())));
    assert!(!number.is_assignable_from(&RawType::from(ClassRef::string())));
}

#[test]
fn reference_arrays_are_covariant() {
    let objects = RawType::array_of(ClassRef::object().into());
    let strings = RawType::array_of(ClassRef::string().into());
    let ints = RawType::array_of(RawType::Primitive(PrimitiveKind::Int));
    assert!(objects.is_assignable_from(&strings));
    assert!(!strings.is_assignable_from(&objects));
    assert!(!objects.is_assignable_from(&ints));
}

#[test]
fn parameters_accept_exact_and_bounded_variables() {
    let number_list = Argument::generic(
        list(),
        vec![Argument::variable("T", Argument::of(ClassRef::number()))],
    );
    let string_list = Argument::generic(list(), vec![Argument::string()]);
    let long_list = Argument::generic(list(), vec![Argument::boxed(PrimitiveKind::Long)]);

    assert!(number_list.parameters_accept(&long_list));
    assert!(!number_list.parameters_accept(&string_list));
    assert!(string_list.parameters_accept(&string_list));
    assert!(!string_list.parameters_accept(&long_list));
    // An exact (non-variable) parameter does not widen to subtypes.
    let exact_number = Argument::generic(list(), vec![Argument::of(ClassRef::number())]);
    assert!(!exact_number.parameters_accept(&long_list));
    // Arity must match.
    assert!(!string_list.parameters_accept(&Argument::of(list())));
}

#[test]
fn display_renders_generics_arrays_and_variables() {
    let map = ClassRef::new("Map");
    let arg = Argument::generic(
        map,
        vec![
            Argument::string(),
            Argument::generic(list(), vec![Argument::unbounded("V")]),
        ],
    );
    assert_eq!(arg.to_string(), "Map<String, List<V>>");
    assert_eq!(
        Argument::variable("N", Argument::of(ClassRef::number())).to_string(),
        "N extends Number"
    );
    assert_eq!(
        Argument::array_of(&Argument::primitive(PrimitiveKind::Byte)).to_string(),
        "byte[]"
    );
    assert_eq!(Argument::boxed(PrimitiveKind::Char).to_string(), "Character");
}

#[test]
fn component_type_of_arrays() {
    let strings = Argument::array_of(&Argument::string());
    assert!(strings.is_array());
    assert_eq!(strings.component_type(), Some(Argument::string()));
    assert_eq!(Argument::string().component_type(), None);
}

#[test]
fn any_object_marker() {
    assert!(Argument::object().is_any_object());
    assert!(Argument::unbounded("T").is_any_object());
    assert!(!Argument::generic(ClassRef::object(), vec![Argument::string()]).is_any_object());
    assert!(!Argument::string().is_any_object());
}
