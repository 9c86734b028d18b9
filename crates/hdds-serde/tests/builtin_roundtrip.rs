// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test code readability over pedantic
#![allow(clippy::float_cmp)] // Test assertions with constants
#![allow(clippy::cast_possible_truncation)] // Test parameters
#![allow(clippy::missing_panics_doc)] // Tests panic on failure

//! Built-in codec round trips through the wire tree
//!
//! Covers primitive arrays around the decode buffer capacities, null
//! elements, optional scalars and the string-form value types.

use bigdecimal::BigDecimal;
use hdds_serde::binding::{from_wire, to_wire, WireValue};
use hdds_serde::builtins::{OptionalDoubleSerde, OptionalIntSerde, OptionalLongSerde};
use hdds_serde::codec::DecoderContext;
use hdds_serde::value::{Charset, Locale, Uri};
use hdds_serde::{
    Argument, ClassRef, Deserializer, PrimitiveKind, SerdeError, SerdeRegistry, Serializer, Value,
};
use num_bigint::BigInt;

/// Straddles the 50-slot and 100-slot initial buffers.
const LENGTHS: [usize; 5] = [0, 1, 49, 50, 101];

fn array_type(kind: PrimitiveKind) -> Argument {
    Argument::array_of(&Argument::primitive(kind))
}

fn random_array(kind: PrimitiveKind, len: usize) -> Value {
    match kind {
        PrimitiveKind::Boolean => Value::BooleanArray((0..len).map(|_| fastrand::bool()).collect()),
        PrimitiveKind::Byte => Value::ByteArray((0..len).map(|_| fastrand::i8(..)).collect()),
        PrimitiveKind::Short => Value::ShortArray((0..len).map(|_| fastrand::i16(..)).collect()),
        PrimitiveKind::Int => Value::IntArray((0..len).map(|_| fastrand::i32(..)).collect()),
        PrimitiveKind::Long => Value::LongArray((0..len).map(|_| fastrand::i64(..)).collect()),
        PrimitiveKind::Float => {
            Value::FloatArray((0..len).map(|_| fastrand::f32() * 1000.0 - 500.0).collect())
        }
        PrimitiveKind::Double => {
            Value::DoubleArray((0..len).map(|_| fastrand::f64() * 1e9 - 5e8).collect())
        }
        PrimitiveKind::Char => Value::CharArray((0..len).map(|_| fastrand::alphanumeric()).collect()),
    }
}

fn zero_array(kind: PrimitiveKind, len: usize) -> Value {
    match kind {
        PrimitiveKind::Boolean => Value::BooleanArray(vec![false; len]),
        PrimitiveKind::Byte => Value::ByteArray(vec![0; len]),
        PrimitiveKind::Short => Value::ShortArray(vec![0; len]),
        PrimitiveKind::Int => Value::IntArray(vec![0; len]),
        PrimitiveKind::Long => Value::LongArray(vec![0; len]),
        PrimitiveKind::Float => Value::FloatArray(vec![0.0; len]),
        PrimitiveKind::Double => Value::DoubleArray(vec![0.0; len]),
        PrimitiveKind::Char => Value::CharArray(vec!['\0'; len]),
    }
}

#[test]
fn test_primitive_arrays_round_trip_across_buffer_boundaries() {
    let registry = SerdeRegistry::builtin_only();
    for kind in PrimitiveKind::ALL {
        let ty = array_type(kind);
        for len in LENGTHS {
            let original = random_array(kind, len);
            let wire = to_wire(&registry, &original, &ty).unwrap();
            assert_eq!(wire.as_array().map(<[WireValue]>::len), Some(len), "{} x{}", ty, len);

            let decoded = from_wire(&registry, wire, &ty).unwrap();
            assert_eq!(decoded, original, "{} x{}", ty, len);
        }
    }
}

#[test]
fn test_null_elements_decode_as_zero() {
    let registry = SerdeRegistry::builtin_only();
    for kind in PrimitiveKind::ALL {
        let ty = array_type(kind);
        for len in [1, 3, 120] {
            let wire = WireValue::Array(vec![WireValue::Null; len]);
            let decoded = from_wire(&registry, wire, &ty).unwrap();
            assert_eq!(decoded, zero_array(kind, len), "{} x{}", ty, len);
        }
    }

    let mixed = WireValue::Array(vec![
        WireValue::Integer(7),
        WireValue::Null,
        WireValue::Integer(-2),
    ]);
    assert_eq!(
        from_wire(&registry, mixed, &array_type(PrimitiveKind::Long)).unwrap(),
        Value::LongArray(vec![7, 0, -2])
    );
}

#[test]
fn test_null_array_and_bad_elements() {
    let registry = SerdeRegistry::builtin_only();
    let ty = array_type(PrimitiveKind::Int);
    assert_eq!(from_wire(&registry, WireValue::Null, &ty).unwrap(), Value::Null);
    assert_eq!(to_wire(&registry, &Value::Null, &ty).unwrap(), WireValue::Null);

    let wrong = WireValue::Array(vec![WireValue::Integer(1), WireValue::from("two")]);
    let err = from_wire(&registry, wrong, &ty).unwrap_err();
    assert_eq!(err.to_string(), "expected int, found string");

    let err = to_wire(&registry, &Value::LongArray(vec![1]), &ty).unwrap_err();
    assert!(matches!(err, SerdeError::ValueMismatch { expected: "int[]", .. }));
}

#[test]
fn test_optional_scalars_treat_absence_as_emptiness() {
    let cases: [(&dyn Serializer, Vec<Value>); 3] = [
        (
            &OptionalIntSerde,
            vec![Value::OptionalInt(Some(0)), Value::OptionalInt(Some(-9)), Value::OptionalInt(None)],
        ),
        (
            &OptionalLongSerde,
            vec![Value::OptionalLong(Some(i64::MAX)), Value::OptionalLong(None)],
        ),
        (
            &OptionalDoubleSerde,
            vec![Value::OptionalDouble(Some(0.25)), Value::OptionalDouble(None)],
        ),
    ];
    for (serializer, values) in &cases {
        for value in values.iter().chain([&Value::Null]) {
            assert_eq!(serializer.is_empty(value), serializer.is_absent(value), "{:?}", value);
        }
    }
}

#[test]
fn test_missing_optional_members_default_to_absent() {
    let registry = SerdeRegistry::builtin_only();
    let ctx = DecoderContext::new(&registry);
    let cases = [
        (ClassRef::optional_int(), Value::OptionalInt(None)),
        (ClassRef::optional_long(), Value::OptionalLong(None)),
        (ClassRef::optional_double(), Value::OptionalDouble(None)),
    ];
    for (class, absent) in cases {
        let ty = Argument::of(class);
        assert_eq!(registry.find_deserializer(&ty).default_value(), Some(absent.clone()));
        assert_eq!(ctx.missing_value(&ty), Some(absent));
    }

    // Everything else has no default, boxed kinds included.
    assert_eq!(ctx.missing_value(&Argument::of(ClassRef::uuid())), None);
    assert_eq!(ctx.missing_value(&Argument::boxed(PrimitiveKind::Int)), None);
    assert_eq!(ctx.missing_value(&Argument::of(ClassRef::new("Unregistered"))), None);
}

#[test]
fn test_optional_scalars_round_trip() {
    let registry = SerdeRegistry::builtin_only();
    let cases = [
        (ClassRef::optional_int(), Value::OptionalInt(Some(12)), WireValue::Integer(12)),
        (ClassRef::optional_int(), Value::OptionalInt(None), WireValue::Null),
        (ClassRef::optional_long(), Value::OptionalLong(Some(-3)), WireValue::Integer(-3)),
        (ClassRef::optional_long(), Value::OptionalLong(None), WireValue::Null),
        (ClassRef::optional_double(), Value::OptionalDouble(Some(1.5)), WireValue::Float(1.5)),
        (ClassRef::optional_double(), Value::OptionalDouble(None), WireValue::Null),
    ];
    for (class, value, expected_wire) in cases {
        let ty = Argument::of(class);
        let wire = to_wire(&registry, &value, &ty).unwrap();
        assert_eq!(wire, expected_wire);
        assert_eq!(from_wire(&registry, wire, &ty).unwrap(), value);
    }
}

#[test]
fn test_value_types_round_trip_as_strings() {
    let registry = SerdeRegistry::builtin_only();
    let cases = [
        (
            ClassRef::uuid(),
            Value::Uuid("67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap()),
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
        ),
        (
            ClassRef::url(),
            Value::Url("https://hdds.io/docs?page=2".parse().unwrap()),
            "https://hdds.io/docs?page=2",
        ),
        (
            ClassRef::uri(),
            Value::Uri(Uri::parse("urn:isbn:0451450523").unwrap()),
            "urn:isbn:0451450523",
        ),
        (
            ClassRef::charset(),
            Value::Charset(Charset::for_name("UTF-8").unwrap()),
            "UTF-8",
        ),
        (
            ClassRef::time_zone(),
            Value::TimeZone(chrono_tz::Europe::Paris),
            "Europe/Paris",
        ),
        (
            ClassRef::locale(),
            Value::Locale(Locale::for_language_tag("fr-CA").unwrap()),
            "fr-CA",
        ),
    ];
    for (class, value, text) in cases {
        let ty = Argument::of(class);
        let wire = to_wire(&registry, &value, &ty).unwrap();
        assert_eq!(wire, WireValue::from(text), "{}", ty);
        assert_eq!(from_wire(&registry, wire, &ty).unwrap(), value, "{}", ty);
        assert_eq!(from_wire(&registry, WireValue::Null, &ty).unwrap(), Value::Null);
    }
}

#[test]
fn test_malformed_value_strings_are_parse_errors() {
    let registry = SerdeRegistry::builtin_only();
    for class in [
        ClassRef::uuid(),
        ClassRef::url(),
        ClassRef::charset(),
        ClassRef::time_zone(),
    ] {
        let err = from_wire(&registry, WireValue::from("not a value"), &Argument::of(class.clone()))
            .unwrap_err();
        assert!(matches!(err, SerdeError::Parse { .. }), "{}: {}", class, err);
    }
}

#[test]
fn test_big_numbers_use_numeric_tokens() {
    let registry = SerdeRegistry::builtin_only();
    let big_int: BigInt = "123456789012345678901234567890".parse().unwrap();
    let ty = Argument::of(ClassRef::big_integer());
    let wire = to_wire(&registry, &Value::BigInteger(big_int.clone()), &ty).unwrap();
    assert_eq!(wire, WireValue::BigInteger(big_int.clone()));
    assert_eq!(from_wire(&registry, wire, &ty).unwrap(), Value::BigInteger(big_int));

    // Plain integers widen on read.
    assert_eq!(
        from_wire(&registry, WireValue::Integer(5), &ty).unwrap(),
        Value::BigInteger(BigInt::from(5))
    );

    let decimal: BigDecimal = "3.14159265358979323846".parse().unwrap();
    let ty = Argument::of(ClassRef::big_decimal());
    let wire = to_wire(&registry, &Value::BigDecimal(decimal.clone()), &ty).unwrap();
    assert_eq!(wire, WireValue::BigDecimal(decimal.clone()));
    assert_eq!(from_wire(&registry, wire, &ty).unwrap(), Value::BigDecimal(decimal));
}

#[test]
fn test_boxed_scalars_and_strings_accept_null() {
    let registry = SerdeRegistry::builtin_only();
    for kind in PrimitiveKind::ALL {
        assert_eq!(
            from_wire(&registry, WireValue::Null, &Argument::boxed(kind)).unwrap(),
            Value::Null
        );
        assert!(from_wire(&registry, WireValue::Null, &Argument::primitive(kind)).is_err());
    }
    assert_eq!(
        from_wire(&registry, WireValue::Null, &Argument::string()).unwrap(),
        Value::Null
    );
    assert_eq!(
        from_wire(&registry, WireValue::from("text"), &Argument::string()).unwrap(),
        Value::from("text")
    );
}
