// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in codecs.
//!
//! Registered into both codec caches when a registry is built, so they are
//! plain cache hits at lookup time and never go through candidate narrowing.
//!
//! | Types                                | Codec                       | Caches      |
//! |--------------------------------------|-----------------------------|-------------|
//! | `boolean` .. `char`                  | [`PrimitiveDeserializer`]   | deserializer |
//! | `Boolean` .. `Character`, `String`   | [`Nullable`] wrapper         | deserializer |
//! | BigInteger, BigDecimal               | numeric tokens              | both        |
//! | Uuid, Url, Uri, Charset, TimeZone, Locale | string form            | both        |
//! | OptionalInt / Long / Double          | scalar or null              | both        |
//! | `boolean[]` .. `char[]`              | [`PrimitiveArraySerde`]     | both        |

mod arrays;
mod object;
mod optional;
mod primitives;
mod values;

pub use arrays::{ArrayElement, PrimitiveArraySerde};
pub use object::{ObjectArrayDeserializer, ObjectDeserializer, ObjectSerializer};
pub use optional::{OptionalDoubleSerde, OptionalIntSerde, OptionalLongSerde};
pub use primitives::{PrimitiveDeserializer, StringDeserializer};
pub use values::{
    BigDecimalSerde, BigIntegerSerde, CharsetSerde, LocaleSerde, TimeZoneSerde, UriSerde, UrlSerde,
    UuidSerde,
};

use crate::codec::{Deserializer, Nullable, Serializer};
use crate::registry::Resolved;
use crate::types::{Argument, ClassRef, PrimitiveKind};
use dashmap::DashMap;
use std::sync::Arc;

pub type SerializerCache = DashMap<Argument, Resolved<dyn Serializer>>;
pub type DeserializerCache = DashMap<Argument, Resolved<dyn Deserializer>>;

/// Register one codec instance under `ty` in both caches.
fn register_serde<C>(
    serializers: &SerializerCache,
    deserializers: &DeserializerCache,
    ty: Argument,
    codec: C,
) where
    C: Serializer + Deserializer + 'static,
{
    let codec = Arc::new(codec);
    let as_serializer: Arc<dyn Serializer> = codec.clone();
    let as_deserializer: Arc<dyn Deserializer> = codec;
    serializers.insert(ty.clone(), Resolved::built_in(as_serializer));
    deserializers.insert(ty, Resolved::built_in(as_deserializer));
}

fn register_deserializer<D>(deserializers: &DeserializerCache, ty: Argument, codec: D)
where
    D: Deserializer + 'static,
{
    let codec: Arc<dyn Deserializer> = Arc::new(codec);
    deserializers.insert(ty, Resolved::built_in(codec));
}

fn primitive_array(kind: PrimitiveKind) -> Argument {
    Argument::array_of(&Argument::primitive(kind))
}

/// Populate the caches with every built-in codec.
///
/// Runs before the registry is shared, while nothing else can observe the
/// caches. Returns the number of cache entries written.
pub fn register_builtins(serializers: &SerializerCache, deserializers: &DeserializerCache) -> usize {
    let before = serializers.len() + deserializers.len();

    for kind in PrimitiveKind::ALL {
        register_deserializer(deserializers, Argument::primitive(kind), PrimitiveDeserializer(kind));
        register_deserializer(
            deserializers,
            Argument::boxed(kind),
            Nullable::new(PrimitiveDeserializer(kind)),
        );
    }
    register_deserializer(deserializers, Argument::string(), Nullable::new(StringDeserializer));

    register_serde(serializers, deserializers, Argument::of(ClassRef::optional_int()), OptionalIntSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::optional_double()), OptionalDoubleSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::optional_long()), OptionalLongSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::big_decimal()), BigDecimalSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::big_integer()), BigIntegerSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::uuid()), UuidSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::url()), UrlSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::uri()), UriSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::charset()), CharsetSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::time_zone()), TimeZoneSerde);
    register_serde(serializers, deserializers, Argument::of(ClassRef::locale()), LocaleSerde);

    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Int),
        PrimitiveArraySerde::<i32>::new(),
    );
    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Long),
        PrimitiveArraySerde::<i64>::new(),
    );
    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Float),
        PrimitiveArraySerde::<f32>::new(),
    );
    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Short),
        PrimitiveArraySerde::<i16>::new(),
    );
    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Double),
        PrimitiveArraySerde::<f64>::new(),
    );
    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Boolean),
        PrimitiveArraySerde::<bool>::new(),
    );
    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Byte),
        PrimitiveArraySerde::<i8>::new(),
    );
    register_serde(
        serializers,
        deserializers,
        primitive_array(PrimitiveKind::Char),
        PrimitiveArraySerde::<char>::new(),
    );

    serializers.len() + deserializers.len() - before
}
