// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire-format bindings.
//!
//! Only the in-memory tree format ships with the crate; streaming formats
//! implement [`Encoder`](crate::codec::Encoder) / [`Decoder`](crate::codec::Decoder)
//! the same way [`TreeEncoder`] / [`TreeDecoder`] do.

pub mod tree;

pub use tree::{TreeDecoder, TreeEncoder, WireValue};

use crate::codec::{DecoderContext, EncoderContext};
use crate::error::SerdeResult;
use crate::registry::SerdeRegistry;
use crate::types::Argument;
use crate::value::Value;

/// Serialize `value` as type `ty` into a wire tree.
pub fn to_wire(registry: &SerdeRegistry, value: &Value, ty: &Argument) -> SerdeResult<WireValue> {
    let serializer = registry.find_serializer(ty)?;
    let ctx = EncoderContext::new(registry);
    let mut encoder = TreeEncoder::new();
    serializer.serialize(&mut encoder, &ctx, value, ty)?;
    encoder.into_wire()
}

/// Deserialize a wire tree as type `ty`. The whole tree must be consumed.
pub fn from_wire(registry: &SerdeRegistry, wire: WireValue, ty: &Argument) -> SerdeResult<Value> {
    let deserializer = registry.find_deserializer(ty);
    let ctx = DecoderContext::new(registry);
    let mut decoder = TreeDecoder::new(wire);
    let value = deserializer.deserialize(&mut decoder, &ctx, ty)?;
    decoder.finish()?;
    Ok(value)
}
