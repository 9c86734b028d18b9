// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec contract.
//!
//! - **Encoder / Decoder**: the structural wire interface (scopes, scalars, null)
//! - **Serializer / Deserializer**: codecs written against that interface
//! - **EncoderContext / DecoderContext**: per-call state, used to resolve nested codecs
//! - **InclusionPolicy**: member inclusion decided by `is_empty` / `is_absent`

mod context;
mod decoder;
mod encoder;
mod traits;

pub use context::{DecoderContext, EncoderContext};
pub use decoder::{Decoder, Token};
pub use encoder::Encoder;
pub use traits::{Deserializer, InclusionPolicy, Nullable, Serializer};
