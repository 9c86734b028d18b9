// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Candidate index: registered codecs bucketed by raw target type.
//!
//! Built once from the component registry's candidate lists and read-only
//! afterwards. Buckets keep registration order, and so does the bucket
//! map itself, which makes the supertype scan deterministic.

use crate::component::CandidateDescriptor;
use crate::config::BucketSelection;
use crate::error::{SerdeError, SerdeResult};
use crate::types::RawType;
use indexmap::IndexMap;

type Buckets = IndexMap<RawType, Vec<CandidateDescriptor>>;

/// Serializer and deserializer candidates keyed by raw type.
#[derive(Debug, Default)]
pub struct CandidateIndex {
    serializers: Buckets,
    deserializers: Buckets,
}

impl CandidateIndex {
    /// Index both candidate lists.
    ///
    /// Fails with [`SerdeError::Configuration`] on a candidate without a
    /// declared type. Candidates declared for plain `Object` are not
    /// indexed. A candidate for a boxed scalar is indexed under the
    /// primitive kind as well.
    pub fn build(
        serializers: Vec<CandidateDescriptor>,
        deserializers: Vec<CandidateDescriptor>,
    ) -> SerdeResult<Self> {
        Ok(Self {
            serializers: index_candidates(serializers, "Serializer")?,
            deserializers: index_candidates(deserializers, "Deserializer")?,
        })
    }

    pub fn serializer_bucket(&self, raw: &RawType) -> Option<&[CandidateDescriptor]> {
        self.serializers.get(raw).map(Vec::as_slice)
    }

    pub fn deserializer_bucket(&self, raw: &RawType) -> Option<&[CandidateDescriptor]> {
        self.deserializers.get(raw).map(Vec::as_slice)
    }

    /// Raw types with at least one serializer candidate, in registration order.
    pub fn serializer_types(&self) -> impl Iterator<Item = &RawType> {
        self.serializers.keys()
    }

    pub fn deserializer_types(&self) -> impl Iterator<Item = &RawType> {
        self.deserializers.keys()
    }

    /// Number of indexed (raw type, candidate) pairs.
    pub fn len(&self) -> usize {
        self.serializers.values().map(Vec::len).sum::<usize>()
            + self.deserializers.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty() && self.deserializers.is_empty()
    }

    /// The serializer bucket used for `raw`: its own bucket if there is
    /// one, else a bucket whose raw type is assignable from `raw`.
    pub fn find_serializer_bucket(
        &self,
        raw: &RawType,
        selection: BucketSelection,
    ) -> Option<(&RawType, &[CandidateDescriptor])> {
        if let Some((key, bucket)) = self.serializers.get_key_value(raw) {
            return Some((key, bucket.as_slice()));
        }

        let mut assignable = self
            .serializers
            .iter()
            .filter(|(key, _)| key.is_assignable_from(raw));

        let (key, bucket) = match selection {
            BucketSelection::FirstAssignable => assignable.next()?,
            BucketSelection::MostSpecific => {
                let all: Vec<_> = assignable.collect();
                let first = *all.first()?;
                all.iter()
                    .copied()
                    .find(|(key, _)| all.iter().all(|(other, _)| other.is_assignable_from(key)))
                    .unwrap_or_else(|| {
                        log::warn!(
                            "[serde] no most specific serializer bucket for {} among {:?}; using {}",
                            raw,
                            all.iter().map(|(key, _)| key.to_string()).collect::<Vec<_>>(),
                            first.0
                        );
                        first
                    })
            }
        };
        log::debug!("[serde] serializer bucket {} selected for {}", key, raw);
        Some((key, bucket.as_slice()))
    }
}

fn index_candidates(candidates: Vec<CandidateDescriptor>, kind: &str) -> SerdeResult<Buckets> {
    let mut buckets = Buckets::new();
    for candidate in candidates {
        let Some(declared) = candidate.declared() else {
            return Err(SerdeError::Configuration(format!(
                "{} without generic types defined: {}",
                kind,
                candidate.name()
            )));
        };
        if declared.is_any_object() {
            log::debug!("[serde] {} {} declared for Object, not indexed", kind, candidate.name());
            continue;
        }

        let raw = declared.raw().clone();
        let primitive = raw.primitive_counterpart();
        if let Some(primitive) = primitive {
            buckets.entry(primitive).or_default().push(candidate.clone());
        }
        buckets.entry(raw).or_default().push(candidate);
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Argument, ClassRef, PrimitiveKind};

    fn candidate(name: &str, declared: Argument) -> CandidateDescriptor {
        CandidateDescriptor::new(name, Some(declared))
    }

    fn names(bucket: &[CandidateDescriptor]) -> Vec<&str> {
        bucket.iter().map(CandidateDescriptor::name).collect()
    }

    #[test]
    fn test_untyped_candidate_is_fatal() {
        let err = CandidateIndex::build(vec![CandidateDescriptor::new("Untyped", None)], vec![])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: Serializer without generic types defined: Untyped"
        );

        let err = CandidateIndex::build(vec![], vec![CandidateDescriptor::new("Untyped", None)])
            .unwrap_err();
        assert!(matches!(err, SerdeError::Configuration(_)));
    }

    #[test]
    fn test_object_candidates_are_skipped() {
        let index = CandidateIndex::build(
            vec![candidate("Any", Argument::object())],
            vec![candidate("Any", Argument::object())],
        )
        .unwrap();
        assert!(index.is_empty());
        assert!(index.serializer_bucket(&ClassRef::object().into()).is_none());
    }

    #[test]
    fn test_boxed_candidates_index_under_primitive_too() {
        let index = CandidateIndex::build(
            vec![candidate("IntegerSer", Argument::boxed(PrimitiveKind::Int))],
            vec![candidate("IntegerDe", Argument::boxed(PrimitiveKind::Int))],
        )
        .unwrap();

        let boxed = RawType::Boxed(PrimitiveKind::Int);
        let primitive = RawType::Primitive(PrimitiveKind::Int);
        assert_eq!(names(index.serializer_bucket(&boxed).unwrap()), ["IntegerSer"]);
        assert_eq!(names(index.serializer_bucket(&primitive).unwrap()), ["IntegerSer"]);
        assert_eq!(names(index.deserializer_bucket(&primitive).unwrap()), ["IntegerDe"]);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_buckets_keep_registration_order() {
        let list = ClassRef::new("List");
        let index = CandidateIndex::build(
            vec![
                candidate("B", Argument::generic(list.clone(), vec![Argument::string()])),
                candidate("A", Argument::generic(list.clone(), vec![Argument::unbounded("E")])),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(names(index.serializer_bucket(&list.into()).unwrap()), ["B", "A"]);
    }

    #[test]
    fn test_exact_bucket_wins_over_supertypes() {
        let animal = ClassRef::new("Animal");
        let dog = ClassRef::with_supertypes("Dog", vec![animal.clone()]);
        let index = CandidateIndex::build(
            vec![
                candidate("AnimalSer", Argument::of(animal)),
                candidate("DogSer", Argument::of(dog.clone())),
            ],
            vec![],
        )
        .unwrap();
        let (key, bucket) = index
            .find_serializer_bucket(&dog.clone().into(), BucketSelection::FirstAssignable)
            .unwrap();
        assert_eq!(*key, RawType::from(dog));
        assert_eq!(names(bucket), ["DogSer"]);
    }

    #[test]
    fn test_supertype_scan_selection() {
        let animal = ClassRef::new("Animal");
        let dog = ClassRef::with_supertypes("Dog", vec![animal.clone()]);
        let puppy = ClassRef::with_supertypes("Puppy", vec![dog.clone()]);
        let index = CandidateIndex::build(
            vec![
                candidate("AnimalSer", Argument::of(animal)),
                candidate("DogSer", Argument::of(dog)),
            ],
            vec![],
        )
        .unwrap();
        let raw = RawType::from(puppy);

        let (_, first) = index
            .find_serializer_bucket(&raw, BucketSelection::FirstAssignable)
            .unwrap();
        assert_eq!(names(first), ["AnimalSer"]);

        let (_, specific) = index
            .find_serializer_bucket(&raw, BucketSelection::MostSpecific)
            .unwrap();
        assert_eq!(names(specific), ["DogSer"]);
    }

    #[test]
    fn test_unrelated_supertypes_fall_back_to_registration_order() {
        let named = ClassRef::new("Named");
        let aged = ClassRef::new("Aged");
        let person = ClassRef::with_supertypes("Person", vec![named.clone(), aged.clone()]);
        let index = CandidateIndex::build(
            vec![
                candidate("AgedSer", Argument::of(aged)),
                candidate("NamedSer", Argument::of(named)),
            ],
            vec![],
        )
        .unwrap();
        let raw = RawType::from(person);
        for selection in [BucketSelection::FirstAssignable, BucketSelection::MostSpecific] {
            let (_, bucket) = index.find_serializer_bucket(&raw, selection).unwrap();
            assert_eq!(names(bucket), ["AgedSer"]);
        }
    }

    #[test]
    fn test_no_assignable_bucket() {
        let index = CandidateIndex::build(
            vec![candidate("StringSer", Argument::string())],
            vec![],
        )
        .unwrap();
        let raw = RawType::from(ClassRef::new("Unrelated"));
        assert!(index
            .find_serializer_bucket(&raw, BucketSelection::FirstAssignable)
            .is_none());
        assert!(index
            .find_serializer_bucket(&raw, BucketSelection::MostSpecific)
            .is_none());
    }
}
