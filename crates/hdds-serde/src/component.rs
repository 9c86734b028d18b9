// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec discovery and instantiation.
//!
//! [`ComponentRegistry`] is the seam to whatever owns the codec
//! implementations: it lists candidates once at startup, instantiates the
//! candidate the resolver picks, and answers exact-type deserializer
//! lookups. [`StaticComponentRegistry`] is the explicit-registration
//! implementation.

use crate::codec::{Deserializer, Serializer};
use crate::error::{SerdeError, SerdeResult};
use crate::registry::{CodecOrigin, Resolved};
use crate::types::{Argument, ClassRef};
use indexmap::IndexMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

// ============================================================================
// Candidates
// ============================================================================

/// A registered codec that has not been instantiated yet.
#[derive(Clone)]
pub struct CandidateDescriptor {
    name: Arc<str>,
    declared: Option<Argument>,
}

impl CandidateDescriptor {
    /// `declared` is the type the codec handles, including its parameters.
    /// `None` marks a codec registered without one, which the registry
    /// rejects at construction.
    pub fn new(name: impl Into<Arc<str>>, declared: Option<Argument>) -> Self {
        Self {
            name: name.into(),
            declared,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub fn declared(&self) -> Option<&Argument> {
        self.declared.as_ref()
    }
}

impl fmt::Debug for CandidateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declared {
            Some(declared) => write!(f, "{}<{}>", self.name, declared),
            None => write!(f, "{}<?>", self.name),
        }
    }
}

impl fmt::Display for CandidateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Source of registered codecs.
///
/// The candidate lists are read once, before the registry is shared.
/// Neither `instantiate_serializer` nor `find_deserializer` may call back
/// into the resolving [`SerdeRegistry`](crate::SerdeRegistry).
pub trait ComponentRegistry: Send + Sync {
    fn serializer_candidates(&self) -> Vec<CandidateDescriptor>;

    fn deserializer_candidates(&self) -> Vec<CandidateDescriptor>;

    /// The shared instance for a candidate returned by `serializer_candidates`.
    fn instantiate_serializer(
        &self,
        candidate: &CandidateDescriptor,
    ) -> SerdeResult<Arc<dyn Serializer>>;

    /// A deserializer registered for exactly `ty`, if any.
    fn find_deserializer(&self, ty: &Argument) -> Option<Resolved<dyn Deserializer>>;
}

/// Source of known deserializable subtypes.
pub trait SerdeIntrospections: Send + Sync {
    /// Known classes strictly below `super_type` that can be deserialized.
    fn find_subtype_deserializables(&self, super_type: &ClassRef) -> Vec<ClassRef>;
}

// ============================================================================
// Static registration
// ============================================================================

type SerializerFactory = Box<dyn Fn() -> Arc<dyn Serializer> + Send + Sync>;
type DeserializerFactory = Box<dyn Fn() -> Arc<dyn Deserializer> + Send + Sync>;

struct Entry<F, C: ?Sized> {
    descriptor: CandidateDescriptor,
    factory: F,
    instance: OnceLock<Arc<C>>,
}

impl<F, C: ?Sized> Entry<F, C> {
    fn new(descriptor: CandidateDescriptor, factory: F) -> Self {
        Self {
            descriptor,
            factory,
            instance: OnceLock::new(),
        }
    }

    /// Created on first use and shared afterwards. A racing creation is
    /// dropped in favour of the stored one.
    fn instance(&self, create: impl FnOnce(&F) -> Arc<C>) -> Arc<C> {
        if let Some(existing) = self.instance.get() {
            return Arc::clone(existing);
        }
        let created = create(&self.factory);
        Arc::clone(self.instance.get_or_init(|| created))
    }
}

type SerializerEntry = Entry<SerializerFactory, dyn Serializer>;
type DeserializerEntry = Entry<DeserializerFactory, dyn Deserializer>;

/// Component registry populated by an explicit registration pass.
#[derive(Default)]
pub struct StaticComponentRegistry {
    serializers: IndexMap<Arc<str>, SerializerEntry>,
    deserializers: IndexMap<Arc<str>, DeserializerEntry>,
}

impl StaticComponentRegistry {
    pub fn builder() -> StaticComponentRegistryBuilder {
        StaticComponentRegistryBuilder::default()
    }

    /// A registry with no codecs.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.serializers.len() + self.deserializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve_deserializer(entry: &DeserializerEntry) -> Resolved<dyn Deserializer> {
        Resolved::new(
            CodecOrigin::Registered(entry.descriptor.shared_name()),
            entry.instance(|factory| factory()),
        )
    }
}

impl ComponentRegistry for StaticComponentRegistry {
    fn serializer_candidates(&self) -> Vec<CandidateDescriptor> {
        self.serializers
            .values()
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    fn deserializer_candidates(&self) -> Vec<CandidateDescriptor> {
        self.deserializers
            .values()
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    fn instantiate_serializer(
        &self,
        candidate: &CandidateDescriptor,
    ) -> SerdeResult<Arc<dyn Serializer>> {
        let entry = self
            .serializers
            .get(candidate.name())
            .ok_or_else(|| SerdeError::Instantiation {
                candidate: candidate.name().to_string(),
                reason: "not registered with this component registry".to_string(),
            })?;
        Ok(entry.instance(|factory| factory()))
    }

    /// A declaration structurally equal to `ty` wins. Otherwise a single
    /// generic declaration on the same raw type whose parameters accept
    /// `ty` is used; several such declarations match nothing.
    fn find_deserializer(&self, ty: &Argument) -> Option<Resolved<dyn Deserializer>> {
        if let Some(entry) = self
            .deserializers
            .values()
            .find(|entry| entry.descriptor.declared() == Some(ty))
        {
            return Some(Self::resolve_deserializer(entry));
        }

        let generic: Vec<&DeserializerEntry> = self
            .deserializers
            .values()
            .filter(|entry| {
                entry.descriptor.declared().is_some_and(|declared| {
                    declared.raw() == ty.raw()
                        && declared.has_params()
                        && declared.parameters_accept(ty)
                })
            })
            .collect();
        match generic.as_slice() {
            [] => None,
            [entry] => Some(Self::resolve_deserializer(entry)),
            several => {
                log::warn!(
                    "[serde] {} generic deserializers accept {}: {:?}; none selected",
                    several.len(),
                    ty,
                    several.iter().map(|e| &e.descriptor).collect::<Vec<_>>()
                );
                None
            }
        }
    }
}

/// Registration pass for [`StaticComponentRegistry`].
#[derive(Default)]
pub struct StaticComponentRegistryBuilder {
    serializers: Vec<SerializerEntry>,
    deserializers: Vec<DeserializerEntry>,
}

impl StaticComponentRegistryBuilder {
    /// Register a serializer for `declared`. `factory` runs at most once
    /// per race, on first selection.
    pub fn serializer<S, F>(mut self, name: &str, declared: Argument, factory: F) -> Self
    where
        S: Serializer + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.serializers
            .push(serializer_entry(name, Some(declared), factory));
        self
    }

    /// Register a serializer with no declared type.
    pub fn untyped_serializer<S, F>(mut self, name: &str, factory: F) -> Self
    where
        S: Serializer + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.serializers.push(serializer_entry(name, None, factory));
        self
    }

    pub fn deserializer<D, F>(mut self, name: &str, declared: Argument, factory: F) -> Self
    where
        D: Deserializer + 'static,
        F: Fn() -> D + Send + Sync + 'static,
    {
        self.deserializers
            .push(deserializer_entry(name, Some(declared), factory));
        self
    }

    /// Register a deserializer with no declared type.
    pub fn untyped_deserializer<D, F>(mut self, name: &str, factory: F) -> Self
    where
        D: Deserializer + 'static,
        F: Fn() -> D + Send + Sync + 'static,
    {
        self.deserializers.push(deserializer_entry(name, None, factory));
        self
    }

    /// Fails on a name registered twice within serializers or deserializers.
    pub fn build(self) -> SerdeResult<StaticComponentRegistry> {
        Ok(StaticComponentRegistry {
            serializers: index_by_name(self.serializers, "serializer")?,
            deserializers: index_by_name(self.deserializers, "deserializer")?,
        })
    }
}

fn serializer_entry<S, F>(name: &str, declared: Option<Argument>, factory: F) -> SerializerEntry
where
    S: Serializer + 'static,
    F: Fn() -> S + Send + Sync + 'static,
{
    let factory: SerializerFactory = Box::new(move || Arc::new(factory()) as Arc<dyn Serializer>);
    Entry::new(CandidateDescriptor::new(name, declared), factory)
}

fn deserializer_entry<D, F>(name: &str, declared: Option<Argument>, factory: F) -> DeserializerEntry
where
    D: Deserializer + 'static,
    F: Fn() -> D + Send + Sync + 'static,
{
    let factory: DeserializerFactory =
        Box::new(move || Arc::new(factory()) as Arc<dyn Deserializer>);
    Entry::new(CandidateDescriptor::new(name, declared), factory)
}

fn index_by_name<F, C: ?Sized>(
    entries: Vec<Entry<F, C>>,
    kind: &str,
) -> SerdeResult<IndexMap<Arc<str>, Entry<F, C>>> {
    let mut by_name = IndexMap::with_capacity(entries.len());
    for entry in entries {
        let name = entry.descriptor.shared_name();
        if by_name.contains_key(&name) {
            return Err(SerdeError::Configuration(format!(
                "{} {} registered twice",
                kind, name
            )));
        }
        by_name.insert(name, entry);
    }
    Ok(by_name)
}

// ============================================================================
// Introspections
// ============================================================================

/// A fixed list of known classes, filtered by subtyping.
#[derive(Debug, Clone, Default)]
pub struct StaticIntrospections {
    known: Vec<ClassRef>,
}

impl StaticIntrospections {
    pub fn new(known: Vec<ClassRef>) -> Self {
        Self { known }
    }

    pub fn with(mut self, class: ClassRef) -> Self {
        self.known.push(class);
        self
    }
}

impl SerdeIntrospections for StaticIntrospections {
    fn find_subtype_deserializables(&self, super_type: &ClassRef) -> Vec<ClassRef> {
        self.known
            .iter()
            .filter(|class| *class != super_type && class.is_subclass_of(super_type))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{ObjectDeserializer, ObjectSerializer, StringDeserializer};
    use crate::types::PrimitiveKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn list() -> ClassRef {
        ClassRef::list()
    }

    #[test]
    fn serializer_instances_are_created_once() {
        let created = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&created);
        let components = StaticComponentRegistry::builder()
            .serializer("Plain", Argument::string(), move || {
                counter.fetch_add(1, Ordering::SeqCst);
                ObjectSerializer
            })
            .build()
            .unwrap();

        let candidates = components.serializer_candidates();
        let a = components.instantiate_serializer(&candidates[0]).unwrap();
        let b = components.instantiate_serializer(&candidates[0]).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_candidates_fail_to_instantiate() {
        let components = StaticComponentRegistry::empty();
        let stranger = CandidateDescriptor::new("Stranger", Some(Argument::string()));
        let err = components.instantiate_serializer(&stranger).err().unwrap();
        assert!(matches!(err, SerdeError::Instantiation { .. }));
    }

    #[test]
    fn duplicate_names_are_a_configuration_error() {
        let err = StaticComponentRegistry::builder()
            .serializer("Twice", Argument::string(), || ObjectSerializer)
            .serializer("Twice", Argument::object(), || ObjectSerializer)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SerdeError::Configuration(_)));
    }

    #[test]
    fn exact_deserializer_lookup() {
        let string_list = Argument::generic(list(), vec![Argument::string()]);
        let any_list = Argument::generic(list(), vec![Argument::unbounded("E")]);
        let components = StaticComponentRegistry::builder()
            .deserializer("StringList", string_list.clone(), || StringDeserializer)
            .deserializer("AnyList", any_list, || ObjectDeserializer)
            .build()
            .unwrap();

        let exact = components.find_deserializer(&string_list).unwrap();
        assert_eq!(exact.origin().candidate_name(), Some("StringList"));

        let long_list = Argument::generic(list(), vec![Argument::boxed(PrimitiveKind::Long)]);
        let generic = components.find_deserializer(&long_list).unwrap();
        assert_eq!(generic.origin().candidate_name(), Some("AnyList"));

        assert!(components.find_deserializer(&Argument::of(list())).is_none());
        assert!(components.find_deserializer(&Argument::string()).is_none());
    }

    #[test]
    fn competing_generic_deserializers_match_nothing() {
        let components = StaticComponentRegistry::builder()
            .deserializer(
                "A",
                Argument::generic(list(), vec![Argument::unbounded("E")]),
                || ObjectDeserializer,
            )
            .deserializer(
                "B",
                Argument::generic(list(), vec![Argument::unbounded("T")]),
                || ObjectDeserializer,
            )
            .build()
            .unwrap();
        let request = Argument::generic(list(), vec![Argument::string()]);
        assert!(components.find_deserializer(&request).is_none());
    }

    #[test]
    fn introspections_list_strict_subtypes() {
        let animal = ClassRef::new("Animal");
        let dog = ClassRef::with_supertypes("Dog", vec![animal.clone()]);
        let puppy = ClassRef::with_supertypes("Puppy", vec![dog.clone()]);
        let rock = ClassRef::new("Rock");
        let introspections = StaticIntrospections::new(vec![animal.clone(), dog.clone()])
            .with(puppy.clone())
            .with(rock);

        assert_eq!(
            introspections.find_subtype_deserializables(&animal),
            vec![dog.clone(), puppy.clone()]
        );
        assert_eq!(introspections.find_subtype_deserializables(&dog), vec![puppy]);
    }
}
