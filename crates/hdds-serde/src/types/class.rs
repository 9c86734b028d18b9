// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Named classes and their supertype graph.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

#[derive(Debug)]
struct ClassInfo {
    name: Arc<str>,
    supertypes: Vec<ClassRef>,
}

/// Shared handle to a named class.
///
/// Two handles are equal when they carry the same name and the same
/// declared supertypes, so separately constructed handles for one class
/// hit the same cache slot while a redeclared graph gets its own. Equal
/// handles therefore always answer assignability the same way.
/// The implicit root `Object` is a supertype of every class and need not
/// be listed.
#[derive(Clone)]
pub struct ClassRef(Arc<ClassInfo>);

impl ClassRef {
    /// Create a class with no declared supertypes (other than `Object`).
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_supertypes(name, Vec::new())
    }

    /// Create a class extending/implementing `supertypes`.
    pub fn with_supertypes(name: impl Into<Arc<str>>, supertypes: Vec<ClassRef>) -> Self {
        Self(Arc::new(ClassInfo {
            name: name.into(),
            supertypes,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn supertypes(&self) -> &[ClassRef] {
        &self.0.supertypes
    }

    pub fn is_object(&self) -> bool {
        self.name() == OBJECT
    }

    /// Whether `self` is `other` or (transitively) extends it.
    pub fn is_subclass_of(&self, other: &ClassRef) -> bool {
        if other.is_object() || self == other {
            return true;
        }
        self.supertypes().iter().any(|s| s.is_subclass_of(other))
    }

    pub fn object() -> Self {
        WELL_KNOWN.object.clone()
    }

    pub fn number() -> Self {
        WELL_KNOWN.number.clone()
    }

    pub fn string() -> Self {
        WELL_KNOWN.string.clone()
    }

    pub fn big_integer() -> Self {
        WELL_KNOWN.big_integer.clone()
    }

    pub fn big_decimal() -> Self {
        WELL_KNOWN.big_decimal.clone()
    }

    pub fn collection() -> Self {
        WELL_KNOWN.collection.clone()
    }

    /// `List`, declared as a `Collection`. Untyped list values use this handle.
    pub fn list() -> Self {
        WELL_KNOWN.list.clone()
    }

    pub fn uuid() -> Self {
        WELL_KNOWN.uuid.clone()
    }

    pub fn url() -> Self {
        WELL_KNOWN.url.clone()
    }

    pub fn uri() -> Self {
        WELL_KNOWN.uri.clone()
    }

    pub fn charset() -> Self {
        WELL_KNOWN.charset.clone()
    }

    pub fn time_zone() -> Self {
        WELL_KNOWN.time_zone.clone()
    }

    pub fn locale() -> Self {
        WELL_KNOWN.locale.clone()
    }

    pub fn optional_int() -> Self {
        WELL_KNOWN.optional_int.clone()
    }

    pub fn optional_long() -> Self {
        WELL_KNOWN.optional_long.clone()
    }

    pub fn optional_double() -> Self {
        WELL_KNOWN.optional_double.clone()
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.name == other.0.name && self.0.supertypes == other.0.supertypes)
    }
}

impl Eq for ClassRef {}

// Name only: equal handles share a name, so this agrees with `eq`.
impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassRef({})", self.name())
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const OBJECT: &str = "Object";

struct WellKnown {
    object: ClassRef,
    number: ClassRef,
    string: ClassRef,
    big_integer: ClassRef,
    big_decimal: ClassRef,
    collection: ClassRef,
    list: ClassRef,
    uuid: ClassRef,
    url: ClassRef,
    uri: ClassRef,
    charset: ClassRef,
    time_zone: ClassRef,
    locale: ClassRef,
    optional_int: ClassRef,
    optional_long: ClassRef,
    optional_double: ClassRef,
}

static WELL_KNOWN: LazyLock<WellKnown> = LazyLock::new(|| {
    let number = ClassRef::new("Number");
    let collection = ClassRef::new("Collection");
    WellKnown {
        object: ClassRef::new(OBJECT),
        big_integer: ClassRef::with_supertypes("BigInteger", vec![number.clone()]),
        big_decimal: ClassRef::with_supertypes("BigDecimal", vec![number.clone()]),
        number,
        list: ClassRef::with_supertypes("List", vec![collection.clone()]),
        collection,
        string: ClassRef::new("String"),
        uuid: ClassRef::new("Uuid"),
        url: ClassRef::new("Url"),
        uri: ClassRef::new("Uri"),
        charset: ClassRef::new("Charset"),
        time_zone: ClassRef::new("TimeZone"),
        locale: ClassRef::new("Locale"),
        optional_int: ClassRef::new("OptionalInt"),
        optional_long: ClassRef::new("OptionalLong"),
        optional_double: ClassRef::new("OptionalDouble"),
    }
});
