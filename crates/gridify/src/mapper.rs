use crate::FieldValue;
use gridify_core::stmt::{Type, Value};

use indexmap::IndexMap;
use std::sync::Arc;

pub(crate) type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;
pub(crate) type Normalizer = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A single field mapping: a typed accessor plus an optional normaliser
/// applied to the accessor's output.
pub struct Mapping<T> {
    accessor: Accessor<T>,
    normalizer: Option<Normalizer>,
    ty: Type,
}

impl<T> Mapping<T> {
    /// The static type of the accessor's output. Drives right-hand literal
    /// parsing.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn has_normalizer(&self) -> bool {
        self.normalizer.is_some()
    }

    /// Reads the field off a record and applies the normaliser, if any.
    pub fn resolve(&self, record: &T) -> Value {
        let value = (self.accessor)(record);
        match &self.normalizer {
            Some(normalizer) => normalizer(value),
            None => value,
        }
    }

    /// Reads the field off a record without normalisation. Ordering goes
    /// through here.
    pub fn access(&self, record: &T) -> Value {
        (self.accessor)(record)
    }

    pub(crate) fn accessor_arc(&self) -> Accessor<T> {
        self.accessor.clone()
    }
}

impl<T> Clone for Mapping<T> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            normalizer: self.normalizer.clone(),
            ty: self.ty.clone(),
        }
    }
}

/// Registry binding DSL field names to typed accessors on `T`.
///
/// A mapper is built once per record type and shared by reference. Reads are
/// concurrency-safe; adding or removing mappings after sharing must be
/// externally serialised.
pub struct FieldMapper<T> {
    case_sensitive: bool,
    mappings: IndexMap<String, Mapping<T>>,
}

impl<T> FieldMapper<T> {
    /// Creates a mapper with ASCII case-insensitive name matching.
    pub fn new() -> Self {
        Self::with_case_sensitive(false)
    }

    pub fn with_case_sensitive(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            mappings: IndexMap::new(),
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn key(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_owned()
        } else {
            name.to_ascii_lowercase()
        }
    }

    /// Registers a mapping, overwriting any existing mapping under the same
    /// name.
    pub fn add_map<V, F>(&mut self, name: impl Into<String>, accessor: F) -> &mut Self
    where
        V: FieldValue,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.insert(name.into(), accessor, None)
    }

    /// Registers a mapping whose accessor output passes through `normalizer`
    /// before every comparison.
    ///
    /// The right-hand literal is never normalised: a caller implementing
    /// case-insensitive matching folds one side here and writes the literal
    /// pre-folded.
    pub fn add_map_with<V, F, N>(
        &mut self,
        name: impl Into<String>,
        accessor: F,
        normalizer: N,
    ) -> &mut Self
    where
        V: FieldValue,
        F: Fn(&T) -> V + Send + Sync + 'static,
        N: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.insert(name.into(), accessor, Some(Arc::new(normalizer)))
    }

    fn insert<V, F>(&mut self, name: String, accessor: F, normalizer: Option<Normalizer>) -> &mut Self
    where
        V: FieldValue,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        let key = self.key(&name);
        self.mappings.insert(
            key,
            Mapping {
                accessor: Arc::new(move |record| accessor(record).into_value()),
                normalizer,
                ty: V::ty(),
            },
        );
        self
    }

    /// Unregisters a mapping. Returns whether one was present.
    pub fn remove_map(&mut self, name: &str) -> bool {
        let key = self.key(name);
        self.mappings.shift_remove(&key).is_some()
    }

    pub fn has_map(&self, name: &str) -> bool {
        self.mappings.contains_key(&self.key(name))
    }

    pub fn get_map(&self, name: &str) -> Option<&Mapping<T>> {
        self.mappings.get(&self.key(name))
    }

    /// Registered names, in registration order.
    pub fn mapped_names(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    /// Registers one mapping per field of `T`, as generated at build time.
    pub fn generate_mappings(&mut self) -> &mut Self
    where
        T: Gridifiable,
    {
        T::register_mappings(self);
        self
    }
}

impl<T> Default for FieldMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldMapper<T> {
    fn clone(&self) -> Self {
        Self {
            case_sensitive: self.case_sensitive,
            mappings: self.mappings.clone(),
        }
    }
}

/// A record type with a build-time generated field mapping table.
///
/// Usually implemented through `#[derive(Gridifiable)]`, which registers one
/// mapping per named field.
pub trait Gridifiable: Sized {
    /// Registers the generated mappings into `mapper`.
    fn register_mappings(mapper: &mut FieldMapper<Self>);

    /// Builds the implicit mapper used when a caller supplies none.
    fn field_mapper() -> FieldMapper<Self> {
        let mut mapper = FieldMapper::new();
        Self::register_mappings(&mut mapper);
        mapper
    }
}
