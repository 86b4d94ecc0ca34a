//! Named boolean properties and their per-structure memoization
//!
//! A [`Property`] is plain data: a name, the kind of structure it applies
//! to, and a stored predicate. Results are cached on the structure itself
//! through the [`Propertied`] capability, never on the property.

use super::store::{GraphError, GraphResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Value produced by a predicate
///
/// Typed predicates always produce `Boolean`; dynamically built ones may
/// return anything and are checked when evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<PropertyValue>),
    Null,
}

impl PropertyValue {
    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::Array(_) => "Array",
            PropertyValue::Null => "Null",
        }
    }
}

/// Kind of structure a property is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Graph,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::Graph => write!(f, "graph"),
        }
    }
}

/// A structure properties can be evaluated against
pub trait Structure {
    const KIND: StructureKind;
}

type Predicate<S> = Rc<dyn Fn(&S) -> PropertyValue>;

/// A named boolean predicate over a structure
pub struct Property<S> {
    name: String,
    structure_type: StructureKind,
    predicate: Predicate<S>,
}

impl<S: Structure> Property<S> {
    /// Property backed by a typed predicate
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + 'static,
    {
        Self::from_value_fn(name, move |structure| {
            PropertyValue::Boolean(predicate(structure))
        })
    }

    /// Property backed by a predicate whose result is only known at runtime.
    ///
    /// Evaluation fails with `PredicateContractViolation` unless it yields a
    /// `PropertyValue::Boolean`.
    pub fn from_value_fn<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&S) -> PropertyValue + 'static,
    {
        Property {
            name: name.into(),
            structure_type: S::KIND,
            predicate: Rc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn structure_type(&self) -> StructureKind {
        self.structure_type
    }

    /// Run the predicate, bypassing any cache
    pub fn evaluate(&self, structure: &S) -> GraphResult<bool> {
        let value = (self.predicate)(structure);
        value
            .as_boolean()
            .ok_or_else(|| GraphError::PredicateContractViolation {
                property: self.name.clone(),
                returned: value.type_name().to_string(),
            })
    }
}

impl<S> Clone for Property<S> {
    fn clone(&self) -> Self {
        Property {
            name: self.name.clone(),
            structure_type: self.structure_type,
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S> fmt::Debug for Property<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("structure_type", &self.structure_type)
            .finish_non_exhaustive()
    }
}

/// Ordered set of known properties, keyed by name
pub struct PropertyRegistry<S> {
    properties: IndexMap<String, Property<S>>,
}

impl<S: Structure> PropertyRegistry<S> {
    pub fn new() -> Self {
        PropertyRegistry {
            properties: IndexMap::new(),
        }
    }

    /// Add a property, replacing and returning any previous one with the same name
    pub fn register(&mut self, property: Property<S>) -> Option<Property<S>> {
        self.properties.insert(property.name.clone(), property)
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, property: Property<S>) -> Self {
        self.register(property);
        self
    }

    pub fn get(&self, name: &str) -> GraphResult<&Property<S>> {
        self.properties
            .get(name)
            .ok_or_else(|| GraphError::PropertyNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property<S>> {
        self.properties.values()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<S: Structure> Default for PropertyRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for PropertyRegistry<S> {
    fn clone(&self) -> Self {
        PropertyRegistry {
            properties: self.properties.clone(),
        }
    }
}

impl<S> fmt::Debug for PropertyRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.properties.keys()).finish()
    }
}

/// Property name -> last evaluated result
///
/// Interior mutability lets lookups through `&self` fill the cache; the
/// owner clears it on every mutation.
#[derive(Debug, Default, Clone)]
pub struct PropertyCache {
    results: RefCell<IndexMap<String, bool>>,
}

impl PropertyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.results.borrow().get(name).copied()
    }

    pub fn store(&self, name: &str, result: bool) {
        self.results.borrow_mut().insert(name.to_string(), result);
    }

    pub fn clear(&self) {
        self.results.borrow_mut().clear();
    }

    pub fn snapshot(&self) -> IndexMap<String, bool> {
        self.results.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.results.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.borrow().is_empty()
    }
}

/// Capability of structures that memoize property results
pub trait Propertied: Structure + Sized {
    fn property_cache(&self) -> &PropertyCache;

    fn property_registry(&self) -> &PropertyRegistry<Self>;

    /// Evaluate `property` at most once per cache epoch
    fn satisfies(&self, property: &Property<Self>) -> GraphResult<bool> {
        if let Some(cached) = self.property_cache().get(property.name()) {
            trace!(property = property.name(), cached, "property cache hit");
            return Ok(cached);
        }

        // Cache is not borrowed while the predicate runs, so predicates may
        // query other properties.
        let result = property.evaluate(self)?;
        trace!(property = property.name(), result, "property evaluated");
        self.property_cache().store(property.name(), result);
        Ok(result)
    }

    /// Evaluate a registered property by name
    fn satisfies_named(&self, name: &str) -> GraphResult<bool> {
        if let Some(cached) = self.property_cache().get(name) {
            return Ok(cached);
        }
        let property = self.property_registry().get(name)?;
        self.satisfies(property)
    }

    /// Evaluate every registered property and return the cache snapshot
    fn determine_properties(&self) -> GraphResult<IndexMap<String, bool>> {
        for property in self.property_registry().iter() {
            self.satisfies(property)?;
        }
        Ok(self.property_cache().snapshot())
    }

    /// Evaluate the given properties and return the cache snapshot
    fn determine_properties_of(
        &self,
        properties: &[Property<Self>],
    ) -> GraphResult<IndexMap<String, bool>> {
        for property in properties {
            self.satisfies(property)?;
        }
        Ok(self.property_cache().snapshot())
    }

    /// Results cached so far
    fn properties(&self) -> IndexMap<String, bool> {
        self.property_cache().snapshot()
    }
}
