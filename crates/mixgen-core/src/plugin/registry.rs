//! Registry for data generators.
//!
//! Built-in generators are registered at construction; lookup is by id,
//! layout, or a case-insensitive text search.

use std::collections::HashMap;

use super::{generators, DataGenerator, GeneratorError, GeneratorMetadata, LayoutKind};

/// Registry of available dataset generators.
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn DataGenerator>>,
    by_id: HashMap<String, usize>,
}

impl GeneratorRegistry {
    /// Create a new registry with all built-in generators registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(generators::GridGenerator::new()));
        registry.register(Box::new(generators::CircleGenerator::new()));
        registry.register(Box::new(generators::SpiralGenerator::new()));
        registry
    }

    /// Create an empty registry (for testing)
    pub fn empty() -> Self {
        Self {
            generators: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Register a generator; a later registration with the same id wins lookups.
    pub fn register(&mut self, generator: Box<dyn DataGenerator>) {
        let index = self.generators.len();
        self.by_id.insert(generator.metadata().id.clone(), index);
        self.generators.push(generator);
    }

    pub fn get(&self, id: &str) -> Option<&dyn DataGenerator> {
        self.by_id
            .get(id)
            .map(|&index| self.generators[index].as_ref())
    }

    /// Like [`get`](Self::get), but reports a missing id as an error
    pub fn require(&self, id: &str) -> Result<&dyn DataGenerator, GeneratorError> {
        self.get(id)
            .ok_or_else(|| GeneratorError::NotFound(id.to_string()))
    }

    pub fn list_all(&self) -> Vec<&GeneratorMetadata> {
        self.generators.iter().map(|g| g.metadata()).collect()
    }

    pub fn list_by_layout(&self, layout: LayoutKind) -> Vec<&GeneratorMetadata> {
        self.generators
            .iter()
            .map(|g| g.metadata())
            .filter(|m| m.layout == layout)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Search generators by id, name or description (case-insensitive).
    pub fn search(&self, query: &str) -> Vec<&GeneratorMetadata> {
        let query_lower = query.to_lowercase();
        self.generators
            .iter()
            .map(|g| g.metadata())
            .filter(|m| {
                m.name.to_lowercase().contains(&query_lower)
                    || m.description.to_lowercase().contains(&query_lower)
                    || m.id.to_lowercase().contains(&query_lower)
            })
            .collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
