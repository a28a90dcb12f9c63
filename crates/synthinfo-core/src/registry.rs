//! Registry of definitions and sample groups.

use std::sync::{Arc, OnceLock};

use crate::args::Args;
use crate::catalog::{self, fx, SampleGroup};
use crate::definition::{is_valid_key, DefinitionKind, InstrumentDefinition};
use crate::error::{DefinitionError, ValidationError};

/// One registry key and the definition it resolves to.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    key: String,
    definition: Arc<InstrumentDefinition>,
    replacement: bool,
}

impl RegistryEntry {
    /// The registry key. Differs from the definition's key for aliases.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn definition(&self) -> &Arc<InstrumentDefinition> {
        &self.definition
    }

    /// Returns true for `fx_replace_*` style aliases, which docs skip.
    pub fn is_replacement(&self) -> bool {
        self.replacement
    }

    /// Returns true if this key is not the definition's own key.
    pub fn is_alias(&self) -> bool {
        self.key != self.definition.key()
    }
}

/// Ordered map from registry key to shared definition, plus sample groups.
///
/// Aliases resolve to the same `Arc` as their target, so toggling validation
/// through one key is visible through every other.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    samples: Vec<SampleGroup>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding the full built-in catalog.
    pub fn builtin() -> Result<Self, DefinitionError> {
        let mut registry = Self::new();

        for builder in catalog::synths::builders() {
            registry.register(builder.build()?)?;
        }
        for builder in catalog::studio::builders() {
            registry.register(builder.build()?)?;
        }
        for entry in fx::entries() {
            let def = registry.register(entry.builder.build()?)?;
            if entry.replaceable {
                let key = def.key().to_string();
                registry.alias(fx::replace_alias(&key), &key, true)?;
            }
        }
        for group in catalog::samples::grouped_samples() {
            registry.add_sample_group(group);
        }

        log::debug!(
            "built registry with {} keys and {} sample groups",
            registry.len(),
            registry.samples.len()
        );
        Ok(registry)
    }

    /// The process-wide built-in registry, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in catalog is malformed.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            Self::builtin().unwrap_or_else(|e| panic!("built-in catalog is invalid: {}", e))
        })
    }

    /// Registers a definition under its own key.
    pub fn register(
        &mut self,
        definition: InstrumentDefinition,
    ) -> Result<Arc<InstrumentDefinition>, DefinitionError> {
        let key = definition.key().to_string();
        self.ensure_free(&key)?;
        let definition = Arc::new(definition);
        self.entries.push(RegistryEntry {
            key,
            definition: Arc::clone(&definition),
            replacement: false,
        });
        Ok(definition)
    }

    /// Binds `alias` to the definition registered under `target`.
    pub fn alias(
        &mut self,
        alias: impl Into<String>,
        target: &str,
        replacement: bool,
    ) -> Result<(), DefinitionError> {
        let alias = alias.into();
        if !is_valid_key(&alias) {
            return Err(DefinitionError::InvalidKey(alias));
        }
        self.ensure_free(&alias)?;
        let definition = self
            .get(target)
            .cloned()
            .ok_or_else(|| DefinitionError::UnknownAliasTarget {
                alias: alias.clone(),
                target: target.to_string(),
            })?;
        self.entries.push(RegistryEntry {
            key: alias,
            definition,
            replacement,
        });
        Ok(())
    }

    fn ensure_free(&self, key: &str) -> Result<(), DefinitionError> {
        if self.contains(key) {
            return Err(DefinitionError::DuplicateKey(key.to_string()));
        }
        Ok(())
    }

    /// Appends a sample group.
    pub fn add_sample_group(&mut self, group: SampleGroup) {
        self.samples.push(group);
    }

    /// Looks up a definition by key or alias.
    pub fn get(&self, key: &str) -> Option<&Arc<InstrumentDefinition>> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.definition)
    }

    /// Returns true if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All entries, aliases included, in registration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Iterates `(key, definition)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<InstrumentDefinition>)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.definition))
    }

    /// Definitions of `kind` under their own keys, aliases skipped.
    pub fn definitions(
        &self,
        kind: DefinitionKind,
    ) -> impl Iterator<Item = &Arc<InstrumentDefinition>> {
        self.entries
            .iter()
            .filter(move |e| !e.is_alias() && e.definition.kind() == kind)
            .map(|e| &e.definition)
    }

    /// Validates `args` for the definition registered under `key`.
    pub fn validate(&self, key: &str, args: impl Into<Args>) -> Result<(), ValidationError> {
        let def = self
            .get(key)
            .ok_or_else(|| ValidationError::UnknownDefinition(key.to_string()))?;
        def.validate(args)
    }

    /// Sample groups in catalog order.
    pub fn grouped_samples(&self) -> &[SampleGroup] {
        &self.samples
    }

    /// The sample group for a category key.
    pub fn sample_group(&self, key: &str) -> Option<&SampleGroup> {
        self.samples.iter().find(|g| g.key == key)
    }

    /// Every sample name across all groups, in catalog order.
    pub fn all_samples(&self) -> Vec<&str> {
        self.samples
            .iter()
            .flat_map(|g| g.samples.iter().map(String::as_str))
            .collect()
    }

    /// Number of registered keys, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
