//! Parameter type registration and lookup.
//! The registry owns every known [`ParameterType`], enforces unique names and
//! exposes the candidates consulted by the expression generator.

use hashbrown::HashMap;
use tracing::debug;

use crate::builtins::{NumberLocale, builtin_parameter_types};
use crate::errors::RegistryError;
use crate::parameter_type::ParameterType;

/// In-memory collection of parameter types keyed by name.
///
/// Types keep their registration order. Anonymous types are accepted, never
/// collide with each other and cannot be looked up by name.
///
/// Registration needs `&mut self`; share a populated registry behind an
/// [`std::sync::RwLock`] or by reference once registration has finished.
///
/// [`ParameterTypeRegistry::new`] starts empty, while [`Default`] holds the
/// built-in types with English number separators.
///
/// # Examples
/// ```
/// use cukegen::{ParameterType, ParameterTypeRegistry};
/// let mut registry = ParameterTypeRegistry::new();
/// let currency = ParameterType::builder()
///     .name("currency")
///     .pattern("[A-Z]{3}")
///     .build()
///     .expect("valid parameter type");
/// registry.register(currency).expect("name is free");
/// assert!(registry.lookup_by_type_name("currency").is_some());
/// ```
#[derive(Debug)]
pub struct ParameterTypeRegistry {
    types: Vec<ParameterType>,
    by_name: HashMap<String, usize>,
}

impl Default for ParameterTypeRegistry {
    fn default() -> Self {
        Self::with_builtins(&NumberLocale::english())
    }
}

impl ParameterTypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in types for `locale`.
    #[must_use]
    pub fn with_builtins(locale: &NumberLocale) -> Self {
        let mut registry = Self::new();
        for parameter_type in builtin_parameter_types(locale) {
            registry.insert(parameter_type);
        }
        registry
    }

    /// Register a parameter type.
    ///
    /// # Errors
    /// Returns [`RegistryError::NameCollision`] when a type with the same name
    /// is already registered; the existing entry is left untouched.
    pub fn register(&mut self, parameter_type: ParameterType) -> Result<(), RegistryError> {
        if let Some(name) = parameter_type.name() {
            if self.by_name.contains_key(name) {
                return Err(RegistryError::NameCollision(name.to_string()));
            }
        }
        debug!(
            name = parameter_type.name().unwrap_or_default(),
            builtin = parameter_type.is_builtin(),
            "registered parameter type"
        );
        self.insert(parameter_type);
        Ok(())
    }

    /// Look up a named parameter type.
    #[must_use]
    pub fn lookup_by_type_name(&self, name: &str) -> Option<&ParameterType> {
        self.by_name
            .get(name)
            .and_then(|&index| self.types.get(index))
    }

    /// Parameter types taking part in expression generation, in registration
    /// order.
    pub fn parameter_types_eligible_for_snippets(
        &self,
    ) -> impl Iterator<Item = &ParameterType> + '_ {
        self.types.iter().filter(|ty| ty.use_for_snippets())
    }

    /// Every registered parameter type in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ParameterType> + '_ {
        self.types.iter()
    }

    /// Number of registered parameter types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no parameter type has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn insert(&mut self, parameter_type: ParameterType) {
        if let Some(name) = parameter_type.name() {
            self.by_name.insert(name.to_string(), self.types.len());
        }
        self.types.push(parameter_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter_type(name: Option<&str>, pattern: &str, snippets: bool) -> ParameterType {
        let mut builder = ParameterType::builder()
            .pattern(pattern)
            .use_for_snippets(snippets);
        if let Some(name) = name {
            builder = builder.name(name);
        }
        match builder.build() {
            Ok(ty) => ty,
            Err(err) => panic!("parameter type should build: {err}"),
        }
    }

    fn register(registry: &mut ParameterTypeRegistry, ty: ParameterType) {
        if let Err(err) = registry.register(ty) {
            panic!("registration should succeed: {err}");
        }
    }

    #[test]
    fn rejects_duplicate_names_and_keeps_first() {
        let mut registry = ParameterTypeRegistry::new();
        register(&mut registry, parameter_type(Some("colour"), "red", true));
        let err = registry.register(parameter_type(Some("colour"), "blue", false));
        assert_eq!(err, Err(RegistryError::NameCollision("colour".into())));

        assert_eq!(registry.len(), 1);
        let kept = registry.lookup_by_type_name("colour");
        assert_eq!(
            kept.map(|ty| ty.regexp_sources().collect::<Vec<_>>()),
            Some(vec!["red"])
        );
    }

    #[test]
    fn anonymous_types_do_not_collide() {
        let mut registry = ParameterTypeRegistry::new();
        register(&mut registry, parameter_type(None, "a", true));
        register(&mut registry, parameter_type(None, "b", true));
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup_by_type_name("").is_none());
    }

    #[test]
    fn eligible_types_keep_registration_order() {
        let mut registry = ParameterTypeRegistry::new();
        register(&mut registry, parameter_type(Some("zeta"), "z", true));
        register(&mut registry, parameter_type(Some("hidden"), "h", false));
        register(&mut registry, parameter_type(Some("alpha"), "a", true));

        let names: Vec<_> = registry
            .parameter_types_eligible_for_snippets()
            .filter_map(ParameterType::name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn lookup_reports_missing_names() {
        let registry = ParameterTypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup_by_type_name("int").is_none());
    }

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = ParameterTypeRegistry::with_builtins(&NumberLocale::english());
        let names: Vec<_> = registry.iter().map(|ty| ty.name().unwrap_or("")).collect();
        assert_eq!(names, vec!["int", "float", "double", "word", "string", ""]);
        assert!(registry.iter().all(ParameterType::is_builtin));
    }

    #[test]
    fn default_registry_holds_english_builtins() {
        let registry = ParameterTypeRegistry::default();
        assert!(registry.lookup_by_type_name("int").is_some());
        assert_eq!(
            registry.len(),
            ParameterTypeRegistry::with_builtins(&NumberLocale::english()).len()
        );
        assert!(ParameterTypeRegistry::new().is_empty());
    }

    #[test]
    fn builtin_names_collide_with_user_types() {
        let mut registry = ParameterTypeRegistry::with_builtins(&NumberLocale::english());
        let result = registry.register(parameter_type(Some("int"), r"\d+", true));
        assert_eq!(result, Err(RegistryError::NameCollision("int".into())));
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParameterTypeRegistry>();
    }
}
