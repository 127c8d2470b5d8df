//! Type metadata consumed by the route scanner
//!
//! A [`TypeInfo`] describes a type the way a route scanner needs to see it:
//! its simple name, the base chain it extends, the generic arguments of a
//! constructed generic type, which hook methods it declares itself (as opposed
//! to inheriting them), and the properties it exposes.
//!
//! Typed services get their `TypeInfo` from [`RestService::type_info`]
//! (`crate::service::RestService`). Hierarchies that do not map onto a single
//! trait impl, for instance an abstract intermediate service shared by several
//! concrete ones, can be described by hand with the builder methods.
//!
//! ```rust
//! use restroute_core::service::TypeInfo;
//!
//! let request = TypeInfo::new("Order").with_property("id");
//! let base = TypeInfo::generic("RestServiceBase", vec![request]);
//! let audited = TypeInfo::new("AuditedService").extends(base).as_abstract();
//! let service = TypeInfo::new("Orders").extends(audited).declares("on_get");
//!
//! assert!(service.is_subclass_of_raw_generic("RestServiceBase"));
//! ```

/// Scanner-facing description of a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    name: String,
    generic_definition: Option<String>,
    generic_arguments: Vec<TypeInfo>,
    base: Option<Box<TypeInfo>>,
    is_abstract: bool,
    is_exported: bool,
    declared_methods: Vec<String>,
    properties: Vec<String>,
}

impl TypeInfo {
    /// A concrete, exported, non-generic type with no base
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generic_definition: None,
            generic_arguments: Vec::new(),
            base: None,
            is_abstract: false,
            is_exported: true,
            declared_methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// A constructed generic type such as `RestServiceBase<Order>`
    pub fn generic(definition: impl Into<String>, arguments: Vec<TypeInfo>) -> Self {
        let definition = definition.into();
        let args: Vec<&str> = arguments.iter().map(|a| a.name()).collect();
        let mut info = Self::new(format!("{}<{}>", definition, args.join(", ")));
        info.generic_definition = Some(definition);
        info.generic_arguments = arguments;
        info
    }

    pub fn extends(mut self, base: TypeInfo) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark the type as not exported from its module
    pub fn private(mut self) -> Self {
        self.is_exported = false;
        self
    }

    /// Record a method declared directly on this type
    pub fn declares(mut self, method: impl Into<String>) -> Self {
        self.declared_methods.push(method.into());
        self
    }

    pub fn declares_all<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_methods.extend(methods.into_iter().map(Into::into));
        self
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.properties.push(property.into());
        self
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.extend(properties.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> Option<&TypeInfo> {
        self.base.as_deref()
    }

    pub fn is_generic(&self) -> bool {
        self.generic_definition.is_some()
    }

    /// Name of the open generic definition, or the plain name for non-generic types
    pub fn generic_type_definition(&self) -> &str {
        self.generic_definition.as_deref().unwrap_or(&self.name)
    }

    pub fn generic_arguments(&self) -> &[TypeInfo] {
        &self.generic_arguments
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_exported(&self) -> bool {
        self.is_exported
    }

    /// True only if `method` is declared on this type, not on one of its bases
    pub fn declares_method(&self, method: &str) -> bool {
        self.declared_methods.iter().any(|m| m == method)
    }

    /// Methods declared directly on this type
    pub fn declared_methods(&self) -> &[String] {
        &self.declared_methods
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Base chain from the direct base upwards
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeInfo> {
        std::iter::successors(self.base(), |t| t.base())
    }

    /// Nearest ancestor that is a constructed generic type
    pub fn first_generic_base(&self) -> Option<&TypeInfo> {
        self.ancestors().find(|t| t.is_generic())
    }

    /// Whether this type, or any type in its base chain, is an instance of the
    /// open generic `generic` (or is the plain type of that name)
    pub fn is_subclass_of_raw_generic(&self, generic: &str) -> bool {
        std::iter::once(self)
            .chain(self.ancestors())
            .any(|t| t.generic_type_definition() == generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest_base(request: &str) -> TypeInfo {
        TypeInfo::generic("RestServiceBase", vec![TypeInfo::new(request)])
    }

    #[test]
    fn test_generic_naming() {
        let base = rest_base("Order");
        assert_eq!(base.name(), "RestServiceBase<Order>");
        assert_eq!(base.generic_type_definition(), "RestServiceBase");
        assert_eq!(base.generic_arguments()[0].name(), "Order");
        assert!(base.is_generic());
    }

    #[test]
    fn test_subclass_across_non_generic_intermediates() {
        let service = TypeInfo::new("Orders").extends(
            TypeInfo::new("Audited")
                .as_abstract()
                .extends(TypeInfo::new("Logged").as_abstract().extends(rest_base("Order"))),
        );

        assert!(service.is_subclass_of_raw_generic("RestServiceBase"));
        assert_eq!(
            service.first_generic_base().map(TypeInfo::name),
            Some("RestServiceBase<Order>")
        );
        assert_eq!(service.ancestors().count(), 3);
    }

    #[test]
    fn test_subclass_through_generic_intermediate() {
        let middle = TypeInfo::generic("CrudService", vec![TypeInfo::new("Order")])
            .extends(rest_base("Order"));
        let service = TypeInfo::new("Orders").extends(middle);

        assert!(service.is_subclass_of_raw_generic("RestServiceBase"));
        assert!(service.is_subclass_of_raw_generic("CrudService"));
        assert_eq!(service.first_generic_base().unwrap().generic_type_definition(), "CrudService");
    }

    #[test]
    fn test_unrelated_types_are_not_subclasses() {
        let plain = TypeInfo::new("Clock").extends(TypeInfo::new("Component"));
        assert!(!plain.is_subclass_of_raw_generic("RestServiceBase"));

        let other_generic =
            TypeInfo::new("Cache")
                .extends(TypeInfo::generic("Store", vec![TypeInfo::new("Order")]));
        assert!(!other_generic.is_subclass_of_raw_generic("RestServiceBase"));
    }

    #[test]
    fn test_type_matches_itself() {
        assert!(rest_base("Order").is_subclass_of_raw_generic("RestServiceBase"));
        assert!(TypeInfo::new("Clock").is_subclass_of_raw_generic("Clock"));
    }

    #[test]
    fn test_declared_methods_are_not_inherited() {
        let base = TypeInfo::new("Base").declares("on_get");
        let child = TypeInfo::new("Child").extends(base).declares("on_post");

        assert!(child.declares_method("on_post"));
        assert!(!child.declares_method("on_get"));
    }
}
