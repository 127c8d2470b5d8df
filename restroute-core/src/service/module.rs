//! Service modules: the unit a route scan walks

use super::{RestService, TypeInfo};

/// A named group of service types
///
/// Plays the part an assembly or package plays in reflective frameworks: a
/// list of types a scan enumerates. Typed services register themselves with
/// [`with_service`](ServiceModule::with_service); hand-described hierarchies go
/// through [`with_type`](ServiceModule::with_type).
#[derive(Debug, Clone, Default)]
pub struct ServiceModule {
    name: String,
    types: Vec<TypeInfo>,
}

impl ServiceModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), types: Vec::new() }
    }

    pub fn with_service<S: RestService>(mut self) -> Self {
        self.types.push(S::type_info());
        self
    }

    pub fn with_type(mut self, info: TypeInfo) -> Self {
        self.types.push(info);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All types in registration order
    pub fn types(&self) -> &[TypeInfo] {
        &self.types
    }

    /// Types visible to a scan: exported and not abstract
    pub fn exported_types(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.iter().filter(|t| t.is_exported() && !t.is_abstract())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_types_skip_abstract_and_private() {
        let module = ServiceModule::new("billing")
            .with_type(TypeInfo::new("Invoices"))
            .with_type(TypeInfo::new("BaseBilling").as_abstract())
            .with_type(TypeInfo::new("InternalLedger").private());

        let visible: Vec<_> = module.exported_types().map(TypeInfo::name).collect();
        assert_eq!(visible, ["Invoices"]);
        assert_eq!(module.len(), 3);
        assert_eq!(module.name(), "billing");
    }
}
