//! Route inference configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::service::REST_SERVICE_BASE;

/// How service scanning derives routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Property that gives a request type a `{id}` detail route
    /// Env: RESTROUTE_ID_FIELD
    /// Default: "id"
    pub id_field: String,

    /// Fail the scan on a service without a request type (false: skip with a warning)
    /// Env: RESTROUTE_STRICT
    /// Default: true
    pub strict: bool,

    /// Name of the open generic scannable services derive from
    /// Env: RESTROUTE_SERVICE_BASE
    /// Default: "RestServiceBase"
    pub rest_service_base: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            strict: true,
            rest_service_base: REST_SERVICE_BASE.to_string(),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

impl InferenceConfig {
    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(id_field) = lookup("RESTROUTE_ID_FIELD") {
            self.id_field = id_field;
        }

        if let Some(strict) = lookup("RESTROUTE_STRICT") {
            match strict.to_ascii_lowercase().as_str() {
                "1" | "true" => self.strict = true,
                "0" | "false" => self.strict = false,
                other => log::warn!("Ignoring RESTROUTE_STRICT={}", other),
            }
        }

        if let Some(base) = lookup("RESTROUTE_SERVICE_BASE") {
            self.rest_service_base = base;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.id_field) {
            bail!("inference.id_field must be an identifier, got {:?}", self.id_field);
        }
        if self.rest_service_base.trim().is_empty() {
            bail!("inference.rest_service_base cannot be empty");
        }
        Ok(())
    }
}
