use crate::dialects::base::{ConnectionHandle, DialectError};
use crate::dialects::descriptor::DialectDescriptor;
use log::{debug, warn};
use std::collections::HashMap;

/// Central registry for all available database dialects.
///
/// Descriptors are kept in resolution order: priority descending, with
/// registration order breaking ties. That tie-break is a historical default
/// rather than a designed rule. Once constructed the registry is never
/// mutated, so a shared reference can be used from any thread.
#[derive(Debug)]
pub struct DialectRegistry {
    dialects: Vec<DialectDescriptor>,
    aliases: HashMap<String, usize>, // lowercase name or engine -> index
}

impl DialectRegistry {
    /// Build a registry from an explicit list of descriptors
    pub fn new(descriptors: Vec<DialectDescriptor>) -> Result<Self, DialectError> {
        let mut dialects = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if dialects
                .iter()
                .any(|d: &DialectDescriptor| d.name().eq_ignore_ascii_case(descriptor.name()))
            {
                return Err(DialectError::DuplicateDialect(descriptor.name().to_string()));
            }
            debug!(
                "Registering dialect: {} (priority {})",
                descriptor.name(),
                descriptor.priority()
            );
            dialects.push(descriptor);
        }

        // Stable sort keeps registration order among equal priorities
        dialects.sort_by(|a, b| b.priority().cmp(&a.priority()));

        let mut aliases = HashMap::new();
        for (index, dialect) in dialects.iter().enumerate() {
            for engine in dialect.engines() {
                aliases.entry(engine.to_lowercase()).or_insert(index);
            }
        }
        // Dialect names always win over another dialect's engine alias
        for (index, dialect) in dialects.iter().enumerate() {
            aliases.insert(dialect.name().to_lowercase(), index);
        }

        Ok(Self { dialects, aliases })
    }

    /// First dialect, in resolution order, whose URL matcher claims `url`.
    ///
    /// A matcher refusing the URL aborts the scan with its error.
    pub fn resolve_by_url(&self, url: &str) -> Result<&DialectDescriptor, DialectError> {
        for dialect in &self.dialects {
            if dialect.claims_url(url)? {
                debug!("Dialect '{}' handles URL {}", dialect.name(), dialect.redact_url(url));
                return Ok(dialect);
            }
        }

        let redacted = self.redact_url(url);
        warn!("No dialect detected for URL {}", redacted);
        Err(DialectError::NoDialectFound(redacted))
    }

    /// First dialect, in resolution order, claiming the live connection's product
    pub fn resolve_by_product(
        &self,
        product_name: &str,
        product_version: &str,
        connection: &dyn ConnectionHandle,
    ) -> Result<&DialectDescriptor, DialectError> {
        for dialect in &self.dialects {
            if dialect.claims_product(product_name, product_version, connection) {
                debug!(
                    "Dialect '{}' handles product {} {}",
                    dialect.name(),
                    product_name,
                    product_version
                );
                return Ok(dialect);
            }
        }

        warn!("No dialect detected for product {} {}", product_name, product_version);
        Err(DialectError::NoDialectFound(format!(
            "{} {}",
            product_name, product_version
        )))
    }

    /// Get a dialect by name or engine alias, ignoring case
    pub fn get(&self, name: &str) -> Option<&DialectDescriptor> {
        self.aliases
            .get(&name.to_lowercase())
            .map(|&index| &self.dialects[index])
    }

    /// Mask the password in `url` using the claiming dialect's pattern.
    /// Falls back to the URL as given when no dialect accepts it.
    pub fn redact_url(&self, url: &str) -> String {
        self.dialects
            .iter()
            .find(|d| matches!(d.claims_url(url), Ok(true)))
            .map(|d| d.redact_url(url))
            .unwrap_or_else(|| url.to_string())
    }

    /// Dialects in resolution order
    pub fn iter(&self) -> impl Iterator<Item = &DialectDescriptor> {
        self.dialects.iter()
    }

    /// List all registered dialect names in resolution order
    pub fn names(&self) -> Vec<&str> {
        self.dialects.iter().map(|d| d.name()).collect()
    }

    /// Get all aliases for a dialect
    pub fn get_aliases(&self, dialect_name: &str) -> Vec<String> {
        let Some(&target) = self.aliases.get(&dialect_name.to_lowercase()) else {
            return Vec::new();
        };
        let mut aliases: Vec<String> = self
            .aliases
            .iter()
            .filter(|(alias, index)| **index == target && **alias != dialect_name.to_lowercase())
            .map(|(alias, _)| alias.clone())
            .collect();
        aliases.sort();
        aliases
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}
