//! Shared hook implementations that dialects compose instead of re-implementing.

use crate::dialects::base::{
    ConnectionHandle, ConnectionProperties, ConnectionPropertyCustomizer, DialectError,
    DriverResolver, ProductMatcher, UrlMatcher,
};
use crate::dialects::classpath::ClassLoadingContext;
use log::debug;
use std::cmp::Ordering;

/// Fallback behaviour used once a dialect has nothing specific left to offer
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl DefaultStrategy {
    /// No generic backup driver exists; the engine reports the load failure.
    pub fn backup_driver_class(&self, _url: &str, _classes: &dyn ClassLoadingContext) -> Option<String> {
        None
    }
}

/// Claims URLs starting with any of the configured prefixes
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    prefixes: Vec<String>,
}

impl PrefixMatcher {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn matched_prefix(&self, url: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| url.starts_with(prefix))
    }
}

impl UrlMatcher for PrefixMatcher {
    fn claims(&self, url: &str) -> Result<bool, DialectError> {
        Ok(self.matched_prefix(url).is_some())
    }
}

/// Claims products whose reported name contains the dialect name.
///
/// Vendors often report composite names such as `Google SQL Service/MySQL`.
#[derive(Debug, Clone)]
pub struct ProductNameContains {
    name: String,
}

impl ProductNameContains {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ProductMatcher for ProductNameContains {
    fn claims(&self, product_name: &str, _version: &str, _connection: &dyn ConnectionHandle) -> bool {
        product_name.contains(&self.name)
    }
}

/// Narrows another product matcher to an inclusive version range
pub struct VersionBounded {
    inner: Box<dyn ProductMatcher>,
    min_version: Option<String>,
    max_version: Option<String>,
}

impl VersionBounded {
    pub fn new(
        inner: Box<dyn ProductMatcher>,
        min_version: Option<String>,
        max_version: Option<String>,
    ) -> Self {
        Self {
            inner,
            min_version,
            max_version,
        }
    }
}

impl ProductMatcher for VersionBounded {
    fn claims(&self, product_name: &str, version: &str, connection: &dyn ConnectionHandle) -> bool {
        if !self.inner.claims(product_name, version, connection) {
            return false;
        }
        if let Some(min) = &self.min_version {
            if compare_versions(version, min) == Ordering::Less {
                debug!("{} {} is older than supported minimum {}", product_name, version, min);
                return false;
            }
        }
        if let Some(max) = &self.max_version {
            if compare_versions(version, max) == Ordering::Greater {
                debug!("{} {} is newer than supported maximum {}", product_name, version, max);
                return false;
            }
        }
        true
    }
}

/// Compares the leading dotted numeric parts of two version strings.
/// `8.0.32-log` compares as `8.0.32`; missing parts count as zero.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let l = numeric_parts(left);
    let r = numeric_parts(right);
    let len = l.len().max(r.len());
    for i in 0..len {
        let a = l.get(i).copied().unwrap_or(0);
        let b = r.get(i).copied().unwrap_or(0);
        match a.cmp(&b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn numeric_parts(version: &str) -> Vec<u64> {
    let start = version.find(|c: char| c.is_ascii_digit()).unwrap_or(version.len());
    version[start..]
        .split('.')
        .map_while(|part| {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
        .collect()
}

/// One canonical driver plus an optional legacy identifier
#[derive(Debug, Clone)]
pub struct StaticDriver {
    primary: String,
    legacy: Option<String>,
}

impl StaticDriver {
    pub fn new(primary: impl Into<String>, legacy: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            legacy,
        }
    }
}

impl DriverResolver for StaticDriver {
    fn driver_class(&self, _url: &str) -> String {
        self.primary.clone()
    }

    fn backup_driver_class(&self, url: &str, classes: &dyn ClassLoadingContext) -> Option<String> {
        legacy_or_default(self.legacy.as_deref(), url, classes)
    }
}

/// Legacy driver if it is loadable, otherwise whatever the default strategy offers
pub fn legacy_or_default(
    legacy: Option<&str>,
    url: &str,
    classes: &dyn ClassLoadingContext,
) -> Option<String> {
    match legacy {
        Some(class) if classes.is_present(class) => Some(class.to_string()),
        _ => DefaultStrategy.backup_driver_class(url, classes),
    }
}

/// Leaves the connection properties untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaultProperties;

impl ConnectionPropertyCustomizer for NoDefaultProperties {
    fn apply(&self, _url: &str, _props: &mut ConnectionProperties, _classes: &dyn ClassLoadingContext) {}
}
