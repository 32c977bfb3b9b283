use crate::dialects::base::{
    ConnectionHandle, ConnectionProperties, ConnectionPropertyCustomizer, DialectConfig,
    DialectError, DriverResolver, ProductMatcher, UrlMatcher,
};
use crate::dialects::classpath::ClassLoadingContext;
use crate::dialects::defaults::{
    NoDefaultProperties, PrefixMatcher, ProductNameContains, StaticDriver, VersionBounded,
};
use crate::model::EngineConfig;
use crate::sql::{DialectDatabase, ScriptExecutor, StatementParser};
use regex::Regex;
use std::fmt;

const REDACTED: &str = "********";

/// Identity and capability hooks of one dialect. Immutable once built.
pub struct DialectDescriptor {
    config: DialectConfig,
    credentials: Option<Regex>,
    url_matcher: Box<dyn UrlMatcher>,
    product_matcher: Box<dyn ProductMatcher>,
    driver_resolver: Box<dyn DriverResolver>,
    property_customizer: Box<dyn ConnectionPropertyCustomizer>,
}

impl DialectDescriptor {
    /// Parse an embedded `dialect.toml` and start a builder with default hooks
    pub fn from_toml(source: &str) -> Result<DescriptorBuilder, DialectError> {
        let config: DialectConfig = toml::from_str(source).map_err(|e| DialectError::Descriptor {
            dialect: "<unparsed>".to_string(),
            message: e.to_string(),
        })?;
        Self::builder(config)
    }

    pub fn builder(config: DialectConfig) -> Result<DescriptorBuilder, DialectError> {
        let credentials = match &config.detection.credentials_pattern {
            Some(pattern) => Some(compile_credentials_pattern(&config.metadata.name, pattern)?),
            None => None,
        };

        Ok(DescriptorBuilder {
            url_matcher: Box::new(PrefixMatcher::new(config.detection.url_prefixes.clone())),
            product_matcher: Box::new(ProductNameContains::new(config.metadata.name.clone())),
            driver_resolver: Box::new(StaticDriver::new(
                config.drivers.primary.clone(),
                config.drivers.legacy.clone(),
            )),
            property_customizer: Box::new(NoDefaultProperties),
            credentials,
            config,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.metadata.name
    }

    pub fn priority(&self) -> i32 {
        self.config.metadata.priority
    }

    pub fn description(&self) -> &str {
        &self.config.metadata.description
    }

    pub fn url_prefixes(&self) -> &[String] {
        &self.config.detection.url_prefixes
    }

    /// Engine names this dialect serves, its own name first
    pub fn engines(&self) -> &[String] {
        &self.config.metadata.engines
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Text appended to driver load failures, e.g. where to download the connector
    pub fn driver_guidance(&self) -> Option<&str> {
        self.config.metadata.driver_guidance.as_deref()
    }

    pub fn claims_url(&self, url: &str) -> Result<bool, DialectError> {
        self.url_matcher.claims(url)
    }

    pub fn claims_product(
        &self,
        product_name: &str,
        product_version: &str,
        connection: &dyn ConnectionHandle,
    ) -> bool {
        self.product_matcher
            .claims(product_name, product_version, connection)
    }

    pub fn driver_class(&self, url: &str) -> String {
        self.driver_resolver.driver_class(url)
    }

    pub fn backup_driver_class(&self, url: &str, classes: &dyn ClassLoadingContext) -> Option<String> {
        self.driver_resolver.backup_driver_class(url, classes)
    }

    pub fn apply_connection_properties(
        &self,
        url: &str,
        props: &mut ConnectionProperties,
        classes: &dyn ClassLoadingContext,
    ) {
        self.property_customizer.apply(url, props, classes);
    }

    /// Password embedded in the URL, if the dialect's credentials pattern finds one
    pub fn extract_password<'u>(&self, url: &'u str) -> Option<&'u str> {
        self.credentials
            .as_ref()?
            .captures(url)?
            .get(1)
            .map(|m| m.as_str())
    }

    /// Copy of `url` with the embedded password masked
    pub fn redact_url(&self, url: &str) -> String {
        let password = self
            .credentials
            .as_ref()
            .and_then(|re| re.captures(url))
            .and_then(|caps| caps.get(1));

        match password {
            Some(m) if !m.as_str().is_empty() => {
                format!("{}{}{}", &url[..m.start()], REDACTED, &url[m.end()..])
            }
            _ => url.to_string(),
        }
    }

    pub fn create_parser(&self) -> StatementParser {
        StatementParser::new(
            self.config.sql.statement_delimiter.clone(),
            self.config.sql.block_terminator.clone(),
        )
    }

    pub fn create_script_executor(&self, settings: &EngineConfig) -> ScriptExecutor {
        ScriptExecutor::new(self.name(), self.create_parser(), settings)
    }

    pub fn create_database(&self, settings: &EngineConfig) -> DialectDatabase {
        DialectDatabase::new(&self.config, settings)
    }
}

impl fmt::Debug for DialectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectDescriptor")
            .field("name", &self.name())
            .field("priority", &self.priority())
            .field("url_prefixes", &self.url_prefixes())
            .finish_non_exhaustive()
    }
}

fn compile_credentials_pattern(dialect: &str, pattern: &str) -> Result<Regex, DialectError> {
    let regex = Regex::new(pattern).map_err(|e| DialectError::Descriptor {
        dialect: dialect.to_string(),
        message: format!("invalid credentials pattern: {}", e),
    })?;

    // captures_len counts the implicit whole-match group
    if regex.captures_len() != 2 {
        return Err(DialectError::Descriptor {
            dialect: dialect.to_string(),
            message: format!(
                "credentials pattern must have exactly one capture group, found {}",
                regex.captures_len() - 1
            ),
        });
    }

    Ok(regex)
}

/// Assembles a descriptor, replacing only the hooks a dialect overrides
pub struct DescriptorBuilder {
    config: DialectConfig,
    credentials: Option<Regex>,
    url_matcher: Box<dyn UrlMatcher>,
    product_matcher: Box<dyn ProductMatcher>,
    driver_resolver: Box<dyn DriverResolver>,
    property_customizer: Box<dyn ConnectionPropertyCustomizer>,
}

impl DescriptorBuilder {
    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    pub fn url_matcher(mut self, matcher: impl UrlMatcher + 'static) -> Self {
        self.url_matcher = Box::new(matcher);
        self
    }

    pub fn product_matcher(mut self, matcher: impl ProductMatcher + 'static) -> Self {
        self.product_matcher = Box::new(matcher);
        self
    }

    pub fn driver_resolver(mut self, resolver: impl DriverResolver + 'static) -> Self {
        self.driver_resolver = Box::new(resolver);
        self
    }

    pub fn property_customizer(mut self, customizer: impl ConnectionPropertyCustomizer + 'static) -> Self {
        self.property_customizer = Box::new(customizer);
        self
    }

    pub fn build(self) -> DialectDescriptor {
        let metadata = &self.config.metadata;
        let product_matcher: Box<dyn ProductMatcher> = if metadata.min_version.is_some() || metadata.max_version.is_some() {
            Box::new(VersionBounded::new(
                self.product_matcher,
                metadata.min_version.clone(),
                metadata.max_version.clone(),
            ))
        } else {
            self.product_matcher
        };

        DialectDescriptor {
            config: self.config,
            credentials: self.credentials,
            url_matcher: self.url_matcher,
            product_matcher,
            driver_resolver: self.driver_resolver,
            property_customizer: self.property_customizer,
        }
    }
}
