use crate::dialects::{ClassLoadingContext, DialectRegistry};
use crate::model::Config;
use crate::orchestrator::plan::{EngineError, ProductInfo, plan_connection};
use log::{debug, info, warn};

pub fn run_resolve(
    registry: &DialectRegistry,
    config: &Config,
    url: &str,
    product: Option<ProductInfo>,
) -> Result<(), EngineError> {
    info!("Resolving dialect for {}", registry.redact_url(url));

    let catalog = config.drivers.catalog();
    let any_driver = |_: &str| true;
    let classes: &dyn ClassLoadingContext = if catalog.is_empty() {
        warn!("No drivers listed under [drivers] available; driver availability not checked");
        &any_driver
    } else {
        debug!("Driver catalog: {:?}", catalog.iter().collect::<Vec<_>>());
        &catalog
    };

    let plan = plan_connection(registry, url, classes, product.as_ref())?;

    println!("🔎 Dialect Resolution");
    println!("====================");
    println!("URL:     {}", plan.redacted_url);
    if plan.url_dialect != plan.dialect {
        println!("Dialect: {} (URL suggested {})", plan.dialect, plan.url_dialect);
    } else {
        println!("Dialect: {}", plan.dialect);
    }
    if plan.used_backup_driver {
        println!("Driver:  {} (backup)", plan.driver);
    } else {
        println!("Driver:  {}", plan.driver);
    }
    if !plan.properties.is_empty() {
        println!("Connection properties:");
        for (key, value) in &plan.properties {
            println!("  {} = {}", key, value);
        }
    }

    Ok(())
}
