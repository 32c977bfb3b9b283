use crate::dialects::DialectRegistry;
use log::info;

pub fn run_list(registry: &DialectRegistry) {
    info!("Listing {} registered dialects", registry.len());

    println!("📚 Dialects (resolution order)");
    println!("=============================");
    for dialect in registry.iter() {
        println!("{} (priority {})", dialect.name(), dialect.priority());
        println!("  {}", dialect.description());
        println!("  URL prefixes: {}", dialect.url_prefixes().join(", "));
        let aliases = registry.get_aliases(dialect.name());
        if !aliases.is_empty() {
            println!("  Aliases: {}", aliases.join(", "));
        }
    }
}
