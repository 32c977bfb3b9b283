pub mod list;
pub mod plan;
pub mod resolve;
pub mod split;

pub use list::run_list;
pub use plan::{ConnectionPlan, EngineError, ProductInfo, plan_connection};
pub use resolve::run_resolve;
pub use split::run_split;
