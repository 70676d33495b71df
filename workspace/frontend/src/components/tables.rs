pub mod actions;
pub mod evaluation;
pub mod stats;

pub use actions::ActionTable;
pub use evaluation::EvalTable;
pub use stats::StatsTable;

/// Header cell classes shared by the dashboard tables.
pub(crate) const TH_LEFT: &str = "px-6 py-3 text-left text-sm font-semibold uppercase";
pub(crate) const TH_RIGHT: &str = "px-6 py-3 text-right text-sm font-semibold uppercase";
pub(crate) const TD_LEFT: &str = "px-6 py-4 text-sm";
pub(crate) const TD_SYMBOL: &str = "px-6 py-4 text-sm font-medium";
pub(crate) const TD_RIGHT: &str = "px-6 py-4 text-sm text-right";
