pub mod stage0_catalog;
pub mod stage1_aggregate;
pub mod stage2_report;

pub use stage0_catalog::*;
pub use stage1_aggregate::*;
pub use stage2_report::*;
