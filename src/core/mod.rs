pub mod clock;
pub mod config;
pub mod model;
pub mod paths;
pub mod store;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use store::ReportStore;
