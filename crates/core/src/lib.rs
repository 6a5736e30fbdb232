#![forbid(unsafe_code)]

pub mod aggregator;
pub mod analyzer;
pub mod error;
pub mod model;
pub mod question_bank;
pub mod time;

pub use aggregator::{ReportError, aggregate};
pub use analyzer::analyze;
pub use error::Error;
pub use question_bank::{QUESTION_COUNT, RoleTrack, generate};
pub use time::Clock;
