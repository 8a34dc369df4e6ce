pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{AdvisorError, Result};
pub use logic::ExpertEngine;
pub use models::{AnalysisInput, AnalysisResult, ProfileOverrides};
