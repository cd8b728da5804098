//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules and ports to fulfill user stories.

pub mod ai;
pub mod traits;

pub use ai::AiUseCases;
pub use traits::TraitUseCases;
