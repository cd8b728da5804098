//! 0N1 Soul Generator Engine library.
//!
//! Server-side prompt assembly, suggestion generation and fallback for the
//! character lore questionnaire.
//!
//! ## Structure
//!
//! - `entities/` - The lore corpus
//! - `use_cases/` - Suggestion, chat and trait lookup orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

pub use app::App;
