//! Output formatting for CLI results.

pub mod diagnostic;
pub mod table;

pub use diagnostic::CorpusDiagnostic;
