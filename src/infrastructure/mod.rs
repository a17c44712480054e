pub mod gemini;
pub mod observability;
pub mod persistence;
