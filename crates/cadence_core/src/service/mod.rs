//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and reconciliation into the state-provider
//!   API the UI layer consumes.
//! - Keep callers decoupled from storage details.

pub mod todo_service;
