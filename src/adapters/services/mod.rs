//! External service adapters
//!
//! This module contains adapters for external APIs including:
//! - LLM (Large Language Model) services

pub mod llm;
