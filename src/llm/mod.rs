// ABOUTME: LLM provider abstraction layer for pluggable AI model integration
// ABOUTME: Defines the one-shot text generation contract implemented by Gemini
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Text Generation Provider Interface
//!
//! This module defines the contract a generative-text backend must implement
//! to feed the recommendation generator. The backend is best-effort by
//! design: absence of credentials is a valid configuration, and every
//! call-level failure is absorbed upstream by the curated fallback path.
//!
//! ## Example
//!
//! ```rust,no_run
//! use flexfit_server::llm::TextGenerator;
//!
//! async fn example(provider: &dyn TextGenerator) {
//!     let response = provider.complete("List 8-10 exercise names.").await;
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use crate::errors::AppResult;
use async_trait::async_trait;

/// One-shot text completion backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider identifier for logging
    fn name(&self) -> &'static str;

    /// Complete a single prompt into raw text
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails; callers treat any error
    /// as the expected degraded path, never as a request failure.
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}
