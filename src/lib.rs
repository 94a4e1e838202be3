//! Campaign Console
//!
//! Administrative web frontend for an email-marketing backend.
//!
//! This library provides:
//! - Bearer-token session storage and the route guard built on it
//! - A typed client for the campaign backend's REST API
//! - Page workflows for contact upload, campaign creation and broadcast
//! - Web UI (Dioxus + Pico CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app
pub mod app;

pub mod api;
pub mod config;
pub mod guard;
pub mod session;
pub mod workflow;
