//! Core library for the aidash service dashboard.
//!
//! This crate provides:
//! - Redacted, grouped presentation of provider configuration
//! - The service tester trait and a registry of testers by provider type
//! - Built-in HTTP testers for the known providers
//! - Dispatch of on-demand service tests
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────────────────┐
//! │   ConfigSource   │─────▶│            Dashboard             │
//! │ (file / static)  │      │  groups()        run_test(type)  │
//! └──────────────────┘      └────────┬───────────────┬─────────┘
//!                                    │               │
//!                                    ▼               ▼
//!                           ┌──────────────┐  ┌──────────────┐
//!                           │ build_groups │  │   dispatch   │
//!                           └──────┬───────┘  └──────┬───────┘
//!                                  └───────┬─────────┘
//!                                          ▼
//!                                ┌──────────────────┐
//!                                │  TesterRegistry  │
//!                                │ type -> tester   │
//!                                └──────────────────┘
//! ```

mod error;

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod dispatch;
pub mod names;
pub mod presentation;
pub mod redact;
pub mod testers;

pub use config::{ConfigSource, FileConfigSource, StaticConfigSource};
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use presentation::{Group, ServiceCard, build_groups};
pub use testers::{ServiceTester, TestResult, TesterRegistry};
