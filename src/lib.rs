//! SoftHier Trace Visual
//!
//! Parsing and timeline visualization for SoftHier/GVSoC simulator
//! traces.
//!
//! This crate provides the core implementation for the
//! `trace-visual` CLI tool: a trace parser building a cluster/engine
//! event model, a timeline layout, an anchor-preserving zoom transform
//! and an SVG renderer with tooltip hit-testing.
//!
//! ## Getting Started
//!
//! ```bash
//! trace-visual render --input trace.log --output timeline.svg
//! trace-visual summary --input trace.log
//! ```

pub mod aggregator;
pub mod commands;
pub mod layout;
pub mod output;
pub mod parser;
pub mod render;
pub mod session;
pub mod utils;
pub mod zoom;
