#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for sprint-report
//!
//! This library holds all functionality of the sprint-report tool, which reads a
//! CSV export from an issue tracker and summarizes the story points of a sprint.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`config`]: Tunable column names and dialect detection settings
//! - [`input`]: Opening the export, dialect detection and table parsing
//! - [`sprint`]: Schema resolution, point coercion and aggregation
//! - [`reports`]: Report generation

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod input;

#[doc(hidden)]
pub mod reports;

#[doc(hidden)]
pub mod sprint;

pub use crate::commands::{Host, run};
