//! Version resolution layer for Percona XtraDB Cluster deployments
//!
//! This module queries the remote version service for the compatibility matrix
//! of a cluster and reduces it to exactly one image per tracked component.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ VersionMeta │────▶│   Request   │────▶│   Client    │
//! │  (hints)    │     │ (url+query) │     │  (reqwest)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │ DepVersion  │◀────│   Matrix    │
//!                     │  (result)   │     │ (select 1)  │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`client`]: reqwest-backed [`service::VersionService`] implementation
//! - [`component`]: The five tracked components
//! - [`error`]: Error type for resolution failures
//! - [`matrix`]: Single-match selection over the response matrix
//! - [`request`]: Request URL construction
//! - [`service`]: Version service trait
//! - [`types`]: Query, wire and result types

pub mod client;
pub mod component;
pub mod error;
pub mod matrix;
pub mod request;
pub mod service;
pub mod types;
