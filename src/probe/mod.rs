//! Probe module for walking redirect chains
//!
//! This module contains everything that touches the network or raw HTML:
//! - Single-request HTTP probing with redirects disabled
//! - Manual redirect-chain walking with a hop cap
//! - Canonical tag and internal link extraction

mod fetcher;
mod parser;
#[cfg(test)]
pub(crate) mod scripted;
mod walker;

pub use fetcher::{build_http_client, HttpProbe, Probe, ProbeResult};
pub use parser::{extract_canonical, find_canonical, sample_internal_links};
pub use walker::{resolve_location, walk_redirects, RedirectChainResult, RedirectStep};
