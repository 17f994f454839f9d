//! Fixed-width pagination control.
//!
//! Computes which page numbers and ellipses a pagination control shows for a
//! fixed button budget, reads the current page from a query string, builds
//! links to other pages, and renders the control as HTML. A small preview
//! server is included.

pub mod components;
pub mod config;
pub mod pagination;
pub mod web;
