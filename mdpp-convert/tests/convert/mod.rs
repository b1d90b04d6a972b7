//! Conversion tests
//!
//! End-to-end renders of whole trees, table source handling, CommonMark
//! compatibility of the output and property checks.

mod commonmark;
mod documents;
mod properties;
mod scenarios;
mod tables;
