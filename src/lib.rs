#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! fielddex: an offline Pokédex for the terminal.
//!
//! Entries live in a single JSONL file under the user's data directory and
//! can be exported to CSV. The [`tui`] module holds the interactive
//! application; [`model`] and [`storage`] are usable on their own.

pub mod model;
pub mod storage;
pub mod tui;
