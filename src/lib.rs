//! Bankroll - Vital Preset Bank Packager
//!
//! Bankroll takes a flat user library of Vital synth assets (presets, LFO
//! shapes, wavetables, skins) and re-packages the ones whose names carry a
//! `"{bank}{delimiter}{member}"` prefix into one compressed bank archive
//! per bank.
//!
//! # Architecture
//!
//! The pipeline is a single-pass batch transform:
//! - `asset`: uniform model for typed, named, renamable JSON documents
//! - `grouping`: pure classification of names against the bank delimiter
//! - `bank`: the per-bank aggregate and its ZIP archive serialization
//! - `discovery`/`config`/`pipeline`: the collaborators that feed the core
//!   and write its output

pub mod asset;
pub mod bank;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod grouping;
pub mod pipeline;

pub use error::{BankrollError, Result};
