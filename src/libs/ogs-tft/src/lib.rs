//! NextGCore Bearer TFT Translation Library
//!
//! This crate translates the Bearer TFT carried in GTPv2-C bearer management
//! messages into the packet filter list consumed by session and policy logic.
//!
//! Every decoded packet filter component becomes one output packet filter that
//! repeats its filter's metadata. Components that fail to decode are dropped
//! and reported through a [`SkipReporter`]; they never fail the whole TFT.

pub mod component;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod report;
pub mod translate;


pub use component::translate_component;
pub use config::{ConfigError, TftConfig};
pub use error::{TftError, TftResult};
pub use model::*;
pub use report::{LogReporter, SkipReporter};
pub use translate::{handle_tft, translate_tft, TftTranslator};
