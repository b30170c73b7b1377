//! URL hash configuration for the earth globe.
//!
//! Parses bookmarked and shared hashes such as
//! `2013/11/14/0900Z/wind/isobaric/1000hPa/orthographic=26.50,-153.00,1430/overlay=off`
//! into a [`Configuration`], and renders configurations back into hashes.
//!
//! The grammar is fixed by the URLs already in circulation, so parsing is lenient:
//! unknown options are ignored and a hash that does not match yields `None`.

pub mod configuration;
pub mod names;
pub mod parser;

pub use configuration::{
    Configuration, DataSelection, CURRENT, DEFAULT_ORIENTATION, DEFAULT_OVERLAY,
    DEFAULT_PROJECTION,
};
pub use names::NameSet;
pub use parser::{build_configuration, parse, HashOption, HashParser};
