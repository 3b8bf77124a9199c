//! User-facing features
//!
//! `translator` owns routing between the Braille codec and the remote
//! service; `ingest` turns uploads and speech results into input text.

pub mod ingest;
pub mod translator;
