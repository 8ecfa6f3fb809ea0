//! Core functionality for the clone server
//!
//! Language classification, translation, reference retrieval and synthesis,
//! tied together by the request pipeline.

pub mod language;
pub mod pipeline;
pub mod reference;
pub mod synthesis;
pub mod translation;
