//! Procedural lotus and zen circle icons for the Slow Spot meditation app.
//!
//! Icons are built as `gradient → glyph overlay → smoothing → PNG`, one file
//! at a time. The [`icon_gen`] module holds the icon sets and the pipeline;
//! [`gradient`] and [`glyph`] hold the drawing routines it composes.

pub mod glyph;
pub mod gradient;
pub mod icon_gen;
pub mod manifest;
