//! HTML renderer for component fragments
//!
//! Components produce [`Fragment`] trees; this module serializes them to
//! HTML, optionally wrapped in a standalone document styled from the
//! resolved tokens.

pub mod config;
pub mod html;

pub use config::HtmlConfig;
pub use html::{render_html, Element, Fragment};
