// SPDX-License-Identifier: MPL-2.0
//! `iced_banners` shows transient notification banners in iced applications.
//!
//! Banners slide in from the top or bottom edge, one at a time, styled per
//! notification kind by a TOML design document. The queue is driven entirely
//! by messages, so it fits the usual `update`/`view`/`subscription` loop.

#![doc(html_root_url = "https://docs.rs/iced_banners/0.1.0")]

pub mod app;
pub mod config;
pub mod design;
pub mod error;
pub mod ui;
