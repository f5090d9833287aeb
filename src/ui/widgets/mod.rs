// SPDX-License-Identifier: MPL-2.0
pub mod pinned;

pub use pinned::{pinned, Pinned};
