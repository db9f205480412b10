// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod container;
pub mod data;
mod encoding;
pub mod push;

pub use data::ColumnData;
pub use encoding::{Column, Resolved};
pub use push::Push;
