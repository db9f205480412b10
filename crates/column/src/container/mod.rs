// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod array;
mod map;
mod row;

pub use array::ArrayContainer;
pub use map::MapContainer;
pub use row::RowContainer;
