// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod bool;
mod number;
mod temporal;
mod undefined;
mod utf8;

pub use bool::BoolContainer;
pub use number::NumberContainer;
pub use temporal::TemporalContainer;
pub use undefined::UndefinedContainer;
pub use utf8::Utf8Container;
