// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use crate::value::{Date, DateTime, GetType, Value};

pub trait IsNumber: Display + Copy + Debug + PartialEq + PartialOrd + GetType + Default + Into<Value> + 'static {}
pub trait IsTemporal: Display + Copy + Debug + PartialEq + PartialOrd + GetType + Default + Into<Value> + 'static {}

impl IsNumber for i8 {}
impl IsNumber for i16 {}
impl IsNumber for i32 {}
impl IsNumber for i64 {}
impl IsNumber for f32 {}
impl IsNumber for f64 {}

impl IsTemporal for Date {}
impl IsTemporal for DateTime {}
