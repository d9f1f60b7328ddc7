// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod error;

pub mod expression;
pub mod modifier;

pub use error::VerbalError;
pub use expression::{escape, Expression};
pub use modifier::{Modifier, Modifiers};
