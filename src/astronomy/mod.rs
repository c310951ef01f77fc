// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

pub mod ops;
pub mod solar;
pub mod unit;
