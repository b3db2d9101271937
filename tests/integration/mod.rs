// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod finance_api_test;
pub mod health_check;
pub mod seat_api_test;
pub mod students_api_test;
