// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Small utilities shared across the UI.

pub mod geometry;
pub mod spring;
