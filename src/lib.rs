// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Nutriplan: user nutrition/fitness profile storage
//!
//! This crate provides the data layer for user nutrition profiles: typed
//! document models with write-time defaults, validation of candidate records,
//! and Firestore-backed create/read/update/delete keyed to an external user
//! entity by identifier.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
