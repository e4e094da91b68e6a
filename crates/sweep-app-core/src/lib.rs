// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for sweep tools (config storage, prefs).
//! Keeps drivers thin and storage-agnostic.

pub mod config;
pub mod config_port;
pub mod prefs;
