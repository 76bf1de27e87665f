// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod session;
pub mod transactions;
pub mod dashboard;
pub mod insights;
pub mod split;
pub mod categories;
pub mod importer;
pub mod exporter;
pub mod config;
