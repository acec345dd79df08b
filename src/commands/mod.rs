// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod entries;
pub mod reports;
pub mod importer;
pub mod exporter;
