// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use anyhow::{Result, anyhow};
use std::str::FromStr;

pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    History,
    Analysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => t.r#type == TransactionType::Income,
            TypeFilter::Expense => t.r#type == TransactionType::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(anyhow!("Unknown filter '{}' (use all|income|expense)", other)),
        }
    }
}

/// Presentation state owned by the caller. Analysis never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub tab: Tab,
    pub filter: TypeFilter,
}

impl ViewState {
    pub fn new(tab: Tab, filter: TypeFilter) -> Self {
        Self { tab, filter }
    }

    /// Filtered view of an already sorted list; the dashboard only shows the
    /// most recent few.
    pub fn visible<'a>(&self, sorted: &'a [Transaction]) -> Vec<&'a Transaction> {
        let filtered = sorted.iter().filter(|t| self.filter.matches(t));
        match self.tab {
            Tab::Dashboard => filtered.take(RECENT_LIMIT).collect(),
            Tab::History | Tab::Analysis => filtered.collect(),
        }
    }

    /// Whether the dashboard is hiding entries that the history tab would show.
    pub fn has_more(&self, sorted: &[Transaction]) -> bool {
        self.tab == Tab::Dashboard
            && sorted.iter().filter(|t| self.filter.matches(t)).count() > RECENT_LIMIT
    }
}
