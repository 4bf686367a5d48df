//! Evaluation context configuration

use std::cell::Cell;

use crate::{Result, TreeError};

/// Configuration and state for tree walks.
///
/// This is passed through all evaluation and rendering calls and bounds how
/// deeply nested a tree may be.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum nesting depth
    pub max_depth: usize,

    depth: Cell<usize>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            depth: Cell::new(0),
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Enter one level of nesting; the level is left when the guard drops.
    pub fn enter(&self) -> Result<DepthGuard<'_>> {
        let next = self.depth.get() + 1;
        if next > self.max_depth {
            return Err(TreeError::DepthExceeded {
                max: self.max_depth,
            });
        }
        self.depth.set(next);
        Ok(DepthGuard { ctx: self })
    }
}

/// RAII guard that decrements the context depth when dropped.
pub struct DepthGuard<'a> {
    ctx: &'a EvalContext,
}

impl<'a> Drop for DepthGuard<'a> {
    fn drop(&mut self) {
        self.ctx.depth.set(self.ctx.depth.get() - 1);
    }
}
