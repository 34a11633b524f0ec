use anyhow::Result;
use colored::*;
use log::{debug, warn};
use std::path::PathBuf;
use crate::zlua::{Zlua, random_seed};

/// Delivered to subscribers after the host changed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChange {
    pub new: PathBuf,
}

pub trait CdHook {
    fn name(&self) -> &str;
    fn on_cd(&self, event: &DirChange) -> Result<()>;
}

/// Subscribers to directory-change events, called in registration order.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn CdHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Box<dyn CdHook>) {
        debug!("Registered cd hook '{}'", hook.name());
        self.hooks.push(hook);
    }

    /// Never fails: the directory change already happened, so a broken
    /// subscriber is logged and skipped. Returns how many failed.
    pub fn fire(&self, event: &DirChange) -> usize {
        let mut failures = 0;
        for hook in &self.hooks {
            if let Err(e) = hook.on_cd(event) {
                warn!("{} cd hook '{}' failed: {:#}", "⚠️".yellow(), hook.name(), e);
                failures += 1;
            }
        }
        failures
    }
}

/// Records every visited directory in z.lua's history.
pub struct ZluaHook {
    zlua: Zlua,
}

impl ZluaHook {
    pub fn new(zlua: Zlua) -> Self {
        Self { zlua }
    }
}

impl CdHook for ZluaHook {
    fn name(&self) -> &str {
        "z.lua"
    }

    fn on_cd(&self, event: &DirChange) -> Result<()> {
        self.zlua.add(&event.new, random_seed())
    }
}
