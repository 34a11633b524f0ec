use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};
use crate::handlers::Session;
use crate::hooks::{DirChange, HookRegistry, ZluaHook};

pub fn registry(session: &Session) -> HookRegistry {
    let mut registry = HookRegistry::new();
    registry.register(Box::new(ZluaHook::new(session.zlua.clone())));
    registry
}

/// Entry point for shell `chpwd` hooks. Hook failures are logged, never
/// returned, so the shell prompt is not disturbed.
pub fn handle_hook(session: &Session, path: PathBuf) -> Result<()> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let new = absolutize(path, &cwd);

    let failures = registry(session).fire(&DirChange { new });
    debug!("{} cd hooks failed", failures);
    Ok(())
}

/// z.lua keys its history by absolute path.
pub fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
