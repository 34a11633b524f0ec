pub mod hook;
pub mod info;
pub mod init;
pub mod jump;

use anyhow::Result;
use std::env;
use crate::config::{Settings, load_settings};
use crate::resolver::resolve;
use crate::zlua::Zlua;

/// Settings plus a resolved z.lua, built once per process before any
/// command or hook runs.
pub struct Session {
    pub settings: Settings,
    pub zlua: Zlua,
}

impl Session {
    pub fn start() -> Result<Self> {
        let settings = load_settings()?;
        let cwd = env::current_dir()?;
        let pair = resolve(&settings.resolve_inputs(&cwd))?;
        Ok(Self {
            settings,
            zlua: Zlua::new(pair),
        })
    }
}
