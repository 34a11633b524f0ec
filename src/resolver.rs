use anyhow::{Result, bail};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Interpreter names tried against the search path, highest priority first.
pub const LUA_CANDIDATES: [&str; 5] = ["lua", "luajit", "lua5.3", "lua5.2", "lua5.1"];

/// The interpreter and the z.lua script, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutablePair {
    pub interpreter: PathBuf,
    pub script: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ResolveInputs {
    pub interpreter: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub search_path: Option<OsString>,
    pub cwd: PathBuf,
}

pub fn resolve(inputs: &ResolveInputs) -> Result<ExecutablePair> {
    let interpreter = match &inputs.interpreter {
        Some(path) if path.exists() => path.clone(),
        Some(path) => bail!(
            "Interpreter {:?} does not exist, please make sure $ZLUA_LUAEXE points to a lua executable.",
            path
        ),
        None => match find_interpreter(inputs.search_path.as_ref(), &inputs.cwd) {
            Some(path) => path,
            None => bail!(
                "Please install lua in $PATH or make sure $ZLUA_LUAEXE points to a lua executable."
            ),
        },
    };

    let script = match &inputs.script {
        Some(path) if path.exists() => path.clone(),
        _ => bail!(
            "Could not find z.lua, please make sure $ZLUA_SCRIPT is set to absolute path of z.lua."
        ),
    };

    debug!("Resolved interpreter {:?}, script {:?}", interpreter, script);
    Ok(ExecutablePair { interpreter, script })
}

/// Candidate priority wins over directory order: `lua` anywhere on the
/// search path beats `luajit` in an earlier directory.
pub fn find_interpreter(search_path: Option<&OsString>, cwd: &Path) -> Option<PathBuf> {
    let search_path = search_path.filter(|p| !p.is_empty())?;
    LUA_CANDIDATES.iter().find_map(|name| {
        match which::which_in(name, Some(search_path), cwd) {
            Ok(found) => Some(found),
            Err(e) => {
                debug!("No {} on search path: {}", name, e);
                None
            }
        }
    })
}
