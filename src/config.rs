use anyhow::{Context, Result, bail};
use log::warn;
use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use crate::resolver::ResolveInputs;

pub const DEFAULT_PAGER: &str = "less +G";

/// `$ZJ_CONFIG` or `~/.config/zj/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub lua: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub pager: Option<String>,
    pub shell: Option<String>,
}

/// Everything `zj` reads from the outside world, merged.
/// Environment beats deprecated aliases, which beat the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub lua: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub pager: String,
    pub shell: String,
    pub search_path: Option<OsString>,
    pub output_file: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

pub fn load_settings() -> Result<Settings> {
    Settings::from_lookup(|key| env::var_os(key))
}

impl Settings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let config_path = match get("ZJ_CONFIG") {
            Some(explicit) => {
                let path = PathBuf::from(explicit);
                if !path.exists() {
                    bail!("Config file from $ZJ_CONFIG not found: {:?}", path);
                }
                Some(path)
            }
            None => get("HOME")
                .map(|home| Path::new(&home).join(".config").join("zj").join("config.toml"))
                .filter(|p| p.exists()),
        };

        let file = match &config_path {
            Some(path) => load_config(path)?,
            None => FileConfig::default(),
        };

        let lua = env_with_alias(&get, "ZLUA_LUAEXE", "RANGER_LUA").map(PathBuf::from).or(file.lua);
        let script = env_with_alias(&get, "ZLUA_SCRIPT", "RANGER_ZLUA").map(PathBuf::from).or(file.script);

        let pager = get("ZJ_PAGER")
            .map(|v| v.to_string_lossy().into_owned())
            .or(file.pager)
            .unwrap_or_else(|| DEFAULT_PAGER.to_string());

        let shell = file
            .shell
            .or_else(|| get("SHELL").map(|v| v.to_string_lossy().into_owned()))
            .unwrap_or_else(|| if cfg!(windows) { "cmd".to_string() } else { "sh".to_string() });

        let data_file = get("_ZL_DATA").map(PathBuf::from).or_else(|| {
            get("HOME")
                .or_else(|| get("USERPROFILE"))
                .map(|home| Path::new(&home).join(".zlua"))
        });

        Ok(Self {
            lua,
            script,
            pager,
            shell,
            search_path: get("PATH"),
            output_file: get("ZJ_OUTPUT").map(PathBuf::from),
            data_file,
            config_path,
        })
    }

    pub fn resolve_inputs(&self, cwd: &Path) -> ResolveInputs {
        ResolveInputs {
            interpreter: self.lua.clone(),
            script: self.script.clone(),
            search_path: self.search_path.clone(),
            cwd: cwd.to_path_buf(),
        }
    }
}

fn env_with_alias(
    get: &impl Fn(&str) -> Option<OsString>,
    canonical: &str,
    deprecated: &str,
) -> Option<OsString> {
    get(canonical).or_else(|| {
        let value = get(deprecated)?;
        warn!("${} is deprecated, use ${} instead", deprecated, canonical);
        Some(value)
    })
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.pager, DEFAULT_PAGER);
        assert!(s.lua.is_none());
        assert!(s.script.is_none());
        assert!(s.config_path.is_none());
        assert!(s.data_file.is_none());
    }

    #[test]
    fn test_canonical_beats_deprecated() {
        let s = settings(&[
            ("ZLUA_LUAEXE", "/usr/bin/lua"),
            ("RANGER_LUA", "/old/lua"),
            ("RANGER_ZLUA", "/old/z.lua"),
        ])
        .unwrap();
        assert_eq!(s.lua, Some(PathBuf::from("/usr/bin/lua")));
        assert_eq!(s.script, Some(PathBuf::from("/old/z.lua")));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let s = settings(&[("ZLUA_LUAEXE", ""), ("RANGER_LUA", "/old/lua")]).unwrap();
        assert_eq!(s.lua, Some(PathBuf::from("/old/lua")));
    }

    #[test]
    fn test_file_config_below_env() {
        let tmp = tempdir().unwrap();
        let cfg = tmp.path().join("config.toml");
        fs::write(
            &cfg,
            "lua = \"/file/lua\"\nscript = \"/file/z.lua\"\npager = \"more\"\nshell = \"/bin/bash\"\n",
        )
        .unwrap();
        let cfg_str = cfg.to_string_lossy().into_owned();

        let s = settings(&[("ZJ_CONFIG", cfg_str.as_str()), ("ZLUA_SCRIPT", "/env/z.lua")]).unwrap();
        assert_eq!(s.lua, Some(PathBuf::from("/file/lua")));
        assert_eq!(s.script, Some(PathBuf::from("/env/z.lua")));
        assert_eq!(s.pager, "more");
        assert_eq!(s.shell, "/bin/bash");
        assert_eq!(s.config_path, Some(cfg));
    }

    #[test]
    fn test_home_config_discovered() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join(".config").join("zj");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "pager = \"most\"\n").unwrap();
        let home = tmp.path().to_string_lossy().into_owned();

        let s = settings(&[("HOME", home.as_str()), ("ZJ_PAGER", "bat")]).unwrap();
        assert_eq!(s.pager, "bat");
        assert_eq!(s.config_path, Some(dir.join("config.toml")));
        assert_eq!(s.data_file, Some(tmp.path().join(".zlua")));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        assert!(settings(&[("ZJ_CONFIG", "/definitely/not/here.toml")]).is_err());
    }

    #[test]
    fn test_bad_toml_fails() {
        let tmp = tempdir().unwrap();
        let cfg = tmp.path().join("config.toml");
        fs::write(&cfg, "pager = [").unwrap();
        assert!(load_config(&cfg).is_err());
    }

    #[test]
    fn test_data_file_override() {
        let s = settings(&[("_ZL_DATA", "/data/zlua"), ("HOME", "/home/u")]).unwrap();
        assert_eq!(s.data_file, Some(PathBuf::from("/data/zlua")));
        let s = settings(&[("USERPROFILE", "C:/Users/u")]).unwrap();
        assert_eq!(s.data_file, Some(Path::new("C:/Users/u").join(".zlua")));
    }
}
