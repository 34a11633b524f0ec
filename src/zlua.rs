use anyhow::{Context, Result, bail};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Stdio};
use crate::resolver::ExecutablePair;

/// Per-invocation seed z.lua mixes into its temp file names.
pub const RANDOM_SEED_VAR: &str = "_ZL_RANDOM";

/// Invokes the external z.lua script. Every argv starts with
/// `[interpreter, script]`.
#[derive(Debug, Clone)]
pub struct Zlua {
    pair: ExecutablePair,
}

impl Zlua {
    pub fn new(pair: ExecutablePair) -> Self {
        Self { pair }
    }

    pub fn pair(&self) -> &ExecutablePair {
        &self.pair
    }

    pub fn argv<S: AsRef<OsStr>>(&self, args: &[S]) -> Vec<OsString> {
        let mut argv = vec![
            self.pair.interpreter.clone().into_os_string(),
            self.pair.script.clone().into_os_string(),
        ];
        argv.extend(args.iter().map(|a| a.as_ref().to_os_string()));
        argv
    }

    fn command<S: AsRef<OsStr>>(&self, args: &[S]) -> Command {
        let argv = self.argv(args);
        debug!("Spawning {:?}", argv);
        let mut command = Command::new(&self.pair.interpreter);
        command.args(argv.iter().skip(1));
        command
    }

    /// Record a visited directory. The seed goes to this child only.
    pub fn add(&self, path: &Path, seed: u32) -> Result<()> {
        debug!("{}={}", RANDOM_SEED_VAR, seed);
        let status = self
            .command(&[OsStr::new("--add"), path.as_os_str()])
            .env(RANDOM_SEED_VAR, seed.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context("Failed to spawn z.lua --add")?;

        if !status.success() {
            bail!("z.lua --add exited with code {:?}", status.code());
        }
        Ok(())
    }

    /// Ask z.lua for the best match of `args` and return the decoded path
    /// (possibly empty). A non-zero exit is an error.
    pub fn resolve_cd(&self, args: &[OsString]) -> Result<String> {
        let mut cd_args = vec![OsString::from("--cd")];
        cd_args.extend_from_slice(args);
        let output = self
            .command(&cd_args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .context("Failed to spawn z.lua --cd")?;

        if !output.status.success() {
            bail!("z.lua --cd exited with code {:?}", output.status.code());
        }
        Ok(decode_output(&output.stdout))
    }

    /// Shell command line for modes that pipe through a pager or run under
    /// the host's shell. Every word is quoted. A shell string is text, so
    /// non-UTF-8 words are converted lossily here and only here.
    pub fn command_line(&self, args: &[OsString], inject_cd: bool) -> String {
        let mut words = vec![
            self.pair.interpreter.to_string_lossy(),
            self.pair.script.to_string_lossy(),
        ];
        if inject_cd {
            words.push("--cd".into());
        }
        words.extend(args.iter().map(|a| a.to_string_lossy()));
        shell_words::join(words)
    }
}

/// Drop invalid UTF-8 and strip exactly one trailing line terminator.
pub fn decode_output(bytes: &[u8]) -> String {
    let mut text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

pub fn random_seed() -> u32 {
    rand::random_range(0..=0x7fff_ffff)
}
