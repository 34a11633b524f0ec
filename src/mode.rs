use std::ffi::OsString;

/// How the `z` command hands its arguments to z.lua.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No flag recognized: resolve and jump.
    Passthrough,
    /// `-l`: list matches through the pager.
    List,
    /// `-e` / `-x`: print the match instead of jumping.
    Echo,
    /// `-h` / `--help`
    Help,
    /// `-i` / `-I`: let z.lua prompt, then jump to the selection.
    Interactive,
    /// `--`
    EndOfFlags,
}

impl Mode {
    /// The first recognized flag wins. A plain word before any recognized
    /// flag ends the scan; unknown flags are skipped.
    pub fn scan(args: &[OsString]) -> Self {
        for arg in args {
            // -i/-I stop the scan like every other flag, so `-i -l` stays interactive.
            let mode = match arg.to_str() {
                Some("-l") => Self::List,
                Some("-e" | "-x") => Self::Echo,
                Some("-h" | "--help") => Self::Help,
                Some("-I" | "-i") => Self::Interactive,
                Some("--") => Self::EndOfFlags,
                _ if !arg.as_encoded_bytes().starts_with(b"-") => break,
                _ => continue,
            };
            return mode;
        }
        Self::Passthrough
    }

    pub fn injects_cd(self) -> bool {
        matches!(self, Self::Interactive | Self::EndOfFlags)
    }
}
