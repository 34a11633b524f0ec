// Shared fixtures for unit tests

use crate::host::{Host, ShellOutput, ShellRequest};
use crate::resolver::ExecutablePair;
use crate::zlua::Zlua;
use anyhow::Result;
use std::ffi::OsString;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[cfg(unix)]
pub fn fake_executable(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
pub fn join_paths(dirs: &[&Path]) -> OsString {
    std::env::join_paths(dirs).unwrap()
}

#[cfg(unix)]
/// A stand-in for z.lua: `/bin/sh` runs `body` with the z.lua arguments as `$@`.
pub fn fake_zlua(dir: &Path, body: &str) -> Zlua {
    let script = dir.join("z.lua");
    fs::write(&script, body).unwrap();
    Zlua::new(ExecutablePair {
        interpreter: PathBuf::from("/bin/sh"),
        script,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Cd(PathBuf),
    Notify { message: String, bad: bool },
    Execute(ShellRequest),
    Redraw,
}

/// Records every request; shell requests answer with `canned_stdout`.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub canned_stdout: Vec<u8>,
}

impl RecordingHost {
    pub fn with_stdout(stdout: &str) -> Self {
        Self {
            calls: Vec::new(),
            canned_stdout: stdout.as_bytes().to_vec(),
        }
    }

    pub fn cds(&self) -> Vec<&PathBuf> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Cd(p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn cd(&mut self, path: &Path) -> Result<()> {
        self.calls.push(HostCall::Cd(path.to_path_buf()));
        Ok(())
    }

    fn notify(&mut self, message: &str, bad: bool) {
        self.calls.push(HostCall::Notify {
            message: message.to_string(),
            bad,
        });
    }

    fn execute_command(&mut self, request: &ShellRequest) -> Result<ShellOutput> {
        self.calls.push(HostCall::Execute(request.clone()));
        let stdout = if request.capture_stdout {
            self.canned_stdout.clone()
        } else {
            Vec::new()
        };
        Ok(ShellOutput { stdout })
    }

    fn redraw(&mut self) {
        self.calls.push(HostCall::Redraw);
    }
}

/// In-memory writer whose clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
