use anyhow::Result;
use log::debug;
use std::ffi::OsString;
use std::path::Path;
use crate::handlers::Session;
use crate::host::{Host, ShellRequest, TerminalHost};
use crate::mode::Mode;
use crate::zlua::{Zlua, decode_output};

pub fn handle_jump(session: &Session, args: Vec<OsString>) -> Result<()> {
    let mut host = TerminalHost::new(
        session.settings.shell.clone(),
        session.settings.output_file.clone(),
    );
    dispatch(&mut host, &session.zlua, &args, &session.settings.pager)
}

/// Run one `z` command: pick the mode, call z.lua once, apply the result.
/// `args` excludes the command name.
pub fn dispatch(host: &mut dyn Host, zlua: &Zlua, args: &[OsString], pager: &str) -> Result<()> {
    let mode = Mode::scan(args);
    debug!("z {:?} -> {:?}", args, mode);

    match mode {
        Mode::Passthrough => {
            let path = zlua.resolve_cd(args)?;
            if !path.is_empty() && Path::new(&path).exists() {
                host.cd(Path::new(&path))?;
            } else {
                host.notify("No matching found", true);
            }
        }
        Mode::Echo => {
            let path = zlua.resolve_cd(args)?;
            host.notify(&path, false);
        }
        Mode::Help | Mode::List => {
            let command_line = format!("{} | {}", zlua.command_line(args, mode.injects_cd()), pager);
            host.execute_command(&ShellRequest { command_line, capture_stdout: false })?;
        }
        Mode::EndOfFlags => {
            let command_line = format!("{} 2>&1 | {}", zlua.command_line(args, mode.injects_cd()), pager);
            host.execute_command(&ShellRequest { command_line, capture_stdout: false })?;
        }
        Mode::Interactive => {
            let command_line = zlua.command_line(args, mode.injects_cd());
            let output = host.execute_command(&ShellRequest { command_line, capture_stdout: true })?;
            host.redraw();
            let path = decode_output(&output.stdout);
            if !path.is_empty() && Path::new(&path).exists() {
                host.cd(Path::new(&path))?;
            }
        }
    }

    Ok(())
}
