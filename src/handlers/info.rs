use anyhow::Result;
use colored::*;
use std::path::Path;
use crate::handlers::Session;

pub fn handle_info(session: &Session) -> Result<()> {
    let settings = &session.settings;
    let pair = session.zlua.pair();

    println!();
    println!("{}", "🧭 Z.LUA BRIDGE".green().bold());
    println!("{}", "==============".green());
    println!("   Interpreter: {}", pair.interpreter.display().to_string().bold());
    println!("   Script:      {}", pair.script.display().to_string().bold());
    println!("   Data file:   {}", describe_optional(settings.data_file.as_deref()));
    println!("   Pager:       {}", settings.pager);
    println!("   Shell:       {}", settings.shell);
    println!("   Config:      {}", describe_optional(settings.config_path.as_deref()));
    println!();

    Ok(())
}

fn describe_optional(path: Option<&Path>) -> String {
    match path {
        Some(p) if p.exists() => p.display().to_string(),
        Some(p) => format!("{} {}", p.display(), "(missing)".dimmed()),
        None => "(none)".dimmed().to_string(),
    }
}
