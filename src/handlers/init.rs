use anyhow::{Result, bail};

pub fn handle_init(shell: &str) -> Result<()> {
    let script = match shell {
        "zsh" => include_str!("../../scripts/init.zsh"),
        "bash" => include_str!("../../scripts/init.bash"),
        _ => bail!("Unsupported shell: {} (expected zsh or bash)", shell),
    };
    println!("{}", script);
    Ok(())
}
