use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("ssd-status version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
