use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use t9search_config::AppConfig;

pub mod completions;
pub mod search;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
