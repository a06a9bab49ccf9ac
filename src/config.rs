use std::path::PathBuf;

use crate::{color::Tint, error::Result, pipeline};

pub const DEFAULT_INPUT: &str = "data/leaves_big_oak.png";
pub const DEFAULT_OUTPUT: &str = "result.png";
pub const DEFAULT_TINT_HEX: &str = "41b941";
pub const DEFAULT_ALPHA: u8 = 255;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tint: Tint,
}

impl Config {
    pub fn new() -> Result<Self> {
        Ok(Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            tint: Tint::from_hex(DEFAULT_TINT_HEX, DEFAULT_ALPHA)?,
        })
    }

    pub fn run(&self) -> Result<()> {
        pipeline::tint(&self.input, &self.output, self.tint)
    }
}
