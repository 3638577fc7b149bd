// src/render.rs

//! Generated `.bzl` file layout

use std::io::{self, Write};

/// Header comment, load statement and macro signature
pub const BUILD_FILE_HEADER: &str = "# This file is autogenerated with dep2bazel, do not edit.
load(\"@io_bazel_rules_go//go:def.bzl\", \"go_repository\")

def go_deps():
";

/// Collects rendered `go_repository` blocks in input order
#[derive(Debug, Default, Clone)]
pub struct BuildFile {
    blocks: Vec<String>,
}

impl BuildFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: String) {
        self.blocks.push(block);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Write the complete file
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(BUILD_FILE_HEADER.as_bytes())?;
        if self.blocks.is_empty() {
            // A def needs a body
            out.write_all(b"    pass\n")?;
        }
        for block in &self.blocks {
            out.write_all(block.as_bytes())?;
        }
        out.flush()
    }

    pub fn render(&self) -> String {
        let mut out = Vec::new();
        // Vec<u8> writes are infallible
        let _ = self.write_to(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
