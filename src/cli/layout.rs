use std::path::PathBuf;

use clap::Parser;

use crate::{core::layout::Layout, prelude::*};

#[derive(Parser)]
pub struct LayoutArgs {
    /// TOML layout replacing the built-in field mapping, groups and sections.
    #[clap(long = "layout", env = "GRID_LAYOUT_PATH", global = true)]
    path: Option<PathBuf>,
}

impl LayoutArgs {
    pub fn load(&self) -> Result<Layout> {
        self.path.as_deref().map_or_else(|| Ok(Layout::default()), Layout::read_from)
    }
}
