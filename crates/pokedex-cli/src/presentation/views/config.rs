use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let origin = if self.data.file_exists {
            ""
        } else {
            " (not found, using defaults)"
        };
        writeln!(f, "Config file: {}{}", self.data.path, origin)?;
        writeln!(f)?;
        writeln!(f, "[api]")?;
        writeln!(f, "  base_url     = {}", self.data.api_base_url)?;
        writeln!(f, "  roster_limit = {}", self.data.roster_limit)?;
        writeln!(f, "  user_agent   = {}", self.data.user_agent)?;
        writeln!(f, "[view]")?;
        writeln!(f, "  page_size    = {}", self.data.page_size)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verb = if self.data.overwritten {
            "Overwrote"
        } else {
            "Wrote"
        };
        writeln!(f, "{} {}", verb, self.data.path)
    }
}
