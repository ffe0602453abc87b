use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = if self.data.exists {
            "file"
        } else {
            "defaults, file not found"
        };

        writeln!(f, "Config: {} ({})", self.data.path, source)?;
        writeln!(f)?;
        writeln!(f, "[display]")?;
        writeln!(f, "  title          = {}", self.data.title)?;
        writeln!(f, "  currency_label = {}", self.data.currency_label)?;
        writeln!(f, "[ui]")?;
        writeln!(f, "  tick_rate_ms   = {}", self.data.tick_rate_ms)?;
        Ok(())
    }
}
