use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::error::Error;

/// Shape of the generated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `name=value,` for the body of an enum definition.
    EnumValues,
    /// `case sqlstate::name: return "name";` for a to-string switch.
    SwitchCases,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::EnumValues, Mode::SwitchCases];

    #[must_use]
    pub fn command_name(self) -> &'static str {
        match self {
            Mode::EnumValues => "enum-values",
            Mode::SwitchCases => "switch-cases",
        }
    }

    #[must_use]
    pub fn format_entry(self, value: u32, name: &str) -> String {
        match self {
            Mode::EnumValues => format!("{name}={value},"),
            Mode::SwitchCases => format!("case sqlstate::{name}: return \"{name}\";"),
        }
    }

    pub fn lines(self, catalog: &Catalog) -> impl Iterator<Item = String> + '_ {
        catalog
            .iter()
            .map(move |(value, entry)| self.format_entry(value, &entry.name))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.command_name() == s)
            .ok_or_else(|| Error::UnknownMode {
                name: s.to_string(),
            })
    }
}

/// Writes one line per catalog entry, in catalog order.
pub fn render<W: Write>(catalog: &Catalog, mode: Mode, out: &mut W) -> io::Result<()> {
    for line in mode.lines(catalog) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[must_use]
pub fn render_to_string(catalog: &Catalog, mode: Mode) -> String {
    let mut out = String::new();
    for line in mode.lines(catalog) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
