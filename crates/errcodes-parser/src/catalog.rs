use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;
use tracing::debug;

use crate::error::Error;
use crate::sqlstate::SqlState;

/// Prefix every error macro name in errcodes.txt carries.
pub const NAME_PREFIX: &str = "ERRCODE_";

const COMMENT_MARKER: char = '#';
const SECTION_MARKER: &str = "Section:";
const MIN_FIELDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Success,
    Other(String),
}

impl Severity {
    fn from_token(token: &str) -> Self {
        match token {
            "E" => Severity::Error,
            "W" => Severity::Warning,
            "S" => Severity::Success,
            other => Severity::Other(other.to_string()),
        }
    }
}

/// One data line of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub sqlstate: SqlState,
    pub severity: Severity,
    /// Macro name without `ERRCODE_`, lower-cased.
    pub name: String,
    /// The condition name from the fourth column, when present.
    pub condition: Option<String>,
}

/// SQLSTATE entries keyed by their decoded value, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<u32, Entry>,
    duplicates: usize,
}

impl Catalog {
    /// Parses the whole text. The first malformed line aborts the parse.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut catalog = Self::default();

        for (index, raw) in split_lines(text).enumerate() {
            let line = raw.trim();
            if is_skipped(line) {
                continue;
            }

            let entry = parse_line(line).map_err(|source| Error::Line {
                line: index + 1,
                text: line.to_string(),
                source: Box::new(source),
            })?;
            catalog.insert(entry);
        }

        debug!(
            entries = catalog.len(),
            duplicates = catalog.duplicates,
            "parsed errcodes catalog"
        );
        Ok(catalog)
    }

    fn insert(&mut self, entry: Entry) {
        match self.entries.entry(entry.sqlstate.value()) {
            MapEntry::Occupied(kept) => {
                self.duplicates += 1;
                debug!(
                    sqlstate = %entry.sqlstate,
                    kept = %kept.get().name,
                    skipped = %entry.name,
                    "ignoring duplicate sqlstate"
                );
            }
            MapEntry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, value: u32) -> Option<&Entry> {
        self.entries.get(&value)
    }

    /// Number of data lines dropped because their code was already present.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Entry)> + '_ {
        self.entries.iter().map(|(value, entry)| (*value, entry))
    }
}

/// Splits on `\n`, `\r\n` and a bare `\r`, counting `\r\n` as one break.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT_MARKER) || line.starts_with(SECTION_MARKER)
}

/// Parses one trimmed data line.
pub fn parse_line(line: &str) -> Result<Entry, Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(Error::TooFewFields {
            found: fields.len(),
        });
    }

    let sqlstate = SqlState::parse(fields[0])?;
    let severity = Severity::from_token(fields[1]);
    let name = fields[2]
        .strip_prefix(NAME_PREFIX)
        .ok_or_else(|| Error::MissingPrefix {
            name: fields[2].to_string(),
        })?
        .to_lowercase();
    let condition = fields.get(3).map(|c| (*c).to_string());

    Ok(Entry {
        sqlstate,
        severity,
        name,
        condition,
    })
}
