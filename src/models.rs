use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Fallback used when a record carries no usable `name.common`.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Fallback used when a record carries no usable `region`.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Tidy structure used by this crate (one row = one country).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    pub region: String,
    pub population: u64,
    pub area_km2: f64,
    pub borders: usize,
    pub languages: usize,
    pub timezones: usize,
}

impl CountryRecord {
    /// Build a record from one loosely-structured REST Countries entry.
    ///
    /// Every field is extracted on its own; a missing or mistyped field falls back to
    /// its default instead of rejecting the record.
    pub fn from_value(v: &Value) -> Self {
        let name = v
            .get("name")
            .and_then(|n| n.get("common"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_NAME)
            .to_string();
        let region = v
            .get("region")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_REGION)
            .to_string();
        let population = v.get("population").and_then(de_population).unwrap_or(0);
        let area_km2 = v
            .get("area")
            .and_then(Value::as_f64)
            .filter(|a| a.is_finite() && *a > 0.0)
            .unwrap_or(0.0);
        let borders = v
            .get("borders")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        let languages = v
            .get("languages")
            .and_then(Value::as_object)
            .map_or(0, |m| m.len());
        let timezones = v
            .get("timezones")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        Self {
            name,
            region,
            population,
            area_km2,
            borders,
            languages,
            timezones,
        }
    }
}

/// Population is sometimes serialized as a float (`1.0e6`); accept whole non-negative values.
fn de_population(v: &Value) -> Option<u64> {
    v.as_u64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

/// A displayable, sortable column of [`CountryRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Region,
    Population,
    AreaKm2,
    Borders,
    Languages,
    Timezones,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 7] = [
        Column::Name,
        Column::Region,
        Column::Population,
        Column::AreaKm2,
        Column::Borders,
        Column::Languages,
        Column::Timezones,
    ];

    /// Machine name, used for CSV headers and CLI values.
    pub fn key(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Region => "region",
            Column::Population => "population",
            Column::AreaKm2 => "area_km2",
            Column::Borders => "borders",
            Column::Languages => "languages",
            Column::Timezones => "timezones",
        }
    }

    /// Human label for table headers.
    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Region => "Region",
            Column::Population => "Population",
            Column::AreaKm2 => "Area (km²)",
            Column::Borders => "Borders",
            Column::Languages => "Languages",
            Column::Timezones => "Time Zones",
        }
    }

    /// True for columns ordered lexicographically.
    pub fn is_text(self) -> bool {
        matches!(self, Column::Name | Column::Region)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Column::ALL
            .into_iter()
            .find(|c| c.key() == wanted || (wanted == "area" && *c == Column::AreaKm2))
            .ok_or_else(|| format!("unknown column: {s}"))
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Column + direction; defaults to name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Column,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: Column::Name,
            order: SortOrder::Ascending,
        }
    }
}

/// Region selection. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegionFilter {
    #[default]
    All,
    Region(String),
}

impl RegionFilter {
    /// Display label of the sentinel option.
    pub const ALL_LABEL: &'static str = "All";

    /// Display label of a record whose region is the empty string.
    pub const BLANK_LABEL: &'static str = "(blank)";

    /// Parse a user selection; `all` (any case) or an empty string means no filter,
    /// `(blank)` selects records with an empty region.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(Self::ALL_LABEL) {
            RegionFilter::All
        } else if s == Self::BLANK_LABEL {
            RegionFilter::Region(String::new())
        } else {
            RegionFilter::Region(s.to_string())
        }
    }

    pub fn matches(&self, record: &CountryRecord) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Region(r) => record.region == *r,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RegionFilter::All => Self::ALL_LABEL,
            RegionFilter::Region(r) if r.is_empty() => Self::BLANK_LABEL,
            RegionFilter::Region(r) => r,
        }
    }
}
