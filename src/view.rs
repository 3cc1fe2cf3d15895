use crate::models::{Column, CountryRecord, RegionFilter, SortOrder, SortSpec};
use std::cmp::Ordering;

/// Keep only the records matching `filter`, in place.
pub fn filter_region(rows: &mut Vec<CountryRecord>, filter: &RegionFilter) {
    if let RegionFilter::Region(_) = filter {
        rows.retain(|r| filter.matches(r));
    }
}

/// Natural ordering of two records on one column.
///
/// Text compares lexicographically (byte order), counts numerically, area by
/// `f64::total_cmp`.
pub fn compare_by(column: Column, a: &CountryRecord, b: &CountryRecord) -> Ordering {
    match column {
        Column::Name => a.name.cmp(&b.name),
        Column::Region => a.region.cmp(&b.region),
        Column::Population => a.population.cmp(&b.population),
        Column::AreaKm2 => a.area_km2.total_cmp(&b.area_km2),
        Column::Borders => a.borders.cmp(&b.borders),
        Column::Languages => a.languages.cmp(&b.languages),
        Column::Timezones => a.timezones.cmp(&b.timezones),
    }
}

/// Stable in-place sort. Ties keep their relative order in both directions.
pub fn sort_records(rows: &mut [CountryRecord], spec: SortSpec) {
    match spec.order {
        SortOrder::Ascending => rows.sort_by(|a, b| compare_by(spec.column, a, b)),
        SortOrder::Descending => rows.sort_by(|a, b| compare_by(spec.column, b, a)),
    }
}

/// Distinct regions in first-seen order. An empty region is a value like any other.
pub fn distinct_regions(rows: &[CountryRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in rows {
        if !out.iter().any(|seen| *seen == r.region) {
            out.push(r.region.clone());
        }
    }
    out
}

/// Options for a region selector: the "All" sentinel, then every observed region.
pub fn region_options(rows: &[CountryRecord]) -> Vec<RegionFilter> {
    std::iter::once(RegionFilter::All)
        .chain(distinct_regions(rows).into_iter().map(RegionFilter::Region))
        .collect()
}

/// The in-memory table of one session: fetched rows plus the current filter and sort.
///
/// `displayed()` is always `source` filtered by `region` and then sorted by `sort`.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    source: Vec<CountryRecord>,
    region: RegionFilter,
    sort: SortSpec,
    displayed: Vec<CountryRecord>,
}

impl TableView {
    pub fn new(rows: Vec<CountryRecord>) -> Self {
        let mut view = Self {
            source: rows,
            ..Self::default()
        };
        view.refresh();
        view
    }

    /// Replace the fetched rows, keeping the current sort. A region that no longer
    /// exists in the new rows falls back to `All`.
    pub fn set_rows(&mut self, rows: Vec<CountryRecord>) {
        self.source = rows;
        if let RegionFilter::Region(r) = &self.region {
            if !self.source.iter().any(|row| row.region == *r) {
                self.region = RegionFilter::All;
            }
        }
        self.refresh();
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        if self.region != region {
            self.region = region;
            self.refresh();
        }
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        if self.sort != sort {
            self.sort = sort;
            self.refresh();
        }
    }

    pub fn source(&self) -> &[CountryRecord] {
        &self.source
    }

    pub fn displayed(&self) -> &[CountryRecord] {
        &self.displayed
    }

    pub fn region(&self) -> &RegionFilter {
        &self.region
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn region_options(&self) -> Vec<RegionFilter> {
        region_options(&self.source)
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn refresh(&mut self) {
        let mut rows = self.source.clone();
        filter_region(&mut rows, &self.region);
        sort_records(&mut rows, self.sort);
        self.displayed = rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, region: &str, population: u64) -> CountryRecord {
        CountryRecord {
            name: name.into(),
            region: region.into(),
            population,
            area_km2: 0.0,
            borders: 0,
            languages: 0,
            timezones: 0,
        }
    }

    #[test]
    fn descending_sort_keeps_ties_in_input_order() {
        let mut rows = vec![rec("b", "X", 5), rec("a", "X", 5), rec("c", "X", 9)];
        sort_records(
            &mut rows,
            SortSpec {
                column: Column::Population,
                order: SortOrder::Descending,
            },
        );
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn region_options_start_with_all_and_keep_blank() {
        let rows = vec![rec("a", "Europe", 1), rec("b", "", 1), rec("c", "Asia", 1), rec("d", "Europe", 1)];
        let options = region_options(&rows);
        assert_eq!(
            options,
            vec![
                RegionFilter::All,
                RegionFilter::Region("Europe".into()),
                RegionFilter::Region(String::new()),
                RegionFilter::Region("Asia".into()),
            ]
        );

        let mut view = TableView::new(rows);
        view.set_region(options[2].clone());
        assert_eq!(view.displayed().len(), 1);
        assert_eq!(view.displayed()[0].name, "b");
    }

    #[test]
    fn set_rows_drops_vanished_region() {
        let mut view = TableView::new(vec![rec("a", "Europe", 1)]);
        view.set_region(RegionFilter::Region("Europe".into()));
        view.set_rows(vec![rec("b", "Asia", 2)]);
        assert_eq!(view.region(), &RegionFilter::All);
        assert_eq!(view.displayed().len(), 1);
    }
}
