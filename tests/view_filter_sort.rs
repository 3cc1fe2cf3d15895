mod common;

use countries_rs::api::parse_countries;
use countries_rs::view::{distinct_regions, filter_region, sort_records};
use countries_rs::{Column, CountryRecord, RegionFilter, SortOrder, SortSpec, TableView};

fn testland() -> CountryRecord {
    CountryRecord {
        name: "Testland".into(),
        region: "Testregion".into(),
        population: 100,
        area_km2: 0.0,
        borders: 0,
        languages: 0,
        timezones: 0,
    }
}

fn sample() -> Vec<CountryRecord> {
    parse_countries(common::SAMPLE).unwrap()
}

fn names(rows: &[CountryRecord]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn testland_example() {
    let mut rows = vec![testland()];
    filter_region(&mut rows, &RegionFilter::Region("Testregion".into()));
    assert_eq!(names(&rows), ["Testland"]);

    let mut rows = vec![testland()];
    filter_region(&mut rows, &RegionFilter::Region("OtherRegion".into()));
    assert!(rows.is_empty());
}

#[test]
fn region_filter_is_exact_match() {
    let mut rows = sample();
    filter_region(&mut rows, &RegionFilter::Region("Europe".into()));
    assert_eq!(names(&rows), ["Germany", "Belgium"]);
    assert!(rows.iter().all(|r| r.region == "Europe"));

    let mut rows = sample();
    filter_region(&mut rows, &RegionFilter::Region("europe".into()));
    assert!(rows.is_empty());
}

#[test]
fn all_returns_unfiltered_set() {
    let mut rows = sample();
    filter_region(&mut rows, &RegionFilter::All);
    assert_eq!(rows, sample());
}

#[test]
fn sorts_text_lexicographically_and_numbers_numerically() {
    let mut rows = sample();
    sort_records(&mut rows, SortSpec::default());
    assert_eq!(names(&rows), ["Belgium", "Germany", "Japan", "Kiribati", "Unknown"]);

    sort_records(
        &mut rows,
        SortSpec {
            column: Column::Population,
            order: SortOrder::Descending,
        },
    );
    assert_eq!(names(&rows), ["Japan", "Germany", "Belgium", "Kiribati", "Unknown"]);

    sort_records(
        &mut rows,
        SortSpec {
            column: Column::AreaKm2,
            order: SortOrder::Ascending,
        },
    );
    assert_eq!(names(&rows), ["Unknown", "Kiribati", "Belgium", "Germany", "Japan"]);
}

#[test]
fn every_column_sorts_monotonically() {
    for column in Column::ALL {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let mut rows = sample();
            sort_records(&mut rows, SortSpec { column, order });
            for pair in rows.windows(2) {
                let ord = countries_rs::view::compare_by(column, &pair[0], &pair[1]);
                match order {
                    SortOrder::Ascending => assert!(ord.is_le(), "{column} asc"),
                    SortOrder::Descending => assert!(ord.is_ge(), "{column} desc"),
                }
            }
        }
    }
}

#[test]
fn sorting_twice_gives_the_same_order() {
    for column in Column::ALL {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let spec = SortSpec { column, order };
            let mut once = sample();
            sort_records(&mut once, spec);
            let mut twice = once.clone();
            sort_records(&mut twice, spec);
            assert_eq!(once, twice, "{column} {order:?}");
        }
    }
}

#[test]
fn ties_keep_input_order() {
    // Germany and Belgium share region and timezone count.
    let mut rows = sample();
    sort_records(
        &mut rows,
        SortSpec {
            column: Column::Region,
            order: SortOrder::Ascending,
        },
    );
    assert_eq!(names(&rows), ["Japan", "Germany", "Belgium", "Kiribati", "Unknown"]);
}

#[test]
fn regions_are_distinct_in_first_seen_order() {
    assert_eq!(
        distinct_regions(&sample()),
        ["Europe", "Asia", "Oceania", "Unknown"]
    );
}

#[test]
fn table_view_filters_then_sorts() {
    let mut view = TableView::new(sample());
    assert_eq!(view.displayed().len(), 5);
    assert_eq!(view.region_options()[0], RegionFilter::All);

    view.set_region(RegionFilter::Region("Europe".into()));
    view.set_sort(SortSpec {
        column: Column::Languages,
        order: SortOrder::Descending,
    });
    assert_eq!(names(view.displayed()), ["Belgium", "Germany"]);
    assert_eq!(view.source().len(), 5);

    view.set_region(RegionFilter::All);
    assert_eq!(view.displayed().len(), 5);
    assert_eq!(view.displayed()[0].name, "Belgium");
}

#[test]
fn source_keeps_fetch_order_under_filter_and_sort() {
    let mut view = TableView::new(sample());
    view.set_sort(SortSpec {
        column: Column::Population,
        order: SortOrder::Descending,
    });
    view.set_region(RegionFilter::Region("Asia".into()));
    assert_eq!(names(view.displayed()), ["Japan"]);
    assert_eq!(
        names(view.source()),
        ["Germany", "Japan", "Belgium", "Kiribati", "Unknown"]
    );
}

#[test]
fn blank_region_is_selectable() {
    let mut rows = sample();
    rows.push(CountryRecord {
        region: String::new(),
        ..testland()
    });
    let options = TableView::new(rows.clone()).region_options();
    let blank = RegionFilter::parse(RegionFilter::BLANK_LABEL);
    assert_eq!(options.last(), Some(&blank));
    assert_eq!(blank.label(), "(blank)");

    filter_region(&mut rows, &blank);
    assert_eq!(names(&rows), ["Testland"]);
}
