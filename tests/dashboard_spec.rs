use launchdeck::dashboard::{self, charts};
use launchdeck::dataset::Dataset;
use launchdeck::models::*;
use speculate2::speculate;

const FIXTURE: &str = include_str!("fixtures/launches.csv");

fn years(start: i32, end: i32) -> YearRange {
    YearRange::new(start, end).expect("valid range")
}

fn filtered(dataset: &Dataset, selection: &FilterSelection) -> usize {
    dashboard::filter_launches(dataset.records(), selection, dataset.year_bounds()).len()
}

speculate! {
    before {
        let dataset = Dataset::from_reader(FIXTURE.as_bytes()).expect("Failed to load fixture");
    }

    describe "filter_launches" {
        it "returns every row for an empty selection" {
            assert_eq!(filtered(&dataset, &FilterSelection::all()), 12);
        }

        it "filters by country" {
            let selection = FilterSelection::all().with_countries(["USA"]);
            assert_eq!(filtered(&dataset, &selection), 5);
        }

        it "filters by several companies" {
            let selection = FilterSelection::all().with_companies(["SpaceX", "NASA"]);
            assert_eq!(filtered(&dataset, &selection), 4);
        }

        it "includes both ends of the year range" {
            let selection = FilterSelection::all().with_years(years(1969, 1970));
            assert_eq!(filtered(&dataset, &selection), 3);
        }

        it "never grows as the filter narrows" {
            let steps = [
                FilterSelection::all(),
                FilterSelection::all().with_years(years(1960, 2020)),
                FilterSelection::all()
                    .with_years(years(1960, 2020))
                    .with_countries(["USA", "China"]),
                FilterSelection::all()
                    .with_years(years(1960, 2020))
                    .with_countries(["USA"]),
                FilterSelection::all()
                    .with_years(years(2000, 2020))
                    .with_countries(["USA"]),
                FilterSelection::all()
                    .with_years(years(2000, 2020))
                    .with_countries(["USA"])
                    .with_companies(["SpaceX"]),
            ];
            let counts: Vec<usize> = steps.iter().map(|s| filtered(&dataset, s)).collect();
            assert!(counts.windows(2).all(|w| w[1] <= w[0]), "counts grew: {:?}", counts);
            assert_eq!(counts, vec![12, 9, 6, 4, 2, 2]);
        }

        it "does not change the dataset" {
            let before = dataset.records().to_vec();
            let selection = FilterSelection::all().with_countries(["Russia"]);
            let _ = dashboard::build_view(&dataset, &selection);
            assert_eq!(dataset.records(), before.as_slice());
        }
    }

    describe "aggregates" {
        it "sums launches per year to the filtered total" {
            let rows = dashboard::filter_launches(dataset.records(), &FilterSelection::all(), dataset.year_bounds());
            let per_year = dashboard::launches_per_year(&rows);
            assert_eq!(per_year.iter().map(|c| c.launches).sum::<u64>(), 12);
            let order: Vec<i32> = per_year.iter().map(|c| c.year).collect();
            assert_eq!(order, vec![1957, 1969, 1970, 1990, 2005, 2020]);
        }

        it "ranks countries by launches" {
            let rows = dashboard::filter_launches(dataset.records(), &FilterSelection::all(), dataset.year_bounds());
            let counts = dashboard::country_counts(&rows);
            assert_eq!(counts.iter().map(|c| c.total).sum::<u64>(), 12);
            assert_eq!(counts[0].country, "USA");
            assert_eq!(counts[0].total, 5);
            assert_eq!(counts[1].country, "China");
            assert_eq!(counts[2].country, "Kazakhstan");
        }

        it "counts outcomes for every row with a status" {
            let rows = dashboard::filter_launches(dataset.records(), &FilterSelection::all(), dataset.year_bounds());
            let outcomes = dashboard::mission_outcomes(&rows);
            let missing = rows.iter().filter(|r| r.mission_status.is_none()).count() as u64;
            assert_eq!(outcomes.iter().map(|o| o.count).sum::<u64>() + missing, 12);
        }
    }

    describe "kpis" {
        it "summarises the full table" {
            let kpis = dashboard::build_kpis(&dataset, &FilterSelection::all());
            assert_eq!(kpis.total_launches, 12);
            assert_eq!(kpis.total_successes, 8);
            assert_eq!(kpis.success_rate, Some(66.67));
            assert_eq!(kpis.active_rockets, 5);
        }

        it "recomputes for a selection" {
            let kpis = dashboard::build_kpis(&dataset, &FilterSelection::all().with_countries(["USA"]));
            assert_eq!(kpis.total_launches, 5);
            assert_eq!(kpis.total_successes, 3);
            assert_eq!(kpis.success_rate_label(), "60.0%");
            assert_eq!(kpis.active_rockets, 2);
        }

        it "reports no rate when nothing matches" {
            let kpis = dashboard::build_kpis(&dataset, &FilterSelection::all().with_countries(["Japan"]));
            assert_eq!(kpis.total_launches, 0);
            assert_eq!(kpis.success_rate, None);
            assert_eq!(kpis.success_rate_label(), "N/A");
        }

        it "zeroes status KPIs when the columns are absent" {
            let bare = Dataset::from_reader("Company Name,Country,Year\nSpaceX,USA,2020\nNASA,USA,1969\n".as_bytes())
                .expect("Failed to load");
            let kpis = dashboard::build_kpis(&bare, &FilterSelection::all());
            assert_eq!(kpis.total_launches, 2);
            assert_eq!(kpis.total_successes, 0);
            assert_eq!(kpis.success_rate_label(), "0.0%");
            assert_eq!(kpis.active_rockets, 0);
        }
    }

    describe "build_view" {
        it "builds all three charts" {
            let view = dashboard::build_view(&dataset, &FilterSelection::all());
            assert_eq!(view.filtered_rows, 12);
            assert_eq!(view.debug, "Filtered rows: 12");
            assert_eq!(view.cards[2], KpiCard::new("Success rate", "66.67%"));
            assert_eq!(view.launches_time.title(), charts::LAUNCHES_TITLE);
            assert_eq!(view.top_countries.title(), charts::TOP_COUNTRIES_TITLE);
            assert_eq!(view.missions_outcomes.title(), charts::OUTCOMES_TITLE);
        }

        it "stacks outcome traces in first appearance order" {
            let view = dashboard::build_view(&dataset, &FilterSelection::all());
            let names: Vec<_> = view
                .missions_outcomes
                .data
                .iter()
                .filter_map(|t| t.name.as_deref())
                .collect();
            assert_eq!(names, vec!["Failure", "Success", "Partial Failure"]);
        }

        it "shows placeholders when nothing matches" {
            let selection = FilterSelection::all()
                .with_countries(["France"])
                .with_companies(["SpaceX"]);
            let view = dashboard::build_view(&dataset, &selection);
            assert_eq!(view.filtered_rows, 0);
            assert_eq!(view.debug, "Filtered rows: 0");
            for kind in ChartKind::ALL {
                let chart = view.chart(kind);
                assert!(chart.is_placeholder());
                assert_eq!(chart.title(), charts::NO_DATA_TITLE);
                assert!(!chart.layout.xaxis.visible);
                assert!(!chart.layout.yaxis.visible);
            }
        }

        it "reports outcomes unavailable when no row has a status" {
            let selection = FilterSelection::all().with_companies(["Rocket Lab"]);
            let view = dashboard::build_view(&dataset, &selection);
            assert_eq!(view.filtered_rows, 1);
            assert!(!view.launches_time.is_placeholder());
            assert_eq!(view.missions_outcomes.title(), charts::OUTCOMES_UNAVAILABLE_TITLE);
        }

        it "matches the single chart builder" {
            let selection = FilterSelection::all().with_years(years(1957, 1990));
            let view = dashboard::build_view(&dataset, &selection);
            for kind in ChartKind::ALL {
                assert_eq!(&dashboard::build_chart(&dataset, &selection, kind), view.chart(kind));
            }
        }
    }
}
