//! YTD totals table.

use dioxus::prelude::*;
use ink_stats::{
    stats::{Activity, YtdStats},
    units::format_distance,
};

#[derive(Props, Clone, PartialEq)]
pub struct StatsTableProps {
    pub stats: YtdStats,
}

/// One column per activity: heading, count, then distance in miles.
#[component]
pub fn StatsTable(props: StatsTableProps) -> Element {
    let year = props.stats.year;
    let columns: Vec<(&'static str, u32, String)> = Activity::ALL
        .iter()
        .map(|&activity| {
            let totals = props.stats.totals(activity);
            (activity.label(), totals.count, format_distance(totals.distance))
        })
        .collect();
    let headings = columns.clone();
    let counts = columns.clone();

    rsx! {
        table {
            class: "table",
            style: "border-collapse: collapse; margin: 12px 0; min-width: 320px;",
            thead {
                tr {
                    th {
                        colspan: "3",
                        style: "text-align: left; border-bottom: 2px solid currentColor;",
                        "{year}"
                    }
                }
                tr {
                    for (label, _, _) in headings {
                        th { key: "{label}", style: "text-align: left; padding: 4px 8px;", "{label}" }
                    }
                }
            }
            tbody {
                tr {
                    for (label, count, _) in counts {
                        td { key: "{label}", style: "padding: 4px 8px;", "{count}" }
                    }
                }
                tr {
                    for (label, _, distance) in columns {
                        td { key: "{label}", style: "padding: 4px 8px; font-size: 1.4em;", "{distance}" }
                    }
                }
            }
        }
    }
}
