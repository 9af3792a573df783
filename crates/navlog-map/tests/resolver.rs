use navlog_map::{HeaderResolver, resolve, resolve_table};
use navlog_model::{AliasTable, ColumnResolution, ColumnSpec};
use navlog_standards::load_builtin_alias_table;
use proptest::prelude::*;

fn spec(name: &str, aliases: &[&str]) -> ColumnSpec {
    ColumnSpec::new(name, aliases.iter().copied()).expect("valid column spec")
}

#[test]
fn alias_order_decides_not_column_order() {
    let latitude = spec("Latitude", &["latitude", "lat", "dvl_lat"]);
    // `dvl_lat` comes first in the file but `lat` is the higher-priority alias.
    let headers = ["dvl_lat", "lat", "time"];
    assert_eq!(
        resolve(&latitude, &headers),
        ColumnResolution::Resolved {
            header: "lat".to_string(),
            index: 1,
        }
    );
}

#[test]
fn lower_priority_alias_used_when_higher_absent() {
    let latitude = spec("Latitude", &["latitude", "lat", "dvl_lat"]);
    let headers = ["time", "dvl_lat"];
    assert_eq!(
        resolve(&latitude, &headers),
        ColumnResolution::Resolved {
            header: "dvl_lat".to_string(),
            index: 1,
        }
    );
}

#[test]
fn matching_ignores_case_and_padding() {
    let latitude = spec("Latitude", &["latitude"]);
    let resolution = resolve(&latitude, &["  LATITUDE "]);
    assert_eq!(resolution.header(), Some("  LATITUDE "));
    assert_eq!(resolution.source_index(), Some(0));
}

#[test]
fn duplicate_folded_headers_take_leftmost() {
    let depth = spec("Depth", &["depth"]);
    let headers = ["time", "Depth", "DEPTH"];
    assert_eq!(
        resolve(&depth, &headers),
        ColumnResolution::Resolved {
            header: "Depth".to_string(),
            index: 1,
        }
    );
}

#[test]
fn unknown_headers_leave_column_unresolved() {
    let depth = spec("Depth", &["depth", "paro_depth_m"]);
    assert_eq!(resolve(&depth, &["depth_m", "z"]), ColumnResolution::Unresolved);
    assert_eq!(resolve::<&str>(&depth, &[]), ColumnResolution::Unresolved);
}

#[test]
fn plan_reports_unresolved_without_row_id() {
    let aliases = load_builtin_alias_table().expect("built-in table");
    let headers = ["time", "dvl_lat", "dvl_lon", "paro_depth_m"];
    let plan = resolve_table(&aliases, &headers);

    assert_eq!(plan.columns.len(), aliases.len());
    assert_eq!(plan.resolved_count(), 4);
    let unresolved: Vec<&str> = plan.unresolved.iter().map(|name| name.as_str()).collect();
    assert!(!unresolved.contains(&"Row Name"));
    assert!(!unresolved.contains(&"Latitude"));
    assert_eq!(
        unresolved.iter().filter(|name| **name == "Conductivity").count(),
        1
    );
    assert_eq!(unresolved.len(), aliases.len() - 1 - 4);
}

#[test]
fn plan_follows_declared_order() {
    let aliases = AliasTable::new(
        "test",
        vec![spec("B", &["b"]), spec("A", &["a"])],
        None,
    )
    .expect("valid table");
    let plan = HeaderResolver::new(["a", "b"]).resolve_table(&aliases);
    let names: Vec<&str> = plan.columns.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
    assert_eq!(plan.columns[0].1.source_index(), Some(1));
    assert!(plan.unresolved.is_empty());
}

proptest! {
    /// Whatever the column order of the file, the highest-priority alias
    /// present in it is the one resolved.
    #[test]
    fn highest_priority_present_alias_wins(
        present in proptest::collection::vec(any::<bool>(), 4),
        order in Just((0usize..4).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let aliases = ["alpha", "beta", "gamma", "delta"];
        let column = spec("Value", &aliases);
        let headers: Vec<String> = order
            .iter()
            .filter(|index| present[**index])
            .map(|index| aliases[*index].to_uppercase())
            .collect();

        let expected = present.iter().position(|is_present| *is_present);
        let resolution = resolve(&column, &headers);
        match expected {
            Some(alias_index) => {
                let header = resolution.header().map(str::to_lowercase);
                prop_assert_eq!(header.as_deref(), Some(aliases[alias_index]));
            }
            None => prop_assert_eq!(resolution, ColumnResolution::Unresolved),
        }
    }
}
