use workload_summary::aggregate::{aggregate_tabs, merge};
use workload_summary::classify::is_person_label;
use workload_summary::extract::{last_numeric_value, parse_numeric, round_to_cents};
use workload_summary::model::{PersonValueMap, RosterEntry, SummaryReport, Tab};
use workload_summary::reconcile::{is_reportable, merged_value, reconcile};

fn values(pairs: &[(&str, f64)]) -> PersonValueMap {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn person_labels_are_two_to_four_han_characters() {
    assert!(is_person_label("张三"));
    assert!(is_person_label("王小丽"));
    assert!(is_person_label("欧阳小明"));

    assert!(!is_person_label(""));
    assert!(!is_person_label("张"));
    assert!(!is_person_label("欧阳小明明"));
    assert!(!is_person_label("张三1"));
    assert!(!is_person_label("Sheet1"));
    assert!(!is_person_label("张 三"));
    assert!(!is_person_label("张三。"));
    assert!(!is_person_label("a张三"));
    assert!(!is_person_label("张三\n"));
}

#[test]
fn numeric_cells_must_be_numbers_in_full() {
    assert_eq!(parse_numeric(" 12.5 "), Some(12.5));
    assert_eq!(parse_numeric("-3"), Some(-3.0));
    assert_eq!(parse_numeric("1e2"), Some(100.0));
    assert_eq!(parse_numeric("合计:12"), None);
    assert_eq!(parse_numeric("12元"), None);
    assert_eq!(parse_numeric(""), None);
    assert_eq!(parse_numeric("   "), None);
    assert_eq!(parse_numeric("NaN"), None);
    assert_eq!(parse_numeric("inf"), None);
}

#[test]
fn last_numeric_value_scans_bottom_right_first() {
    let rows = grid(&[
        &["姓名", "工作量"],
        &["检验", "10", "20"],
        &["合计", "30", "备注"],
    ]);
    assert_eq!(last_numeric_value(&rows), Some(30.0));

    let rows = grid(&[&["1", "2"], &["3", "4"]]);
    assert_eq!(last_numeric_value(&rows), Some(4.0));
}

#[test]
fn last_numeric_value_ignores_trailing_blanks() {
    let compact = grid(&[&["项目", "数量"], &["合计", "7.5"]]);
    let padded = grid(&[
        &["项目", "数量"],
        &["合计", "7.5", "", "  "],
        &["", ""],
        &[],
        &["", "", ""],
    ]);
    assert_eq!(last_numeric_value(&compact), Some(7.5));
    assert_eq!(last_numeric_value(&padded), last_numeric_value(&compact));
}

#[test]
fn last_numeric_value_reports_not_found() {
    let rows = grid(&[&["姓名", "备注"], &["合计:12", "无"]]);
    assert_eq!(last_numeric_value(&rows), None);

    let empty: Vec<Vec<String>> = Vec::new();
    assert_eq!(last_numeric_value(&empty), None);
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_to_cents(12.3456), 12.35);
    assert_eq!(round_to_cents(0.125), 0.13);
    assert_eq!(round_to_cents(-0.125), -0.13);
    assert_eq!(round_to_cents(3.0), 3.0);
}

#[test]
fn aggregate_tabs_keeps_person_tabs_with_values() {
    let tabs = vec![
        Tab::new("封面", grid(&[&["2024年3月"]])),
        Tab::new("Sheet1", grid(&[&["99"]])),
        Tab::new("张三", grid(&[&["工作量"], &["12.3456"]])),
        Tab::new("李四", grid(&[&["暂无数据"]])),
        Tab::new("王五", grid(&[&["0"]])),
    ];

    let result = aggregate_tabs(tabs);

    assert_eq!(result, values(&[("张三", 12.35), ("王五", 0.0)]));
    assert!(!result.contains_key("李四"));
    assert!(!result.contains_key("封面"));
}

#[test]
fn merge_sums_values_per_name() {
    let first = values(&[("王小丽", 10.5)]);
    let second = values(&[("王小丽", 4.25), ("李明", 3.0)]);

    let merged = merge([first.clone(), second.clone()]);

    assert_eq!(merged, values(&[("王小丽", 14.75), ("李明", 3.0)]));
    assert_eq!(merged, merge([second, first]));
}

#[test]
fn merge_is_independent_of_file_order() {
    let files = [
        values(&[("张三", 0.1), ("李四", 1.1)]),
        values(&[("张三", 0.2), ("李四", 2.2)]),
        values(&[("张三", 0.3), ("李四", 3.3)]),
    ];
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        let merged = merge(order.iter().map(|&idx| files[idx].clone()));
        assert_eq!(merged, values(&[("张三", 0.6), ("李四", 6.6)]), "order {order:?}");
    }
}

#[test]
fn merge_of_nothing_is_empty() {
    assert!(merge(Vec::<PersonValueMap>::new()).is_empty());
}

#[test]
fn merge_keeps_literal_zero_contributions() {
    let merged = merge([values(&[("张三", 0.0)]), values(&[("张三", 2.5)])]);
    assert_eq!(merged, values(&[("张三", 2.5)]));

    let merged = merge([values(&[("李四", 0.0)])]);
    assert_eq!(merged.get("李四"), Some(&0.0));
}

#[test]
fn reconcile_follows_roster_order_and_team() {
    let roster = vec![RosterEntry::new("张三", "A1"), RosterEntry::new("李四", "A2")];
    let merged = values(&[("张三", 5.0)]);

    let rows = reconcile(&merged, &roster);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 1);
    assert_eq!(rows[0].name, "张三");
    assert_eq!(rows[0].team, "A1");
    assert_eq!(rows[0].value, 5.0);
    assert_eq!(rows[0].remark, "");
}

#[test]
fn reconcile_assigns_dense_indices_after_filtering() {
    let roster = vec![
        RosterEntry::new("赵一", "A"),
        RosterEntry::new("钱二", "A"),
        RosterEntry::new("孙三", "B"),
        RosterEntry::new("李四", "B"),
        RosterEntry::new("周五", "C"),
    ];
    let merged = values(&[
        ("赵一", 1.0),
        ("钱二", 0.0),
        ("李四", 2.0),
        ("周五", 3.5),
        ("外人", 9.0),
    ]);

    let rows = reconcile(&merged, &roster);

    let summary: Vec<(u32, &str, f64)> = rows
        .iter()
        .map(|row| (row.index, row.name.as_str(), row.value))
        .collect();
    assert_eq!(summary, vec![(1, "赵一", 1.0), (2, "李四", 2.0), (3, "周五", 3.5)]);
    assert!(rows.iter().all(|row| row.name != "外人"));
}

#[test]
fn reconcile_predicates_are_separate() {
    let merged = values(&[("张三", 0.0)]);
    assert_eq!(merged_value(&merged, &RosterEntry::new("张三", "A")), Some(0.0));
    assert_eq!(merged_value(&merged, &RosterEntry::new("李四", "A")), None);
    assert!(!is_reportable(0.0));
    assert!(is_reportable(-1.5));
}

#[test]
fn cancelling_contributions_are_excluded() {
    let merged = merge([
        values(&[("张三", 0.1), ("李四", 1.0)]),
        values(&[("张三", 0.2)]),
        values(&[("张三", -0.3)]),
    ]);
    assert_eq!(merged.get("张三"), Some(&0.0));

    let roster = vec![RosterEntry::new("张三", "A"), RosterEntry::new("李四", "B")];
    let rows = reconcile(&merged, &roster);

    assert_eq!(rows.len(), 1);
    assert_eq!((rows[0].index, rows[0].name.as_str()), (1, "李四"));
}

#[test]
fn duplicate_roster_names_each_get_a_row() {
    let roster = vec![RosterEntry::new("张三", "A"), RosterEntry::new("张三", "B")];
    let rows = reconcile(&values(&[("张三", 1.0)]), &roster);
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[1].index, rows[1].team.as_str()), (2, "B"));
}

#[test]
fn summary_report_totals_rows() {
    let roster = vec![RosterEntry::new("张三", "A"), RosterEntry::new("李四", "B")];
    let merged = values(&[("张三", 1.25), ("李四", 2.5)]);
    let report = SummaryReport::new(reconcile(&merged, &roster));
    assert_eq!(report.total, 3.75);
    assert!(SummaryReport::new(Vec::new()).is_empty());

    let roster: Vec<RosterEntry> = ["赵一", "钱二", "孙三"]
        .iter()
        .map(|name| RosterEntry::new(*name, "A"))
        .collect();
    let merged = values(&[("赵一", 0.1), ("钱二", 0.2), ("孙三", 0.3)]);
    assert_eq!(SummaryReport::new(reconcile(&merged, &roster)).total, 0.6);
}
