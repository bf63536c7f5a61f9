//! Unit tests for title resolution (src/titles.rs).

use navigation_tracker::titles::derive_title;
use navigation_tracker::TitleRegistry;

#[test]
fn test_finance_routes_get_readable_titles() {
    let mut titles = TitleRegistry::new();
    for (path, expected) in [
        ("/", "Home"),
        ("/accounts", "Accounts"),
        ("/transactions/recurring_payments", "Recurring Payments"),
        ("/budgets/monthly-plan?month=5", "Monthly Plan"),
    ] {
        assert_eq!(titles.resolve(path), expected, "title for {path}");
    }
    assert!(titles.is_empty());
}

#[test]
fn test_placeholders_without_capture_are_left_alone() {
    let mut titles = TitleRegistry::new();
    titles.register("/categories/:id", "Category {id} ({name})");
    assert_eq!(titles.resolve("/categories/3"), "Category 3 ({name})");
}

#[test]
fn test_derive_title_collapses_separators() {
    assert_eq!(derive_title("/reports/--cash__flow-"), "Cash Flow");
}
