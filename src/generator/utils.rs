use std::{borrow::Borrow, cmp::Ordering, path::Path};

use chrono::NaiveDate;

use super::data::PostRecord;

/// Newest first. Dates are compared as plain strings, so only sortable
/// formats such as `YYYY-MM-DD` give calendar order.
pub(super) fn sort_post<T: Borrow<PostRecord>>(a: &T, b: &T) -> Ordering {
    b.borrow().date.cmp(&a.borrow().date)
}

/// Whether `date` sorts in calendar order under [`sort_post`].
pub(super) fn is_sortable_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() && date.len() == 10
}

pub(super) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

pub(super) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

pub(super) fn is_template(file_name: &str) -> bool {
    file_name.to_uppercase().starts_with("TEMPLATE")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, date: &str) -> PostRecord {
        PostRecord {
            id: id.to_string(),
            title: String::new(),
            subtitle: String::new(),
            category: String::new(),
            date: date.to_string(),
            read_time: String::new(),
            excerpt: String::new(),
            markdown_file: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn sorts_newest_first() {
        let mut posts = vec![
            post("a", "2024-01-01"),
            post("b", "2023-06-15"),
            post("c", "2024-06-01"),
        ];

        posts.sort_by(sort_post);

        let dates: Vec<_> = posts.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2024-06-01", "2024-01-01", "2023-06-15"]);
    }

    #[test]
    fn equal_dates_keep_discovery_order() {
        let mut posts = vec![post("a", "2024-01-01"), post("b", ""), post("c", "2024-01-01")];

        posts.sort_by(sort_post);

        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn comparison_is_lexicographic_not_calendar() {
        // "9/1/2023" > "12/1/2023" as strings
        let mut posts = vec![post("dec", "12/1/2023"), post("sep", "9/1/2023")];

        posts.sort_by(sort_post);

        assert_eq!(posts[0].id, "sep");
    }

    #[test]
    fn recognizes_sortable_dates() {
        assert!(is_sortable_date("2024-06-01"));
        assert!(!is_sortable_date("2024-6-1"));
        assert!(!is_sortable_date("June 1, 2024"));
        assert!(!is_sortable_date("2024-02-30"));
    }

    #[test]
    fn template_check_ignores_case() {
        assert!(is_template("TEMPLATE.md"));
        assert!(is_template("template-post.md"));
        assert!(is_template("Template_draft.md"));
        assert!(!is_template("my-template.md"));
    }
}
