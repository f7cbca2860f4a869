/// Anything listed in a table that can be filtered by its display name
pub trait Named {
    fn display_name(&self) -> &str;
}

/// Case-insensitive substring match on the display name.
/// An empty (or blank) query keeps everything.
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.display_name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl Named for Row {
        fn display_name(&self) -> &str {
            self.0
        }
    }

    fn names(rows: Vec<&Row>) -> Vec<&'static str> {
        rows.into_iter().map(|r| r.0).collect()
    }

    #[test]
    fn blank_query_keeps_every_row() {
        let rows = [Row("Shoes"), Row("Hats")];
        assert_eq!(names(filter_by_name(&rows, "   ")), vec!["Shoes", "Hats"]);
    }

    #[test]
    fn match_ignores_case() {
        let rows = [Row("Summer Shoes"), Row("Hats"), Row("SHOE polish")];
        assert_eq!(
            names(filter_by_name(&rows, "shoe")),
            vec!["Summer Shoes", "SHOE polish"]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        let rows = [Row("Hats")];
        assert!(filter_by_name(&rows, "gloves").is_empty());
    }
}
