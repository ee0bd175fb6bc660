//! Listing order

use std::cmp::Reverse;
use std::str::FromStr;

use crate::entity::EntryInfo;
use crate::error::CommandError;

/// What listings are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Case-folded name
    #[default]
    Name,
    /// Creation timestamp
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortField {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "--sort-name" => Ok(SortField::Name),
            "created" | "--sort-created" => Ok(SortField::Created),
            _ => Err(CommandError::InvalidSort(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(CommandError::InvalidSort(s.to_string())),
        }
    }
}

/// Sorts `entries` in place.
///
/// Name keys are computed once per entry. For `Created`, entries are put
/// in name order before the stable timestamp sort, so entries with equal
/// timestamps always come out in name order.
pub fn sort_entries(entries: &mut [EntryInfo], field: SortField, order: SortOrder) {
    match (field, order) {
        (SortField::Name, SortOrder::Asc) => entries.sort_by_cached_key(EntryInfo::key),
        (SortField::Name, SortOrder::Desc) => entries.sort_by_cached_key(|e| Reverse(e.key())),
        (SortField::Created, order) => {
            entries.sort_by_cached_key(EntryInfo::key);
            entries.sort_by(|a, b| {
                let ordering = a.created_at.cmp(&b.created_at);
                match order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn entry(name: &str, offset_secs: i64) -> EntryInfo {
        EntryInfo {
            name: name.to_string(),
            description: String::new(),
            created_at: Utc::now() + Duration::seconds(offset_secs),
        }
    }

    fn names(entries: &[EntryInfo]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_parse_options() {
        assert_eq!("--sort-name".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!("--SORT-CREATED".parse::<SortField>(), Ok(SortField::Created));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert!("--sort-size".parse::<SortField>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut entries = vec![entry("beta", 0), entry("Alpha", 1), entry("gamma", 2)];
        sort_entries(&mut entries, SortField::Name, SortOrder::Asc);
        assert_eq!(names(&entries), ["Alpha", "beta", "gamma"]);

        sort_entries(&mut entries, SortField::Name, SortOrder::Desc);
        assert_eq!(names(&entries), ["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn test_sort_by_created() {
        let mut entries = vec![entry("old", -10), entry("new", 10), entry("mid", 0)];
        sort_entries(&mut entries, SortField::Created, SortOrder::Asc);
        assert_eq!(names(&entries), ["old", "mid", "new"]);

        sort_entries(&mut entries, SortField::Created, SortOrder::Desc);
        assert_eq!(names(&entries), ["new", "mid", "old"]);
    }

    #[test]
    fn test_created_ties_fall_back_to_name() {
        let at = Utc::now();
        let mut entries: Vec<EntryInfo> = ["c", "a", "b"]
            .iter()
            .map(|name| EntryInfo {
                name: name.to_string(),
                description: String::new(),
                created_at: at,
            })
            .collect();
        sort_entries(&mut entries, SortField::Created, SortOrder::Asc);
        assert_eq!(names(&entries), ["a", "b", "c"]);
    }

    #[test]
    fn test_name_desc_folds_case() {
        let mut entries = vec![
            entry("apple", 0),
            entry("Cherry", 1),
            entry("banana", 2),
            entry("BANANA2", 3),
        ];
        sort_entries(&mut entries, SortField::Name, SortOrder::Desc);
        assert_eq!(names(&entries), ["Cherry", "BANANA2", "banana", "apple"]);
    }

    #[test]
    fn test_created_desc_ties_stay_in_name_order() {
        let at = Utc::now();
        let mut entries = vec![entry("late", 60)];
        entries.extend(["b", "A"].iter().map(|name| EntryInfo {
            name: name.to_string(),
            description: String::new(),
            created_at: at,
        }));
        sort_entries(&mut entries, SortField::Created, SortOrder::Desc);
        assert_eq!(names(&entries), ["late", "A", "b"]);
    }
}
