use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{EventStatus, RoleName, UserStatus};

/// Query-string rendering for list and report filters. Empty values are skipped.
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim)
        && !value.is_empty()
    {
        pairs.push((key, value.to_string()));
    }
}

fn push_display<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EventFilters {
    pub search: Option<String>,
    #[validate(range(min = 1, message = "page must be >= 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

impl QueryParams for EventFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "search", &self.search);
        push_display(&mut pairs, "page", self.page);
        push_display(&mut pairs, "limit", self.limit);
        pairs
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserFilters {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<RoleName>,
    #[validate(range(min = 1, message = "page must be >= 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

impl QueryParams for UserFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name", &self.name);
        push_text(&mut pairs, "email", &self.email);
        push_display(&mut pairs, "role", self.role.map(|role| role.as_str()));
        push_display(&mut pairs, "page", self.page);
        push_display(&mut pairs, "limit", self.limit);
        pairs
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserReportFilters {
    pub role: Option<RoleName>,
    pub status: Option<UserStatus>,
    pub created_after: Option<NaiveDate>,
}

impl QueryParams for UserReportFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_display(&mut pairs, "role", self.role.map(|role| role.as_str()));
        push_display(&mut pairs, "status", self.status.map(|status| status.as_str()));
        push_display(&mut pairs, "createdAfter", self.created_after);
        pairs
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventReportFilters {
    pub status: Option<EventStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl QueryParams for EventReportFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_display(&mut pairs, "status", self.status.map(|status| status.as_str()));
        push_display(&mut pairs, "startDate", self.start_date);
        push_display(&mut pairs, "endDate", self.end_date);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_filters_skip_empty_values() {
        let filters = EventFilters {
            search: Some("   ".to_string()),
            page: Some(2),
            limit: None,
        };
        assert_eq!(filters.query_pairs(), vec![("page", "2".to_string())]);
    }

    #[test]
    fn test_user_filters_render_role() {
        let filters = UserFilters {
            name: Some(" ada ".to_string()),
            role: Some(RoleName::Judge),
            ..Default::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("name", "ada".to_string()), ("role", "JUDGE".to_string())]
        );
    }

    #[test]
    fn test_report_filters_use_api_keys() {
        let filters = EventReportFilters {
            status: Some(EventStatus::InProgress),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("status", "IN_PROGRESS".to_string()),
                ("startDate", "2025-01-01".to_string())
            ]
        );
    }

    #[test]
    fn test_pagination_bounds() {
        let filters = EventFilters {
            limit: Some(500),
            ..Default::default()
        };
        assert!(filters.validate().is_err());

        let filters = EventFilters {
            page: Some(1),
            limit: Some(100),
            ..Default::default()
        };
        assert!(filters.validate().is_ok());
    }
}
