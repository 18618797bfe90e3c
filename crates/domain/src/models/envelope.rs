use serde::{Deserialize, Serialize};

/// Every API response is wrapped as `{success, data, message}`; list endpoints may add `pagination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, alias = "pageSize")]
    pub limit: Option<u32>,
    #[serde(default, alias = "totalItems")]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl PaginationMeta {
    pub fn has_next(&self) -> bool {
        match (self.page, self.total_pages) {
            (Some(page), Some(total_pages)) => page < total_pages,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: Option<PaginationMeta>) -> Self {
        Self { items, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Named {
        name: String,
    }

    fn decode<T: DeserializeOwned>(body: &str) -> ApiEnvelope<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_envelope_decodes_payload_without_default() {
        let envelope: ApiEnvelope<Named> = decode(r#"{ "success": true, "data": { "name": "Demo" } }"#);
        assert_eq!(
            envelope.data,
            Some(Named {
                name: "Demo".to_string()
            })
        );

        let envelope: ApiEnvelope<Named> = decode(r#"{ "success": true }"#);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_without_data() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{ "success": false, "message": "Event is full" }"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Event is full"));
    }

    #[test]
    fn test_pagination_aliases() {
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(
            r#"{ "success": true, "data": [1, 2], "pagination": { "page": 1, "pageSize": 2, "totalItems": 5, "totalPages": 3 } }"#,
        )
        .unwrap();
        let pagination = envelope.pagination.unwrap();
        assert_eq!(pagination.limit, Some(2));
        assert_eq!(pagination.total, Some(5));
        assert!(pagination.has_next());
    }
}
