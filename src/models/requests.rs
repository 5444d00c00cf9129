use crate::models::DraftLocation;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a location
///
/// Every field is optional at the serde level so that a missing field lands
/// in validation (one fixed 400) instead of failing deserialization with a
/// different error shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(required, range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[validate(required, length(min = 1))]
    pub address: Option<String>,
}

impl CreateLocationRequest {
    /// Convert into a draft once validation has passed
    ///
    /// Returns `None` if any field is absent, so callers never unwrap.
    pub fn into_draft(self) -> Option<DraftLocation> {
        Some(DraftLocation {
            name: self.name?,
            latitude: self.latitude?,
            longitude: self.longitude?,
            address: self.address?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateLocationRequest {
        CreateLocationRequest {
            name: Some("Home".to_string()),
            latitude: Some(10.0),
            longitude: Some(20.0),
            address: Some("1 Main St".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fail() {
        let request: CreateLocationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
        assert!(request.into_draft().is_none());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut request = valid_request();
        request.name = Some(String::new());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_latitude_out_of_range_fails() {
        let mut request = valid_request();
        request.latitude = Some(90.5);
        assert!(request.validate().is_err());
        request.latitude = Some(-91.0);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_longitude_out_of_range_fails() {
        let mut request = valid_request();
        request.longitude = Some(180.5);
        assert!(request.validate().is_err());
        request.longitude = Some(-181.0);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_boundary_coordinates_pass() {
        let mut request = valid_request();
        request.latitude = Some(90.0);
        request.longitude = Some(-180.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_draft_carries_all_fields() {
        let draft = valid_request().into_draft().unwrap();
        assert_eq!(draft.name, "Home");
        assert_eq!(draft.latitude, 10.0);
        assert_eq!(draft.longitude, 20.0);
        assert_eq!(draft.address, "1 Main St");
    }
}
