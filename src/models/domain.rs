use serde::{Deserialize, Serialize};

/// A saved location with its public primary key
///
/// The `cuid` is minted by the service at creation time and is the only
/// identifier the API ever exposes. Storage-internal fields (`$id`,
/// `$createdAt`, version counters) never appear on this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub cuid: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// A location that has not been persisted yet
///
/// Same shape as `Location` minus the `cuid`, which is generated by the
/// service when the draft is inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// One suggestion produced by the external address-autocomplete widget
///
/// The widget itself is not part of this crate; these three outputs are all
/// the add-location form consumes from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_json_field_names() {
        let location = Location {
            cuid: "clf1q2w3e4r5t6y7u8i9o0p1".to_string(),
            name: "Home".to_string(),
            latitude: 10.0,
            longitude: 20.0,
            address: "1 Main St".to_string(),
        };

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["cuid"], "clf1q2w3e4r5t6y7u8i9o0p1");
        assert_eq!(json["name"], "Home");
        assert_eq!(json["latitude"], 10.0);
        assert_eq!(json["longitude"], 20.0);
        assert_eq!(json["address"], "1 Main St");
    }

    #[test]
    fn test_location_ignores_storage_internal_fields() {
        let raw = serde_json::json!({
            "cuid": "clf1q2w3e4r5t6y7u8i9o0p1",
            "name": "Office",
            "latitude": 52.1,
            "longitude": 4.3,
            "address": "2 Side St",
            "$id": "internal-id",
            "$createdAt": "2024-01-01T00:00:00Z",
        });

        let location: Location = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&location).unwrap();
        assert!(back.get("$id").is_none());
        assert!(back.get("$createdAt").is_none());
    }
}
