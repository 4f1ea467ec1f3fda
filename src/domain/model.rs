use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// 後端更新時會把未送出的欄位寫成 null；這裡把 null 當成預設值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 農地。`id` 由伺服器指定，建立時一律不送出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub farmer_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crop_type: String,
    /// hectares
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_planted: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<f64>,
}

impl Farm {
    pub fn new(
        farmer_id: i64,
        name: impl Into<String>,
        crop_type: impl Into<String>,
        area: f64,
    ) -> Self {
        Self {
            id: None,
            farmer_id,
            name: name.into(),
            crop_type: crop_type.into(),
            area,
            latitude: None,
            longitude: None,
            soil_type: None,
            irrigation_type: None,
            last_planted: None,
            expected_yield: None,
        }
    }

    /// Copy of this farm without its identifier, as sent in a create request.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// 部分更新：只序列化有值的欄位
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_planted: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<f64>,
}

impl FarmPatch {
    pub fn is_empty(&self) -> bool {
        *self == FarmPatch::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
}

impl Farmer {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FarmerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_farm_wire_names_are_camel_case() {
        let mut farm = Farm::new(1, "Mysuru Fields", "Sugarcane", 50.0);
        farm.id = Some(1);
        farm.soil_type = Some("Loam".to_string());
        farm.last_planted = NaiveDate::from_ymd_opt(2025, 6, 15);

        let value = serde_json::to_value(&farm).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "farmerId": 1,
                "name": "Mysuru Fields",
                "cropType": "Sugarcane",
                "area": 50.0,
                "soilType": "Loam",
                "lastPlanted": "2025-06-15"
            })
        );
    }

    #[test]
    fn test_farm_without_id_drops_identifier() {
        let mut farm = Farm::new(1, "Test", "Rice", 10.0);
        farm.id = Some(999);

        let value = serde_json::to_value(farm.without_id()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Test");
    }

    #[test]
    fn test_farm_deserializes_server_nulls() {
        let farm: Farm = serde_json::from_value(json!({
            "id": 7,
            "farmerId": 1,
            "name": "Hassan Valley",
            "cropType": "Ragi",
            "area": 75,
            "latitude": null,
            "longitude": null,
            "soilType": null,
            "irrigationType": "Flood",
            "lastPlanted": null,
            "expectedYield": 3.1
        }))
        .unwrap();

        assert_eq!(farm.id, Some(7));
        assert_eq!(farm.area, 75.0);
        assert_eq!(farm.latitude, None);
        assert_eq!(farm.irrigation_type.as_deref(), Some("Flood"));
        assert_eq!(farm.expected_yield, Some(3.1));
    }

    #[test]
    fn test_required_farm_fields_tolerate_null() {
        let farm: Farm = serde_json::from_value(json!({
            "id": 3,
            "farmerId": null,
            "name": null,
            "cropType": "Cotton",
            "area": null,
            "soilType": null
        }))
        .unwrap();

        assert_eq!(farm.id, Some(3));
        assert_eq!(farm.farmer_id, 0);
        assert_eq!(farm.name, "");
        assert_eq!(farm.crop_type, "Cotton");
        assert_eq!(farm.area, 0.0);
    }

    #[test]
    fn test_unknown_server_fields_are_ignored() {
        let farmer: Farmer = serde_json::from_value(json!({
            "id": 1,
            "name": "Rajesh Kumar",
            "location": null,
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(farmer, Farmer {
            id: Some(1),
            name: "Rajesh Kumar".to_string(),
            location: String::new(),
        });
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = FarmerPatch {
            location: Some("Mysuru".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"location": "Mysuru"})
        );
        assert!(!patch.is_empty());
        assert!(FarmPatch::default().is_empty());
    }
}
