//! TMAP wire models
//!
//! Only the fields the client reads are modelled; everything else in the
//! payloads is ignored.

use domain::entities::PlaceCandidate;
use serde::{Deserialize, Deserializer};

use crate::error::TmapError;

/// Envelope of `GET /tmap/pois`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiSearchResponse {
    pub search_poi_info: SearchPoiInfo,
}

/// Search metadata and the POI list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPoiInfo {
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub pois: Pois,
}

/// Wrapper object around the POI array
#[derive(Debug, Default, Deserialize)]
pub struct Pois {
    #[serde(default)]
    pub poi: Vec<Poi>,
}

/// One point of interest
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub name: Option<String>,
    pub upper_addr_name: Option<String>,
    pub middle_addr_name: Option<String>,
    pub lower_addr_name: Option<String>,
    pub detail_addr_name: Option<String>,
    pub first_no: Option<String>,
    pub second_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub noor_lat: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub noor_lon: f64,
}

impl From<Poi> for PlaceCandidate {
    fn from(poi: Poi) -> Self {
        Self {
            name: poi.name,
            upper_addr_name: poi.upper_addr_name,
            middle_addr_name: poi.middle_addr_name,
            lower_addr_name: poi.lower_addr_name,
            detail_addr_name: poi.detail_addr_name,
            first_no: poi.first_no,
            second_no: poi.second_no,
            latitude: poi.noor_lat,
            longitude: poi.noor_lon,
        }
    }
}

impl PoiSearchResponse {
    /// Convert the POI list into place candidates, keeping the API order
    pub fn into_candidates(self) -> Vec<PlaceCandidate> {
        self.search_poi_info
            .pois
            .poi
            .into_iter()
            .map(PlaceCandidate::from)
            .collect()
    }
}

/// Envelope of `GET /tmap/geo/reversegeocoding`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeResponse {
    pub address_info: Option<AddressInfo>,
}

/// Resolved address
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub full_address: Option<String>,
}

impl ReverseGeocodeResponse {
    /// The full address, if the service knows one
    ///
    /// A response without `addressInfo` carries no answer at all and is
    /// reported as [`TmapError::EmptyBody`].
    pub fn into_full_address(self) -> Result<Option<String>, TmapError> {
        self.address_info
            .map(|info| info.full_address)
            .ok_or(TmapError::EmptyBody)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// TMAP sends coordinates as strings; plain numbers are accepted too
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate: {text:?}"))),
    }
}

fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(NumberOrText::Number(value)) if value >= 0.0 => Some(value as u32),
        Some(NumberOrText::Text(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_poi_with_string_coordinates() {
        let json = r#"{
            "searchPoiInfo": {
                "totalCount": "1",
                "count": "1",
                "page": "1",
                "pois": {
                    "poi": [{
                        "id": "1",
                        "name": "Seoul Station",
                        "noorLat": "37.55",
                        "noorLon": "126.97",
                        "upperAddrName": "Seoul",
                        "middleAddrName": "Jung-gu",
                        "lowerAddrName": "Bongnaedong",
                        "detailAddrName": "",
                        "firstNo": "1",
                        "secondNo": ""
                    }]
                }
            }
        }"#;

        let response: PoiSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.search_poi_info.total_count, Some(1));
        let candidates = response.into_candidates();
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].latitude - 37.55).abs() < f64::EPSILON);
        assert_eq!(candidates[0].full_address(), "Seoul Jung-gu Bongnaedong  1");
    }

    #[test]
    fn test_parse_poi_with_numeric_coordinates() {
        let json = r#"{"name": null, "noorLat": 35.1, "noorLon": 129.04}"#;
        let poi: Poi = serde_json::from_str(json).unwrap();
        assert!((poi.noor_lon - 129.04).abs() < f64::EPSILON);

        let candidate = PlaceCandidate::from(poi);
        assert_eq!(candidate.building_name(), domain::BUILDING_NAME_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_coordinate_text_fails() {
        let json = r#"{"noorLat": "north", "noorLon": "126.97"}"#;
        assert!(serde_json::from_str::<Poi>(json).is_err());
    }

    #[test]
    fn test_missing_pois_is_empty() {
        let json = r#"{"searchPoiInfo": {"totalCount": "0"}}"#;
        let response: PoiSearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_candidates().is_empty());
    }

    #[test]
    fn test_reverse_geocode_address() {
        let json = r#"{"addressInfo": {"fullAddress": "Seoul Jung-gu Namdaemunno 5-ga", "addressType": "A10"}}"#;
        let response: ReverseGeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_full_address().unwrap().as_deref(),
            Some("Seoul Jung-gu Namdaemunno 5-ga")
        );
    }

    #[test]
    fn test_reverse_geocode_null_address() {
        let json = r#"{"addressInfo": {"fullAddress": null}}"#;
        let response: ReverseGeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_full_address().unwrap(), None);
    }

    #[test]
    fn test_reverse_geocode_missing_address_info() {
        let response: ReverseGeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_full_address(),
            Err(TmapError::EmptyBody)
        ));
    }

    #[test]
    fn test_poi_without_coordinates_defaults_to_zero() {
        let json = r#"{"name": "Namsan Tower", "upperAddrName": "Seoul"}"#;
        let poi: Poi = serde_json::from_str(json).unwrap();
        assert!(poi.noor_lat.abs() < f64::EPSILON);
        assert!(poi.noor_lon.abs() < f64::EPSILON);
    }
}
