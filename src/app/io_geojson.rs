// Enrichment pass over the municipal boundaries GeoJSON: each feature whose
// NROBARRIO identifier is catalogued gains a BARRIO property with the
// official name.

use std::fs;

use log::warn;
use serde_json::json;
use serde_json::Value as JSValue;
use snafu::prelude::*;

use zone_normalizer::barrio_name;

use crate::app::*;

pub struct LabelStats {
    pub labeled: usize,
    pub unknown_id: usize,
    pub missing_key: usize,
}

pub fn label_features(path: &str, out_path: &str) -> AppResult<LabelStats> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let mut js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;

    let features = js
        .get_mut("features")
        .and_then(|f| f.as_array_mut())
        .context(MissingFeaturesSnafu { path })?;

    let mut stats = LabelStats {
        labeled: 0,
        unknown_id: 0,
        missing_key: 0,
    };
    for (idx, feature) in features.iter_mut().enumerate() {
        let props = match feature.get_mut("properties").and_then(|p| p.as_object_mut()) {
            Some(props) => props,
            None => {
                warn!("label_features: feature {} has no properties object", idx);
                stats.missing_key += 1;
                continue;
            }
        };
        let barrio_id = props.get("NROBARRIO").and_then(|v| v.as_u64());
        match barrio_id {
            Some(id) => match u32::try_from(id).ok().and_then(barrio_name) {
                Some(name) => {
                    props.insert("BARRIO".to_string(), json!(name));
                    stats.labeled += 1;
                }
                None => {
                    // Uncatalogued identifier: the feature keeps its
                    // properties as they were.
                    warn!(
                        "label_features: feature {} has uncatalogued NROBARRIO {}",
                        idx, id
                    );
                    stats.unknown_id += 1;
                }
            },
            None => {
                warn!(
                    "label_features: no NROBARRIO key in feature {}: {:?}",
                    idx, props
                );
                stats.missing_key += 1;
            }
        }
    }

    // Two-space indentation, non-ASCII written literally. This matches the
    // formatting of the upstream GIS exports.
    let pretty =
        serde_json::to_string_pretty(&js).context(SerializingJsonSnafu { path: out_path })?;
    fs::write(out_path, pretty).context(WritingOutputSnafu { path: out_path })?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_catalogued_features_and_reports_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("barrios.json");
        let out = dir.path().join("labeled.json");
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NROBARRIO": 4}, "geometry": null},
                {"type": "Feature", "properties": {"NROBARRIO": 999}, "geometry": null},
                {"type": "Feature", "properties": {"AREA": 1.5}, "geometry": null}
            ]
        });
        std::fs::write(&input, serde_json::to_string(&doc).unwrap()).unwrap();

        let stats = label_features(input.to_str().unwrap(), out.to_str().unwrap()).unwrap();
        assert_eq!(stats.labeled, 1);
        assert_eq!(stats.unknown_id, 1);
        assert_eq!(stats.missing_key, 1);

        let written = std::fs::read_to_string(&out).unwrap();
        let js: JSValue = serde_json::from_str(&written).unwrap();
        let features = js["features"].as_array().unwrap();
        assert_eq!(features[0]["properties"]["BARRIO"], json!("Cordón"));
        assert_eq!(features[1]["properties"].get("BARRIO"), None);
        assert_eq!(features[2]["properties"], json!({"AREA": 1.5}));
        // Accented names are written literally, not escaped.
        assert!(written.contains("Cordón"));
        // Pretty-printed with two-space indentation.
        assert!(written.contains("\n  \"features\""));
    }

    #[test]
    fn oversized_identifier_is_uncatalogued_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("barrios.json");
        let out = dir.path().join("labeled.json");
        // 4294967300 wraps to 4 in a 32-bit truncation; it must not come
        // back labeled as barrio 4.
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NROBARRIO": 4294967300u64}, "geometry": null}
            ]
        });
        std::fs::write(&input, serde_json::to_string(&doc).unwrap()).unwrap();

        let stats = label_features(input.to_str().unwrap(), out.to_str().unwrap()).unwrap();
        assert_eq!(stats.labeled, 0);
        assert_eq!(stats.unknown_id, 1);

        let written = std::fs::read_to_string(&out).unwrap();
        let js: JSValue = serde_json::from_str(&written).unwrap();
        assert_eq!(js["features"][0]["properties"].get("BARRIO"), None);
    }

    #[test]
    fn serialization_errors_name_the_output_path() {
        let source = serde_json::from_str::<JSValue>("not json").unwrap_err();
        let err = AppError::SerializingJson {
            source,
            path: "labeled.json".to_string(),
        };
        assert_eq!(format!("{}", err), "Error serializing labeled.json");
    }

    #[test]
    fn document_without_features_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.json");
        std::fs::write(&input, "{\"type\": \"FeatureCollection\"}").unwrap();
        let out = dir.path().join("labeled.json");

        let res = label_features(input.to_str().unwrap(), out.to_str().unwrap());
        assert!(matches!(res, Err(AppError::MissingFeatures { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("labeled.json");
        let res = label_features("/does/not/exist.json", out.to_str().unwrap());
        assert!(matches!(res, Err(AppError::OpeningJson { .. })));
    }
}
