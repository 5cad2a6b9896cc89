use serde::Serialize;

/// One parsed custom-feature line.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CustomFeature {
    pub name: String,
    pub hours: f64,
}

/// Parse free-text custom-feature lines of the form "name:hours",
/// separated by newlines or commas. A row is kept only if the name is
/// non-empty and the hours parse to a finite number greater than zero;
/// anything else is dropped without an error. Input order is preserved.
pub fn parse_features(text: &str) -> Vec<CustomFeature> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (name, hours_text) = segment.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            // Accept comma as decimal separator
            let hours: f64 = hours_text.trim().replace(',', ".").parse().ok()?;
            if !hours.is_finite() || hours <= 0.0 {
                return None;
            }
            Some(CustomFeature {
                name: name.to_string(),
                hours,
            })
        })
        .collect()
}
