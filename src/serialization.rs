use super::{ParsedName, Warning};
use serde::{Serialize, Serializer};

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl ParsedName {
    /// All six fields plus the warning messages, as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title.as_str(),
            "first": self.first.as_str(),
            "middle": self.middle.as_str(),
            "last": self.last.as_str(),
            "nick": self.nick.as_str(),
            "suffix": self.suffix.as_str(),
            "error": self.error.iter().map(Warning::to_string).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_name, ParseOptions};

    #[test]
    fn to_json() {
        let parsed = ParsedName::parse("Davis, Sammy, Jr.");
        assert_eq!(
            serde_json::json!({
                "title": "",
                "first": "Sammy",
                "middle": "",
                "last": "Davis",
                "nick": "",
                "suffix": "Jr.",
                "error": [],
            }),
            parsed.to_json()
        );
    }

    #[test]
    fn serialize_matches_to_json() {
        let parsed = parse_name(None, &ParseOptions::default());
        let serialized = serde_json::to_value(&parsed).unwrap();
        assert_eq!(parsed.to_json(), serialized);
        assert_eq!(serde_json::json!(["Error: No input"]), serialized["error"]);
    }

    #[test]
    fn options_round_trip() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"fix_case": "all", "fix_case_override": true}"#).unwrap();
        assert_eq!(ParseOptions::new().with_fix_case_override(true), options);
    }
}
