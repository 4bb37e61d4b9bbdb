use serde::{Deserialize, Serialize};

/// Messages a rendered preview posts back to the host.
/// Wire form: `{ "type": "navigate", "url": "/pricing" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PreviewMessage {
    Navigate { url: String },
}

impl PreviewMessage {
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigate() {
        let msg = PreviewMessage::parse(r#"{"type":"navigate","url":"/pricing"}"#).unwrap();
        assert_eq!(msg, PreviewMessage::Navigate { url: "/pricing".to_string() });
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(PreviewMessage::parse(r#"{"type":"resize","height":300}"#).is_err());
        assert!(PreviewMessage::parse("not json").is_err());
    }

    #[test]
    fn test_wire_format() {
        let msg = PreviewMessage::Navigate { url: "/".to_string() };
        assert_eq!(msg.to_json().unwrap(), r#"{"type":"navigate","url":"/"}"#);
    }
}
