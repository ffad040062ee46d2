use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::generation::tone::{ConversationContext, DesiredTone};

/// Request body for `POST /generate_responses`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponseRequest {
    pub user_id: String,
    /// The message received from the other person. Passed to the model as-is.
    pub incoming_message: String,
    #[serde(default)]
    pub conversation_context_type: ConversationContext,
    pub desired_tones: Vec<DesiredTone>,
}

/// Tone label (as written by the model) → candidate replies.
///
/// Serializes as a JSON object in first-seen label order. A repeated label
/// replaces the earlier options but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedOptions {
    entries: Vec<(String, Vec<String>)>,
}

impl GeneratedOptions {
    pub fn insert(&mut self, label: String, options: Vec<String>) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = options,
            None => self.entries.push((label, options)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, o)| o.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of reply candidates across all labels.
    pub fn option_count(&self) -> usize {
        self.entries.iter().map(|(_, o)| o.len()).sum()
    }
}

impl Serialize for GeneratedOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, options) in &self.entries {
            map.serialize_entry(label, options)?;
        }
        map.end()
    }
}

/// Response body for `POST /generate_responses`.
#[derive(Debug, Serialize)]
pub struct GenerateResponseBody {
    pub options: GeneratedOptions,
}
