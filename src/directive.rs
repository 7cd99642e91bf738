//! Directive value objects
//!
//! A [`Directive`] is a single robots instruction (`noindex`, `nofollow`,
//! `max-snippet`, ...), optionally scoped to a bot and qualified by a
//! modification value. A [`DirectiveSet`] is the ordered collection that
//! forms one complete robots decision.
//!
//! Stored rule payloads arrive in three shapes: structured records, legacy
//! flat string lists, and JSON-serialized encodings of either. The
//! [`DirectivePayload`] boundary type captures that duality and
//! [`DirectivePayload::normalize`] collapses it to a [`DirectiveSet`] before
//! anything downstream has to care.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single robots instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Directive token, e.g. "noindex" or "max-snippet"
    pub value: String,

    /// Target user-agent; `None` applies to all bots
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,

    /// Qualifier value, e.g. "20" for "max-snippet: 20"
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification: Option<String>,
}

/// Stored records use `""` where this model uses `None`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Directive {
    /// Create an unscoped directive from its token
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            bot: None,
            modification: None,
        }
    }

    /// Scope this directive to a specific bot
    pub fn with_bot(mut self, bot: impl Into<String>) -> Self {
        self.bot = Some(bot.into());
        self
    }

    /// Attach a modification qualifier
    pub fn with_modification(mut self, modification: impl Into<String>) -> Self {
        self.modification = Some(modification.into());
        self
    }

    /// Render this directive into its wire form
    ///
    /// The token is uppercased; a modification is appended as `": <mod>"`
    /// and a bot scope is prepended as `"<bot>: "`.
    pub fn render(&self) -> String {
        let mut rendered = self.value.to_uppercase();
        if let Some(modification) = &self.modification {
            rendered = format!("{rendered}: {modification}");
        }
        if let Some(bot) = &self.bot {
            rendered = format!("{bot}: {rendered}");
        }
        rendered
    }
}

/// An ordered collection of directives representing one robots decision
///
/// An empty set means "explicitly no directives" and is distinct from
/// "not applicable", which callers express as `Option::None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectiveSet(Vec<Directive>);

impl DirectiveSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set of unscoped directives from plain tokens
    ///
    /// Empty tokens are dropped.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            values
                .into_iter()
                .map(Into::into)
                .filter(|v| !v.is_empty())
                .map(Directive::new)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append a directive, preserving order
    pub fn push(&mut self, directive: Directive) {
        self.0.push(directive);
    }

    /// The directives in declaration order
    pub fn directives(&self) -> &[Directive] {
        &self.0
    }

    /// Render the set into its wire/markup form, e.g. `"NOINDEX, NOFOLLOW"`
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(Directive::render)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a rendered string back into a set of unscoped directives
    ///
    /// The inverse of [`DirectiveSet::render`] for plain sets. Bot-scoped or
    /// qualified directives do not round-trip through this parser; their
    /// colon-separated parts are kept verbatim in the token.
    pub fn parse(rendered: &str) -> Self {
        Self(
            rendered
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| Directive::new(t.to_lowercase()))
                .collect(),
        )
    }
}

impl From<Vec<Directive>> for DirectiveSet {
    fn from(directives: Vec<Directive>) -> Self {
        Self(directives)
    }
}

impl FromIterator<Directive> for DirectiveSet {
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Stored directive payload in any of its attested shapes
///
/// Configuration data carries directives either as structured records, as a
/// legacy flat list of tokens, or as a JSON string encoding one of those
/// two. The shape is resolved at this boundary and never propagates past
/// [`DirectivePayload::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectivePayload {
    /// Structured records with `value`/`bot`/`modification` fields
    Structured(Vec<Directive>),
    /// Legacy flat list of directive tokens
    Legacy(Vec<String>),
    /// JSON-serialized encoding of either list shape
    Serialized(String),
}

impl Default for DirectivePayload {
    fn default() -> Self {
        DirectivePayload::Structured(Vec::new())
    }
}

impl DirectivePayload {
    /// Collapse the payload into the internal representation
    ///
    /// Malformed serialized strings and non-list decodings normalize to the
    /// empty set; a bad stored rule must never fail a page render.
    pub fn normalize(&self) -> DirectiveSet {
        match self {
            DirectivePayload::Structured(directives) => DirectiveSet(directives.clone()),
            DirectivePayload::Legacy(values) => DirectiveSet::from_values(values.clone()),
            DirectivePayload::Serialized(raw) => decode_serialized(raw),
        }
    }
}

/// Decode a JSON-serialized payload, discriminating the list shape by its
/// first element: a map carrying a `value` key marks the structured format.
fn decode_serialized(raw: &str) -> DirectiveSet {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) else {
        return DirectiveSet::new();
    };

    let structured = items
        .first()
        .is_some_and(|first| first.get("value").is_some());

    if structured {
        serde_json::from_value::<Vec<Directive>>(Value::Array(items))
            .map(DirectiveSet)
            .unwrap_or_default()
    } else {
        let values = items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_owned));
        DirectiveSet::from_values(values)
    }
}
