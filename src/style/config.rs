use smart_default::SmartDefault;

/// Knobs of the [`JocumentStyle`](super::JocumentStyle).
#[derive(Debug, Clone, PartialEq, SmartDefault)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StyleConfig {
    /// Text of the link leading from a listing entry back to the reference
    #[default = "&#8629;"]
    pub return_glyph: String,
    #[default = "<ol>"]
    pub list_start: String,
    #[default = "</ol>"]
    pub list_end: String,
    /// Inline css of a label caption `div`
    #[default = "text-align: center;font-style: italic;font-size: smaller;padding: 0px;margin: 0 auto;width: 50%;"]
    pub caption_css: String,
}
