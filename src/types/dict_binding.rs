use serde_derive::Serialize;

/// A dictionary a generated view has to load.
///
/// Field order drives the derived `Ord`, so sets of bindings iterate by type first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DictBinding {
    #[serde(rename = "type")]
    pub dict_type: String,
    pub name: String, // camelCase of dict_type
    /// Loaded on mount rather than on first use by the list view.
    pub immediate: bool,
}
