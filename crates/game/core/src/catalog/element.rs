/// Elemental category of an attack.
///
/// `Primary` and `Secondary` draw on their own energy pool; `Combined`
/// draws half its cost from each.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ElementKind {
    Primary,
    Secondary,
    Combined,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
