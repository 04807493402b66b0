use crate::variant::VariantSet;

/// Visual style of a text input.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "input variant")]
pub enum InputVariant {
    /// Bordered field.
    #[default]
    Default,
    /// Tinted background, no border.
    Filled,
    /// Bottom border only.
    Underline,
    /// No chrome until focused.
    Ghost,
}
