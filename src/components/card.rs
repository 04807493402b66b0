use crate::variant::VariantSet;

/// Surface style of a card.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "card variant")]
pub enum CardVariant {
    #[default]
    Default,
    Bordered,
    /// Raised with a shadow.
    Elevated,
    /// Translucent blurred surface.
    Glass,
}
