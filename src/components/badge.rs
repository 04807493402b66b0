use crate::variant::VariantSet;

/// Visual style of a badge.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "badge variant")]
pub enum BadgeVariant {
    #[default]
    Solid,
    Outline,
    Soft,
    /// A bare status dot, without content.
    Dot,
    Gradient,
    Glass,
}

impl BadgeVariant {
    /// Whether the badge renders its content. Dots only show presence.
    pub fn shows_content(&self) -> bool {
        !matches!(self, Self::Dot)
    }
}
