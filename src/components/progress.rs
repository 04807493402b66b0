use crate::variant::VariantSet;

/// Status color of a progress bar.
#[derive(VariantSet, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[variant_set(kind = "progress variant")]
pub enum ProgressVariant {
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_variant_tags() {
        let tags: Vec<_> = ProgressVariant::tags().collect();
        assert_eq!(tags, ["default", "success", "warning", "error"]);
    }

    #[test]
    fn test_progress_variant_round_trips_through_display() {
        for variant in ProgressVariant::ALL {
            assert_eq!(variant.to_string().parse::<ProgressVariant>(), Ok(*variant));
        }
    }
}
