use serde::{Deserialize, Serialize};

/// Properties shared by every component in the kit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseComponentProps {
    #[serde(default)]
    pub disabled: bool,
}

impl BaseComponentProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
