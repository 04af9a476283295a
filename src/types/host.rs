use serde::{Deserialize, Serialize};

/// What the host environment knows about itself: the user-agent string and
/// the platform product hint (`"ReactNative"` inside a React Native app).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEnvironment {
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub product: Option<String>,
}

impl HostEnvironment {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            product: None,
        }
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }
}
