//! Platform detection helpers.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browser user agent, when running inside one.
#[cfg(target_arch = "wasm32")]
pub fn user_agent_string() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().user_agent().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn user_agent_string() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_tests_run_on_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert_eq!(Platform::current().to_string(), "desktop");
        assert!(user_agent_string().is_none());
    }
}
