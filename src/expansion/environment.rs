//! Active environment color lookup.

use crate::config::EnvironmentLink;

/// Badge color used when the active environment has no usable entry.
pub const DEFAULT_ENV_COLOR: &str = "#1e40af";

/// The entry named `active`. When several entries share the name, the last
/// one wins.
pub fn active_environment<'a>(
    environments: &'a [EnvironmentLink],
    active: &str,
) -> Option<&'a EnvironmentLink> {
    environments.iter().rev().find(|env| env.name == active)
}

/// Color of the environment named `active`, or [`DEFAULT_ENV_COLOR`].
pub fn resolve_env_color(environments: &[EnvironmentLink], active: &str) -> String {
    active_environment(environments, active)
        .map(|env| env.color.as_str())
        .filter(|color| !color.is_empty())
        .unwrap_or(DEFAULT_ENV_COLOR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(name: &str, color: &str) -> EnvironmentLink {
        EnvironmentLink {
            name: name.to_string(),
            url: format!("https://{name}.example.com"),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_matching_environment() {
        let envs = vec![env("prod", "#b91c1c"), env("staging", "#15803d")];
        assert_eq!(resolve_env_color(&envs, "staging"), "#15803d");
    }

    #[test]
    fn test_fallback_when_unmatched() {
        let envs = vec![env("prod", "#b91c1c")];
        assert_eq!(resolve_env_color(&envs, "qa"), DEFAULT_ENV_COLOR);
        assert_eq!(resolve_env_color(&[], ""), "#1e40af");
    }

    #[test]
    fn test_fallback_when_color_empty() {
        let envs = vec![env("prod", "")];
        assert_eq!(resolve_env_color(&envs, "prod"), DEFAULT_ENV_COLOR);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let envs = vec![env("prod", "#111111"), env("prod", "#222222")];
        assert_eq!(resolve_env_color(&envs, "prod"), "#222222");
    }
}
