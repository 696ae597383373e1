//! Package manager detection from the invoking environment

use std::fmt;

/// Environment variable npm-compatible runners set for child processes
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Package managers that can launch the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Cnpm,
}

impl PackageManager {
    /// Detect the invoking package manager from `npm_config_user_agent`
    pub fn detect() -> Self {
        Self::from_user_agent(std::env::var(USER_AGENT_ENV).ok().as_deref())
    }

    /// Parse a user agent such as `pnpm/8.0.0 node/v18.0.0`.
    /// Falls back to npm when the agent is missing or unrecognized.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(user_agent) = user_agent else {
            return Self::Npm;
        };

        let specifier = user_agent.split(' ').next().unwrap_or_default();
        let name = specifier
            .rfind('/')
            .map(|idx| &specifier[..idx])
            .unwrap_or_default();

        match name {
            "yarn" => Self::Yarn,
            "pnpm" => Self::Pnpm,
            "bun" => Self::Bun,
            "npminstall" => Self::Cnpm,
            _ => Self::Npm,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
            Self::Cnpm => "cnpm",
        }
    }

    /// Command prefix for running package scripts
    pub fn run_command(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun run",
            Self::Npm | Self::Cnpm => "npm run",
        }
    }

    /// Command for installing dependencies
    pub fn install_command(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm install",
            Self::Bun => "bun install",
            Self::Npm | Self::Cnpm => "npm install",
        }
    }

    /// Command for executing package binaries (like create-* commands)
    pub fn exec_command(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn dlx",
            Self::Pnpm => "pnpm dlx",
            Self::Bun => "bunx",
            Self::Npm | Self::Cnpm => "npx",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_agent_defaults_to_npm() {
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
    }

    #[test]
    fn test_detects_from_user_agent() {
        let cases = [
            ("npm/9.0.0 node/v18.0.0", PackageManager::Npm),
            ("yarn/1.22.0 node/v18.0.0", PackageManager::Yarn),
            ("pnpm/8.0.0 node/v18.0.0", PackageManager::Pnpm),
            ("bun/1.0.0 node/v18.0.0", PackageManager::Bun),
            ("npminstall/7.0.0 node/v18.0.0", PackageManager::Cnpm),
        ];
        for (agent, expected) in cases {
            assert_eq!(PackageManager::from_user_agent(Some(agent)), expected, "{}", agent);
        }
    }

    #[test]
    fn test_unrecognized_user_agent_defaults_to_npm() {
        assert_eq!(PackageManager::from_user_agent(Some("")), PackageManager::Npm);
        assert_eq!(PackageManager::from_user_agent(Some("deno")), PackageManager::Npm);
        assert_eq!(
            PackageManager::from_user_agent(Some("volta/1.1.0 node/v20")),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(PackageManager::Npm.run_command(), "npm run");
        assert_eq!(PackageManager::Yarn.run_command(), "yarn");
        assert_eq!(PackageManager::Pnpm.run_command(), "pnpm");
        assert_eq!(PackageManager::Bun.run_command(), "bun run");

        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn");
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Bun.install_command(), "bun install");

        assert_eq!(PackageManager::Npm.exec_command(), "npx");
        assert_eq!(PackageManager::Yarn.exec_command(), "yarn dlx");
        assert_eq!(PackageManager::Pnpm.exec_command(), "pnpm dlx");
        assert_eq!(PackageManager::Bun.exec_command(), "bunx");
        assert_eq!(PackageManager::Cnpm.exec_command(), "npx");
    }
}
