use crate::constants;
use std::path::PathBuf;

/// Runtime configuration, constructed once at startup and passed by
/// reference into the components that need it.
#[derive(Debug, Clone)]
pub struct Options {
    /// Backend endpoint address
    pub endpoint: String,
    /// User role used for backend authorization
    pub user: String,
    /// Group role used for backend authorization
    pub group: String,
    /// Perform rollbacks instead of only printing the plan
    pub execute: bool,
    /// Input file containing the stuck-upload records
    pub input: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            endpoint: String::from(constants::DEFAULT_ENDPOINT),
            user: String::from(constants::DEFAULT_ROLE),
            group: String::from(constants::DEFAULT_ROLE),
            execute: false,
            input: PathBuf::from(constants::DEFAULT_INPUT),
        }
    }
}

/// Builder for Options
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.options.endpoint = endpoint.into();
        self
    }

    pub fn user<S: Into<String>>(mut self, user: S) -> Self {
        self.options.user = user.into();
        self
    }

    pub fn group<S: Into<String>>(mut self, group: S) -> Self {
        self.options.group = group.into();
        self
    }

    pub fn execute(mut self, execute: bool) -> Self {
        self.options.execute = execute;
        self
    }

    pub fn input<P: Into<PathBuf>>(mut self, input: P) -> Self {
        self.options.input = input.into();
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_dry_run() {
        let options = Options::default();
        assert!(!options.execute);
        assert_eq!(options.endpoint, constants::DEFAULT_ENDPOINT);
        assert_eq!(options.user, "root");
        assert_eq!(options.group, "root");
    }

    #[test]
    fn test_builder() {
        let options = OptionsBuilder::new()
            .endpoint("http://store.example:1094")
            .user("ops")
            .group("ops")
            .execute(true)
            .input("/tmp/records")
            .build();
        assert_eq!(options.endpoint, "http://store.example:1094");
        assert_eq!(options.user, "ops");
        assert!(options.execute);
        assert_eq!(options.input, PathBuf::from("/tmp/records"));
    }
}
