// environment_provider.rs - Environment variable abstraction
//
// Provides a trait for env var access so the icon rule set can be built
// from mock values in tests.

/// Trait for environment variable access.
/// Enables unit testing RuleSet construction without depending on actual env vars.
pub trait EnvironmentProvider {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  get_env_var
    //
    //  Returns the value of the named environment variable, if set.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn get_env_var(&self, name: &str) -> Option<String>;
}





/// Default implementation that reads from the actual process environment.
pub struct DefaultEnvironmentProvider;





////////////////////////////////////////////////////////////////////////////////
//
//  impl EnvironmentProvider for DefaultEnvironmentProvider
//
//  Reads the named environment variable from the process environment.
//  Values that are not valid Unicode are treated as unset.
//
////////////////////////////////////////////////////////////////////////////////

impl EnvironmentProvider for DefaultEnvironmentProvider {
    fn get_env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}





/// Mock implementation for unit tests.
/// Stores preset key-value pairs.
#[cfg(test)]
#[derive(Default)]
pub struct MockEnvironmentProvider {
    vars: std::collections::HashMap<String, String>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl MockEnvironmentProvider
//
//  Mock environment setup for unit tests.
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
impl MockEnvironmentProvider {

    pub fn new() -> Self {
        Self::default()
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  with
    //
    //  Creates a mock environment holding a single variable.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn with(name: &str, value: &str) -> Self {
        let mut mock = Self::new();
        mock.set(name, value);
        mock
    }





    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.into(), value.into());
    }
}





#[cfg(test)]
impl EnvironmentProvider for MockEnvironmentProvider {
    fn get_env_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  default_provider_reads_path
    //
    //  Verifies DefaultEnvironmentProvider reads the PATH variable.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn default_provider_reads_path() {
        let provider = DefaultEnvironmentProvider;
        assert!(provider.get_env_var("PATH").is_some());
    }





    #[test]
    fn default_provider_returns_none_for_missing() {
        let provider = DefaultEnvironmentProvider;
        assert!(provider.get_env_var("GLYPHLS_NONEXISTENT_VAR_12345").is_none());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  mock_provider_returns_set_values
    //
    //  Verifies MockEnvironmentProvider returns preset values and nothing
    //  for names it was not given.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn mock_provider_returns_set_values() {
        let mock = MockEnvironmentProvider::with("GLYPHLS_ICONS", "di=D:fi=F");
        assert_eq!(mock.get_env_var("GLYPHLS_ICONS"), Some("di=D:fi=F".into()));
        assert!(mock.get_env_var("PATH").is_none());
    }
}
