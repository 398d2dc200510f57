// Output settings shared by every lesson binary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub colors: bool,
}

impl OutputConfig {
    /// Colors stay on unless `NO_COLOR` is present in the environment.
    pub fn from_env() -> Self {
        Self::from_no_color(std::env::var_os("NO_COLOR").is_some())
    }

    pub fn plain() -> Self {
        OutputConfig { colors: false }
    }

    fn from_no_color(no_color: bool) -> Self {
        OutputConfig { colors: !no_color }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { colors: true }
    }
}
