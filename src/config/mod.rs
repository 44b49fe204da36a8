//! Shell configuration.
//!
//! Window geometry, branding and the compact-layout breakpoint. Values come
//! from command-line flags; there are no config files or environment
//! variables.
//!
//! # Example
//!
//! ```
//! use ledgerline_shell::config::ShellConfig;
//!
//! let config = ShellConfig {
//!     default_width: 640,
//!     ..ShellConfig::default()
//! };
//! config.validate()?;
//! assert!(config.starts_compact());
//! # Ok::<(), ledgerline_shell::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use crate::core::header::is_compact;

/// Default brand shown in the header and window title
pub const DEFAULT_BRAND: &str = "Ledgerline";

/// Initial window width in pixels
pub const DEFAULT_WIDTH: i32 = 1200;

/// Initial window height in pixels
pub const DEFAULT_HEIGHT: i32 = 800;

/// Below this window width the header shows the mobile menu toggle
pub const DEFAULT_COMPACT_BREAKPOINT: i32 = 768;

/// Runtime settings for the GTK shell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShellConfig {
    /// Product name shown in the header
    pub brand: String,
    /// Initial window width in pixels
    pub default_width: i32,
    /// Initial window height in pixels
    pub default_height: i32,
    /// Width below which the compact (mobile) layout is used
    pub compact_breakpoint: i32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
        }
    }
}

impl ShellConfig {
    /// Checks that every dimension is positive and the brand is set.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Configuration is usable
    /// * `Err(ConfigError)` - First invalid field, in declaration order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(ConfigError::EmptyBrand);
        }

        let dimensions = [
            ("width", self.default_width),
            ("height", self.default_height),
            ("compact breakpoint", self.compact_breakpoint),
        ];

        for (name, value) in dimensions {
            if value <= 0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        Ok(())
    }

    /// Whether the window opens in the compact layout
    pub fn starts_compact(&self) -> bool {
        is_compact(self.default_width, self.compact_breakpoint)
    }
}

#[cfg(test)]
mod tests;
