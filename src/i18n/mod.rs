// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary. The locale is
//! picked from the CLI, then the config file, then the system settings, and
//! can be switched at runtime from the footer.

pub mod fluent;
