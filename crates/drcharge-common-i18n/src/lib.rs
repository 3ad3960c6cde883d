// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Dr. Charge site.
//!
//! This crate owns everything that decides *which* language a visitor sees:
//!
//! - the closed set of supported locales and the designated default
//! - Accept-Language parsing and negotiation against that set
//! - locale-prefix path helpers (`/fr/...`, `/en/...`)
//! - the typed per-locale dictionaries rendered by the page handlers
//!
//! Nothing here performs I/O; every function is a pure function of its
//! arguments plus the dictionaries embedded at build time.
//!
//! # Dictionary Key Convention
//!
//! Dictionary fields are addressed with dot-notation in docs and logs,
//! mirroring the struct nesting:
//!
//! - `nav.home`
//! - `hero.title`
//! - `services.items.station.title`
//!
//! # Example
//!
//! ```
//! use drcharge_common_i18n::{
//! 	load_dictionary, localized_path, resolve_request_locale, Locale, LocaleConfig,
//! };
//!
//! let config = LocaleConfig::default();
//! let locale = resolve_request_locale(Some("fr-CA,fr;q=0.9,en;q=0.8"), &config);
//! assert_eq!(locale, Locale::Fr);
//!
//! assert_eq!(localized_path(Locale::En, "/about"), "/en/about");
//!
//! let dictionary = load_dictionary(locale).unwrap();
//! assert!(!dictionary.nav.home.is_empty());
//! ```

mod dictionary;
mod error;
mod locale;
mod negotiate;
mod routing;

pub use dictionary::{
	load_dictionary, AboutCopy, AppSectionCopy, CommonCopy, ContactCopy, ContactFormCopy,
	Dictionary, FaqCopy, FaqItem, FooterCopy, HeroCopy, NavCopy, ServiceItem, ServiceItems,
	ServicesCopy, StatsCopy,
};
pub use error::I18nError;
pub use locale::{Locale, LocaleConfig, LocaleInfo, DEFAULT_LOCALE, LOCALES};
pub use negotiate::{negotiate_locale, parse_accept_language, resolve_request_locale, LanguageTag};
pub use routing::{
	is_file_path, is_static_asset, localized_path, path_locale, switch_locale_path,
	STATIC_ASSET_EXTENSIONS,
};
