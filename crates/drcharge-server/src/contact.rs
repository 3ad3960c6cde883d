// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form to `mailto:` link composition.
//!
//! The site never stores or sends a submission. A valid form becomes a
//! `mailto:` URI that hands the message to the visitor's mail client.

use drcharge_common_i18n::Dictionary;
use serde::{Deserialize, Serialize};

/// Errors from validating a contact form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
	#[error("missing required field: {0}")]
	MissingField(&'static str),
}

/// Fields submitted by the contact form. Absent fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub subject: String,
	pub message: String,
}

impl ContactForm {
	/// Require name, email and message to be non-blank.
	pub fn validate(&self) -> Result<(), ContactError> {
		for (field, value) in [
			("name", &self.name),
			("email", &self.email),
			("message", &self.message),
		] {
			if value.trim().is_empty() {
				return Err(ContactError::MissingField(field));
			}
		}
		Ok(())
	}
}

/// Build the `mailto:` URI for a submission.
///
/// The subject falls back to the localized default. The body lists the
/// sender's details under the localized field labels, then a blank line and
/// the labelled message.
///
/// # Example
///
/// ```
/// use drcharge_common_i18n::{load_dictionary, Locale};
/// use drcharge_server::contact::{compose_mailto, ContactForm};
///
/// let form = ContactForm {
/// 	name: "Ana".to_string(),
/// 	email: "ana@example.com".to_string(),
/// 	message: "Hi".to_string(),
/// 	..Default::default()
/// };
/// let uri = compose_mailto(&form, "info@drcharge.ca", load_dictionary(Locale::En).unwrap()).unwrap();
/// assert!(uri.starts_with("mailto:info@drcharge.ca?subject=Contact%20Dr.%20Charge&body="));
/// ```
pub fn compose_mailto(
	form: &ContactForm,
	recipient: &str,
	dictionary: &Dictionary,
) -> Result<String, ContactError> {
	form.validate()?;

	let labels = &dictionary.contact.form;
	let subject = match form.subject.trim() {
		"" => labels.default_subject.as_str(),
		subject => subject,
	};
	let body = format!(
		"{}: {}\n{}: {}\n{}: {}\n\n{}:\n{}",
		labels.name,
		form.name.trim(),
		labels.email,
		form.email.trim(),
		labels.phone,
		form.phone.trim(),
		labels.message,
		form.message.trim(),
	);

	Ok(format!(
		"mailto:{recipient}?subject={}&body={}",
		urlencoding::encode(subject),
		urlencoding::encode(&body)
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use drcharge_common_i18n::{load_dictionary, Locale};

	fn form() -> ContactForm {
		ContactForm {
			name: "Marie Tremblay".to_string(),
			email: "marie@example.com".to_string(),
			phone: "514-555-0100".to_string(),
			subject: "Festival & events".to_string(),
			message: "We need 3 stations.".to_string(),
		}
	}

	#[test]
	fn test_validate_ok() {
		assert!(form().validate().is_ok());
	}

	#[test]
	fn test_validate_reports_first_missing_field() {
		let mut f = form();
		f.email = "   ".to_string();
		assert_eq!(f.validate(), Err(ContactError::MissingField("email")));

		let f = ContactForm::default();
		assert_eq!(f.validate(), Err(ContactError::MissingField("name")));
	}

	#[test]
	fn test_phone_and_subject_optional() {
		let f = ContactForm {
			phone: String::new(),
			subject: String::new(),
			..form()
		};
		assert!(f.validate().is_ok());
	}

	#[test]
	fn test_compose_encodes_subject_and_body() {
		let dictionary = load_dictionary(Locale::En).unwrap();
		let uri = compose_mailto(&form(), "info@drcharge.ca", dictionary).unwrap();
		assert!(uri.starts_with("mailto:info@drcharge.ca?subject=Festival%20%26%20events&body="));
		assert!(uri.contains("Name%3A%20Marie%20Tremblay%0A"));
		assert!(uri.contains("Phone%3A%20514-555-0100"));
		assert!(uri.ends_with("%0A%0AMessage%3A%0AWe%20need%203%20stations."));
	}

	#[test]
	fn test_compose_uses_localized_labels_and_default_subject() {
		let dictionary = load_dictionary(Locale::Fr).unwrap();
		let f = ContactForm {
			subject: " ".to_string(),
			..form()
		};
		let uri = compose_mailto(&f, "info@drcharge.ca", dictionary).unwrap();
		let expected_subject = urlencoding::encode(&dictionary.contact.form.default_subject);
		assert!(uri.contains(&format!("?subject={expected_subject}&")));
		let name_label = urlencoding::encode(&dictionary.contact.form.name);
		assert!(uri.contains(&format!("body={name_label}%3A%20Marie")));
	}

	#[test]
	fn test_compose_rejects_incomplete_form() {
		let dictionary = load_dictionary(Locale::En).unwrap();
		let f = ContactForm {
			message: String::new(),
			..form()
		};
		assert_eq!(
			compose_mailto(&f, "info@drcharge.ca", dictionary),
			Err(ContactError::MissingField("message"))
		);
	}
}
