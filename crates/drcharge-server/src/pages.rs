// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page renderers.
//!
//! Each page is a pure function of a [`PageContext`]; the HTTP handlers and
//! the static exporter both call [`render_page`].

use std::fmt;
use std::str::FromStr;

use drcharge_common_i18n::Dictionary;

use crate::html::{document, escape, PageContext};

/// A content page, published once per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
	Home,
	Services,
	About,
	Faq,
	Contact,
}

impl Page {
	/// Every page, in navigation order.
	pub const ALL: [Page; 5] = [
		Page::Home,
		Page::Services,
		Page::About,
		Page::Faq,
		Page::Contact,
	];

	/// Path segment after the locale prefix; empty for the home page.
	pub fn slug(&self) -> &'static str {
		match self {
			Page::Home => "",
			Page::Services => "services",
			Page::About => "about",
			Page::Faq => "faq",
			Page::Contact => "contact",
		}
	}

	pub fn nav_label<'d>(&self, dictionary: &'d Dictionary) -> &'d str {
		let nav = &dictionary.nav;
		match self {
			Page::Home => &nav.home,
			Page::Services => &nav.services,
			Page::About => &nav.about,
			Page::Faq => &nav.faq,
			Page::Contact => &nav.contact,
		}
	}

	fn title<'d>(&self, dictionary: &'d Dictionary) -> &'d str {
		match self {
			Page::Home => &dictionary.hero.title,
			Page::Services => &dictionary.services.title,
			Page::About => &dictionary.about.title,
			Page::Faq => &dictionary.faq.title,
			Page::Contact => &dictionary.contact.title,
		}
	}
}

impl fmt::Display for Page {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Page::Home => f.write_str("home"),
			other => f.write_str(other.slug()),
		}
	}
}

/// Unknown page slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
	type Err = UnknownPage;

	/// Parse a slug. The home page has no slug of its own and is not
	/// reachable through this parser.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Page::ALL
			.iter()
			.copied()
			.find(|page| *page != Page::Home && page.slug() == s)
			.ok_or_else(|| UnknownPage(s.to_string()))
	}
}

/// Render `page` as a full HTML document.
pub fn render_page(page: Page, ctx: &PageContext<'_>) -> String {
	let main = match page {
		Page::Home => home(ctx),
		Page::Services => services(ctx),
		Page::About => about(ctx),
		Page::Faq => faq(ctx),
		Page::Contact => contact(ctx),
	};
	document(ctx, page.title(ctx.dictionary), &nav(ctx), &main)
}

/// Render the not-found page.
pub fn render_not_found(ctx: &PageContext<'_>) -> String {
	let main = format!(
		r#"<section class="not-found">
<h1>404</h1>
<p><a href="{home}">{label}</a></p>
</section>"#,
		home = escape(&ctx.href("")),
		label = escape(&ctx.dictionary.nav.home),
	);
	document(ctx, "404", &nav(ctx), &main)
}

fn nav<'d>(ctx: &PageContext<'d>) -> Vec<(String, &'d str)> {
	Page::ALL
		.iter()
		.map(|page| (ctx.href(page.slug()), page.nav_label(ctx.dictionary)))
		.collect()
}

fn home(ctx: &PageContext<'_>) -> String {
	let d = ctx.dictionary;
	format!(
		r#"<section class="hero">
<h1>{title}</h1>
<p>{subtitle}</p>
<a class="cta primary" href="{contact}">{primary}</a>
<a class="cta secondary" href="{services_href}">{secondary}</a>
</section>
{stats}
<section class="services">
<h2>{services_title}</h2>
{service_cards}
<a href="{services_href}">{view_all}</a>
</section>
{app}"#,
		title = escape(&d.hero.title),
		subtitle = escape(&d.hero.subtitle),
		contact = escape(&ctx.href("contact")),
		primary = escape(&d.hero.cta_primary),
		services_href = escape(&ctx.href("services")),
		secondary = escape(&d.hero.cta_secondary),
		stats = stats(d),
		services_title = escape(&d.services.title),
		service_cards = service_cards(d),
		view_all = escape(&d.common.view_all),
		app = app_section(d),
	)
}

fn services(ctx: &PageContext<'_>) -> String {
	let d = ctx.dictionary;
	format!(
		r#"<section class="services">
<h1>{title}</h1>
{cards}
</section>
<a class="cta" href="{contact}">{cta}</a>"#,
		title = escape(&d.services.title),
		cards = service_cards(d),
		contact = escape(&ctx.href("contact")),
		cta = escape(&d.hero.cta_primary),
	)
}

fn about(ctx: &PageContext<'_>) -> String {
	let d = ctx.dictionary;
	format!(
		r#"<section class="about">
<h1>{title}</h1>
<p>{mission}</p>
</section>
{stats}"#,
		title = escape(&d.about.title),
		mission = escape(&d.about.mission),
		stats = stats(d),
	)
}

fn faq(ctx: &PageContext<'_>) -> String {
	let d = ctx.dictionary;
	let items: String = d
		.faq
		.items
		.iter()
		.map(|item| {
			format!(
				"<details>\n<summary>{}</summary>\n<p>{}</p>\n</details>\n",
				escape(&item.question),
				escape(&item.answer)
			)
		})
		.collect();
	format!(
		r#"<section class="faq">
<h1>{title}</h1>
{items}</section>"#,
		title = escape(&d.faq.title),
	)
}

fn contact(ctx: &PageContext<'_>) -> String {
	let d = ctx.dictionary;
	let form = &d.contact.form;
	format!(
		r#"<section class="contact">
<h1>{title}</h1>
<p>{intro}</p>
<form method="get" action="{action}">
<label>{name} <input type="text" name="name" required></label>
<label>{email} <input type="email" name="email" required></label>
<label>{phone} <input type="tel" name="phone"></label>
<label>{subject} <input type="text" name="subject"></label>
<label>{message} <textarea name="message" required></textarea></label>
<button type="submit">{send}</button>
</form>
</section>"#,
		title = escape(&d.contact.title),
		intro = escape(&d.contact.intro),
		action = escape(&ctx.href("contact/send")),
		name = escape(&form.name),
		email = escape(&form.email),
		phone = escape(&form.phone),
		subject = escape(&form.subject),
		message = escape(&form.message),
		send = escape(&form.send),
	)
}

fn stats(d: &Dictionary) -> String {
	format!(
		r#"<ul class="stats">
<li>{}</li>
<li>{}</li>
<li>{}</li>
</ul>"#,
		escape(&d.stats.charge_speed),
		escape(&d.stats.power),
		escape(&d.stats.connectivity),
	)
}

fn service_cards(d: &Dictionary) -> String {
	d.services
		.items
		.iter()
		.map(|item| {
			format!(
				"<article>\n<h3>{}</h3>\n<p>{}</p>\n</article>\n",
				escape(&item.title),
				escape(&item.description)
			)
		})
		.collect()
}

fn app_section(d: &Dictionary) -> String {
	let features: String = d
		.app_section
		.features
		.iter()
		.map(|f| format!("<li>{}</li>", escape(f)))
		.collect();
	format!(
		r#"<section class="app">
<h2>{title}</h2>
<p>{description}</p>
<ul>{features}</ul>
<p>{install}</p>
</section>"#,
		title = escape(&d.app_section.title),
		description = escape(&d.app_section.description),
		install = escape(&d.common.install_app),
	)
}
