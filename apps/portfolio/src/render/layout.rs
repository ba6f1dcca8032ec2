//! Profile → document tree.
//!
//! # Layout
//! - header: name, "title • address", copy-email control
//! - sidebar card: photo or placeholder icon, name, title, contact, languages, DOB, mail link
//! - content column: summary, experience, education + skills/tools, declaration
//! - footer
//!
//! Rendering is total: blank optional fields are omitted, never reported.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::{EducationEntry, ExperienceEntry, Profile};
use crate::render::date::DateStyle;
use crate::render::document::{Document, Element};

pub const COPY_EMAIL_ACTION: &str = "copy-email";
pub const FOOTER_TEXT: &str =
    "Designed & generated — Professional portfolio for recruiters • Replace contact/photo before publishing.";

/// SVG path of the placeholder person icon shown when no photo is set.
const PERSON_ICON_PATH: &str =
    "M12 4.5c1.657 0 3 1.343 3 3S13.657 10.5 12 10.5 9 9.157 9 7.5s1.343-3 3-3zM6 20.25a6 6 0 0112 0";

// ────────────────────────────────────────────────────────────────────────────
// Theme
// ────────────────────────────────────────────────────────────────────────────

const PAGE: &str = "min-h-screen bg-gradient-to-br from-[#f5e6d3] via-[#f7ecdf] to-[#fcf7f1] py-12 px-6";
const CONTAINER: &str = "max-w-6xl mx-auto";
const GRID: &str = "grid md:grid-cols-3 gap-6";
const SIDEBAR_CARD: &str =
    "md:col-span-1 bg-white/60 backdrop-blur-sm border border-white/60 p-6 rounded-2xl shadow";
const AVATAR_FRAME: &str =
    "w-36 h-36 rounded-full bg-gray-100 overflow-hidden flex items-center justify-center ring-2 ring-amber-200";
const CONTENT_CARD: &str = "bg-white p-6 rounded-2xl border";
const SECTION_HEADING: &str = "text-lg font-semibold text-gray-800";
const CARD_HEADING: &str = "font-semibold text-gray-800";
const BODY_TEXT: &str = "mt-2 text-gray-700";
const BULLET_LIST: &str = "mt-3 list-disc pl-5 text-gray-700";
const ACCENT_BUTTON: &str = "px-4 py-2 bg-amber-100 text-amber-800 rounded-md text-sm border";
const CHIP: &str = "text-sm px-3 py-1 bg-gray-100 rounded-full";

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Renders the page for the current local date. The date is read on every call.
pub fn render_now(profile: &Profile, style: &DateStyle) -> Document {
    render(profile, Local::now().date_naive(), style)
}

/// Pure renderer: same profile, date and style always give the same document.
pub fn render(profile: &Profile, today: NaiveDate, style: &DateStyle) -> Document {
    debug!(
        experience = profile.experience.len(),
        education = profile.education.len(),
        skills = profile.skills.len(),
        has_photo = profile.photo().is_some(),
        "Rendering portfolio"
    );

    let body = Element::new("div").class(GRID).children([
        render_sidebar(profile),
        Element::new("main")
            .class("md:col-span-2 space-y-6")
            .child(render_summary(profile))
            .child(render_experience(&profile.experience))
            .child(
                Element::new("section")
                    .class("grid md:grid-cols-2 gap-4")
                    .child(render_education(&profile.education))
                    .child(render_skills(&profile.skills, &profile.tools)),
            )
            .child(render_declaration(profile, &style.format(today))),
    ]);

    let root = Element::new("div").class(PAGE).child(
        Element::new("div")
            .class(CONTAINER)
            .child(render_header(profile))
            .child(body)
            .child(
                Element::new("footer")
                    .attr("data-section", "footer")
                    .class("mt-8 text-center text-sm text-gray-600")
                    .text(FOOTER_TEXT),
            ),
    );

    Document {
        title: profile.name.clone(),
        root,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn render_header(profile: &Profile) -> Element {
    Element::new("header")
        .attr("data-section", "header")
        .class("flex items-center justify-between mb-8")
        .child(
            Element::new("div")
                .child(
                    Element::new("h1")
                        .class("text-3xl font-bold tracking-tight text-gray-800")
                        .text(&profile.name),
                )
                .child(
                    Element::new("p")
                        .class("text-sm text-gray-600 mt-1")
                        .text(title_line(profile)),
                ),
        )
        .child(
            Element::new("div").class("flex gap-3 items-center").child(
                Element::new("button")
                    .attr("type", "button")
                    .attr("data-action", COPY_EMAIL_ACTION)
                    .class(ACCENT_BUTTON)
                    .text("Copy Email"),
            ),
        )
}

fn title_line(profile: &Profile) -> String {
    match (profile.title.trim(), profile.address.trim()) {
        ("", "") => String::new(),
        (title, "") => title.to_string(),
        ("", address) => address.to_string(),
        (title, address) => format!("{title} • {address}"),
    }
}

fn render_sidebar(profile: &Profile) -> Element {
    let contact = Element::new("div")
        .child(labelled_heading("Contact", false))
        .child(Element::new("p").class("truncate").text(&profile.contact))
        .child_opt(
            profile
                .phone()
                .map(|phone| Element::new("p").attr("data-field", "phone").text(phone)),
        );

    let details = Element::new("div")
        .class("w-full mt-4 space-y-2 text-sm text-gray-700")
        .child(contact)
        .child(
            Element::new("div")
                .child(labelled_heading("Languages", true))
                .child(Element::new("p").text(profile.languages.join(", "))),
        )
        .child(
            Element::new("div")
                .child(labelled_heading("DOB", true))
                .child(Element::new("p").text(&profile.date_of_birth)),
        )
        .child(
            Element::new("div").class("mt-4").child(
                Element::new("a")
                    .attr("href", profile.mailto_href())
                    .class("text-sm px-3 py-2 bg-amber-50 text-amber-800 rounded-md inline-block")
                    .text("Email"),
            ),
        );

    Element::new("aside")
        .attr("data-section", "sidebar")
        .class(SIDEBAR_CARD)
        .child(
            Element::new("div")
                .class("flex flex-col items-center")
                .child(Element::new("div").class(AVATAR_FRAME).child(render_avatar(profile)))
                .child(
                    Element::new("h2")
                        .class("mt-4 text-lg font-semibold text-gray-800")
                        .text(&profile.name),
                )
                .child(
                    Element::new("p")
                        .class("text-sm text-gray-600")
                        .text(&profile.title),
                )
                .child(details),
        )
}

/// Exactly one of: `<img>` from the photo, or the placeholder icon.
fn render_avatar(profile: &Profile) -> Element {
    match profile.photo() {
        Some(src) => Element::new("img")
            .attr("src", src)
            .attr("alt", "profile")
            .class("w-full h-full object-cover"),
        None => Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("data-placeholder", "photo")
            .attr("class", "h-16 w-16 text-amber-400")
            .attr("fill", "none")
            .attr("viewBox", "0 0 24 24")
            .attr("stroke", "currentColor")
            .attr("role", "img")
            .attr("aria-label", "profile placeholder")
            .child(
                Element::new("path")
                    .attr("stroke-linecap", "round")
                    .attr("stroke-linejoin", "round")
                    .attr("stroke-width", "1.5")
                    .attr("d", PERSON_ICON_PATH),
            ),
    }
}

fn labelled_heading(label: &str, spaced: bool) -> Element {
    let class = if spaced { "font-semibold mt-2" } else { "font-semibold" };
    Element::new("p").class(class).text(label)
}

fn render_summary(profile: &Profile) -> Element {
    Element::new("section")
        .attr("data-section", "summary")
        .class("bg-white p-6 rounded-2xl shadow-sm border")
        .child(Element::new("h3").class(SECTION_HEADING).text("Professional Summary"))
        .child(Element::new("p").class(BODY_TEXT).text(&profile.summary))
}

fn render_experience(entries: &[ExperienceEntry]) -> Element {
    Element::new("section")
        .attr("data-section", "experience")
        .class("grid gap-4")
        .child(Element::new("h3").class(SECTION_HEADING).text("Experience"))
        .child(
            Element::new("div")
                .class("space-y-4")
                .children(entries.iter().map(render_experience_entry)),
        )
}

fn render_experience_entry(entry: &ExperienceEntry) -> Element {
    Element::new("article")
        .attr("data-entry", "experience")
        .class("p-4 rounded-lg border bg-white")
        .child(
            Element::new("div")
                .class("flex justify-between items-start")
                .child(
                    Element::new("div")
                        .child(Element::new("h4").class(CARD_HEADING).text(&entry.company))
                        .child(
                            Element::new("p")
                                .class("text-sm text-gray-600")
                                .text(&entry.role),
                        ),
                )
                .child(
                    Element::new("span")
                        .class("text-sm text-gray-500")
                        .text(&entry.period),
                ),
        )
        .child(
            Element::new("ul")
                .class(BULLET_LIST)
                .children(entry.points.iter().map(|p| Element::new("li").text(p))),
        )
}

fn render_education(entries: &[EducationEntry]) -> Element {
    Element::new("div")
        .attr("data-section", "education")
        .class(CONTENT_CARD)
        .child(Element::new("h3").class(CARD_HEADING).text("Education"))
        .child(
            Element::new("ul")
                .class(BULLET_LIST)
                .children(entries.iter().map(|ed| Element::new("li").text(education_line(ed)))),
        )
}

fn education_line(entry: &EducationEntry) -> String {
    format!("{} — {} ({})", entry.degree, entry.school, entry.year)
}

fn render_skills(skills: &[String], tools: &[String]) -> Element {
    Element::new("div")
        .attr("data-section", "skills")
        .class(CONTENT_CARD)
        .child(Element::new("h3").class(CARD_HEADING).text("Skills & Tools"))
        .child(
            Element::new("div")
                .class("mt-3 flex flex-wrap gap-2")
                .children(skills.iter().map(|s| Element::new("span").class(CHIP).text(s))),
        )
        .child(
            Element::new("div")
                .class("mt-4 text-sm text-gray-600")
                .child(Element::new("p").class("font-semibold").text("Tools"))
                .child(Element::new("p").text(tools.join(", "))),
        )
}

fn render_declaration(profile: &Profile, date: &str) -> Element {
    Element::new("section")
        .attr("data-section", "declaration")
        .class(CONTENT_CARD)
        .child(Element::new("h3").class(CARD_HEADING).text("Declaration"))
        .child(Element::new("p").class(BODY_TEXT).text(&profile.declaration))
        .child(
            Element::new("p")
                .class(BODY_TEXT)
                .child(Element::new("strong").text("Place:"))
                .text(format!(" {} ", profile.place))
                .child(
                    Element::new("span")
                        .class("ml-4")
                        .child(Element::new("strong").text("Date:"))
                        .child(
                            Element::new("time")
                                .attr("data-field", "date")
                                .text(format!(" {date}")),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn minimal() -> Profile {
        Profile {
            name: "Jane Doe".into(),
            title: "Clerk".into(),
            contact: "jane@example.com".into(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_sections_are_in_layout_order() {
        let doc = render(&Profile::builtin(), today(), &DateStyle::default());
        let order: Vec<&str> = doc
            .find_all(|el| el.get_attr("data-section").is_some())
            .iter()
            .filter_map(|el| el.get_attr("data-section"))
            .collect();
        assert_eq!(
            order,
            vec![
                "header",
                "sidebar",
                "summary",
                "experience",
                "education",
                "skills",
                "declaration",
                "footer"
            ]
        );
    }

    #[test]
    fn test_placeholder_when_photo_empty() {
        let doc = render(&minimal(), today(), &DateStyle::default());
        assert_eq!(doc.find_by_attr("data-placeholder", "photo").len(), 1);
        assert!(doc.find_by_tag("img").is_empty());
    }

    #[test]
    fn test_image_when_photo_set() {
        let profile = Profile {
            photo: "https://example.com/me.jpg".into(),
            ..minimal()
        };
        let doc = render(&profile, today(), &DateStyle::default());
        let imgs = doc.find_by_tag("img");
        assert_eq!(imgs.len(), 1);
        assert_eq!(imgs[0].get_attr("src"), Some("https://example.com/me.jpg"));
        assert!(doc.find_by_attr("data-placeholder", "photo").is_empty());
    }

    #[test]
    fn test_phone_line_only_when_present() {
        let doc = render(&minimal(), today(), &DateStyle::default());
        assert!(doc.find_by_attr("data-field", "phone").is_empty());

        let profile = Profile {
            phone: "+91 98765 43210".into(),
            ..minimal()
        };
        let doc = render(&profile, today(), &DateStyle::default());
        let phones = doc.find_by_attr("data-field", "phone");
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].text_content(), "+91 98765 43210");
    }

    #[test]
    fn test_experience_entries_and_points_keep_order() {
        let profile = Profile::builtin();
        let doc = render(&profile, today(), &DateStyle::default());
        let blocks = doc.find_by_attr("data-entry", "experience");
        assert_eq!(blocks.len(), profile.experience.len());

        for (block, entry) in blocks.iter().zip(&profile.experience) {
            let h4 = block.find_by_tag("h4");
            assert_eq!(h4[0].text_content(), entry.company);
            let points: Vec<String> = block
                .find_by_tag("li")
                .iter()
                .map(|li| li.text_content())
                .collect();
            assert_eq!(points, entry.points);
        }
    }

    #[test]
    fn test_education_line_format() {
        let doc = render(&Profile::builtin(), today(), &DateStyle::default());
        let education = doc.section("education").unwrap();
        let first = education.find_by_tag("li")[0].text_content();
        assert_eq!(first, "Matric (10th) — Pranjivan Academy, JAC Board (2010)");
    }

    #[test]
    fn test_declaration_shows_formatted_date_and_place() {
        let doc = render(&Profile::builtin(), today(), &DateStyle::for_locale("en-IN"));
        let declaration = doc.section("declaration").unwrap();
        let text = declaration.text_content();
        assert!(text.contains("Place: Dhanbad"));
        assert!(text.contains("Date: 19/10/2026"));
    }

    #[test]
    fn test_mail_link_targets_contact() {
        let doc = render(&minimal(), today(), &DateStyle::default());
        let links = doc.find_by_tag("a");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].get_attr("href"), Some("mailto:jane@example.com"));
    }

    #[test]
    fn test_copy_button_present() {
        let doc = render(&minimal(), today(), &DateStyle::default());
        let buttons = doc.find_by_attr("data-action", COPY_EMAIL_ACTION);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].text_content(), "Copy Email");
    }

    #[test]
    fn test_title_line_omits_separator_when_address_blank() {
        assert_eq!(title_line(&minimal()), "Clerk");
        assert_eq!(
            title_line(&Profile::builtin()),
            "MIS & Accounts Professional • H.N Colony, Barmasia, Dhanbad, Jharkhand – 826001"
        );
    }

    #[test]
    fn test_empty_profile_renders() {
        let doc = render(&Profile::default(), today(), &DateStyle::default());
        assert!(doc.find_by_attr("data-entry", "experience").is_empty());
        assert_eq!(doc.find_by_attr("data-placeholder", "photo").len(), 1);
        assert!(doc.to_html().contains("mailto:"));
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_date() {
        let profile = Profile::builtin();
        let style = DateStyle::default();
        assert_eq!(render(&profile, today(), &style), render(&profile, today(), &style));
    }
}
