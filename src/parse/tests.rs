// Profile extraction tests.

use super::*;
use crate::config::ProfileSelectors;

fn card(title: &str, pairs: &[(&str, &str)]) -> String {
    let rows: String = pairs
        .iter()
        .map(|(label, descr)| {
            format!(
                r#"<div class="row mb-1 mt-1"><div class="col-12">
                   <h2 class="h6 mb-0"><a class="text-dark" href="/t">{}</a></h2>
                   <p class="pb-0 mb-0 small">{}</p></div></div>"#,
                label, descr
            )
        })
        .collect();
    format!(
        r#"<div class="card mt-4 mb-2"><div class="card-body">
           <h6 class="card-title">{}</h6>{}</div></div>"#,
        title, rows
    )
}

fn page(cards: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Profile</title></head><body>{}</body></html>",
        cards.concat()
    )
}

#[test]
fn test_two_cards_three_pairs_each() {
    let html = page(&[
        card(
            "Analytics and Tracking",
            &[
                ("Google Analytics", "Web analytics."),
                ("Hotjar", "Heatmaps."),
                ("Matomo", "Self-hosted analytics."),
            ],
        ),
        card(
            "Web Servers",
            &[("nginx", "HTTP server."), ("Apache", "Classic."), ("Caddy", "Auto TLS.")],
        ),
    ]);

    let profile = extract_profile(&html);
    assert_eq!(profile.category_count(), 2);

    let titles: Vec<&str> = profile.categories.keys().map(String::as_str).collect();
    assert_eq!(titles, vec!["Analytics and Tracking", "Web Servers"]);

    let analytics: Vec<(&str, &str)> = profile.categories["Analytics and Tracking"]
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        analytics,
        vec![
            ("Google Analytics", "Web analytics."),
            ("Hotjar", "Heatmaps."),
            ("Matomo", "Self-hosted analytics."),
        ]
    );

    let servers: Vec<&str> = profile.categories["Web Servers"]
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(servers, vec!["nginx", "Apache", "Caddy"]);
}

#[test]
fn test_no_cards_gives_empty_profile() {
    let profile = extract_profile("<html><body><p>Access denied</p></body></html>");
    assert!(profile.is_empty());
    assert_eq!(
        serde_json::to_value(&profile).unwrap(),
        serde_json::json!({ "Technology Profile": {} })
    );
}

#[test]
fn test_empty_input_gives_empty_profile() {
    assert!(extract_profile("").is_empty());
}

#[test]
fn test_unequal_lists_truncate_to_shorter() {
    let html = page(&[
        r#"<div class="card mt-4 mb-2"><h6 class="card-title">CMS</h6>
           <a class="text-dark">WordPress</a><p class="pb-0 mb-0 small">Blogs.</p>
           <a class="text-dark">Drupal</a><p class="pb-0 mb-0 small">Sites.</p>
           <a class="text-dark">Joomla</a></div>"#
            .to_string(),
    ]);

    let profile = extract_profile(&html);
    let cms = &profile.categories["CMS"];
    assert_eq!(cms.len(), 2);
    assert_eq!(cms["WordPress"], "Blogs.");
    assert_eq!(cms["Drupal"], "Sites.");
    assert!(!cms.contains_key("Joomla"));
}

#[test]
fn test_more_descriptions_than_labels() {
    let html = page(&[
        r#"<div class="card mt-4 mb-2"><h6 class="card-title">CDN</h6>
           <a class="text-dark">Cloudflare</a>
           <p class="pb-0 mb-0 small">Edge.</p><p class="pb-0 mb-0 small">Orphan.</p></div>"#
            .to_string(),
    ]);
    let profile = extract_profile(&html);
    assert_eq!(profile.categories["CDN"].len(), 1);
}

#[test]
fn test_card_without_techniques_is_kept_empty() {
    let html = page(&[card("Widgets", &[])]);
    let profile = extract_profile(&html);
    assert_eq!(profile.category_count(), 1);
    assert!(profile.categories["Widgets"].is_empty());
}

#[test]
fn test_card_without_title_is_skipped() {
    let html = page(&[
        r#"<div class="card mt-4 mb-2"><a class="text-dark">x</a><p class="pb-0 mb-0 small">y</p></div>"#
            .to_string(),
        card("Hosting", &[("AWS", "Cloud.")]),
    ]);
    let profile = extract_profile(&html);
    let titles: Vec<&str> = profile.categories.keys().map(String::as_str).collect();
    assert_eq!(titles, vec!["Hosting"]);
}

#[test]
fn test_duplicate_card_titles_overwrite() {
    let html = page(&[
        card("Analytics", &[("Old", "first")]),
        card("CMS", &[("WordPress", "blog")]),
        card("Analytics", &[("New", "second")]),
    ]);
    let profile = extract_profile(&html);
    let titles: Vec<&str> = profile.categories.keys().map(String::as_str).collect();
    assert_eq!(titles, vec!["Analytics", "CMS"]);
    assert_eq!(profile.categories["Analytics"].len(), 1);
    assert_eq!(profile.categories["Analytics"]["New"], "second");
}

#[test]
fn test_cards_missing_a_class_are_ignored() {
    let html = page(&[
        r#"<div class="card mt-4"><h6 class="card-title">Sidebar</h6></div>"#.to_string(),
        card("Frameworks", &[("React", "UI library.")]),
    ]);
    let profile = extract_profile(&html);
    assert_eq!(profile.category_count(), 1);
    assert!(profile.categories.contains_key("Frameworks"));
}

#[test]
fn test_text_is_concatenated_from_nested_nodes() {
    let html = page(&[
        r#"<div class="card mt-4 mb-2"><h6 class="card-title">Mail <b>Services</b></h6>
           <a class="text-dark"><span>Send</span>Grid</a>
           <p class="pb-0 mb-0 small">Email &amp; delivery.</p></div>"#
            .to_string(),
    ]);
    let profile = extract_profile(&html);
    assert_eq!(profile.categories["Mail Services"]["SendGrid"], "Email & delivery.");
}

#[test]
fn test_custom_selectors() {
    let selectors = ProfileSelectors {
        card: "section.tech",
        card_title: "h3",
        technique_label: "dt",
        technique_description: "dd",
    };
    let html = r#"<section class="tech"><h3>Languages</h3>
                  <dl><dt>Rust</dt><dd>Systems.</dd><dt>Go</dt><dd>Services.</dd></dl></section>"#;
    let profile = extract_profile_with(html, &selectors);
    let langs: Vec<&str> = profile.categories["Languages"]
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(langs, vec!["Rust", "Go"]);

    // Default selectors see nothing in this markup
    assert!(extract_profile(html).is_empty());
}
