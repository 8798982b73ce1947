use super::*;
use crate::client::constant::SITE_NAME;

/// Tests rendering the header with no props.
///
/// Verifies that the header is a single header element linking back to the
/// site root and labelled with the site name and icon.
///
/// Expected: Ok with header element, home link, icon and site name
#[test]
fn renders_home_link_with_site_name() {
    let html = render_header();

    assert!(html.starts_with(r#"<header class="site-header"><a href="/">"#));
    assert!(html.ends_with(&format!("<p>{SITE_NAME}</p></a></header>")));
    assert!(html.contains("<svg"));
}

/// Tests that the header is static.
///
/// Verifies that rendering the header repeatedly yields the same markup, since
/// it reads no context and takes no input.
///
/// Expected: Ok with identical output on every render
#[test]
fn renders_identically_every_time() {
    assert_eq!(render_header(), render_header());
}
