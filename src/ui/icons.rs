//! Embedded SVG icons

/// Default dot mask: a filled circle spanning the whole view box
pub const DOT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><circle cx="50" cy="50" r="50" fill="black"/></svg>"#;
