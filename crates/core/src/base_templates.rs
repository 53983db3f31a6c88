//! Built-in dashboard templates offered to every user.

use std::collections::HashMap;

use crate::dashboard_template::{AvailableTemplate, BaseDashboardTemplate, GridItem, GridLayouts};

/// Catalog of system-provided templates keyed by kind.
pub type BaseTemplates = HashMap<AvailableTemplate, BaseDashboardTemplate>;

/// Build the catalog of built-in templates.
pub fn base_templates() -> BaseTemplates {
    AvailableTemplate::ALL
        .iter()
        .map(|&kind| (kind, base_template(kind)))
        .collect()
}

/// The built-in template for one kind.
pub fn base_template(kind: AvailableTemplate) -> BaseDashboardTemplate {
    match kind {
        AvailableTemplate::LandingPage => BaseDashboardTemplate {
            name: kind.as_str().to_string(),
            display_name: "Landing Page".to_string(),
            template_config: landing_page_layouts().to_template_config(),
        },
    }
}

/// Welcome banner, two summary panels, and a quick-links strip. Each tile
/// keeps its height bounds across breakpoints; narrower breakpoints stack
/// the panels.
fn landing_page_layouts() -> GridLayouts {
    let welcome = GridItem {
        title: "Welcome".to_string(),
        id: "welcome".to_string(),
        h: 2,
        min_h: 1,
        max_h: 3,
        ..Default::default()
    };
    let statistics = GridItem {
        title: "Statistics".to_string(),
        id: "statistics".to_string(),
        h: 3,
        min_h: 2,
        max_h: 6,
        ..Default::default()
    };
    let activity = GridItem {
        title: "Recent Activity".to_string(),
        id: "recent-activity".to_string(),
        h: 3,
        min_h: 2,
        max_h: 6,
        ..Default::default()
    };
    let quick_links = GridItem {
        title: "Quick Links".to_string(),
        id: "quick-links".to_string(),
        h: 2,
        min_h: 1,
        max_h: 3,
        ..Default::default()
    };

    GridLayouts {
        sx: vec![
            GridItem { x: 0, y: 0, w: 1, ..welcome.clone() },
            GridItem { x: 0, y: 2, w: 1, ..statistics.clone() },
            GridItem { x: 0, y: 5, w: 1, ..activity.clone() },
            GridItem { x: 0, y: 8, w: 1, ..quick_links.clone() },
        ],
        md: vec![
            GridItem { x: 0, y: 0, w: 2, ..welcome.clone() },
            GridItem { x: 0, y: 2, w: 1, ..statistics.clone() },
            GridItem { x: 1, y: 2, w: 1, ..activity.clone() },
            GridItem { x: 0, y: 5, w: 2, ..quick_links.clone() },
        ],
        lg: vec![
            GridItem { x: 0, y: 0, w: 3, ..welcome.clone() },
            GridItem { x: 0, y: 2, w: 2, ..statistics.clone() },
            GridItem { x: 2, y: 2, w: 1, ..activity.clone() },
            GridItem { x: 0, y: 5, w: 3, ..quick_links.clone() },
        ],
        xl: vec![
            GridItem { x: 0, y: 0, w: 4, ..welcome },
            GridItem { x: 0, y: 2, w: 2, ..statistics },
            GridItem { x: 2, y: 2, w: 2, ..activity },
            GridItem { x: 0, y: 5, w: 4, ..quick_links },
        ],
    }
}
