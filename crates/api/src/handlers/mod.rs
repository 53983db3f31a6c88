pub mod dashboard_templates;
