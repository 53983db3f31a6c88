//! Dashboard template model and grid validation.
//!
//! A template carries one grid layout per responsive breakpoint. Each layout
//! is a list of [`GridItem`] tiles stored as a JSON array in the matching
//! [`TemplateConfig`] slot. This module owns the breakpoint table, the tile
//! geometry checks, and the conversions between item lists and stored blobs.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Storage value of the landing page template kind.
pub const TEMPLATE_LANDING_PAGE: &str = "landingPage";

/// All recognised template kinds.
pub const VALID_TEMPLATE_NAMES: &[&str] = &[TEMPLATE_LANDING_PAGE];

pub const GRID_SIZE_SX: &str = "sx";
pub const GRID_SIZE_MD: &str = "md";
pub const GRID_SIZE_LG: &str = "lg";
pub const GRID_SIZE_XL: &str = "xl";

/// All recognised breakpoint names, smallest first.
pub const VALID_GRID_SIZES: &[&str] = &[GRID_SIZE_SX, GRID_SIZE_MD, GRID_SIZE_LG, GRID_SIZE_XL];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Validation failures for templates, breakpoints, and grid items.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error(
        "invalid dashboard template. Expected one of {expected}, got {0}",
        expected = VALID_TEMPLATE_NAMES.join(", ")
    )]
    InvalidTemplate(String),

    #[error(
        "invalid grid size, expected one of {expected}, got {0}",
        expected = VALID_GRID_SIZES.join(", ")
    )]
    InvalidGridSize(String),

    #[error("invalid grid item, {reason}")]
    InvalidGridItem { reason: String },
}

impl TemplateError {
    fn grid_item(reason: impl Into<String>) -> Self {
        Self::InvalidGridItem {
            reason: reason.into(),
        }
    }
}

impl From<TemplateError> for CoreError {
    fn from(err: TemplateError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kinds of system-provided templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AvailableTemplate {
    #[serde(rename = "landingPage")]
    LandingPage,
}

impl AvailableTemplate {
    pub const ALL: [AvailableTemplate; 1] = [Self::LandingPage];

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LandingPage => TEMPLATE_LANDING_PAGE,
        }
    }
}

impl FromStr for AvailableTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TEMPLATE_LANDING_PAGE => Ok(Self::LandingPage),
            other => Err(TemplateError::InvalidTemplate(other.to_string())),
        }
    }
}

impl fmt::Display for AvailableTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A responsive breakpoint. Each one caps the number of grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    Sx,
    Md,
    Lg,
    Xl,
}

impl GridSize {
    /// Every breakpoint, smallest first.
    pub const ALL: [GridSize; 4] = [Self::Sx, Self::Md, Self::Lg, Self::Xl];

    /// Convert to the stored string value (also the storage column name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sx => GRID_SIZE_SX,
            Self::Md => GRID_SIZE_MD,
            Self::Lg => GRID_SIZE_LG,
            Self::Xl => GRID_SIZE_XL,
        }
    }

    /// Maximum number of columns a layout at this breakpoint may use.
    pub fn max_columns(&self) -> i64 {
        match self {
            Self::Sx => 1,
            Self::Md => 2,
            Self::Lg => 3,
            Self::Xl => 4,
        }
    }
}

impl FromStr for GridSize {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GRID_SIZE_SX => Ok(Self::Sx),
            GRID_SIZE_MD => Ok(Self::Md),
            GRID_SIZE_LG => Ok(Self::Lg),
            GRID_SIZE_XL => Ok(Self::Xl),
            other => Err(TemplateError::InvalidGridSize(other.to_string())),
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that a string names a known template kind.
pub fn validate_template_name(name: &str) -> Result<(), TemplateError> {
    name.parse::<AvailableTemplate>().map(|_| ())
}

/// Check that a string names a known breakpoint.
pub fn validate_grid_size(size: &str) -> Result<(), TemplateError> {
    size.parse::<GridSize>().map(|_| ())
}

/// Look up the column limit for a breakpoint given by name.
pub fn max_columns_for(size: &str) -> Result<i64, TemplateError> {
    size.parse::<GridSize>().map(|s| s.max_columns())
}

// ---------------------------------------------------------------------------
// Grid items
// ---------------------------------------------------------------------------

/// A single tile placed on a breakpoint grid.
///
/// Missing or `null` fields decode to their zero value, so incomplete client
/// payloads are reported by [`GridItem::validate`] with the violated
/// constraint. Values of the wrong JSON type still fail to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridItem {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "i", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub x: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub w: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub h: i64,
    #[serde(rename = "maxH", deserialize_with = "null_as_default")]
    pub max_h: i64,
    #[serde(rename = "minH", deserialize_with = "null_as_default")]
    pub min_h: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GridItem {
    /// Validate the tile geometry against a breakpoint.
    ///
    /// Returns the first violated rule. `y`, `x + w` overflow, and
    /// `max_h >= min_h` are not checked on their own.
    pub fn validate(&self, breakpoint: GridSize) -> Result<(), TemplateError> {
        if self.id.is_empty() {
            return Err(TemplateError::grid_item(r#"field id "i" is required"#));
        }

        if self.w < 1 || self.h < 1 || self.max_h < 1 || self.min_h < 1 {
            return Err(TemplateError::grid_item(
                r#"height "h", width "w", max height "maxH" and min height "minH" must be greater than 0"#,
            ));
        }

        if self.h > self.max_h {
            return Err(TemplateError::grid_item(format!(
                r#"height "h" {} must be less than or equal to max height "maxH" {}"#,
                self.h, self.max_h
            )));
        }

        if self.h < self.min_h {
            return Err(TemplateError::grid_item(format!(
                r#"height "h" {} must be greater than or equal to min height "minH" {}"#,
                self.h, self.min_h
            )));
        }

        let max_columns = breakpoint.max_columns();

        if self.w > max_columns {
            return Err(TemplateError::grid_item(format!(
                "layout variant {breakpoint}, width {} must be less than or equal to {max_columns}",
                self.w
            )));
        }

        if self.x > max_columns {
            return Err(TemplateError::grid_item(format!(
                "layout variant {breakpoint}, coordinate X {} must be less than or equal to {max_columns}",
                self.x
            )));
        }

        Ok(())
    }

    /// Validate against a breakpoint given by name.
    pub fn validate_for(&self, breakpoint: &str) -> Result<(), TemplateError> {
        let breakpoint = breakpoint.parse::<GridSize>()?;
        self.validate(breakpoint)
    }
}

/// Validate every item of one breakpoint layout and reject repeated ids.
pub fn validate_layout(breakpoint: GridSize, items: &[GridItem]) -> Result<(), TemplateError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate(breakpoint)?;
        if !seen.insert(item.id.as_str()) {
            return Err(TemplateError::grid_item(format!(
                r#"layout variant {breakpoint}, duplicate id "i" {}"#,
                item.id
            )));
        }
    }
    Ok(())
}

/// Client-submitted item lists for all four breakpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayouts {
    pub sx: Vec<GridItem>,
    pub md: Vec<GridItem>,
    pub lg: Vec<GridItem>,
    pub xl: Vec<GridItem>,
}

impl GridLayouts {
    pub fn items(&self, breakpoint: GridSize) -> &[GridItem] {
        match breakpoint {
            GridSize::Sx => &self.sx,
            GridSize::Md => &self.md,
            GridSize::Lg => &self.lg,
            GridSize::Xl => &self.xl,
        }
    }

    /// Validate all four layouts, smallest breakpoint first.
    pub fn validate(&self) -> Result<(), TemplateError> {
        GridSize::ALL
            .iter()
            .try_for_each(|&bp| validate_layout(bp, self.items(bp)))
    }

    /// Encode the layouts into storage blobs. Call [`GridLayouts::validate`]
    /// first; this does not check geometry.
    pub fn to_template_config(&self) -> TemplateConfig {
        let mut config = TemplateConfig::default();
        for bp in GridSize::ALL {
            config.set_breakpoint_items(bp, self.items(bp));
        }
        config
    }
}

// ---------------------------------------------------------------------------
// Template config
// ---------------------------------------------------------------------------

/// Stored grid configuration: one JSON array of [`GridItem`] per breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub sx: serde_json::Value,
    pub md: serde_json::Value,
    pub lg: serde_json::Value,
    pub xl: serde_json::Value,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let empty = || serde_json::Value::Array(Vec::new());
        Self {
            sx: empty(),
            md: empty(),
            lg: empty(),
            xl: empty(),
        }
    }
}

impl TemplateConfig {
    /// The raw stored blob for a breakpoint.
    pub fn breakpoint(&self, breakpoint: GridSize) -> &serde_json::Value {
        match breakpoint {
            GridSize::Sx => &self.sx,
            GridSize::Md => &self.md,
            GridSize::Lg => &self.lg,
            GridSize::Xl => &self.xl,
        }
    }

    fn breakpoint_mut(&mut self, breakpoint: GridSize) -> &mut serde_json::Value {
        match breakpoint {
            GridSize::Sx => &mut self.sx,
            GridSize::Md => &mut self.md,
            GridSize::Lg => &mut self.lg,
            GridSize::Xl => &mut self.xl,
        }
    }

    /// Serialize `items` into the slot for `breakpoint`, replacing its
    /// previous contents. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the items cannot be encoded as JSON, which cannot happen for
    /// the plain string and integer fields of [`GridItem`].
    pub fn set_breakpoint_items(&mut self, breakpoint: GridSize, items: &[GridItem]) -> &mut Self {
        let blob = serde_json::to_value(items).expect("grid items always encode as JSON");
        *self.breakpoint_mut(breakpoint) = blob;
        self
    }

    /// Decode the items stored for `breakpoint`, in stored order.
    pub fn breakpoint_items(&self, breakpoint: GridSize) -> Result<Vec<GridItem>, serde_json::Error> {
        Vec::<GridItem>::deserialize(self.breakpoint(breakpoint))
    }
}

// ---------------------------------------------------------------------------
// Template identity
// ---------------------------------------------------------------------------

/// Name and label of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTemplateBase {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl DashboardTemplateBase {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Template name must not be empty".to_string(),
            ));
        }
        if self.display_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Template display name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A system-provided template that is not owned by any user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseDashboardTemplate {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "templateConfig")]
    pub template_config: TemplateConfig,
}

impl BaseDashboardTemplate {
    /// The name/label pair used when copying this template to a user.
    pub fn template_base(&self) -> DashboardTemplateBase {
        DashboardTemplateBase {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn item(id: &str, x: i64, w: i64, h: i64, min_h: i64, max_h: i64) -> GridItem {
        GridItem {
            title: format!("Tile {id}"),
            id: id.to_string(),
            x,
            y: 0,
            w,
            h,
            max_h,
            min_h,
        }
    }

    // -- Template kinds -----------------------------------------------------

    #[test]
    fn landing_page_is_a_valid_template() {
        assert_eq!(
            "landingPage".parse::<AvailableTemplate>(),
            Ok(AvailableTemplate::LandingPage)
        );
        assert!(validate_template_name("landingPage").is_ok());
    }

    #[test]
    fn unknown_template_names_rejected() {
        for name in ["", "landingpage", "LandingPage", "dashboard"] {
            assert_matches!(
                validate_template_name(name),
                Err(TemplateError::InvalidTemplate(got)) if got == name
            );
        }
    }

    #[test]
    fn template_error_message_names_expected_and_actual() {
        let err = "home".parse::<AvailableTemplate>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid dashboard template. Expected one of landingPage, got home"
        );
    }

    #[test]
    fn template_serializes_as_storage_value() {
        assert_eq!(
            serde_json::to_value(AvailableTemplate::LandingPage).unwrap(),
            json!("landingPage")
        );
        assert_eq!(AvailableTemplate::LandingPage.to_string(), "landingPage");
    }

    // -- Breakpoints --------------------------------------------------------

    #[test]
    fn max_columns_table() {
        assert_eq!(max_columns_for("sx"), Ok(1));
        assert_eq!(max_columns_for("md"), Ok(2));
        assert_eq!(max_columns_for("lg"), Ok(3));
        assert_eq!(max_columns_for("xl"), Ok(4));
    }

    #[test]
    fn unknown_grid_sizes_rejected() {
        for size in ["", "xs", "SX", "xxl", "medium"] {
            assert_matches!(validate_grid_size(size), Err(TemplateError::InvalidGridSize(_)));
            assert_matches!(max_columns_for(size), Err(TemplateError::InvalidGridSize(_)));
        }
    }

    #[test]
    fn grid_size_round_trips_through_str() {
        for bp in GridSize::ALL {
            assert_eq!(bp.as_str().parse::<GridSize>(), Ok(bp));
            assert_eq!(serde_json::to_value(bp).unwrap(), json!(bp.as_str()));
        }
    }

    // -- Grid item validation -----------------------------------------------

    #[test]
    fn two_wide_item_fits_lg_but_not_sx() {
        let tile = item("a", 0, 2, 3, 1, 5);
        assert!(tile.validate(GridSize::Lg).is_ok());
        assert_matches!(
            tile.validate(GridSize::Sx),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains("width 2")
        );
    }

    #[test]
    fn empty_id_rejected_for_every_breakpoint() {
        let tile = item("", 0, 1, 1, 1, 1);
        for bp in GridSize::ALL {
            assert_matches!(
                tile.validate(bp),
                Err(TemplateError::InvalidGridItem { reason }) if reason.contains(r#""i" is required"#)
            );
        }
    }

    #[test]
    fn zero_height_rejected() {
        let tile = item("a", 0, 1, 0, 1, 5);
        assert_matches!(
            tile.validate(GridSize::Xl),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains("greater than 0")
        );
    }

    #[test]
    fn zero_size_bounds_rejected() {
        assert!(item("a", 0, 0, 1, 1, 1).validate(GridSize::Xl).is_err());
        assert!(item("a", 0, 1, 1, 0, 1).validate(GridSize::Xl).is_err());
        assert!(item("a", 0, 1, 1, 1, 0).validate(GridSize::Xl).is_err());
    }

    #[test]
    fn height_above_max_rejected() {
        let err = item("a", 0, 1, 10, 1, 5).validate(GridSize::Xl).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid grid item, height "h" 10 must be less than or equal to max height "maxH" 5"#
        );
    }

    #[test]
    fn height_below_min_rejected() {
        assert_matches!(
            item("a", 0, 1, 2, 3, 5).validate(GridSize::Xl),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains(r#"min height "minH" 3"#)
        );
    }

    #[test]
    fn x_beyond_columns_rejected() {
        assert_matches!(
            item("a", 3, 1, 1, 1, 1).validate(GridSize::Md),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains("coordinate X 3")
        );
    }

    #[test]
    fn height_checked_before_width() {
        // Both the height bound and the column limit are violated; the
        // height rule comes first.
        assert_matches!(
            item("a", 0, 4, 9, 1, 5).validate(GridSize::Sx),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains(r#"max height "maxH""#)
        );
    }

    #[test]
    fn validate_for_reports_bad_breakpoint_before_item_errors() {
        let tile = item("", 0, 0, 0, 0, 0);
        assert_matches!(tile.validate_for("huge"), Err(TemplateError::InvalidGridSize(_)));
        assert!(item("a", 0, 2, 3, 1, 5).validate_for("lg").is_ok());
    }

    // Documented current behaviour: these shapes are accepted as-is.

    #[test]
    fn x_equal_to_column_count_accepted() {
        assert!(item("a", 4, 1, 1, 1, 1).validate(GridSize::Xl).is_ok());
    }

    #[test]
    fn overflowing_x_plus_w_accepted() {
        assert!(item("a", 1, 1, 1, 1, 1).validate(GridSize::Sx).is_ok());
        assert!(item("a", 3, 4, 1, 1, 1).validate(GridSize::Xl).is_ok());
    }

    #[test]
    fn negative_coordinates_not_checked() {
        let mut tile = item("a", -2, 1, 1, 1, 1);
        tile.y = -7;
        assert!(tile.validate(GridSize::Lg).is_ok());
    }

    #[test]
    fn inverted_height_bounds_only_fail_through_h() {
        // min_h > max_h is never reported directly; whichever bound `h`
        // violates is reported instead.
        assert_matches!(
            item("a", 0, 1, 4, 5, 3).validate(GridSize::Xl),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains(r#"max height "maxH" 3"#)
        );
    }

    #[test]
    fn template_error_converts_to_validation() {
        let err: CoreError = TemplateError::InvalidGridSize("zz".into()).into();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("got zz"));
    }

    // -- Layouts -------------------------------------------------------------

    #[test]
    fn duplicate_ids_rejected_within_layout() {
        let items = vec![item("a", 0, 1, 1, 1, 1), item("a", 1, 1, 1, 1, 1)];
        assert_matches!(
            validate_layout(GridSize::Md, &items),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains("duplicate")
        );
    }

    #[test]
    fn same_id_allowed_across_breakpoints() {
        let layouts = GridLayouts {
            sx: vec![item("a", 0, 1, 1, 1, 1)],
            md: vec![item("a", 0, 2, 1, 1, 1)],
            ..Default::default()
        };
        assert!(layouts.validate().is_ok());
    }

    #[test]
    fn layouts_report_first_failing_breakpoint() {
        let layouts = GridLayouts {
            md: vec![item("wide", 0, 3, 1, 1, 1)],
            xl: vec![item("", 0, 1, 1, 1, 1)],
            ..Default::default()
        };
        assert_matches!(
            layouts.validate(),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains("layout variant md")
        );
    }

    #[test]
    fn missing_item_fields_decode_to_zero() {
        let layouts: GridLayouts = serde_json::from_value(json!({
            "lg": [{ "i": "a", "w": 1 }]
        }))
        .unwrap();
        assert!(layouts.sx.is_empty());
        assert_eq!(layouts.lg[0].h, 0);
        assert!(layouts.validate().is_err());
    }

    #[test]
    fn null_item_fields_decode_to_zero() {
        let items: Vec<GridItem> = serde_json::from_value(json!([
            { "title": null, "i": "a", "x": null, "y": null, "w": null, "h": 1, "maxH": 1, "minH": 1 }
        ]))
        .unwrap();
        assert_eq!(items[0].w, 0);
        assert_eq!(items[0].title, "");
        assert_matches!(
            items[0].validate(GridSize::Xl),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains("greater than 0")
        );
    }

    #[test]
    fn large_coordinates_reach_validation() {
        let items: Vec<GridItem> = serde_json::from_value(json!([
            { "i": "far", "x": 3_000_000_000_i64, "w": 1, "h": 1, "maxH": 1, "minH": 1 }
        ]))
        .unwrap();
        assert_eq!(items[0].x, 3_000_000_000);
        assert_matches!(
            items[0].validate(GridSize::Xl),
            Err(TemplateError::InvalidGridItem { reason }) if reason.contains("coordinate X 3000000000")
        );
    }

    #[test]
    fn wrongly_typed_item_fields_fail_to_decode() {
        let result = serde_json::from_value::<Vec<GridItem>>(json!([{ "i": "a", "w": "wide" }]));
        assert!(result.is_err());
    }

    // -- Template config ----------------------------------------------------

    #[test]
    fn default_config_has_empty_arrays() {
        let config = TemplateConfig::default();
        for bp in GridSize::ALL {
            assert_eq!(config.breakpoint(bp), &json!([]));
            assert!(config.breakpoint_items(bp).unwrap().is_empty());
        }
    }

    #[test]
    fn items_round_trip_through_slot() {
        let items = vec![
            item("b", 1, 2, 3, 1, 5),
            item("a", 0, 1, 1, 1, 1),
            item("c", 2, 1, 4, 2, 4),
        ];
        let mut config = TemplateConfig::default();
        config.set_breakpoint_items(GridSize::Lg, &items);

        assert_eq!(config.breakpoint_items(GridSize::Lg).unwrap(), items);
        assert!(config.breakpoint_items(GridSize::Xl).unwrap().is_empty());
    }

    #[test]
    fn setter_chains_and_replaces() {
        let mut config = TemplateConfig::default();
        config
            .set_breakpoint_items(GridSize::Sx, &[item("a", 0, 1, 1, 1, 1)])
            .set_breakpoint_items(GridSize::Sx, &[item("b", 0, 1, 1, 1, 1)])
            .set_breakpoint_items(GridSize::Md, &[item("c", 0, 2, 1, 1, 1)]);

        let sx = config.breakpoint_items(GridSize::Sx).unwrap();
        assert_eq!(sx.len(), 1);
        assert_eq!(sx[0].id, "b");
        assert_eq!(config.breakpoint_items(GridSize::Md).unwrap()[0].id, "c");
    }

    #[test]
    fn stored_blob_uses_short_keys() {
        let mut config = TemplateConfig::default();
        config.set_breakpoint_items(GridSize::Xl, &[item("a", 0, 2, 3, 1, 5)]);
        assert_eq!(
            config.xl,
            json!([{
                "title": "Tile a",
                "i": "a",
                "x": 0,
                "y": 0,
                "w": 2,
                "h": 3,
                "maxH": 5,
                "minH": 1
            }])
        );
    }

    #[test]
    fn to_template_config_fills_every_slot() {
        let layouts = GridLayouts {
            sx: vec![item("s", 0, 1, 1, 1, 1)],
            md: vec![item("m", 0, 1, 1, 1, 1)],
            lg: vec![item("l", 0, 1, 1, 1, 1)],
            xl: vec![item("x", 0, 1, 1, 1, 1)],
        };
        let config = layouts.to_template_config();
        for bp in GridSize::ALL {
            assert_eq!(config.breakpoint_items(bp).unwrap(), layouts.items(bp));
        }
    }

    // -- Template identity ----------------------------------------------------

    #[test]
    fn blank_template_names_rejected() {
        let base = DashboardTemplateBase {
            name: " ".to_string(),
            display_name: "Home".to_string(),
        };
        assert_matches!(base.validate(), Err(CoreError::Validation(_)));

        let base = DashboardTemplateBase {
            name: "home".to_string(),
            display_name: String::new(),
        };
        assert_matches!(base.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn template_base_uses_camel_case_label() {
        let base = DashboardTemplateBase {
            name: "home".to_string(),
            display_name: "Home".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&base).unwrap(),
            json!({ "name": "home", "displayName": "Home" })
        );
    }
}
