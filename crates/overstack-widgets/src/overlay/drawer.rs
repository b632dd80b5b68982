#![forbid(unsafe_code)]

//! Edge-anchored drawer overlay.
//!
//! A drawer slides in from one viewport edge. Edges along the top or bottom
//! span the full width; side edges span the full height. Drawers do not
//! recenter on resize.
//!
//! # Invariants
//!
//! - Top/bottom drawers: width is full, height is the configured height or
//!   [`DRAWER_HEIGHT`].
//! - Left/right drawers: height is full, width is the configured width or
//!   [`DRAWER_WIDTH`].
//! - Placement names match exactly (`"top"`, `"bottom"`, `"left"`,
//!   `"right"`); anything else, including `"Top"` or `" top"`, falls back to
//!   [`Placement::Right`].

use std::any::Any;
use std::fmt;

use overstack_core::{Length, OverlaySize};

use super::config::{OverlayOptions, ResultCallback, ResultData};
use super::lifecycle::{OverlayLifecycle, OverlaySlot};
use super::services::{OverlayServices, StackPlacement};
use super::stack::StackOverlay;

/// Default drawer width for side placements, in pixels.
pub const DRAWER_WIDTH: u32 = 300;

/// Default drawer height for top/bottom placements, in pixels.
pub const DRAWER_HEIGHT: u32 = 300;

/// Style class marking a drawer with rounded inner corners.
pub const DRAWER_ROUNDED_CLASS: &str = "overstack-drawer--rounded";

/// Viewport edge a drawer is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Placement {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

impl Placement {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Parse a placement name, falling back to [`Placement::Right`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            _ => Self::Right,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Whether the drawer spans the full viewport width.
    #[inline]
    pub const fn spans_width(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Style class for this edge.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Top => "overstack-drawer--top",
            Self::Bottom => "overstack-drawer--bottom",
            Self::Left => "overstack-drawer--left",
            Self::Right => "overstack-drawer--right",
        }
    }

    /// Name of the slide-in transition for this edge.
    pub const fn transition_name(self) -> &'static str {
        match self {
            Self::Top => "overstack-drawer-slide-in-top",
            Self::Bottom => "overstack-drawer-slide-in-bottom",
            Self::Left => "overstack-drawer-slide-in-left",
            Self::Right => "overstack-drawer-slide-in-right",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Placement {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Placement {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.name().to_owned()
    }
}

/// Resolve drawer size from configured dimensions and placement.
///
/// A configured `0` counts as unset.
#[must_use]
pub fn drawer_size(width: Option<u32>, height: Option<u32>, placement: Placement) -> OverlaySize {
    let width = width.filter(|&w| w > 0);
    let height = height.filter(|&h| h > 0);
    if placement.spans_width() {
        OverlaySize::new(Length::FULL, height.unwrap_or(DRAWER_HEIGHT))
    } else {
        OverlaySize::new(width.unwrap_or(DRAWER_WIDTH), Length::FULL)
    }
}

/// Drawer configuration.
pub struct DrawerConfig {
    pub options: OverlayOptions,
    pub placement: Placement,
    /// Round the corners facing the viewport center.
    pub rounded: bool,
    callback: Option<ResultCallback>,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            options: OverlayOptions::default(),
            placement: Placement::default(),
            rounded: false,
            callback: None,
        }
    }
}

impl fmt::Debug for DrawerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerConfig")
            .field("options", &self.options)
            .field("placement", &self.placement)
            .field("rounded", &self.rounded)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl DrawerConfig {
    pub fn new(placement: impl Into<Placement>) -> Self {
        Self {
            placement: placement.into(),
            ..Self::default()
        }
    }

    pub fn options(mut self, options: OverlayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    /// Receive the close result.
    pub fn callback(mut self, callback: impl FnOnce(Option<ResultData>) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// Edge-anchored panel.
#[derive(Debug)]
pub struct Drawer {
    lifecycle: OverlayLifecycle,
    options: OverlayOptions,
    placement: Placement,
    rounded: bool,
}

impl Drawer {
    pub fn new(slot: OverlaySlot, config: DrawerConfig) -> Self {
        let DrawerConfig {
            options,
            placement,
            rounded,
            callback,
        } = config;
        let mut lifecycle = OverlayLifecycle::new(slot, &options, callback);
        let size = drawer_size(options.width, options.height, placement);
        lifecycle.set_dialog_size(size.width, size.height);
        Self {
            lifecycle,
            options,
            placement,
            rounded,
        }
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[inline]
    pub fn rounded(&self) -> bool {
        self.rounded
    }

    /// Style classes: the edge class, then the rounded marker if set.
    pub fn position_class(&self) -> Vec<&'static str> {
        let mut classes = vec![self.placement.class_name()];
        if self.rounded {
            classes.push(DRAWER_ROUNDED_CLASS);
        }
        classes
    }

    #[inline]
    pub fn transition_name(&self) -> &'static str {
        self.placement.transition_name()
    }
}

impl StackOverlay for Drawer {
    fn lifecycle(&self) -> &OverlayLifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut OverlayLifecycle {
        &mut self.lifecycle
    }

    fn options(&self) -> &OverlayOptions {
        &self.options
    }

    fn mount(&mut self, _placement: &StackPlacement, services: &mut OverlayServices) {
        self.lifecycle.setup_automatic_close(services);
        self.lifecycle.open_dialog(services);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::overlay::lifecycle::OverlayKey;

    fn drawer(config: DrawerConfig) -> Drawer {
        Drawer::new(OverlaySlot::new(0, OverlayKey::new(1)), config)
    }

    #[test]
    fn placement_names_fall_back_to_right() {
        assert_eq!(Placement::from_name("top"), Placement::Top);
        assert_eq!(Placement::from_name("bottom"), Placement::Bottom);
        assert_eq!(Placement::from_name("left"), Placement::Left);
        assert_eq!(Placement::from_name("diagonal"), Placement::Right);
        assert_eq!(Placement::from_name(""), Placement::Right);
    }

    #[test]
    fn placement_names_are_case_sensitive() {
        assert_eq!(Placement::from_name("Top"), Placement::Right);
        assert_eq!(Placement::from_name(" left"), Placement::Right);
        assert_eq!(Placement::from_name("BOTTOM"), Placement::Right);
        assert_eq!(Placement::from("top".to_string()), Placement::Top);
    }

    #[test]
    fn top_drawer_spans_width() {
        assert_eq!(
            drawer_size(None, Some(300), Placement::Top),
            OverlaySize::new(Length::FULL, 300)
        );
        assert_eq!(
            drawer_size(Some(500), Some(120), Placement::Bottom),
            OverlaySize::new(Length::FULL, 120)
        );
    }

    #[test]
    fn side_drawer_spans_height() {
        assert_eq!(
            drawer_size(None, None, Placement::Left),
            OverlaySize::new(DRAWER_WIDTH, Length::FULL)
        );
        assert_eq!(
            drawer_size(Some(400), None, Placement::Left),
            OverlaySize::new(400, Length::FULL)
        );
        assert_eq!(
            drawer_size(Some(0), Some(90), Placement::Right),
            OverlaySize::new(DRAWER_WIDTH, Length::FULL)
        );
    }

    #[test]
    fn unknown_placement_matches_right() {
        let bogus = Placement::from_name("bogus");
        assert_eq!(
            drawer_size(Some(250), Some(100), bogus),
            drawer_size(Some(250), Some(100), Placement::Right)
        );
        assert_eq!(bogus.class_name(), Placement::Right.class_name());
        assert_eq!(bogus.transition_name(), Placement::Right.transition_name());
    }

    #[test]
    fn classes_follow_placement() {
        let d = drawer(DrawerConfig::new("left").rounded(true));
        assert_eq!(
            d.position_class(),
            vec!["overstack-drawer--left", DRAWER_ROUNDED_CLASS]
        );
        assert_eq!(d.transition_name(), "overstack-drawer-slide-in-left");
        assert_eq!(drawer(DrawerConfig::default()).position_class(), vec![
            "overstack-drawer--right"
        ]);
    }

    #[test]
    fn size_applied_at_construction() {
        let d = drawer(DrawerConfig::new(Placement::Top).options(OverlayOptions::new().height(240)));
        assert_eq!(d.lifecycle().size(), &OverlaySize::new(Length::FULL, 240));
    }

    #[test]
    fn mount_opens_and_arms_timer() {
        let mut services = OverlayServices::new(overstack_core::Viewport::new(800, 600));
        let mut d = drawer(DrawerConfig::default().options(OverlayOptions::new().duration(500)));
        d.mount(&StackPlacement::default(), &mut services);
        assert!(d.lifecycle().is_visible());
        assert!(d.lifecycle().auto_close_timer().is_some());
        assert_eq!(services.pending_timers(), 1);
    }

    proptest! {
        #[test]
        fn full_extent_matches_edge(
            width in proptest::option::of(0u32..2000),
            height in proptest::option::of(0u32..2000),
            idx in 0usize..4,
        ) {
            let placement = Placement::ALL[idx];
            let size = drawer_size(width, height, placement);
            if placement.spans_width() {
                prop_assert!(size.width.is_full());
                prop_assert!(size.height.as_px().is_some_and(|h| h > 0));
            } else {
                prop_assert!(size.height.is_full());
                prop_assert!(size.width.as_px().is_some_and(|w| w > 0));
            }
        }
    }
}
