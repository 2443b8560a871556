//! Floating action button control
//!
//! A [`Fab`] owns two independent animation channels: a visibility
//! channel (scale 0..1, spring) and a press channel (rotation 0..1,
//! tween). Both are value cells on the instance's [`FrameClock`]; the
//! host drains the clock each frame and calls [`Fab::render`] to read
//! the current values back out as a data tree.

use std::rc::Rc;

use sourdough_animation::{Animatable, AnimationSpec, Easing, FrameClock, SpringSpec, TweenSpec};
use sourdough_ui_graphics::{Color, TextStyle};

use crate::fab_style::{
    resolve_fab_style, ResolvedFabStyle, StyleOverride, LABEL_FONT_SIZE, LABEL_MARGIN_LEFT,
};
use crate::icon::{IconSource, DEFAULT_GLYPH, ICON_SIZE};
use crate::render::{
    ContainerNode, FabChild, FabContent, FabNode, IconContent, LabelContent, SurfaceNode,
};
use crate::ripple::RippleSurface;
use crate::shadow::ShadowStyle;
use crate::theme::Theme;

/// Duration of the press-driven icon turn.
pub const ICON_TURN_MILLIS: u64 = 230;
/// Rotation of the default glyph at the end of the turn.
pub const ICON_TURN_DEGREES: f32 = 45.0;

const CONTAINER_Z_INDEX: i32 = 100;

/// Configuration for a [`Fab`].
///
/// Plain data with a usable [`Default`]; construct with struct update
/// syntax: `FabProps { label: Some("Save".into()), ..Default::default() }`.
#[derive(Clone)]
pub struct FabProps {
    /// Visibility intent driving the entrance/exit animation target.
    pub visible: bool,
    /// Animate visibility changes. When unset, visibility updates leave
    /// the scale untouched (see [`Fab::update`]).
    pub animated: bool,
    /// Press handler, invoked exactly once per press.
    pub on_press: Option<Rc<dyn Fn()>>,
    /// Mutes colors, zeroes the shadow, and tells the feedback primitive
    /// to suppress interaction.
    pub disabled: bool,
    /// Icon input; `None` renders no icon at all.
    pub icon: Option<IconSource>,
    /// Label text; switches the control to the extended size class.
    pub label: Option<String>,
    /// Compact size class, effective only without a label.
    pub mini: bool,
    pub background_color: Option<Color>,
    pub ripple_color: Option<Color>,
    /// Elevation override. `Some(0)` is honored; `None` falls back to
    /// the default elevation.
    pub shadow: Option<u8>,
    /// Merged onto the outer container node.
    pub container_style: StyleOverride,
    /// Merged onto the button surface node.
    pub style: StyleOverride,
    /// Full override of the default icon/label content.
    pub children: Option<Vec<FabChild>>,
    /// Starting value of the visibility scale, default 0.
    pub initial_scale: Option<f32>,
    /// Opaque identifier carried onto the container for test harnesses.
    pub test_id: Option<String>,
}

impl Default for FabProps {
    fn default() -> Self {
        Self {
            visible: true,
            animated: false,
            on_press: None,
            disabled: false,
            icon: Some(IconSource::default()),
            label: None,
            mini: false,
            background_color: None,
            ripple_color: None,
            shadow: None,
            container_style: StyleOverride::default(),
            style: StyleOverride::default(),
            children: None,
            initial_scale: None,
            test_id: None,
        }
    }
}

/// The floating action button control.
pub struct Fab {
    props: FabProps,
    /// Visibility channel, scale in [0, 1] at rest.
    scale: Animatable,
    /// Press channel, rotation progress in [0, 1].
    rotation: Animatable,
    /// Whether the last press left the icon in the rotated state. Flips
    /// on every press, never awaits the animation.
    pressed: bool,
    last_visible: bool,
}

impl Fab {
    /// Mount the control.
    ///
    /// The visibility scale starts at `initial_scale` (default 0). A
    /// visible, animated mount springs toward 1; a visible, non-animated
    /// mount snaps to 1; a hidden mount stays at the initial value.
    pub fn new(props: FabProps, clock: &FrameClock) -> Self {
        let mut scale = Animatable::new(props.initial_scale.unwrap_or(0.0), clock.clone());
        if props.visible && props.animated {
            scale.animate_to(1.0, entrance_spring());
        } else if props.visible {
            scale.snap_to(1.0);
        }
        let rotation = Animatable::new(0.0, clock.clone());
        let last_visible = props.visible;
        Self {
            props,
            scale,
            rotation,
            pressed: false,
            last_visible,
        }
    }

    /// Apply a new set of props, as on a re-render.
    ///
    /// A `visible` change with `animated` set redirects the visibility
    /// spring toward the new target, interrupting any animation in
    /// flight. Without `animated` the scale is deliberately left
    /// wherever it last was: callers doing abrupt show/hide remount the
    /// control or call [`Fab::snap_visibility`].
    pub fn update(&mut self, props: FabProps) {
        if props.visible != self.last_visible && props.animated {
            let target = if props.visible { 1.0 } else { 0.0 };
            self.scale.animate_to(target, entrance_spring());
        }
        self.last_visible = props.visible;
        self.props = props;
    }

    /// Snap the visibility scale to the current `visible` intent without
    /// animating. The escape hatch for non-animated show/hide.
    pub fn snap_visibility(&mut self) {
        let target = if self.props.visible { 1.0 } else { 0.0 };
        self.scale.snap_to(target);
    }

    /// Register a press, as reported by the feedback primitive.
    ///
    /// Starts the icon turn toward the side opposite the toggle flag,
    /// flips the flag, and invokes `on_press` exactly once. The flag and
    /// the issued target stay consistent even when presses arrive faster
    /// than the turn completes; each press redirects the tween. A press
    /// with no `on_press` handler is a no-op beyond the animation and a
    /// logged warning.
    pub fn press(&mut self) {
        let target = if self.pressed { 0.0 } else { 1.0 };
        self.rotation.animate_to(
            target,
            AnimationSpec::Tween(TweenSpec::tween(ICON_TURN_MILLIS, Easing::EaseInOut)),
        );
        self.pressed = !self.pressed;
        match &self.props.on_press {
            Some(on_press) => on_press(),
            None => log::warn!("fab pressed without an on_press handler; ignoring"),
        }
    }

    /// Current visibility scale.
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Current rotation of the default glyph, in degrees.
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.value() * ICON_TURN_DEGREES
    }

    /// Target of the press channel: 1.0 for the rotated state, 0.0 for
    /// the resting state. Always consistent with [`Fab::pressed`].
    pub fn rotation_target(&self) -> f32 {
        self.rotation.target()
    }

    /// The press toggle flag.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Whether either animation channel has a frame pending.
    pub fn is_animating(&self) -> bool {
        self.scale.is_animating() || self.rotation.is_animating()
    }

    pub fn props(&self) -> &FabProps {
        &self.props
    }

    /// Resolve the current geometry and colors. Pure; see
    /// [`resolve_fab_style`].
    pub fn resolved_style(&self, theme: &Theme) -> ResolvedFabStyle {
        resolve_fab_style(&self.props, theme)
    }

    /// Produce the render tree for the current frame.
    pub fn render(&self, theme: &Theme) -> FabNode {
        let resolved = self.resolved_style(theme);

        let container = ContainerNode {
            z_index: self
                .props
                .container_style
                .z_index
                .unwrap_or(CONTAINER_Z_INDEX),
            scale: self.scale.value(),
            test_id: self.props.test_id.clone(),
        };

        let mut surface = SurfaceNode {
            width: resolved.width,
            height: resolved.height,
            padding: resolved.padding,
            background: resolved.background,
            corner_radius: resolved.corner_radius,
            shadow: ShadowStyle::for_elevation(resolved.elevation),
            ripple: RippleSurface {
                tint: resolved.ripple_tint,
                container_corner_radius: resolved.corner_radius,
                disabled: self.props.disabled,
            },
        };
        self.props.style.apply_to_surface(&mut surface);

        FabNode {
            container,
            surface,
            content: self.render_content(&resolved),
        }
    }

    fn render_content(&self, resolved: &ResolvedFabStyle) -> FabContent {
        if let Some(children) = &self.props.children {
            return FabContent::Custom(children.clone());
        }
        FabContent::Composed {
            icon: self.render_icon(resolved),
            label: self.render_label(resolved),
        }
    }

    fn render_icon(&self, resolved: &ResolvedFabStyle) -> Option<IconContent> {
        let source = self.props.icon.as_ref()?;
        Some(match source {
            IconSource::Named(name) => {
                let name = if name.is_empty() {
                    DEFAULT_GLYPH
                } else {
                    name.as_str()
                };
                IconContent::Glyph {
                    name: name.to_owned(),
                    size: ICON_SIZE,
                    color: resolved.content_color,
                    rotation_degrees: self.rotation.value() * ICON_TURN_DEGREES,
                }
            }
            IconSource::Node(node) => IconContent::Prebuilt {
                name: node.name.clone(),
                size: node.size.unwrap_or(ICON_SIZE),
                color: node.color.unwrap_or(resolved.content_color),
            },
        })
    }

    fn render_label(&self, resolved: &ResolvedFabStyle) -> Option<LabelContent> {
        let text = self.props.label.as_ref()?;
        Some(LabelContent {
            text: text.clone(),
            style: TextStyle::default().with_font_size(LABEL_FONT_SIZE),
            color: resolved.content_color,
            margin_left: LABEL_MARGIN_LEFT,
        })
    }
}

fn entrance_spring() -> AnimationSpec {
    AnimationSpec::Spring(SpringSpec::gentle())
}

#[cfg(test)]
#[path = "tests/fab_tests.rs"]
mod tests;
