//! The rendering library surface a widget is assembled from.
//!
//! A [`Toolkit`] bundles the scene-graph library and its add-ons (label
//! renderer, globe layer) behind constructors, so the widget setup receives
//! every collaborator explicitly.

use scene::camera::{CameraRig, Viewport};
use scene::globe::GlobeLayer;
use scene::graph::SceneGraph;

use crate::error::WidgetError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Transparent-background 3D rasterizer; receives pointer input.
    Primary,
    /// HTML compositor for the point labels, stacked over the primary surface.
    LabelOverlay,
}

impl SurfaceKind {
    /// Creation, stacking and render order.
    pub const ALL: [SurfaceKind; 2] = [SurfaceKind::Primary, SurfaceKind::LabelOverlay];

    pub fn is_overlay(self) -> bool {
        matches!(self, SurfaceKind::LabelOverlay)
    }
}

/// A renderer that owns one DOM element.
pub trait Surface {
    type Element;
    type Scene;
    type Camera;

    fn kind(&self) -> SurfaceKind;
    fn set_size(&mut self, viewport: Viewport);
    fn size(&self) -> Viewport;
    fn element(&self) -> Self::Element;
    fn render(&mut self, scene: &Self::Scene, camera: &Self::Camera);
}

pub trait Toolkit {
    type Element: Clone;
    type Globe: GlobeLayer<Error = WidgetError>;
    type Scene: SceneGraph<Globe = Self::Globe>;
    type Camera: CameraRig;
    type Surface: Surface<Element = Self::Element, Scene = Self::Scene, Camera = Self::Camera>;

    fn create_globe(&self) -> Result<Self::Globe, WidgetError>;
    fn create_scene(&self) -> Self::Scene;
    fn create_camera(&self) -> Self::Camera;
    fn create_surface(&self, kind: SurfaceKind) -> Result<Self::Surface, WidgetError>;
}
