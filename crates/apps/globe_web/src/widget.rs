//! Globe widget setup and per-frame driving.
//!
//! A [`Widget`] owns every object it creates for one container: the globe
//! layer, the scene, the camera, the two renderer surfaces and the trackball
//! controls. Nothing here touches the page directly; the [`Host`] and
//! [`Toolkit`] handed to [`mount`] do.

use foundation::math::Vec2;
use scene::camera::{CameraRig, Viewport};
use scene::controls::{ControlEvent, TrackballControls};
use scene::globe::GlobeLayer;
use scene::graph::populate;
use scene::{Dataset, WidgetConfig};
use tracing::{debug, error, info};

use crate::error::WidgetError;
use crate::host::Host;
use crate::toolkit::{Surface, SurfaceKind, Toolkit};

pub struct Widget<T: Toolkit> {
    globe: T::Globe,
    scene: T::Scene,
    camera: T::Camera,
    /// Primary surface first, label overlay second.
    surfaces: Vec<T::Surface>,
    controls: TrackballControls,
}

/// Build a widget inside `container`.
///
/// The globe is configured and fed `dataset`, both surfaces are sized to the
/// window and appended (overlay stacked on top), the scene receives the globe
/// and lights, the camera is placed, and the globe point of view is synced
/// once with the starting camera.
pub fn mount<T, H>(
    toolkit: &T,
    host: &H,
    container: &T::Element,
    dataset: &Dataset,
    config: &WidgetConfig,
) -> Result<Widget<T>, WidgetError>
where
    T: Toolkit,
    H: Host<Element = T::Element>,
{
    let viewport = host.viewport();

    let mut globe = toolkit.create_globe()?;
    config.globe.apply(&mut globe, dataset)?;

    // Every surface exists before any is attached, so a failed renderer
    // leaves the container untouched.
    let surfaces = SurfaceKind::ALL
        .into_iter()
        .map(|kind| -> Result<T::Surface, WidgetError> {
            let mut surface = toolkit.create_surface(kind)?;
            surface.set_size(viewport);
            Ok(surface)
        })
        .collect::<Result<Vec<_>, WidgetError>>()?;
    for surface in &surfaces {
        let element = surface.element();
        if surface.kind().is_overlay() {
            host.stack_overlay(&element)?;
        }
        host.append_child(container, &element)?;
    }

    let mut scene = toolkit.create_scene();
    populate(&mut scene, &globe, &config.lights);

    let mut camera = toolkit.create_camera();
    config.camera.apply(&mut camera, viewport);

    let controls = TrackballControls::new(config.controls.clone(), &config.camera.pose(), viewport);

    let mut widget = Widget {
        globe,
        scene,
        camera,
        surfaces,
        controls,
    };
    widget.sync_point_of_view();

    info!(
        width = viewport.width,
        height = viewport.height,
        points = dataset.points.len(),
        arcs = dataset.arcs.len(),
        "globe widget mounted"
    );
    Ok(widget)
}

/// Mount a widget in every element matching the configured selector.
///
/// A container whose setup fails is logged and skipped; the others still get
/// their widget.
pub fn mount_page<T, H>(
    toolkit: &T,
    host: &H,
    dataset: &Dataset,
    config: &WidgetConfig,
) -> Vec<Widget<T>>
where
    T: Toolkit,
    H: Host<Element = T::Element>,
{
    let containers = match host.query_all(&config.selector) {
        Ok(containers) => containers,
        Err(err) => {
            error!(selector = %config.selector, %err, "container lookup failed");
            return Vec::new();
        }
    };
    debug!(selector = %config.selector, count = containers.len(), "globe containers found");

    containers
        .iter()
        .enumerate()
        .filter_map(
            |(index, container)| match mount(toolkit, host, container, dataset, config) {
                Ok(widget) => Some(widget),
                Err(err) => {
                    error!(index, %err, "globe widget setup failed");
                    None
                }
            },
        )
        .collect()
}

impl<T: Toolkit> Widget<T> {
    /// One animation frame: advance the controls, propagate camera changes
    /// to the globe, then render every surface in stacking order.
    pub fn tick(&mut self) {
        if self.controls.update().is_some() {
            self.camera.set_pose(&self.controls.pose());
        }
        self.dispatch_control_events();

        for surface in &mut self.surfaces {
            surface.render(&self.scene, &self.camera);
        }
    }

    /// Window resized: new camera aspect, new surface sizes.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.camera.set_aspect(viewport.aspect());
        for surface in &mut self.surfaces {
            surface.set_size(viewport);
        }
        self.controls.set_viewport(viewport);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "globe widget resized"
        );
    }

    pub fn pointer_down(&mut self, pos_px: Vec2, button: i16) {
        self.controls.pointer_down(pos_px, button);
        self.dispatch_control_events();
    }

    pub fn pointer_move(&mut self, pos_px: Vec2) {
        self.controls.pointer_move(pos_px);
        self.dispatch_control_events();
    }

    pub fn pointer_up(&mut self) {
        self.controls.pointer_up();
        self.dispatch_control_events();
    }

    pub fn wheel(&mut self, delta: f64) {
        self.controls.wheel(delta);
        self.dispatch_control_events();
    }

    /// Element that receives pointer input.
    pub fn primary_element(&self) -> Option<T::Element> {
        self.surfaces
            .iter()
            .find(|s| s.kind() == SurfaceKind::Primary)
            .map(|s| s.element())
    }

    #[cfg(test)]
    pub(crate) fn globe(&self) -> &T::Globe {
        &self.globe
    }

    #[cfg(test)]
    pub(crate) fn scene(&self) -> &T::Scene {
        &self.scene
    }

    #[cfg(test)]
    pub(crate) fn camera(&self) -> &T::Camera {
        &self.camera
    }

    #[cfg(test)]
    pub(crate) fn surfaces(&self) -> &[T::Surface] {
        &self.surfaces
    }

    fn dispatch_control_events(&mut self) {
        for event in self.controls.drain_events() {
            if event == ControlEvent::Change {
                self.sync_point_of_view();
            }
        }
    }

    fn sync_point_of_view(&mut self) {
        let globe_position = self.globe.position();
        self.globe
            .set_point_of_view(self.camera.position(), globe_position);
    }
}
