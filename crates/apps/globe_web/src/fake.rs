//! Recording stand-ins for the page and the rendering library.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use foundation::math::Vec3;
use scene::camera::{CameraPose, CameraRig, Viewport};
use scene::globe::{ArcDash, Atmosphere, GlobeLayer, MarkerStyle};
use scene::graph::SceneGraph;
use scene::lights::{AmbientLight, DirectionalLight};
use scene::{ArcDatum, PointDatum};

use crate::error::WidgetError;
use crate::host::Host;
use crate::toolkit::{Surface, SurfaceKind, Toolkit};

pub type FakeElement = Rc<FakeNode>;

#[derive(Debug)]
pub struct FakeNode {
    pub name: String,
    children: RefCell<Vec<FakeElement>>,
    overlay: Cell<bool>,
}

impl FakeNode {
    pub fn new(name: &str) -> FakeElement {
        Rc::new(Self {
            name: name.to_string(),
            children: RefCell::new(Vec::new()),
            overlay: Cell::new(false),
        })
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.children.borrow().clone()
    }

    pub fn is_overlay(&self) -> bool {
        self.overlay.get()
    }
}

pub struct FakeHost {
    pub viewport: Viewport,
    pub containers: Vec<FakeElement>,
    queries: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new(viewport: Viewport, containers: usize) -> Self {
        Self {
            viewport,
            containers: (0..containers)
                .map(|i| FakeNode::new(&format!("container-{i}")))
                .collect(),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl Host for FakeHost {
    type Element = FakeElement;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn query_all(&self, selector: &str) -> Result<Vec<FakeElement>, WidgetError> {
        self.queries.borrow_mut().push(selector.to_string());
        Ok(self.containers.clone())
    }

    fn append_child(&self, parent: &FakeElement, child: &FakeElement) -> Result<(), WidgetError> {
        parent.children.borrow_mut().push(child.clone());
        Ok(())
    }

    fn stack_overlay(&self, element: &FakeElement) -> Result<(), WidgetError> {
        element.overlay.set(true);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeGlobe {
    pub image_url: Option<String>,
    pub atmosphere: Option<Atmosphere>,
    pub points: usize,
    pub point_data: Vec<PointDatum>,
    pub arcs: usize,
    pub arc_data: Vec<ArcDatum>,
    pub arc_color_field: Option<String>,
    pub pov_calls: usize,
    pub last_pov: Option<(Vec3, Vec3)>,
}

impl GlobeLayer for FakeGlobe {
    type Error = WidgetError;

    fn set_globe_image_url(&mut self, url: &str) {
        self.image_url = Some(url.to_string());
    }

    fn set_atmosphere(&mut self, atmosphere: &Atmosphere) {
        self.atmosphere = Some(atmosphere.clone());
    }

    fn set_points(&mut self, points: &[PointDatum], _marker: &MarkerStyle) -> Result<(), WidgetError> {
        self.points = points.len();
        self.point_data = points.to_vec();
        Ok(())
    }

    fn set_arcs(
        &mut self,
        arcs: &[ArcDatum],
        color_field: &str,
        _dash: &ArcDash,
    ) -> Result<(), WidgetError> {
        self.arcs = arcs.len();
        self.arc_data = arcs.to_vec();
        self.arc_color_field = Some(color_field.to_string());
        Ok(())
    }

    fn position(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn set_point_of_view(&mut self, camera_position: Vec3, globe_position: Vec3) {
        self.pov_calls += 1;
        self.last_pov = Some((camera_position, globe_position));
    }
}

#[derive(Debug, Default)]
pub struct FakeScene {
    pub children: Vec<&'static str>,
}

impl SceneGraph for FakeScene {
    type Globe = FakeGlobe;

    fn add_globe(&mut self, _globe: &FakeGlobe) {
        self.children.push("globe");
    }

    fn add_ambient_light(&mut self, _light: &AmbientLight) {
        self.children.push("ambient");
    }

    fn add_directional_light(&mut self, _light: &DirectionalLight) {
        self.children.push("directional");
    }
}

#[derive(Debug)]
pub struct FakeCamera {
    aspect: f64,
    pose: CameraPose,
    pub projection_updates: usize,
}

impl CameraRig for FakeCamera {
    fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect;
        self.projection_updates += 1;
    }

    fn aspect(&self) -> f64 {
        self.aspect
    }

    fn position(&self) -> Vec3 {
        self.pose.position
    }

    fn set_pose(&mut self, pose: &CameraPose) {
        self.pose = *pose;
    }
}

pub struct FakeSurface {
    kind: SurfaceKind,
    size: Viewport,
    element: FakeElement,
    renders: Rc<RefCell<Vec<String>>>,
}

impl Surface for FakeSurface {
    type Element = FakeElement;
    type Scene = FakeScene;
    type Camera = FakeCamera;

    fn kind(&self) -> SurfaceKind {
        self.kind
    }

    fn set_size(&mut self, viewport: Viewport) {
        self.size = viewport;
    }

    fn size(&self) -> Viewport {
        self.size
    }

    fn element(&self) -> FakeElement {
        self.element.clone()
    }

    fn render(&mut self, _scene: &FakeScene, _camera: &FakeCamera) {
        self.renders.borrow_mut().push(self.element.name.clone());
    }
}

/// Counts what it builds; see [`FakeToolkit::failing_at`] for injected failures.
#[derive(Default)]
pub struct FakeToolkit {
    fail_surface_at: Option<usize>,
    globes: Cell<usize>,
    surface_attempts: Cell<usize>,
    surfaces: Cell<usize>,
    renders: Rc<RefCell<Vec<String>>>,
}

impl FakeToolkit {
    /// A toolkit whose `attempt`-th surface creation (0-based, counted across mounts) fails.
    pub fn failing_at(attempt: usize) -> Self {
        Self {
            fail_surface_at: Some(attempt),
            ..Self::default()
        }
    }

    pub fn globes_created(&self) -> usize {
        self.globes.get()
    }

    pub fn surfaces_created(&self) -> usize {
        self.surfaces.get()
    }

    pub fn render_log(&self) -> Vec<String> {
        self.renders.borrow().clone()
    }
}

impl Toolkit for FakeToolkit {
    type Element = FakeElement;
    type Globe = FakeGlobe;
    type Scene = FakeScene;
    type Camera = FakeCamera;
    type Surface = FakeSurface;

    fn create_globe(&self) -> Result<FakeGlobe, WidgetError> {
        self.globes.set(self.globes.get() + 1);
        Ok(FakeGlobe::default())
    }

    fn create_scene(&self) -> FakeScene {
        FakeScene::default()
    }

    fn create_camera(&self) -> FakeCamera {
        FakeCamera {
            aspect: 1.0,
            pose: CameraPose {
                position: Vec3::ZERO,
                up: Vec3::Y,
                target: Vec3::ZERO,
            },
            projection_updates: 0,
        }
    }

    fn create_surface(&self, kind: SurfaceKind) -> Result<FakeSurface, WidgetError> {
        let attempt = self.surface_attempts.get();
        self.surface_attempts.set(attempt + 1);
        if self.fail_surface_at == Some(attempt) {
            return Err(WidgetError::Renderer("context lost".to_string()));
        }
        self.surfaces.set(self.surfaces.get() + 1);
        let name = match kind {
            SurfaceKind::Primary => "primary",
            SurfaceKind::LabelOverlay => "label-overlay",
        };
        Ok(FakeSurface {
            kind,
            size: Viewport::new(0.0, 0.0),
            element: FakeNode::new(name),
            renders: self.renders.clone(),
        })
    }
}
