use foundation::math::Vec3;
use js_sys::{Object, Reflect};
use scene::camera::{CameraPose, CameraRig, Viewport};
use scene::globe::{ArcDash, Atmosphere, GlobeLayer, MarkerStyle};
use scene::graph::SceneGraph;
use scene::lights::{AmbientLight, DirectionalLight};
use scene::{ArcDatum, PointDatum};
use serde::Serialize;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::three;
use crate::error::WidgetError;
use crate::toolkit::{Surface, SurfaceKind, Toolkit};

/// Fully transparent white, so the page background shows through the canvas.
const CLEAR_COLOR: u32 = 0xffffff;
const CLEAR_ALPHA: f64 = 0.0;

pub(crate) fn js_error(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, WidgetError> {
    let json = serde_json::to_string(value).map_err(|e| WidgetError::Globe(e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|e| WidgetError::Globe(js_error(&e)))
}

fn vector(v: &three::Vector3) -> Vec3 {
    Vec3::new(v.x(), v.y(), v.z())
}

/// three-globe instance plus the callbacks it holds on to.
pub struct WebGlobe {
    inner: three::ThreeGlobe,
    document: Document,
    _label_factory: Option<Closure<dyn FnMut(JsValue) -> JsValue>>,
    _initial_gap: Option<Closure<dyn FnMut() -> f64>>,
}

/// Build the label element for one point datum.
fn marker_element(
    document: &Document,
    marker: &MarkerStyle,
    datum: &JsValue,
) -> Result<HtmlElement, JsValue> {
    let size = Reflect::get(datum, &JsValue::from_str("size"))?
        .as_f64()
        .unwrap_or(0.0);
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_inner_html(&marker.svg);
    let style = el.style();
    style.set_property("color", &marker.color)?;
    style.set_property("width", &marker.width_css(size))?;
    Ok(el)
}

impl GlobeLayer for WebGlobe {
    type Error = WidgetError;

    fn set_globe_image_url(&mut self, url: &str) {
        self.inner.globe_image_url(url);
    }

    fn set_atmosphere(&mut self, atmosphere: &Atmosphere) {
        self.inner.atmosphere_altitude(atmosphere.altitude);
        self.inner.atmosphere_color(&atmosphere.color);
    }

    fn set_points(&mut self, points: &[PointDatum], marker: &MarkerStyle) -> Result<(), WidgetError> {
        let document = self.document.clone();
        let marker = marker.clone();
        let factory = Closure::wrap(Box::new(move |datum: JsValue| {
            match marker_element(&document, &marker, &datum) {
                Ok(el) => el.into(),
                Err(err) => {
                    warn!(error = %js_error(&err), "marker element creation failed");
                    // three-globe expects an element for every datum.
                    document
                        .create_element("div")
                        .map(JsValue::from)
                        .unwrap_or(JsValue::NULL)
                }
            }
        }) as Box<dyn FnMut(JsValue) -> JsValue>);

        self.inner.html_elements_data(&to_js(points)?);
        self.inner.html_element(factory.as_ref().unchecked_ref());
        self._label_factory = Some(factory);
        Ok(())
    }

    fn set_arcs(
        &mut self,
        arcs: &[ArcDatum],
        color_field: &str,
        dash: &ArcDash,
    ) -> Result<(), WidgetError> {
        let dash_draw = dash.clone();
        let initial_gap = Closure::wrap(Box::new(move || {
            dash_draw.sample_initial_gap(&mut rand::thread_rng())
        }) as Box<dyn FnMut() -> f64>);

        self.inner.arcs_data(&to_js(arcs)?);
        self.inner.arc_color(color_field);
        self.inner.arc_dash_length(dash.length);
        self.inner.arc_dash_gap(dash.gap);
        self.inner
            .arc_dash_initial_gap(initial_gap.as_ref().unchecked_ref());
        self.inner.arc_dash_animate_time(dash.animate_time_ms);
        self._initial_gap = Some(initial_gap);
        Ok(())
    }

    fn position(&self) -> Vec3 {
        vector(&self.inner.position())
    }

    fn set_point_of_view(&mut self, camera_position: Vec3, globe_position: Vec3) {
        let camera = three::Vector3::new(camera_position.x, camera_position.y, camera_position.z);
        let globe = three::Vector3::new(globe_position.x, globe_position.y, globe_position.z);
        self.inner.set_point_of_view(&camera, &globe);
    }
}

pub struct WebScene(three::Scene);

impl SceneGraph for WebScene {
    type Globe = WebGlobe;

    fn add_globe(&mut self, globe: &WebGlobe) {
        self.0.add(&globe.inner);
    }

    fn add_ambient_light(&mut self, light: &AmbientLight) {
        self.0
            .add(&three::AmbientLight::new(light.color, light.intensity));
    }

    fn add_directional_light(&mut self, light: &DirectionalLight) {
        let node = three::DirectionalLight::new(light.color, light.intensity);
        let [x, y, z] = light.position;
        node.position().set(x, y, z);
        self.0.add(&node);
    }
}

pub struct WebCamera(three::PerspectiveCamera);

impl CameraRig for WebCamera {
    fn set_aspect(&mut self, aspect: f64) {
        self.0.set_aspect(aspect);
        self.0.update_projection_matrix();
    }

    fn aspect(&self) -> f64 {
        self.0.aspect()
    }

    fn position(&self) -> Vec3 {
        vector(&self.0.position())
    }

    fn set_pose(&mut self, pose: &CameraPose) {
        let CameraPose {
            position,
            up,
            target,
        } = *pose;
        self.0.position().set(position.x, position.y, position.z);
        self.0.up().set(up.x, up.y, up.z);
        self.0.look_at(target.x, target.y, target.z);
    }
}

enum Renderer {
    WebGl(three::WebGlRenderer),
    Labels(three::Css2dRenderer),
}

pub struct WebSurface {
    kind: SurfaceKind,
    renderer: Renderer,
    size: Viewport,
}

impl Surface for WebSurface {
    type Element = HtmlElement;
    type Scene = WebScene;
    type Camera = WebCamera;

    fn kind(&self) -> SurfaceKind {
        self.kind
    }

    fn set_size(&mut self, viewport: Viewport) {
        match &self.renderer {
            Renderer::WebGl(r) => r.set_size(viewport.width, viewport.height),
            Renderer::Labels(r) => r.set_size(viewport.width, viewport.height),
        }
        self.size = viewport;
    }

    fn size(&self) -> Viewport {
        self.size
    }

    fn element(&self) -> HtmlElement {
        match &self.renderer {
            Renderer::WebGl(r) => r.dom_element(),
            Renderer::Labels(r) => r.dom_element(),
        }
    }

    fn render(&mut self, scene: &WebScene, camera: &WebCamera) {
        match &self.renderer {
            Renderer::WebGl(r) => r.render(&scene.0, &camera.0),
            Renderer::Labels(r) => r.render(&scene.0, &camera.0),
        }
    }
}

/// three.js with the CSS2D label renderer and the three-globe layer.
pub struct ThreeToolkit {
    document: Document,
}

impl ThreeToolkit {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Toolkit for ThreeToolkit {
    type Element = HtmlElement;
    type Globe = WebGlobe;
    type Scene = WebScene;
    type Camera = WebCamera;
    type Surface = WebSurface;

    fn create_globe(&self) -> Result<WebGlobe, WidgetError> {
        let inner = three::ThreeGlobe::new().map_err(|e| WidgetError::Globe(js_error(&e)))?;
        Ok(WebGlobe {
            inner,
            document: self.document.clone(),
            _label_factory: None,
            _initial_gap: None,
        })
    }

    fn create_scene(&self) -> WebScene {
        WebScene(three::Scene::new())
    }

    fn create_camera(&self) -> WebCamera {
        WebCamera(three::PerspectiveCamera::new())
    }

    fn create_surface(&self, kind: SurfaceKind) -> Result<WebSurface, WidgetError> {
        let renderer = match kind {
            SurfaceKind::Primary => {
                let params = Object::new();
                Reflect::set(&params, &JsValue::from_str("alpha"), &JsValue::TRUE)
                    .map_err(|e| WidgetError::Renderer(js_error(&e)))?;
                let renderer = three::WebGlRenderer::new(&params)
                    .map_err(|e| WidgetError::Renderer(js_error(&e)))?;
                renderer.set_clear_color(CLEAR_COLOR, CLEAR_ALPHA);
                Renderer::WebGl(renderer)
            }
            SurfaceKind::LabelOverlay => Renderer::Labels(
                three::Css2dRenderer::new().map_err(|e| WidgetError::Renderer(js_error(&e)))?,
            ),
        };
        Ok(WebSurface {
            kind,
            renderer,
            size: Viewport::new(0.0, 0.0),
        })
    }
}
