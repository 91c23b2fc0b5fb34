//! Bindings for the parts of three.js, its CSS2D label renderer and
//! three-globe that the widget drives.

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen(module = "three")]
extern "C" {
    pub type Object3D;

    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, getter)]
    pub fn up(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);

    #[wasm_bindgen(method, js_name = lookAt)]
    pub fn look_at(this: &Object3D, x: f64, y: f64, z: f64);

    pub type Vector3;

    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Vector3;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Vector3) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Vector3) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn z(this: &Vector3) -> f64;

    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f64, y: f64, z: f64);

    #[wasm_bindgen(extends = Object3D)]
    pub type Scene;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Scene;

    #[wasm_bindgen(extends = Object3D)]
    pub type PerspectiveCamera;

    #[wasm_bindgen(constructor)]
    pub fn new() -> PerspectiveCamera;

    #[wasm_bindgen(method, getter)]
    pub fn aspect(this: &PerspectiveCamera) -> f64;

    #[wasm_bindgen(method, setter)]
    pub fn set_aspect(this: &PerspectiveCamera, aspect: f64);

    #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
    pub fn update_projection_matrix(this: &PerspectiveCamera);

    #[wasm_bindgen(extends = Object3D)]
    pub type AmbientLight;

    #[wasm_bindgen(constructor)]
    pub fn new(color: u32, intensity: f64) -> AmbientLight;

    #[wasm_bindgen(extends = Object3D)]
    pub type DirectionalLight;

    #[wasm_bindgen(constructor)]
    pub fn new(color: u32, intensity: f64) -> DirectionalLight;

    #[wasm_bindgen(js_name = WebGLRenderer)]
    pub type WebGlRenderer;

    #[wasm_bindgen(constructor, catch, js_class = "WebGLRenderer")]
    pub fn new(parameters: &JsValue) -> Result<WebGlRenderer, JsValue>;

    #[wasm_bindgen(method, js_class = "WebGLRenderer", js_name = setClearColor)]
    pub fn set_clear_color(this: &WebGlRenderer, color: u32, alpha: f64);

    #[wasm_bindgen(method, js_class = "WebGLRenderer", js_name = setSize)]
    pub fn set_size(this: &WebGlRenderer, width: f64, height: f64);

    #[wasm_bindgen(method, getter, js_class = "WebGLRenderer", js_name = domElement)]
    pub fn dom_element(this: &WebGlRenderer) -> HtmlElement;

    #[wasm_bindgen(method, js_class = "WebGLRenderer")]
    pub fn render(this: &WebGlRenderer, scene: &Scene, camera: &PerspectiveCamera);
}

#[wasm_bindgen(module = "three/addons/renderers/CSS2DRenderer.js")]
extern "C" {
    #[wasm_bindgen(js_name = CSS2DRenderer)]
    pub type Css2dRenderer;

    #[wasm_bindgen(constructor, catch, js_class = "CSS2DRenderer")]
    pub fn new() -> Result<Css2dRenderer, JsValue>;

    #[wasm_bindgen(method, js_class = "CSS2DRenderer", js_name = setSize)]
    pub fn set_size(this: &Css2dRenderer, width: f64, height: f64);

    #[wasm_bindgen(method, getter, js_class = "CSS2DRenderer", js_name = domElement)]
    pub fn dom_element(this: &Css2dRenderer) -> HtmlElement;

    #[wasm_bindgen(method, js_class = "CSS2DRenderer")]
    pub fn render(this: &Css2dRenderer, scene: &Scene, camera: &PerspectiveCamera);
}

// The globe layer's setters are chainable; the returned `this` is dropped.
#[wasm_bindgen(module = "three-globe")]
extern "C" {
    #[wasm_bindgen(js_name = default, extends = Object3D)]
    pub type ThreeGlobe;

    #[wasm_bindgen(constructor, catch, js_class = "default")]
    pub fn new() -> Result<ThreeGlobe, JsValue>;

    #[wasm_bindgen(method, js_class = "default", js_name = globeImageUrl)]
    pub fn globe_image_url(this: &ThreeGlobe, url: &str);

    #[wasm_bindgen(method, js_class = "default", js_name = atmosphereAltitude)]
    pub fn atmosphere_altitude(this: &ThreeGlobe, altitude: f64);

    #[wasm_bindgen(method, js_class = "default", js_name = atmosphereColor)]
    pub fn atmosphere_color(this: &ThreeGlobe, color: &str);

    #[wasm_bindgen(method, js_class = "default", js_name = htmlElementsData)]
    pub fn html_elements_data(this: &ThreeGlobe, data: &JsValue);

    #[wasm_bindgen(method, js_class = "default", js_name = htmlElement)]
    pub fn html_element(this: &ThreeGlobe, factory: &Function);

    #[wasm_bindgen(method, js_class = "default", js_name = arcsData)]
    pub fn arcs_data(this: &ThreeGlobe, data: &JsValue);

    #[wasm_bindgen(method, js_class = "default", js_name = arcColor)]
    pub fn arc_color(this: &ThreeGlobe, field: &str);

    #[wasm_bindgen(method, js_class = "default", js_name = arcDashLength)]
    pub fn arc_dash_length(this: &ThreeGlobe, length: f64);

    #[wasm_bindgen(method, js_class = "default", js_name = arcDashGap)]
    pub fn arc_dash_gap(this: &ThreeGlobe, gap: f64);

    #[wasm_bindgen(method, js_class = "default", js_name = arcDashInitialGap)]
    pub fn arc_dash_initial_gap(this: &ThreeGlobe, accessor: &Function);

    #[wasm_bindgen(method, js_class = "default", js_name = arcDashAnimateTime)]
    pub fn arc_dash_animate_time(this: &ThreeGlobe, millis: f64);

    #[wasm_bindgen(method, js_class = "default", js_name = setPointOfView)]
    pub fn set_point_of_view(this: &ThreeGlobe, camera_position: &Vector3, globe_position: &Vector3);
}
