use crate::lights::{AmbientLight, DirectionalLight, LightRig};

/// Scene container the renderers draw.
pub trait SceneGraph {
    type Globe;

    fn add_globe(&mut self, globe: &Self::Globe);
    fn add_ambient_light(&mut self, light: &AmbientLight);
    fn add_directional_light(&mut self, light: &DirectionalLight);
}

/// Add the globe and the light rig, globe first.
pub fn populate<S: SceneGraph>(scene: &mut S, globe: &S::Globe, lights: &LightRig) {
    scene.add_globe(globe);
    scene.add_ambient_light(&lights.ambient);
    for light in &lights.directional {
        scene.add_directional_light(light);
    }
}

#[cfg(test)]
mod tests {
    use super::{SceneGraph, populate};
    use crate::lights::{AmbientLight, DirectionalLight, LightRig};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl SceneGraph for Recorder {
        type Globe = &'static str;

        fn add_globe(&mut self, globe: &Self::Globe) {
            self.0.push(format!("globe:{globe}"));
        }

        fn add_ambient_light(&mut self, light: &AmbientLight) {
            self.0.push(format!("ambient:{}", light.intensity));
        }

        fn add_directional_light(&mut self, light: &DirectionalLight) {
            self.0.push(format!("directional:{:?}", light.position));
        }
    }

    #[test]
    fn adds_globe_then_lights() {
        let mut scene = Recorder::default();
        populate(&mut scene, &"earth", &LightRig::default());
        assert_eq!(
            scene.0,
            vec![
                "globe:earth".to_string(),
                "ambient:1".to_string(),
                "directional:[1.0, 1.0, 1.0]".to_string(),
                "directional:[-1.0, 0.0, -1.0]".to_string(),
            ]
        );
    }
}
