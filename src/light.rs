use crate::*;

pub mod lights {
    use crate::*;

    /// Uniform light reaching every surface regardless of occlusion.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Ambient {
        pub intensity: f32,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Point {
        pub intensity: f32,
        pub position: P3,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Directional {
        pub intensity: f32,
        /// Points from the surface toward the light.
        pub direction: V3,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient(lights::Ambient),
    Point(lights::Point),
    Directional(lights::Directional),
}

impl_from_variants! {Light: lights::{Ambient, Point, Directional}}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        lights::Ambient { intensity }.into()
    }

    pub fn point(intensity: f32, position: P3) -> Self {
        lights::Point {
            intensity,
            position,
        }
        .into()
    }

    pub fn directional(intensity: f32, direction: V3) -> Self {
        lights::Directional {
            intensity,
            direction,
        }
        .into()
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient(l) => l.intensity,
            Light::Point(l) => l.intensity,
            Light::Directional(l) => l.intensity,
        }
    }

    /// Unit direction toward the light from `pos` and the shadow ray length that reaches it.
    ///
    /// `None` for ambient lights, which have neither.
    pub fn direction_from(&self, pos: &P3) -> Option<(V3, f32)> {
        match self {
            Light::Ambient(_) => None,
            Light::Point(l) => {
                let to_light = l.position - pos;
                Some((to_light.normalized(), to_light.length()))
            }
            Light::Directional(l) => Some((l.direction.normalized(), f32::INFINITY)),
        }
    }
}

#[test]
fn test_direction_from() {
    let p = P3::new(0.0, 0.0, 0.0);
    assert_eq!(Light::ambient(0.2).direction_from(&p), None);

    let (dir, dist) = Light::point(0.6, P3::new(0.0, 4.0, 0.0))
        .direction_from(&p)
        .unwrap();
    assert_eq!(dir, V3::new(0.0, 1.0, 0.0));
    assert_eq!(dist, 4.0);

    let (dir, dist) = Light::directional(0.2, V3::new(0.0, 0.0, -2.0))
        .direction_from(&p)
        .unwrap();
    assert_eq!(dir, V3::new(0.0, 0.0, -1.0));
    assert_eq!(dist, f32::INFINITY);

    assert_eq!(Light::point(0.6, p).intensity(), 0.6);
}
