use crate::*;

pub const SCENE_NAMES: &[&str] = &["spheres", "mirrors", "shadow", "empty"];

pub fn by_name(name: &str) -> Option<Scene> {
    match name {
        "spheres" => Some(make_spheres()),
        "mirrors" => Some(make_mirrors()),
        "shadow" => Some(make_shadow()),
        "empty" => Some(make_empty()),
        _ => None,
    }
}

/// Three glossy spheres on a huge yellow floor sphere.
pub fn make_spheres() -> Scene {
    let mut scene = Scene::new(colors::BLACK, P3::origin());

    scene.add_sphere(
        Sphere::new(P3::new(0.0, -1.0, 3.0), 1.0, colors::RED)
            .specular(500.0)
            .reflective(0.2),
    );
    scene.add_sphere(
        Sphere::new(P3::new(2.0, 0.0, 4.0), 1.0, colors::BLUE)
            .specular(500.0)
            .reflective(0.3),
    );
    scene.add_sphere(
        Sphere::new(P3::new(-2.0, 0.0, 4.0), 1.0, colors::GREEN)
            .specular(10.0)
            .reflective(0.4),
    );
    scene.add_sphere(
        Sphere::new(P3::new(0.0, -5001.0, 0.0), 5000.0, colors::YELLOW)
            .specular(1000.0)
            .reflective(0.5),
    );

    scene
        .add_ambient_light(0.2)
        .add_point_light(0.6, P3::new(2.0, 1.0, 0.0))
        .add_directional_light(0.2, V3::new(1.0, 4.0, 4.0));
    scene
}

/// Two perfect-ish mirrors facing each other across the view axis.
pub fn make_mirrors() -> Scene {
    let mut scene = Scene::new(colors::GRAY, P3::origin());

    scene.add_sphere(
        Sphere::new(P3::new(-1.2, 0.0, 4.0), 1.0, colors::CYAN)
            .specular(200.0)
            .reflective(0.8),
    );
    scene.add_sphere(
        Sphere::new(P3::new(1.2, 0.0, 4.0), 1.0, colors::MAGENTA)
            .specular(200.0)
            .reflective(0.8),
    );
    scene.add_sphere(Sphere::new(P3::new(0.0, 1.5, 6.0), 0.5, colors::ORANGE));

    scene
        .add_ambient_light(0.3)
        .add_point_light(0.7, P3::new(0.0, 3.0, 1.0));
    scene
}

/// A small sphere casting a hard shadow onto a larger matte one.
pub fn make_shadow() -> Scene {
    let mut scene = Scene::new(colors::WHITE, P3::origin());

    scene.add_sphere(Sphere::new(P3::new(0.0, 0.0, 6.0), 2.0, colors::BROWN));
    scene.add_sphere(Sphere::new(P3::new(0.8, 1.2, 3.0), 0.4, colors::PURPLE).specular(50.0));

    scene
        .add_ambient_light(0.15)
        .add_point_light(0.85, P3::new(2.0, 4.0, 0.0));
    scene
}

pub fn make_empty() -> Scene {
    Scene::default()
}

#[test]
fn test_every_name_resolves() {
    for name in SCENE_NAMES {
        assert!(by_name(name).is_some(), "{}", name);
    }
    assert!(by_name("cornell").is_none());

    let scene = make_spheres();
    assert_eq!(scene.spheres.len(), 4);
    assert_eq!(scene.lights.len(), 3);
    assert!(make_empty().spheres.is_empty());
}
