//! Built-in demo scenes.

use anyhow::Result;
use archer_renderer::{Color, Geometry, Material, Scene, Vec3, BLACK, WHITE};
use clap::ValueEnum;

/// Scenes selectable with `--scene`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AvailableScene {
    /// Mirror and normal-shaded spheres on a diffuse ground
    #[default]
    Spheres,
    /// One white sphere against a black sky
    Single,
    /// Diffuse sphere resting on an infinite ground plane
    Plane,
}

impl AvailableScene {
    pub fn build(self) -> Result<Scene> {
        let scene = match self {
            AvailableScene::Spheres => spheres()?,
            AvailableScene::Single => single()?,
            AvailableScene::Plane => plane()?,
        };
        log::info!("Built scene {:?} with {} objects", self, scene.len());
        Ok(scene)
    }
}

fn spheres() -> Result<Scene> {
    let mut scene = Scene::new();
    scene.add(Geometry::sphere(Vec3::new(1.0, 0.0, -4.0), 1.0)?, Material::Mirror);
    scene.add(Geometry::sphere(Vec3::new(-1.0, 0.0, -4.0), 1.0)?, Material::Normal);
    scene.add(
        Geometry::sphere(Vec3::new(0.0, -1001.0, 0.0), 1000.0)?,
        Material::diffuse(Color::new(128.0, 128.0, 255.0)),
    );
    Ok(scene)
}

fn single() -> Result<Scene> {
    let mut scene = Scene::new().with_background(Material::sky_gradient(BLACK, BLACK));
    scene.add(Geometry::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0)?, Material::solid(WHITE));
    Ok(scene)
}

fn plane() -> Result<Scene> {
    let mut scene = Scene::new();
    scene.add(
        Geometry::sphere(Vec3::new(0.0, 0.0, -4.0), 1.0)?,
        Material::diffuse(Color::new(220.0, 80.0, 60.0)),
    );
    scene.add(
        Geometry::plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y)?,
        Material::diffuse(Color::new(180.0, 180.0, 180.0)),
    );
    Ok(scene)
}
