//! Builds a two-material cube, creates a hide key for its top face and prints
//! the key at a few slider values.
//!
//! Usage:
//! ```text
//! cargo run --example hide_part
//! RUST_LOG=material_hide=debug cargo run --example hide_part
//! ```

use material_hide::math::Point3;
use material_hide::operator::{CreateHide, ReportLevel, SyncMaterials};
use material_hide::scene::{Material, Mesh, Object, Scene};
use material_hide::CenterMode;

fn main() {
    // Default: WARN for everything, INFO for material_hide.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("material_hide=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut scene = Scene::new();
    let body = scene.add_material(Material::new("Body"));
    let hat = scene.add_material(Material::new("Hat"));

    let mut mesh = Mesh::cuboid(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 2.0))
        .with_material_slots(vec![Some(body), Some(hat)]);
    mesh.faces[1].material_index = 1;
    let cube = scene.add_object(Object::mesh("Avatar", mesh));
    scene.set_active_object(Some(cube));

    scene.config.key_name = "Hide Hat".into();
    scene.config.shrink_factor = 0.01;
    scene.config.center_mode = CenterMode::Centroid;

    let report = SyncMaterials::execute(&mut scene);
    println!("[{}] {}", SyncMaterials::LABEL, report.message);
    if let Some(selector) = scene.selector_mut(cube) {
        selector.set_use_hide(body, false);
    }
    if let Some(selector) = scene.selector(cube) {
        for (name, use_hide) in selector.rows(&scene) {
            println!("  [{}] {name}", if use_hide { "x" } else { " " });
        }
    }

    let report = CreateHide::execute(&mut scene);
    println!("[{}] {}", CreateHide::LABEL, report.message);
    if report.level == ReportLevel::Error {
        return;
    }

    let Some(keys) = scene
        .mesh_mut(cube)
        .ok()
        .and_then(|mesh| mesh.shape_keys_mut())
    else {
        return;
    };
    for value in [0.0, 0.5, 1.0] {
        if let Some(key) = keys.key_mut("Hide Hat") {
            key.set_value(value);
        }
        if let Some(positions) = keys.evaluate() {
            println!("value {value:.1}: top corner at {:?}", positions[6]);
        }
    }
}
