use colored::Colorize;
use math3d::{Matrix4, Vector3, Vector4, BACKEND};
use std::{error::Error, result::Result};

fn translation(t: Vector3) -> Matrix4 {
    Matrix4::from_elements(
        1.0, 0.0, 0.0, t.x, //
        0.0, 1.0, 0.0, t.y, //
        0.0, 0.0, 1.0, t.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Projects onto the plane z = `d` through the origin.
fn projection(d: f32) -> Matrix4 {
    Matrix4::from_elements(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, d.recip(), 0.0,
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("Using {} lane backend", BACKEND.green());

    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-2.0, 0.5, 4.0);
    a.print();
    b.print();
    println!("a . b = {}", a.dot(b));
    (a + b).print();
    a.cross(b).print();
    a.try_normalize()?.print();
    println!("angle(a, b) = {}", a.angle_between(b));

    let mut model = Matrix4::default();
    model.make_identity();
    model.rows[0].x = 2.0;
    let transform = projection(2.0) * translation(Vector3::new(0.0, 0.0, 3.0)) * model;
    transform.print();

    let mut p = transform * Vector4::point(a);
    p.print();
    p.try_dehomogenize()?;
    p.print();

    let mut transposed = transform;
    transposed.make_transpose();
    transposed.print();

    match Vector3::default().try_normalize() {
        Ok(n) => n.print(),
        Err(error) => println!("{}: {}", "Expected failure".yellow(), error),
    }
    Ok(())
}
