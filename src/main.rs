use lilith::core::prelude::*;
use lilith::util::setup_log;

fn main() -> Result<()> {
    setup_log()?;
    run_sample_scenario();
    run_test_cases()?;
    info!("all checks passed");
    Ok(())
}

fn run_sample_scenario() {
    let identity = Mat3x3::identity();
    info!("identity matrix:\n{identity}");

    let mat = Mat3x3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    info!("matrix created with values:\n{mat}");
    info!("sum of identity and mat:\n{}", identity + mat);

    let vec = Vec2 { x: 2.0, y: 3.0 };
    let vec2 = Vec2 { x: 1.0, y: 4.0 };
    info!("vector: {vec}");
    info!("dot product of vec and vec2: {:.6}", vec.dot(vec2));

    info!("matrix scaled by 2.0:\n{}", mat * 2.0);
    info!("transposed matrix:\n{}", mat.transposed());
    info!("multiplication of identity and mat:\n{}", identity * mat);

    let mat3 = Mat3x3::from_values(3.0, 2.0, 1.0, 6.0, 5.0, 4.0, 9.0, 8.0, 7.0);
    let scale_matrix = Mat3x3::from_values(2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0);
    let rotation_matrix = Mat3x3::from_values(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    for (name, lhs) in [
        ("identity", identity),
        ("scale_matrix", scale_matrix),
        ("rotation_matrix", rotation_matrix),
    ] {
        info!("{name}:\n{lhs}");
        info!("{name} * mat3:\n{}", lhs * mat3);
    }

    let a = Mat3x3::from_values(10.0, 80.0, 4.0, 5.0, 78.0, 9.0, 47.0, 9.0, 5.0);
    let b = Mat3x3::from_values(4.0, 35.0, 0.0, 42.0, 1.0, 23.0, 44.0, 55.0, 6.0);
    info!("a * b:\n{}", a * b);
}

fn run_test_cases() -> Result<()> {
    let m = Mat3x3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    check_eq!(
        m.transposed(),
        Mat3x3::from_values(1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0)
    );
    check_eq!(m.transposed().transposed(), m);
    check_eq!(m + Mat3x3::zero(), m);
    check_eq!(m - m, Mat3x3::zero());
    check_eq!(m.inverse(), Mat3x3::zero());

    let mat3 = Mat3x3::from_values(3.0, 2.0, 1.0, 6.0, 5.0, 4.0, 9.0, 8.0, 7.0);
    check_eq!(Mat3x3::identity() * mat3, mat3);
    check_eq!(mat3 * Mat3x3::identity(), mat3);

    check_almost_eq!(
        Mat3x3::identity()
            .rotate(90.0)
            .transform_point(Vec2 { x: 1.0, y: 0.0 }),
        Vec2 { x: 0.0, y: 1.0 }
    );
    check_eq!(
        Vec2 { x: 1.0, y: 4.0 }.cross(Vec2 { x: 2.0, y: 3.0 }),
        -5.0
    );
    check_eq!(
        Mat3x3::identity()
            .translate(Vec2 { x: 5.0, y: 7.0 })
            .transform_point(Vec2::zero()),
        Vec2 { x: 5.0, y: 7.0 }
    );

    let pivot = Vec2 { x: 3.0, y: -2.0 };
    let transform = Mat3x3::identity().rotate_around(pivot, 30.0);
    check_almost_eq!(transform.transform_point(pivot), pivot);
    check_almost_eq!(transform * transform.inverse(), Mat3x3::identity());
    check_lt!((transform.det() - 1.0).abs(), EPSILON);

    let decoded = Mat3x3::from_bytes(&transform.to_bytes()?)
        .context("decoding a freshly encoded transform")?;
    check_eq!(decoded, transform);
    Ok(())
}
