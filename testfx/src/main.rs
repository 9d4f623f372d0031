use rand::Rng;
use sedulous_effects::{Color, Effect, Mat4, Texture2D, Vec3, Vec4};

fn main() {
    env_logger::init();
    let mut rng = rand::thread_rng();

    // declare the parameter set a typical lit shader would have
    let mut effect = Effect::new();
    let view_proj = effect.add_parameter("u_view_proj", 0).unwrap();
    let tint = effect.add_parameter("u_tint", 0).unwrap();
    let light_dirs = effect
        .add_parameter("u_light_dirs", 8 * std::mem::size_of::<Vec3>())
        .unwrap();
    let diffuse = effect.add_parameter("u_diffuse", 0).unwrap();

    effect.parameter_mut(view_proj).set_mat4(Mat4::identity());
    effect.parameter_mut(tint).set_vec4(Color::WHITE.to_vec4());
    effect.parameter_mut(diffuse).set_texture2d(Texture2D::new(0));

    for frame in 0..8usize {
        // lights jitter every frame; the tint and texture only change
        // every fourth frame, and the camera never moves after frame 0
        let dirs: Vec<Vec3> = (0..4)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..0.0),
                    rng.gen_range(-1.0..1.0),
                )
                .normalized()
            })
            .collect();
        effect.parameter_mut(light_dirs).set_vec3_array(&dirs);
        if frame % 4 == 0 {
            effect
                .parameter_mut(tint)
                .set_vec4(Vec4::new(rng.gen_range(0.0..1.0), 1.0, 1.0, 1.0));
            effect
                .parameter_mut(diffuse)
                .set_texture2d(Texture2D::new(frame));
        }
        effect.parameter_mut(view_proj).set_mat4(Mat4::identity());

        let mut bytes = 0;
        let uploaded = effect.flush(|name, data| {
            bytes += data.value_bytes().len();
            log::info!("upload: {name} {:?} v{}", data.kind(), data.version());
        });
        println!("frame {frame}: {uploaded} parameters, {bytes} inline bytes");
    }
}
