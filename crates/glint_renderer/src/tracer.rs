//! Recursive light transport.
//!
//! Two walks share the scene's intersection model: [`trace`] evaluates
//! eye rays (direct lighting, shadows, caustic gather, Fresnel-weighted
//! reflection and refraction), and [`deposit_walk`] carries photon power
//! from the lights into the photon map.

use glint_core::{reflect, Color, Ray, Scene, Vec3};
use rand::Rng;

use crate::photon_map::PhotonMap;

/// Maximum recursion depth for both walks.
pub const MAX_DEPTH: u32 = 5;

/// Procedural checker pattern on world x/z: period 0.5, threshold 0.25,
/// alternating black and white.
pub fn checker(position: Vec3) -> Color {
    let x_band = position.x.abs() % 0.5 < 0.25;
    let z_band = position.z.abs() % 0.5 < 0.25;
    if x_band == z_band {
        Color::ZERO
    } else {
        Color::ONE
    }
}

/// Recursively evaluate the radiance arriving along `ray`.
///
/// Depth exhaustion terminates with the ambient light color; a miss
/// terminates with the sky color. Both are normal outcomes, not errors.
pub fn trace(scene: &Scene, map: &PhotonMap, ray: &Ray, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return scene.ambient;
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return scene.sky;
    };

    // Diffuse-patterned surfaces take the checker; everything else its
    // own ambient color.
    let mut color = if hit.material.diffuse != Color::ZERO {
        scene.ambient * checker(hit.position)
    } else {
        scene.ambient * hit.material.ambient
    };

    for light in &scene.lights {
        let light_dir = light.direction_to(hit.position);
        let shadow_ray = Ray::new(hit.position, light_dir);

        let occluded = match scene.nearest_hit(&shadow_ray) {
            None => false,
            Some(blocker) => {
                (hit.position - blocker.position).length() <= light.distance(hit.position)
            }
        };

        if !occluded {
            color += hit.material.shade(
                light_dir,
                hit.normal,
                -ray.direction,
                light.intensity_at(hit.position),
            );
            // Caustic gather brightens the lit contribution multiplicatively.
            color *= Color::ONE + map.gather(hit.position);
        }
    }

    if hit.material.reflective {
        let reflected = Ray::new(hit.position, reflect(hit.normal, ray.direction));
        color += hit.material.fresnel(hit.normal, ray.direction)
            * trace(scene, map, &reflected, depth + 1);
    }

    if hit.material.refractive {
        // Total internal reflection contributes nothing from this branch.
        if let Some(direction) = hit.material.refract(hit.normal, ray.direction) {
            let refracted = Ray::new(hit.position, direction);
            color += (Color::ONE - hit.material.fresnel(hit.normal, ray.direction))
                * trace(scene, map, &refracted, depth + 1);
        }
    }

    color
}

/// Shoot photons from every light and deposit them into the map.
///
/// The total `budget` is split evenly across the lights; each photon
/// leaves in a rejection-sampled unit-sphere direction carrying an equal
/// share of its light's power. Must complete before any shading reads
/// the map.
pub fn emit_photons(scene: &Scene, map: &mut PhotonMap, budget: u32, rng: &mut impl Rng) {
    if scene.lights.is_empty() {
        return;
    }

    let per_light = budget / scene.lights.len() as u32;
    for light in &scene.lights {
        let photon_power = light.power / per_light as f32;
        for _ in 0..per_light {
            let ray = Ray::new(light.position, random_unit_direction(rng));
            deposit_walk(scene, map, photon_power, &ray, 0);
        }
    }

    log::debug!(
        "photon emission: budget {}, {} photons/light, total deposited power {:?}",
        budget,
        per_light,
        map.total_power()
    );
}

/// Walk a photon through the scene, depositing on flat receivers.
///
/// Reflective hits halve the carried power by the Fresnel factor and bounce
/// along the mirror direction; this walk never branches into refraction.
/// Deposits happen only past the first bounce, on surfaces flagged flat.
pub fn deposit_walk(scene: &Scene, map: &mut PhotonMap, power: Color, ray: &Ray, depth: u32) {
    if depth > MAX_DEPTH {
        return;
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return;
    };

    if hit.material.reflective {
        let attenuation = hit.material.fresnel(hit.normal, ray.direction) / 2.0;
        let reflected = Ray::new(hit.position, reflect(hit.normal, ray.direction));
        deposit_walk(scene, map, power * attenuation, &reflected, depth + 1);
    } else if depth > 0 && hit.material.flat {
        map.deposit(hit.position, power);
    }
}

/// Rejection-sample a uniform direction on the unit sphere.
fn random_unit_direction(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
