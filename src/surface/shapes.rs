use glam::DVec3;

use super::Surface;

/// The demo surface the crate was built around: a folium-based sheet bent
/// out of the x axis, controlled by length/height/bend coefficients.
///
/// `v = -1` is a pole of the folium terms; keep it outside the sampled
/// domain.
#[derive(Clone, Copy, Debug)]
pub struct TutteSurface {
    pub length: f64,
    pub height: f64,
    pub bend: f64,
}

impl Default for TutteSurface {
    fn default() -> Self {
        Self {
            length: 4.0,
            height: 2.0,
            bend: 0.5,
        }
    }
}

impl Surface for TutteSurface {
    fn position(&self, u: f64, v: f64) -> DVec3 {
        let folium = 3.0 * self.height / (1.0 + v * v * v);
        let x = self.length * u;
        let y = folium * v * self.bend * (1.0 - u);
        let z = folium * v * v * self.bend * (1.0 - u);
        DVec3::new(x / 3.0, y / 3.0, z / 3.0)
    }
}

/// Flat patch in the xy plane, `(u, v, 0)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plane;

impl Surface for Plane {
    fn position(&self, u: f64, v: f64) -> DVec3 {
        DVec3::new(u, v, 0.0)
    }
}

/// Sphere with `u` as the polar angle over `[0, pi]` and `v` as the
/// azimuth over `[0, 2*pi]`.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub radius: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Surface for Sphere {
    fn position(&self, u: f64, v: f64) -> DVec3 {
        let (u_sin, u_cos) = u.sin_cos();
        let (v_sin, v_cos) = v.sin_cos();
        DVec3::new(
            self.radius * u_sin * v_cos,
            self.radius * u_cos,
            self.radius * u_sin * v_sin,
        )
    }
}

/// Torus in the xz plane; both parameters range over `[0, 2*pi]`.
#[derive(Clone, Copy, Debug)]
pub struct Torus {
    pub radius: f64,
    pub tube_radius: f64,
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            radius: 2.0,
            tube_radius: 1.0,
        }
    }
}

impl Surface for Torus {
    fn position(&self, u: f64, v: f64) -> DVec3 {
        let ring = self.radius + self.tube_radius * v.cos();
        DVec3::new(
            ring * u.cos(),
            self.tube_radius * v.sin(),
            ring * u.sin(),
        )
    }
}

/// One-sided strip; `u` over `[0, 2*pi]`, `v` over `[-half_width, half_width]`.
#[derive(Clone, Copy, Debug)]
pub struct MobiusStrip {
    pub radius: f64,
    pub half_width: f64,
}

impl Default for MobiusStrip {
    fn default() -> Self {
        Self {
            radius: 1.0,
            half_width: 0.5,
        }
    }
}

impl Surface for MobiusStrip {
    fn position(&self, u: f64, v: f64) -> DVec3 {
        let ring = self.radius + v * (u / 2.0).cos();
        DVec3::new(ring * u.cos(), v * (u / 2.0).sin(), ring * u.sin())
    }
}

pub struct SurfacePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub u_range: (f64, f64),
    pub v_range: (f64, f64),
    pub u_granularity: u32,
    pub v_granularity: u32,
    pub build: fn() -> Box<dyn Surface + Send + Sync>,
}

pub const SURFACE_PRESETS: &[SurfacePreset] = &[
    SurfacePreset {
        name: "Tutte Sheet",
        description: "Folium-based bent sheet",
        u_range: (0.0, 1.0),
        // 99 subdivisions so the v = -1 pole falls between samples
        v_range: (-5.0, 5.0),
        u_granularity: 10,
        v_granularity: 99,
        build: || Box::new(TutteSurface::default()),
    },
    SurfacePreset {
        name: "Plane",
        description: "Unit flat patch",
        u_range: (0.0, 1.0),
        v_range: (0.0, 1.0),
        u_granularity: 10,
        v_granularity: 10,
        build: || Box::new(Plane),
    },
    SurfacePreset {
        name: "Sphere",
        description: "Unit sphere",
        u_range: (0.0, std::f64::consts::PI),
        v_range: (0.0, std::f64::consts::TAU),
        u_granularity: 40,
        v_granularity: 80,
        build: || Box::new(Sphere::default()),
    },
    SurfacePreset {
        name: "Torus",
        description: "Donut",
        u_range: (0.0, std::f64::consts::TAU),
        v_range: (0.0, std::f64::consts::TAU),
        u_granularity: 60,
        v_granularity: 40,
        build: || Box::new(Torus::default()),
    },
    SurfacePreset {
        name: "Mobius Strip",
        description: "One-sided surface",
        u_range: (0.0, std::f64::consts::TAU),
        v_range: (-0.5, 0.5),
        u_granularity: 80,
        v_granularity: 20,
        build: || Box::new(MobiusStrip::default()),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutte_matches_equation() {
        let s = TutteSurface::default();

        let at = s.position(0.0, 0.0);
        assert_eq!(at, DVec3::ZERO);

        // at u = 1 the (1 - u) factor kills y and z
        let edge = s.position(1.0, 3.0);
        assert!((edge.x - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(edge.y, 0.0);
        assert_eq!(edge.z, 0.0);

        let p = s.position(0.5, 2.0);
        let folium = 3.0 * 2.0 / (1.0 + 8.0);
        assert!((p.x - 4.0 * 0.5 / 3.0).abs() < 1e-12);
        assert!((p.y - folium * 2.0 * 0.5 * 0.5 / 3.0).abs() < 1e-12);
        assert!((p.z - folium * 4.0 * 0.5 * 0.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn sphere_points_sit_on_radius() {
        let s = Sphere { radius: 3.0 };
        for (u, v) in [(0.1, 0.2), (1.0, 4.0), (2.5, 6.0)] {
            assert!((s.position(u, v).length() - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn presets_avoid_tutte_pole() {
        let p = &SURFACE_PRESETS[0];
        let surface = (p.build)();
        for i in 0..=p.v_granularity {
            let v = p.v_range.0
                + (p.v_range.1 - p.v_range.0) * f64::from(i) / f64::from(p.v_granularity);
            assert!(surface.position(0.5, v).is_finite(), "pole hit at v = {v}");
        }
    }

    #[test]
    fn closures_are_surfaces() {
        let f = |u: f64, v: f64| DVec3::new(u, v, u * v);
        assert_eq!(f.position(2.0, 3.0), DVec3::new(2.0, 3.0, 6.0));
    }
}
