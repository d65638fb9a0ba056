use std::fmt;

use glam::Vec3;

/// Illumination models a backend can bind by identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingVariant {
    Fullcolor,
    Flat,
    Normal2Color,
    Uv2Color,
    Lambert,
    Phong,
    BlinnPhong,
    Ggx,
}

impl ShadingVariant {
    pub const ALL: [ShadingVariant; 8] = [
        ShadingVariant::Fullcolor,
        ShadingVariant::Flat,
        ShadingVariant::Normal2Color,
        ShadingVariant::Uv2Color,
        ShadingVariant::Lambert,
        ShadingVariant::Phong,
        ShadingVariant::BlinnPhong,
        ShadingVariant::Ggx,
    ];

    /// The illumination models used by the lighting demos
    pub const LIGHTING: [ShadingVariant; 4] = [
        ShadingVariant::Lambert,
        ShadingVariant::Phong,
        ShadingVariant::BlinnPhong,
        ShadingVariant::Ggx,
    ];

    /// Name of the fragment-stage entry point implementing this model
    pub fn subroutine_name(self) -> &'static str {
        match self {
            ShadingVariant::Fullcolor => "fullColor",
            ShadingVariant::Flat => "flatColor",
            ShadingVariant::Normal2Color => "normal2color",
            ShadingVariant::Uv2Color => "uv2color",
            ShadingVariant::Lambert => "Lambert",
            ShadingVariant::Phong => "Phong",
            ShadingVariant::BlinnPhong => "BlinnPhong",
            ShadingVariant::Ggx => "GGX",
        }
    }
}

impl fmt::Display for ShadingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subroutine_name())
    }
}

/// Active shading variant, switched with the digit keys
#[derive(Debug, Clone)]
pub struct ShadingSelector {
    variants: Vec<ShadingVariant>,
    current: usize,
}

impl ShadingSelector {
    /// An empty list falls back to `Fullcolor`
    pub fn new(variants: &[ShadingVariant]) -> Self {
        let variants = if variants.is_empty() {
            vec![ShadingVariant::Fullcolor]
        } else {
            variants.to_vec()
        };
        Self { variants, current: 0 }
    }

    pub fn current(&self) -> ShadingVariant {
        self.variants[self.current]
    }

    pub fn variants(&self) -> &[ShadingVariant] {
        &self.variants
    }

    /// Select by 1-based slot. Out-of-range slots leave the selection as is.
    pub fn select_slot(&mut self, slot: u8) -> Option<ShadingVariant> {
        let index = usize::from(slot).checked_sub(1)?;
        if index >= self.variants.len() {
            log::warn!(
                "No shading variant in slot {} ({} available)",
                slot,
                self.variants.len()
            );
            return None;
        }
        self.current = index;
        log::info!("Current shader subroutine: {}", self.current());
        Some(self.current())
    }
}

impl Default for ShadingSelector {
    fn default() -> Self {
        Self::new(&ShadingVariant::LIGHTING)
    }
}

/// Material and light uniforms shared by the illumination models
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingParams {
    pub diffuse_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub ambient_color: [f32; 3],
    pub kd: f32,
    pub ks: f32,
    pub ka: f32,
    pub shininess: f32,
    /// GGX roughness
    pub alpha: f32,
    /// Fresnel reflectance at normal incidence (Schlick)
    pub f0: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            diffuse_color: [1.0, 0.0, 0.0],
            specular_color: [1.0, 1.0, 1.0],
            ambient_color: [0.1, 0.1, 0.1],
            kd: 0.5,
            ks: 0.4,
            ka: 0.1,
            shininess: 25.0,
            alpha: 0.2,
            f0: 0.9,
        }
    }
}

pub fn default_light_positions() -> Vec<Vec3> {
    vec![
        Vec3::new(5.0, 10.0, 10.0),
        Vec3::new(-5.0, 10.0, 10.0),
        Vec3::new(5.0, 10.0, -10.0),
    ]
}
