use bevy::asset::Asset;
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::*;

// light direction data (needs to be in a struct)
// this is how the fixed light vector3 reaches the globe shader
// https://www.w3.org/TR/WGSL/#address-space-layout-constraints
#[derive(ShaderType, Clone, Copy, Debug)]
#[repr(C)]
pub struct LightUniform {
    pub direction: Vec3,
    pub _padding: f32, // ensures proper 16-byte GPU alignment
}

// globe material: day and night textures blended per fragment by the
// smoothstep terminator in shaders/globe.wgsl
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GlobeMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub day_texture: Handle<Image>,
    #[texture(2)]
    #[sampler(3)]
    pub night_texture: Handle<Image>,
    #[uniform(4)]
    pub light_uniform: LightUniform,
}

impl Material for GlobeMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/globe.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Opaque
    }
}
