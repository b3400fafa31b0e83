//! Material textures: file-backed diffuse maps with a solid-color fallback.

use std::path::Path;

use crate::gpu::render_context::RenderContext;

/// A diffuse texture plus the sampler and bind group used to draw with it.
pub struct MaterialTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// Bind group over the texture view and sampler (group 2 in the lit
    /// shader).
    pub bind_group: wgpu::BindGroup,
}

impl MaterialTexture {
    /// Bind group layout shared by every material texture: one 2D texture
    /// and one filtering sampler, fragment-visible.
    #[must_use]
    pub fn bind_group_layout(
        device: &wgpu::Device,
    ) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float {
                            filterable: true,
                        },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(
                        wgpu::SamplerBindingType::Filtering,
                    ),
                    count: None,
                },
            ],
        })
    }

    /// Load a diffuse texture from an image file (JPEG/PNG).
    ///
    /// The decode is flipped vertically to match the original asset
    /// convention (image origin top-left, UV origin bottom-left). If the
    /// file is missing or fails to decode, a warning is logged and a 1×1
    /// texture of `fallback` is used so the scene still renders.
    #[must_use]
    pub fn from_path_or_color(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        path: &Path,
        fallback: [u8; 3],
    ) -> Self {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.flipv().into_rgba8();
                let (width, height) = rgba.dimensions();
                Self::from_rgba(context, layout, &rgba, width, height)
            }
            Err(e) => {
                log::warn!(
                    "texture {} unavailable ({e}); using solid fallback",
                    path.display()
                );
                Self::solid_color(context, layout, fallback)
            }
        }
    }

    /// Create a 1×1 solid-color texture.
    #[must_use]
    pub fn solid_color(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        rgb: [u8; 3],
    ) -> Self {
        let pixel = [rgb[0], rgb[1], rgb[2], 255];
        Self::from_rgba(context, layout, &pixel, 1, 1)
    }

    /// Upload raw RGBA8 pixels and build the bind group.
    fn from_rgba(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Material Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        context.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = context.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Material Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(
                                &view,
                            ),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(
                                &sampler,
                            ),
                        },
                    ],
                    label: Some("Material Bind Group"),
                });

        Self {
            texture,
            bind_group,
        }
    }
}
