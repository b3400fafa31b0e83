//! Scene renderer: one lit textured pipeline for the table objects and one
//! unlit pipeline for the light-marker cubes, sharing a depth buffer.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::MaterialTexture;
use crate::options::WindowOptions;
use crate::scene::lighting::POINT_LIGHT_POSITIONS;
use crate::scene::mesh::{MeshBuffers, MeshVertex};
use crate::scene::{build_scene, SceneDescription};

/// Light markers are drawn as small cubes, like the original lamp cubes.
const MARKER_SCALE: f32 = 0.2;

/// Per-draw instance data: the object-to-world matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectInstance {
    /// Model matrix, column-major as 4 vec4s.
    model: [[f32; 4]; 4],
}

impl ObjectInstance {
    /// Instance buffer layout matching shader locations 3–6.
    const fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<ObjectInstance>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 3, // model matrix col 0
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 4, // model matrix col 1
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 5, // model matrix col 2
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 48,
                    shader_location: 6, // model matrix col 3
                },
            ],
        }
    }
}

/// One drawable object: which mesh it uses and its material bind group.
struct DrawObject {
    mesh_index: usize,
    texture: MaterialTexture,
}

/// Owns every pipeline and GPU buffer needed to draw the static scene.
pub struct SceneRenderer {
    lit_pipeline: wgpu::RenderPipeline,
    marker_pipeline: wgpu::RenderPipeline,

    meshes: Vec<MeshBuffers>,
    objects: Vec<DrawObject>,
    /// One [`ObjectInstance`] per object, drawn one instance at a time so
    /// each object can bind its own texture.
    object_instances: wgpu::Buffer,

    marker_mesh: MeshBuffers,
    marker_instances: wgpu::Buffer,
    marker_count: u32,

    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    /// Build the scene description, upload all meshes/textures, and create
    /// both pipelines.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        window: &WindowOptions,
    ) -> Self {
        let scene = build_scene();
        let material_layout =
            MaterialTexture::bind_group_layout(&context.device);

        let meshes = scene
            .meshes
            .iter()
            .map(|mesh| MeshBuffers::upload(context, "Scene Mesh", mesh))
            .collect();

        let (objects, object_instances) =
            Self::upload_objects(context, &material_layout, &scene);

        let (marker_mesh, marker_instances, marker_count) =
            Self::upload_markers(context);

        let lit_pipeline = Self::create_lit_pipeline(
            context,
            camera_layout,
            lighting_layout,
            &material_layout,
        );
        let marker_pipeline =
            Self::create_marker_pipeline(context, camera_layout);

        let [r, g, b] = window.clear_color;
        Self {
            lit_pipeline,
            marker_pipeline,
            meshes,
            objects,
            object_instances,
            marker_mesh,
            marker_instances,
            marker_count,
            depth_view: Self::create_depth_view(context),
            clear_color: wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: 1.0,
            },
        }
    }

    /// Load each object's texture and pack all model matrices into one
    /// instance buffer.
    fn upload_objects(
        context: &RenderContext,
        material_layout: &wgpu::BindGroupLayout,
        scene: &SceneDescription,
    ) -> (Vec<DrawObject>, wgpu::Buffer) {
        let mut objects = Vec::with_capacity(scene.objects.len());
        let mut instances = Vec::with_capacity(scene.objects.len());
        for spec in &scene.objects {
            log::debug!("loading object '{}'", spec.name);
            let texture = MaterialTexture::from_path_or_color(
                context,
                material_layout,
                std::path::Path::new(spec.texture.path),
                spec.texture.fallback,
            );
            objects.push(DrawObject {
                mesh_index: spec.mesh_index,
                texture,
            });
            instances.push(ObjectInstance {
                model: spec.model.to_cols_array_2d(),
            });
        }

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Object Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        (objects, buffer)
    }

    /// Small cube at each point light position, drawn unlit.
    fn upload_markers(
        context: &RenderContext,
    ) -> (MeshBuffers, wgpu::Buffer, u32) {
        let cube = crate::scene::primitives::cuboid(0.5, 1.0, 0.5);
        let mesh = MeshBuffers::upload(context, "Light Marker Mesh", &cube);

        let instances: Vec<ObjectInstance> = POINT_LIGHT_POSITIONS
            .iter()
            .map(|&position| ObjectInstance {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::splat(MARKER_SCALE),
                    glam::Quat::IDENTITY,
                    position,
                )
                .to_cols_array_2d(),
            })
            .collect();

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Light Marker Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        (mesh, buffer, instances.len() as u32)
    }

    fn create_lit_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        material_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../assets/shaders/scene_lit.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Lit Pipeline Layout"),
                bind_group_layouts: &[
                    camera_layout,
                    lighting_layout,
                    material_layout,
                ],
                push_constant_ranges: &[],
            },
        );

        Self::create_pipeline(
            context,
            "Scene Lit Pipeline",
            &pipeline_layout,
            &shader,
        )
    }

    fn create_marker_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../assets/shaders/light_marker.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Light Marker Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            },
        );

        Self::create_pipeline(
            context,
            "Light Marker Pipeline",
            &pipeline_layout,
            &shader,
        )
    }

    /// Shared pipeline descriptor: both shaders use the same vertex and
    /// instance layouts, back-face culling, and depth testing.
    fn create_pipeline(
        context: &RenderContext,
        label: &str,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
    ) -> wgpu::RenderPipeline {
        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[
                        MeshVertex::buffer_layout(),
                        ObjectInstance::buffer_layout(),
                    ],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    fn create_depth_view(context: &RenderContext) -> wgpu::TextureView {
        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: context.config.width.max(1),
                height: context.config.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Recreate the depth buffer after a surface resize.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth_view = Self::create_depth_view(context);
    }

    /// Draw one frame: all scene objects, then the light markers.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired; the caller reconfigures and retries on `Lost`/`Outdated`.
    pub fn render(
        &self,
        context: &RenderContext,
        camera_bind_group: &wgpu::BindGroup,
        lighting_bind_group: &wgpu::BindGroup,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth_view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

            pass.set_pipeline(&self.lit_pipeline);
            pass.set_bind_group(0, camera_bind_group, &[]);
            pass.set_bind_group(1, lighting_bind_group, &[]);
            pass.set_vertex_buffer(1, self.object_instances.slice(..));

            // One instance per object so each draw can bind its texture.
            for (i, object) in self.objects.iter().enumerate() {
                let mesh = &self.meshes[object.mesh_index];
                pass.set_bind_group(2, &object.texture.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(
                    mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                let instance = i as u32;
                pass.draw_indexed(
                    0..mesh.index_count,
                    0,
                    instance..instance + 1,
                );
            }

            pass.set_pipeline(&self.marker_pipeline);
            pass.set_bind_group(0, camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.marker_mesh.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.marker_instances.slice(..));
            pass.set_index_buffer(
                self.marker_mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.draw_indexed(
                0..self.marker_mesh.index_count,
                0,
                0..self.marker_count,
            );
        }

        context.submit(encoder);
        frame.present();
        Ok(())
    }
}
