//! Screen-space effect chain. Four fullscreen passes (rgb shift, film grain,
//! pixelate, vignette) run as one render-graph node after tonemapping,
//! ping-ponging the view target between passes; disabled passes are skipped
//! with no intermediate copies. Bloom and SMAA ride on Bevy's built-in
//! implementations and are attached to the camera as components instead.
//!
//! Each custom pass takes the same bind group shape: source texture, sampler,
//! and one vec4 of pass parameters.

use bevy::core_pipeline::bloom::{Bloom, BloomPrefilter};
use bevy::core_pipeline::core_2d::graph::{Core2d, Node2d};
use bevy::core_pipeline::smaa::Smaa;
use bevy::prelude::*;
use bevy::render::{
    extract_component::{ExtractComponent, ExtractComponentPlugin},
    render_graph::{Node, NodeRunError, RenderGraph, RenderGraphContext, RenderLabel},
    render_resource::*,
    renderer::{RenderContext, RenderDevice, RenderQueue},
    view::{ExtractedView, ViewTarget},
    Extract, ExtractSchedule, Render, RenderApp, RenderSet,
};
use bevy::window::PrimaryWindow;

use crate::core::config::config::{EffectChainConfig, GameConfig};

#[cfg(target_arch = "wasm32")]
use std::sync::OnceLock;

#[cfg(target_arch = "wasm32")]
static EMBEDDED_SHADERS: OnceLock<[Handle<Shader>; PASS_COUNT]> = OnceLock::new();

const PASS_COUNT: usize = 4;

const PASS_SHADER_PATHS: [&str; PASS_COUNT] = [
    "shaders/post_rgb_shift.wgsl",
    "shaders/post_film.wgsl",
    "shaders/post_pixelate.wgsl",
    "shaders/post_vignette.wgsl",
];

/// Live chain settings (app world). Mutated at runtime by the debug keys.
#[derive(Resource, Debug, Clone, Copy)]
pub struct EffectChainSettings(pub EffectChainConfig);

/// Camera carrying the effect chain.
#[derive(Component, Clone, Copy, ExtractComponent)]
pub struct EffectChainCamera;

/// Per-frame pass parameters extracted into the render world. `None` means
/// the pass is disabled this frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
struct ExtractedChain {
    params: [Option<[f32; 4]>; PASS_COUNT],
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
struct EffectChainNodeLabel;

pub struct EffectChainPlugin;

impl Plugin for EffectChainPlugin {
    fn build(&self, app: &mut App) {
        let effects = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.effects)
            .unwrap_or_default();
        app.insert_resource(EffectChainSettings(effects.sanitized()))
            .add_plugins(ExtractComponentPlugin::<EffectChainCamera>::default())
            .add_systems(PostStartup, tag_camera)
            .add_systems(Update, sync_builtin_passes);

        #[cfg(target_arch = "wasm32")]
        {
            let mut shaders = app.world_mut().resource_mut::<Assets<Shader>>();
            let handles = [
                shaders.add(Shader::from_wgsl(
                    include_str!("../../../assets/shaders/post_rgb_shift.wgsl"),
                    "post_rgb_shift_embedded.wgsl",
                )),
                shaders.add(Shader::from_wgsl(
                    include_str!("../../../assets/shaders/post_film.wgsl"),
                    "post_film_embedded.wgsl",
                )),
                shaders.add(Shader::from_wgsl(
                    include_str!("../../../assets/shaders/post_pixelate.wgsl"),
                    "post_pixelate_embedded.wgsl",
                )),
                shaders.add(Shader::from_wgsl(
                    include_str!("../../../assets/shaders/post_vignette.wgsl"),
                    "post_vignette_embedded.wgsl",
                )),
            ];
            let _ = EMBEDDED_SHADERS.set(handles);
        }

        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };
        render_app
            .init_resource::<ExtractedChain>()
            .init_resource::<ChainPipelines>()
            .add_systems(ExtractSchedule, extract_chain_params)
            .add_systems(Render, prepare_chain_pipelines.in_set(RenderSet::Prepare));

        let mut render_graph = render_app.world_mut().resource_mut::<RenderGraph>();
        let graph_2d = render_graph
            .get_sub_graph_mut(Core2d)
            .expect("Core2d graph exists");
        graph_2d.add_node(EffectChainNodeLabel, EffectChainNode);
        graph_2d.add_node_edge(Node2d::Tonemapping, EffectChainNodeLabel);
        graph_2d.add_node_edge(EffectChainNodeLabel, Node2d::EndMainPassPostProcessing);
    }
}

fn tag_camera(
    mut commands: Commands,
    q_cameras: Query<Entity, (With<Camera>, With<Camera2d>, Without<EffectChainCamera>)>,
) {
    for e in q_cameras.iter() {
        commands.entity(e).insert(EffectChainCamera);
    }
}

/// Keeps the built-in bloom and SMAA components on the camera in step with
/// the settings. SMAA only applies while MSAA is off.
fn sync_builtin_passes(
    mut commands: Commands,
    settings: Res<EffectChainSettings>,
    q_cameras: Query<(Entity, &Msaa), With<EffectChainCamera>>,
) {
    if !settings.is_changed() {
        return;
    }
    let cfg = settings.0.sanitized();
    for (entity, msaa) in q_cameras.iter() {
        let Ok(mut e) = commands.get_entity(entity) else {
            continue;
        };
        if cfg.bloom.enabled {
            e.insert(Bloom {
                intensity: cfg.bloom.strength / 10.0,
                low_frequency_boost: cfg.bloom.radius / 2.0,
                prefilter: BloomPrefilter {
                    threshold: cfg.bloom.threshold,
                    threshold_softness: 0.5,
                },
                ..Bloom::NATURAL
            });
        } else {
            e.remove::<Bloom>();
        }
        if *msaa == Msaa::Off {
            e.insert(Smaa::default());
        } else {
            e.remove::<Smaa>();
        }
    }
}

fn extract_chain_params(
    mut extracted: ResMut<ExtractedChain>,
    settings: Extract<Option<Res<EffectChainSettings>>>,
    time: Extract<Res<Time>>,
    q_window: Extract<Query<&Window, With<PrimaryWindow>>>,
) {
    let Some(settings) = settings.as_ref() else {
        extracted.params = [None; PASS_COUNT];
        return;
    };
    let cfg = settings.0.sanitized();
    let (phys_w, phys_h) = q_window
        .single()
        .map(|w| (w.physical_width() as f32, w.physical_height() as f32))
        .unwrap_or((1.0, 1.0));
    extracted.params = [
        cfg.rgb_shift.enabled.then(|| {
            [
                cfg.rgb_shift.amount,
                cfg.rgb_shift.angle_deg.to_radians(),
                0.0,
                0.0,
            ]
        }),
        cfg.film.enabled.then(|| {
            [
                cfg.film.noise_intensity,
                cfg.film.scanline_intensity,
                cfg.film.scanline_count,
                time.elapsed_secs(),
            ]
        }),
        cfg.pixelate
            .enabled
            .then(|| [phys_w, phys_h, cfg.pixelate.pixel_size, 0.0]),
        cfg.vignette
            .enabled
            .then(|| [cfg.vignette.offset, cfg.vignette.darkness, 0.0, 0.0]),
    ];
}

struct PassPipeline {
    shader: Option<Handle<Shader>>,
    pipeline_id: Option<CachedRenderPipelineId>,
    buffer: Option<Buffer>,
}

impl Default for PassPipeline {
    fn default() -> Self {
        Self {
            shader: None,
            pipeline_id: None,
            buffer: None,
        }
    }
}

#[derive(Resource, Default)]
struct ChainPipelines {
    layout: Option<BindGroupLayout>,
    sampler: Option<Sampler>,
    passes: [PassPipeline; PASS_COUNT],
}

fn prepare_chain_pipelines(
    pipeline_cache: Res<PipelineCache>,
    mut chain: ResMut<ChainPipelines>,
    extracted: Res<ExtractedChain>,
    render_device: Res<RenderDevice>,
    render_queue: Res<RenderQueue>,
    asset_server: Res<AssetServer>,
) {
    if chain.layout.is_none() {
        let layout = render_device.create_bind_group_layout(
            Some("effect_chain.bind_group_layout"),
            &[
                BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Texture {
                        multisampled: false,
                        view_dimension: TextureViewDimension::D2,
                        sample_type: TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 1,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Sampler(SamplerBindingType::Filtering),
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 2,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: BufferSize::new(16),
                    },
                    count: None,
                },
            ],
        );
        let sampler = render_device.create_sampler(&SamplerDescriptor {
            label: Some("effect_chain.sampler"),
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Nearest,
            ..Default::default()
        });
        chain.layout = Some(layout);
        chain.sampler = Some(sampler);
    }

    for (i, pass) in chain.passes.iter_mut().enumerate() {
        if pass.shader.is_none() {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(handles) = EMBEDDED_SHADERS.get() {
                    pass.shader = Some(handles[i].clone());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                pass.shader = Some(asset_server.load(PASS_SHADER_PATHS[i]));
            }
        }
        if pass.buffer.is_none() {
            pass.buffer = Some(render_device.create_buffer(&BufferDescriptor {
                label: Some("effect_chain.params"),
                size: 16,
                usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
        if let (Some(buffer), Some(params)) = (&pass.buffer, extracted.params[i]) {
            render_queue.write_buffer(buffer, 0, bytemuck::cast_slice(&params));
        }
    }

    // pipeline_id creation needs the shared layout borrow; do it after the
    // per-pass loop to keep the borrow checker happy
    for i in 0..PASS_COUNT {
        if chain.passes[i].pipeline_id.is_some() {
            continue;
        }
        let Some(shader) = chain.passes[i].shader.clone() else {
            continue;
        };
        let Some(layout) = chain.layout.clone() else {
            continue;
        };
        let descriptor = RenderPipelineDescriptor {
            label: Some(format!("effect_chain.pass{i}").into()),
            layout: vec![layout],
            vertex: VertexState {
                shader: shader.clone(),
                entry_point: "vs".into(),
                shader_defs: vec![],
                buffers: vec![],
            },
            fragment: Some(FragmentState {
                shader,
                entry_point: "fs".into(),
                shader_defs: vec![],
                targets: vec![Some(ColorTargetState {
                    // HDR camera: passes run on the pre-resolve HDR target
                    format: ViewTarget::TEXTURE_FORMAT_HDR,
                    blend: None,
                    write_mask: ColorWrites::ALL,
                })],
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: MultisampleState::default(),
            push_constant_ranges: vec![],
            zero_initialize_workgroup_memory: false,
        };
        chain.passes[i].pipeline_id = Some(pipeline_cache.queue_render_pipeline(descriptor));
    }
}

/// Runs every enabled pass back to back on the camera's view target.
struct EffectChainNode;

impl Node for EffectChainNode {
    fn run(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext,
        world: &World,
    ) -> Result<(), NodeRunError> {
        let extracted = world.resource::<ExtractedChain>();
        if extracted.params.iter().all(|p| p.is_none()) {
            return Ok(());
        }
        let chain = world.resource::<ChainPipelines>();
        let (Some(layout), Some(sampler)) = (&chain.layout, &chain.sampler) else {
            return Ok(());
        };
        let pipeline_cache = world.resource::<PipelineCache>();

        for entity_ref in world.iter_entities() {
            if entity_ref.get::<EffectChainCamera>().is_none() {
                continue;
            }
            if entity_ref.get::<ExtractedView>().is_none() {
                continue;
            }
            let Some(view_target) = entity_ref.get::<ViewTarget>() else {
                continue;
            };

            for i in 0..PASS_COUNT {
                if extracted.params[i].is_none() {
                    continue;
                }
                let Some(pipeline_id) = chain.passes[i].pipeline_id else {
                    continue;
                };
                let Some(pipeline) = pipeline_cache.get_render_pipeline(pipeline_id) else {
                    continue;
                };
                let Some(buffer) = &chain.passes[i].buffer else {
                    continue;
                };

                let post_process = view_target.post_process_write();
                let bind_group = render_context.render_device().create_bind_group(
                    Some("effect_chain.bind_group"),
                    layout,
                    &[
                        BindGroupEntry {
                            binding: 0,
                            resource: BindingResource::TextureView(post_process.source),
                        },
                        BindGroupEntry {
                            binding: 1,
                            resource: BindingResource::Sampler(sampler),
                        },
                        BindGroupEntry {
                            binding: 2,
                            resource: buffer.as_entire_binding(),
                        },
                    ],
                );

                let mut pass = render_context.begin_tracked_render_pass(RenderPassDescriptor {
                    label: Some("effect_chain_pass"),
                    color_attachments: &[Some(RenderPassColorAttachment {
                        view: post_process.destination,
                        resolve_target: None,
                        ops: Operations {
                            load: LoadOp::Load,
                            store: StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });
                pass.set_render_pipeline(pipeline);
                pass.set_bind_group(0, &bind_group, &[]);
                pass.draw(0..3, 0..1);
            }
        }
        Ok(())
    }
}
