use rain_core::{
    FilterController, FilterRenderer, FilterUniforms, FrameClock, LogProgress, RainScene,
    ResourceGroup, Resources, SceneEvent, Ticker, DEFAULT_RESOURCE_ROOT, FRAGMENT_SHADER_KEY,
    INFO_TEXT, MOUSE_POINTER, VERTEX_SHADER_KEY,
};
use winit::dpi::{LogicalPosition, PhysicalPosition};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod assets;

const WINDOW_TITLE: &str =
    "Rain filter (drag horizontally: droplet size, vertically: humidity blur)";

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    filter: FilterRenderer,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, resources: &Resources) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let background = resources.background_or_placeholder();
        let filter = FilterRenderer::new(
            &device,
            &queue,
            format,
            &background,
            resources.text(VERTEX_SHADER_KEY)?,
            resources.text(FRAGMENT_SHADER_KEY)?,
        );
        log::info!(
            "[gpu] surface {}x{} {:?}, background {}x{}",
            config.width,
            config.height,
            format,
            background.width,
            background.height
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            width: config.width,
            height: config.height,
            config,
            filter,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    fn render(&mut self, uniforms: &FilterUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.filter.write_uniforms(&self.queue, uniforms);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.filter.draw(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

async fn load_resources(root: &str) -> Resources {
    let mut resources = Resources::with_builtin_shaders();
    let source = assets::DirSource::new(root);
    if let Err(e) = resources
        .load_group(&source, &ResourceGroup::preload(), &mut LogProgress)
        .await
    {
        log::error!("[res] preload from `{}` failed: {}", root, e);
    }
    resources
}

fn stage_position(position: PhysicalPosition<f64>, scale_factor: f64) -> LogicalPosition<f32> {
    position.to_logical::<f32>(scale_factor)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let root = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_RESOURCE_ROOT.to_string());
    let resources = pollster::block_on(load_resources(&root));

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, &resources))?;
    let mut scene = RainScene::new(FilterController::default(), FrameClock::new());
    let mut cursor = LogicalPosition::new(0.0_f32, 0.0_f32);
    log::info!("{}", INFO_TEXT);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Occluded(hidden) => {
                scene.handle(if hidden {
                    SceneEvent::Pause
                } else {
                    SceneEvent::Resume
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = stage_position(position, gpu.window.scale_factor());
                scene.handle(SceneEvent::PointerMove {
                    id: MOUSE_POINTER,
                    x: cursor.x,
                    y: cursor.y,
                });
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    scene.handle(SceneEvent::PointerDown {
                        id: MOUSE_POINTER,
                        x: cursor.x,
                        y: cursor.y,
                    });
                }
                ElementState::Released => {
                    scene.handle(SceneEvent::PointerUp { id: MOUSE_POINTER });
                }
            },
            WindowEvent::Touch(touch) => {
                let p = stage_position(touch.location, gpu.window.scale_factor());
                let id = touch.id;
                let ev = match touch.phase {
                    TouchPhase::Started => SceneEvent::PointerDown { id, x: p.x, y: p.y },
                    TouchPhase::Moved => SceneEvent::PointerMove { id, x: p.x, y: p.y },
                    TouchPhase::Ended | TouchPhase::Cancelled => SceneEvent::PointerUp { id },
                };
                scene.handle(ev);
            }
            WindowEvent::RedrawRequested => {
                if scene.ticker().is_paused() {
                    return;
                }
                let now_sec = scene.ticker().now_seconds();
                scene.handle(SceneEvent::Frame { now_sec });
                let uniforms = scene.uniforms(gpu.resolution(), gpu.filter.image_size());
                match gpu.render(&uniforms) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.resize(gpu.window.inner_size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[gpu] out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
                }
            }
            _ => {}
        },
        Event::Suspended => {
            scene.handle(SceneEvent::Pause);
        }
        Event::Resumed => {
            scene.handle(SceneEvent::Resume);
        }
        Event::AboutToWait => gpu.window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
