use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton as WinitMouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{
    InputEvent, InputFrame, InputState, Key, KeyState, MouseButton, MouseButtonState,
    PointerButtonEvent, PointerMoveEvent,
};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "clockface".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    /// Asks the runtime to wake the event loop at `deadline` and schedule a
    /// redraw. When several deadlines are requested, the earliest wins.
    pub fn wake_at(&mut self, deadline: Instant) {
        self.commands.push(Command::WakeAt(deadline));
    }

    /// Schedules an immediate redraw (e.g. after a state change that does not
    /// come from an input event).
    pub fn request_redraw(&mut self) {
        self.commands.push(Command::RequestRedraw);
    }
}

enum Command {
    Exit,
    WakeAt(Instant),
    RequestRedraw,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = LoopState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct LoopState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,

    /// Earliest pending wake-up deadline, if any.
    wake_deadline: Option<Instant>,
    exit_requested: bool,
}

impl<A> LoopState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            wake_deadline: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .expect("GPU initialization failed for window")
            },
        }
        .build();

        self.entry = Some(entry);
        Ok(())
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::Exit => self.request_exit(),
                Command::WakeAt(deadline) => {
                    self.wake_deadline = match self.wake_deadline {
                        Some(current) => Some(current.min(deadline)),
                        None => Some(deadline),
                    };
                }
                Command::RequestRedraw => {
                    if let Some(entry) = &self.entry {
                        entry.with_window(|w| w.request_redraw());
                    }
                }
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for LoopState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        // A scheduled wake-up elapsed; let the application observe it in a frame.
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(entry) = &self.entry {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Sleep until the next scheduled wake-up, or indefinitely when none is
        // pending. Input events interrupt the wait and trigger redraws.
        match self.wake_deadline {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry) = (&mut self.app, &mut self.entry);

        let Some(entry) = entry else { return };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        // Track exit request from callbacks without mutating `self` in the closure.
        let mut exit_from_app_event = false;
        let mut input_changed = false;

        entry.with_mut(|fields| {
            if let Some(ev) = translate_input_event(fields.window, fields.input_state, &event) {
                fields.input_state.apply_event(fields.input_frame, ev);
                input_changed = true;
            }

            if app.on_window_event(window_id, &event) == AppControl::Exit {
                exit_from_app_event = true;
            }
        });

        if exit_from_app_event {
            self.request_exit();
            event_loop.exit();
            return;
        }

        if input_changed {
            entry.with_window(|w| w.request_redraw());
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.request_exit();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                let mut runtime_ctx = RuntimeCtx::default();
                let mut app_control = AppControl::Continue;

                // The pending deadline is consumed by this frame; the app
                // re-arms via `RuntimeCtx::wake_at` when it still needs one.
                self.wake_deadline = None;

                entry.with_mut(|fields| {
                    let ft: FrameTime = fields.clock.tick();

                    // Scope to ensure `ctx` is dropped before mutating frame state.
                    {
                        let mut ctx = FrameCtx {
                            window: WindowCtx {
                                id: window_id,
                                window: fields.window,
                            },
                            gpu: fields.gpu,
                            input: fields.input_state,
                            input_frame: fields.input_frame,
                            time: ft,
                            runtime: &mut runtime_ctx,
                        };

                        app_control = self.app.on_frame(&mut ctx);
                    }

                    // Clear per-frame deltas after the frame is consumed.
                    fields.input_frame.clear();
                });

                if app_control == AppControl::Exit {
                    runtime_ctx.exit();
                }

                self.apply_commands(event_loop, runtime_ctx);
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

fn translate_input_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };

            // winit reports button events without a position; reuse the last
            // cursor position seen via CursorMoved.
            let (x, y) = state.pointer_pos.unwrap_or((0.0, 0.0));

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: st,
                x,
                y,
            }))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Space => Key::Space,
            other => Key::Unknown(other as u32),
        },
        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
