//! Native window integration
//!
//! Native fullscreen is best effort. Requests go out as viewport commands and
//! the window reports the outcome on a later frame; a backend that cannot
//! report fullscreen state at all is treated as unsupported.

use crate::error::FullscreenError;

/// The window the controller asks for native fullscreen
pub trait FullscreenHost {
    /// Ask the window to enter native fullscreen
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Ask the window to leave native fullscreen
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;
}

/// Fullscreen through eframe viewport commands
pub struct EguiFullscreen {
    ctx: egui::Context,
}

impl EguiFullscreen {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }

    fn reported_state(&self) -> Option<bool> {
        native_fullscreen(&self.ctx)
    }
}

impl FullscreenHost for EguiFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.reported_state().is_none() {
            return Err(FullscreenError::Unsupported);
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.reported_state().is_none() {
            return Err(FullscreenError::Unsupported);
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        Ok(())
    }
}

/// Read the native fullscreen flag for this frame, if the backend reports one
pub fn native_fullscreen(ctx: &egui::Context) -> Option<bool> {
    ctx.input(|i| i.viewport().fullscreen)
}
