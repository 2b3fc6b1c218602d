//! wgpu Custom Render Callback für egui-Integration.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Custom wgpu Render Callback – kapselt die Renderer-Interaktion für egui
pub struct WgpuRenderCallback {
    /// Geteilter Renderer-Zustand (thread-safe)
    pub renderer: Arc<Mutex<Renderer>>,
    /// Die Render-Szene für diesen Frame
    pub scene: RenderScene,
}

impl egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        _device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        if !self.scene.has_area() {
            return Vec::new();
        }
        match self.renderer.lock() {
            Ok(mut renderer) => renderer.prepare(queue, &self.scene),
            Err(_) => log::error!("Renderer-Lock vergiftet, Frame wird nicht vorbereitet"),
        }
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &egui_wgpu::CallbackResources,
    ) {
        if !self.scene.has_area() {
            return;
        }
        match self.renderer.lock() {
            Ok(renderer) => renderer.paint(render_pass),
            Err(_) => log::error!("Renderer-Lock vergiftet, Frame wird nicht gezeichnet"),
        }
    }
}
