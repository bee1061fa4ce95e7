/// Surface texture held between `start_frame` and `finish_frame`.
///
/// Holding the surface texture prevents acquisition of subsequent frames, so
/// the device presents it as soon as the frame is finished.
pub struct AcquiredFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}
