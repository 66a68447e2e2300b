use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartConfig, RenderScene, compute_scene};

/// Facade pairing the pure scene computation with a drawing backend.
///
/// The engine keeps no chart state between renders: every call recomputes the
/// scene from the config it is given.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Computes the scene for `config`, flattens it and hands the frame to the
    /// renderer. The scene is returned so hosts can hit-test against it.
    pub fn render(&mut self, config: &ChartConfig) -> ChartResult<RenderScene> {
        let scene = compute_scene(config);
        let frame = scene.to_frame();
        debug!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        self.renderer.render(&frame)?;
        Ok(scene)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
