//! Card rendering over the [`RenderSurface`](crate::ports::render_surface::RenderSurface) port

pub mod card_renderer;
