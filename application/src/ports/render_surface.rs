//! Rendering port
//!
//! Everything the application needs from a display surface. Surfaces
//! own their element trees; callers address them by target name (see
//! [`slapworld_domain::target`]).

use slapworld_domain::{Element, SelectOption};

/// Capability interface of a display surface
///
/// Implementations live in the presentation layer (terminal, test
/// doubles). All methods are infallible from the caller's point of view:
/// a missing target is reported through the return value or ignored.
pub trait RenderSurface {
    /// Resolve a template by identifier, returning a fresh copy of its content
    fn template(&self, template_id: &str) -> Option<Element>;

    /// Whether `container` exists on this surface
    fn has_container(&self, container: &str) -> bool;

    /// Append `element` as the last child of `container`.
    /// Returns `false` if the container does not exist.
    fn append(&mut self, container: &str, element: Element) -> bool;

    /// Remove every child of `container`
    fn clear(&mut self, container: &str);

    /// Replace the text of `target`
    fn set_text(&mut self, target: &str, text: &str);

    /// Replace the options of a picker
    fn set_options(&mut self, target: &str, options: Vec<SelectOption>);

    /// Show or hide `target`
    fn set_visible(&mut self, target: &str, visible: bool);

    /// Whether an image at `url` can be displayed. Surfaces that cannot
    /// know in advance should return `true` and swap in the element's
    /// `data-fallback-src` when loading actually fails.
    fn image_available(&self, url: &str) -> bool;
}
