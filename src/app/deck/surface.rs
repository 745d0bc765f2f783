/// Visual capability of one slide, supplied by the binding layer.
///
/// The navigation logic never reaches into widgets directly; it only flips
/// the marker through this trait. At most one surface is active at a time.
pub trait PresentationSurface {
    fn activate(&mut self);
    fn deactivate(&mut self);
}
